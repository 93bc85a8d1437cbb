use std::collections::{BTreeMap, HashMap};

/// A single input to the class-name composer.
///
/// Fragments are built through `From` conversions so call sites can mix
/// plain strings, optional values, `(class, condition)` pairs and
/// class→bool maps in one `cn!` invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClassFragment {
    #[default]
    Empty,
    /// Text, possibly holding several whitespace-separated classes.
    Text(String),
    /// Class names paired with whether they are active.
    Toggles(Vec<(String, bool)>),
    List(Vec<ClassFragment>),
}

impl ClassFragment {
    pub fn is_empty(&self) -> bool {
        match self {
            ClassFragment::Empty => true,
            ClassFragment::Text(text) => text.trim().is_empty(),
            ClassFragment::Toggles(toggles) => toggles
                .iter()
                .all(|(class, on)| !on || class.trim().is_empty()),
            ClassFragment::List(items) => items.iter().all(ClassFragment::is_empty),
        }
    }

    fn collect_into<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            ClassFragment::Empty => {}
            ClassFragment::Text(text) => out.extend(text.split_whitespace()),
            ClassFragment::Toggles(toggles) => {
                for (class, on) in toggles {
                    if *on {
                        out.extend(class.split_whitespace());
                    }
                }
            }
            ClassFragment::List(items) => {
                for item in items {
                    item.collect_into(out);
                }
            }
        }
    }
}

/// Flattens fragments into a space-separated class string.
///
/// Inactive fragments are skipped. No deduplication or conflict resolution
/// happens here; that is the job of [`crate::tw_merge`].
pub fn join_fragments(fragments: &[ClassFragment]) -> String {
    let mut tokens = Vec::new();
    for fragment in fragments {
        fragment.collect_into(&mut tokens);
    }
    tokens.join(" ")
}

impl From<&str> for ClassFragment {
    fn from(value: &str) -> Self {
        ClassFragment::Text(value.to_string())
    }
}

impl From<String> for ClassFragment {
    fn from(value: String) -> Self {
        ClassFragment::Text(value)
    }
}

impl From<&String> for ClassFragment {
    fn from(value: &String) -> Self {
        ClassFragment::Text(value.clone())
    }
}

/// A bare boolean never names a class, mirroring `cond && "class"` when the
/// condition is false.
impl From<bool> for ClassFragment {
    fn from(_: bool) -> Self {
        ClassFragment::Empty
    }
}

impl From<()> for ClassFragment {
    fn from(_: ()) -> Self {
        ClassFragment::Empty
    }
}

impl<T: Into<ClassFragment>> From<Option<T>> for ClassFragment {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

impl<S: Into<String>> From<(S, bool)> for ClassFragment {
    fn from((class, on): (S, bool)) -> Self {
        ClassFragment::Toggles(vec![(class.into(), on)])
    }
}

impl<T: Into<ClassFragment>> From<Vec<T>> for ClassFragment {
    fn from(value: Vec<T>) -> Self {
        ClassFragment::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassFragment>, const N: usize> From<[T; N]> for ClassFragment {
    fn from(value: [T; N]) -> Self {
        ClassFragment::List(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ClassFragment> + Clone> From<&[T]> for ClassFragment {
    fn from(value: &[T]) -> Self {
        ClassFragment::List(value.iter().cloned().map(Into::into).collect())
    }
}

impl<K: Into<String>> From<BTreeMap<K, bool>> for ClassFragment {
    fn from(value: BTreeMap<K, bool>) -> Self {
        ClassFragment::Toggles(value.into_iter().map(|(k, on)| (k.into(), on)).collect())
    }
}

/// Iteration order of a `HashMap` is unspecified, so entries are sorted by
/// class name to keep the output stable.
impl<K: Into<String>, S> From<HashMap<K, bool, S>> for ClassFragment {
    fn from(value: HashMap<K, bool, S>) -> Self {
        let mut toggles: Vec<(String, bool)> =
            value.into_iter().map(|(k, on)| (k.into(), on)).collect();
        toggles.sort_by(|a, b| a.0.cmp(&b.0));
        ClassFragment::Toggles(toggles)
    }
}
