//! Class-name composition for utility-first CSS.
//!
//! [`join_fragments`] flattens conditional class fragments, [`tw_merge`]
//! resolves conflicts between utility classes through the `tw_merge` crate,
//! and [`cn!`] does both.

pub mod config;
pub mod fragment;
pub mod merge;

pub use config::{ConfigError, MergeConfig};
pub use fragment::{join_fragments, ClassFragment};
pub use merge::{cn, tw_merge, Merger};

/// Composes class fragments into one conflict-free class string.
///
/// Every argument is converted with `ClassFragment::from`, so strings,
/// `Option`s, booleans, `(class, condition)` pairs, lists and class→bool
/// maps can be mixed freely.
///
/// ```
/// use shared::cn;
///
/// let active = true;
/// assert_eq!(cn!("p-2", false, "p-4"), "p-4");
/// assert_eq!(cn!("btn", ("btn-active", active), None::<&str>), "btn btn-active");
/// ```
#[macro_export]
macro_rules! cn {
    () => {
        ::std::string::String::new()
    };
    ($($fragment:expr),+ $(,)?) => {
        $crate::cn(&[$($crate::ClassFragment::from($fragment)),+])
    };
}
