//! classmerge - merge utility class lists from the command line

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::LevelFilter;
use shared::{ClassFragment, ConfigError, Merger};
use thiserror::Error;

mod config;

use config::Config;

#[derive(Parser)]
#[command(name = "classmerge")]
#[command(about = "Merge utility class lists, keeping the last of each conflicting class")]
#[command(version)]
struct Cli {
    /// Class fragments merged into one list. Reads one list per line from
    /// stdin when omitted.
    classes: Vec<String>,

    /// Number of merge results to cache, 0 disables (env: CLASSMERGE_CACHE_SIZE)
    #[arg(long)]
    cache_size: Option<usize>,

    /// JSON merge config file (env: CLASSMERGE_CONFIG)
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Set logging level, overridden by RUST_LOG
    #[arg(short = 'l', long, default_value = "warn")]
    log_level: LevelFilter,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("CLASSMERGE_CACHE_SIZE must be a number, got {0:?}")]
    InvalidCacheSize(String),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn main() -> ExitCode {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    env_logger::init_from_env(
        env_logger::Env::default().default_filter_or(cli.log_level.to_string()),
    );

    let result = Config::from_env().and_then(|settings| {
        let settings = settings.with_overrides(cli.cache_size, cli.config);
        run(settings, &cli.classes, io::stdin().lock(), &mut io::stdout().lock())
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

/// Merges `classes` into one line, or each line of `input` when `classes` is empty.
fn run(
    settings: Config,
    classes: &[String],
    input: impl BufRead,
    out: &mut impl Write,
) -> Result<(), CliError> {
    let config = settings.into_merge_config()?;
    log::debug!("Merge config: {:?}", config);
    let merger = Merger::new(config);

    if !classes.is_empty() {
        let fragments: Vec<ClassFragment> = classes.iter().map(ClassFragment::from).collect();
        writeln!(out, "{}", merger.merge_fragments(&fragments))?;
        return Ok(());
    }

    log::info!("Reading class lists from stdin");
    for line in input.lines() {
        writeln!(out, "{}", merger.merge(&line?))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_to_string(settings: Config, classes: &[&str], input: &str) -> Result<String, CliError> {
        let classes: Vec<String> = classes.iter().map(|c| c.to_string()).collect();
        let mut out = Vec::new();
        run(settings, &classes, input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::parse_from([
            "classmerge",
            "--cache-size",
            "0",
            "-l",
            "debug",
            "p-2",
            "p-4",
        ]);
        assert_eq!(cli.cache_size, Some(0));
        assert_eq!(cli.log_level, LevelFilter::Debug);
        assert_eq!(cli.classes, vec!["p-2", "p-4"]);
        assert!(cli.config.is_none());
    }

    #[test]
    fn test_cli_default_log_level() {
        let cli = Cli::parse_from(["classmerge"]);
        assert_eq!(cli.log_level, LevelFilter::Warn);
        assert!(cli.classes.is_empty());
    }

    #[test]
    fn test_run_merges_arguments_into_one_line() {
        let output = run_to_string(Config::default(), &["p-2", "p-4"], "ignored\n").unwrap();
        assert_eq!(output, "p-4\n");

        let output =
            run_to_string(Config::default(), &["text-red-500 px-2", "text-blue-500"], "").unwrap();
        assert_eq!(output, "px-2 text-blue-500\n");
    }

    #[test]
    fn test_run_merges_stdin_line_by_line() {
        let output = run_to_string(
            Config::default(),
            &[],
            "p-2 p-4\ntext-red-500 text-blue-500\n",
        )
        .unwrap();
        assert_eq!(output, "p-4\ntext-blue-500\n");

        assert_eq!(run_to_string(Config::default(), &[], "").unwrap(), "");
    }

    #[test]
    fn test_run_reports_config_errors() {
        let missing = Config {
            config_path: Some(PathBuf::from("/nonexistent/classmerge.json")),
            ..Config::default()
        };
        assert!(matches!(
            run_to_string(missing, &["p-2"], ""),
            Err(CliError::Config(ConfigError::Io(_)))
        ));

        let path = std::env::temp_dir().join(format!("classmerge-run-{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "separator": " " }"#).unwrap();
        let invalid = Config {
            config_path: Some(path.clone()),
            ..Config::default()
        };
        let result = run_to_string(invalid, &["p-2"], "");
        std::fs::remove_file(path).unwrap();
        assert!(matches!(result, Err(CliError::Config(ConfigError::Json(_)))));
    }
}
