//! Pick command implementation.
//!
//! Reads one JSON or TOML document and resolves each requested dot path
//! against it.

mod error;
mod input;
mod output;

pub use error::PickError;
pub use input::{Document, toml_to_json};

use anyhow::Result;

use crate::cli::PickArgs;
use crate::config::Config;
use crate::{debug, debug_do, log};

/// Execute pick command
pub fn run_pick(args: &PickArgs, config: &Config) -> Result<()> {
    let input = args.input_path();
    let format = config.pick.format.resolve(input);
    debug!(
        "pick";
        "reading {} as {:?}",
        input.map_or_else(|| String::from("stdin"), |p| p.display().to_string()),
        format
    );

    let document = Document::read(input, format)?;
    let picked = document.pick_all(&args.paths);

    let absent: Vec<String> = picked
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(path, _)| (*path).to_string())
        .collect();
    for path in &absent {
        log!("pick"; "absent: {}", path);
    }
    debug_do! {
        let found = picked.len() - absent.len();
        debug!("pick"; "{} of {} paths found", found, picked.len());
    }

    if let Some(rendered) = output::render(&picked, args.filter_absent, config.pick.pretty)? {
        println!("{rendered}");
    }

    if args.strict && !absent.is_empty() {
        return Err(PickError::Absent(absent).into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use clap::Parser;
    use std::fs;

    fn pick_args(args: &[&str]) -> PickArgs {
        let cli = Cli::parse_from(std::iter::once("pathpipe").chain(args.iter().copied()));
        match cli.command {
            Commands::Pick { args } => args,
            Commands::Clock { .. } => panic!("expected pick"),
        }
    }

    #[test]
    fn test_run_pick_present() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dan.json");
        let dan = r#"{"data": {"info": {"fullname": {"first": "Dan"}}}}"#;
        fs::write(&path, dan).unwrap();

        let input = path.to_str().unwrap();
        let args = pick_args(&["pick", "data.info.fullname.first", "-i", input]);
        assert!(run_pick(&args, &Config::default()).is_ok());
    }

    #[test]
    fn test_run_pick_absent_is_ok_without_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.toml");
        fs::write(&path, "[a]\nb = 1").unwrap();

        let args = pick_args(&["pick", "a.b.c", "-i", path.to_str().unwrap()]);
        assert!(run_pick(&args, &Config::default()).is_ok());
    }

    #[test]
    fn test_run_pick_strict_reports_absent_paths() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        fs::write(&path, r#"{"a": {"b": 1}}"#).unwrap();

        let args = pick_args(&[
            "pick",
            "a.b",
            "a.b.c",
            "x",
            "--strict",
            "-i",
            path.to_str().unwrap(),
        ]);
        let err = run_pick(&args, &Config::default()).unwrap_err();
        match err.downcast_ref::<PickError>() {
            Some(PickError::Absent(paths)) => assert_eq!(paths, &["a.b.c", "x"]),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_run_pick_invalid_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{").unwrap();

        let args = pick_args(&["pick", "a", "-i", path.to_str().unwrap()]);
        let err = run_pick(&args, &Config::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<PickError>(),
            Some(PickError::Json(_))
        ));
    }
}
