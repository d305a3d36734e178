//! Tests for fetch and plan argument parsing.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;
use std::path::Path;

#[test]
fn cli_parse_fetch_defaults() {
    match parse(&["htd", "fetch"]) {
        CliCommand::Fetch {
            range,
            output,
            batch_folder,
            delay,
            yes,
        } => {
            assert!(range.branch.is_none());
            assert!(range.start.is_none());
            assert!(output.is_none());
            assert!(!batch_folder);
            assert!(delay.is_none());
            assert!(!yes);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_fetch_full() {
    match parse(&[
        "htd", "fetch", "--branch", "66", "--prefix", "24075A", "--start", "05", "--end", "K6",
        "--limit", "K6", "-o", "/tmp/tickets", "--batch-folder", "--delay", "1.5", "-y",
    ]) {
        CliCommand::Fetch {
            range,
            output,
            batch_folder,
            delay,
            yes,
        } => {
            assert_eq!(range.branch.as_deref(), Some("66"));
            assert_eq!(range.prefix.as_deref(), Some("24075A"));
            assert_eq!(range.start.as_deref(), Some("05"));
            assert_eq!(range.end.as_deref(), Some("K6"));
            assert_eq!(range.limit.as_deref(), Some("K6"));
            assert_eq!(output.as_deref(), Some(Path::new("/tmp/tickets")));
            assert!(batch_folder);
            assert_eq!(delay, Some(1.5));
            assert!(yes);
        }
        _ => panic!("expected Fetch"),
    }
}

#[test]
fn cli_parse_plan_short_flags() {
    match parse(&["htd", "plan", "-b", "05", "-s", "1", "-e", "A2"]) {
        CliCommand::Plan { range } => {
            assert_eq!(range.branch.as_deref(), Some("05"));
            assert_eq!(range.start.as_deref(), Some("1"));
            assert_eq!(range.end.as_deref(), Some("A2"));
            assert!(range.limit.is_none());
        }
        _ => panic!("expected Plan"),
    }
}

#[test]
fn cli_parse_global_config() {
    let cli = Cli::try_parse_from(["htd", "plan", "--config", "/etc/htd.toml"]).unwrap();
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/htd.toml")));
}

#[test]
fn cli_parse_rejects_bad_delay() {
    assert!(Cli::try_parse_from(["htd", "fetch", "--delay", "soon"]).is_err());
}

#[test]
fn cli_parse_requires_subcommand() {
    assert!(Cli::try_parse_from(["htd"]).is_err());
}
