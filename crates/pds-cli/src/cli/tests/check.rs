//! Tests for the check subcommand.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_check_single_url() {
    match parse(&["pds", "check", "https://example.com"]) {
        CliCommand::Check { urls, endpoint, json } => {
            assert_eq!(urls, vec!["https://example.com".to_string()]);
            assert!(endpoint.is_none());
            assert!(!json);
        }
        _ => panic!("expected Check"),
    }
}

#[test]
fn cli_parse_check_multiple_urls() {
    match parse(&["pds", "check", "https://a.example", "http://b.example"]) {
        CliCommand::Check { urls, .. } => {
            assert_eq!(urls.len(), 2);
            assert_eq!(urls[1], "http://b.example");
        }
        _ => panic!("expected Check with two URLs"),
    }
}

#[test]
fn cli_parse_check_endpoint_override() {
    match parse(&[
        "pds",
        "check",
        "https://example.com",
        "--endpoint",
        "http://10.0.0.2:5000",
    ]) {
        CliCommand::Check { endpoint, .. } => {
            assert_eq!(endpoint.as_deref(), Some("http://10.0.0.2:5000"));
        }
        _ => panic!("expected Check with --endpoint"),
    }
}

#[test]
fn cli_parse_check_json() {
    match parse(&["pds", "check", "--json", "https://example.com"]) {
        CliCommand::Check { json, .. } => assert!(json),
        _ => panic!("expected Check with --json"),
    }
}

#[test]
fn cli_parse_check_requires_a_url() {
    assert!(Cli::try_parse_from(["pds", "check"]).is_err());
}
