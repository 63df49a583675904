use std::path::Path;

use chrono::TimeZone;
use clap::Parser;

use super::*;
use crate::run::{default_output_path, resolve_website_column};

#[test]
fn no_command_is_none() {
    let cli = Cli::try_parse_from(["bizlens-cli"]).expect("expected valid cli args");
    assert!(cli.command.is_none());
}

#[test]
fn parses_run_with_defaults() {
    let cli = Cli::try_parse_from(["bizlens-cli", "run", "--input", "leads.csv"]).unwrap();
    let Some(Commands::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.input, PathBuf::from("leads.csv"));
    assert!(args.output.is_none());
    assert!(args.website_column.is_none());
    assert!(args.batch_size.is_none());
}

#[test]
fn parses_run_with_overrides() {
    let cli = Cli::try_parse_from([
        "bizlens-cli",
        "run",
        "-i",
        "leads.csv",
        "-o",
        "out.csv",
        "--website-column",
        "Homepage",
        "--batch-size",
        "10",
    ])
    .unwrap();
    let Some(Commands::Run(args)) = cli.command else {
        panic!("expected run command");
    };
    assert_eq!(args.output, Some(PathBuf::from("out.csv")));
    assert_eq!(args.website_column.as_deref(), Some("Homepage"));
    assert_eq!(args.batch_size, Some(10));
}

#[test]
fn run_requires_input() {
    assert!(Cli::try_parse_from(["bizlens-cli", "run"]).is_err());
}

#[test]
fn run_rejects_non_numeric_batch_size() {
    let result = Cli::try_parse_from(["bizlens-cli", "run", "-i", "a.csv", "--batch-size", "lots"]);
    assert!(result.is_err());
}

#[test]
fn parses_inspect_with_default_preview() {
    let cli = Cli::try_parse_from(["bizlens-cli", "inspect", "--input", "leads.csv"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Inspect { rows: 5, .. })
    ));
}

#[test]
fn parses_candidates() {
    let cli = Cli::try_parse_from(["bizlens-cli", "candidates", "acme.com"]).unwrap();
    assert!(matches!(
        cli.command,
        Some(Commands::Candidates { ref identifier }) if identifier == "acme.com"
    ));
}

#[test]
fn website_column_override_must_exist() {
    let table = bizlens_core::Table::new(["name", "site"]);
    assert_eq!(resolve_website_column(&table, Some("site")).unwrap(), "site");
    assert!(resolve_website_column(&table, Some("homepage")).is_err());
}

#[test]
fn website_column_is_auto_detected() {
    let table = bizlens_core::Table::new(["name", "URL"]);
    assert_eq!(resolve_website_column(&table, None).unwrap(), "URL");
}

#[test]
fn default_output_lands_next_to_input() {
    let now = chrono::Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
    assert_eq!(
        default_output_path(Path::new("data/leads.csv"), now),
        PathBuf::from("data/ai_batch_insights_1735689600.csv")
    );
    assert_eq!(
        default_output_path(Path::new("leads.csv"), now),
        PathBuf::from("ai_batch_insights_1735689600.csv")
    );
}

fn broken_config() -> Result<AppConfig, ConfigError> {
    Err(ConfigError::InvalidEnvVar {
        var: "BIZLENS_BATCH_SIZE".to_string(),
        reason: "not a number".to_string(),
    })
}

#[tokio::test]
async fn candidates_runs_without_valid_config() {
    let command = Commands::Candidates {
        identifier: "acme.com".to_string(),
    };
    dispatch(command, broken_config)
        .await
        .expect("candidates must not load config");
}

#[tokio::test]
async fn inspect_runs_without_valid_config() {
    let input = std::env::temp_dir().join(format!("bizlens-inspect-{}.csv", std::process::id()));
    std::fs::write(&input, "name,website\nAcme,acme.com\n").unwrap();

    let command = Commands::Inspect {
        input: input.clone(),
        rows: 5,
    };
    let result = dispatch(command, broken_config).await;
    std::fs::remove_file(&input).ok();
    result.expect("inspect must not load config");
}

#[tokio::test]
async fn run_reports_invalid_config() {
    let command = Commands::Run(RunArgs {
        input: PathBuf::from("leads.csv"),
        output: None,
        website_column: None,
        batch_size: None,
    });
    let err = dispatch(command, broken_config)
        .await
        .expect_err("run needs config");
    assert!(err.to_string().contains("BIZLENS_BATCH_SIZE"), "got: {err}");
}

#[test]
fn log_directive_prefers_rust_log() {
    assert_eq!(
        log_directive(Some("debug".into()), Some("warn".into())),
        "debug"
    );
}

#[test]
fn log_directive_falls_back_to_configured_level_then_info() {
    assert_eq!(log_directive(None, Some("warn".into())), "warn");
    assert_eq!(log_directive(Some("  ".into()), None), "info");
    assert_eq!(log_directive(None, None), "info");
}
