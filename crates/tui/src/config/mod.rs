use clap::Parser;
use ledger::TransactionKind;
use serde::Deserialize;

use crate::error::Result;

const DEFAULT_CONFIG_PATH: &str = "config/balance_sheet.toml";
const ENV_PREFIX: &str = "BALANCE_SHEET";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub default_kind: TransactionKind,
    pub log_level: String,
    pub log_file: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Balance Sheet".to_string(),
            default_kind: TransactionKind::Credit,
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "balance_sheet_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the heading shown above the form.
    #[arg(long)]
    title: Option<String>,
    /// Type selected in the form on start (credit or debit).
    #[arg(long)]
    default_kind: Option<TransactionKind>,
    /// Override log level (e.g. debug).
    #[arg(long)]
    log_level: Option<String>,
    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    load_from(Args::parse())
}

fn load_from(args: Args) -> Result<AppConfig> {
    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix(ENV_PREFIX));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(title) = args.title {
        settings.title = title;
    }
    if let Some(kind) = args.default_kind {
        settings.default_kind = kind;
    }
    if let Some(level) = args.log_level {
        settings.log_level = level;
    }
    if let Some(path) = args.log_file {
        settings.log_file = Some(path);
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["balance_sheet_tui"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    fn write_config(name: &str, body: &str) -> PathBuf {
        let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../target/test_configs");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join(name);
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = load_from(args(&["--config", "does/not/exist.toml"])).unwrap();
        assert_eq!(settings.title, "Balance Sheet");
        assert_eq!(settings.default_kind, TransactionKind::Credit);
        assert_eq!(settings.log_file, None);
    }

    #[test]
    fn file_values_are_read() {
        let path = write_config(
            "file_values.toml",
            "title = \"Household\"\ndefault_kind = \"debit\"\nlog_level = \"debug\"\n",
        );
        let settings = load_from(args(&["--config", path.to_str().unwrap()])).unwrap();
        assert_eq!(settings.title, "Household");
        assert_eq!(settings.default_kind, TransactionKind::Debit);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn cli_overrides_file() {
        let path = write_config("cli_overrides.toml", "default_kind = \"debit\"\n");
        let settings = load_from(args(&[
            "--config",
            path.to_str().unwrap(),
            "--default-kind",
            "credit",
            "--title",
            "Trip",
            "--log-file",
            "trip.log",
        ]))
        .unwrap();
        assert_eq!(settings.default_kind, TransactionKind::Credit);
        assert_eq!(settings.title, "Trip");
        assert_eq!(settings.log_file.as_deref(), Some("trip.log"));
    }

    #[test]
    fn unknown_kind_on_cli_is_refused() {
        let argv = ["balance_sheet_tui", "--default-kind", "refund"];
        assert!(Args::try_parse_from(argv).is_err());
    }
}
