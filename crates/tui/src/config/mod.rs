use chrono_tz::Tz;
use clap::Parser;
use serde::Deserialize;

use crate::error::{AppError, Result};

const DEFAULT_CONFIG_PATH: &str = "config/ledger_tui.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub currency_symbol: String,
    pub timezone: String,
    pub log_file: Option<String>,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            currency_symbol: engine::DEFAULT_CURRENCY_SYMBOL.to_string(),
            timezone: "UTC".to_string(),
            log_file: None,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Zone that decides which calendar day is "today".
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|err| AppError::Timezone(format!("{}: {err}", self.timezone)))
    }
}

#[derive(Debug, Parser)]
#[command(name = "ledger_tui", disable_version_flag = true)]
struct Args {
    /// Optional config file path (TOML).
    #[arg(long)]
    config: Option<String>,
    /// Override the symbol shown before balances.
    #[arg(long)]
    currency_symbol: Option<String>,
    /// Override timezone (IANA name) used for today's date.
    #[arg(long)]
    timezone: Option<String>,
    /// Write logs to this file. Nothing is logged without it.
    #[arg(long)]
    log_file: Option<String>,
    /// Log filter used when RUST_LOG is not set.
    #[arg(long)]
    log_level: Option<String>,
}

pub fn load() -> Result<AppConfig> {
    let args = Args::parse();

    let config_path = args.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut builder = config::Config::builder();
    builder = builder.add_source(config::File::with_name(config_path).required(false));
    builder = builder.add_source(config::Environment::with_prefix("LEDGER_TUI"));
    let mut settings: AppConfig = builder.build()?.try_deserialize()?;

    if let Some(currency_symbol) = args.currency_symbol {
        settings.currency_symbol = currency_symbol;
    }
    if let Some(timezone) = args.timezone {
        settings.timezone = timezone;
    }
    if let Some(log_file) = args.log_file {
        settings.log_file = Some(log_file);
    }
    if let Some(log_level) = args.log_level {
        settings.log_level = log_level;
    }

    settings.tz()?;
    Ok(settings)
}
