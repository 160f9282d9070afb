use std::ops::RangeInclusive;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// Operator-supplied stop-loss distance must stay inside this band.
pub const STOP_LOSS_PIPS_RANGE: RangeInclusive<u32> = 5..=50;
/// Evaluation interval band, in seconds.
pub const REFRESH_SECS_RANGE: RangeInclusive<u64> = 10..=300;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub signal: SignalConfig,
    pub signal_log: SignalLogConfig,
    pub email: EmailConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalConfig {
    /// Display label for the monitored pair, e.g. "EUR/USD".
    pub pair: String,
    pub stop_loss_pips: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignalLogConfig {
    pub path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EmailConfig {
    pub enabled: bool,
    pub smtp_host: String,
    pub smtp_port: u16,
    /// Operator address, used as both sender and recipient. Falls back to
    /// EMAIL_USER when empty.
    #[serde(default)]
    pub address: String,
    #[serde(skip)]
    pub username: String,
    #[serde(skip)]
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UiConfig {
    pub refresh_interval_secs: u64,
    pub log_table_rows: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Config {
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let config_path = Path::new("config/default.toml");
        let config_str = std::fs::read_to_string(config_path)
            .with_context(|| format!("failed to read {}", config_path.display()))?;

        let mut config: Config =
            toml::from_str(&config_str).context("failed to parse config/default.toml")?;

        if config.email.enabled {
            config.email.username = std::env::var("EMAIL_USER")
                .context("EMAIL_USER not set in .env or environment")?;
            config.email.password = std::env::var("EMAIL_PASS")
                .context("EMAIL_PASS not set in .env or environment")?;
            if config.email.address.trim().is_empty() {
                config.email.address = config.email.username.clone();
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Boundary validation of operator inputs. The core never re-checks
    /// these; anything out of range is rejected before the app starts.
    pub fn validate(&self) -> Result<()> {
        if !STOP_LOSS_PIPS_RANGE.contains(&self.signal.stop_loss_pips) {
            bail!(
                "signal.stop_loss_pips must be within {}..={} pips, got {}",
                STOP_LOSS_PIPS_RANGE.start(),
                STOP_LOSS_PIPS_RANGE.end(),
                self.signal.stop_loss_pips
            );
        }
        if !REFRESH_SECS_RANGE.contains(&self.ui.refresh_interval_secs) {
            bail!(
                "ui.refresh_interval_secs must be within {}..={} seconds, got {}",
                REFRESH_SECS_RANGE.start(),
                REFRESH_SECS_RANGE.end(),
                self.ui.refresh_interval_secs
            );
        }
        if self.signal_log.path.trim().is_empty() {
            bail!("signal_log.path must not be empty");
        }
        if self.ui.log_table_rows == 0 {
            bail!("ui.log_table_rows must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(stop_loss_pips: u32, refresh_secs: u64) -> Config {
        let toml_str = format!(
            r#"
[signal]
pair = "EUR/USD"
stop_loss_pips = {stop_loss_pips}

[signal_log]
path = "trade_immediate_signal_log.csv"

[email]
enabled = false
smtp_host = "smtp.gmail.com"
smtp_port = 465

[ui]
refresh_interval_secs = {refresh_secs}
log_table_rows = 12

[logging]
level = "info"
"#
        );
        toml::from_str(&toml_str).unwrap()
    }

    #[test]
    fn parse_default_toml() {
        let config = sample_config(20, 60);
        assert_eq!(config.signal.pair, "EUR/USD");
        assert_eq!(config.signal.stop_loss_pips, 20);
        assert_eq!(config.signal_log.path, "trade_immediate_signal_log.csv");
        assert!(!config.email.enabled);
        assert_eq!(config.email.smtp_port, 465);
        assert_eq!(config.ui.refresh_interval_secs, 60);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn validate_accepts_range_boundaries() {
        assert!(sample_config(5, 10).validate().is_ok());
        assert!(sample_config(50, 300).validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_stop_loss() {
        assert!(sample_config(4, 60).validate().is_err());
        assert!(sample_config(51, 60).validate().is_err());
    }

    #[test]
    fn validate_rejects_out_of_range_refresh_interval() {
        assert!(sample_config(20, 9).validate().is_err());
        assert!(sample_config(20, 301).validate().is_err());
    }

    #[test]
    fn validate_rejects_empty_log_path() {
        let mut config = sample_config(20, 60);
        config.signal_log.path = "  ".to_string();
        assert!(config.validate().is_err());
    }
}
