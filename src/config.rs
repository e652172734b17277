/**
* filename : config
* author : HAMA
* date: 2025. 5. 8.
* description:
**/

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::TradingError;
use crate::market_data::mock::DEFAULT_MOCK_ROWS;
use crate::market_data::validate_pair;
use crate::strategies::StrategyConfig;

pub const DEFAULT_CONFIG_PATH: &str = "config.json";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub data: DataConfig,
    pub strategy: StrategyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    pub pair: String,
    pub rows: usize,
    pub csv_path: Option<String>,
    pub csv_delimiter: char,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
        }
    }
}

impl Default for DataConfig {
    fn default() -> Self {
        DataConfig {
            pair: "EUR/USD".to_string(),
            rows: DEFAULT_MOCK_ROWS,
            csv_path: None,
            csv_delimiter: ',',
        }
    }
}

impl Config {
    /// Load configuration from `config.json` in the working directory, or defaults
    pub fn load() -> Result<Self, TradingError> {
        Self::load_from(Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Load configuration from a file; a missing file yields the defaults.
    ///
    /// Only parses and applies environment overrides. Call `validate` once
    /// every override (including command-line flags) is in place.
    pub fn load_from(config_path: &Path) -> Result<Self, TradingError> {
        let mut cfg = if config_path.exists() {
            let contents = fs::read_to_string(config_path)
                .map_err(|e| TradingError::ConfigError(format!("Failed to read config file: {}", e)))?;

            Self::from_json(&contents)?
        } else {
            Config::default()
        };

        // environment overrides
        cfg.apply_env_overrides()?;
        Ok(cfg)
    }

    pub fn from_json(contents: &str) -> Result<Self, TradingError> {
        serde_json::from_str(contents)
            .map_err(|e| TradingError::ConfigError(format!("Failed to parse config file: {}", e)))
    }

    pub fn validate(&self) -> Result<(), TradingError> {
        validate_pair(&self.data.pair)?;
        self.strategy.validate()
    }

    /// Apply environment variable overrides for runtime fields
    fn apply_env_overrides(&mut self) -> Result<(), TradingError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), TradingError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());

        if let Some(v) = get("SIGNAL_PAIR") { self.data.pair = v; }
        if let Some(v) = get("SIGNAL_CSV_PATH") { self.data.csv_path = Some(v); }
        if let Some(v) = get("SIGNAL_ROWS") {
            self.data.rows = v
                .parse()
                .map_err(|_| TradingError::ConfigError(format!("SIGNAL_ROWS is not a valid row count: {}", v)))?;
        }
        if let Some(v) = get("USE_SMA").and_then(|v| parse_flag(&v)) { self.strategy.use_sma = v; }
        if let Some(v) = get("USE_RSI").and_then(|v| parse_flag(&v)) { self.strategy.use_rsi = v; }
        if let Some(v) = get("USE_VOL").and_then(|v| parse_flag(&v)) { self.strategy.use_vol = v; }

        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    let lower = value.to_lowercase();
    if ["1", "true", "yes"].contains(&lower.as_str()) {
        Some(true)
    } else if ["0", "false", "no"].contains(&lower.as_str()) {
        Some(false)
    } else {
        None
    }
}
