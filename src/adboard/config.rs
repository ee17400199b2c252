use crate::error::{AdBoardError, Result};
use crate::store::STORAGE_KEY;
use crate::wizard::Fee;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FEE: u32 = 20;
const DEFAULT_CURRENCY: &str = "₴";

/// Board configuration, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardConfig {
    /// Flat fee charged for publishing an ad
    #[serde(default = "default_fee")]
    pub fee: u32,

    /// Currency symbol used for the fee and ad prices
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Name of the slot the ads are kept in
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

fn default_fee() -> u32 {
    DEFAULT_FEE
}

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

fn default_storage_key() -> String {
    STORAGE_KEY.to_string()
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            fee: default_fee(),
            currency: default_currency(),
            storage_key: default_storage_key(),
        }
    }
}

impl BoardConfig {
    pub const KEYS: [&'static str; 3] = ["fee", "currency", "storage_key"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: BoardConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        fs::create_dir_all(config_dir)?;

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }

    pub fn fee(&self) -> Fee {
        Fee::new(self.fee, self.currency.clone())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "fee" => Some(self.fee.to_string()),
            "currency" => Some(self.currency.clone()),
            "storage_key" => Some(self.storage_key.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let value = value.trim();
        match key {
            "fee" => {
                self.fee = value.parse().map_err(|_| {
                    AdBoardError::Api(format!("fee must be a whole number, got '{}'", value))
                })?;
            }
            "currency" => self.currency = non_empty(key, value)?,
            "storage_key" => self.storage_key = non_empty(key, value)?,
            _ => return Err(AdBoardError::Api(format!("Unknown config key: {}", key))),
        }
        Ok(())
    }

    pub fn list_all(&self) -> Vec<(&'static str, String)> {
        Self::KEYS
            .iter()
            .filter_map(|key| self.get(key).map(|value| (*key, value)))
            .collect()
    }
}

fn non_empty(key: &str, value: &str) -> Result<String> {
    if value.is_empty() {
        return Err(AdBoardError::Api(format!("{} cannot be empty", key)));
    }
    Ok(value.to_string())
}
