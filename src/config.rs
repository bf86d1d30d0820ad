use crate::Tanggalan;
use crate::consts::DEFAULT_CACHE_TTL_SECS;
use crate::error::ConfigError;
use crate::types::{Adjustment, Locale};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::time::Duration;

pub const ENV_HIJRI_ADJUSTMENT: &str = "TANGGALAN_HIJRI_ADJUSTMENT";
pub const ENV_LOCALE: &str = "TANGGALAN_LOCALE";
pub const ENV_ALGORITHM: &str = "TANGGALAN_ALGORITHM";
pub const ENV_CACHE_ENABLED: &str = "TANGGALAN_CACHE_ENABLED";
pub const ENV_CACHE_TTL: &str = "TANGGALAN_CACHE_TTL";

/// Built-in Hijri algorithms selectable from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlgorithmKind {
    #[default]
    UmAlQura,
    Tabular,
}

impl FromStr for AlgorithmKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "um_al_qura" | "umalqura" => Ok(Self::UmAlQura),
            "tabular" => Ok(Self::Tabular),
            _ => Err(ConfigError::UnsupportedAlgorithm(s.to_owned())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    pub enabled: bool,
    pub ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl CacheConfig {
    pub const fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

/// Runtime settings. Every field has a default, so partial documents
/// deserialize fine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub hijri_adjustment: Adjustment,
    pub locale: Locale,
    pub algorithm: AlgorithmKind,
    pub cache: CacheConfig,
}

impl Config {
    /// Reads settings from `TANGGALAN_*` environment variables.
    ///
    /// # Errors
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`; unset keys keep their defaults.
    ///
    /// # Errors
    /// Returns `ConfigError` if a value is present but invalid.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_HIJRI_ADJUSTMENT) {
            let days = value
                .trim()
                .parse::<i64>()
                .map_err(|_| invalid(ENV_HIJRI_ADJUSTMENT, &value))?;
            config.hijri_adjustment = Adjustment::new(days)?;
        }
        if let Some(value) = lookup(ENV_LOCALE) {
            config.locale = value.parse()?;
        }
        if let Some(value) = lookup(ENV_ALGORITHM) {
            config.algorithm = value.parse()?;
        }
        if let Some(value) = lookup(ENV_CACHE_ENABLED) {
            config.cache.enabled = parse_bool(&value).ok_or_else(|| invalid(ENV_CACHE_ENABLED, &value))?;
        }
        if let Some(value) = lookup(ENV_CACHE_TTL) {
            config.cache.ttl_secs = value
                .trim()
                .parse()
                .map_err(|_| invalid(ENV_CACHE_TTL, &value))?;
        }

        Ok(config)
    }

    /// Builds a converter facade from these settings
    pub fn build(&self) -> Tanggalan {
        let tanggalan = match self.algorithm {
            AlgorithmKind::UmAlQura => Tanggalan::with_adjustment(self.hijri_adjustment),
            AlgorithmKind::Tabular => Tanggalan::with_tabular_algorithm(self.hijri_adjustment),
        };
        tanggalan.with_locale(self.locale)
    }
}

fn invalid(key: &'static str, value: &str) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        value: value.to_owned(),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
