// ⚙️ Configuration - date bounds, cache size, server address
// Defaults match the historical form limits; a JSON file or env vars override them

use anyhow::{Context as AnyhowContext, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

pub const CONFIG_ENV: &str = "NUMEROLOGY_CONFIG";
pub const ADDR_ENV: &str = "NUMEROLOGY_ADDR";
pub const CACHE_CAPACITY_ENV: &str = "NUMEROLOGY_CACHE_CAPACITY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorConfig {
    /// Earliest birth date the front ends accept
    #[serde(default = "default_min_date")]
    pub min_date: NaiveDate,

    /// Latest birth date the front ends accept
    #[serde(default = "default_max_date")]
    pub max_date: NaiveDate,

    /// Entries kept by the reading cache (0 disables it)
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,

    /// Bind address for the API server
    #[serde(default = "default_server_addr")]
    pub server_addr: String,
}

fn default_min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1925, 1, 1).unwrap_or(NaiveDate::MIN)
}

fn default_max_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 12, 31).unwrap_or(NaiveDate::MAX)
}

fn default_cache_capacity() -> usize {
    1024
}

fn default_server_addr() -> String {
    "0.0.0.0:3000".to_string()
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        CalculatorConfig {
            min_date: default_min_date(),
            max_date: default_max_date(),
            cache_capacity: default_cache_capacity(),
            server_addr: default_server_addr(),
        }
    }
}

impl CalculatorConfig {
    /// Load config from a JSON file; missing fields fall back to defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;

        let config: CalculatorConfig =
            serde_json::from_str(&content).context("Failed to parse config JSON")?;

        config.check()?;
        Ok(config)
    }

    /// Defaults, then `$NUMEROLOGY_CONFIG` if set, then single-value env overrides
    pub fn load() -> Result<Self> {
        CalculatorConfig::from_lookup(|key| env::var(key).ok())
    }

    /// Same as `load`, reading variables through `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = match lookup(CONFIG_ENV) {
            Some(path) => CalculatorConfig::from_file(path)?,
            None => CalculatorConfig::default(),
        };

        config.apply_overrides(lookup)
    }

    fn apply_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup(ADDR_ENV) {
            self.server_addr = addr;
        }

        if let Some(capacity) = lookup(CACHE_CAPACITY_ENV) {
            self.cache_capacity = capacity
                .trim()
                .parse()
                .with_context(|| format!("{} must be a number, got {:?}", CACHE_CAPACITY_ENV, capacity))?;
        }

        Ok(self)
    }

    fn check(&self) -> Result<()> {
        if self.min_date > self.max_date {
            anyhow::bail!(
                "min_date {} is after max_date {}",
                self.min_date,
                self.max_date
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn write_temp(name: &str, content: &str) -> std::path::PathBuf {
        let path = env::temp_dir().join(format!("numerology-{}-{}.json", name, std::process::id()));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_default_bounds() {
        let config = CalculatorConfig::default();

        assert_eq!(config.min_date, NaiveDate::from_ymd_opt(1925, 1, 1).unwrap());
        assert_eq!(config.max_date, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());
        assert_eq!(config.cache_capacity, 1024);
        assert_eq!(config.server_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_from_file_fills_missing_fields() {
        let path = write_temp("partial", r#"{ "cache_capacity": 8, "max_date": "2030-12-31" }"#);

        let config = CalculatorConfig::from_file(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.cache_capacity, 8);
        assert_eq!(config.max_date, NaiveDate::from_ymd_opt(2030, 12, 31).unwrap());
        assert_eq!(config.min_date, NaiveDate::from_ymd_opt(1925, 1, 1).unwrap());
    }

    #[test]
    fn test_from_file_rejects_inverted_range() {
        let path = write_temp(
            "inverted",
            r#"{ "min_date": "2000-01-01", "max_date": "1990-01-01" }"#,
        );

        let result = CalculatorConfig::from_file(&path);
        fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    fn vars(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_lookup_without_variables_gives_defaults() {
        let config = CalculatorConfig::from_lookup(vars(&[])).unwrap();
        assert_eq!(config, CalculatorConfig::default());
    }

    #[test]
    fn test_lookup_reads_config_file() {
        let path = write_temp("lookup", r#"{ "cache_capacity": 3 }"#);
        let path_text = path.to_string_lossy().to_string();

        let config = CalculatorConfig::from_lookup(vars(&[(CONFIG_ENV, path_text.as_str())])).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.cache_capacity, 3);
        assert_eq!(config.server_addr, "0.0.0.0:3000");
    }

    #[test]
    fn test_env_overrides_win_over_file() {
        let path = write_temp("override", r#"{ "cache_capacity": 3, "server_addr": "127.0.0.1:9000" }"#);
        let path_text = path.to_string_lossy().to_string();

        let config = CalculatorConfig::from_lookup(vars(&[
            (CONFIG_ENV, path_text.as_str()),
            (ADDR_ENV, "127.0.0.1:8080"),
            (CACHE_CAPACITY_ENV, "64"),
        ]))
        .unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.server_addr, "127.0.0.1:8080");
        assert_eq!(config.cache_capacity, 64);
    }

    #[test]
    fn test_non_numeric_cache_capacity_fails() {
        let result = CalculatorConfig::from_lookup(vars(&[(CACHE_CAPACITY_ENV, "lots")]));

        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains(CACHE_CAPACITY_ENV));
    }

    #[test]
    fn test_missing_config_file_from_env_fails() {
        let result = CalculatorConfig::from_lookup(vars(&[(CONFIG_ENV, "/nonexistent/numerology.json")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_from_file_missing_file() {
        let result = CalculatorConfig::from_file("/nonexistent/numerology.json");
        assert!(result.is_err());
    }
}
