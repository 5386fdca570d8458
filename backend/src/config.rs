//! Service settings.
//!
//! Settings start from built-in defaults, are optionally replaced by a JSON file
//! named in `FUELSTATION_CONFIG` and finally patched by single-value environment
//! overrides (`FUELSTATION_HOST`, `FUELSTATION_PORT`, `FUELSTATION_DB`).

use crate::error::ConfigError;
use common::model::prices::FuelPrices;
use serde::Deserialize;
use std::fs;

pub const CONFIG_ENV: &str = "FUELSTATION_CONFIG";
const HOST_ENV: &str = "FUELSTATION_HOST";
const PORT_ENV: &str = "FUELSTATION_PORT";
const DB_ENV: &str = "FUELSTATION_DB";

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub database_path: String,
    pub max_upload_bytes: usize,
    pub fuel_prices: FuelPrices,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            host: "127.0.0.1".to_string(),
            port: 8080,
            database_path: "fuelstation.sqlite".to_string(),
            max_upload_bytes: 10 * 1024 * 1024, // 10 MB
            fuel_prices: FuelPrices::default(),
        }
    }
}

impl Settings {
    /// Loads settings from the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(|name| std::env::var(name).ok())
    }

    /// Loads settings with `lookup` standing in for the environment.
    pub fn load_with<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = match lookup(CONFIG_ENV) {
            Some(path) => Self::from_file(&path)?,
            None => Settings::default(),
        };

        if let Some(host) = lookup(HOST_ENV) {
            settings.host = host;
        }
        if let Some(port) = lookup(PORT_ENV) {
            settings.port = port.trim().parse().map_err(|_| ConfigError::Env {
                var: PORT_ENV,
                value: port.clone(),
            })?;
        }
        if let Some(db) = lookup(DB_ENV) {
            settings.database_path = db;
        }

        Ok(settings)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_string(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_string(),
            source,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn defaults_without_environment() {
        let settings = Settings::load_with(|_| None).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.bind_address(), "127.0.0.1:8080");
        assert_eq!(settings.fuel_prices.ad_blue, 50.0);
    }

    #[test]
    fn file_values_are_patched_by_overrides() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"port": 9000, "database_path": "a.sqlite", "fuel_prices": {{"diesel": 42.5}}}}"#
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();
        let vars = env(&[(CONFIG_ENV, &path), (DB_ENV, "b.sqlite")]);

        let settings = Settings::load_with(|name| vars.get(name).cloned()).unwrap();

        assert_eq!(settings.port, 9000);
        assert_eq!(settings.database_path, "b.sqlite");
        assert_eq!(settings.fuel_prices.diesel, 42.5);
        assert_eq!(settings.fuel_prices.cleaning, 35.0);
        assert_eq!(settings.host, "127.0.0.1");
    }

    #[test]
    fn rejects_a_bad_port() {
        let vars = env(&[(PORT_ENV, "eighty")]);
        let err = Settings::load_with(|name| vars.get(name).cloned()).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: PORT_ENV, .. }));
    }

    #[test]
    fn reports_a_missing_file() {
        let vars = env(&[(CONFIG_ENV, "/definitely/not/here.json")]);
        let err = Settings::load_with(|name| vars.get(name).cloned()).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
