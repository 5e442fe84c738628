use config::{Config, Environment, File};
use brewlog_error::BrewResult;
use serde::{self, Deserialize};
use std::{ops::Deref, sync::Arc};
use sysinfo::System;

use crate::constants::ENV_PREFIX;

#[derive(Debug, Clone)]
pub struct Settings(Arc<Inner>);

impl Deref for Settings {
    type Target = Inner;
    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self(Arc::new(Inner::default()))
    }
}

impl Settings {
    /// Loads settings from an optional TOML file, then `BREW__*` environment overrides.
    pub fn new(config_path: &str) -> BrewResult<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(config_path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            );
        let inner: Inner = builder.build()?.try_deserialize()?;
        Ok(Self(Arc::new(inner)))
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Inner {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub web: Web,
}

#[derive(Debug, Clone, Deserialize)]
pub struct General {
    /// Directory that relative paths (`./logs`) are resolved from.
    ///
    /// Override with `BREW__GENERAL__RUNTIME_DIR=/var/lib/brewlog`.
    #[serde(default = "General::runtime_dir_default")]
    pub runtime_dir: String,
    /// Initial log level (`trace`, `debug`, `info`, `warn`, `error`)
    #[serde(default = "General::log_level_default")]
    pub log_level: String,
    /// Also write logs to a daily rolling file under `./logs`
    #[serde(default = "General::file_log_default")]
    pub file_log: bool,
}

impl Default for General {
    fn default() -> Self {
        General {
            runtime_dir: General::runtime_dir_default(),
            log_level: General::log_level_default(),
            file_log: General::file_log_default(),
        }
    }
}

impl General {
    fn runtime_dir_default() -> String {
        ".".into()
    }

    fn log_level_default() -> String {
        "info".into()
    }

    fn file_log_default() -> bool {
        true
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Web {
    #[serde(default = "Web::router_prefix_default")]
    pub router_prefix: String,
    #[serde(default = "Web::host_default")]
    pub host: String,
    #[serde(default = "Web::port_default")]
    pub port: u16,
    #[serde(default = "Web::workers_default")]
    pub workers: i32,
    /// Maximum accepted JSON body in bytes
    #[serde(default = "Web::json_limit_default")]
    pub json_limit: usize,
}

impl Default for Web {
    fn default() -> Self {
        Web {
            router_prefix: Web::router_prefix_default(),
            host: Web::host_default(),
            port: Web::port_default(),
            workers: Web::workers_default(),
            json_limit: Web::json_limit_default(),
        }
    }
}

impl Web {
    fn router_prefix_default() -> String {
        "/api".into()
    }

    fn host_default() -> String {
        "0.0.0.0".into()
    }

    fn port_default() -> u16 {
        8080
    }

    fn workers_default() -> i32 {
        0 // one per CPU
    }

    fn json_limit_default() -> usize {
        256 * 1024
    }

    /// Get actual number of workers based on configuration
    pub fn get_worker_count(&self) -> usize {
        match self.workers {
            n if n > 0 => n as usize,
            _ => std::cmp::max(1, System::new_all().cpus().len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.web.router_prefix, "/api");
        assert_eq!(settings.web.port, 8080);
        assert_eq!(settings.general.log_level, "info");
        assert!(settings.web.get_worker_count() >= 1);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = Settings::new("does-not-exist/brewlog.toml").unwrap();
        assert_eq!(settings.web.host, "0.0.0.0");
        assert_eq!(settings.web.json_limit, 256 * 1024);
    }
}
