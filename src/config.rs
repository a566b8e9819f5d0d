use crate::errors::StartupError;
use chrono::{SecondsFormat, Utc};
use std::env;

pub const DEFAULT_VERSION: &str = "1.0.0";
pub const DEFAULT_ENVIRONMENT: &str = "development";
pub const DEFAULT_PORT: u16 = 8080;

/// Settings read once from the environment at startup and shared read-only
/// with every handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceConfig {
    pub version: String,
    pub build_date: String,
    pub environment: String,
    pub port: u16,
    pub debug: bool,
    pub workers: Option<usize>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            version: DEFAULT_VERSION.to_string(),
            build_date: now_iso8601(),
            environment: DEFAULT_ENVIRONMENT.to_string(),
            port: DEFAULT_PORT,
            debug: false,
            workers: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self, StartupError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from an arbitrary variable source. Empty values are
    /// treated the same as missing ones; anything else is taken verbatim.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).filter(|v| !v.is_empty());
        let defaults = Self::default();

        let port = match var("PORT") {
            Some(value) => value
                .trim()
                .parse::<u16>()
                .map_err(|source| StartupError::InvalidPort { value, source })?,
            None => defaults.port,
        };

        let workers = match var("WORKERS") {
            Some(value) => match value.trim().parse::<usize>() {
                Ok(n) if n > 0 => Some(n),
                _ => return Err(StartupError::InvalidWorkers { value }),
            },
            None => defaults.workers,
        };

        Ok(Self {
            version: var("APP_VERSION").unwrap_or(defaults.version),
            build_date: var("BUILD_DATE").unwrap_or(defaults.build_date),
            environment: var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            debug: var("DEBUG")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.debug),
            workers,
        })
    }

    pub fn listen_address(&self) -> (&'static str, u16) {
        ("0.0.0.0", self.port)
    }
}

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
