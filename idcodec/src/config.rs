use crate::result::{Error, Result};
use std::{fmt::Display, str::FromStr};

pub const DEFAULT_POOL_SIZE: usize = 100;
pub const DEFAULT_ITERATIONS: u32 = 100;

pub const POOL_SIZE_VAR: &str = "IDCODEC_POOL_SIZE";
pub const ITERATIONS_VAR: &str = "IDCODEC_ITERATIONS";
pub const VERIFY_VAR: &str = "IDCODEC_VERIFY";

/// Harness settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessConfig {
    /// Number of identifiers in the shared pool.
    pub pool_size: usize,
    /// Timed passes per sub-benchmark.
    pub iterations: u32,
    /// Check `decode(encode(id)) == id` after timing.
    pub verify_round_trip: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            pool_size: DEFAULT_POOL_SIZE,
            iterations: DEFAULT_ITERATIONS,
            verify_round_trip: true,
        }
    }
}

impl HarnessConfig {
    pub fn with_pool_size(mut self, pool_size: usize) -> Self {
        self.pool_size = pool_size;
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_verify_round_trip(mut self, verify: bool) -> Self {
        self.verify_round_trip = verify;
        self
    }

    /// Defaults overridden by `IDCODEC_POOL_SIZE`, `IDCODEC_ITERATIONS` and `IDCODEC_VERIFY`.
    pub fn from_env() -> Result<Self> {
        Self::default().with_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from `lookup`, keyed by the environment variable names.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup(POOL_SIZE_VAR) {
            self.pool_size = parse(POOL_SIZE_VAR, &value)?;
        }
        if let Some(value) = lookup(ITERATIONS_VAR) {
            self.iterations = parse(ITERATIONS_VAR, &value)?;
        }
        if let Some(value) = lookup(VERIFY_VAR) {
            self.verify_round_trip = parse_flag(VERIFY_VAR, &value)?;
        }
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.iterations == 0 {
            return Err(Error::ConfigError(
                "iterations must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| Error::ConfigError(format!("{key}={value:?}: {e}")))
}

fn parse_flag(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(Error::ConfigError(format!(
            "{key}={value:?}: expected a boolean"
        ))),
    }
}
