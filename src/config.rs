//! Generation settings
//!
//! The core operations never read the environment; callers that want an
//! environment override opt in through [`DepthConfig::from_env`].

use thiserror::Error;

use crate::generator::DEFAULT_BASE_LENGTH;

/// Environment variable overriding the base length.
pub const BASE_LENGTH_ENV: &str = "PWD_DEPTH_BASE_LENGTH";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid base length in PWD_DEPTH_BASE_LENGTH: {0}")]
    InvalidBaseLength(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DepthConfig {
    /// Characters in the random base string.
    pub base_length: usize,
}

impl Default for DepthConfig {
    fn default() -> Self {
        Self {
            base_length: DEFAULT_BASE_LENGTH,
        }
    }
}

impl DepthConfig {
    pub fn new(base_length: usize) -> Self {
        Self { base_length }
    }

    /// Builds a config from the environment.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_DEPTH_BASE_LENGTH`
    /// 2. Default base length of 8
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseLength` if the variable is set but
    /// is not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(raw) = std::env::var(BASE_LENGTH_ENV) else {
            return Ok(Self::default());
        };

        let base_length = raw.trim().parse::<usize>().map_err(|_| {
            #[cfg(feature = "tracing")]
            tracing::error!("Config load FAILED: {}={:?}", BASE_LENGTH_ENV, raw);
            ConfigError::InvalidBaseLength(raw.clone())
        })?;

        #[cfg(feature = "tracing")]
        tracing::info!("Base length overridden from environment: {}", base_length);

        Ok(Self { base_length })
    }
}
