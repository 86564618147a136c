//! Tuning-file loading shared by the survival and movement configs.
//!
//! Tuning lives in RON files under `assets/config/` so numbers can be
//! tweaked without recompiling. A missing or malformed file logs a warning
//! and falls back to the compiled defaults rather than aborting.

use bevy::prelude::*;
use serde::de::DeserializeOwned;
use std::fs;
use thiserror::Error;

/// Errors that can occur when loading a tuning file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File could not be read.
    #[error("could not read '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// RON parsing failed.
    #[error("could not parse '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Read and parse a RON tuning file.
pub fn read_ron<T: DeserializeOwned>(path: &str) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_string(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

/// Load a tuning file, falling back to defaults when missing or malformed.
pub fn load_or_default<T: DeserializeOwned + Default>(path: &str) -> T {
    match read_ron(path) {
        Ok(value) => {
            info!("Loaded config from {}", path);
            value
        }
        Err(err) => {
            warn!("{}. Using defaults.", err);
            T::default()
        }
    }
}
