//! Limits applied when decoding a submitted form body.
//!
//! Values come from code, from a host configuration file (the struct is
//! `serde`-compatible), or from the environment:
//!
//! - `BOOKINGS_FORM_MAX_BODY_BYTES` - largest accepted body, in bytes
//! - `BOOKINGS_FORM_MAX_FIELDS` - largest number of distinct field names

use crate::{FormError, Result};
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable prefix used by [`FormConfig::from_env`]
pub const ENV_PREFIX: &str = "BOOKINGS_FORM";

/// Common size constants for convenience
pub mod sizes {
    /// 1 Kilobyte
    pub const KB: usize = 1024;

    /// 16 KB
    pub const SIXTEEN_KB: usize = 16 * KB;
    /// 64 KB
    pub const SIXTY_FOUR_KB: usize = 64 * KB;
}

const DEFAULT_MAX_FIELDS: usize = 100;

/// Decoding limits for urlencoded form bodies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Largest accepted body, in bytes
    pub max_body_bytes: usize,

    /// Largest number of distinct field names
    pub max_fields: usize,
}

impl FormConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_body_bytes(mut self, bytes: usize) -> Self {
        self.max_body_bytes = bytes;
        self
    }

    pub fn with_max_fields(mut self, fields: usize) -> Self {
        self.max_fields = fields;
        self
    }

    /// Load limits from `BOOKINGS_FORM_*` environment variables.
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(ENV_PREFIX, |key| env::var(key).ok())
    }

    /// Load limits through `lookup`, which maps a full variable name such as
    /// `PREFIX_MAX_FIELDS` to its value.
    pub fn from_lookup<F>(prefix: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = read_var(prefix, "MAX_BODY_BYTES", &lookup)? {
            config.max_body_bytes = value;
        }
        if let Some(value) = read_var(prefix, "MAX_FIELDS", &lookup)? {
            config.max_fields = value;
        }

        Ok(config)
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            max_body_bytes: sizes::SIXTY_FOUR_KB,
            max_fields: DEFAULT_MAX_FIELDS,
        }
    }
}

fn read_var<F>(prefix: &str, key: &str, lookup: &F) -> Result<Option<usize>>
where
    F: Fn(&str) -> Option<String>,
{
    let full_key = format!("{}_{}", prefix, key);

    match lookup(&full_key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| FormError::Config(format!("{}={:?}: {}", full_key, raw, e))),
    }
}
