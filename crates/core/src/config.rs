//! Configuration for the trap-and-emulate engine.
//!
//! This module defines the knobs the surrounding firmware may set when it
//! builds a [`crate::TrapEngine`]. It provides:
//! 1. **Defaults:** The baseline behaviour when a field is not supplied.
//! 2. **Structure:** [`EngineConfig`], deserializable with missing fields defaulted.
//! 3. **Loading:** [`EngineConfig::from_json`] and [`EngineConfig::from_reader`] for
//!    platform descriptions shipped as JSON.
//!
//! Use `EngineConfig::default()` when no platform description is available.

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

/// Default configuration constants for the engine.
mod defaults {
    /// Whether `OP-FP` and the fused multiply-add opcodes reaching the
    /// illegal-instruction path are emulated.
    ///
    /// Off by default: platforms route those traps to the floating-point
    /// dispatcher directly.
    pub const ROUTE_FP_OPCODES: bool = false;

    /// Whether `C.FLD` / `C.FLDSP` require `mstatus.FS` to be enabled.
    ///
    /// Off by default, matching the uncompressed-path-only check of the
    /// firmware this engine replaces.
    pub const COMPRESSED_LOADS_REQUIRE_FS: bool = false;
}

/// Error loading an [`EngineConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Input is not valid JSON or has the wrong shape.
    #[error("invalid engine configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Engine behaviour switches.
///
/// # Examples
///
/// ```
/// use rvtrap_core::EngineConfig;
///
/// let json = r#"{ "route_fp_opcodes": true }"#;
/// let config = EngineConfig::from_json(json).unwrap();
/// assert!(config.route_fp_opcodes);
/// assert!(!config.compressed_loads_require_fs);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Forward `OP-FP` and `FMADD`..`FNMADD` from the illegal-instruction
    /// dispatcher to the floating-point dispatcher instead of redirecting.
    pub route_fp_opcodes: bool,

    /// Refuse compressed float loads while `mstatus.FS` is Off.
    pub compressed_loads_require_fs: bool,
}

impl EngineConfig {
    /// Parses a configuration from JSON; absent fields take their defaults.
    ///
    /// # Arguments
    ///
    /// * `json` - A JSON object with any subset of the configuration fields.
    ///
    /// # Returns
    ///
    /// The parsed configuration, or [`ConfigError::Json`] for malformed input.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from a JSON stream (a platform description file).
    ///
    /// # Errors
    ///
    /// [`ConfigError::Json`] for I/O failures and malformed input alike.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            route_fp_opcodes: defaults::ROUTE_FP_OPCODES,
            compressed_loads_require_fs: defaults::COMPRESSED_LOADS_REQUIRE_FS,
        }
    }
}
