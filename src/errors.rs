//! Error Types
//!
//! This module defines the error types used throughout the crate.
//!
//! # Overview
//!
//! The main error type [`SaberError`] covers all failure modes. With the
//! exception of settings parsing, every variant is a configuration error
//! raised synchronously at construction time: a misconfigured weapon has no
//! safe default behavior, so construction fails fast and nothing after it
//! can fail. Per-tick updates are total.
//!
//! # Usage
//!
//! All fallible public APIs return [`Result<T>`] which is an alias for
//! `std::result::Result<T, SaberError>`.
//!
//! ```rust,ignore
//! use saber_core::errors::{SaberError, Result};
//!
//! fn build_weapon() -> Result<()> {
//!     // Constructors that may fail return Result
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// The main error type for the blade simulation.
///
/// Configuration variants are fatal: they must prevent the weapon from
/// being brought into service. There is no recovery path and no retry.
#[derive(Error, Debug)]
pub enum SaberError {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// A blade segment was configured with a non-positive maximum length.
    #[error("Invalid blade length {0}: must be > 0")]
    InvalidBladeLength(f32),

    /// A blade segment was configured with a non-positive extend duration.
    #[error("Invalid extend duration {0}: must be > 0")]
    InvalidExtendDuration(f32),

    /// A weapon was constructed without any blade segments.
    #[error("Weapon must have at least one blade segment")]
    NoBladeSegments,

    /// An intensity parameter (color or light) was not positive.
    #[error("Invalid {context} {value}: must be > 0")]
    InvalidIntensity {
        /// Which parameter was rejected
        context: &'static str,
        /// The rejected value
        value: f32,
    },

    // ========================================================================
    // Settings Errors
    // ========================================================================
    /// Weapon settings failed to parse.
    #[error("Settings parse error: {0}")]
    SettingsParseError(#[from] serde_json::Error),

    /// File I/O error while reading settings.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Alias for `Result<T, SaberError>`.
pub type Result<T> = std::result::Result<T, SaberError>;
