// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for plan serialization and configuration.

/// Result type alias for ResPlan operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by the shared data model.
///
/// Graph building and floor stacking never fail on bad geometry; degenerate
/// input simply falls below their thresholds. Only encoding and explicit
/// configuration checks report errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// JSON or binary (de)serialization failed.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON error: {}", err))
    }
}

impl From<bincode::Error> for Error {
    fn from(err: bincode::Error) -> Self {
        Error::Serialization(format!("binary error: {}", err))
    }
}
