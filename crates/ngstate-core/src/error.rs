//! Error type for state construction, validation, and URL decoding.

use thiserror::Error;

/// Errors raised while building, validating, or decoding a viewer state.
///
/// Config and logging glue use `anyhow` instead; this type is what library
/// callers match on.
#[derive(Debug, Error)]
pub enum StateError {
    #[error("invalid layout {0:?} (expected one of: xy, xz, yz, xy-3d, xz-3d, yz-3d, 4panel, 3d)")]
    InvalidLayout(String),

    #[error("invalid blend mode {0:?} (expected \"default\" or \"additive\")")]
    InvalidBlend(String),

    #[error("layer {layer:?}: opacity {value} is outside [0, 1]")]
    InvalidOpacity { layer: String, value: f64 },

    #[error("{field}: coordinate {value} is not finite")]
    NonFiniteCoordinate { field: &'static str, value: f64 },

    #[error("invalid data source {source_uri:?}: {reason}")]
    InvalidSource { source_uri: String, reason: String },

    #[error("invalid encoding {0:?} (expected \"npz\" or \"jpeg\")")]
    InvalidEncoding(String),

    #[error("URL has no \"#!\" state fragment: {0}")]
    MissingFragment(String),

    #[error("state fragment is not valid UTF-8 after percent-decoding")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    #[error("state JSON: {0}")]
    Json(#[from] serde_json::Error),
}

impl StateError {
    pub(crate) fn invalid_source(uri: &str, reason: impl Into<String>) -> Self {
        StateError::InvalidSource {
            source_uri: uri.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StateError>;
