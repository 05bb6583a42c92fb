// Error type shared by the config loader, canvas setup, and the viewer helpers.
// The particle simulation itself never fails.

use thiserror::Error;
use wasm_bindgen::JsValue;

#[derive(Debug, Error)]
pub enum OverlayError {
    #[error("failed to parse overlay config: {0}")]
    ConfigParse(#[source] serde_json::Error),

    #[error("invalid overlay config: {field} {reason}")]
    InvalidConfig { field: &'static str, reason: String },

    #[error("canvas error: {0}")]
    Canvas(String),

    #[error("invalid PDB id '{0}': expected 4 alphanumeric characters")]
    InvalidPdbId(String),

    #[error("failed to parse protein entry: {0}")]
    ProteinInfoParse(#[source] serde_json::Error),
}

impl OverlayError {
    pub(crate) fn invalid_config(field: &'static str, reason: impl Into<String>) -> Self {
        OverlayError::InvalidConfig {
            field,
            reason: reason.into(),
        }
    }
}

impl From<OverlayError> for JsValue {
    fn from(err: OverlayError) -> JsValue {
        js_sys::Error::new(&err.to_string()).into()
    }
}

pub type Result<T> = std::result::Result<T, OverlayError>;
