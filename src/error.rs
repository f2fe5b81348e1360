//! Error types shared across the browser-facing modules.

use thiserror::Error;
use wasm_bindgen::JsValue;

/// Failure talking to the backend API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("network request failed: {0}")]
    Network(String),
    /// The server answered with a non-2xx status.
    #[error("server responded with status {0}")]
    Status(u16),
    /// The body could not be decoded into the expected shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

impl ApiError {
    pub(crate) fn from_js(value: JsValue) -> Self {
        ApiError::Network(js_message(&value))
    }
}

/// Failure reading or writing durable browser storage.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("storage is unavailable")]
    Unavailable,
    #[error("storage write rejected: {0}")]
    Write(String),
}

/// Best-effort text for a thrown JavaScript value.
pub(crate) fn js_message(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serde_errors_become_malformed() {
        let err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        assert!(matches!(ApiError::from(err), ApiError::Malformed(_)));
    }

    #[test]
    fn status_error_mentions_code() {
        assert_eq!(
            ApiError::Status(404).to_string(),
            "server responded with status 404"
        );
    }
}
