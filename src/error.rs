//! Error taxonomy for the signature pad.
//!
//! Four classes of failure exist (in order of severity):
//! environment errors (no document-bearing host — fatal at
//! construction), unbound-canvas errors (the pad was built without an
//! element), malformed input (bad data URLs, unparsable CSS lengths),
//! and transport failures (reported through the upload callbacks,
//! never thrown). Out-of-range rotation angles are *not* errors: they
//! are silently normalized by [`crate::transform`].

use wasm_bindgen::JsValue;

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// All failure modes surfaced by this crate.
#[derive(Debug, thiserror::Error)]
pub enum PadError {
    /// No `window` with a `document` is available. Raised synchronously
    /// at construction when run outside a browser-like host.
    #[error("signpad requires a window with a document")]
    DocumentUnavailable,

    /// The pad was constructed without a canvas element and an
    /// operation that needs one was invoked.
    #[error("no canvas element is bound to this pad")]
    CanvasUnbound,

    /// The canvas has no 2d rendering context.
    #[error("canvas does not provide a 2d rendering context")]
    ContextUnavailable,

    /// A computed CSS length could not be parsed as pixels.
    #[error("unparsable CSS length: {0:?}")]
    InvalidCssLength(String),

    /// A data URL did not match `data:<mime>;base64,<payload>`.
    #[error("malformed data URL: {0}")]
    MalformedDataUrl(String),

    /// The upload endpoint answered with a non-success status.
    #[error("upload rejected with status {0}")]
    UploadStatus(u16),

    /// The upload never reached the endpoint.
    #[error("upload transport error: {0}")]
    UploadTransport(String),

    /// An underlying browser API call failed.
    #[error("browser API error: {0}")]
    Js(String),
}

impl From<JsValue> for PadError {
    fn from(value: JsValue) -> Self {
        Self::Js(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }
}

impl From<PadError> for JsValue {
    fn from(err: PadError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<gloo_net::Error> for PadError {
    fn from(err: gloo_net::Error) -> Self {
        Self::UploadTransport(err.to_string())
    }
}
