//! Export: encode the surface as an image, trigger downloads, wrap
//! blobs, and clear the drawing area.
//!
//! The data-URL codec half of this module is DOM-free: parsing the
//! MIME prefix, decoding the base64 payload, and rewriting the URL
//! for download are plain string/byte work. Only the canvas encoding,
//! the `Blob` wrapper, and the navigation trigger touch `web-sys`.

#[cfg(test)]
#[path = "export_test.rs"]
mod export_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, HtmlCanvasElement, Window};

use crate::consts::{JPEG_EXPORT_QUALITY, JPEG_MIME, PNG_MIME};
use crate::error::PadError;
use crate::surface::Surface;

/// MIME segment substituted into a PNG data URL so the browser treats
/// navigation as a generic binary attachment instead of displaying
/// the image inline.
const ATTACHMENT_MIME: &str = "image/octet-stream;Content-Disposition:attachment;filename=sign.png";

// ── Pure codec ──────────────────────────────────────────────────

/// A data URL decoded into its MIME type and raw bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Decode a `data:<mime>;base64,<payload>` URL.
///
/// # Errors
///
/// Returns [`PadError::MalformedDataUrl`] when the scheme, the base64
/// marker, the payload separator, or the payload itself is invalid.
pub fn decode_data_url(url: &str) -> Result<DecodedImage, PadError> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| PadError::MalformedDataUrl("missing data: scheme".to_owned()))?;
    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| PadError::MalformedDataUrl("missing payload separator".to_owned()))?;
    let mime = header
        .strip_suffix(";base64")
        .ok_or_else(|| PadError::MalformedDataUrl("missing base64 marker".to_owned()))?;
    let bytes = BASE64
        .decode(payload)
        .map_err(|e| PadError::MalformedDataUrl(format!("invalid base64 payload: {e}")))?;
    Ok(DecodedImage { mime: mime.to_owned(), bytes })
}

/// Rewrite a PNG data URL's MIME segment to force attachment
/// treatment on navigation. A bit-exact string substitution, not a
/// re-encode; URLs without a PNG segment come back unchanged.
#[must_use]
pub fn attachment_url(data_url: &str) -> String {
    data_url.replacen(PNG_MIME, ATTACHMENT_MIME, 1)
}

// ── DOM operations ──────────────────────────────────────────────

/// Encode a canvas as a PNG data URL (lossless default quality).
///
/// # Errors
///
/// Fails when the canvas refuses to encode (e.g. zero-sized).
pub fn to_png_data_url(canvas: &HtmlCanvasElement) -> Result<String, PadError> {
    Ok(canvas.to_data_url_with_type(PNG_MIME)?)
}

/// Encode a canvas as a JPEG data URL at the fixed export quality.
///
/// # Errors
///
/// Fails when the canvas refuses to encode.
pub fn to_jpeg_data_url(canvas: &HtmlCanvasElement) -> Result<String, PadError> {
    Ok(canvas.to_data_url_with_type_and_encoder_options(
        JPEG_MIME,
        &JsValue::from_f64(JPEG_EXPORT_QUALITY),
    )?)
}

/// Decode a data URL and wrap the bytes in a [`Blob`] tagged with the
/// parsed MIME type.
///
/// # Errors
///
/// Fails on malformed data URLs or when blob construction is rejected.
pub fn data_url_to_blob(data_url: &str) -> Result<Blob, PadError> {
    let decoded = decode_data_url(data_url)?;
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(decoded.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(&decoded.mime);
    Ok(Blob::new_with_u8_array_sequence_and_options(
        &parts,
        &options,
    )?)
}

/// Navigate to the attachment form of `data_url`, triggering the
/// browser's save dialog.
///
/// # Errors
///
/// Fails when the host rejects the navigation.
pub fn trigger_download(window: &Window, data_url: &str) -> Result<(), PadError> {
    window.location().set_href(&attachment_url(data_url))?;
    Ok(())
}

/// Erase the surface's pixel content over the logical drawing area.
///
/// Dimensions swap when the orientation is ±90° — the context still
/// carries the pre-rotation, so the swapped rectangle is what covers
/// the visible surface. Dimensions themselves are untouched.
pub fn clear(surface: &Surface) {
    let (width, height) = surface.clear_extent();
    surface.context.clear_rect(0.0, 0.0, width, height);
}
