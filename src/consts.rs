//! Shared constants for the signature pad.

// ── Stroke defaults ─────────────────────────────────────────────

/// Default stroke width in logical pixels.
pub const DEFAULT_LINE_WIDTH: f64 = 6.0;

/// Default stroke color.
pub const DEFAULT_STROKE_STYLE: &str = "black";

/// Default line cap / join. Round ends make short strokes read as dots.
pub const DEFAULT_LINE_SHAPE: &str = "round";

/// Shadow blur radius applied on non-mobile devices to smooth strokes.
/// Mobile renderers are too slow for per-segment shadows, so the blur
/// is skipped there entirely.
pub const DESKTOP_SHADOW_BLUR: f64 = 1.0;

// ── Rotation ────────────────────────────────────────────────────

/// Lower clamp for requested rotation angles, in degrees.
pub const MIN_ROTATION_DEG: i32 = -90;

/// Upper clamp for requested rotation angles, in degrees.
pub const MAX_ROTATION_DEG: i32 = 180;

// ── Export ──────────────────────────────────────────────────────

/// MIME type for PNG export.
pub const PNG_MIME: &str = "image/png";

/// MIME type for JPEG export.
pub const JPEG_MIME: &str = "image/jpeg";

/// Fixed JPEG encoder quality. PNG export uses the lossless default.
pub const JPEG_EXPORT_QUALITY: f64 = 0.5;

// ── Upload wire contract ────────────────────────────────────────

/// Multipart form field name carrying the image payload.
pub const UPLOAD_FIELD: &str = "image";

/// Logical filename attached to the uploaded blob.
pub const UPLOAD_FILENAME: &str = "sign";
