//! Surface model and initializer.
//!
//! A [`Surface`] couples a canvas element with its 2d context plus the
//! sizing and orientation facts the rest of the crate needs: logical
//! (CSS) dimensions, the device pixel ratio baked into the backing
//! buffer, and the pre-applied orientation degree.
//!
//! Initialization reads the element's computed CSS size, pins the CSS
//! size while growing the backing buffer by the device pixel ratio
//! (so drawing commands keep using logical coordinates), applies the
//! stroke style, and finally pre-rotates the coordinate system when an
//! orientation degree is supplied.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

use crate::error::PadError;
use crate::style::StyleConfig;

/// A point in surface-local logical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// The drawing area: canvas element, context, and coordinate state.
///
/// Created once at widget construction. Pixel content is mutated in
/// place by the capture layer and by `clear`; dimensions never change
/// (transform ops produce *new* canvases instead).
pub struct Surface {
    pub canvas: HtmlCanvasElement,
    pub context: CanvasRenderingContext2d,
    /// CSS-facing width in logical pixels.
    pub logical_width: f64,
    /// CSS-facing height in logical pixels.
    pub logical_height: f64,
    /// Ratio between backing-buffer and logical pixels. 1.0 when the
    /// host reports no usable ratio.
    pub device_pixel_ratio: f64,
    /// Pre-applied rotation of the coordinate system, in degrees.
    /// 0 when no orientation was requested.
    pub orientation_deg: i32,
}

impl Surface {
    /// The extent `clear` must erase, in logical pixels.
    ///
    /// The context still carries the orientation pre-rotation, so at
    /// ±90° the cleared rectangle uses swapped width/height to cover
    /// the full visible area.
    #[must_use]
    pub fn clear_extent(&self) -> (f64, f64) {
        clear_extent(
            self.orientation_deg,
            self.logical_width,
            self.logical_height,
        )
    }
}

// ── Pure geometry ───────────────────────────────────────────────

/// Parse a computed CSS pixel length such as `"300px"`.
///
/// # Errors
///
/// Returns [`PadError::InvalidCssLength`] for non-pixel values.
pub fn parse_css_px(value: &str) -> Result<f64, PadError> {
    value
        .trim()
        .trim_end_matches("px")
        .parse::<f64>()
        .map_err(|_| PadError::InvalidCssLength(value.to_owned()))
}

/// Backing-buffer size for a logical size under a device pixel ratio.
///
/// A non-positive ratio means the host reported nothing usable; the
/// backing buffer then matches the logical size exactly.
#[must_use]
pub fn backing_size(logical: f64, device_pixel_ratio: f64) -> u32 {
    if device_pixel_ratio > 0.0 {
        (logical * device_pixel_ratio) as u32
    } else {
        logical as u32
    }
}

/// Compensating translation applied after rotating the coordinate
/// system by `degree`, so drawing at surface-local coordinates lands
/// on the physically rotated canvas.
///
/// Unrecognized degrees translate by nothing.
#[must_use]
pub fn pre_rotation_translation(degree: i32, width: f64, height: f64) -> (f64, f64) {
    match degree {
        -90 => (-height, 0.0),
        90 => (0.0, -width),
        -180 | 180 => (-width, -height),
        _ => (0.0, 0.0),
    }
}

/// Logical clear extent for an orientation degree: swapped at ±90°.
#[must_use]
pub fn clear_extent(degree: i32, width: f64, height: f64) -> (f64, f64) {
    match degree {
        -90 | 90 => (height, width),
        _ => (width, height),
    }
}

// ── Initialization ──────────────────────────────────────────────

/// Initialize a [`Surface`] over a canvas element.
///
/// `degree` pre-rotates the coordinate system; `style` is applied over
/// the stroke defaults; `mobile` gates the desktop-only stroke shadow.
///
/// # Errors
///
/// Fails when the computed style is unreadable, the element has no 2d
/// context, or any canvas call is rejected by the host.
pub fn initialize(
    window: &Window,
    canvas: HtmlCanvasElement,
    degree: Option<i32>,
    style: &StyleConfig,
    mobile: bool,
) -> Result<Surface, PadError> {
    let computed = window
        .get_computed_style(&canvas)?
        .ok_or_else(|| PadError::Js("element has no computed style".to_owned()))?;
    let logical_width = parse_css_px(&computed.get_property_value("width")?)?;
    let logical_height = parse_css_px(&computed.get_property_value("height")?)?;

    let context = canvas
        .get_context("2d")?
        .ok_or(PadError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| PadError::ContextUnavailable)?;

    let raw_ratio = window.device_pixel_ratio();
    let device_pixel_ratio = if raw_ratio > 0.0 {
        // Pin the CSS size, grow the backing buffer, and scale the
        // context so drawing keeps using logical coordinates.
        let css = canvas.style();
        css.set_property("width", &format!("{logical_width}px"))?;
        css.set_property("height", &format!("{logical_height}px"))?;
        canvas.set_width(backing_size(logical_width, raw_ratio));
        canvas.set_height(backing_size(logical_height, raw_ratio));
        context.scale(raw_ratio, raw_ratio)?;
        raw_ratio
    } else {
        canvas.set_width(logical_width as u32);
        canvas.set_height(logical_height as u32);
        1.0
    };

    style.apply(&context, mobile);

    let orientation_deg = match degree {
        Some(d) => {
            context.rotate(f64::from(d).to_radians())?;
            let (dx, dy) = pre_rotation_translation(d, logical_width, logical_height);
            if dx != 0.0 || dy != 0.0 {
                context.translate(dx, dy)?;
            }
            d
        }
        None => 0,
    };

    Ok(Surface {
        canvas,
        context,
        logical_width,
        logical_height,
        device_pixel_ratio,
        orientation_deg,
    })
}
