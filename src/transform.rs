//! Resize and rotate finished bitmaps into new offscreen canvases.
//!
//! Both operations are pure with respect to their source: they never
//! mutate the input canvas, returning either a freshly allocated
//! offscreen canvas or — for identity transforms — the source itself.
//!
//! The geometry is planned by DOM-free functions so the edge cases
//! (truncation, clamping, the pass-through policy for unhandled
//! angles) are natively testable; the DOM halves only allocate the
//! target canvas and issue `drawImage`.

#[cfg(test)]
#[path = "transform_test.rs"]
mod transform_test;

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, Document, HtmlCanvasElement};

use crate::consts::{MAX_ROTATION_DEG, MIN_ROTATION_DEG};
use crate::error::PadError;

// ── Pure planning ───────────────────────────────────────────────

/// Normalize a requested rotation: truncate toward zero, then clamp
/// to [−90, 180].
#[must_use]
pub fn normalize_rotation(degree: f64) -> i32 {
    (degree.trunc() as i32).clamp(MIN_ROTATION_DEG, MAX_ROTATION_DEG)
}

/// Geometry for one handled rotation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationPlan {
    /// Output canvas width in physical pixels.
    pub width: u32,
    /// Output canvas height in physical pixels.
    pub height: u32,
    /// Rotation applied to the output context, in radians.
    pub radians: f64,
    /// Draw offset compensating for the rotation pivot, so the full
    /// source lands inside the output bounds.
    pub dx: f64,
    pub dy: f64,
}

/// Plan a rotation of a `width`×`height` image.
///
/// Only −90, 90, and 180 (after normalization) are handled; any other
/// angle returns `None`, meaning the source passes through unchanged.
/// That silent pass-through — a 45° request produces no rotation and
/// no signal — is preserved from the original behavior on purpose.
#[must_use]
pub fn rotation_plan(degree: f64, width: u32, height: u32) -> Option<RotationPlan> {
    let normalized = normalize_rotation(degree);
    let radians = f64::from(normalized).to_radians();
    let (w, h) = (f64::from(width), f64::from(height));
    match normalized {
        // Counter-clockwise quarter turn: dimensions swap.
        -90 => Some(RotationPlan { width: height, height: width, radians, dx: -w, dy: 0.0 }),
        // Clockwise quarter turn: dimensions swap.
        90 => Some(RotationPlan { width: height, height: width, radians, dx: 0.0, dy: -h }),
        // Half turn: dimensions keep.
        180 => Some(RotationPlan { width, height, radians, dx: -w, dy: -h }),
        _ => None,
    }
}

/// Decide whether a resize is needed.
///
/// Omitted targets default to the current physical size. Returns the
/// target dimensions when they differ from the current ones, or `None`
/// for the identity case (caller returns the source unchanged, no
/// copy).
#[must_use]
pub fn resize_target(
    width: Option<u32>,
    height: Option<u32>,
    current_width: u32,
    current_height: u32,
) -> Option<(u32, u32)> {
    let w = width.unwrap_or(current_width);
    let h = height.unwrap_or(current_height);
    if w == current_width && h == current_height {
        None
    } else {
        Some((w, h))
    }
}

// ── DOM operations ──────────────────────────────────────────────

fn offscreen_canvas(
    document: &Document,
    width: u32,
    height: u32,
) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), PadError> {
    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| PadError::ContextUnavailable)?;
    canvas.set_width(width);
    canvas.set_height(height);
    let context = canvas
        .get_context("2d")?
        .ok_or(PadError::ContextUnavailable)?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| PadError::ContextUnavailable)?;
    Ok((canvas, context))
}

/// Resample `source` into a new canvas of the target size.
///
/// Identity when both targets equal (or default to) the source's
/// physical dimensions: the source itself is returned, no allocation.
///
/// # Errors
///
/// Fails when the offscreen canvas cannot be allocated or drawn into.
pub fn scale(
    document: &Document,
    source: &HtmlCanvasElement,
    width: Option<u32>,
    height: Option<u32>,
) -> Result<HtmlCanvasElement, PadError> {
    let (current_w, current_h) = (source.width(), source.height());
    let Some((target_w, target_h)) = resize_target(width, height, current_w, current_h) else {
        return Ok(source.clone());
    };

    let (canvas, context) = offscreen_canvas(document, target_w, target_h)?;
    context.draw_image_with_html_canvas_element_and_sw_and_sh_and_dx_and_dy_and_dw_and_dh(
        source,
        0.0,
        0.0,
        f64::from(current_w),
        f64::from(current_h),
        0.0,
        0.0,
        f64::from(target_w),
        f64::from(target_h),
    )?;
    Ok(canvas)
}

/// Rotate `image` into a new canvas per [`rotation_plan`].
///
/// Unhandled angles (anything that normalizes to a value other than
/// −90, 90, or 180) return the source unchanged.
///
/// # Errors
///
/// Fails when the offscreen canvas cannot be allocated or drawn into.
pub fn rotate(
    document: &Document,
    image: &HtmlCanvasElement,
    degree: f64,
) -> Result<HtmlCanvasElement, PadError> {
    let Some(plan) = rotation_plan(degree, image.width(), image.height()) else {
        return Ok(image.clone());
    };

    let (canvas, context) = offscreen_canvas(document, plan.width, plan.height)?;
    context.rotate(plan.radians)?;
    context.draw_image_with_html_canvas_element(image, plan.dx, plan.dy)?;
    Ok(canvas)
}
