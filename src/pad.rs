//! The exported signature pad widget.
//!
//! [`SignPad`] is the JS-facing capability interface: one instance per
//! canvas element, owning its [`Surface`] and input bindings. All
//! public operations run on the UI thread; there is no shared state
//! between instances and no process-wide singleton.

use std::sync::Once;

use js_sys::Function;
use wasm_bindgen::JsValue;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Blob, Document, HtmlCanvasElement, Window};

use crate::capture::{self, CaptureBindings, is_mobile_user_agent};
use crate::error::PadError;
use crate::export;
use crate::style::StyleConfig;
use crate::surface::{self, Surface};
use crate::transform;
use crate::upload;

/// Install the panic hook and console logger exactly once.
fn init_diagnostics() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            // A logger was already installed by the host page.
        }
    });
}

/// A freehand-drawing widget bound to one canvas element.
///
/// Constructed over a canvas, an optional orientation degree
/// (−90, 90, or ±180), and an optional JSON style configuration.
/// Strokes are captured and painted immediately; the finished bitmap
/// can then be resized, rotated, exported, downloaded, or uploaded.
#[wasm_bindgen]
pub struct SignPad {
    window: Window,
    surface: Option<Surface>,
    _bindings: Option<CaptureBindings>,
}

#[wasm_bindgen]
impl SignPad {
    /// Create a pad over `canvas`.
    ///
    /// Passing no canvas yields an inert pad whose operations fail
    /// with an unbound-canvas error — the caller's responsibility to
    /// avoid.
    ///
    /// # Errors
    ///
    /// Throws when no window with a document is available, when the
    /// style JSON is invalid, or when canvas initialization fails.
    #[wasm_bindgen(constructor)]
    pub fn new(
        canvas: Option<HtmlCanvasElement>,
        degree: Option<i32>,
        style_json: Option<String>,
    ) -> Result<SignPad, JsValue> {
        init_diagnostics();

        let window = web_sys::window().ok_or(PadError::DocumentUnavailable)?;
        if window.document().is_none() {
            return Err(PadError::DocumentUnavailable.into());
        }

        let Some(canvas) = canvas else {
            return Ok(Self { window, surface: None, _bindings: None });
        };

        let style = match style_json {
            Some(json) => StyleConfig::from_json(&json)?,
            None => StyleConfig::default(),
        };
        let mobile = is_mobile_user_agent(&window.navigator().user_agent().unwrap_or_default());

        let surface = surface::initialize(&window, canvas, degree, &style, mobile)?;
        let bindings = capture::bind(&surface, mobile)?;
        log::debug!(
            "signpad bound: {}x{} logical, dpr {}, orientation {}°, {}",
            surface.logical_width,
            surface.logical_height,
            surface.device_pixel_ratio,
            surface.orientation_deg,
            if mobile { "touch" } else { "mouse" },
        );

        Ok(Self {
            window,
            surface: Some(surface),
            _bindings: Some(bindings),
        })
    }

    /// Resample the drawing (or `source`) into a canvas of the target
    /// size. Identity — the same canvas, no copy — when the target
    /// matches the current physical size.
    ///
    /// # Errors
    ///
    /// Throws when no canvas is bound and no source is given, or when
    /// the offscreen canvas cannot be created.
    pub fn resize(
        &self,
        width: Option<u32>,
        height: Option<u32>,
        source: Option<HtmlCanvasElement>,
    ) -> Result<HtmlCanvasElement, JsValue> {
        let source = self.source_or_own(source)?;
        Ok(transform::scale(&self.document()?, &source, width, height)?)
    }

    /// Rotate the drawing (or `image`) by `degree`.
    ///
    /// The angle is truncated toward zero and clamped to [−90, 180];
    /// only −90, 90, and 180 produce a rotation, anything else passes
    /// the image through unchanged.
    ///
    /// # Errors
    ///
    /// Throws when no canvas is bound and no image is given, or when
    /// the offscreen canvas cannot be created.
    #[wasm_bindgen(js_name = rotateImage)]
    pub fn rotate_image(
        &self,
        degree: f64,
        image: Option<HtmlCanvasElement>,
    ) -> Result<HtmlCanvasElement, JsValue> {
        let image = self.source_or_own(image)?;
        Ok(transform::rotate(&self.document()?, &image, degree)?)
    }

    /// Export the drawing (or `source`) as a PNG data URL.
    ///
    /// # Errors
    ///
    /// Throws when no canvas is bound and no source is given.
    #[wasm_bindgen(js_name = exportAsPNG)]
    pub fn export_as_png(&self, source: Option<HtmlCanvasElement>) -> Result<String, JsValue> {
        Ok(export::to_png_data_url(&self.source_or_own(source)?)?)
    }

    /// Export the drawing (or `source`) as a JPEG data URL at the
    /// fixed quality of 0.5.
    ///
    /// # Errors
    ///
    /// Throws when no canvas is bound and no source is given.
    #[wasm_bindgen(js_name = exportAsJPEG)]
    pub fn export_as_jpeg(&self, source: Option<HtmlCanvasElement>) -> Result<String, JsValue> {
        Ok(export::to_jpeg_data_url(&self.source_or_own(source)?)?)
    }

    /// Navigate to the attachment form of a PNG data URL, triggering
    /// the browser's save dialog.
    ///
    /// # Errors
    ///
    /// Throws when the navigation is rejected by the host.
    #[wasm_bindgen(js_name = downloadPNG)]
    pub fn download_png(&self, data_url: &str) -> Result<(), JsValue> {
        Ok(export::trigger_download(&self.window, data_url)?)
    }

    /// Decode a data URL into a `Blob` tagged with its MIME type.
    ///
    /// # Errors
    ///
    /// Throws on malformed data URLs.
    #[wasm_bindgen(js_name = toBlob)]
    pub fn to_blob(&self, data_url: &str) -> Result<Blob, JsValue> {
        Ok(export::data_url_to_blob(data_url)?)
    }

    /// Erase the drawing, honoring the surface orientation. The canvas
    /// dimensions are untouched.
    ///
    /// # Errors
    ///
    /// Throws when no canvas is bound.
    pub fn clear(&self) -> Result<(), JsValue> {
        export::clear(self.bound_surface()?);
        Ok(())
    }

    /// Upload `blob` to `url` as a credentialed multipart POST.
    ///
    /// `on_success` receives the response body; failures go to
    /// `on_failure` when supplied and are logged otherwise. Fire and
    /// forget — no retry, no timeout.
    pub fn upload(
        &self,
        blob: Blob,
        url: String,
        on_success: Function,
        on_failure: Option<Function>,
    ) {
        upload::upload(blob, url, on_success, on_failure);
    }
}

impl SignPad {
    fn document(&self) -> Result<Document, PadError> {
        self.window.document().ok_or(PadError::DocumentUnavailable)
    }

    fn bound_surface(&self) -> Result<&Surface, PadError> {
        self.surface.as_ref().ok_or(PadError::CanvasUnbound)
    }

    /// The explicit source canvas, or the pad's own.
    fn source_or_own(
        &self,
        source: Option<HtmlCanvasElement>,
    ) -> Result<HtmlCanvasElement, PadError> {
        match source {
            Some(canvas) => Ok(canvas),
            None => Ok(self.bound_surface()?.canvas.clone()),
        }
    }
}
