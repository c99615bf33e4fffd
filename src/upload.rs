//! Upload: single-shot credentialed multipart POST of an image blob.
//!
//! Wire contract: `multipart/form-data` with one field named `image`
//! carrying the blob under the logical filename `sign`, credentials
//! included. Success is decided purely by HTTP status — [200, 300) or
//! exactly 304 — and reported through the caller's callbacks. There is
//! no retry, timeout, or cancellation; retry policy belongs to the
//! caller.

#[cfg(test)]
#[path = "upload_test.rs"]
mod upload_test;

use js_sys::Function;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Blob, FormData, RequestCredentials};

use crate::consts::{UPLOAD_FIELD, UPLOAD_FILENAME};
use crate::error::PadError;

/// Whether an HTTP status counts as upload success.
#[must_use]
pub fn is_success_status(status: u16) -> bool {
    (200..300).contains(&status) || status == 304
}

/// Build the form, send the POST, and return the response body.
async fn send(blob: Blob, url: String) -> Result<String, PadError> {
    let form = FormData::new()?;
    form.append_with_blob_and_filename(UPLOAD_FIELD, &blob, UPLOAD_FILENAME)?;

    let response = gloo_net::http::Request::post(&url)
        .credentials(RequestCredentials::Include)
        .body(form)?
        .send()
        .await?;

    if is_success_status(response.status()) {
        Ok(response.text().await?)
    } else {
        Err(PadError::UploadStatus(response.status()))
    }
}

fn invoke(callback: &Function, arg: &JsValue) {
    if let Err(err) = callback.call1(&JsValue::NULL, arg) {
        log::warn!("upload callback threw: {err:?}");
    }
}

/// Fire-and-forget upload of `blob` to `url`.
///
/// `on_success` receives the response body text. Failures go to
/// `on_failure` when supplied, otherwise they are logged — transport
/// errors are never thrown.
pub fn upload(blob: Blob, url: String, on_success: Function, on_failure: Option<Function>) {
    spawn_local(async move {
        match send(blob, url).await {
            Ok(body) => invoke(&on_success, &JsValue::from_str(&body)),
            Err(err) => match on_failure {
                Some(callback) => invoke(&callback, &JsValue::from(err)),
                None => log::error!("upload failed: {err}"),
            },
        }
    });
}
