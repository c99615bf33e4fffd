//! Freehand drawing widget for signature capture in the browser.
//!
//! This crate is compiled to WebAssembly and runs against an HTML
//! `<canvas>` element. It owns the full lifecycle of a signature pad:
//! sizing the backing buffer for the device pixel ratio, pre-rotating
//! the coordinate system for rotated displays, translating raw DOM
//! pointer/touch events into stroke segments painted in real time, and
//! post-processing the finished bitmap (resize, rotate, export,
//! download, upload). The host JavaScript layer only constructs a
//! [`pad::SignPad`] over its canvas element and calls the exported
//! operations.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`pad`] | The exported [`pad::SignPad`] widget and its public operations |
//! | [`surface`] | Surface model and initializer (DPR scaling, orientation) |
//! | [`style`] | Stroke style configuration applied over defaults |
//! | [`stroke`] | Pure Idle/Pressed gesture state machine |
//! | [`capture`] | DOM event binding and frame-coalesced move handling |
//! | [`transform`] | Resize / rotate into new offscreen canvases |
//! | [`export`] | Data URLs, blobs, download trigger, clear |
//! | [`upload`] | Credentialed multipart POST of an exported blob |
//! | [`error`] | Error taxonomy shared across the crate |
//! | [`consts`] | Shared numeric and string constants |

pub mod capture;
pub mod consts;
pub mod error;
pub mod export;
pub mod pad;
pub mod stroke;
pub mod style;
pub mod surface;
pub mod transform;
pub mod upload;
