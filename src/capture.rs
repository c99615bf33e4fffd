//! DOM input binding: wires canvas events into the stroke machine.
//!
//! Exactly one modality is bound, chosen at initialization from the
//! user-agent sniff: touch devices get `touchstart`/`touchmove`
//! (stroke end relies on the natural absence of further moves), mouse
//! devices get `mousedown`/`mousemove`/`mouseup`/`mouseleave`. Start,
//! move, and end handlers all suppress the browser's default gesture
//! handling so strokes never turn into scrolls or selections.
//!
//! Move events are coalesced to the display refresh rate: the handler
//! records the latest surface-local point and schedules one
//! `requestAnimationFrame` callback; moves arriving within the same
//! frame overwrite the pending point (latest wins, intermediate
//! positions are dropped). When frame scheduling is unavailable the
//! move is processed synchronously.
//!
//! The canvas bounding-box offset is read once at bind time. If the
//! element moves on the page afterwards, captured coordinates drift —
//! a documented limitation, not silently corrected.

#[cfg(test)]
#[path = "capture_test.rs"]
mod capture_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{CanvasRenderingContext2d, Event, MouseEvent, TouchEvent};

use crate::error::PadError;
use crate::stroke::{PaintOp, StrokeState};
use crate::surface::{Point, Surface};

/// Substrings whose presence in the user agent marks a touch/mobile
/// host. Matched case-insensitively.
const MOBILE_UA_MARKERS: &[&str] = &[
    "phone",
    "pad",
    "pod",
    "ios",
    "android",
    "mobile",
    "blackberry",
    "iemobile",
    "mqqbrowser",
    "juc",
    "fennec",
    "wosbrowser",
    "browserng",
    "webos",
    "symbian",
];

/// Whether a navigator user agent belongs to a touch/mobile device.
#[must_use]
pub fn is_mobile_user_agent(user_agent: &str) -> bool {
    let ua = user_agent.to_ascii_lowercase();
    MOBILE_UA_MARKERS.iter().any(|marker| ua.contains(marker))
}

/// Map client (viewport) coordinates to surface-local coordinates
/// using the offset captured at bind time.
#[must_use]
pub fn surface_local(client_x: f64, client_y: f64, offset: Point) -> Point {
    Point::new(client_x - offset.x, client_y - offset.y)
}

/// Keeps the bound event closures alive.
///
/// Dropping this detaches nothing — the listeners stay registered on
/// the canvas (there is deliberately no unbind path), so the bindings
/// must live as long as the pad itself.
pub struct CaptureBindings {
    _handlers: Vec<Closure<dyn FnMut(Event)>>,
    _frame: Rc<Closure<dyn FnMut(f64)>>,
}

/// Execute one paint instruction against the surface context.
///
/// `Begin` opens a fresh path and strokes a zero-length segment;
/// `Extend` grows the open path by one segment and restrokes it, so
/// every move becomes visible immediately rather than at gesture end.
pub fn paint(ctx: &CanvasRenderingContext2d, op: PaintOp) {
    match op {
        PaintOp::Begin(p) => {
            ctx.begin_path();
            ctx.move_to(p.x, p.y);
            ctx.line_to(p.x, p.y);
            ctx.stroke();
        }
        PaintOp::Extend(p) => {
            ctx.line_to(p.x, p.y);
            ctx.stroke();
        }
    }
}

fn mouse_client_point(event: &Event) -> Option<(f64, f64)> {
    let mouse = event.dyn_ref::<MouseEvent>()?;
    Some((f64::from(mouse.client_x()), f64::from(mouse.client_y())))
}

fn touch_client_point(event: &Event) -> Option<(f64, f64)> {
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some((f64::from(touch.client_x()), f64::from(touch.client_y())))
}

fn client_point(event: &Event, mobile: bool) -> Option<(f64, f64)> {
    if mobile {
        touch_client_point(event)
    } else {
        mouse_client_point(event)
    }
}

/// Drain the pending coalesced point, if any, into the stroke machine.
fn drain_pending(
    state: &Rc<RefCell<StrokeState>>,
    pending: &Rc<Cell<Option<Point>>>,
    ctx: &CanvasRenderingContext2d,
) {
    if let Some(point) = pending.take() {
        if let Some(op) = state.borrow_mut().motion(point) {
            paint(ctx, op);
        }
    }
}

/// Bind input capture to the surface's canvas.
///
/// # Errors
///
/// Fails when the host rejects a listener registration.
pub fn bind(surface: &Surface, mobile: bool) -> Result<CaptureBindings, PadError> {
    let rect = surface.canvas.get_bounding_client_rect();
    let offset = Point::new(rect.left(), rect.top());

    let state = Rc::new(RefCell::new(StrokeState::new()));
    let pending: Rc<Cell<Option<Point>>> = Rc::new(Cell::new(None));
    let frame_scheduled = Rc::new(Cell::new(false));
    let ctx = surface.context.clone();

    let frame: Rc<Closure<dyn FnMut(f64)>> = Rc::new(Closure::new({
        let state = Rc::clone(&state);
        let pending = Rc::clone(&pending);
        let frame_scheduled = Rc::clone(&frame_scheduled);
        let ctx = ctx.clone();
        move |_timestamp: f64| {
            frame_scheduled.set(false);
            drain_pending(&state, &pending, &ctx);
        }
    }));

    let start = Closure::<dyn FnMut(Event)>::new({
        let state = Rc::clone(&state);
        let ctx = ctx.clone();
        move |event: Event| {
            event.prevent_default();
            if let Some((cx, cy)) = client_point(&event, mobile) {
                let op = state.borrow_mut().press(surface_local(cx, cy, offset));
                paint(&ctx, op);
            }
        }
    });

    let moved = Closure::<dyn FnMut(Event)>::new({
        let state = Rc::clone(&state);
        let pending = Rc::clone(&pending);
        let frame_scheduled = Rc::clone(&frame_scheduled);
        let frame = Rc::clone(&frame);
        let ctx = ctx.clone();
        move |event: Event| {
            event.prevent_default();
            let Some((cx, cy)) = client_point(&event, mobile) else {
                return;
            };
            pending.set(Some(surface_local(cx, cy, offset)));
            if frame_scheduled.get() {
                return;
            }
            let scheduled = web_sys::window().is_some_and(|window| {
                window
                    .request_animation_frame((*frame).as_ref().unchecked_ref())
                    .is_ok()
            });
            if scheduled {
                frame_scheduled.set(true);
            } else {
                // No frame scheduler available: handle the move
                // synchronously.
                drain_pending(&state, &pending, &ctx);
            }
        }
    });

    let end = Closure::<dyn FnMut(Event)>::new({
        let state = Rc::clone(&state);
        move |event: Event| {
            event.prevent_default();
            state.borrow_mut().release();
        }
    });

    let target = &surface.canvas;
    if mobile {
        target.add_event_listener_with_callback("touchstart", start.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback("touchmove", moved.as_ref().unchecked_ref())?;
        // No explicit touch-end handler: the gesture ends when moves
        // stop arriving, matching the capture contract.
    } else {
        target.add_event_listener_with_callback("mousedown", start.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback("mousemove", moved.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback("mouseup", end.as_ref().unchecked_ref())?;
        target.add_event_listener_with_callback("mouseleave", end.as_ref().unchecked_ref())?;
    }

    Ok(CaptureBindings {
        _handlers: vec![start, moved, end],
        _frame: frame,
    })
}
