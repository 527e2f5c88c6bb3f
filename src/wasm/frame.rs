use std::cell::RefCell;
use std::ops::ControlFlow;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use web_sys::window;

type FrameCallback = Closure<dyn FnMut(f64)>;

/// Calls `tick` once per animation frame with the frame timestamp until it
/// returns `Break`.
///
/// `state` is moved into the scheduler and handed to every tick by `&mut`,
/// so whatever the loop needs is owned here and nowhere else.
pub fn run<S, F>(mut state: S, mut tick: F) -> Result<(), JsValue>
where
    S: 'static,
    F: FnMut(&mut S, f64) -> ControlFlow<()> + 'static,
{
    // The callback has to re-register itself, so it lives in a shared slot
    // it can reach from inside its own body.
    let slot: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();

    *slot.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        if tick(&mut state, timestamp).is_break() {
            log::info!("frame loop stopped at {timestamp:.0} ms");
            // Breaks the Rc cycle; the closure is freed once this call returns.
            let _ = next.borrow_mut().take();
            return;
        }

        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = request_frame(callback) {
                log::error!("requestAnimationFrame failed: {err:?}");
            }
        }
    }) as Box<dyn FnMut(f64)>));

    let first = slot.borrow();
    request_frame(first.as_ref().ok_or("frame callback missing")?)?;
    Ok(())
}

fn request_frame(callback: &FrameCallback) -> Result<i32, JsValue> {
    window()
        .ok_or("no window")?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}
