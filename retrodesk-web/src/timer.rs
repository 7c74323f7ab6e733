//! `setTimeout` wrappers: one-shot callbacks, cancellable timeouts and a
//! debouncer.
use crate::dom;
use js_sys::{Function, Promise};
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

/// Fire-and-forget `handler` after `delay_ms`.
pub fn schedule(delay_ms: i32, handler: impl FnOnce() + 'static) {
    let Some(win) = dom::window() else {
        return;
    };
    let callback = Closure::once_into_js(handler);
    if let Err(err) = win
        .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
    {
        log::error!("failed to schedule timer: {}", dom::js_error_message(&err));
    }
}

/// A pending timeout, cleared when dropped.
pub struct Timeout {
    id: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Timeout {
    pub fn new(delay_ms: i32, handler: impl FnOnce() + 'static) -> Option<Self> {
        let mut handler = Some(handler);
        let callback = Closure::wrap(Box::new(move || {
            if let Some(f) = handler.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let id = dom::window()?
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                delay_ms,
            )
            .ok()?;
        Some(Self {
            id,
            _callback: callback,
        })
    }
}

impl Drop for Timeout {
    fn drop(&mut self) {
        if let Some(win) = dom::window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Runs only the last of a burst of calls, `delay_ms` after it was made.
pub struct Debouncer {
    delay_ms: i32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    #[must_use]
    pub const fn new(delay_ms: i32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, handler: impl FnOnce() + 'static) {
        // replacing the slot drops (and clears) the previous timeout
        *self.pending.borrow_mut() = Timeout::new(self.delay_ms, handler);
    }

    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error if the timer cannot be scheduled or the underlying JavaScript promise rejects.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    schedule(duration_ms, move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    JsFuture::from(promise).await?;
    Ok(())
}
