//! Scoped DOM event listeners.
//!
//! A listener's lifetime is the subscription object's lifetime: dropping
//! it removes the listener. Components keep their subscriptions in
//! stored values released on cleanup, so no handler outlives the
//! viewport it was wired to.

use std::any::Any;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{AddEventListenerOptions, EventTarget};

pub struct EventSubscription {
    target: EventTarget,
    event: &'static str,
    function: js_sys::Function,
    // Keeps the Rust closure alive as long as the listener is attached.
    _closure: Box<dyn Any>,
}

impl EventSubscription {
    /// Attach `handler` for `event` on `target`.
    pub fn listen<E>(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Result<Self, JsValue>
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        target.add_event_listener_with_callback(event, &function)?;
        Ok(Self {
            target: target.clone(),
            event,
            function,
            _closure: Box::new(closure),
        })
    }

    /// Attach as a non-passive listener, for handlers that call
    /// `prevent_default` on scroll-class events (wheel, touch).
    pub fn listen_active<E>(
        target: &EventTarget,
        event: &'static str,
        handler: impl FnMut(E) + 'static,
    ) -> Result<Self, JsValue>
    where
        E: FromWasmAbi + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        let function: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();

        let options = AddEventListenerOptions::new();
        options.set_passive(false);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event, &function, &options,
        )?;

        Ok(Self {
            target: target.clone(),
            event,
            function,
            _closure: Box::new(closure),
        })
    }
}

impl Drop for EventSubscription {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, &self.function);
    }
}
