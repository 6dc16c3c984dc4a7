//! Wires pointer, wheel and touch input to the viewport state.
//!
//! Drag moves only the offset, pinch moves only the scale, so a
//! two-finger drag-and-pinch can apply both in one event without the
//! updates fighting. Browser drag and pinch signals are cumulative; the
//! [`GestureSession`] turns them into per-event deltas.

use crate::hooks::subscription::EventSubscription;
use fractalview_core::{wheel_factor, GestureSession, ViewportState};
use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{PointerEvent, TouchEvent, WheelEvent};

pub fn use_viewport_interaction(
    target_ref: NodeRef<leptos::html::Div>,
    state: RwSignal<ViewportState>,
) {
    let session = store_value(GestureSession::new());
    let dragging = store_value(false);
    let subscriptions = store_value::<Vec<EventSubscription>>(Vec::new());

    create_effect(move |_| {
        let Some(div) = target_ref.get() else {
            return;
        };
        let target = div.unchecked_ref::<web_sys::EventTarget>();

        let mut subs = Vec::new();

        subs.push(
            EventSubscription::listen(target, "pointerdown", move |ev: PointerEvent| {
                ev.prevent_default();
                dragging.set_value(true);
                session.update_value(|s| {
                    s.begin();
                    // First sample is the baseline; contributes no delta.
                    s.drag_delta((ev.client_x() as f64, ev.client_y() as f64));
                });
            })
            .expect("should add pointerdown listener"),
        );

        subs.push(
            EventSubscription::listen(target, "pointermove", move |ev: PointerEvent| {
                if !dragging.get_value() {
                    return;
                }
                let mut delta = (0.0, 0.0);
                session.update_value(|s| {
                    delta = s.drag_delta((ev.client_x() as f64, ev.client_y() as f64));
                });
                if delta != (0.0, 0.0) {
                    state.update(|st| st.pan_by(delta.0, delta.1));
                }
            })
            .expect("should add pointermove listener"),
        );

        for event in ["pointerup", "pointercancel", "pointerleave"] {
            subs.push(
                EventSubscription::listen(target, event, move |_: PointerEvent| {
                    dragging.set_value(false);
                })
                .expect("should add pointer-end listener"),
            );
        }

        subs.push(
            EventSubscription::listen_active(target, "wheel", move |ev: WheelEvent| {
                ev.prevent_default();
                if let Some(factor) = wheel_factor(ev.delta_y()) {
                    state.update(|st| st.zoom_by(factor));
                }
            })
            .expect("should add wheel listener"),
        );

        subs.push(
            EventSubscription::listen_active(target, "touchstart", move |ev: TouchEvent| {
                if let Some(distance) = pinch_distance(&ev) {
                    ev.prevent_default();
                    session.update_value(|s| {
                        s.begin();
                        s.pinch_factor(distance);
                    });
                }
            })
            .expect("should add touchstart listener"),
        );

        subs.push(
            EventSubscription::listen_active(target, "touchmove", move |ev: TouchEvent| {
                let Some(distance) = pinch_distance(&ev) else {
                    return;
                };
                ev.prevent_default();
                let mut factor = None;
                session.update_value(|s| {
                    factor = s.pinch_factor(distance);
                });
                if let Some(factor) = factor {
                    state.update(|st| st.zoom_by(factor));
                }
            })
            .expect("should add touchmove listener"),
        );

        subs.push(
            EventSubscription::listen(target, "touchend", move |_: TouchEvent| {
                session.update_value(|s| s.begin());
            })
            .expect("should add touchend listener"),
        );

        // Replacing the stored set drops any previous listeners.
        subscriptions.set_value(subs);
    });

    on_cleanup(move || {
        subscriptions.set_value(Vec::new());
    });
}

/// Distance between the first two touches, when exactly two are down.
fn pinch_distance(ev: &TouchEvent) -> Option<f64> {
    let touches = ev.touches();
    if touches.length() != 2 {
        return None;
    }
    let a = touches.get(0)?;
    let b = touches.get(1)?;
    let dx = a.client_x() as f64 - b.client_x() as f64;
    let dy = a.client_y() as f64 - b.client_y() as f64;
    Some(dx.hypot(dy))
}
