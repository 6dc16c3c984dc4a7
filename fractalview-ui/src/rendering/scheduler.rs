//! Cooperative frame loop on `requestAnimationFrame`.
//!
//! One callback outstanding at a time. Arming cancels whatever was
//! pending and bumps a generation counter; a callback that fires with a
//! stale generation is a no-op, so cancellation never races the
//! browser's callback queue. After each frame the loop either re-arms
//! (continuous render modes) or goes idle (single-shot modes), per
//! [`FramePhase::after_frame`].

use fractalview_core::{FramePhase, RenderMode};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

type StepFn = dyn FnMut(f64) -> RenderMode;

#[derive(Clone)]
pub struct FrameScheduler {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    phase: FramePhase,
    generation: u64,
    raf_id: Option<i32>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                phase: FramePhase::Idle,
                generation: 0,
                raf_id: None,
            })),
        }
    }

    /// Cancel any outstanding callback and arm exactly one new one.
    ///
    /// `step` renders one frame against whatever snapshot it captured
    /// and returns the render mode it used; the scheduler re-arms the
    /// same step for continuous modes.
    pub fn arm<F>(&self, step: F)
    where
        F: FnMut(f64) -> RenderMode + 'static,
    {
        let generation = {
            let mut inner = self.inner.borrow_mut();
            if inner.phase.is_stopped() {
                return;
            }
            cancel_pending(&mut inner);
            inner.generation += 1;
            inner.phase = inner.phase.arm();
            inner.generation
        };

        let step: Rc<RefCell<StepFn>> = Rc::new(RefCell::new(step));
        schedule(&self.inner, generation, step);
    }

    /// Cancel the outstanding callback, if any, and go idle.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        if inner.phase.is_stopped() {
            return;
        }
        cancel_pending(&mut inner);
        inner.generation += 1;
        inner.phase = FramePhase::Idle;
    }

    /// Teardown: cancel and refuse all future arming. Terminal.
    pub fn stop(&self) {
        let mut inner = self.inner.borrow_mut();
        cancel_pending(&mut inner);
        inner.generation += 1;
        inner.phase = inner.phase.stop();
    }

    pub fn phase(&self) -> FramePhase {
        self.inner.borrow().phase
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn cancel_pending(inner: &mut Inner) {
    if let Some(id) = inner.raf_id.take() {
        let _ = web_sys::window()
            .expect("should have window")
            .cancel_animation_frame(id);
    }
}

fn schedule(inner: &Rc<RefCell<Inner>>, generation: u64, step: Rc<RefCell<StepFn>>) {
    let inner_rc = Rc::clone(inner);
    let step_rc = Rc::clone(&step);

    let closure = Closure::once_into_js(move |timestamp: f64| {
        {
            let mut inner = inner_rc.borrow_mut();
            if inner.generation != generation || !inner.phase.is_armed() {
                return;
            }
            inner.raf_id = None;
        }

        // The step may write signals whose effects re-arm the scheduler;
        // no borrow is held across it.
        let mode = (&mut *step_rc.borrow_mut())(timestamp);

        let rearm = {
            let mut inner = inner_rc.borrow_mut();
            if inner.generation != generation {
                return;
            }
            inner.phase = inner.phase.after_frame(mode);
            inner.phase.is_armed()
        };

        if rearm {
            schedule(&inner_rc, generation, step_rc);
        }
    });

    let id = web_sys::window()
        .expect("should have window")
        .request_animation_frame(closure.unchecked_ref())
        .expect("should register animation frame");
    inner.borrow_mut().raf_id = Some(id);
}
