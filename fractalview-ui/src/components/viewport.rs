//! The viewport controller: owns the one live [`ViewportState`], both
//! backend canvases and the frame scheduler.
//!
//! Any change to the state (gestures, resize, settings) or to backend
//! readiness cancels the outstanding frame callback and re-arms exactly
//! once against the backend matching the active device. The inactive
//! backend's canvas stays mounted at zero opacity and is never
//! scheduled.

use crate::hooks::use_viewport_interaction;
use crate::rendering::{CpuBackend, FrameScheduler, GpuBackend, RenderBackend};
use fractalview_core::{Device, Parameters, ViewportState};
use leptos::*;
use leptos_use::use_window_size;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::HtmlCanvasElement;

type BackendCell = Rc<RefCell<Option<Box<dyn RenderBackend>>>>;

#[component]
pub fn Viewport(
    params: ReadSignal<Parameters>,
    gpu_available: ReadSignal<bool>,
    set_gpu_available: WriteSignal<bool>,
) -> impl IntoView {
    let container_ref = create_node_ref::<html::Div>();
    let cpu_canvas_ref = create_node_ref::<html::Canvas>();
    let gpu_canvas_ref = create_node_ref::<html::Canvas>();

    let state = create_rw_signal(ViewportState::new());
    let window_size = use_window_size();

    let cpu_backend: BackendCell = Rc::new(RefCell::new(None));
    let gpu_backend: BackendCell = Rc::new(RefCell::new(None));
    let scheduler = FrameScheduler::new();

    // Bumped whenever a backend finishes construction, so an already
    // armed single-shot frame re-arms once its renderer exists.
    let (backends_ready, set_backends_ready) = create_signal(0u32);

    use_viewport_interaction(container_ref, state);

    // Settings records land in the state; a fractal switch resets the
    // view inside apply_params.
    create_effect(move |_| {
        let p = params.get();
        state.update(|s| s.apply_params(p));
    });

    // CPU backend exists as soon as its canvas mounts.
    {
        let cpu_backend = Rc::clone(&cpu_backend);
        create_effect(move |_| {
            let Some(canvas_el) = cpu_canvas_ref.get() else {
                return;
            };
            if cpu_backend.borrow().is_some() {
                return;
            }
            let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();
            match CpuBackend::new(canvas) {
                Ok(mut backend) => {
                    let (w, h) = state.get_untracked().size;
                    backend.resize(w, h);
                    *cpu_backend.borrow_mut() = Some(Box::new(backend));
                    set_backends_ready.update(|n| *n += 1);
                }
                Err(e) => log::error!("2d context unavailable: {e:?}"),
            }
        });
    }

    // GPU backend initializes asynchronously; failure disables the GPU
    // device option for the session and the CPU path carries on.
    {
        let gpu_backend = Rc::clone(&gpu_backend);
        create_effect(move |_| {
            let Some(canvas_el) = gpu_canvas_ref.get() else {
                return;
            };
            if gpu_backend.borrow().is_some() {
                return;
            }
            let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>().clone();
            let gpu_backend = Rc::clone(&gpu_backend);
            wasm_bindgen_futures::spawn_local(async move {
                let (w, h) = state.get_untracked().size;
                match GpuBackend::create(canvas, w.max(1), h.max(1)).await {
                    Ok(mut backend) => {
                        let (w, h) = state.get_untracked().size;
                        backend.resize(w, h);
                        *gpu_backend.borrow_mut() = Some(Box::new(backend));
                        set_gpu_available.set(true);
                        set_backends_ready.update(|n| *n += 1);
                    }
                    Err(e) => {
                        log::error!("GPU path disabled for this session: {e}");
                        set_gpu_available.set(false);
                    }
                }
            });
        });
    }

    // Window resize: canvas attributes, backend buffers/surfaces, then
    // the state (which re-arms the loop).
    {
        let cpu_backend = Rc::clone(&cpu_backend);
        let gpu_backend = Rc::clone(&gpu_backend);
        create_effect(move |_| {
            let width = window_size.width.get() as u32;
            let height = window_size.height.get() as u32;

            for canvas_ref in [cpu_canvas_ref, gpu_canvas_ref] {
                if let Some(canvas_el) = canvas_ref.get() {
                    let canvas = canvas_el.unchecked_ref::<HtmlCanvasElement>();
                    canvas.set_width(width);
                    canvas.set_height(height);
                }
            }
            if let Some(backend) = cpu_backend.borrow_mut().as_mut() {
                backend.resize(width, height);
            }
            if let Some(backend) = gpu_backend.borrow_mut().as_mut() {
                backend.resize(width, height);
            }
            state.update(|s| s.resize(width, height));
        });
    }

    // The device the frames actually go to: GPU only while its backend
    // is alive, silent CPU fallback otherwise.
    let active_device = create_memo(move |_| {
        let p = params.get();
        if p.device == Device::Gpu && gpu_available.get() {
            Device::Gpu
        } else {
            Device::Cpu
        }
    });

    // Re-arm on every relevant change. Each armed step renders against
    // the snapshot captured here; continuous modes repeat it until the
    // next change, single-shot modes go idle after one callback.
    {
        let cpu_backend = Rc::clone(&cpu_backend);
        let gpu_backend = Rc::clone(&gpu_backend);
        let scheduler = scheduler.clone();
        create_effect(move |_| {
            backends_ready.get();
            let snapshot = state.get();
            let device = active_device.get();

            if !snapshot.is_renderable() {
                scheduler.cancel();
                return;
            }

            let backend = match device {
                Device::Cpu => Rc::clone(&cpu_backend),
                Device::Gpu => Rc::clone(&gpu_backend),
            };
            let mode = snapshot.params.render_mode;
            scheduler.arm(move |time_ms| {
                if let Some(backend) = backend.borrow_mut().as_mut() {
                    backend.render_step(&snapshot, time_ms);
                }
                mode
            });
        });
    }

    {
        let scheduler = scheduler.clone();
        on_cleanup(move || scheduler.stop());
    }

    view! {
        <div node_ref=container_ref class="absolute inset-0 touch-none select-none">
            <canvas
                node_ref=cpu_canvas_ref
                class="absolute inset-0 block"
                style:opacity=move || if active_device.get() == Device::Cpu { "1" } else { "0" }
            />
            <canvas
                node_ref=gpu_canvas_ref
                class="absolute inset-0 block"
                style:opacity=move || if active_device.get() == Device::Gpu { "1" } else { "0" }
            />
        </div>
    }
}
