use crate::components::{Menu, Viewport};
use fractalview_core::Parameters;
use leptos::*;

#[component]
pub fn App() -> impl IntoView {
    let (params, set_params) = create_signal(Parameters::default());

    // Flips true once the GPU backend finishes initializing; stays false
    // for the whole session if shader compilation or device acquisition
    // fails.
    let (gpu_available, set_gpu_available) = create_signal(false);

    view! {
        <div class="relative w-screen h-screen overflow-hidden bg-black">
            <Viewport params=params gpu_available=gpu_available set_gpu_available=set_gpu_available/>
            <Menu params=params set_params=set_params gpu_available=gpu_available/>
        </div>
    }
}
