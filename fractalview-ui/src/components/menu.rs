//! Settings panel. Each row writes one field of the shared parameter
//! record; the viewport picks the change up on its next re-arm.

use fractalview_core::{Device, Fractal, Parameters, RenderMode};
use leptos::*;

#[component]
fn MenuRow(
    #[prop(into)] active: Signal<bool>,
    label: &'static str,
    #[prop(into)] enabled: Signal<bool>,
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <div
            class="px-3 py-1 rounded cursor-pointer text-sm"
            class=("bg-gray-600", move || active.get())
            class=("text-gray-500", move || !enabled.get())
            class=("hover:bg-gray-700", move || enabled.get())
            on:click=move |_| {
                if enabled.get_untracked() {
                    on_select.call(());
                }
            }
        >
            {label}
        </div>
    }
}

#[component]
fn MenuSection(title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="mb-3">
            <h2 class="px-3 py-1 text-xs uppercase tracking-wide text-gray-400">{title}</h2>
            {children()}
        </div>
    }
}

#[component]
pub fn Menu(
    params: ReadSignal<Parameters>,
    set_params: WriteSignal<Parameters>,
    gpu_available: ReadSignal<bool>,
) -> impl IntoView {
    let (is_open, set_is_open) = create_signal(true);

    view! {
        <div class="absolute top-4 right-4 w-56 bg-gray-900/90 text-white rounded-lg shadow-lg">
            <div class="flex items-center justify-between px-3 py-2">
                <h1 class="text-base font-semibold">"Settings"</h1>
                <button
                    class="px-2 text-gray-400 hover:text-white"
                    on:click=move |_| set_is_open.update(|open| *open = !*open)
                >
                    "\u{2630}"
                </button>
            </div>
            <Show when=move || is_open.get()>
                <div class="pb-2">
                    <MenuSection title="Fractals">
                        {Fractal::ALL
                            .into_iter()
                            .map(|fractal| {
                                view! {
                                    <MenuRow
                                        active=Signal::derive(move || params.get().fractal == fractal)
                                        label=fractal.display_name()
                                        enabled=Signal::derive(|| true)
                                        on_select=Callback::new(move |_| {
                                            set_params.update(|p| p.fractal = fractal)
                                        })
                                    />
                                }
                            })
                            .collect_view()}
                    </MenuSection>
                    <MenuSection title="Visuals">
                        <MenuRow
                            active=Signal::derive(move || params.get().grid)
                            label="Grid"
                            enabled=Signal::derive(|| true)
                            on_select=Callback::new(move |_| set_params.update(|p| p.grid = !p.grid))
                        />
                        <MenuRow
                            active=Signal::derive(move || params.get().noise)
                            label="Noise"
                            enabled=Signal::derive(|| true)
                            on_select=Callback::new(move |_| set_params.update(|p| p.noise = !p.noise))
                        />
                    </MenuSection>
                    <MenuSection title="Render mode">
                        {RenderMode::ALL
                            .into_iter()
                            .map(|mode| {
                                view! {
                                    <MenuRow
                                        active=Signal::derive(move || params.get().render_mode == mode)
                                        label=mode.display_name()
                                        enabled=Signal::derive(|| true)
                                        on_select=Callback::new(move |_| {
                                            set_params.update(|p| p.render_mode = mode)
                                        })
                                    />
                                }
                            })
                            .collect_view()}
                    </MenuSection>
                    <MenuSection title="Device">
                        <MenuRow
                            active=Signal::derive(move || params.get().device == Device::Cpu)
                            label=Device::Cpu.display_name()
                            enabled=Signal::derive(|| true)
                            on_select=Callback::new(move |_| {
                                set_params.update(|p| p.device = Device::Cpu)
                            })
                        />
                        <MenuRow
                            active=Signal::derive(move || params.get().device == Device::Gpu)
                            label=Device::Gpu.display_name()
                            enabled=Signal::derive(move || gpu_available.get())
                            on_select=Callback::new(move |_| {
                                set_params.update(|p| p.device = Device::Gpu)
                            })
                        />
                    </MenuSection>
                </div>
            </Show>
        </div>
    }
}
