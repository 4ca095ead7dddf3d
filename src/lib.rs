use yew::prelude::*;

mod components;
mod mock_data;
pub mod common;
pub mod hooks;
pub mod settings;

use components::chart::{Chart, ChartLoading, DataPoint};
use hooks::FetchState;

#[function_component(App)]
pub fn app() -> Html {
    let volume = use_state(FetchState::<Vec<DataPoint>>::default);

    {
        let volume = volume.clone();
        use_effect_with((), move |_| {
            volume.set(FetchState::Loading);
            // Stands in for the data-fetching collaborator: deliver the
            // mock series after a short delay so the skeleton shows.
            let deliver = {
                let volume = volume.clone();
                gloo_timers::callback::Timeout::new(800, move || {
                    volume.set(FetchState::Success(mock_data::generate_daily_volume()));
                })
            };
            deliver.forget();
            || ()
        });
    }

    html! {
        <div class="flex flex-col items-center w-full min-h-screen bg-slate-900 p-8">
            <h1 class="text-xl text-white mb-4">{"Daily bridge volume"}</h1>
            { if let Some(series) = volume.data() {
                html! { <Chart data={series.clone()} /> }
            } else if let Some(err) = volume.error() {
                html! { <p class="text-sm text-red-400">{err.clone()}</p> }
            } else {
                html! { <ChartLoading /> }
            } }
        </div>
    }
}

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn run_app() {
    settings::init_settings();

    let settings = settings::get_settings();
    wasm_logger::init(wasm_logger::Config::new(settings.log_level));

    log::info!("=== Explorer Frontend Starting ===");
    log::debug!("Debug mode: {}", settings.debug_mode);

    yew::Renderer::<App>::new().render();
}
