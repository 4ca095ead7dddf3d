use yew::prelude::*;

/// Number of placeholder bars in the loading skeleton.
pub const LOADING_BAR_COUNT: usize = 30;

const PLACEHOLDER_HEIGHT_PX: u32 = 200;

/// Pulse-animated skeleton shown while the volume series is fetched.
/// Purely decorative, no props and no state.
#[function_component(ChartLoading)]
pub fn chart_loading() -> Html {
    html! {
        <div class="flex flex-col items-center w-full pb-6 rounded-lg shadow-xl sm:p-8">
            <div class="flex items-end flex-grow w-full mt-2 content-between">
                { for (0..LOADING_BAR_COUNT).map(|_| html! { <LoadingBar /> }) }
            </div>
        </div>
    }
}

#[function_component(LoadingBar)]
fn loading_bar() -> Html {
    html! {
        <div class="relative flex flex-col items-center flex-grow pb-5 ml-1 mr-1 group">
            <div
                class="relative flex justify-center w-full animate-pulse bg-gradient-to-b from-slate-700 to-slate-500 hover:opacity-50"
                style={format!("height: {}px;", PLACEHOLDER_HEIGHT_PX)}
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skeleton_renders_thirty_bars() {
        // The render loop iterates 0..LOADING_BAR_COUNT, one bar each.
        assert_eq!(LOADING_BAR_COUNT, 30);
    }

    #[test]
    fn test_placeholder_height_within_bar_budget() {
        assert!(PLACEHOLDER_HEIGHT_PX <= super::super::MAX_BAR_HEIGHT_PX);
    }
}
