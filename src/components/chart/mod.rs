mod loading;
mod normalize;
mod view;

pub use loading::{ChartLoading, LOADING_BAR_COUNT};
pub use normalize::{normalize, DataPoint, NormalizedPoint, MAX_BAR_HEIGHT_PX};
pub use view::Chart;
