use yew::prelude::*;

use super::normalize::{normalize, DataPoint};
use crate::common::format::format_count;

#[derive(Properties, PartialEq)]
pub struct ChartProps {
    #[prop_or_default]
    pub data: Option<Vec<DataPoint>>,
}

/// Proportional bar chart over dated totals.
///
/// Absent data is a valid silent state and renders nothing at all, not
/// even the container.
#[function_component(Chart)]
pub fn chart(props: &ChartProps) -> Html {
    let Some(data) = &props.data else {
        return Html::default();
    };

    let numbers = normalize(data);

    html! {
        <div class="flex flex-col items-center w-full pb-6 rounded-lg shadow-xl sm:p-8">
            <div class="flex items-end flex-grow w-full mt-2 content-between">
                { for numbers.iter().map(|point| html! {
                    <Bar
                        value={point.value}
                        height={point.normalized_value}
                        date={point.date.clone()}
                    />
                }) }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct BarProps {
    value: f64,
    height: u32,
    date: String,
}

/// One bar: fill sized by an inline pixel height (an interpolated class
/// name would not survive ahead-of-time CSS extraction), a hover-only
/// tooltip with the formatted raw value, and a truncated date label.
#[function_component(Bar)]
fn bar(props: &BarProps) -> Html {
    let show_value = format_count(props.value);

    html! {
        <div class="relative flex flex-col items-center flex-grow pb-5 ml-1 mr-1 group">
            <span class="absolute top-0 z-10 hidden -mt-6 text-xs text-white group-hover:block">
                {show_value}
            </span>
            <div
                class="relative flex justify-center w-full bg-gradient-to-b from-[#FF00FF] to-[#AC8FFF] hover:opacity-50"
                style={format!("height: {}px;", props.height)}
            ></div>
            <span class="-rotate-45 text-white text-[6px] mt-3">
                {truncate_date_label(&props.date)}
            </span>
        </div>
    }
}

/// Drops the trailing five characters of the date string, turning
/// `"2023-01-01"` into `"2023-"`. Shorter strings yield an empty label
/// rather than an error. Counts chars so multi-byte input never splits
/// a code point.
fn truncate_date_label(date: &str) -> String {
    let keep = date.chars().count().saturating_sub(5);
    date.chars().take(keep).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_date_label() {
        assert_eq!(truncate_date_label("2023-01-01"), "2023-");
        assert_eq!(truncate_date_label("2023-12-31"), "2023-");
    }

    #[test]
    fn test_truncate_date_label_short_input() {
        assert_eq!(truncate_date_label(""), "");
        assert_eq!(truncate_date_label("2023"), "");
        assert_eq!(truncate_date_label("2023-"), "");
        assert_eq!(truncate_date_label("2023-0"), "2");
    }
}
