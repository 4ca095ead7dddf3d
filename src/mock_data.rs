use chrono::{Duration, Local};

use crate::components::chart::DataPoint;

/// Deterministic 30-day daily volume series so the chart can run
/// standalone, without the real data-fetching collaborator.
pub fn generate_daily_volume() -> Vec<DataPoint> {
    let today = Local::now().date_naive();

    (0..30)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back);
            // Weekly wave plus a slow ramp so the bars have visible shape.
            let phase = days_back as f64 * std::f64::consts::TAU / 7.0;
            let ramp = (29 - days_back) as f64 * 6_500.0;
            let total = (420_000.0 + 180_000.0 * phase.sin() + ramp).trunc();

            DataPoint {
                date: date.format("%Y-%m-%d").to_string(),
                total,
            }
        })
        .collect()
}
