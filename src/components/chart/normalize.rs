use serde::{Deserialize, Serialize};

/// Pixel budget the tallest bar in a batch is scaled to.
pub const MAX_BAR_HEIGHT_PX: u32 = 300;

/// One raw observation delivered by the data-fetching collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DataPoint {
    pub date: String,
    pub total: f64,
}

/// A data point rescaled to the fixed pixel budget.
///
/// Derived per render and discarded afterwards, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedPoint {
    pub value: f64,
    pub date: String,
    pub normalized_value: u32,
}

/// Linearly rescales totals so the batch maximum maps to
/// `MAX_BAR_HEIGHT_PX`, truncating toward zero.
///
/// The maximum is taken over the current batch only. A batch whose
/// totals are all zero (or an empty batch) normalizes to zero-height
/// bars instead of dividing by zero, and non-finite totals are ignored
/// by the max scan so no NaN ever reaches a style attribute.
pub fn normalize(data: &[DataPoint]) -> Vec<NormalizedPoint> {
    let max = data
        .iter()
        .map(|point| point.total)
        .filter(|total| total.is_finite())
        .fold(0.0_f64, f64::max);

    log::debug!("normalizing {} points, batch max {}", data.len(), max);

    data.iter()
        .map(|point| {
            let scaled = if max > 0.0 {
                (point.total / max * MAX_BAR_HEIGHT_PX as f64).trunc()
            } else {
                0.0
            };
            NormalizedPoint {
                value: point.total,
                date: point.date.clone(),
                normalized_value: scaled.clamp(0.0, MAX_BAR_HEIGHT_PX as f64) as u32,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(date: &str, total: f64) -> DataPoint {
        DataPoint {
            date: date.to_string(),
            total,
        }
    }

    #[test]
    fn test_normalize_scales_max_to_budget() {
        let data = vec![point("2023-01-01", 10.0), point("2023-01-02", 20.0)];

        let normalized = normalize(&data);

        assert_eq!(normalized.len(), 2);
        assert_eq!(normalized[0].value, 10.0);
        assert_eq!(normalized[0].normalized_value, 150);
        assert_eq!(normalized[1].value, 20.0);
        assert_eq!(normalized[1].normalized_value, 300);
    }

    #[test]
    fn test_normalize_preserves_order() {
        let data = vec![
            point("2023-01-03", 5.0),
            point("2023-01-01", 25.0),
            point("2023-01-02", 15.0),
        ];

        let normalized = normalize(&data);

        let dates: Vec<&str> = normalized.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["2023-01-03", "2023-01-01", "2023-01-02"]);
    }

    #[test]
    fn test_normalize_truncates_toward_zero() {
        let data = vec![point("2023-01-01", 1.0), point("2023-01-02", 7.0)];

        let normalized = normalize(&data);

        // 1/7 * 300 = 42.857..., truncated, never rounded up.
        assert_eq!(normalized[0].normalized_value, 42);
        assert_eq!(normalized[1].normalized_value, 300);
    }

    #[test]
    fn test_normalize_bounds() {
        let data = vec![
            point("2023-01-01", 3.0),
            point("2023-01-02", 11.0),
            point("2023-01-03", 11.0),
            point("2023-01-04", 0.0),
        ];

        let normalized = normalize(&data);

        for p in &normalized {
            assert!(p.normalized_value <= MAX_BAR_HEIGHT_PX);
        }
        assert_eq!(normalized[1].normalized_value, MAX_BAR_HEIGHT_PX);
        assert_eq!(normalized[2].normalized_value, MAX_BAR_HEIGHT_PX);
        assert_eq!(normalized[3].normalized_value, 0);
    }

    #[test]
    fn test_normalize_empty_input() {
        assert!(normalize(&[]).is_empty());
    }

    #[test]
    fn test_normalize_all_zero_batch() {
        let data = vec![point("2023-01-01", 0.0), point("2023-01-02", 0.0)];

        let normalized = normalize(&data);

        assert_eq!(normalized.len(), 2);
        assert!(normalized.iter().all(|p| p.normalized_value == 0));
    }

    #[test]
    fn test_normalize_ignores_non_finite_totals() {
        let data = vec![point("2023-01-01", f64::NAN), point("2023-01-02", 8.0)];

        let normalized = normalize(&data);

        assert_eq!(normalized[0].normalized_value, 0);
        assert_eq!(normalized[1].normalized_value, 300);
    }
}
