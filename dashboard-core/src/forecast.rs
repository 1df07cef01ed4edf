use crate::model::ForecastEntry;

/// The API returns forecast samples in 3-hour steps, so 8 samples per day.
const SAMPLES_PER_DAY: usize = 8;

/// Reduce the 3-hourly forecast list to roughly one sample per day by
/// keeping every 8th entry (indices 0, 8, 16, ...), preserving order.
/// Total: an empty list reduces to an empty list.
pub fn daily_samples(entries: Vec<ForecastEntry>) -> Vec<ForecastEntry> {
    entries.into_iter().step_by(SAMPLES_PER_DAY).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn three_hourly_entries(count: usize) -> Vec<ForecastEntry> {
        let start = Utc.with_ymd_and_hms(2024, 3, 12, 0, 0, 0).unwrap();

        (0..count)
            .map(|i| ForecastEntry {
                timestamp: start + Duration::hours(3 * i as i64),
                description: format!("sample {i}"),
                temperature_c: i as f64,
            })
            .collect()
    }

    #[test]
    fn forty_entries_reduce_to_five_daily_samples() {
        let reduced = daily_samples(three_hourly_entries(40));

        let descriptions: Vec<&str> =
            reduced.iter().map(|e| e.description.as_str()).collect();
        assert_eq!(
            descriptions,
            ["sample 0", "sample 8", "sample 16", "sample 24", "sample 32"]
        );
    }

    #[test]
    fn order_is_preserved() {
        let reduced = daily_samples(three_hourly_entries(40));

        for pair in reduced.windows(2) {
            assert!(pair[0].timestamp < pair[1].timestamp);
        }
    }

    #[test]
    fn empty_list_reduces_to_empty() {
        assert!(daily_samples(Vec::new()).is_empty());
    }

    #[test]
    fn short_list_keeps_only_first_entry() {
        // Fewer than 8 samples: only index 0 survives.
        let reduced = daily_samples(three_hourly_entries(7));

        assert_eq!(reduced.len(), 1);
        assert_eq!(reduced[0].description, "sample 0");
    }
}
