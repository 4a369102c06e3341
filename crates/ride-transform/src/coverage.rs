//! Temperature coverage queries over normalized output.

use ride_model::{CoverageGap, DailyRecord};

/// Detects a tail coverage gap in a normalized daily series.
///
/// Returns `Some` when the last date with a non-missing temperature precedes
/// the last date overall (or the series never had a reading at all), `None`
/// for an empty series or full tail coverage. Read-only query; the series is
/// not modified.
pub fn temperature_coverage(records: &[DailyRecord]) -> Option<CoverageGap> {
    let last = records.last()?;
    let temperature_end = records
        .iter()
        .rev()
        .find(|record| record.avg_temp.is_some())
        .map(|record| record.date);
    match temperature_end {
        Some(end) if end == last.date => None,
        temperature_end => Some(CoverageGap {
            temperature_end,
            series_end: last.date,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(day: u32, temp: Option<f64>) -> DailyRecord {
        DailyRecord {
            date: NaiveDate::from_ymd_opt(2022, 12, day).expect("valid date"),
            trip_count: 10,
            avg_temp: temp,
        }
    }

    #[test]
    fn full_coverage_has_no_gap() {
        let records = vec![record(1, Some(3.0)), record(2, Some(2.0))];
        assert_eq!(temperature_coverage(&records), None);
    }

    #[test]
    fn tail_gap_is_reported() {
        let records = vec![record(1, Some(3.0)), record(2, None), record(3, None)];
        let gap = temperature_coverage(&records).expect("gap");
        assert_eq!(gap.temperature_end, NaiveDate::from_ymd_opt(2022, 12, 1));
        assert_eq!(
            gap.series_end,
            NaiveDate::from_ymd_opt(2022, 12, 3).expect("valid date")
        );
        assert_eq!(gap.gap_days(), Some(2));
    }

    #[test]
    fn interior_gap_with_covered_tail_is_not_a_gap() {
        let records = vec![record(1, Some(3.0)), record(2, None), record(3, Some(1.0))];
        assert_eq!(temperature_coverage(&records), None);
    }

    #[test]
    fn all_missing_series_reports_open_gap() {
        let records = vec![record(1, None), record(2, None)];
        let gap = temperature_coverage(&records).expect("gap");
        assert_eq!(gap.temperature_end, None);
        assert_eq!(gap.gap_days(), None);
    }

    #[test]
    fn empty_series_has_no_gap() {
        assert_eq!(temperature_coverage(&[]), None);
    }
}
