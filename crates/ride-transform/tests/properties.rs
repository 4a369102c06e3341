use chrono::{Days, NaiveDate};
use proptest::prelude::*;

use ride_ingest::RawTable;
use ride_transform::normalize;

/// (day offset, has trip id, temperature in tenths) per generated trip row.
fn trip_rows() -> impl Strategy<Value = Vec<(u8, bool, Option<i16>)>> {
    proptest::collection::vec(
        (0u8..60, any::<bool>(), proptest::option::of(-200i16..400)),
        0..80,
    )
}

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 1, 1).expect("valid date")
}

fn build_table(rows: &[(u8, bool, Option<i16>)]) -> RawTable {
    RawTable {
        headers: vec![
            "ride_id".to_string(),
            "date".to_string(),
            "TAVG".to_string(),
        ],
        rows: rows
            .iter()
            .enumerate()
            .map(|(idx, (offset, has_id, temp))| {
                let date = base_date() + Days::new(u64::from(*offset));
                vec![
                    if *has_id { format!("r{idx}") } else { String::new() },
                    date.format("%Y-%m-%d").to_string(),
                    temp.map(|t| format!("{:.1}", f64::from(t) / 10.0))
                        .unwrap_or_default(),
                ]
            })
            .collect(),
    }
}

proptest! {
    #[test]
    fn output_dates_are_strictly_ascending_and_unique(rows in trip_rows()) {
        let records = normalize(&build_table(&rows)).expect("normalize");
        for pair in records.windows(2) {
            prop_assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn normalize_is_deterministic(rows in trip_rows()) {
        let table = build_table(&rows);
        prop_assert_eq!(
            normalize(&table).expect("normalize"),
            normalize(&table).expect("normalize")
        );
    }

    #[test]
    fn counts_match_non_null_trip_ids(rows in trip_rows()) {
        let records = normalize(&build_table(&rows)).expect("normalize");
        let total: u64 = records.iter().map(|r| r.trip_count).sum();
        let expected = rows.iter().filter(|(_, has_id, _)| *has_id).count() as u64;
        prop_assert_eq!(total, expected);
        let distinct_dates = rows
            .iter()
            .map(|(offset, _, _)| offset)
            .collect::<std::collections::BTreeSet<_>>()
            .len();
        prop_assert_eq!(records.len(), distinct_dates);
    }

    #[test]
    fn garbage_date_rows_do_not_disturb_aggregates(rows in trip_rows()) {
        let clean = build_table(&rows);
        let mut polluted = clean.clone();
        polluted.rows.push(vec![
            "rX".to_string(),
            "not-a-date".to_string(),
            "99.9".to_string(),
        ]);
        prop_assert_eq!(
            normalize(&clean).expect("normalize"),
            normalize(&polluted).expect("normalize")
        );
    }

    #[test]
    fn missing_temperatures_never_become_zero(rows in trip_rows()) {
        let records = normalize(&build_table(&rows)).expect("normalize");
        for record in records {
            if let Some(temp) = record.avg_temp {
                // Means only exist for days with at least one reading, and
                // generated readings stay within the generated bounds.
                prop_assert!((-20.0..40.0).contains(&temp));
            }
        }
    }
}
