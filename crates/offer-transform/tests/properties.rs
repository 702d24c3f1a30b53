//! Property tests for the boolean, date and dedupe stages.

use chrono::NaiveDate;
use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use proptest::prelude::*;

use offer_model::BooleanTokens;
use offer_transform::boolean::classify_cells;
use offer_transform::datetime::{DATE_FORMAT, canonical_date, canonical_time};
use offer_transform::{EventFrame, drop_duplicate_rows};

fn truthy_token() -> impl Strategy<Value = String> {
    (
        prop::sample::select(vec!["true", "1", "yes"]),
        "[ \t]{0,3}",
        "[ \t]{0,3}",
        any::<bool>(),
    )
        .prop_map(|(token, lead, trail, upper)| {
            let token = if upper {
                token.to_uppercase()
            } else {
                token.to_string()
            };
            format!("{lead}{token}{trail}")
        })
}

proptest! {
    #[test]
    fn padded_truthy_tokens_map_to_one(token in truthy_token()) {
        prop_assert_eq!(BooleanTokens::default().classify(&token), Some(1));
    }

    #[test]
    fn normalized_cells_are_zero_or_one(
        cells in prop::collection::vec(prop::option::of(".{0,8}"), 0..32)
    ) {
        let count = cells.len();
        let (values, misses) = classify_cells(cells, &BooleanTokens::default());
        prop_assert_eq!(values.len(), count);
        prop_assert!(misses <= count);
        prop_assert!(values.iter().all(|v| matches!(v, Some(0 | 1))));
    }

    #[test]
    fn canonical_dates_are_fixed_points(
        year in 1900i32..2100,
        month in 1u32..=12,
        day in 1u32..=28,
        style in 0usize..5,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let raw = match style {
            0 => date.format("%Y-%m-%d").to_string(),
            1 => date.format("%m/%d/%Y").to_string(),
            2 => date.format("%B %d, %Y").to_string(),
            3 => date.format("%d %b %Y").to_string(),
            _ => date.format("%Y%m%d").to_string(),
        };
        let expected = date.format(DATE_FORMAT).to_string();
        prop_assert_eq!(canonical_date(&raw), Some(expected.clone()));
        prop_assert_eq!(canonical_date(&expected), Some(expected));
    }

    #[test]
    fn two_digit_years_keep_their_century(
        year in 1970i32..2070,
        month in 1u32..=12,
        day in 1u32..=28,
        style in 0usize..3,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let raw = match style {
            0 => date.format("%-m/%-d/%y").to_string(),
            1 => date.format("%m/%d/%y").to_string(),
            _ => date.format("%b %-d, %y").to_string(),
        };
        prop_assert_eq!(canonical_date(&raw), Some(date.format(DATE_FORMAT).to_string()));
    }

    #[test]
    fn day_first_two_digit_years_when_month_first_is_impossible(
        year in 1970i32..2070,
        month in 1u32..=12,
        day in 13u32..=28,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let raw = date.format("%d/%m/%y").to_string();
        prop_assert_eq!(canonical_date(&raw), Some(date.format(DATE_FORMAT).to_string()));
    }

    #[test]
    fn canonical_times_are_fixed_points(
        hour in 0u32..24,
        minute in 0u32..60,
        second in 0u32..60,
    ) {
        let value = format!("{hour:02}:{minute:02}:{second:02}");
        prop_assert_eq!(canonical_time(&value), Some(value.clone()));
    }

    #[test]
    fn dedupe_keeps_each_distinct_row_once(
        rows in prop::collection::vec((0u8..4, prop::option::of(0u8..3)), 0..40)
    ) {
        let left: Vec<String> = rows.iter().map(|(a, _)| a.to_string()).collect();
        let right: Vec<Option<i64>> = rows.iter().map(|(_, b)| b.map(i64::from)).collect();
        let df = DataFrame::new(vec![
            Series::new("left".into(), left).into_column(),
            Series::new("right".into(), right).into_column(),
        ])
        .unwrap();

        let first = drop_duplicate_rows(EventFrame::new(df)).unwrap();
        let mut distinct = rows.clone();
        distinct.sort_unstable();
        distinct.dedup();
        prop_assert_eq!(first.frame.record_count(), distinct.len());
        prop_assert_eq!(first.removed, rows.len() - distinct.len());

        let second = drop_duplicate_rows(first.frame).unwrap();
        prop_assert_eq!(second.removed, 0);
    }
}
