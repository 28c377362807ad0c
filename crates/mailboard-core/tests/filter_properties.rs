//! Property tests for the filter engine.

use chrono::{Duration, Utc};
use proptest::prelude::*;
use proptest::test_runner::Config;

use mailboard_core::{Priority, Record, RecordFilter, Region, Status, StatusFilter};

fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[a-z0-9]{1,12}",
        "[A-Za-z ]{0,24}",
        prop::sample::select(vec![
            "joao@empresa.com".to_string(),
            "maria@cliente.com".to_string(),
            "suporte@servico.com".to_string(),
        ]),
        0..3_usize,
        0..4_usize,
        proptest::option::of(0..27_usize),
        proptest::option::of("[A-Za-z]{3,10}"),
        0_i64..(30 * 24 * 60 * 60),
    )
        .prop_map(
            |(id, subject, sender, status, priority, region, city, age_secs)| Record {
                id,
                subject,
                sender,
                recipient: "voce@empresa.com".to_string(),
                content: "corpo".to_string(),
                status: Status::ALL[status],
                priority: Priority::ALL[priority],
                category: None,
                region: region.map(|index| Region::ALL[index]),
                city,
                date: Utc::now() - Duration::seconds(age_secs),
                tags: Vec::new(),
            },
        )
}

proptest! {
    #![proptest_config(Config::with_cases(128))]

    #[test]
    fn prop_default_filter_is_identity(
        records in prop::collection::vec(record_strategy(), 0..20)
    ) {
        let now = Utc::now();
        let filtered = RecordFilter::default().apply(&records, now);
        prop_assert_eq!(filtered, records);
    }

    #[test]
    fn prop_urgent_matches_exactly_high_or_urgent(
        records in prop::collection::vec(record_strategy(), 0..20)
    ) {
        let now = Utc::now();
        let filtered = RecordFilter::default()
            .with_status(StatusFilter::Urgent)
            .apply(&records, now);
        let expected: Vec<Record> = records
            .iter()
            .filter(|record| matches!(record.priority, Priority::High | Priority::Urgent))
            .cloned()
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn prop_recent_matches_iff_inside_the_window(
        record in record_strategy(),
        age_secs in 0_i64..(30 * 24 * 60 * 60)
    ) {
        let now = Utc::now();
        let mut record = record;
        record.date = now - Duration::seconds(age_secs);

        let matched = RecordFilter::default()
            .with_status(StatusFilter::Recent)
            .matches(&record, now);

        prop_assert_eq!(matched, record.date > now - Duration::days(7));
    }

    #[test]
    fn prop_region_filter_keeps_only_that_region(
        records in prop::collection::vec(record_strategy(), 0..20),
        region_index in 0..27_usize
    ) {
        let now = Utc::now();
        let region = Region::ALL[region_index];

        let filtered = RecordFilter::default().with_region(region).apply(&records, now);

        prop_assert!(filtered.iter().all(|record| record.region == Some(region)));
        let expected = records
            .iter()
            .filter(|record| record.region == Some(region))
            .count();
        prop_assert_eq!(filtered.len(), expected);
    }

    #[test]
    fn prop_conjunction_equals_sequential_application(
        records in prop::collection::vec(record_strategy(), 0..20),
        region_index in 0..27_usize,
        priority_index in 0..4_usize
    ) {
        let now = Utc::now();
        let region = Region::ALL[region_index];
        let priority = Priority::ALL[priority_index];

        let combined = RecordFilter::default()
            .with_region(region)
            .with_priority(priority)
            .apply(&records, now);
        let sequential = RecordFilter::default().with_priority(priority).apply(
            &RecordFilter::default().with_region(region).apply(&records, now),
            now,
        );

        prop_assert_eq!(combined, sequential);
    }

    #[test]
    fn prop_apply_distributes_over_concatenation(
        left in prop::collection::vec(record_strategy(), 0..10),
        right in prop::collection::vec(record_strategy(), 0..10),
        status_index in 0..5_usize
    ) {
        let now = Utc::now();
        let filter = RecordFilter::default().with_status(StatusFilter::ALL[status_index]);

        let mut both = left.clone();
        both.extend(right.clone());
        let mut expected = filter.apply(&left, now);
        expected.extend(filter.apply(&right, now));

        prop_assert_eq!(filter.apply(&both, now), expected);
    }

    #[test]
    fn prop_search_is_case_insensitive(
        record in record_strategy(),
        query in "[A-Za-z]{1,6}"
    ) {
        let now = Utc::now();

        let lower = RecordFilter::default()
            .with_search(query.to_lowercase())
            .matches(&record, now);
        let upper = RecordFilter::default()
            .with_search(query.to_uppercase())
            .matches(&record, now);

        prop_assert_eq!(lower, upper);
    }
}
