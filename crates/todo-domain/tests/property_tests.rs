//! Property-based tests for the TodoItem aggregate
//!
//! These tests verify that the aggregate keeps its invariants across
//! arbitrary progression sequences.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;
use todo_domain::errors::DomainError;
use todo_domain::todo_item::TodoItem;
use todo_domain::value_objects::TodoItemId;

fn base_date() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 9, 0, 0).unwrap()
}

fn fresh_item() -> TodoItem {
    TodoItem::create(
        TodoItemId::new(1),
        "Property".to_string(),
        None,
        "Work".to_string(),
    )
    .unwrap()
}

/// Whole-number percentages that never add up past 100
fn bounded_percents() -> impl Strategy<Value = Vec<Decimal>> {
    prop::collection::vec(1u32..=40, 0..6).prop_map(|raw| {
        let mut total = 0;
        raw.into_iter()
            .take_while(|p| {
                total += p;
                total <= 100
            })
            .map(Decimal::from)
            .collect()
    })
}

fn item_with(percents: &[Decimal]) -> TodoItem {
    let mut item = fresh_item();
    for (offset, percent) in percents.iter().enumerate() {
        item.add_progression(base_date() + Duration::hours(offset as i64), *percent)
            .unwrap();
    }
    item
}

// ============================================================================
// Totals and completion
// ============================================================================

proptest! {
    /// Total progress equals the sum of accepted percentages
    #[test]
    fn test_total_equals_sum(percents in bounded_percents()) {
        let item = item_with(&percents);
        let expected: Decimal = percents.iter().sum();

        prop_assert_eq!(item.total_progress(), expected);
        prop_assert_eq!(item.is_completed(), expected >= Decimal::ONE_HUNDRED);
        prop_assert_eq!(item.progressions().len(), percents.len());
    }

    /// Deletion and description edits unlock exactly at 50%
    #[test]
    fn test_fifty_percent_lock(percents in bounded_percents()) {
        let mut item = item_with(&percents);
        let total = item.total_progress();

        prop_assert_eq!(item.can_be_deleted(), total <= Decimal::from(50));

        let result = item.update_description(Some("changed".to_string()));
        if total > Decimal::from(50) {
            let is_invalid_state = matches!(result, Err(DomainError::InvalidState { .. }));
            prop_assert!(is_invalid_state);
        } else {
            prop_assert!(result.is_ok());
            prop_assert_eq!(item.description(), "changed");
        }
    }
}

// ============================================================================
// Rejections
// ============================================================================

proptest! {
    /// Percentages outside (0, 100] are rejected whatever the state
    #[test]
    fn test_out_of_range_percent_rejected(
        percents in bounded_percents(),
        bad in prop_oneof![
            (-100_000i64..=0).prop_map(|n| Decimal::new(n, 2)),
            (1_000_000_001i64..10_000_000_000).prop_map(|n| Decimal::new(n, 7)),
        ],
    ) {
        let mut item = item_with(&percents);
        let result = item.add_progression(base_date() + Duration::days(30), bad);

        let is_validation = matches!(result, Err(DomainError::ValidationError { .. }));
        prop_assert!(is_validation);
        prop_assert_eq!(item.progressions().len(), percents.len());
    }

    /// Dates at or before the latest progression are rejected, equality included
    #[test]
    fn test_non_increasing_date_rejected(
        percents in bounded_percents().prop_filter("needs history", |p| !p.is_empty()),
        back_hours in 0i64..48,
    ) {
        let mut item = item_with(&percents);
        let latest = item.latest_progression_date().unwrap();
        let result = item.add_progression(latest - Duration::hours(back_hours), Decimal::new(5, 1));

        match result {
            Err(DomainError::ValidationError { field, .. }) => prop_assert_eq!(field, "date"),
            other => prop_assert!(false, "expected date rejection, got {:?}", other),
        }
    }

    /// Any addition that would pass 100% is rejected, however small the
    /// overshoot; landing on 100% is accepted
    #[test]
    fn test_ceiling(
        percents in bounded_percents(),
        extra in prop_oneof![
            (1i64..1_000).prop_map(|n| Decimal::new(n, 9)),
            (1i64..5_000).prop_map(|n| Decimal::new(n, 2)),
        ],
    ) {
        let mut item = item_with(&percents);
        let remaining = Decimal::ONE_HUNDRED - item.total_progress();
        let next_date = base_date() + Duration::days(30);

        let over = item.clone().add_progression(next_date, remaining + extra);
        let is_validation = matches!(over, Err(DomainError::ValidationError { .. }));
        prop_assert!(is_validation);

        if remaining > Decimal::ZERO {
            prop_assert!(item.add_progression(next_date, remaining).is_ok());
            prop_assert!(item.is_completed());
        }
    }
}
