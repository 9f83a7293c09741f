use chrono::{DateTime, Duration, Utc};
use gantt_rs::core::TimeUnit;
use gantt_rs::core::date_math::{add_units, ceil_to, floor_to, subtract_units, units_between};
use proptest::prelude::*;

// Second-aligned instants between 1970 and roughly 2085.
fn any_instant() -> impl Strategy<Value = DateTime<Utc>> {
    (0i64..3_650_000_000).prop_map(|s| DateTime::<Utc>::UNIX_EPOCH + Duration::seconds(s))
}

fn fixed_unit() -> impl Strategy<Value = TimeUnit> {
    prop::sample::select(vec![
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
    ])
}

fn any_unit() -> impl Strategy<Value = TimeUnit> {
    prop::sample::select(vec![
        TimeUnit::Seconds,
        TimeUnit::Minutes,
        TimeUnit::Hours,
        TimeUnit::Days,
        TimeUnit::Weeks,
        TimeUnit::Months,
        TimeUnit::Years,
    ])
}

proptest! {
    #[test]
    fn fixed_unit_addition_is_invertible(
        instant in any_instant(),
        amount in -100_000i64..100_000,
        unit in fixed_unit(),
    ) {
        let there = add_units(instant, amount, unit);
        prop_assert_eq!(subtract_units(there, amount, unit), instant);
    }

    #[test]
    fn fixed_unit_diff_recovers_the_added_amount(
        instant in any_instant(),
        amount in -100_000i64..100_000,
        unit in fixed_unit(),
    ) {
        let shifted = add_units(instant, amount, unit);
        prop_assert_eq!(units_between(instant, shifted, unit), amount);
    }

    #[test]
    fn floor_brackets_the_instant(instant in any_instant(), unit in any_unit()) {
        let floored = floor_to(instant, unit);
        prop_assert!(floored <= instant);
        prop_assert!(instant < add_units(floored, 1, unit));
        // Flooring twice changes nothing.
        prop_assert_eq!(floor_to(floored, unit), floored);
    }

    #[test]
    fn ceil_lands_on_the_next_boundary(instant in any_instant(), unit in any_unit()) {
        let ceiled = ceil_to(instant, unit);
        prop_assert!(instant <= ceiled);
        prop_assert!(ceiled <= add_units(instant, 1, unit));
        // The result is itself a boundary, so ceiling is idempotent.
        prop_assert_eq!(floor_to(ceiled, unit), ceiled);
        prop_assert_eq!(ceil_to(ceiled, unit), ceiled);
    }

    #[test]
    fn month_count_brackets_the_span(
        start in any_instant(),
        extra_seconds in 1i64..200_000_000,
    ) {
        let end = start + Duration::seconds(extra_seconds);
        let months = units_between(start, end, TimeUnit::Months);

        prop_assert!(months >= 0);
        prop_assert!(add_units(start, months, TimeUnit::Months) <= end);
        prop_assert!(end < add_units(start, months + 1, TimeUnit::Months));
    }
}
