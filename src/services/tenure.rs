//! Tenure calculation.

use chrono::{Datelike, NaiveDate};

use crate::models::Employee;

/// Whole calendar years between two dates.
///
/// A year only counts once its anniversary has been reached, and the
/// result is zero when `to` is before `from`.
pub fn full_years_between(from: NaiveDate, to: NaiveDate) -> u32 {
    if to < from {
        return 0;
    }
    let mut years = to.year() - from.year();
    if (to.month(), to.day()) < (from.month(), from.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

/// Number of full years the employee has worked as of `reference_date`.
///
/// # Examples
///
/// ```
/// use employee_registry::models::{Employee, Position};
/// use employee_registry::services::tenure_in_years;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hired = NaiveDate::from_ymd_opt(2024, 11, 18).unwrap();
/// let anna = Employee::new("Anna", "anna@tech.pl", "TechCorp", Position::Programmer,
///     Decimal::new(9000, 0), hired).unwrap();
///
/// let day_before_anniversary = NaiveDate::from_ymd_opt(2025, 11, 17).unwrap();
/// assert_eq!(tenure_in_years(&anna, day_before_anniversary), 0);
/// ```
pub fn tenure_in_years(employee: &Employee, reference_date: NaiveDate) -> u32 {
    full_years_between(employee.hire_date(), reference_date)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Position;
    use proptest::prelude::*;
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn hired_on(hire_date: NaiveDate) -> Employee {
        Employee::new(
            "Anna Nowak",
            "anna@tech.pl",
            "TechCorp",
            Position::Programmer,
            Decimal::new(9000, 0),
            hire_date,
        )
        .unwrap()
    }

    #[test]
    fn test_exact_anniversary_counts() {
        let today = date(2025, 11, 17);
        assert_eq!(tenure_in_years(&hired_on(date(2024, 11, 17)), today), 1);
        assert_eq!(tenure_in_years(&hired_on(date(2023, 11, 17)), today), 2);
    }

    #[test]
    fn test_day_before_anniversary_does_not_count() {
        let today = date(2025, 11, 17);
        assert_eq!(tenure_in_years(&hired_on(date(2024, 11, 18)), today), 0);
        assert_eq!(tenure_in_years(&hired_on(date(2020, 12, 1)), today), 4);
    }

    #[test]
    fn test_future_hire_date_is_zero() {
        let today = date(2025, 11, 17);
        assert_eq!(tenure_in_years(&hired_on(date(2030, 1, 1)), today), 0);
        assert_eq!(tenure_in_years(&hired_on(date(2025, 11, 18)), today), 0);
    }

    #[test]
    fn test_hired_today_is_zero() {
        let today = date(2025, 11, 17);
        assert_eq!(tenure_in_years(&hired_on(today), today), 0);
    }

    #[test]
    fn test_leap_day_hire() {
        let hired = date(2020, 2, 29);
        assert_eq!(full_years_between(hired, date(2021, 2, 28)), 0);
        assert_eq!(full_years_between(hired, date(2021, 3, 1)), 1);
        assert_eq!(full_years_between(hired, date(2024, 2, 29)), 4);
    }

    proptest! {
        #[test]
        fn prop_tenure_is_bounded_by_year_delta(
            from_days in 0i64..40_000,
            to_days in 0i64..40_000,
        ) {
            let epoch = date(1950, 1, 1);
            let from = epoch + chrono::Duration::days(from_days);
            let to = epoch + chrono::Duration::days(to_days);

            let years = full_years_between(from, to);

            if to < from {
                prop_assert_eq!(years, 0);
            } else {
                let delta = (to.year() - from.year()) as u32;
                prop_assert!(years == delta || years + 1 == delta);
            }
        }
    }
}
