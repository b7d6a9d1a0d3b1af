//! Calendar-year age computation.

use chrono::{Datelike, NaiveDate};

/// Computes a person's age in whole calendar years.
///
/// The age is the difference of the year components only, with no
/// adjustment for month or day. A dependent born in December 1973 is
/// already 51 on 2024-01-01. This reproduces the established billing
/// policy; do not replace it with an exact-age calculation.
///
/// # Examples
///
/// ```
/// use benefits_engine::calculation::calendar_year_age;
/// use chrono::NaiveDate;
///
/// let born = NaiveDate::from_ymd_opt(1973, 12, 31).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(calendar_year_age(born, as_of), 51);
/// ```
pub fn calendar_year_age(date_of_birth: NaiveDate, as_of: NaiveDate) -> i32 {
    as_of.year() - date_of_birth.year()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_is_year_difference() {
        assert_eq!(calendar_year_age(date(1998, 3, 3), date(2024, 6, 1)), 26);
        assert_eq!(calendar_year_age(date(2020, 6, 23), date(2024, 6, 1)), 4);
    }

    #[test]
    fn test_no_month_day_adjustment() {
        // Born late December, evaluated the following January: already a
        // year older under the calendar-year policy.
        assert_eq!(calendar_year_age(date(1973, 12, 31), date(2024, 1, 1)), 51);
    }

    #[test]
    fn test_birthday_later_in_year_still_counts() {
        // An exact-age computation would say 25 here; the policy says 26.
        assert_eq!(calendar_year_age(date(1998, 12, 1), date(2024, 1, 15)), 26);
    }

    #[test]
    fn test_born_this_year_is_zero() {
        assert_eq!(calendar_year_age(date(2024, 2, 1), date(2024, 11, 1)), 0);
    }
}
