//! Common calendar helpers for the views.

use chrono::{Datelike, Duration, NaiveDate};

use crate::utils::date::{first_of_month, last_of_month};

/// Sunday on or before `date`.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_sunday() as i64;
    date - Duration::days(offset)
}

/// Days of the month containing `date`, without adjacent-month padding
/// (the sidebar mini calendar).
pub fn mini_month(date: NaiveDate) -> Vec<NaiveDate> {
    let last = last_of_month(date);
    first_of_month(date)
        .iter_days()
        .take_while(|day| *day <= last)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(date(2024, 3, 10), date(2024, 3, 10) ; "sunday is its own start")]
    #[test_case(date(2024, 3, 15), date(2024, 3, 10) ; "friday")]
    #[test_case(date(2024, 3, 16), date(2024, 3, 10) ; "saturday")]
    #[test_case(date(2025, 1, 1), date(2024, 12, 29) ; "across new year")]
    fn test_week_start(input: NaiveDate, expected: NaiveDate) {
        assert_eq!(week_start(input), expected);
    }

    #[test]
    fn test_mini_month_lengths() {
        assert_eq!(mini_month(date(2024, 2, 10)).len(), 29);
        assert_eq!(mini_month(date(2023, 2, 10)).len(), 28);
        let april = mini_month(date(2024, 4, 30));
        assert_eq!(april.first(), Some(&date(2024, 4, 1)));
        assert_eq!(april.last(), Some(&date(2024, 4, 30)));
    }
}
