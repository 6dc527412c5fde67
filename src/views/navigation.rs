use chrono::{Duration, NaiveDate};

use crate::models::ui::{Direction, ViewType};
use crate::utils::date::shift_month;

/// Move the reference date one view unit back or forward.
///
/// Months shift by calendar month with the day clamped to the target month's
/// length, never by a fixed number of days.
pub fn navigate(view: ViewType, current: NaiveDate, direction: Direction) -> NaiveDate {
    let step: i32 = match direction {
        Direction::Previous => -1,
        Direction::Next => 1,
    };

    match view {
        ViewType::Day => current + Duration::days(step as i64),
        ViewType::Week => current + Duration::weeks(step as i64),
        ViewType::Month => shift_month(current, step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(ViewType::Day, Direction::Next, date(2024, 3, 1) ; "day forward over leap day")]
    #[test_case(ViewType::Day, Direction::Previous, date(2024, 2, 28) ; "day back")]
    #[test_case(ViewType::Week, Direction::Next, date(2024, 3, 7) ; "week forward")]
    #[test_case(ViewType::Week, Direction::Previous, date(2024, 2, 22) ; "week back")]
    #[test_case(ViewType::Month, Direction::Next, date(2024, 3, 29) ; "month forward")]
    #[test_case(ViewType::Month, Direction::Previous, date(2024, 1, 29) ; "month back")]
    fn test_navigate_from_leap_day(view: ViewType, direction: Direction, expected: NaiveDate) {
        assert_eq!(navigate(view, date(2024, 2, 29), direction), expected);
    }

    #[test]
    fn test_month_end_clamps() {
        assert_eq!(
            navigate(ViewType::Month, date(2024, 1, 31), Direction::Next),
            date(2024, 2, 29)
        );
        assert_eq!(
            navigate(ViewType::Month, date(2024, 3, 31), Direction::Previous),
            date(2024, 2, 29)
        );
    }

    #[test]
    fn test_month_next_then_previous_keeps_month() {
        let start = date(2024, 12, 31);
        let back = navigate(
            ViewType::Month,
            navigate(ViewType::Month, start, Direction::Next),
            Direction::Previous,
        );
        assert_eq!((back.year(), back.month()), (2024, 12));
    }
}
