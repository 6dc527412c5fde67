use chrono::{Datelike, Duration, NaiveDate};

use super::utils::week_start;
use crate::models::ui::ViewType;

/// Title shown above the grid.
///
/// Month: `March 2024`. Week: `March 10 - 16, 2024`, naming both months
/// (and years) when the week straddles them. Day: `March 15, 2024`.
pub fn header_text(view: ViewType, date: NaiveDate) -> String {
    match view {
        ViewType::Month => date.format("%B %Y").to_string(),
        ViewType::Day => date.format("%B %-d, %Y").to_string(),
        ViewType::Week => {
            let start = week_start(date);
            let end = start + Duration::days(6);
            if start.year() != end.year() {
                format!("{} - {}", start.format("%B %-d, %Y"), end.format("%B %-d, %Y"))
            } else if start.month() != end.month() {
                format!("{} - {}", start.format("%B %-d"), end.format("%B %-d, %Y"))
            } else {
                format!("{} - {}", start.format("%B %-d"), end.format("%-d, %Y"))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test_case(ViewType::Month, date(2024, 3, 15), "March 2024" ; "month")]
    #[test_case(ViewType::Day, date(2024, 3, 5), "March 5, 2024" ; "day")]
    #[test_case(ViewType::Week, date(2024, 3, 15), "March 10 - 16, 2024" ; "week within month")]
    #[test_case(ViewType::Week, date(2024, 4, 2), "March 31 - April 6, 2024" ; "week across months")]
    #[test_case(ViewType::Week, date(2025, 1, 1), "December 29, 2024 - January 4, 2025" ; "week across years")]
    fn test_header_text(view: ViewType, reference: NaiveDate, expected: &str) {
        assert_eq!(header_text(view, reference), expected);
    }
}
