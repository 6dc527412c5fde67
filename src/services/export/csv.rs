use crate::models::event::Event;
use crate::utils::date::format_time;

/// Header row, named after the slot record fields. Data rows quote every field.
pub const CSV_HEADER: &str = "title,description,date,startTime,endTime,eventType";

/// Quote a field: wrap in `"` and double any embedded quote.
pub fn quote_field(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

pub(super) fn to_csv(events: &[Event]) -> String {
    let mut lines = Vec::with_capacity(events.len() + 1);
    lines.push(CSV_HEADER.to_string());

    for event in events {
        let fields = [
            event.title.clone(),
            event.description.clone().unwrap_or_default(),
            event.date.format("%Y-%m-%d").to_string(),
            format_time(event.start_time),
            format_time(event.end_time),
            event.event_type.as_str().to_string(),
        ];
        let row: Vec<String> = fields.iter().map(|f| quote_field(f)).collect();
        lines.push(row.join(","));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::event::{EventDraft, EventType};
    use chrono::{NaiveDate, NaiveTime};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_quote_field() {
        assert_eq!(quote_field("plain"), "\"plain\"");
        assert_eq!(quote_field("a, b"), "\"a, b\"");
        assert_eq!(quote_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(quote_field(""), "\"\"");
    }

    #[test]
    fn test_header_names_record_fields() {
        assert_eq!(CSV_HEADER.split(',').count(), 6);
        assert!(CSV_HEADER.starts_with("title,description,"));
    }

    #[test]
    fn test_header_only_for_empty_collection() {
        assert_eq!(to_csv(&[]), CSV_HEADER);
    }

    #[test]
    fn test_rows_quote_embedded_commas_and_newlines() {
        let event = EventDraft::new(
            "Review, part 2",
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        )
        .event_type(EventType::Meeting)
        .description("Bring \"notes\"\nand laptop")
        .into_event("9".into());

        let csv = to_csv(&[event]);
        let expected = format!(
            "{}\n{}",
            CSV_HEADER,
            "\"Review, part 2\",\"Bring \"\"notes\"\"\nand laptop\",\"2024-03-15\",\"14:30\",\"15:30\",\"meeting\""
        );
        assert_eq!(csv, expected);
    }
}
