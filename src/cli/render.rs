use std::fmt::Write;

use chrono::NaiveDate;

use calendar_grid::models::event::Event;
use calendar_grid::models::ui::ViewType;
use calendar_grid::services::task::SavedTaskList;
use calendar_grid::views::{Cell, Projection};

const WEEKDAY_HEADER: &str = "  Sun   Mon   Tue   Wed   Thu   Fri   Sat";

pub fn render_event_line(event: &Event) -> String {
    format!(
        "[{}] {} {} {} ({})",
        event.id,
        event.date,
        event.time_range_label(),
        event.title,
        event.event_type
    )
}

pub fn render_projection(projection: &Projection<'_>, today: NaiveDate) -> String {
    match projection.view {
        ViewType::Month => render_month(projection, today),
        ViewType::Week | ViewType::Day => render_time_grid(projection, today),
    }
}

fn day_marker(cell: &Cell<'_>, today: NaiveDate) -> String {
    let day = cell.date.format("%e").to_string();
    if cell.is_today(today) {
        format!("[{}]", day)
    } else if cell.in_reference_month {
        format!(" {} ", day)
    } else {
        format!("({})", day)
    }
}

fn render_month(projection: &Projection<'_>, today: NaiveDate) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", WEEKDAY_HEADER);
    for week in projection.weeks() {
        let row: Vec<String> = week
            .iter()
            .map(|cell| {
                let count = if cell.is_empty() {
                    " ".to_string()
                } else {
                    cell.events().len().min(9).to_string()
                };
                format!("{}{}", day_marker(cell, today), count)
            })
            .collect();
        let _ = writeln!(out, "{}", row.join(" "));
    }

    for cell in projection.cells().iter().filter(|cell| !cell.is_empty()) {
        let _ = writeln!(out, "\n{}", cell.date.format("%a %b %-d"));
        for event in cell.visible_events() {
            let _ = writeln!(out, "  {} {}", event.time_range_label(), event.title);
        }
        if cell.overflow() > 0 {
            let _ = writeln!(out, "  +{} more", cell.overflow());
        }
    }
    out
}

fn render_time_grid(projection: &Projection<'_>, today: NaiveDate) -> String {
    let mut out = String::new();
    for column in projection.weeks() {
        let Some(first) = column.first() else {
            continue;
        };
        let marker = if first.is_today(today) { " (today)" } else { "" };
        let _ = writeln!(out, "{}{}", first.date.format("%A %B %-d"), marker);

        for cell in column.iter().filter(|cell| !cell.is_empty()) {
            let hour = cell.hour.unwrap_or_default();
            for event in cell.events() {
                let _ = writeln!(
                    out,
                    "  {:02}:00  {} {} [{}] {}",
                    hour,
                    event.time_range_label(),
                    event.title,
                    event.event_type,
                    event.id
                );
            }
        }
    }
    out
}

pub fn render_tasks(tasks: &SavedTaskList) -> String {
    if tasks.is_empty() {
        return "No saved tasks\n".to_string();
    }

    let mut out = String::new();
    for task in tasks.tasks() {
        let _ = writeln!(out, "[ ] {}", task.title);
    }
    out
}
