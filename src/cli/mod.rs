// Command-line front end
// Subcommands map one-to-one onto store, projector and export operations

mod render;

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate, NaiveTime};
use clap::{Parser, Subcommand};

use calendar_grid::models::event::{EventDraft, EventPatch, EventType};
use calendar_grid::models::settings::{DropPolicy, Settings};
use calendar_grid::models::ui::{Direction, ViewType};
use calendar_grid::services::event::{filter_events_by_type, EventStore};
use calendar_grid::services::export::{ExportFormat, ExportService};
use calendar_grid::services::settings::SettingsService;
use calendar_grid::services::storage::open_storage;
use calendar_grid::services::task::SavedTaskList;
use calendar_grid::utils::date::{parse_date, parse_time};
use calendar_grid::views::{header_text, navigate, project_with, DragState, ProjectionOptions};

#[derive(Parser)]
#[command(name = "calendar-grid")]
#[command(about = "Month/week/day calendar with drag rescheduling and JSON/CSV export")]
pub struct Cli {
    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the grid for a view
    Show {
        /// month, week or day (defaults to the configured view)
        #[arg(short, long, value_parser = parse_view)]
        view: Option<ViewType>,

        /// Reference date, YYYY-MM-DD (defaults to today)
        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        /// Step this many views forward (negative for back)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,

        /// Only show these event types
        #[arg(short = 't', long = "type", value_parser = parse_type)]
        types: Vec<EventType>,
    },
    /// Create an event
    Add {
        title: String,

        #[arg(short, long, value_parser = parse_date_arg)]
        date: NaiveDate,

        /// Start time, HH:MM
        #[arg(short, long, value_parser = parse_time_arg)]
        start: NaiveTime,

        /// End time, HH:MM (defaults to one hour after start)
        #[arg(short, long, value_parser = parse_time_arg)]
        end: Option<NaiveTime>,

        #[arg(short = 't', long = "type", value_parser = parse_type, default_value = "default")]
        event_type: EventType,

        #[arg(long)]
        description: Option<String>,
    },
    /// Change fields of an event
    Edit {
        id: String,

        #[arg(long)]
        title: Option<String>,

        #[arg(short, long, value_parser = parse_date_arg)]
        date: Option<NaiveDate>,

        #[arg(short, long, value_parser = parse_time_arg)]
        start: Option<NaiveTime>,

        #[arg(short, long, value_parser = parse_time_arg)]
        end: Option<NaiveTime>,

        #[arg(short = 't', long = "type", value_parser = parse_type)]
        event_type: Option<EventType>,

        #[arg(long, conflicts_with = "clear_description")]
        description: Option<String>,

        #[arg(long)]
        clear_description: bool,
    },
    /// Delete an event
    Remove { id: String },
    /// Move an event like a drag and drop
    Move {
        id: String,

        /// Target day, YYYY-MM-DD
        #[arg(short, long, value_parser = parse_date_arg)]
        date: NaiveDate,

        /// Target hour row; without it only the date changes
        #[arg(long)]
        hour: Option<u32>,

        /// Keep the original length instead of a one-hour block
        #[arg(long)]
        keep_duration: bool,
    },
    /// Export every event
    Export {
        #[arg(short, long, value_parser = parse_format, default_value = "json")]
        format: ExportFormat,

        /// File or directory to write; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// List saved tasks
    Tasks,
}

fn parse_view(value: &str) -> Result<ViewType, String> {
    value.parse()
}

fn parse_type(value: &str) -> Result<EventType, String> {
    value.parse()
}

fn parse_format(value: &str) -> Result<ExportFormat, String> {
    value.parse()
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).ok_or_else(|| format!("'{}' is not a YYYY-MM-DD date", value))
}

fn parse_time_arg(value: &str) -> Result<NaiveTime, String> {
    parse_time(value).ok_or_else(|| format!("'{}' is not an HH:MM time", value))
}

fn load_settings(config: Option<&PathBuf>) -> Result<Settings> {
    let service = match config {
        Some(path) => SettingsService::new(path),
        None => SettingsService::default_location()?,
    };
    service.get()
}

pub fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.config.as_ref())?;
    let storage = open_storage(&settings).context("Failed to open storage")?;

    if let Commands::Tasks = cli.command {
        let tasks = SavedTaskList::load(storage.as_ref());
        print!("{}", render::render_tasks(&tasks));
        return Ok(());
    }

    let mut store = EventStore::open(storage);

    match cli.command {
        Commands::Show {
            view,
            date,
            offset,
            types,
        } => {
            let view = view.unwrap_or(settings.default_view);
            let mut reference = date.unwrap_or_else(|| Local::now().date_naive());
            let direction = if offset < 0 {
                Direction::Previous
            } else {
                Direction::Next
            };
            for _ in 0..offset.unsigned_abs() {
                reference = navigate(view, reference, direction);
            }

            let events = filter_events_by_type(store.all(), &types);
            let options = ProjectionOptions {
                week_hours: settings.week_hours,
                visible_per_day: settings.max_visible_per_day,
            };
            let projection = project_with(view, reference, &events, &options);

            println!("{}", header_text(view, reference));
            print!("{}", render::render_projection(&projection, Local::now().date_naive()));
        }
        Commands::Add {
            title,
            date,
            start,
            end,
            event_type,
            description,
        } => {
            let mut draft = EventDraft::new(title, date, start).event_type(event_type);
            draft.end_time = end;
            draft.description = description;
            let event = store.add(draft)?;
            println!("Created {}", render::render_event_line(&event));
        }
        Commands::Edit {
            id,
            title,
            date,
            start,
            end,
            event_type,
            description,
            clear_description,
        } => {
            let patch = EventPatch {
                title,
                date,
                start_time: start,
                end_time: end,
                event_type,
                description: if clear_description {
                    Some(None)
                } else {
                    description.map(Some)
                },
            };
            if patch.is_empty() {
                return Err(anyhow!("Nothing to change for event {}", id));
            }
            let event = store.update(&id, &patch)?;
            println!("Updated {}", render::render_event_line(&event));
        }
        Commands::Remove { id } => {
            let event = store.remove(&id)?;
            println!("Removed {}", render::render_event_line(&event));
        }
        Commands::Move {
            id,
            date,
            hour,
            keep_duration,
        } => {
            let event = store
                .get(&id)
                .cloned()
                .ok_or_else(|| anyhow!("Event with id {} not found", id))?;
            let policy = if keep_duration {
                DropPolicy::PreserveDuration
            } else {
                settings.drop_policy
            };

            let mut drag = DragState::default();
            drag.begin(&event);
            let moved = match hour {
                Some(hour) => drag.drop_on(&mut store, date, hour, policy)?,
                None => drag.drop_on_day(&mut store, date)?,
            };
            if let Some(moved) = moved {
                println!("Moved {}", render::render_event_line(&moved));
            }
        }
        Commands::Export { format, output } => match output {
            Some(path) => {
                let written = ExportService::export_to_file(store.all(), format, &path)?;
                println!("Wrote {} events to {}", store.len(), written.display());
            }
            None => println!("{}", ExportService::render(store.all(), format)?),
        },
        Commands::Tasks => {}
    }

    Ok(())
}
