use chrono::{DateTime, LocalResult, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use inquire::{Select, Text};

use crate::models::event::WishEvent;
use crate::models::theme::{Theme, theme_location};
use crate::models::wish::{load_wishes, save_wishes};
use crate::service::calendar::CalendarGateway;
use crate::service::event_grouper::{event_time_label, group_events_by_day, section_title};
use crate::service::events::{
    load_events, remove_event, save_event_flow, save_events, share_message, validate_event_form,
};
use crate::service::wishes::{add_wish, remove_wish, update_wish};
use crate::store;

const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";
const DATETIME_HINT: &str = "YYYY-MM-DD HH:MM";

#[derive(Parser)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Record a new wish
    AddWish { text: String },
    /// List recorded wishes
    Wishes,
    /// Rewrite the wish at a 1-based position
    EditWish { position: usize, text: String },
    /// Delete the wish at a 1-based position
    DeleteWish { position: usize },
    /// Show the events calendar grouped by day
    Events,
    /// Schedule a wish granting event (interactive form)
    Schedule {
        /// Edit the event with this id instead of creating a new one
        #[arg(long)]
        edit: Option<String>,
    },
    /// Delete the event with the given id
    DeleteEvent { id: String },
    /// Print the share text for an event
    ShareEvent { id: String },
    /// Show or adjust the background theme color
    Theme {
        #[arg(long)]
        red: Option<f64>,
        #[arg(long)]
        green: Option<f64>,
        #[arg(long)]
        blue: Option<f64>,
    },
}

pub async fn cli(gateway: &CalendarGateway, tz: Tz) {
    // Fine to panic here
    let cli = Cli::parse();
    match cli.command {
        Commands::AddWish { text } => {
            let mut wishes = load_wishes();
            match add_wish(&mut wishes, &text) {
                Ok(()) => persist_wishes(&wishes),
                Err(e) => println!("{}", e),
            }
        }
        Commands::Wishes => print_wishes(&load_wishes()),
        Commands::EditWish { position, text } => {
            let Some(index) = position.checked_sub(1) else {
                println!("No wish at position {}", position);
                return;
            };
            let mut wishes = load_wishes();
            match update_wish(&mut wishes, index, &text) {
                Ok(()) => persist_wishes(&wishes),
                Err(e) => println!("{}", e),
            }
        }
        Commands::DeleteWish { position } => {
            let Some(index) = position.checked_sub(1) else {
                println!("No wish at position {}", position);
                return;
            };
            let mut wishes = load_wishes();
            match remove_wish(&mut wishes, index) {
                Ok(removed) => {
                    println!("Deleted wish: {}", removed);
                    persist_wishes(&wishes);
                }
                Err(e) => println!("{}", e),
            }
        }
        Commands::Events => print_calendar(&load_events(), tz),
        Commands::Schedule { edit } => {
            let events = load_events();
            let to_edit = match edit {
                Some(id) => match events.iter().find(|e| e.id == id) {
                    Some(event) => Some(event.clone()),
                    None => {
                        println!("No event with id {}", id);
                        return;
                    }
                },
                None => None,
            };
            if let Err(e) = schedule_event_form(gateway, to_edit, tz).await {
                println!("{}", e);
            }
        }
        Commands::DeleteEvent { id } => {
            let mut events = load_events();
            if remove_event(&mut events, &id) {
                if let Err(e) = save_events(&events) {
                    println!("Failed to save events: {}", e);
                }
            } else {
                println!("No event with id {}", id);
            }
        }
        Commands::ShareEvent { id } => {
            let events = load_events();
            match events.iter().find(|e| e.id == id) {
                Some(event) => println!("{}", share_message(event)),
                None => println!("No event with id {}", id),
            }
        }
        Commands::Theme { red, green, blue } => {
            let mut theme: Theme = store::load_or_default(&theme_location());
            if let Some(value) = red {
                theme.set_red(value);
            }
            if let Some(value) = green {
                theme.set_green(value);
            }
            if let Some(value) = blue {
                theme.set_blue(value);
            }
            if red.is_some() || green.is_some() || blue.is_some() {
                if let Err(e) = store::save_blob(&theme_location(), &theme) {
                    println!("Failed to save theme: {}", e);
                }
            }
            println!(
                "Background color {} (red {:.3}, green {:.3}, blue {:.3})",
                theme.to_hex(),
                theme.red,
                theme.green,
                theme.blue
            );
        }
    }
}

pub(crate) fn print_wishes(wishes: &[String]) {
    if wishes.is_empty() {
        println!("No wishes yet. Make one!");
        return;
    }
    for (idx, wish) in wishes.iter().enumerate() {
        println!("{}) {}", idx + 1, wish);
    }
}

pub(crate) fn persist_wishes(wishes: &Vec<String>) {
    if let Err(e) = save_wishes(wishes) {
        println!("Failed to save wishes: {}", e);
    }
}

pub(crate) fn print_calendar(events: &[WishEvent], tz: Tz) {
    let sections = group_events_by_day(events, tz);
    if sections.is_empty() {
        println!("No events scheduled yet.");
        return;
    }
    for section in sections {
        println!("{}", section_title(section.date));
        for event in &section.events {
            println!("  {} - {}", event.title, event.description);
            println!("    {}", event_time_label(event, tz));
            println!("    id: {}", event.id);
        }
    }
}

// The event creation form: pick a wish as the title, describe it, give a
// start and an end. Used for creating and for editing; editing keeps the
// record's id so the save replaces it in place.
pub(crate) async fn schedule_event_form(
    gateway: &CalendarGateway,
    to_edit: Option<WishEvent>,
    tz: Tz,
) -> Result<(), String> {
    let wishes = load_wishes();
    if wishes.is_empty() {
        return Err("No wishes recorded yet. Add a wish first.".to_string());
    }

    let starting_cursor = to_edit
        .as_ref()
        .and_then(|event| wishes.iter().position(|w| *w == event.title))
        .unwrap_or(0);
    let title = Select::new("Select a Wish", wishes)
        .with_starting_cursor(starting_cursor)
        .prompt()
        .map_err(|e| e.to_string())?;

    let mut description_prompt = Text::new("Add a description...");
    if let Some(event) = &to_edit {
        description_prompt = description_prompt.with_initial_value(&event.description);
    }
    let description = description_prompt.prompt().map_err(|e| e.to_string())?;

    let start_initial = to_edit
        .as_ref()
        .map(|e| format_local_datetime(e.start_date, tz));
    let end_initial = to_edit
        .as_ref()
        .map(|e| format_local_datetime(e.end_date, tz));
    let start_date = prompt_datetime("Start", start_initial.as_deref(), tz)?;
    let end_date = prompt_datetime("End", end_initial.as_deref(), tz)?;

    validate_event_form(Some(&title), &description, start_date, end_date)?;

    let event = match to_edit {
        Some(existing) => WishEvent {
            id: existing.id,
            title,
            description,
            start_date,
            end_date,
        },
        None => WishEvent::new(&title, &description, start_date, end_date),
    };

    let mut events = load_events();
    save_event_flow(gateway, &mut events, event).await?;
    println!("Event saved.");
    Ok(())
}

fn prompt_datetime(label: &str, initial: Option<&str>, tz: Tz) -> Result<DateTime<Utc>, String> {
    let message = format!("{} ({})", label, DATETIME_HINT);
    let mut prompt = Text::new(&message);
    if let Some(value) = initial {
        prompt = prompt.with_initial_value(value);
    }
    let text = prompt.prompt().map_err(|e| e.to_string())?;
    parse_local_datetime(&text, tz)
}

pub(crate) fn format_local_datetime(instant: DateTime<Utc>, tz: Tz) -> String {
    instant.with_timezone(&tz).format(DATETIME_FORMAT).to_string()
}

pub(crate) fn parse_local_datetime(text: &str, tz: Tz) -> Result<DateTime<Utc>, String> {
    let naive = NaiveDateTime::parse_from_str(text.trim(), DATETIME_FORMAT)
        .map_err(|_| format!("Expected {}, got: {}", DATETIME_HINT, text))?;
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(instant) => Ok(instant.with_timezone(&Utc)),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.with_timezone(&Utc)),
        LocalResult::None => Err(format!("{} does not exist in {}", text, tz)),
    }
}
