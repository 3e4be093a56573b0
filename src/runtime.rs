use chrono_tz::Tz;
use inquire::{Confirm, CustomType, Select, Text};

use crate::cli::{
    format_local_datetime, persist_wishes, print_calendar, print_wishes, schedule_event_form,
};
use crate::models::event::WishEvent;
use crate::models::theme::{Theme, theme_location};
use crate::models::wish::load_wishes;
use crate::service::calendar::CalendarGateway;
use crate::service::events::{load_events, remove_event, save_events, share_message};
use crate::service::wishes::{add_wish, remove_wish, update_wish};
use crate::store;

// Interactive session walking the app's three screens. Each screen loops
// until the user backs out, and every mutation re-persists its blob
// before the list is shown again.
pub async fn run_app(gateway: &CalendarGateway, tz: Tz) {
    loop {
        let choice = Select::new(
            "WishMaker",
            vec![
                "Make a wish",
                "My wishlist",
                "Events calendar",
                "Quit",
            ],
        )
        .prompt();

        match choice {
            Ok("Make a wish") => wish_maker_screen(),
            Ok("My wishlist") => wishlist_screen(),
            Ok("Events calendar") => calendar_screen(gateway, tz).await,
            _ => break,
        }
    }
}

// The background color screen: three channel prompts standing in for the
// red/green/blue sliders.
fn wish_maker_screen() {
    let mut theme: Theme = store::load_or_default(&theme_location());
    println!("Current background color: {}", theme.to_hex());

    let red = prompt_channel("Red", theme.red);
    let green = prompt_channel("Green", theme.green);
    let blue = prompt_channel("Blue", theme.blue);
    theme.set_red(red);
    theme.set_green(green);
    theme.set_blue(blue);

    if let Err(e) = store::save_blob(&theme_location(), &theme) {
        println!("Failed to save theme: {}", e);
        return;
    }
    println!("Ta-Dah! Background color is now {}", theme.to_hex());
}

fn prompt_channel(label: &str, current: f64) -> f64 {
    let message = format!("{} (0.0 - 1.0)", label);
    CustomType::<f64>::new(&message)
        .with_default(current)
        .prompt()
        .unwrap_or(current)
}

fn wishlist_screen() {
    loop {
        let mut wishes = load_wishes();
        print_wishes(&wishes);

        let choice = Select::new(
            "My Wishlist",
            vec!["Make a Wish!", "Edit Wish", "Delete a wish", "Share a wish", "Back"],
        )
        .prompt();

        match choice {
            Ok("Make a Wish!") => {
                let Ok(text) = Text::new("Your wish").prompt() else {
                    continue;
                };
                match add_wish(&mut wishes, &text) {
                    Ok(()) => persist_wishes(&wishes),
                    Err(e) => println!("{}", e),
                }
            }
            Ok("Edit Wish") => {
                let Some(index) = select_wish_index(&wishes) else {
                    continue;
                };
                let Ok(text) = Text::new("Your wish")
                    .with_initial_value(&wishes[index])
                    .prompt()
                else {
                    continue;
                };
                match update_wish(&mut wishes, index, &text) {
                    Ok(()) => persist_wishes(&wishes),
                    Err(e) => println!("{}", e),
                }
            }
            Ok("Delete a wish") => {
                let Some(index) = select_wish_index(&wishes) else {
                    continue;
                };
                match remove_wish(&mut wishes, index) {
                    Ok(removed) => {
                        println!("Deleted wish: {}", removed);
                        persist_wishes(&wishes);
                    }
                    Err(e) => println!("{}", e),
                }
            }
            Ok("Share a wish") => {
                if let Some(index) = select_wish_index(&wishes) {
                    println!("{}", wishes[index]);
                }
            }
            _ => break,
        }
    }
}

fn select_wish_index(wishes: &[String]) -> Option<usize> {
    if wishes.is_empty() {
        println!("No wishes yet. Make one!");
        return None;
    }
    let labels: Vec<String> = wishes
        .iter()
        .enumerate()
        .map(|(idx, wish)| format!("{}) {}", idx + 1, wish))
        .collect();
    let picked = Select::new("Which wish?", labels.clone()).prompt().ok()?;
    labels.iter().position(|l| *l == picked)
}

async fn calendar_screen(gateway: &CalendarGateway, tz: Tz) {
    loop {
        let events = load_events();
        print_calendar(&events, tz);

        let choice = Select::new(
            "Events Calendar",
            vec![
                "Schedule wish granting",
                "Edit event",
                "Delete event",
                "Share event",
                "Back",
            ],
        )
        .prompt();

        match choice {
            Ok("Schedule wish granting") => {
                if let Err(e) = schedule_event_form(gateway, None, tz).await {
                    println!("{}", e);
                }
            }
            Ok("Edit event") => {
                let Some(event) = select_event(&events, tz) else {
                    continue;
                };
                if let Err(e) = schedule_event_form(gateway, Some(event), tz).await {
                    println!("{}", e);
                }
            }
            Ok("Delete event") => {
                let Some(event) = select_event(&events, tz) else {
                    continue;
                };
                let confirmed = Confirm::new("Are you sure you want to delete this event?")
                    .with_default(false)
                    .prompt()
                    .unwrap_or(false);
                if !confirmed {
                    continue;
                }
                let mut events = events.clone();
                if remove_event(&mut events, &event.id) {
                    if let Err(e) = save_events(&events) {
                        println!("Failed to save events: {}", e);
                    }
                }
            }
            Ok("Share event") => {
                if let Some(event) = select_event(&events, tz) {
                    println!("{}", share_message(&event));
                }
            }
            _ => break,
        }
    }
}

fn select_event(events: &[WishEvent], tz: Tz) -> Option<WishEvent> {
    if events.is_empty() {
        println!("No events scheduled yet.");
        return None;
    }
    let labels: Vec<String> = events
        .iter()
        .map(|event| {
            format!(
                "{} ({})",
                event.title,
                format_local_datetime(event.start_date, tz)
            )
        })
        .collect();
    let picked = Select::new("Which event?", labels.clone()).prompt().ok()?;
    let index = labels.iter().position(|l| *l == picked)?;
    Some(events[index].clone())
}
