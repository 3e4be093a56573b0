use chrono::{DateTime, Utc};

use crate::models::event::{WishEvent, events_location};
use crate::service::calendar::CalendarGateway;
use crate::store;

pub const SYNC_FAILED_MESSAGE: &str =
    "Failed to create/update calendar event. Please check permissions.";

// Mirrors the creation form's checks: a wish must be selected, the
// description must not be empty and the end date must be after the start.
// The form is the only place these rules are enforced.
pub fn validate_event_form(
    title: Option<&str>,
    description: &str,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
) -> Result<(), String> {
    if title.is_none() || description.is_empty() || end_date <= start_date {
        return Err(
            "Please select a wish, add a description, and ensure the end date is after the start date."
                .to_string(),
        );
    }
    Ok(())
}

// Editing replaces the record with the matching id; creating appends.
pub fn upsert_event(events: &mut Vec<WishEvent>, event: WishEvent) {
    if let Some(existing) = events.iter_mut().find(|e| e.id == event.id) {
        *existing = event;
    } else {
        events.push(event);
    }
}

pub fn remove_event(events: &mut Vec<WishEvent>, id: &str) -> bool {
    let before = events.len();
    events.retain(|e| e.id != id);
    events.len() < before
}

pub fn share_message(event: &WishEvent) -> String {
    format!(
        "Let's work on this wish: {}!\nDescription: {}",
        event.title, event.description
    )
}

// The save path for the event form: sync to the calendar first, and only
// on success touch the in-memory list and its blob. A failed sync leaves
// no partial state behind.
pub async fn save_event_flow(
    gateway: &CalendarGateway,
    events: &mut Vec<WishEvent>,
    event: WishEvent,
) -> Result<(), String> {
    if !gateway.create(&event).await {
        return Err(SYNC_FAILED_MESSAGE.to_string());
    }
    upsert_event(events, event);
    store::save_blob(&events_location(), events).map_err(|e| e.to_string())
}

pub fn load_events() -> Vec<WishEvent> {
    store::load_or_default(&events_location())
}

pub fn save_events(events: &[WishEvent]) -> Result<(), String> {
    store::save_blob(&events_location(), &events.to_vec()).map_err(|e| e.to_string())
}
