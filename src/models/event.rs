use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::get_data_location;

// One scheduled wish-granting event. The id is generated once and never
// changes, so a record can be matched for edit or delete even when two
// events share a title and time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishEvent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
}

impl WishEvent {
    pub fn new(
        title: &str,
        description: &str,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            description: description.to_string(),
            start_date,
            end_date,
        }
    }
}

pub fn events_location() -> String {
    format!("{}/events.json", get_data_location())
}
