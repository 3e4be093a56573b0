use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::event::WishEvent;

// The host calendar's representation of one saved occurrence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub calendar: String,
    pub title: String,
    pub notes: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("calendar access request failed: {0}")]
    Access(String),
    #[error("failed to save calendar entry: {0}")]
    Save(String),
}

// Write-side boundary to the host calendar store. Passed explicitly to
// whatever needs calendar access; there is no process-wide instance.
#[async_trait]
pub trait CalendarStore: Send + Sync {
    // Asks the host for write access. Called once per create; the answer
    // must not be cached across calls.
    async fn request_write_access(&self) -> Result<bool, CalendarError>;

    // The calendar that new entries land in.
    async fn default_calendar(&self) -> String;

    // Persists a single occurrence, never a recurring series.
    async fn save_entry(&self, entry: CalendarEntry) -> Result<(), CalendarError>;
}

pub struct CalendarGateway {
    store: Arc<dyn CalendarStore>,
}

impl CalendarGateway {
    pub fn new(store: Arc<dyn CalendarStore>) -> Self {
        Self { store }
    }

    // Requests write access and saves `event` as one calendar entry.
    // Denial, access errors and save errors all collapse to `false`, and
    // on failure nothing is written. The returned future resolves exactly
    // once on the caller's task. Calling twice with the same content
    // creates two entries; the gateway tracks nothing between calls.
    pub async fn create(&self, event: &WishEvent) -> bool {
        match self.store.request_write_access().await {
            Ok(true) => {}
            Ok(false) => return false,
            Err(err) => {
                eprintln!("Calendar access request failed: {}", err);
                return false;
            }
        }

        let entry = CalendarEntry {
            calendar: self.store.default_calendar().await,
            title: event.title.clone(),
            notes: event.description.clone(),
            start_time: event.start_date,
            end_time: event.end_date,
        };

        match self.store.save_entry(entry).await {
            Ok(()) => true,
            Err(err) => {
                eprintln!("Error saving event: {}", err);
                false
            }
        }
    }
}
