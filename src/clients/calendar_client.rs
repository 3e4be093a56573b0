use std::env;

use async_trait::async_trait;

use crate::get_data_location;
use crate::service::calendar::{CalendarEntry, CalendarError, CalendarStore};
use crate::store;

const ACCESS_VAR: &str = "CALENDAR_ACCESS";

// Stand-in for a device calendar store. Entries accumulate in one JSON
// blob in the data directory, and write access is governed by the
// CALENDAR_ACCESS switch ("granted"/"denied"), re-read on every request
// so the answer can change between calls.
pub struct LocalCalendarStore {
    calendar: String,
}

impl LocalCalendarStore {
    pub fn new(calendar: String) -> Self {
        Self { calendar }
    }

    pub fn entries_location() -> String {
        format!("{}/calendar.json", get_data_location())
    }
}

#[async_trait]
impl CalendarStore for LocalCalendarStore {
    async fn request_write_access(&self) -> Result<bool, CalendarError> {
        match env::var(ACCESS_VAR) {
            Ok(value) if value.eq_ignore_ascii_case("denied") => Ok(false),
            Ok(value) if value.eq_ignore_ascii_case("granted") => Ok(true),
            Ok(value) => Err(CalendarError::Access(format!(
                "unrecognized {} value: {}",
                ACCESS_VAR, value
            ))),
            Err(_) => Ok(true),
        }
    }

    async fn default_calendar(&self) -> String {
        self.calendar.clone()
    }

    async fn save_entry(&self, entry: CalendarEntry) -> Result<(), CalendarError> {
        let location = Self::entries_location();
        let mut entries: Vec<CalendarEntry> = store::load_or_default(&location);
        entries.push(entry);
        store::save_blob(&location, &entries).map_err(|e| CalendarError::Save(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    static ENV_LOCK: OnceLock<Mutex<()>> = OnceLock::new();

    #[tokio::test]
    async fn access_follows_the_switch_on_every_request() {
        let _guard = ENV_LOCK.get_or_init(|| Mutex::new(())).lock().unwrap();
        let store = LocalCalendarStore::new("personal".to_string());

        unsafe {
            env::set_var(ACCESS_VAR, "granted");
        }
        assert!(store.request_write_access().await.unwrap());

        unsafe {
            env::set_var(ACCESS_VAR, "denied");
        }
        assert!(!store.request_write_access().await.unwrap());

        unsafe {
            env::set_var(ACCESS_VAR, "sideways");
        }
        assert!(store.request_write_access().await.is_err());

        unsafe {
            env::remove_var(ACCESS_VAR);
        }
        assert!(store.request_write_access().await.unwrap());
    }
}
