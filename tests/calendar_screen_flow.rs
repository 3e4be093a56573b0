use std::sync::Mutex as StdMutex;

use chrono::{Duration, TimeZone, Utc};
use chrono_tz::UTC;
use wishMaker::models::event::{WishEvent, events_location};
use wishMaker::service::event_grouper::group_events_by_day;
use wishMaker::service::events::{load_events, save_events};

static ENV_LOCK: StdMutex<()> = StdMutex::new(());

fn prepare_data_location(test_name: &str) -> std::sync::MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap();
    let base = std::env::temp_dir().join(format!(
        "wishmaker_screen_{}_{}",
        test_name,
        uuid::Uuid::new_v4()
    ));
    std::fs::create_dir_all(&base).unwrap();
    unsafe {
        std::env::set_var("WISH_DATA_LOCATION", &base);
    }
    guard
}

fn event_on(title: &str, day: u32, hour: u32) -> WishEvent {
    let start = Utc.with_ymd_and_hms(2025, 11, day, hour, 0, 0).unwrap();
    WishEvent::new(title, "granting soon", start, start + Duration::hours(1))
}

// The screen-load path: deserialize the blob once, then group for display.
#[test]
fn loaded_events_group_into_day_sections() {
    let _guard = prepare_data_location("group");

    save_events(&[
        event_on("afternoon", 20, 14),
        event_on("next day", 21, 10),
        event_on("morning", 20, 9),
    ])
    .unwrap();

    let events = load_events();
    assert_eq!(events.len(), 3);

    let sections = group_events_by_day(&events, UTC);
    assert_eq!(sections.len(), 2);

    let first_titles: Vec<&str> = sections[0]
        .events
        .iter()
        .map(|e| e.title.as_str())
        .collect();
    assert_eq!(first_titles, vec!["morning", "afternoon"]);
    assert_eq!(sections[1].events[0].title, "next day");
}

#[test]
fn malformed_blob_loads_as_no_data() {
    let _guard = prepare_data_location("malformed");

    std::fs::write(events_location(), "{definitely not an event array").unwrap();

    assert!(load_events().is_empty());
    assert!(group_events_by_day(&load_events(), UTC).is_empty());
}
