use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::models::event::WishEvent;

// Events sharing one calendar day, ordered by start time. Sections are a
// throwaway projection of the authoritative event list and are rebuilt
// from scratch after every mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSection {
    pub date: NaiveDate,
    pub events: Vec<WishEvent>,
}

// Sorts the flat list by start time and splits it into one section per
// calendar day in `tz`. The sort is stable, so events with equal start
// times keep their original relative order. Day buckets are contiguous
// after the sort, which makes the sections come out ascending by date.
pub fn group_events_by_day(events: &[WishEvent], tz: Tz) -> Vec<EventSection> {
    let mut sorted: Vec<WishEvent> = events.to_vec();
    sorted.sort_by_key(|event| event.start_date);

    let mut sections: Vec<EventSection> = Vec::new();
    for event in sorted {
        let day = event.start_date.with_timezone(&tz).date_naive();
        match sections.last_mut() {
            Some(section) if section.date == day => section.events.push(event),
            _ => sections.push(EventSection {
                date: day,
                events: vec![event],
            }),
        }
    }
    sections
}

pub fn section_title(date: NaiveDate) -> String {
    date.format("%A, %B %-d").to_string()
}

pub fn event_time_label(event: &WishEvent, tz: Tz) -> String {
    let format = "%a, %b %-d, %Y at %H:%M";
    format!(
        "Start: {}  End: {}",
        event.start_date.with_timezone(&tz).format(format),
        event.end_date.with_timezone(&tz).format(format)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use chrono_tz::UTC;

    fn event_at(title: &str, start: DateTime<Utc>) -> WishEvent {
        WishEvent::new(title, "granting soon", start, start + Duration::hours(1))
    }

    fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
    }

    #[test]
    fn empty_input_yields_no_sections() {
        assert!(group_events_by_day(&[], UTC).is_empty());
    }

    #[test]
    fn same_day_events_share_a_section() {
        let events = vec![
            event_at("early", utc(2025, 11, 20, 0, 1)),
            event_at("late", utc(2025, 11, 20, 23, 59)),
            event_at("midnight next", utc(2025, 11, 21, 0, 0)),
        ];

        let sections = group_events_by_day(&events, UTC);

        assert_eq!(sections.len(), 2);
        assert_eq!(sections[0].events.len(), 2);
        assert_eq!(sections[1].events.len(), 1);
        assert_eq!(sections[1].events[0].title, "midnight next");
    }

    #[test]
    fn sections_come_out_ascending_by_day() {
        let events = vec![
            event_at("c", utc(2025, 11, 22, 9, 0)),
            event_at("a", utc(2025, 11, 20, 9, 0)),
            event_at("b", utc(2025, 11, 21, 9, 0)),
        ];

        let sections = group_events_by_day(&events, UTC);

        let days: Vec<NaiveDate> = sections.iter().map(|s| s.date).collect();
        assert_eq!(
            days,
            vec![
                NaiveDate::from_ymd_opt(2025, 11, 20).unwrap(),
                NaiveDate::from_ymd_opt(2025, 11, 21).unwrap(),
                NaiveDate::from_ymd_opt(2025, 11, 22).unwrap(),
            ]
        );
    }

    #[test]
    fn events_within_a_section_sort_by_start_time() {
        let events = vec![
            event_at("afternoon", utc(2025, 11, 20, 14, 0)),
            event_at("morning", utc(2025, 11, 20, 9, 0)),
        ];

        let sections = group_events_by_day(&events, UTC);

        assert_eq!(sections.len(), 1);
        let titles: Vec<&str> = sections[0].events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["morning", "afternoon"]);
    }

    #[test]
    fn equal_start_times_keep_input_order() {
        let start = utc(2025, 11, 20, 9, 0);
        let events = vec![
            event_at("first", start),
            event_at("second", start),
            event_at("third", start),
        ];

        let sections = group_events_by_day(&events, UTC);

        let titles: Vec<&str> = sections[0].events.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second", "third"]);
    }

    #[test]
    fn grouping_is_deterministic_and_complete() {
        let events = vec![
            event_at("one", utc(2025, 11, 21, 8, 0)),
            event_at("two", utc(2025, 11, 20, 22, 0)),
            event_at("three", utc(2025, 11, 21, 7, 0)),
            event_at("four", utc(2025, 12, 1, 12, 0)),
        ];

        let first = group_events_by_day(&events, UTC);
        let second = group_events_by_day(&events, UTC);
        assert_eq!(first, second);

        let mut regrouped: Vec<WishEvent> =
            first.into_iter().flat_map(|s| s.events).collect();
        let mut input = events.clone();
        regrouped.sort_by(|a, b| a.id.cmp(&b.id));
        input.sort_by(|a, b| a.id.cmp(&b.id));
        assert_eq!(regrouped, input);
    }

    #[test]
    fn day_boundary_follows_the_active_time_zone() {
        // 23:30 UTC on the 20th is already the 21st in Moscow.
        let events = vec![event_at("late", utc(2025, 11, 20, 23, 30))];

        let utc_sections = group_events_by_day(&events, UTC);
        let moscow_sections = group_events_by_day(&events, chrono_tz::Europe::Moscow);

        assert_eq!(
            utc_sections[0].date,
            NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
        );
        assert_eq!(
            moscow_sections[0].date,
            NaiveDate::from_ymd_opt(2025, 11, 21).unwrap()
        );
    }

    #[test]
    fn section_title_spells_out_the_day() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
        assert_eq!(section_title(date), "Thursday, November 20");
    }
}
