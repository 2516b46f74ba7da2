use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::endpoint;

// structs and types

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub name: String,
    pub description: String,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "virtual")]
    pub virtual_: bool,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub link: String,
}

// how an event should be presented on a particular calendar day
#[derive(Clone, Debug, PartialEq)]
pub struct EventDisplay {
    pub suffix: Option<&'static str>,
    pub when: String,
}

pub enum Venue<'a> {
    InPerson(&'a str),
    Virtual(&'a str),
}

pub fn display_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

impl EventRecord {
    pub fn same_day(&self) -> bool {
        self.start_date == self.end_date
    }

    /// Compute the title suffix and time/date label for this event as seen
    /// from a given calendar tile.
    ///
    /// A single-day event shows its time range and no suffix.  A multi-day
    /// event viewed from its final day is marked "Ends" with the full date
    /// range; from any other day it is marked "Starts" with the start date.
    pub fn display_on(&self, tile_date: NaiveDate) -> EventDisplay {
        if self.same_day() {
            EventDisplay {
                suffix: None,
                when: format!("{} \u{2013} {}", self.start_time, self.end_time),
            }
        } else if tile_date == self.end_date {
            EventDisplay {
                suffix: Some("Ends"),
                when: format!(
                    "{} \u{2013} {}",
                    display_date(self.start_date),
                    display_date(self.end_date)
                ),
            }
        } else {
            EventDisplay {
                suffix: Some("Starts"),
                when: display_date(self.start_date),
            }
        }
    }

    // virtual events carry a meeting link instead of a street address
    pub fn venue(&self) -> Venue<'_> {
        if self.virtual_ {
            Venue::Virtual(&self.link)
        } else {
            Venue::InPerson(&self.location)
        }
    }
}

// one day on the calendar, with the events that touch it
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CalendarTile {
    pub date: NaiveDate,
    pub today: bool,
    #[serde(rename = "inMonth")]
    pub in_month: bool,
    pub events: Vec<EventRecord>,
}

impl CalendarTile {
    // leading/trailing days from the surrounding months pad out the grid
    // but cannot be focused
    pub fn selectable(&self) -> bool {
        self.in_month
    }

    /// Header for the detail panel: a fixed message for a day without
    /// events, otherwise one naming the date.
    pub fn detail_header(&self) -> String {
        if self.events.is_empty() {
            String::from("There are no events on this day.")
        } else {
            format!("Events on {}", display_date(self.date))
        }
    }
}

// messages

// fetch the full tile list for one month, defaulting to the current one
endpoint!(GetEventCalendar);

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct GetEventCalendarReq {
    pub anchor: Option<NaiveDate>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetEventCalendarResp {
    pub month: String,
    pub tiles: Vec<CalendarTile>,
}

// fetch the next few events, ordered by start date
endpoint!(GetUpcomingEvents);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetUpcomingEventsReq {
    pub limit: usize,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GetUpcomingEventsResp {
    pub events: Vec<EventRecord>,
}

// create or update an event from the admin form
endpoint!(SaveEvent);

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveEventReq {
    pub event: EventRecord,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SaveEventResp {}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(start: &str, end: &str) -> EventRecord {
        EventRecord {
            name: String::from("Board Meeting"),
            description: String::from("Monthly board meeting"),
            start_date: start.parse().unwrap(),
            end_date: end.parse().unwrap(),
            start_time: String::from("6:00 PM"),
            end_time: String::from("8:00 PM"),
            virtual_: false,
            location: String::from("Main Office"),
            link: String::new(),
        }
    }

    #[test]
    fn single_day_event_shows_time_range() {
        let event = event("2024-01-01", "2024-01-01");
        let display = event.display_on("2024-01-01".parse().unwrap());

        assert_eq!(display.suffix, None);
        assert_eq!(display.when, "6:00 PM \u{2013} 8:00 PM");
    }

    #[test]
    fn multi_day_event_ends_on_tile_date() {
        let event = event("2024-01-01", "2024-01-03");
        let display = event.display_on("2024-01-03".parse().unwrap());

        assert_eq!(display.suffix, Some("Ends"));
        assert_eq!(display.when, "January 1, 2024 \u{2013} January 3, 2024");
    }

    #[test]
    fn multi_day_event_starts_on_tile_date() {
        let event = event("2024-01-01", "2024-01-03");
        let display = event.display_on("2024-01-01".parse().unwrap());

        assert_eq!(display.suffix, Some("Starts"));
        assert_eq!(display.when, "January 1, 2024");
    }

    #[test]
    fn middle_day_of_multi_day_event_counts_as_start() {
        let event = event("2024-01-01", "2024-01-03");
        let display = event.display_on("2024-01-02".parse().unwrap());

        assert_eq!(display.suffix, Some("Starts"));
    }

    #[test]
    fn virtual_event_venue_is_the_link() {
        let mut event = event("2024-01-01", "2024-01-01");
        event.virtual_ = true;
        event.link = String::from("https://example.com/meet");

        match event.venue() {
            Venue::Virtual(link) => assert_eq!(link, "https://example.com/meet"),
            Venue::InPerson(_) => panic!("expected a virtual venue"),
        }
    }

    #[test]
    fn empty_tile_header_is_the_fixed_message() {
        let tile = CalendarTile {
            date: "2024-01-02".parse().unwrap(),
            today: false,
            in_month: true,
            events: Vec::new(),
        };

        assert_eq!(tile.detail_header(), "There are no events on this day.");
    }

    #[test]
    fn tile_with_events_headers_with_its_own_date() {
        let tile = CalendarTile {
            date: "2024-01-02".parse().unwrap(),
            today: false,
            in_month: true,
            events: vec![event("2024-01-02", "2024-01-02")],
        };

        assert_eq!(tile.detail_header(), "Events on January 2, 2024");
    }

    #[test]
    fn record_deserializes_from_wire_names() {
        let json = r#"{
            "name": "Cleanup Day",
            "description": "Annual office cleanup",
            "startDate": "2024-05-04",
            "endDate": "2024-05-05",
            "startTime": "9:00 AM",
            "endTime": "5:00 PM",
            "virtual": false,
            "location": "Main Office"
        }"#;

        let event: EventRecord = serde_json::from_str(json).unwrap();
        assert_eq!(event.name, "Cleanup Day");
        assert!(!event.same_day());
        assert_eq!(event.link, "");
    }
}
