use chrono::NaiveDate;
use dioxus::prelude::*;

use api::event::{CalendarTile, EventRecord, Venue};

#[derive(Clone, PartialEq, Props)]
struct EventCardProps {
    event: EventRecord,
    tile_date: NaiveDate,
}

#[component]
fn EventCard(props: EventCardProps) -> Element {
    let event = props.event;
    let display = event.display_on(props.tile_date);

    let title = match display.suffix {
        Some(suffix) => format!("{} ({suffix})", event.name),
        None => event.name.clone(),
    };

    rsx! {
        div { class: "event-card",
            h3 { class: "event-title", "{title}" }
            p { class: "event-when", "{display.when}" }
            match event.venue() {
                Venue::Virtual(link) => rsx! {
                    a { class: "event-venue", href: "{link}", "Join Online" }
                },
                Venue::InPerson(location) => rsx! {
                    p { class: "event-venue", "{location}" }
                },
            }
            p { class: "event-description", "{event.description}" }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct EventDetailProps {
    tile: Option<CalendarTile>,
}

#[component]
pub fn EventDetail(props: EventDetailProps) -> Element {
    let Some(tile) = props.tile else {
        return rsx! {};
    };

    let header = tile.detail_header();

    rsx! {
        div { class: "event-detail",
            // the header card is structural and always present
            div { class: "event-card event-header-card",
                h2 { "{header}" }
            }
            for event in tile.events.iter() {
                EventCard { event: event.clone(), tile_date: tile.date }
            }
        }
    }
}
