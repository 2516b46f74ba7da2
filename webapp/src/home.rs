use dioxus::prelude::*;
use dioxus_router::prelude::*;

use api::event::{EventRecord, GetUpcomingEventsReq, display_date, get_upcoming_events};

use crate::Route;

const UPCOMING_EVENT_COUNT: usize = 5;

#[derive(Clone, PartialEq, Props)]
struct UpcomingEventsProps {
    events: Vec<EventRecord>,
}

#[component]
fn UpcomingEvents(props: UpcomingEventsProps) -> Element {
    // clicking a card focuses it; clicking the focused card clears the focus
    let mut focused_signal = use_signal(|| None::<usize>);

    rsx! {
        div { class: "event-card-row",
            if props.events.is_empty() {
                p { "No upcoming events." }
            }
            for (idx, event) in props.events.iter().enumerate() {
                div {
                    class: if focused_signal() == Some(idx) { "event-card focused-event-card" } else { "event-card" },
                    onclick: move |_| {
                        let focused = focused_signal();
                        focused_signal.set(if focused == Some(idx) { None } else { Some(idx) });
                    },
                    h3 { class: "event-title", "{event.name}" }
                    p { class: "event-when", "{display_date(event.start_date)}" }
                    p { class: "event-when", "{event.start_time} \u{2013} {event.end_time}" }
                }
            }
        }
    }
}

#[component]
pub fn Home() -> Element {
    let events_future = use_resource(move || async move {
        get_upcoming_events(&GetUpcomingEventsReq {
            limit: UPCOMING_EVENT_COUNT,
        })
        .await
    });

    rsx! {
        section { class: "hero",
            h1 { class: "hero-title", "Riverbend Dental Assistants" }
            p { class: "hero-subtitle",
                "Continuing education, community events, and a gallery of our work"
            }
            div { class: "hero-actions",
                Link { to: Route::Gallery {}, class: "btn btn-primary", "Browse Gallery" }
                Link { to: Route::Events {}, class: "btn btn-secondary", "See Events" }
            }
        }
        div { class: "page-content",
            h2 { class: "section-title", "Upcoming Events" }
            match &*events_future.read_unchecked() {
                Some(Ok(resp)) => rsx! {
                    UpcomingEvents { events: resp.events.clone() }
                },
                Some(Err(err)) => rsx! {
                    span { class: "error-state", "{err}" }
                },
                None => rsx! {
                    span { "loading..." }
                },
            }
        }
    }
}
