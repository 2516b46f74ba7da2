use chrono::{Datelike, Months, NaiveDate};
use dioxus::prelude::*;

use api::event::{CalendarTile, GetEventCalendarReq, get_event_calendar};

mod state;
use state::{TileSelection, month_anchor};

mod detail;
use detail::EventDetail;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

#[component]
pub fn Events() -> Element {
    // None means the current month; the resource re-runs when this changes
    let anchor_signal = use_signal(|| None::<NaiveDate>);

    let calendar_future = use_resource(move || async move {
        get_event_calendar(&GetEventCalendarReq {
            anchor: anchor_signal(),
        })
        .await
    });

    match &*calendar_future.read_unchecked() {
        Some(Ok(resp)) => rsx! {
            // keying by month remounts the view, resetting the selection
            CalendarView {
                key: "{resp.month}",
                anchor_signal,
                month: resp.month.clone(),
                tiles: resp.tiles.clone(),
            }
        },
        Some(Err(err)) => rsx! {
            span { class: "error-state", "{err}" }
        },
        None => rsx! {
            span { "loading..." }
        },
    }
}

#[derive(Clone, PartialEq, Props)]
struct TileCellProps {
    selection_signal: Signal<TileSelection>,
    tile: CalendarTile,
    idx: usize,
}

#[component]
fn TileCell(props: TileCellProps) -> Element {
    let mut selection_signal = props.selection_signal;
    let tile = props.tile;
    let idx = props.idx;

    let selectable = tile.selectable();

    let mut class = String::from("calendar-tile");
    if !tile.in_month {
        class.push_str(" out-of-month");
    }
    if tile.today {
        class.push_str(" calendar-today");
    }
    if selection_signal.read().is_selected(idx) {
        class.push_str(" focused-tile");
    }

    rsx! {
        div {
            class: "{class}",
            onclick: move |_| {
                if selectable {
                    selection_signal.write().select(idx);
                }
            },
            span { class: "tile-date", "{tile.date.day()}" }
            if !tile.events.is_empty() {
                span { class: "tile-event-count", "{tile.events.len()}" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
struct CalendarViewProps {
    anchor_signal: Signal<Option<NaiveDate>>,
    month: String,
    tiles: Vec<CalendarTile>,
}

#[component]
fn CalendarView(props: CalendarViewProps) -> Element {
    let mut anchor_signal = props.anchor_signal;
    let tiles = props.tiles;

    let anchor = month_anchor(&tiles);
    let prev_month = anchor.and_then(|date| date.checked_sub_months(Months::new(1)));
    let next_month = anchor.and_then(|date| date.checked_add_months(Months::new(1)));

    // the synthetic activation at startup, not a user gesture
    let selection_signal = use_signal({
        let tiles = tiles.clone();
        move || TileSelection::initial(&tiles)
    });

    let selected_tile = selection_signal
        .read()
        .selected()
        .and_then(|idx| tiles.get(idx).cloned());

    rsx! {
        div { class: "page-content",
            h1 { class: "section-title", "Events" }
            div { class: "calendar",
                div { class: "calendar-month",
                    if let Some(prev) = prev_month {
                        button {
                            class: "month-nav",
                            onclick: move |_| anchor_signal.set(Some(prev)),
                            "\u{2039}"
                        }
                    }
                    span { "{props.month}" }
                    if let Some(next) = next_month {
                        button {
                            class: "month-nav",
                            onclick: move |_| anchor_signal.set(Some(next)),
                            "\u{203a}"
                        }
                    }
                }
                div { class: "calendar-grid",
                    for day in WEEKDAYS {
                        div { class: "calendar-weekday", "{day}" }
                    }
                    for (idx, tile) in tiles.iter().enumerate() {
                        TileCell { selection_signal, tile: tile.clone(), idx }
                    }
                }
            }
            EventDetail { tile: selected_tile }
        }
    }
}
