use chrono::NaiveDate;
use dioxus::prelude::*;

use api::event::{EventRecord, SaveEventReq, save_event};

#[component]
pub fn EventForm() -> Element {
    let mut virtual_signal = use_signal(|| false);
    let mut start_date_signal = use_signal(String::new);
    let mut end_date_signal = use_signal(String::new);
    let mut status_signal = use_signal(String::new);

    rsx! {
        div { class: "page-content",
            h1 { class: "section-title", "New Event" }
            form {
                class: "admin-form",
                onsubmit: move |event| async move {
                    let values = event.values();
                    let field = |name: &str| {
                        values.get(name).map(|v| v.as_value()).unwrap_or_default()
                    };

                    let (Ok(start_date), Ok(end_date)) = (
                        field("start_date").parse::<NaiveDate>(),
                        field("end_date").parse::<NaiveDate>(),
                    ) else {
                        status_signal.set(String::from("Start and end dates are required"));
                        return;
                    };

                    let record = EventRecord {
                        name: field("name"),
                        description: field("description"),
                        start_date,
                        end_date,
                        start_time: field("start_time"),
                        end_time: field("end_time"),
                        virtual_: virtual_signal(),
                        location: field("location"),
                        link: field("link"),
                    };

                    match save_event(&SaveEventReq { event: record }).await {
                        Ok(_) => status_signal.set(String::from("Event saved")),
                        Err(err) => status_signal.set(format!("Failed to save event: {err}")),
                    }
                },
                fieldset {
                    legend { "Details" }
                    label {
                        "Name"
                        input { name: "name", r#type: "text", required: true }
                    }
                    label {
                        "Description"
                        textarea { name: "description" }
                    }
                }
                fieldset {
                    legend { "Schedule" }
                    label {
                        "Start Date"
                        input {
                            name: "start_date",
                            r#type: "date",
                            value: "{start_date_signal}",
                            onchange: move |event| {
                                start_date_signal.set(event.value());
                                // most events are single-day, so mirror the start date
                                // into an untouched end date
                                if end_date_signal.read().is_empty() {
                                    end_date_signal.set(start_date_signal());
                                }
                            },
                        }
                    }
                    label {
                        "End Date"
                        input {
                            name: "end_date",
                            r#type: "date",
                            value: "{end_date_signal}",
                            onchange: move |event| end_date_signal.set(event.value()),
                        }
                    }
                    label {
                        "Start Time"
                        input { name: "start_time", r#type: "time" }
                    }
                    label {
                        "End Time"
                        input { name: "end_time", r#type: "time" }
                    }
                }
                label {
                    input {
                        r#type: "checkbox",
                        checked: virtual_signal(),
                        onchange: move |event| virtual_signal.set(event.checked()),
                    }
                    "Virtual event"
                }
                fieldset { class: if virtual_signal() { "hidden" } else { "" },
                    legend { "Location" }
                    input { name: "location", r#type: "text" }
                }
                fieldset { class: if virtual_signal() { "" } else { "hidden" },
                    legend { "Link" }
                    input { name: "link", r#type: "url" }
                }
                input { r#type: "submit", value: "Save Event" }
                span { "{status_signal}" }
            }
        }
    }
}
