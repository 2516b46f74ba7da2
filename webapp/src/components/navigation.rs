use dioxus::prelude::*;
use dioxus_router::prelude::*;

use gloo_timers::callback::Timeout;

use crate::Route;

const NAV_TARGETS: [(&str, Route); 6] = [
    ("Home", Route::Home {}),
    ("Gallery", Route::Gallery {}),
    ("Events", Route::Events {}),
    ("Links", Route::OrderEditor {}),
    ("Permissions", Route::PermissionEditor {}),
    ("New Event", Route::EventForm {}),
];

// per-link reveal delay when the collapsed menu opens
const REVEAL_STEP_MS: u32 = 100;

#[derive(Clone, PartialEq, Props)]
struct NavBarButtonProps {
    name: String,
    target: Route,
    shown: bool,
}

#[component]
fn NavBarButton(props: NavBarButtonProps) -> Element {
    let current_path: Route = use_route();

    let mut class = String::from("nav-link");
    if current_path == props.target {
        class.push_str(" current-nav-link");
    }
    if props.shown {
        class.push_str(" menu-shown");
    }

    rsx! {
        Link { class: "{class}", to: props.target.clone(), "{props.name}" }
    }
}

#[component]
fn NavBarInner() -> Element {
    let mut menu_open_signal = use_signal(|| false);
    let mut revealed_signal = use_signal(|| 0usize);

    rsx! {
        header { class: if menu_open_signal() { "app-header menu-shown" } else { "app-header" },
            div { class: "nav-container",
                Link { class: "logo", to: Route::Home {}, "Riverbend Dental Assistants" }
                button {
                    class: "nav-button",
                    onclick: move |_| {
                        let opening = !menu_open_signal();
                        menu_open_signal.set(opening);
                        revealed_signal.set(0);

                        if opening {
                            if let Some(window) = web_sys::window() {
                                window.scroll_to_with_x_and_y(0.0, 0.0);
                            }

                            // stagger the link reveal from the top down
                            for idx in 0..NAV_TARGETS.len() {
                                let mut revealed_signal = revealed_signal;
                                Timeout::new(REVEAL_STEP_MS * (idx as u32 + 1), move || {
                                    revealed_signal.set(idx + 1);
                                })
                                .forget();
                            }
                        }
                    },
                    if menu_open_signal() { "Close" } else { "Menu" }
                }
                nav { class: "nav-links",
                    for (idx, (name, target)) in NAV_TARGETS.iter().enumerate() {
                        NavBarButton {
                            name: name.to_string(),
                            target: target.clone(),
                            shown: !menu_open_signal() || revealed_signal() > idx,
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub fn NavBar() -> Element {
    rsx! {
        NavBarInner {}
        Outlet::<Route> {}
    }
}
