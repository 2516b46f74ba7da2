#![allow(non_snake_case)]
use dioxus::prelude::*;
use dioxus_router::prelude::*;

use tracing::Level;

mod common;

mod components;
use components::navigation::NavBar;

mod home;
use home::Home;

mod gallery;
use gallery::Gallery;

mod events;
use events::Events;

mod admin;
use admin::{EventForm, OrderEditor, PermissionEditor};

fn main() {
    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    launch(App);
}

#[derive(Clone, PartialEq, Routable)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/gallery")]
        Gallery {},
        #[route("/events")]
        Events {},
        #[route("/admin/links")]
        OrderEditor {},
        #[route("/admin/permissions")]
        PermissionEditor {},
        #[route("/admin/event")]
        EventForm {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        style { "{common::style::SITE_STYLES}" }
        Router::<Route> { config: RouterConfig::default }
    }
}
