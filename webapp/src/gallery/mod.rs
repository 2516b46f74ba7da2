use dioxus::prelude::*;

use gloo_console::error as console_error;
use tracing::debug;

use api::gallery::fetch_gallery_page;

mod state;
use state::PagedGallery;

mod grid;
use grid::PhotoGrid;

async fn load_next(mut gallery_signal: Signal<PagedGallery>) {
    // refuses while a fetch is outstanding or the gallery is exhausted
    let Some(page) = gallery_signal.write().begin_fetch() else {
        return;
    };

    debug!("fetching gallery page {page}");

    match fetch_gallery_page(page).await {
        Ok(resp) => gallery_signal.write().complete(resp),
        Err(err) => {
            console_error!(format!("failed to fetch gallery page {page}: {err}"));
            gallery_signal.write().fail();
        }
    }
}

#[component]
pub fn Gallery() -> Element {
    let gallery_signal = use_signal(PagedGallery::new);

    // there is no server-rendered first page, so request it on mount
    use_future(move || load_next(gallery_signal));

    let gallery = gallery_signal.read();

    rsx! {
        div { class: "page-content",
            h1 { class: "section-title", "Gallery" }
            PhotoGrid { photos: gallery.photos.clone() }
            // the trigger always renders after the grid, last in tab order
            button {
                class: "load-more",
                disabled: !gallery.actionable(),
                onclick: move |_| {
                    spawn(load_next(gallery_signal));
                },
                "{gallery.trigger_label()}"
            }
        }
    }
}
