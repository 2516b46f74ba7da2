use dioxus::prelude::*;

use api::gallery::ImageRecord;

#[derive(Clone, PartialEq, Props)]
struct PhotoTileProps {
    photo: ImageRecord,
}

#[component]
fn PhotoTile(props: PhotoTileProps) -> Element {
    let photo = props.photo;

    rsx! {
        div { class: "photo-tile",
            a { href: "{photo.link}",
                img { src: "{photo.src}", alt: "{photo.alt}", loading: "lazy" }
            }
        }
    }
}

#[derive(Clone, PartialEq, Props)]
pub struct PhotoGridProps {
    photos: Vec<ImageRecord>,
}

#[component]
pub fn PhotoGrid(props: PhotoGridProps) -> Element {
    rsx! {
        div { class: "photo-grid",
            for photo in props.photos.iter() {
                PhotoTile { photo: photo.clone() }
            }
        }
    }
}
