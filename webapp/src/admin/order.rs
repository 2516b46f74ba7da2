use dioxus::prelude::*;
use tracing::debug;

use api::admin::{
    ExternalLink, GetExternalLinksReq, SetLinkOrderReq, get_external_links, serialize_order,
    set_link_order,
};

#[component]
pub fn OrderEditor() -> Element {
    let links_future =
        use_resource(move || async move { get_external_links(&GetExternalLinksReq {}).await });

    match &*links_future.read_unchecked() {
        Some(Ok(resp)) => rsx! {
            OrderList { links: resp.links.clone() }
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
struct OrderListProps {
    links: Vec<ExternalLink>,
}

#[component]
fn OrderList(props: OrderListProps) -> Element {
    let mut links_signal = use_signal({
        let links = props.links.clone();
        move || links
    });
    let mut status_signal = use_signal(String::new);

    let count = links_signal.read().len();
    let empty = count == 0;

    rsx! {
        div { class: "page-content",
            h1 { class: "section-title", "Sort Links" }
            form {
                class: "admin-form",
                onsubmit: move |_| async move {
                    let ids: Vec<String> = links_signal.read().iter().map(|l| l.id.clone()).collect();
                    let new_order = serialize_order(&ids);
                    debug!("saving link order: {new_order}");

                    match set_link_order(&SetLinkOrderReq { new_order }).await {
                        Ok(_) => status_signal.set(String::from("Order saved")),
                        Err(err) => status_signal.set(format!("Failed to save order: {err}")),
                    }
                },
                ul { class: "sort-list",
                    if empty {
                        li { class: "empty-notification", "There are no links to sort" }
                    }
                    for (idx, link) in links_signal.read().iter().enumerate() {
                        li { class: "sort-target",
                            span { class: "link-name", "{link.display_name}" }
                            button {
                                r#type: "button",
                                disabled: idx == 0,
                                onclick: move |_| {
                                    links_signal.write().swap(idx, idx - 1);
                                },
                                "\u{2191}"
                            }
                            button {
                                r#type: "button",
                                disabled: idx + 1 == count,
                                onclick: move |_| {
                                    links_signal.write().swap(idx, idx + 1);
                                },
                                "\u{2193}"
                            }
                        }
                    }
                }
                input { r#type: "submit", value: "Save Order", disabled: empty }
                span { "{status_signal}" }
            }
        }
    }
}
