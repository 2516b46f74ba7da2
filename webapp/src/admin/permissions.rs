use dioxus::prelude::*;

use api::admin::{
    GetPermissionsReq, PermissionLevel, PermissionMatrix, SetPermissionsReq, get_permissions,
    set_permissions,
};

#[component]
pub fn PermissionEditor() -> Element {
    let perms_future =
        use_resource(move || async move { get_permissions(&GetPermissionsReq {}).await });

    match &*perms_future.read_unchecked() {
        Some(Ok(resp)) => match PermissionMatrix::parse(&resp.permissions) {
            Ok(matrix) => rsx! {
                PermissionForm { matrix, view_sets: resp.view_sets.clone() }
            },
            Err(err) => rsx! {
                span { class: "error-state", "Could not parse permissions: {err}" }
            },
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
struct PermissionFormProps {
    matrix: PermissionMatrix,
    view_sets: Vec<String>,
}

#[component]
fn PermissionForm(props: PermissionFormProps) -> Element {
    let mut matrix_signal = use_signal({
        let mut matrix = props.matrix.clone();
        // a view set absent from the stored object still gets a dropdown,
        // and its entry must survive the round trip
        matrix.ensure_view_sets(&props.view_sets);
        move || matrix
    });
    let mut status_signal = use_signal(String::new);

    rsx! {
        div { class: "page-content",
            h1 { class: "section-title", "Permissions" }
            form {
                class: "admin-form",
                onsubmit: move |_| async move {
                    let permissions = matrix_signal.read().serialize();

                    match set_permissions(&SetPermissionsReq { permissions }).await {
                        Ok(_) => status_signal.set(String::from("Permissions saved")),
                        Err(err) => status_signal.set(format!("Failed to save permissions: {err}")),
                    }
                },
                for view_set in props.view_sets.iter() {
                    label {
                        "{view_set}"
                        select {
                            class: "perm-dropdown",
                            onchange: {
                                let view_set = view_set.clone();
                                move |event: Event<FormData>| {
                                    matrix_signal
                                        .write()
                                        .set(&view_set, PermissionLevel::from(event.value()));
                                }
                            },
                            for level in PermissionLevel::ALL {
                                option {
                                    value: "{level.label()}",
                                    selected: matrix_signal.read().level(view_set) == level,
                                    "{level.label()}"
                                }
                            }
                        }
                    }
                }
                input { r#type: "submit", value: "Save Permissions" }
                span { "{status_signal}" }
            }
        }
    }
}
