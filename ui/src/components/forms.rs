//! Form field building blocks shared by the auth and admin forms.

use dioxus::prelude::*;

/// Labeled input with an inline error slot below it.
#[component]
pub fn InputField(
    label: String,
    value: String,
    on_change: EventHandler<String>,
    #[props(default, !optional)] error: Option<String>,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default)] placeholder: String,
    #[props(default = false)] read_only: bool,
) -> Element {
    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{label}" }
            input {
                class: "form-input",
                r#type: "{input_type}",
                placeholder: "{placeholder}",
                value: "{value}",
                disabled: read_only,
                oninput: move |evt| on_change.call(evt.value()),
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}

/// Password input with a visibility toggle.
#[component]
pub fn InputPassword(
    value: String,
    on_change: EventHandler<String>,
    #[props(default, !optional)] error: Option<String>,
    #[props(default = "Contraseña".to_string())] label: String,
) -> Element {
    let mut visible = use_signal(|| false);
    let input_type = if *visible.read() { "text" } else { "password" };
    let toggle_label = if *visible.read() { "Ocultar" } else { "Mostrar" };

    rsx! {
        div { class: "form-group",
            label { class: "form-label", "{label}" }
            div { class: "password-row",
                input {
                    class: "form-input",
                    r#type: "{input_type}",
                    placeholder: "Ingresa tu contraseña",
                    value: "{value}",
                    oninput: move |evt| on_change.call(evt.value()),
                }
                button {
                    r#type: "button",
                    class: "password-toggle",
                    onclick: move |_| {
                        let shown = *visible.read();
                        visible.set(!shown);
                    },
                    "{toggle_label}"
                }
            }
            if let Some(err) = error {
                span { class: "field-error", "{err}" }
            }
        }
    }
}
