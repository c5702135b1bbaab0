//! Two-step client registration form.
//!
//! Step 1 collects personal data, step 2 contact data and the password.
//! Field checks come from `mqa_common::validation`; the API remains the
//! authority and its 400/409 messages are shown verbatim.

use dioxus::prelude::*;
use std::collections::HashMap;

use mqa_common::freshness::from_html_date_value;
use mqa_common::validation::{register_rules, validate_fields, ValidationRule};

use super::api_client::{ApiClient, ClientDraft};
use super::app::Route;
use super::forms::{InputField, InputPassword};
use super::notices::{push_notice, use_notices, NoticeKind};

fn rule_for(rules: &HashMap<&'static str, ValidationRule>, name: &str) -> ValidationRule {
    rules.get(name).cloned().unwrap_or_default()
}

#[component]
pub fn RegisterView() -> Element {
    let nav = use_navigator();
    let notices = use_notices();

    let mut first_name = use_signal(String::new);
    let mut last_name = use_signal(String::new);
    let mut middle_name = use_signal(String::new);
    let mut birth_date = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut address = use_signal(String::new);

    let mut step = use_signal(|| 1u8);
    let mut errors = use_signal(HashMap::<&'static str, &'static str>::new);
    let mut general_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let next_step = move |_| {
        let rules = register_rules();
        let first_rule = rule_for(&rules, "first_name");
        let last_rule = rule_for(&rules, "last_name");
        let birth_rule = rule_for(&rules, "birth_date");
        let first_value = first_name.read().clone();
        let last_value = last_name.read().clone();
        let birth_value = birth_date.read().clone();
        let found = validate_fields(&[
            ("first_name", first_value.as_str(), &first_rule),
            ("last_name", last_value.as_str(), &last_rule),
            ("birth_date", birth_value.as_str(), &birth_rule),
        ]);
        if found.is_empty() {
            errors.set(HashMap::new());
            step.set(2);
        } else {
            errors.set(found);
        }
    };

    let submit = move |_| {
        if *submitting.read() {
            return;
        }
        let rules = register_rules();
        let email_rule = rule_for(&rules, "email");
        let password_rule = rule_for(&rules, "password");
        let phone_rule = rule_for(&rules, "phone");
        let address_rule = rule_for(&rules, "address");
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        let phone_value = phone.read().trim().to_string();
        let address_value = address.read().trim().to_string();
        let found = validate_fields(&[
            ("email", email_value.as_str(), &email_rule),
            ("password", password_value.as_str(), &password_rule),
            ("phone", phone_value.as_str(), &phone_rule),
            ("address", address_value.as_str(), &address_rule),
        ]);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(HashMap::new());

        let birth_html = birth_date.read().clone();
        let draft = ClientDraft {
            first_name: first_name.read().trim().to_string(),
            last_name: last_name.read().trim().to_string(),
            middle_name: middle_name.read().trim().to_string(),
            birth_date: from_html_date_value(&birth_html).unwrap_or(birth_html),
            email: email_value,
            password: Some(password_value),
            phone: phone_value,
            address: address_value,
            status: None,
        };

        submitting.set(true);
        general_error.set(None);
        spawn(async move {
            match ApiClient::new().register_client(&draft).await {
                Ok(()) => {
                    push_notice(
                        notices,
                        NoticeKind::Success,
                        "Cuenta creada. Inicia sesión para continuar.",
                    );
                    nav.replace(Route::Login {});
                }
                Err(message) => general_error.set(Some(message)),
            }
            submitting.set(false);
        });
    };

    let errors_now = errors.read().clone();
    let error_of = |name: &str| errors_now.get(name).map(|message| message.to_string());
    let general = general_error.read().clone();
    let busy = *submitting.read();
    let on_step_one = *step.read() == 1;
    let step_subtitle = if on_step_one {
        "Información personal"
    } else {
        "Datos de contacto"
    };

    rsx! {
        section { class: "auth-card",
            h2 { class: "auth-title", "Crear Cuenta" }
            p { class: "auth-subtitle", "{step_subtitle}" }
            div { class: "step-indicator",
                span { class: if on_step_one { "step-dot step-current" } else { "step-dot step-done" } }
                span { class: if on_step_one { "step-dot" } else { "step-dot step-current" } }
            }
            if let Some(message) = general {
                div { class: "auth-error", "{message}" }
            }
            if on_step_one {
                InputField {
                    label: "Nombre(s)",
                    value: first_name(),
                    placeholder: "Nombre(s)",
                    error: error_of("first_name"),
                    on_change: move |value| {
                        first_name.set(value);
                        errors.write().remove("first_name");
                    },
                }
                InputField {
                    label: "Apellido Paterno",
                    value: last_name(),
                    placeholder: "Apellido paterno",
                    error: error_of("last_name"),
                    on_change: move |value| {
                        last_name.set(value);
                        errors.write().remove("last_name");
                    },
                }
                InputField {
                    label: "Apellido Materno",
                    value: middle_name(),
                    placeholder: "Apellido materno",
                    on_change: move |value| middle_name.set(value),
                }
                InputField {
                    label: "Fecha de nacimiento",
                    value: birth_date(),
                    input_type: "date",
                    error: error_of("birth_date"),
                    on_change: move |value| {
                        birth_date.set(value);
                        errors.write().remove("birth_date");
                    },
                }
                button { class: "btn-primary auth-submit", onclick: next_step, "Siguiente" }
            } else {
                InputField {
                    label: "Correo Electrónico",
                    value: email(),
                    placeholder: "correo@ejemplo.com",
                    input_type: "email",
                    error: error_of("email"),
                    on_change: move |value| {
                        email.set(value);
                        errors.write().remove("email");
                    },
                }
                InputPassword {
                    value: password(),
                    error: error_of("password"),
                    on_change: move |value| {
                        password.set(value);
                        errors.write().remove("password");
                    },
                }
                InputField {
                    label: "Teléfono *",
                    value: phone(),
                    placeholder: "722 123 1234",
                    input_type: "tel",
                    error: error_of("phone"),
                    on_change: move |value| {
                        phone.set(value);
                        errors.write().remove("phone");
                    },
                }
                InputField {
                    label: "Dirección",
                    value: address(),
                    placeholder: "Dirección",
                    error: error_of("address"),
                    on_change: move |value| {
                        address.set(value);
                        errors.write().remove("address");
                    },
                }
                div { class: "auth-actions",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| step.set(1),
                        "Regresar"
                    }
                    button {
                        class: "btn-primary auth-submit",
                        disabled: busy,
                        onclick: submit,
                        if busy { "Registrando..." } else { "Registrarse" }
                    }
                }
            }
            p { class: "auth-footer",
                "¿Ya tienes una cuenta? "
                Link { to: Route::Login {}, "Inicia sesión aquí" }
            }
        }
    }
}
