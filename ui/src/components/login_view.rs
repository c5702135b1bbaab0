//! Login form. On success the raw JWT is stored in the session and the
//! visitor is routed by role: staff to the dashboard, everyone else back
//! to the catalog.

use dioxus::prelude::*;
use mqa_common::validation::REQUIRED_FIELD;

use super::api_client::ApiClient;
use super::app::Route;
use super::forms::{InputField, InputPassword};
use super::session::use_session;

#[component]
pub fn LoginView() -> Element {
    let mut session = use_session();
    let nav = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut email_error = use_signal(|| None::<String>);
    let mut password_error = use_signal(|| None::<String>);
    let mut general_error = use_signal(|| None::<String>);
    let mut submitting = use_signal(|| false);

    let submit = move |_| {
        if *submitting.read() {
            return;
        }
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();

        let mut invalid = false;
        if email_value.is_empty() {
            email_error.set(Some(REQUIRED_FIELD.to_string()));
            invalid = true;
        }
        if password_value.trim().is_empty() {
            password_error.set(Some(REQUIRED_FIELD.to_string()));
            invalid = true;
        }
        if invalid {
            return;
        }

        submitting.set(true);
        general_error.set(None);
        spawn(async move {
            match ApiClient::new().login(&email_value, &password_value).await {
                Ok(raw) => match session.write().log_in(&raw) {
                    Ok(role) => {
                        if role.is_staff() {
                            nav.replace(Route::AdminHome {});
                        } else {
                            nav.replace(Route::Catalog {
                                search: String::new(),
                            });
                        }
                    }
                    Err(detail) => {
                        tracing::error!("credential decode failed: {detail}");
                        general_error.set(Some("Error de autenticación".to_string()));
                    }
                },
                Err(message) => general_error.set(Some(message)),
            }
            submitting.set(false);
        });
    };

    let general = general_error.read().clone();
    let busy = *submitting.read();

    rsx! {
        section { class: "auth-card",
            h2 { class: "auth-title", "Bienvenido" }
            p { class: "auth-subtitle", "Inicia sesión para continuar" }
            if let Some(message) = general {
                div { class: "auth-error", "{message}" }
            }
            InputField {
                label: "Correo Electrónico",
                value: email(),
                placeholder: "correo@ejemplo.com",
                input_type: "email",
                error: email_error(),
                on_change: move |value| {
                    email.set(value);
                    email_error.set(None);
                },
            }
            InputPassword {
                value: password(),
                error: password_error(),
                on_change: move |value| {
                    password.set(value);
                    password_error.set(None);
                },
            }
            a { class: "auth-link", href: "#", "¿Olvidaste tu contraseña?" }
            button {
                class: "btn-primary auth-submit",
                disabled: busy,
                onclick: submit,
                if busy { "Entrando..." } else { "Iniciar sesión" }
            }
            p { class: "auth-footer",
                "¿No tienes una cuenta? "
                Link { to: Route::Register {}, "Regístrate aquí" }
            }
        }
    }
}
