//! Create / view / edit / delete modal shared by the employees and
//! clients pages. The two differ only in the role selector (employees
//! pick one of the staff roles) and which endpoint the draft goes to.
//!
//! Keyed by [`UserModalMode::key`] like the product modal, so mode
//! changes remount with fresh field state. The password field only
//! appears when creating; edits never resubmit a credential.

use dioxus::prelude::*;

use mqa_common::freshness::{from_html_date_value, html_date_value};
use mqa_common::user::{AccountStatus, Role, User};

use super::api_client::{use_api, ClientDraft, EmployeeDraft};
use super::forms::{InputField, InputPassword};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserModalKind {
    Employee,
    Client,
}

impl UserModalKind {
    fn title_noun(self) -> &'static str {
        match self {
            UserModalKind::Employee => "Empleado",
            UserModalKind::Client => "Cliente",
        }
    }

    fn noun(self) -> &'static str {
        match self {
            UserModalKind::Employee => "empleado",
            UserModalKind::Client => "cliente",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum UserModalMode {
    Create,
    View(User),
    Edit(User),
    Delete(User),
}

impl UserModalMode {
    pub fn key(&self) -> String {
        match self {
            UserModalMode::Create => "create".to_string(),
            UserModalMode::View(u) => format!("view-{}", u.id),
            UserModalMode::Edit(u) => format!("edit-{}", u.id),
            UserModalMode::Delete(u) => format!("delete-{}", u.id),
        }
    }
}

#[component]
pub fn UserModal(
    kind: UserModalKind,
    mode: UserModalMode,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
    on_delete_confirm: EventHandler<User>,
) -> Element {
    match mode {
        UserModalMode::Delete(user) => rsx! {
            UserDeleteConfirm { kind, user, on_close, on_delete_confirm }
        },
        UserModalMode::Create => rsx! {
            UserForm { kind, existing: None, read_only: false, on_close, on_saved }
        },
        UserModalMode::View(user) => rsx! {
            UserForm { kind, existing: Some(user), read_only: true, on_close, on_saved }
        },
        UserModalMode::Edit(user) => rsx! {
            UserForm { kind, existing: Some(user), read_only: false, on_close, on_saved }
        },
    }
}

#[component]
fn UserDeleteConfirm(
    kind: UserModalKind,
    user: User,
    on_close: EventHandler<()>,
    on_delete_confirm: EventHandler<User>,
) -> Element {
    let noun = kind.noun();
    let full_name = user.full_name();
    let doomed = user.clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal confirm-modal",
                h2 { class: "modal-title", "¿Eliminar {noun}?" }
                p { class: "confirm-text",
                    "Esta acción no se puede deshacer. Se eliminará el registro de {full_name}."
                }
                div { class: "modal-actions",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    button {
                        class: "btn-danger",
                        onclick: move |_| on_delete_confirm.call(doomed.clone()),
                        "Confirmar Eliminación"
                    }
                }
            }
        }
    }
}

#[component]
fn UserForm(
    kind: UserModalKind,
    #[props(!optional)] existing: Option<User>,
    read_only: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();

    let (seed_first, seed_last, seed_middle, seed_birth, seed_email) = match &existing {
        Some(u) => (
            u.first_name.clone(),
            u.last_name.clone(),
            u.middle_name.clone(),
            html_date_value(&u.birth_date).unwrap_or_default(),
            u.email.clone(),
        ),
        None => Default::default(),
    };
    let (seed_role, seed_phone, seed_address, seed_status) = match &existing {
        Some(u) => (
            u.role.label().to_string(),
            u.phone.clone(),
            u.address.clone(),
            u.status.label().to_string(),
        ),
        None => Default::default(),
    };

    let mut first_name = use_signal(move || seed_first);
    let mut last_name = use_signal(move || seed_last);
    let mut middle_name = use_signal(move || seed_middle);
    let mut birth_date = use_signal(move || seed_birth);
    let mut email = use_signal(move || seed_email);
    let mut password = use_signal(String::new);
    let mut role_value = use_signal(move || seed_role);
    let mut phone = use_signal(move || seed_phone);
    let mut address = use_signal(move || seed_address);
    let mut status_value = use_signal(move || seed_status);
    let mut error_msg = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let is_edit = existing.is_some();
    let is_employee = kind == UserModalKind::Employee;
    let title_noun = kind.title_noun();
    let title = if read_only {
        format!("Detalles del {title_noun}")
    } else if is_edit {
        format!("Editar {title_noun}")
    } else {
        format!("Agregar {title_noun}")
    };
    let submit_label = if is_edit {
        "Actualizar".to_string()
    } else {
        format!("Guardar {title_noun}")
    };
    let first_placeholder = format!("Nombre(s) del {}", kind.noun());
    let last_placeholder = format!("Apellido paterno del {}", kind.noun());
    let middle_placeholder = format!("Apellido materno del {}", kind.noun());

    let target = existing.clone();
    let submit = move |_| {
        if *saving.read() {
            return;
        }
        let first_value = first_name.read().trim().to_string();
        let last_value = last_name.read().trim().to_string();
        let middle_value = middle_name.read().trim().to_string();
        let birth_value = birth_date.read().clone();
        let email_value = email.read().trim().to_string();
        let password_value = password.read().clone();
        let role_choice = role_value.read().clone();
        let phone_value = phone.read().trim().to_string();
        let address_value = address.read().trim().to_string();
        let status_choice = status_value.read().clone();

        let creating = target.is_none();
        let mut missing = first_value.is_empty()
            || last_value.is_empty()
            || birth_value.is_empty()
            || email_value.is_empty()
            || phone_value.is_empty()
            || address_value.is_empty()
            || status_choice.is_empty();
        if creating && password_value.trim().is_empty() {
            missing = true;
        }
        if is_employee && role_choice.is_empty() {
            missing = true;
        }
        if missing {
            error_msg.set(Some("Faltan campos por llenar".to_string()));
            return;
        }

        let birth_wire = from_html_date_value(&birth_value).unwrap_or(birth_value);
        let password_field = creating.then_some(password_value);

        saving.set(true);
        error_msg.set(None);
        let api = api.clone();
        let target = target.clone();
        spawn(async move {
            let result = if is_employee {
                let draft = EmployeeDraft {
                    first_name: first_value,
                    last_name: last_value,
                    middle_name: middle_value,
                    birth_date: birth_wire,
                    email: email_value,
                    password: password_field,
                    role: Role::parse(&role_choice),
                    phone: phone_value,
                    address: address_value,
                    status: AccountStatus::parse(&status_choice),
                };
                match &target {
                    Some(user) => api.update_employee(&user.id, &draft).await,
                    None => api.create_employee(&draft).await,
                }
            } else {
                let draft = ClientDraft {
                    first_name: first_value,
                    last_name: last_value,
                    middle_name: middle_value,
                    birth_date: birth_wire,
                    email: email_value,
                    password: password_field,
                    phone: phone_value,
                    address: address_value,
                    status: Some(AccountStatus::parse(&status_choice)),
                };
                match &target {
                    Some(user) => api.update_client(&user.id, &draft).await,
                    None => api.register_client(&draft).await,
                }
            };
            match result {
                Ok(()) => on_saved.call(()),
                Err(message) => error_msg.set(Some(message)),
            }
            saving.set(false);
        });
    };

    let form_error = error_msg.read().clone();
    let busy = *saving.read();
    let show_password = !is_edit && !read_only;

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal user-modal",
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h2 { class: "modal-title", "{title}" }
                if let Some(message) = form_error {
                    div { class: "form-error", "{message}" }
                }
                InputField {
                    label: "Nombre(s)",
                    value: first_name(),
                    placeholder: first_placeholder,
                    read_only,
                    on_change: move |value| first_name.set(value),
                }
                InputField {
                    label: "Apellido Paterno",
                    value: last_name(),
                    placeholder: last_placeholder,
                    read_only,
                    on_change: move |value| last_name.set(value),
                }
                InputField {
                    label: "Apellido Materno",
                    value: middle_name(),
                    placeholder: middle_placeholder,
                    read_only,
                    on_change: move |value| middle_name.set(value),
                }
                InputField {
                    label: "Fecha de nacimiento",
                    value: birth_date(),
                    input_type: "date",
                    read_only,
                    on_change: move |value| birth_date.set(value),
                }
                InputField {
                    label: "Correo Electrónico",
                    value: email(),
                    placeholder: "correo@ejemplo.com",
                    input_type: "email",
                    read_only,
                    on_change: move |value| email.set(value),
                }
                if show_password {
                    InputPassword {
                        value: password(),
                        on_change: move |value| password.set(value),
                    }
                }
                if is_employee {
                    div { class: "form-group",
                        label { class: "form-label", "Cargo" }
                        select {
                            class: "form-input",
                            disabled: read_only,
                            value: "{role_value}",
                            onchange: move |evt| role_value.set(evt.value()),
                            option { value: "", "Todos los Roles" }
                            for role in Role::staff_roles() {
                                {
                                    let label = role.label().to_string();
                                    rsx! {
                                        option { key: "{label}", value: "{label}", "{label}" }
                                    }
                                }
                            }
                        }
                    }
                }
                InputField {
                    label: "Teléfono",
                    value: phone(),
                    placeholder: "722 123 1234",
                    input_type: "tel",
                    read_only,
                    on_change: move |value| phone.set(value),
                }
                InputField {
                    label: "Dirección",
                    value: address(),
                    placeholder: "Dirección",
                    read_only,
                    on_change: move |value| address.set(value),
                }
                div { class: "form-group",
                    label { class: "form-label", "Estado" }
                    select {
                        class: "form-input",
                        disabled: read_only,
                        value: "{status_value}",
                        onchange: move |evt| status_value.set(evt.value()),
                        option { value: "", "Selecciona estatus" }
                        for status in AccountStatus::all() {
                            {
                                let label = status.label();
                                rsx! {
                                    option { key: "{label}", value: "{label}", "{label}" }
                                }
                            }
                        }
                    }
                }
                div { class: "modal-actions",
                    button {
                        class: "btn-secondary",
                        onclick: move |_| on_close.call(()),
                        "Cancelar"
                    }
                    if !read_only {
                        button {
                            class: "btn-primary",
                            disabled: busy,
                            onclick: submit,
                            "{submit_label}"
                        }
                    }
                }
            }
        }
    }
}
