//! Employee management: filterable staff table with CRUD modal.

use dioxus::prelude::*;

use mqa_common::user::{AccountStatus, Role, User, UserFilter};

use super::api_client::{use_api, ApiClient};
use super::notices::{push_notice, use_notices, NoticeKind};
use super::pagination::{page_slice, Paginator, PER_PAGE};
use super::user_modal::{UserModal, UserModalKind, UserModalMode};

#[component]
pub fn AdminEmployeesView() -> Element {
    let notices = use_notices();
    let api = use_api();

    let mut employees = use_signal(Vec::<User>::new);
    let mut search = use_signal(String::new);
    let mut role_value = use_signal(String::new);
    let mut status_value = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut modal = use_signal(|| None::<UserModalMode>);

    let mut run_filter = move || {
        let mut filter = UserFilter::default();
        let name = search.read().trim().to_string();
        filter.name = (!name.is_empty()).then_some(name);
        filter.role = {
            let value = role_value.read();
            (!value.is_empty()).then(|| Role::parse(&value))
        };
        filter.status = {
            let value = status_value.read();
            (!value.is_empty()).then(|| AccountStatus::parse(&value))
        };
        page.set(1);
        spawn(async move {
            match ApiClient::new().fetch_employees(&filter).await {
                Ok(list) => employees.set(list),
                Err(message) => {
                    employees.set(Vec::new());
                    push_notice(notices, NoticeKind::Error, message);
                }
            }
        });
    };

    use_effect(move || {
        spawn(async move {
            match ApiClient::new()
                .fetch_employees(&UserFilter::default())
                .await
            {
                Ok(list) => employees.set(list),
                Err(message) => push_notice(notices, NoticeKind::Error, message),
            }
        });
    });

    let on_saved = move |_| {
        modal.set(None);
        run_filter();
    };

    let api_for_delete = api.clone();
    let on_delete_confirm = move |user: User| {
        let api = api_for_delete.clone();
        modal.set(None);
        spawn(async move {
            match api.delete_user(&user.id).await {
                Ok(()) => {
                    push_notice(notices, NoticeKind::Success, "Empleado eliminado.");
                    run_filter();
                }
                Err(message) => push_notice(notices, NoticeKind::Error, message),
            }
        });
    };

    let list = employees.read();
    let total = list.len();
    let active = list
        .iter()
        .filter(|u| u.status == AccountStatus::Active)
        .count();
    let blocked = list
        .iter()
        .filter(|u| u.status == AccountStatus::Blocked)
        .count();
    let current_page = *page.read();
    let rows: Vec<User> = page_slice(&list, current_page, PER_PAGE).to_vec();
    drop(list);
    let modal_mode = modal.read().clone();

    rsx! {
        section { class: "admin-page",
            h2 { class: "page-title", "Gestión de Empleados" }
            div { class: "stats-row",
                div { class: "stat-card",
                    span { class: "stat-value", "{total}" }
                    span { class: "stat-label", "Total de Empleados" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{active}" }
                    span { class: "stat-label", "Activos" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{blocked}" }
                    span { class: "stat-label", "Bloqueados" }
                }
            }
            div { class: "admin-toolbar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Buscar empleado...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                    onkeydown: move |evt| {
                        if evt.key() == Key::Enter {
                            run_filter();
                        }
                    },
                }
                select {
                    class: "filter-select",
                    value: "{role_value}",
                    onchange: move |evt| {
                        role_value.set(evt.value());
                        run_filter();
                    },
                    option { value: "", "Todos los roles" }
                    for role in Role::staff_roles() {
                        {
                            let label = role.label().to_string();
                            rsx! {
                                option { key: "{label}", value: "{label}", "{label}" }
                            }
                        }
                    }
                }
                select {
                    class: "filter-select",
                    value: "{status_value}",
                    onchange: move |evt| {
                        status_value.set(evt.value());
                        run_filter();
                    },
                    option { value: "", "Todos los estatus" }
                    for status in AccountStatus::all() {
                        {
                            let label = status.label();
                            rsx! {
                                option { key: "{label}", value: "{label}", "{label}" }
                            }
                        }
                    }
                }
                button {
                    class: "btn-primary",
                    onclick: move |_| modal.set(Some(UserModalMode::Create)),
                    "Agregar Empleado"
                }
            }
            div { class: "table-card",
                h3 { class: "table-title", "Registro de Empleados" }
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "Nombre" }
                            th { "Cargo" }
                            th { "Fecha Ingreso" }
                            th { "Estado" }
                            th { "Acciones" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td { colspan: "5", class: "cell-empty", "Sin resultados" }
                            }
                        }
                        for user in rows.iter() {
                            {
                                let initials = user.initials();
                                let full_name = user.full_name();
                                let role_label = user.role.label().to_string();
                                let status_label = user.status.label();
                                let status_class = user.status.css_class();
                                let view = user.clone();
                                let edit = user.clone();
                                let doomed = user.clone();
                                rsx! {
                                    tr { key: "{user.id}",
                                        td { class: "cell-name",
                                            span { class: "avatar", "{initials}" }
                                            div { class: "cell-name-text",
                                                span { "{full_name}" }
                                                span { class: "cell-subtle", "{user.email}" }
                                            }
                                        }
                                        td { "{role_label}" }
                                        td { "{user.birth_date}" }
                                        td {
                                            span { class: "status-badge {status_class}", "{status_label}" }
                                        }
                                        td { class: "cell-actions",
                                            button {
                                                class: "action-btn action-view",
                                                onclick: move |_| modal.set(Some(UserModalMode::View(view.clone()))),
                                                "Ver"
                                            }
                                            button {
                                                class: "action-btn action-edit",
                                                onclick: move |_| modal.set(Some(UserModalMode::Edit(edit.clone()))),
                                                "Editar"
                                            }
                                            button {
                                                class: "action-btn action-delete",
                                                onclick: move |_| modal.set(Some(UserModalMode::Delete(doomed.clone()))),
                                                "Eliminar"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
                Paginator {
                    total,
                    page: current_page,
                    per_page: PER_PAGE,
                    noun: "empleados",
                    on_page: move |n| page.set(n),
                }
            }
            if let Some(mode) = modal_mode {
                {
                    let modal_key = mode.key();
                    rsx! {
                        UserModal {
                            key: "{modal_key}",
                            kind: UserModalKind::Employee,
                            mode: mode.clone(),
                            on_close: move |_| modal.set(None),
                            on_saved,
                            on_delete_confirm,
                        }
                    }
                }
            }
        }
    }
}
