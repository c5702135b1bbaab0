//! Inventory management: filterable product table with CRUD modal.

use dioxus::prelude::*;

use mqa_common::product::{Category, Product, ProductFilter, ProductStatus};

use super::api_client::{use_api, ApiClient};
use super::notices::{push_notice, use_notices, NoticeKind};
use super::pagination::{page_slice, Paginator, PER_PAGE};
use super::product_modal::{ProductModal, ProductModalMode};

/// Stock at or below this count surfaces in the "Bajo Stock" card.
const LOW_STOCK_THRESHOLD: u32 = 5;

#[component]
pub fn AdminProductsView() -> Element {
    let notices = use_notices();
    let api = use_api();

    let mut products = use_signal(Vec::<Product>::new);
    let mut search = use_signal(String::new);
    let mut category_value = use_signal(String::new);
    let mut status_value = use_signal(String::new);
    let mut page = use_signal(|| 1usize);
    let mut modal = use_signal(|| None::<ProductModalMode>);

    // Applied on Enter in the search box and on select changes, not per
    // keystroke.
    let mut run_filter = move || {
        let mut filter = ProductFilter::by_name(&search.read());
        filter.category = {
            let value = category_value.read();
            (!value.is_empty()).then(|| Category::parse(&value))
        };
        filter.status = {
            let value = status_value.read();
            (!value.is_empty()).then(|| ProductStatus::parse(&value))
        };
        page.set(1);
        spawn(async move {
            match ApiClient::new().fetch_products(&filter).await {
                Ok(list) => products.set(list),
                Err(message) => {
                    products.set(Vec::new());
                    push_notice(notices, NoticeKind::Error, message);
                }
            }
        });
    };

    use_effect(move || {
        spawn(async move {
            match ApiClient::new()
                .fetch_products(&ProductFilter::default())
                .await
            {
                Ok(list) => products.set(list),
                Err(message) => push_notice(notices, NoticeKind::Error, message),
            }
        });
    });

    let on_saved = move |_| {
        modal.set(None);
        run_filter();
    };

    let api_for_delete = api.clone();
    let on_delete_confirm = move |product: Product| {
        let api = api_for_delete.clone();
        modal.set(None);
        spawn(async move {
            match api.delete_product(&product.id).await {
                Ok(()) => {
                    push_notice(notices, NoticeKind::Success, "Producto eliminado.");
                    run_filter();
                }
                Err(message) => push_notice(notices, NoticeKind::Error, message),
            }
        });
    };

    let list = products.read();
    let total = list.len();
    let low_stock = list
        .iter()
        .filter(|p| p.quantity > 0 && p.quantity <= LOW_STOCK_THRESHOLD)
        .count();
    let sold_out = list.iter().filter(|p| p.quantity == 0).count();
    let current_page = *page.read();
    let rows: Vec<Product> = page_slice(&list, current_page, PER_PAGE).to_vec();
    drop(list);
    let modal_mode = modal.read().clone();

    rsx! {
        section { class: "admin-page",
            h2 { class: "page-title", "Gestión de Inventario" }
            div { class: "stats-row",
                div { class: "stat-card",
                    span { class: "stat-value", "{total}" }
                    span { class: "stat-label", "Total Productos" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{low_stock}" }
                    span { class: "stat-label", "Bajo Stock" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{sold_out}" }
                    span { class: "stat-label", "Agotados" }
                }
            }
            div { class: "admin-toolbar",
                input {
                    class: "search-input",
                    r#type: "search",
                    placeholder: "Buscar producto...",
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
                    value: "{category_value}",
                    onchange: move |evt| {
                        category_value.set(evt.value());
                        run_filter();
                    },
                    option { value: "", "Todas las categorías" }
                    for category in Category::all() {
                        {
                            let label = category.label().to_string();
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
                    for status in ProductStatus::all() {
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
                    onclick: move |_| modal.set(Some(ProductModalMode::Create)),
                    "Agregar Producto"
                }
            }
            div { class: "table-card",
                h3 { class: "table-title", "Registro de Inventario" }
                table { class: "admin-table",
                    thead {
                        tr {
                            th { "Nombre" }
                            th { "Fecha de expiración" }
                            th { "Cantidad" }
                            th { "Categoría" }
                            th { "Estado" }
                            th { "Acciones" }
                        }
                    }
                    tbody {
                        if rows.is_empty() {
                            tr {
                                td { colspan: "6", class: "cell-empty", "Sin resultados" }
                            }
                        }
                        for product in rows.iter() {
                            {
                                let category_label = product.category.label().to_string();
                                let category_class = product.category.css_class();
                                let status_label = product.status.label();
                                let status_class = product.status.css_class();
                                let view = product.clone();
                                let edit = product.clone();
                                let doomed = product.clone();
                                rsx! {
                                    tr { key: "{product.id}",
                                        td { class: "cell-name", "{product.food_name}" }
                                        td { "{product.expiration_date}" }
                                        td { "{product.quantity}" }
                                        td {
                                            span { class: "category-chip {category_class}", "{category_label}" }
                                        }
                                        td {
                                            span { class: "status-badge {status_class}", "{status_label}" }
                                        }
                                        td { class: "cell-actions",
                                            button {
                                                class: "action-btn action-view",
                                                onclick: move |_| modal.set(Some(ProductModalMode::View(view.clone()))),
                                                "Ver"
                                            }
                                            button {
                                                class: "action-btn action-edit",
                                                onclick: move |_| modal.set(Some(ProductModalMode::Edit(edit.clone()))),
                                                "Editar"
                                            }
                                            button {
                                                class: "action-btn action-delete",
                                                onclick: move |_| modal.set(Some(ProductModalMode::Delete(doomed.clone()))),
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
                    noun: "productos",
                    on_page: move |n| page.set(n),
                }
            }
            if let Some(mode) = modal_mode {
                {
                    let modal_key = mode.key();
                    rsx! {
                        ProductModal {
                            key: "{modal_key}",
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
