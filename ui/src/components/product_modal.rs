//! Create / view / edit / delete modal for the inventory page.
//!
//! The page keys this component by [`ProductModalMode::key`], so switching
//! between modes or products remounts the form with fresh field state.
//! Dates are edited through a native date input (`YYYY-MM-DD`) and
//! converted back to the API's `DD/MM/YYYY` on submit.

use dioxus::prelude::*;

use mqa_common::freshness::{from_html_date_value, html_date_value};
use mqa_common::product::{Category, Product, ProductStatus};

use super::api_client::{use_api, ProductDraft};
use super::forms::InputField;

#[derive(Clone, Debug, PartialEq)]
pub enum ProductModalMode {
    Create,
    View(Product),
    Edit(Product),
    Delete(Product),
}

impl ProductModalMode {
    pub fn key(&self) -> String {
        match self {
            ProductModalMode::Create => "create".to_string(),
            ProductModalMode::View(p) => format!("view-{}", p.id),
            ProductModalMode::Edit(p) => format!("edit-{}", p.id),
            ProductModalMode::Delete(p) => format!("delete-{}", p.id),
        }
    }
}

#[component]
pub fn ProductModal(
    mode: ProductModalMode,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
    on_delete_confirm: EventHandler<Product>,
) -> Element {
    match mode {
        ProductModalMode::Delete(product) => rsx! {
            ProductDeleteConfirm { product, on_close, on_delete_confirm }
        },
        ProductModalMode::Create => rsx! {
            ProductForm { existing: None, read_only: false, on_close, on_saved }
        },
        ProductModalMode::View(product) => rsx! {
            ProductForm { existing: Some(product), read_only: true, on_close, on_saved }
        },
        ProductModalMode::Edit(product) => rsx! {
            ProductForm { existing: Some(product), read_only: false, on_close, on_saved }
        },
    }
}

#[component]
fn ProductDeleteConfirm(
    product: Product,
    on_close: EventHandler<()>,
    on_delete_confirm: EventHandler<Product>,
) -> Element {
    let doomed = product.clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal confirm-modal",
                h2 { class: "modal-title", "¿Eliminar producto?" }
                p { class: "confirm-text",
                    "Esta acción no se puede deshacer. Se eliminará \"{product.food_name}\" del inventario."
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
fn ProductForm(
    #[props(!optional)] existing: Option<Product>,
    read_only: bool,
    on_close: EventHandler<()>,
    on_saved: EventHandler<()>,
) -> Element {
    let api = use_api();

    let (seed_name, seed_category, seed_expiration, seed_quantity, seed_status, seed_image) =
        match &existing {
            Some(p) => (
                p.food_name.clone(),
                p.category.label().to_string(),
                html_date_value(&p.expiration_date).unwrap_or_default(),
                p.quantity.to_string(),
                p.status.label().to_string(),
                p.image.clone(),
            ),
            None => Default::default(),
        };

    let mut food_name = use_signal(move || seed_name);
    let mut category_value = use_signal(move || seed_category);
    let mut expiration = use_signal(move || seed_expiration);
    let mut quantity_text = use_signal(move || seed_quantity);
    let mut status_value = use_signal(move || seed_status);
    let mut image = use_signal(move || seed_image);
    let mut error_msg = use_signal(|| None::<String>);
    let mut saving = use_signal(|| false);

    let is_edit = existing.is_some();
    let title = if read_only {
        "Detalles del Producto"
    } else if is_edit {
        "Editar Producto"
    } else {
        "Agregar Producto"
    };
    let submit_label = if is_edit { "Actualizar" } else { "Guardar Producto" };

    let target = existing.clone();
    let submit = move |_| {
        if *saving.read() {
            return;
        }
        let name_value = food_name.read().trim().to_string();
        let category_choice = category_value.read().clone();
        let expiration_value = expiration.read().clone();
        let quantity_value = quantity_text.read().trim().to_string();
        let status_choice = status_value.read().clone();
        let image_value = image.read().trim().to_string();

        if name_value.is_empty()
            || category_choice.is_empty()
            || expiration_value.is_empty()
            || quantity_value.is_empty()
            || status_choice.is_empty()
            || image_value.is_empty()
        {
            error_msg.set(Some("Todos los campos son obligatorios".to_string()));
            return;
        }
        let quantity = match quantity_value.parse::<u32>() {
            Ok(q) => q,
            Err(_) => {
                error_msg.set(Some("La cantidad no es válida".to_string()));
                return;
            }
        };
        let expiration_wire = match from_html_date_value(&expiration_value) {
            Some(date) => date,
            None => {
                error_msg.set(Some("La fecha de expiración no es válida".to_string()));
                return;
            }
        };

        let draft = ProductDraft {
            food_name: name_value,
            category: Category::parse(&category_choice),
            expiration_date: expiration_wire,
            quantity,
            status: ProductStatus::parse(&status_choice),
            image: image_value,
        };

        saving.set(true);
        error_msg.set(None);
        let api = api.clone();
        let target = target.clone();
        spawn(async move {
            let result = match &target {
                Some(product) => api.update_product(&product.id, &draft).await,
                None => api.create_product(&draft).await,
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
    let show_preview = read_only && !image.read().is_empty();
    let preview_src = image.read().clone();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal product-modal",
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h2 { class: "modal-title", "{title}" }
                if let Some(message) = form_error {
                    div { class: "form-error", "{message}" }
                }
                if show_preview {
                    img { class: "product-preview", src: "{preview_src}" }
                }
                InputField {
                    label: "Nombre",
                    value: food_name(),
                    placeholder: "Nombre del producto",
                    read_only,
                    on_change: move |value| food_name.set(value),
                }
                div { class: "form-group",
                    label { class: "form-label", "Categoría" }
                    select {
                        class: "form-input",
                        disabled: read_only,
                        value: "{category_value}",
                        onchange: move |evt| category_value.set(evt.value()),
                        option { value: "", "Selecciona categoría" }
                        for category in Category::all() {
                            {
                                let label = category.label().to_string();
                                rsx! {
                                    option { key: "{label}", value: "{label}", "{label}" }
                                }
                            }
                        }
                    }
                }
                InputField {
                    label: "Fecha de expiración",
                    value: expiration(),
                    input_type: "date",
                    read_only,
                    on_change: move |value| expiration.set(value),
                }
                InputField {
                    label: "Cantidad",
                    value: quantity_text(),
                    placeholder: "Cantidad",
                    input_type: "number",
                    read_only,
                    on_change: move |value| quantity_text.set(value),
                }
                div { class: "form-group",
                    label { class: "form-label", "Estado" }
                    select {
                        class: "form-input",
                        disabled: read_only,
                        value: "{status_value}",
                        onchange: move |evt| status_value.set(evt.value()),
                        option { value: "", "Selecciona estatus" }
                        for status in ProductStatus::all() {
                            {
                                let label = status.label();
                                rsx! {
                                    option { key: "{label}", value: "{label}", "{label}" }
                                }
                            }
                        }
                    }
                }
                InputField {
                    label: "Imagen",
                    value: image(),
                    placeholder: "URL de la imagen",
                    read_only,
                    on_change: move |value| image.set(value),
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
