//! Public catalog: product grid, category filter and the reservation flow.

use dioxus::prelude::*;

use mqa_common::freshness;
use mqa_common::product::{Category, Product, ProductFilter};

use super::api_client::ApiClient;
use super::app::Route;
use super::cart_modal::CartModal;
use super::cart_state::use_cart_state;
use super::category_filter::CategoryFilter;
use super::notices::{push_notice, use_notices, NoticeKind};
use super::product_card::ProductCard;
use super::session::use_session;

#[component]
pub fn CatalogView(search: ReadOnlySignal<String>) -> Element {
    let session = use_session();
    let mut cart_state = use_cart_state();
    let notices = use_notices();
    let nav = use_navigator();

    let mut products = use_signal(Vec::<Product>::new);
    let mut loading = use_signal(|| true);
    let mut error = use_signal(|| None::<String>);
    let mut selected_category = use_signal(|| None::<Category>);

    let today = freshness::today_utc();

    // Reload whenever the search query in the route or the selected
    // category changes; both are read synchronously so the effect tracks
    // them.
    use_effect(move || {
        let mut filter = ProductFilter::by_name(&search());
        filter.category = selected_category();
        loading.set(true);
        spawn(async move {
            match ApiClient::new().fetch_products(&filter).await {
                Ok(list) => {
                    products.set(list);
                    error.set(None);
                }
                Err(detail) => {
                    tracing::error!("catalog load failed: {detail}");
                    error.set(Some(
                        "Hubo un error al cargar los productos. Verifica tu conexión.".to_string(),
                    ));
                }
            }
            loading.set(false);
        });
    });

    let on_reserve = move |product: Product| {
        if !session.read().is_authenticated() {
            push_notice(
                notices,
                NoticeKind::Error,
                "Debes iniciar sesión para apartar productos.",
            );
            nav.push(Route::Login {});
            return;
        }
        let outcome = cart_state.write().cart.add(product, today);
        if let Err(err) = outcome {
            push_notice(notices, NoticeKind::Error, err.to_string());
        }
    };

    // One PUT per reserved item, awaited in cart order. Failed decrements
    // are logged and surfaced; the cart is emptied regardless so a retry
    // starts from a clean slate against fresh stock counts.
    let on_confirm = move |_| {
        let drained = cart_state.write().cart.drain();
        cart_state.write().open = false;
        let bearer = session.read().bearer();
        let mut filter = ProductFilter::by_name(&search.read());
        filter.category = selected_category();
        spawn(async move {
            let client = ApiClient::with_bearer(bearer);
            let mut failures = 0usize;
            for item in &drained {
                let next_quantity = item.quantity.saturating_sub(1);
                if let Err(detail) = client.update_quantity(&item.id, next_quantity).await {
                    tracing::error!("stock decrement failed for {}: {detail}", item.id);
                    failures += 1;
                }
            }
            if failures == 0 {
                push_notice(
                    notices,
                    NoticeKind::Success,
                    "Donación confirmada. Gracias por tu apoyo.",
                );
            } else {
                push_notice(
                    notices,
                    NoticeKind::Error,
                    "Hubo un error al procesar la donación.",
                );
            }
            match ApiClient::new().fetch_products(&filter).await {
                Ok(list) => products.set(list),
                Err(detail) => tracing::error!("catalog refresh failed: {detail}"),
            }
        });
    };

    let is_loading = *loading.read();
    let load_error = error.read().clone();
    let has_products = !products.read().is_empty();
    let show_error = !is_loading && load_error.is_some();
    let show_empty = !is_loading && load_error.is_none() && !has_products;
    let show_grid = !is_loading && load_error.is_none() && has_products;
    let error_text = load_error.unwrap_or_default();
    let cart_open = cart_state.read().open;
    let cart_items = cart_state.read().cart.items().to_vec();

    rsx! {
        section { class: "catalog",
            h2 { class: "catalog-title", "Productos Disponibles" }
            CategoryFilter {
                selected: selected_category(),
                on_select: move |choice| selected_category.set(choice),
            }
            if is_loading {
                p { class: "catalog-loading", "Cargando productos..." }
            }
            if show_error {
                div { class: "catalog-error", "{error_text}" }
            }
            if show_empty {
                div { class: "catalog-empty", "No hay productos para donar actualmente." }
            }
            if show_grid {
                div { class: "product-grid",
                    for product in products.read().iter() {
                        ProductCard {
                            key: "{product.id}",
                            product: product.clone(),
                            today,
                            on_reserve,
                        }
                    }
                }
            }
            if cart_open {
                CartModal {
                    items: cart_items,
                    on_close: move |_| cart_state.write().open = false,
                    on_confirm,
                }
            }
        }
    }
}
