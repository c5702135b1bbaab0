//! Single product card in the public catalog grid.

use chrono::NaiveDate;
use dioxus::prelude::*;
use mqa_common::freshness::FreshnessStatus;
use mqa_common::product::Product;

fn freshness_css(status: FreshnessStatus) -> &'static str {
    match status {
        FreshnessStatus::Expired => "freshness-expired",
        FreshnessStatus::ExpiresToday => "freshness-today",
        FreshnessStatus::ExpiringSoon => "freshness-soon",
        FreshnessStatus::Fresh => "freshness-ok",
    }
}

#[component]
pub fn ProductCard(product: Product, today: NaiveDate, on_reserve: EventHandler<Product>) -> Element {
    let reservable = product.is_reservable(today);
    let sold_out = product.quantity == 0;
    let quantity = product.quantity;
    let unit_word = if quantity == 1 { "unidad" } else { "unidades" };
    let status_label = product.status.label();
    let status_class = product.status.css_class();
    let category_label = product.category.label().to_string();
    let category_class = product.category.css_class();
    let button_label = if sold_out { "Agotado" } else { "Apartar" };
    let freshness_view = product
        .freshness(today)
        .map(|f| (f.label(), freshness_css(f.status)));
    let clicked = product.clone();

    rsx! {
        article { class: "product-card",
            div { class: "product-image-wrap",
                img {
                    class: "product-image",
                    src: "{product.image}",
                    alt: "{product.food_name}",
                }
                span { class: "status-badge {status_class}", "{status_label}" }
                if quantity > 0 {
                    span { class: "quantity-badge", "{quantity} {unit_word}" }
                }
            }
            div { class: "product-body",
                span { class: "category-chip {category_class}", "{category_label}" }
                h3 { class: "product-name", "{product.food_name}" }
                if let Some((text, badge_class)) = freshness_view {
                    p { class: "freshness-badge {badge_class}", "{text}" }
                }
                button {
                    class: "reserve-btn",
                    disabled: !reservable,
                    onclick: move |_| {
                        if clicked.is_reservable(today) {
                            on_reserve.call(clicked.clone());
                        }
                    },
                    "{button_label}"
                }
            }
        }
    }
}
