//! Reservation cart modal.

use dioxus::prelude::*;
use mqa_common::product::Product;

#[component]
pub fn CartModal(
    items: Vec<Product>,
    on_close: EventHandler<()>,
    on_confirm: EventHandler<()>,
) -> Element {
    let empty = items.is_empty();

    rsx! {
        div { class: "modal-backdrop",
            div { class: "modal cart-modal",
                button {
                    class: "modal-close",
                    onclick: move |_| on_close.call(()),
                    "×"
                }
                h2 { class: "modal-title", "Carrito de Productos Apartados" }
                if empty {
                    p { class: "cart-empty", "No hay productos en el carrito." }
                } else {
                    ul { class: "cart-items",
                        for item in items.iter() {
                            {
                                let category_label = item.category.label().to_string();
                                rsx! {
                                    li { key: "{item.id}", class: "cart-item",
                                        img {
                                            class: "cart-item-image",
                                            src: "{item.image}",
                                            alt: "{item.food_name}",
                                        }
                                        div { class: "cart-item-info",
                                            p { class: "cart-item-name", "{item.food_name}" }
                                            p { class: "cart-item-category", "{category_label}" }
                                        }
                                    }
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
                    button {
                        class: "btn-confirm",
                        disabled: empty,
                        onclick: move |_| on_confirm.call(()),
                        "Confirmar Donación"
                    }
                }
            }
        }
    }
}
