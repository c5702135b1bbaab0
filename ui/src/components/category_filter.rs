//! Horizontal category picker for the public catalog.

use dioxus::prelude::*;
use mqa_common::product::Category;

/// "Todo" plus the six fixed categories. Clicking the active category
/// clears the selection back to "Todo".
#[component]
pub fn CategoryFilter(
    #[props(!optional)] selected: Option<Category>,
    on_select: EventHandler<Option<Category>>,
) -> Element {
    let all_class = if selected.is_none() {
        "category-btn category-active"
    } else {
        "category-btn"
    };

    rsx! {
        nav { class: "category-filter",
            button {
                class: "{all_class}",
                onclick: move |_| on_select.call(None),
                "Todo"
            }
            for category in Category::all() {
                {
                    let label = category.label().to_string();
                    let icon_class = category.css_class();
                    let is_active = selected.as_ref() == Some(category);
                    let chosen = category.clone();
                    rsx! {
                        button {
                            key: "{icon_class}",
                            class: if is_active { "category-btn category-active" } else { "category-btn" },
                            onclick: move |_| {
                                let next = if is_active { None } else { Some(chosen.clone()) };
                                on_select.call(next);
                            },
                            span { class: "category-icon {icon_class}" }
                            span { "{label}" }
                        }
                    }
                }
            }
        }
    }
}
