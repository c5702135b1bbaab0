//! Client-side pagination over fully loaded lists.
//!
//! The admin tables load every matching row and slice locally, five per
//! page. Pages are 1-based.

use dioxus::prelude::*;

pub const PER_PAGE: usize = 5;

pub fn total_pages(len: usize, per_page: usize) -> usize {
    len.div_ceil(per_page).max(1)
}

pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    let start = page.saturating_sub(1) * per_page;
    if start >= items.len() {
        return &[];
    }
    let end = (start + per_page).min(items.len());
    &items[start..end]
}

/// Inclusive 1-based range shown in the "Mostrando X-Y de Z" footer.
pub fn shown_range(len: usize, page: usize, per_page: usize) -> (usize, usize) {
    if len == 0 {
        return (0, 0);
    }
    let start = page.saturating_sub(1) * per_page + 1;
    let end = (page * per_page).min(len);
    (start, end)
}

#[component]
pub fn Paginator(
    total: usize,
    page: usize,
    per_page: usize,
    noun: String,
    on_page: EventHandler<usize>,
) -> Element {
    let pages = total_pages(total, per_page);
    let (first, last) = shown_range(total, page, per_page);

    rsx! {
        div { class: "paginator",
            span { class: "paginator-summary", "Mostrando {first}-{last} de {total} {noun}" }
            div { class: "paginator-controls",
                button {
                    class: "page-btn",
                    disabled: page <= 1,
                    onclick: move |_| on_page.call(page.saturating_sub(1)),
                    "Anterior"
                }
                for n in 1..=pages {
                    button {
                        key: "{n}",
                        class: if n == page { "page-btn page-current" } else { "page-btn" },
                        onclick: move |_| on_page.call(n),
                        "{n}"
                    }
                }
                button {
                    class: "page-btn",
                    disabled: page >= pages,
                    onclick: move |_| on_page.call(page + 1),
                    "Siguiente"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(0, 5), 1);
        assert_eq!(total_pages(5, 5), 1);
        assert_eq!(total_pages(6, 5), 2);
        assert_eq!(total_pages(11, 5), 3);
    }

    #[test]
    fn test_page_slice_bounds() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(page_slice(&items, 1, 5), &[1, 2, 3, 4, 5]);
        assert_eq!(page_slice(&items, 2, 5), &[6, 7]);
        assert!(page_slice(&items, 3, 5).is_empty());
    }

    #[test]
    fn shown_range_matches_slice() {
        assert_eq!(shown_range(7, 1, 5), (1, 5));
        assert_eq!(shown_range(7, 2, 5), (6, 7));
        assert_eq!(shown_range(0, 1, 5), (0, 0));
    }
}
