//! Transient user-facing notices.
//!
//! A queue of short messages rendered by [`NoticeHost`] near the top of
//! every layout. Each notice auto-dismisses after a few seconds and can
//! be dismissed early by the visitor.

use dioxus::prelude::*;

const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

impl NoticeKind {
    fn css_class(self) -> &'static str {
        match self {
            NoticeKind::Info => "notice-info",
            NoticeKind::Success => "notice-success",
            NoticeKind::Error => "notice-error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Notices {
    items: Vec<Notice>,
    next_id: u64,
}

impl Notices {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, kind: NoticeKind, text: String) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push(Notice { id, kind, text });
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|notice| notice.id != id);
    }

    pub fn items(&self) -> &[Notice] {
        &self.items
    }
}

pub fn use_notices() -> Signal<Notices> {
    use_context::<Signal<Notices>>()
}

/// Queue a notice and schedule its removal. Safe to call from event
/// handlers and spawned tasks; the dismiss timer only runs in the browser.
pub fn push_notice(mut notices: Signal<Notices>, kind: NoticeKind, text: impl Into<String>) {
    let id = notices.write().push(kind, text.into());
    #[cfg(target_family = "wasm")]
    spawn(async move {
        gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        notices.write().dismiss(id);
    });
    #[cfg(not(target_family = "wasm"))]
    let _ = id;
}

#[component]
pub fn NoticeHost() -> Element {
    let mut notices = use_notices();

    rsx! {
        div { class: "notice-stack",
            for notice in notices.read().items().iter() {
                {
                    let id = notice.id;
                    let kind_class = notice.kind.css_class();
                    rsx! {
                        div { key: "{id}", class: "notice {kind_class}",
                            span { class: "notice-text", "{notice.text}" }
                            button {
                                class: "notice-dismiss",
                                onclick: move |_| notices.write().dismiss(id),
                                "×"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_assigns_unique_ids() {
        let mut notices = Notices::new();
        let a = notices.push(NoticeKind::Info, "uno".into());
        let b = notices.push(NoticeKind::Error, "dos".into());
        assert_ne!(a, b);
        assert_eq!(notices.items().len(), 2);
    }

    #[test]
    fn dismiss_removes_only_the_target() {
        let mut notices = Notices::new();
        let a = notices.push(NoticeKind::Info, "uno".into());
        let b = notices.push(NoticeKind::Success, "dos".into());
        notices.dismiss(a);
        assert_eq!(notices.items().len(), 1);
        assert_eq!(notices.items()[0].id, b);
    }
}
