use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

use crate::routes::routes::PageKey;

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 3000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<Option<PageKey>>,
    pub left_open: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
    notice_seq: StoredValue<u64>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
            notice: RwSignal::new(None),
            notice_seq: StoredValue::new(0),
        }
    }

    /// Reads `?active=...` once and keeps the query string in sync afterwards
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("active").and_then(|key| PageKey::parse(key)) {
            self.active.set(Some(page));
        }

        let this = *self;
        Effect::new(move |_| {
            if let Some(page) = this.active.get() {
                let query_string = serde_qs::to_string(&HashMap::from([(
                    "active".to_string(),
                    page.key().to_string(),
                )]))
                .unwrap_or_default();

                let new_url = format!("?{}", query_string);

                let current_search = window()
                    .and_then(|w| w.location().search().ok())
                    .unwrap_or_default();

                // Only update URL if it actually changed
                if current_search != new_url {
                    if let Some(w) = window() {
                        if let Ok(history) = w.history() {
                            let _ = history.replace_state_with_url(
                                &wasm_bindgen::JsValue::NULL,
                                "",
                                Some(&new_url),
                            );
                        }
                    }
                }
            }
        });
    }

    pub fn navigate(&self, page: PageKey) {
        log::debug!("navigate: {}", page.key());
        self.active.set(Some(page));
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    pub fn notify_success(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Success, text.into());
    }

    pub fn notify_error(&self, text: impl Into<String>) {
        self.notify(NoticeKind::Error, text.into());
    }

    fn notify(&self, kind: NoticeKind, text: String) {
        let id = self.notice_seq.get_value() + 1;
        self.notice_seq.set_value(id);
        self.notice.set(Some(Notice { id, kind, text }));

        let notice = self.notice;
        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
            // a newer notice owns the slot now
            if notice.with_untracked(|n| n.as_ref().map(|n| n.id)) == Some(id) {
                notice.set(None);
            }
        });
    }

    pub fn dismiss_notice(&self) {
        self.notice.set(None);
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper: global context from the component tree
pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext context not found")
}
