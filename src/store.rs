//! UI State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

/// How long a notice stays on screen
const NOTICE_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
}

impl NoticeKind {
    pub fn class(&self) -> &'static str {
        match self {
            NoticeKind::Success => "notice success",
        }
    }
}

/// A flash message shown in the header
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub id: u32,
    pub kind: NoticeKind,
    pub text: String,
}

/// UI-wide state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct UiState {
    /// Notices currently on screen, oldest first
    pub notices: Vec<Notice>,
    /// Last id handed out to a notice
    pub last_notice_id: u32,
}

/// Type alias for the store
pub type UiStore = Store<UiState>;

/// Get the UI store from context
pub fn use_ui_store() -> UiStore {
    expect_context::<UiStore>()
}

/// Show a notice and schedule its removal
pub fn push_notice(store: &UiStore, kind: NoticeKind, text: impl Into<String>) -> u32 {
    let id = {
        let field = store.last_notice_id();
        let mut last = field.write();
        *last += 1;
        *last
    };
    store.notices().write().push(Notice { id, kind, text: text.into() });

    let store = *store;
    spawn_local(async move {
        TimeoutFuture::new(NOTICE_TIMEOUT_MS).await;
        dismiss_notice(&store, id);
    });
    id
}

/// Remove a notice by ID
pub fn dismiss_notice(store: &UiStore, id: u32) {
    store.notices().write().retain(|n| n.id != id);
}
