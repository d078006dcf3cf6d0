use leptos::prelude::*;

use crate::store::{dismiss_notice, use_ui_store, UiStateStoreFields};

/// Flash messages; each can be dismissed early
#[component]
pub fn NoticeBar() -> impl IntoView {
    let store = use_ui_store();

    view! {
        <div class="notice-bar">
            <For
                each=move || store.notices().get()
                key=|notice| notice.id
                children=move |notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.class() role="status">
                            <span>{notice.text}</span>
                            <button class="notice-close" on:click=move |_| dismiss_notice(&store, id)>"×"</button>
                        </div>
                    }
                }
            />
        </div>
    }
}
