//! Loading and error indicators shared by data views.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator(#[prop(into)] loading: Signal<bool>) -> impl IntoView {
    view! {
        <Show when=move || loading.get()>
            <div class="loading">"Loading..."</div>
        </Show>
    }
}

/// Inline error banner; renders nothing without a message
#[component]
pub fn ErrorMessage(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| view! {
            <div class="error-message" role="alert">{text}</div>
        })
    }
}
