//! Single post page.

use leptos::prelude::*;
use wp_rest::{Endpoint, Post, RecordId};

use crate::components::{ErrorMessage, LoadingIndicator};
use crate::hooks::use_api_data;
use crate::routes::Route;

#[component]
pub fn PostPage(id: RecordId) -> impl IntoView {
    let post = use_api_data::<Option<Post>>(Signal::stored(Endpoint::post(&id)));

    let body = move || {
        post.data().map(|p| {
            let title = p.title_text();
            let date = p.display_date();
            let content = p.content.rendered;
            view! {
                <h1 class="post-title">{title}</h1>
                {date.map(|d| view! { <time class="post-date">{d}</time> })}
                <div class="post-content" inner_html=content></div>
            }
        })
    };

    view! {
        <article class="post-detail">
            <a class="back-link" href=Route::Posts.href()>"← All posts"</a>
            <ErrorMessage message=Signal::derive(move || post.error()) />
            <LoadingIndicator loading=Signal::derive(move || post.loading()) />
            {body}
        </article>
    }
}
