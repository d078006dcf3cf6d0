//! Post List Components
//!
//! One `PostCard` per post, keyed by post id.

use leptos::prelude::*;
use wp_rest::{list, Post};

use crate::routes::Route;

#[component]
pub fn PostList(#[prop(into)] posts: Signal<Vec<Post>>) -> impl IntoView {
    view! {
        <ul class="post-list">
            <For
                each=move || list::rows(&posts.get())
                key=|post| post.id.clone()
                children=move |post| view! { <PostCard post=post /> }
            />
        </ul>
    }
}

/// Summary of one post: linked title, date, status and excerpt
#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let href = Route::Post(post.id.clone()).href();
    let title = post.title_text();
    let date = post.display_date();
    let status = (!post.is_published() && !post.status.is_empty()).then(|| post.status.clone());
    let excerpt = post.excerpt.rendered;

    view! {
        <li class="post-card">
            <h2 class="post-title"><a href=href>{title}</a></h2>
            <div class="post-meta">
                {date.map(|d| view! { <time class="post-date">{d}</time> })}
                {status.map(|s| view! { <span class="post-status">{s}</span> })}
            </div>
            <div class="post-excerpt" inner_html=excerpt></div>
        </li>
    }
}
