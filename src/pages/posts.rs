//! Post list page with an inline "write a post" form.

use leptos::prelude::*;
use wp_rest::{Endpoint, Post};

use crate::components::{ErrorMessage, LoadingIndicator, NewPostForm, PostList};
use crate::context::AppContext;
use crate::hooks::use_api_data;
use crate::store::{push_notice, use_ui_store, NoticeKind};

#[component]
pub fn PostsPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_ui_store();
    let endpoint = Endpoint::posts().paged(ctx.config().per_page);
    let posts = use_api_data::<Vec<Post>>(Signal::stored(endpoint));
    let (composing, set_composing) = signal(false);

    // Close the form and refetch every mounted list, once per created post
    let on_created = move |post: Post| {
        push_notice(&store, NoticeKind::Success, format!("Created \"{}\"", post.title_text()));
        set_composing.set(false);
        ctx.reload();
    };

    view! {
        <section class="posts-page">
            <div class="page-header">
                <h1>"Posts"</h1>
                <button
                    class="refresh-btn"
                    disabled=move || posts.loading()
                    on:click=move |_| posts.refetch()
                >
                    "Refresh"
                </button>
                <button class="compose-btn" on:click=move |_| set_composing.update(|c| *c = !*c)>
                    {move || if composing.get() { "Cancel" } else { "Write a post" }}
                </button>
            </div>

            <Show when=move || composing.get()>
                <NewPostForm on_created=on_created />
            </Show>

            <ErrorMessage message=Signal::derive(move || posts.error()) />
            <LoadingIndicator loading=Signal::derive(move || posts.loading()) />
            <PostList posts=Signal::derive(move || posts.data()) />

            <Show when=move || posts.settled_empty()>
                <p class="empty">"No posts yet."</p>
            </Show>
        </section>
    }
}
