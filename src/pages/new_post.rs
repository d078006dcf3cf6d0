use leptos::prelude::*;
use wp_rest::Post;

use crate::components::NewPostForm;
use crate::context::AppContext;
use crate::routes::{Route, RouteContext};
use crate::store::{push_notice, use_ui_store, NoticeKind};

/// Standalone create page; opens the new post once it is saved
#[component]
pub fn NewPostPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let route = use_context::<RouteContext>().expect("RouteContext should be provided");
    let store = use_ui_store();

    let on_created = move |post: Post| {
        push_notice(&store, NoticeKind::Success, format!("Created \"{}\"", post.title_text()));
        ctx.reload();
        route.navigate(Route::Post(post.id));
    };

    view! {
        <section class="new-post-page">
            <h1>"New Post"</h1>
            <NewPostForm on_created=on_created />
        </section>
    }
}
