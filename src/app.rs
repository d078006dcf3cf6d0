//! wp-press Frontend App
//!
//! Provides shared context and renders the routed page inside the shell.

use leptos::prelude::*;
use reactive_stores::Store;
use wp_rest::ApiConfig;

use crate::components::Shell;
use crate::context::AppContext;
use crate::pages::{NewPostPage, NotFoundPage, PostPage, PostsPage, UsersPage};
use crate::routes::{provide_router, Route};
use crate::store::UiState;

#[component]
pub fn App(config: ApiConfig) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(AppContext::new((reload_trigger, set_reload_trigger), config));
    provide_context(Store::new(UiState::default()));
    let route = provide_router();

    view! {
        <Shell>
            {move || match route.current.get() {
                Route::Posts => view! { <PostsPage /> }.into_any(),
                Route::NewPost => view! { <NewPostPage /> }.into_any(),
                Route::Post(id) => view! { <PostPage id=id /> }.into_any(),
                Route::Users => view! { <UsersPage /> }.into_any(),
                Route::NotFound => view! { <NotFoundPage /> }.into_any(),
            }}
        </Shell>
    }
}
