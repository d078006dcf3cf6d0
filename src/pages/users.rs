use leptos::prelude::*;
use wp_rest::{Endpoint, User};

use crate::components::{ErrorMessage, LoadingIndicator, UserList};
use crate::context::AppContext;
use crate::hooks::use_api_data;

#[component]
pub fn UsersPage() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let endpoint = Endpoint::users().paged(ctx.config().per_page);
    let users = use_api_data::<Vec<User>>(Signal::stored(endpoint));

    view! {
        <section class="users-page">
            <h1>"Authors"</h1>
            <ErrorMessage message=Signal::derive(move || users.error()) />
            <LoadingIndicator loading=Signal::derive(move || users.loading()) />
            <UserList users=Signal::derive(move || users.data()) />
            <Show when=move || users.settled_empty()>
                <p class="empty">"No authors found."</p>
            </Show>
        </section>
    }
}
