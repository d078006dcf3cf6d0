//! Author list, keyed by user id.

use leptos::prelude::*;
use wp_rest::{list, User};

/// Matches the rendered `img` size
const AVATAR_PX: u32 = 48;

#[component]
pub fn UserList(#[prop(into)] users: Signal<Vec<User>>) -> impl IntoView {
    view! {
        <ul class="user-list">
            <For
                each=move || list::rows(&users.get())
                key=|user| user.id.clone()
                children=move |user| view! { <UserCard user=user /> }
            />
        </ul>
    }
}

#[component]
pub fn UserCard(user: User) -> impl IntoView {
    let avatar = user.avatar(AVATAR_PX).map(str::to_string);
    let name = user.name.clone();

    view! {
        <li class="user-card">
            {avatar.map(|src| view! { <img class="avatar" src=src alt="" width="48" height="48" /> })}
            <div class="user-info">
                <a class="user-name" href=user.link target="_blank" rel="noopener">{name}</a>
                <p class="user-description">{user.description}</p>
            </div>
        </li>
    }
}
