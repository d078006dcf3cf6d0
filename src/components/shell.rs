//! Navigation Shell
//!
//! Header and sidebar chrome around the routed page.

use leptos::prelude::*;
use wp_rest::{Endpoint, SiteInfo};

use crate::components::NoticeBar;
use crate::hooks::use_api_data;
use crate::routes::{RouteContext, NAV_ROUTES};

#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <div class="app-body">
                <Sidebar />
                <main class="main-content">{children()}</main>
            </div>
        </div>
    }
}

/// Site name and tagline from the REST index, plus notices
#[component]
pub fn Header() -> impl IntoView {
    let site = use_api_data::<SiteInfo>(Signal::stored(Endpoint::index()));
    let name = move || {
        let info = site.data();
        if info.name.is_empty() { "WordPress".to_string() } else { info.name }
    };

    view! {
        <header class="app-header">
            <a class="site-name" href="#/posts">{name}</a>
            <span class="site-description">{move || site.data().description}</span>
            <NoticeBar />
        </header>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let route = use_context::<RouteContext>().expect("RouteContext should be provided");

    view! {
        <nav class="sidebar">
            {NAV_ROUTES.iter().map(|entry| {
                let href = entry.href();
                let label = entry.label();
                let entry = entry.clone();
                let class = move || {
                    if route.current.with(|current| current.highlights(&entry)) { "nav-link active" } else { "nav-link" }
                };
                view! {
                    <a class=class href=href>{label}</a>
                }
            }).collect_view()}
        </nav>
    }
}
