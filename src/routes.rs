//! Hash Router
//!
//! Maps `location.hash` to a page. The current route is provided as
//! context so pages and the sidebar read it explicitly.

use leptos::ev;
use leptos::prelude::*;
use wp_rest::RecordId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Posts,
    NewPost,
    Post(RecordId),
    Users,
    NotFound,
}

/// Sidebar entries, in display order
pub const NAV_ROUTES: &[Route] = &[Route::Posts, Route::NewPost, Route::Users];

impl Route {
    /// Parse a hash such as `#/posts/12`. An empty hash is the post list.
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] | ["posts"] => Route::Posts,
            ["posts", "new"] => Route::NewPost,
            ["posts", id] => Route::Post(
                id.parse()
                    .map(RecordId::Num)
                    .unwrap_or_else(|_| RecordId::Text(id.to_string())),
            ),
            ["users"] => Route::Users,
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Posts | Route::NotFound => "#/posts".to_string(),
            Route::NewPost => "#/posts/new".to_string(),
            Route::Post(id) => format!("#/posts/{}", id),
            Route::Users => "#/users".to_string(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Posts => "Posts",
            Route::NewPost => "New Post",
            Route::Post(_) => "Post",
            Route::Users => "Authors",
            Route::NotFound => "Not Found",
        }
    }

    /// Whether a sidebar entry should be highlighted for this route
    pub fn highlights(&self, entry: &Route) -> bool {
        match (self, entry) {
            (Route::Post(_), Route::Posts) => true,
            (current, entry) => current == entry,
        }
    }
}

/// Current route, provided via context
#[derive(Clone, Copy)]
pub struct RouteContext {
    pub current: ReadSignal<Route>,
    set_current: WriteSignal<Route>,
}

impl RouteContext {
    /// Move to `route` by changing the hash. The `hashchange` listener
    /// updates `current`, so each navigation mounts the page once.
    pub fn navigate(&self, route: Route) {
        if let Err(e) = window().location().set_hash(&route.href()) {
            log::warn!("[router] could not set location hash: {:?}", e);
            self.follow(route);
        }
    }

    /// Switch to `route` unless it is already current. Returns whether it changed.
    fn follow(&self, route: Route) -> bool {
        if self.current.with_untracked(|current| *current == route) {
            return false;
        }
        log::debug!("[router] -> {:?}", route);
        self.set_current.set(route);
        true
    }
}

fn route_from_location() -> Route {
    window()
        .location()
        .hash()
        .map(|hash| Route::parse(&hash))
        .unwrap_or(Route::Posts)
}

/// Create the router, follow `hashchange` events and provide it as context.
pub fn provide_router() -> RouteContext {
    let (current, set_current) = signal(route_from_location());
    let ctx = RouteContext { current, set_current };

    // Lives as long as the app; the handle is never removed
    let _ = window_event_listener(ev::hashchange, move |_| {
        ctx.follow(route_from_location());
    });

    provide_context(ctx);
    ctx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::Posts);
        assert_eq!(Route::parse("#/"), Route::Posts);
        assert_eq!(Route::parse("#/posts"), Route::Posts);
        assert_eq!(Route::parse("#/posts/"), Route::Posts);
        assert_eq!(Route::parse("#/posts/new"), Route::NewPost);
        assert_eq!(Route::parse("#/posts/42"), Route::Post(RecordId::Num(42)));
        assert_eq!(Route::parse("#/posts/abc"), Route::Post(RecordId::Text("abc".to_string())));
        assert_eq!(Route::parse("#/users"), Route::Users);
        assert_eq!(Route::parse("#/posts/1/edit"), Route::NotFound);
        assert_eq!(Route::parse("#/settings"), Route::NotFound);
    }

    #[test]
    fn test_href_round_trip() {
        for route in [
            Route::Posts,
            Route::NewPost,
            Route::Post(7.into()),
            Route::Post(RecordId::Text("imported-7".to_string())),
            Route::Users,
        ] {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }

    #[test]
    fn test_post_detail_highlights_posts() {
        assert!(Route::Post(3.into()).highlights(&Route::Posts));
        assert!(!Route::Post(3.into()).highlights(&Route::Users));
        assert!(Route::Users.highlights(&Route::Users));
    }

    #[test]
    fn test_same_route_is_not_set_twice() {
        let (current, set_current) = signal(Route::Posts);
        let ctx = RouteContext { current, set_current };

        assert!(ctx.follow(Route::Post(7.into())));
        // hashchange for the hash navigation just wrote
        assert!(!ctx.follow(Route::Post(7.into())));
        assert_eq!(current.get_untracked(), Route::Post(7.into()));

        assert!(ctx.follow(Route::Users));
        assert!(!ctx.follow(Route::Users));
        assert_eq!(current.get_untracked(), Route::Users);
    }
}
