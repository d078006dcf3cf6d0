//! Data Hooks
//!
//! `use_api_data` ties a `FetchState` to the component that owns it: one
//! read per distinct endpoint, another on `refetch()` or an app-wide reload.

use leptos::prelude::*;
use leptos::task::spawn_local;
use serde::de::DeserializeOwned;
use wp_rest::{Endpoint, FetchState, Transport, WpClient};

use crate::context::AppContext;

/// Reactive handle to the latest result of an endpoint
pub struct ApiData<T: Send + Sync + 'static> {
    state: RwSignal<FetchState<T>>,
    trigger: RwSignal<u32>,
}

impl<T: Send + Sync + 'static> Clone for ApiData<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ApiData<T> {}

impl<T: Clone + Send + Sync + 'static> ApiData<T> {
    pub fn loading(&self) -> bool {
        self.state.with(|s| s.loading())
    }

    pub fn data(&self) -> T {
        self.state.with(|s| s.data().clone())
    }

    pub fn error(&self) -> Option<String> {
        self.state.with(|s| s.error().map(str::to_string))
    }

    /// Issue a new read for the current endpoint
    pub fn refetch(&self) {
        self.trigger.update(|n| *n += 1);
    }
}

impl<T: Clone + Send + Sync + 'static> ApiData<Vec<T>> {
    /// A read finished without error and returned no rows
    pub fn settled_empty(&self) -> bool {
        self.state.with(|s| s.settled_empty())
    }
}

/// Fetch `endpoint` and keep the result reactive.
///
/// While a request is pending the previous result stays visible. A failed
/// read keeps it as well and exposes the error. When a newer request is
/// issued before an older one returns, the older response is dropped; if
/// the owner is disposed first, the response is dropped too.
pub fn use_api_data<T>(endpoint: Signal<Endpoint>) -> ApiData<T>
where
    T: DeserializeOwned + Default + Clone + Send + Sync + 'static,
{
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    use_api_data_with(endpoint, ctx.reload_trigger, move || ctx.client())
}

/// `use_api_data` with an explicit app-wide reload signal and client factory.
pub fn use_api_data_with<T, C, F>(
    endpoint: Signal<Endpoint>,
    reload: ReadSignal<u32>,
    make_client: F,
) -> ApiData<T>
where
    T: DeserializeOwned + Default + Clone + Send + Sync + 'static,
    C: Transport + 'static,
    F: Fn() -> WpClient<C> + 'static,
{
    let state = RwSignal::new(FetchState::<T>::default());
    let trigger = RwSignal::new(0u32);
    let endpoint = Memo::new(move |_| endpoint.get());

    Effect::new(move |_| {
        let endpoint = endpoint.get();
        trigger.track();
        reload.track();

        let Some(ticket) = state.try_update(|s| s.begin()) else {
            return;
        };
        let client = make_client();
        spawn_local(async move {
            let result = client.fetch::<T>(&endpoint).await;
            match &result {
                Ok(_) => log::debug!("[fetch] {} loaded", endpoint),
                Err(e) => log::warn!("[fetch] {} failed: {}", endpoint, e),
            }
            if state.try_update(|s| s.resolve(ticket, result)).is_none() {
                log::debug!("[fetch] {} resolved after unmount", endpoint);
            }
        });
    });

    ApiData { state, trigger }
}

#[cfg(test)]
mod tests {
    use super::*;
    use any_spawner::Executor;
    use async_trait::async_trait;
    use serde_json::Value;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tokio::sync::Notify;
    use wp_rest::{ApiConfig, ApiResult, HttpResponse, Post, Url};

    /// Answers every GET with one post; optionally holds responses until released
    #[derive(Clone, Default)]
    struct CountingTransport {
        gets: Arc<AtomicUsize>,
        gate: Option<Arc<Notify>>,
    }

    impl CountingTransport {
        fn gets(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }
    }

    #[async_trait(?Send)]
    impl Transport for CountingTransport {
        async fn get(&self, _url: &Url) -> ApiResult<HttpResponse> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            Ok(HttpResponse::new(200, r#"[{"id":1,"title":"Hello"}]"#))
        }

        async fn post_json(&self, _url: &Url, _body: &Value) -> ApiResult<HttpResponse> {
            Ok(HttpResponse::new(201, "{}"))
        }
    }

    fn factory(transport: &CountingTransport) -> impl Fn() -> WpClient<CountingTransport> + 'static {
        let transport = transport.clone();
        move || WpClient::new(transport.clone(), ApiConfig::new("https://example.com"))
    }

    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test]
    async fn test_one_read_per_endpoint_and_reload() {
        let _ = Executor::init_tokio();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let owner = Owner::new();
                owner.set();
                let transport = CountingTransport::default();
                let (reload, set_reload) = signal(0u32);
                let (endpoint, set_endpoint) = signal(Endpoint::posts());

                let posts = use_api_data_with::<Vec<Post>, _, _>(endpoint.into(), reload, factory(&transport));
                settle().await;
                assert_eq!(transport.gets(), 1);
                assert!(!posts.loading());
                assert_eq!(posts.data().len(), 1);
                assert!(posts.error().is_none());

                // Same endpoint value again: no new read
                set_endpoint.set(Endpoint::posts());
                settle().await;
                assert_eq!(transport.gets(), 1);

                set_reload.update(|n| *n += 1);
                settle().await;
                assert_eq!(transport.gets(), 2);

                posts.refetch();
                settle().await;
                assert_eq!(transport.gets(), 3);

                set_endpoint.set(Endpoint::posts().paged(Some(5)));
                settle().await;
                assert_eq!(transport.gets(), 4);
                assert!(!posts.loading());
            })
            .await;
    }

    #[tokio::test]
    async fn test_response_after_dispose_is_dropped() {
        let _ = Executor::init_tokio();
        let local = tokio::task::LocalSet::new();
        local
            .run_until(async {
                let owner = Owner::new();
                owner.set();
                let gate = Arc::new(Notify::new());
                let transport = CountingTransport { gate: Some(gate.clone()), ..Default::default() };
                let (reload, _) = signal(0u32);

                let page = Owner::new();
                let posts = page.with(|| {
                    use_api_data_with::<Vec<Post>, _, _>(Signal::stored(Endpoint::posts()), reload, factory(&transport))
                });
                settle().await;
                assert_eq!(transport.gets(), 1);
                assert!(posts.loading());

                page.cleanup();
                gate.notify_one();
                settle().await;

                assert_eq!(transport.gets(), 1);
                assert!(posts.state.try_with_untracked(|s| s.loading()).is_none());
            })
            .await;
    }
}
