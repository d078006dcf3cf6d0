//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;
use wp_rest::{ApiConfig, WpClient};

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to refetch every mounted data view - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to refetch every mounted data view - write
    set_reload_trigger: WriteSignal<u32>,
    config: StoredValue<ApiConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        config: ApiConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Trigger a reload of all mounted data views
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    pub fn config(&self) -> ApiConfig {
        self.config.get_value()
    }

    /// Fresh client for one request; the browser owns the connection pool.
    pub fn client(&self) -> WpClient {
        WpClient::from_config(self.config())
    }
}
