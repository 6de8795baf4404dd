//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::session::Session;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped after every mutation so loaders re-run - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped after every mutation so loaders re-run - write
    set_reload_trigger: WriteSignal<u32>,
    session: StoredValue<Session>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        session: Session,
        config: AppConfig,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            session: StoredValue::new(session),
            config: StoredValue::new(config),
        }
    }

    /// Re-run every loader. Fresh cache entries are served without a remote call.
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Session handle for an async task
    pub fn session(&self) -> Session {
        self.session.get_value()
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
