//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Loaders write
//! the latest remote reads here; components read single fields.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::gate::AdminGate;
use crate::models::{AdminPrincipal, PricingPlan, SiteSettings, UserProfile, UserRole};
use crate::settings::default_settings;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Merged display copy
    pub settings: SiteSettings,
    pub plans: Vec<PricingPlan>,
    pub plans_loaded: bool,
    /// Custom logo URL, if one was uploaded
    pub logo_url: Option<String>,
    pub caller: Option<AdminPrincipal>,
    pub signing_in: bool,
    /// `None` until the roster state for the current caller is loaded
    pub gate: Option<AdminGate>,
    pub profile: Option<UserProfile>,
    pub role: UserRole,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            settings: default_settings(),
            plans: Vec::new(),
            plans_loaded: false,
            logo_url: None,
            caller: None,
            signing_in: false,
            gate: None,
            profile: None,
            role: UserRole::Guest,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_is_admin(store: &AppStore) -> bool {
    store.caller().read().is_some() && store.gate().get() == Some(AdminGate::CallerAdmin)
}

/// Forget everything tied to the previous identity
pub fn store_reset_identity(store: &AppStore) {
    store.caller().set(None);
    store.gate().set(None);
    store.profile().set(None);
    store.role().set(UserRole::Guest);
}
