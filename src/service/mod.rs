//! Remote Service
//!
//! The backend's fixed set of typed operations. `BridgeService` talks to the
//! JS agent on the page; `MemoryService` keeps everything in process.

mod bridge;
mod memory;

use async_trait::async_trait;

use crate::error::ServiceResult;
use crate::models::{
    AdminPrincipal, EditableSettings, Logo, LogoUpload, PlanDraft, PricingPlan, SiteSettings,
    UserProfile, UserRole,
};

pub use bridge::BridgeService;
pub use memory::MemoryService;

/// All calls run on the caller's authenticated identity.
/// Futures are not `Send`: the browser runs everything on one thread.
#[async_trait(?Send)]
pub trait RemoteService: Send + Sync {
    // Identity
    async fn whoami(&self) -> ServiceResult<Option<AdminPrincipal>>;
    async fn login(&self) -> ServiceResult<AdminPrincipal>;
    async fn logout(&self) -> ServiceResult<()>;

    // Pricing plans
    async fn create_pricing_plan(&self, draft: &PlanDraft) -> ServiceResult<u64>;
    async fn update_pricing_plan(&self, id: u64, draft: &PlanDraft) -> ServiceResult<()>;
    async fn delete_pricing_plan(&self, id: u64) -> ServiceResult<()>;
    async fn get_all_pricing_plans(&self) -> ServiceResult<Vec<PricingPlan>>;
    async fn get_pricing_plan(&self, id: u64) -> ServiceResult<Option<PricingPlan>>;

    // Site settings
    async fn get_site_settings(&self) -> ServiceResult<SiteSettings>;
    async fn update_site_settings(&self, update: &EditableSettings) -> ServiceResult<SiteSettings>;

    // Logo
    async fn get_logo(&self) -> ServiceResult<Option<Logo>>;
    async fn update_logo(&self, upload: &LogoUpload) -> ServiceResult<()>;

    // Admin roster
    async fn get_admin_list(&self) -> ServiceResult<Vec<AdminPrincipal>>;
    async fn add_admin(&self, principal: &str) -> ServiceResult<()>;
    async fn remove_admin(&self, principal: &str) -> ServiceResult<()>;
    async fn does_admin_exist(&self) -> ServiceResult<bool>;
    async fn claim_first_admin(&self) -> ServiceResult<()>;
    async fn is_caller_admin(&self) -> ServiceResult<bool>;

    // Profiles and roles
    async fn get_caller_user_profile(&self) -> ServiceResult<Option<UserProfile>>;
    async fn get_user_profile(&self, user: &str) -> ServiceResult<Option<UserProfile>>;
    async fn save_caller_user_profile(&self, profile: &UserProfile) -> ServiceResult<()>;
    async fn get_caller_user_role(&self) -> ServiceResult<UserRole>;
    async fn assign_caller_user_role(&self, user: &str, role: UserRole) -> ServiceResult<()>;
}
