//! In-Memory Service
//!
//! Keeps the whole backend state in process. Enforces the same rules the
//! real backend does so the site behaves identically in offline preview.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use base64::Engine;

use super::RemoteService;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{
    AdminPrincipal, EditableSettings, Logo, LogoUpload, PlanDraft, PricingPlan, SiteSettings,
    UserProfile, UserRole,
};

#[derive(Debug, Default)]
struct MemoryState {
    caller: Option<AdminPrincipal>,
    logins: u32,
    plans: BTreeMap<u64, PricingPlan>,
    next_plan_id: u64,
    settings: SiteSettings,
    logo: Option<Logo>,
    admins: Vec<AdminPrincipal>,
    profiles: HashMap<AdminPrincipal, UserProfile>,
    roles: HashMap<AdminPrincipal, UserRole>,
}

impl MemoryState {
    fn require_caller(&self) -> ServiceResult<AdminPrincipal> {
        self.caller
            .clone()
            .ok_or_else(|| ServiceError::classify("Unauthorized: caller is not authenticated"))
    }

    fn require_admin(&self) -> ServiceResult<AdminPrincipal> {
        let caller = self.require_caller()?;
        if self.admins.contains(&caller) {
            Ok(caller)
        } else {
            Err(ServiceError::classify(
                "Unauthorized: only admins can perform this action",
            ))
        }
    }

    fn remove_from_roster(&mut self, caller: &str, principal: &str) -> ServiceResult<()> {
        if !self.admins.iter().any(|a| a == principal) {
            return Err(ServiceError::classify("Invalid principal: not an admin"));
        }
        if self.admins.len() == 1 {
            return Err(ServiceError::classify("Cannot remove the last admin"));
        }
        if caller == principal {
            return Err(ServiceError::classify("You cannot remove yourself"));
        }
        self.admins.retain(|a| a != principal);
        self.roles.insert(principal.to_string(), UserRole::User);
        Ok(())
    }
}

fn validate_draft(draft: &PlanDraft) -> ServiceResult<()> {
    if draft.name.trim().is_empty() {
        return Err(ServiceError::classify("Invalid plan: name is required"));
    }
    if draft.features.is_empty() {
        return Err(ServiceError::classify("Invalid plan: at least one feature is required"));
    }
    Ok(())
}

fn validate_principal(principal: &str) -> ServiceResult<()> {
    if principal.is_empty() || principal.chars().any(char::is_whitespace) {
        return Err(ServiceError::classify(format!("Invalid principal: {:?}", principal)));
    }
    Ok(())
}

/// In-process remote service
#[derive(Debug, Default)]
pub struct MemoryService {
    state: Mutex<MemoryState>,
}

impl MemoryService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the calling identity without going through `login`
    pub fn sign_in_as(&self, principal: &str) {
        self.lock().caller = Some(principal.to_string());
    }

    pub fn sign_out(&self) {
        self.lock().caller = None;
    }

    fn lock(&self) -> MutexGuard<'_, MemoryState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait(?Send)]
impl RemoteService for MemoryService {
    async fn whoami(&self) -> ServiceResult<Option<AdminPrincipal>> {
        Ok(self.lock().caller.clone())
    }

    async fn login(&self) -> ServiceResult<AdminPrincipal> {
        let mut state = self.lock();
        if let Some(caller) = &state.caller {
            return Ok(caller.clone());
        }
        state.logins += 1;
        let principal = format!("preview-{:05}-cai", state.logins);
        state.caller = Some(principal.clone());
        Ok(principal)
    }

    async fn logout(&self) -> ServiceResult<()> {
        self.lock().caller = None;
        Ok(())
    }

    async fn create_pricing_plan(&self, draft: &PlanDraft) -> ServiceResult<u64> {
        let mut state = self.lock();
        state.require_admin()?;
        validate_draft(draft)?;
        state.next_plan_id += 1;
        let id = state.next_plan_id;
        state.plans.insert(id, draft.clone().into_plan(id));
        Ok(id)
    }

    async fn update_pricing_plan(&self, id: u64, draft: &PlanDraft) -> ServiceResult<()> {
        let mut state = self.lock();
        state.require_admin()?;
        validate_draft(draft)?;
        match state.plans.get_mut(&id) {
            Some(plan) => {
                *plan = draft.clone().into_plan(id);
                Ok(())
            }
            None => Err(ServiceError::classify(format!("Invalid plan id: {}", id))),
        }
    }

    async fn delete_pricing_plan(&self, id: u64) -> ServiceResult<()> {
        let mut state = self.lock();
        state.require_admin()?;
        state
            .plans
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| ServiceError::classify(format!("Invalid plan id: {}", id)))
    }

    async fn get_all_pricing_plans(&self) -> ServiceResult<Vec<PricingPlan>> {
        Ok(self.lock().plans.values().cloned().collect())
    }

    async fn get_pricing_plan(&self, id: u64) -> ServiceResult<Option<PricingPlan>> {
        Ok(self.lock().plans.get(&id).cloned())
    }

    async fn get_site_settings(&self) -> ServiceResult<SiteSettings> {
        Ok(self.lock().settings.clone())
    }

    async fn update_site_settings(&self, update: &EditableSettings) -> ServiceResult<SiteSettings> {
        let mut state = self.lock();
        state.require_admin()?;
        state.settings.apply(update);
        Ok(state.settings.clone())
    }

    async fn get_logo(&self) -> ServiceResult<Option<Logo>> {
        Ok(self.lock().logo.clone())
    }

    async fn update_logo(&self, upload: &LogoUpload) -> ServiceResult<()> {
        let mut state = self.lock();
        state.require_admin()?;
        if !upload.content_type.starts_with("image/") {
            return Err(ServiceError::classify("Invalid logo: not an image"));
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(&upload.bytes);
        state.logo = Some(Logo {
            url: format!("data:{};base64,{}", upload.content_type, encoded),
        });
        Ok(())
    }

    async fn get_admin_list(&self) -> ServiceResult<Vec<AdminPrincipal>> {
        let state = self.lock();
        state.require_admin()?;
        Ok(state.admins.clone())
    }

    async fn add_admin(&self, principal: &str) -> ServiceResult<()> {
        let mut state = self.lock();
        state.require_admin()?;
        validate_principal(principal)?;
        if !state.admins.iter().any(|a| a == principal) {
            state.admins.push(principal.to_string());
            state.roles.insert(principal.to_string(), UserRole::Admin);
        }
        Ok(())
    }

    async fn remove_admin(&self, principal: &str) -> ServiceResult<()> {
        let mut state = self.lock();
        let caller = state.require_admin()?;
        state.remove_from_roster(&caller, principal)
    }

    async fn does_admin_exist(&self) -> ServiceResult<bool> {
        Ok(!self.lock().admins.is_empty())
    }

    async fn claim_first_admin(&self) -> ServiceResult<()> {
        let mut state = self.lock();
        let caller = state.require_caller()?;
        if !state.admins.is_empty() {
            return Err(ServiceError::classify("Admin has already been claimed"));
        }
        state.admins.push(caller.clone());
        state.roles.insert(caller, UserRole::Admin);
        Ok(())
    }

    async fn is_caller_admin(&self) -> ServiceResult<bool> {
        let state = self.lock();
        Ok(state
            .caller
            .as_ref()
            .is_some_and(|caller| state.admins.contains(caller)))
    }

    async fn get_caller_user_profile(&self) -> ServiceResult<Option<UserProfile>> {
        let state = self.lock();
        let caller = state.require_caller()?;
        Ok(state.profiles.get(&caller).cloned())
    }

    async fn get_user_profile(&self, user: &str) -> ServiceResult<Option<UserProfile>> {
        let state = self.lock();
        let caller = state.require_caller()?;
        if caller != user && !state.admins.contains(&caller) {
            return Err(ServiceError::classify(
                "Unauthorized: can only view your own profile",
            ));
        }
        Ok(state.profiles.get(user).cloned())
    }

    async fn save_caller_user_profile(&self, profile: &UserProfile) -> ServiceResult<()> {
        let mut state = self.lock();
        let caller = state.require_caller()?;
        if profile.name.trim().is_empty() {
            return Err(ServiceError::classify("Invalid profile: name is required"));
        }
        state.profiles.insert(caller, profile.clone());
        Ok(())
    }

    async fn get_caller_user_role(&self) -> ServiceResult<UserRole> {
        let state = self.lock();
        let Some(caller) = state.caller.as_ref() else {
            return Ok(UserRole::Guest);
        };
        if state.admins.contains(caller) {
            return Ok(UserRole::Admin);
        }
        Ok(state.roles.get(caller).copied().unwrap_or(UserRole::User))
    }

    async fn assign_caller_user_role(&self, user: &str, role: UserRole) -> ServiceResult<()> {
        let mut state = self.lock();
        let caller = state.require_admin()?;
        validate_principal(user)?;
        let is_admin = state.admins.iter().any(|a| a == user);
        match role {
            UserRole::Admin if !is_admin => {
                state.admins.push(user.to_string());
            }
            UserRole::User | UserRole::Guest if is_admin => {
                state.remove_from_roster(&caller, user)?;
            }
            _ => {}
        }
        state.roles.insert(user.to_string(), role);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str) -> PlanDraft {
        PlanDraft {
            name: name.to_string(),
            description: "desc".to_string(),
            price_cents: 8000,
            duration_days: 30,
            features: vec!["2 GB RAM".to_string()],
        }
    }

    async fn with_admin(principal: &str) -> MemoryService {
        let service = MemoryService::new();
        service.sign_in_as(principal);
        service.claim_first_admin().await.unwrap();
        service
    }

    #[tokio::test]
    async fn test_plan_ids_assigned_by_store() {
        let service = with_admin("admin-1").await;
        let first = service.create_pricing_plan(&draft("Starter")).await.unwrap();
        let second = service.create_pricing_plan(&draft("Iron")).await.unwrap();

        assert_ne!(first, second);
        let plans = service.get_all_pricing_plans().await.unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(service.get_pricing_plan(second).await.unwrap().unwrap().name, "Iron");
    }

    #[tokio::test]
    async fn test_plan_mutations_need_admin() {
        let service = with_admin("admin-1").await;
        service.sign_in_as("visitor");

        let err = service.create_pricing_plan(&draft("Starter")).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_update_missing_plan_is_invalid() {
        let service = with_admin("admin-1").await;
        let err = service.update_pricing_plan(42, &draft("Ghost")).await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn test_claim_requires_caller() {
        let service = MemoryService::new();
        let err = service.claim_first_admin().await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
        assert!(!service.does_admin_exist().await.unwrap());
    }

    #[tokio::test]
    async fn test_self_removal_rejected_when_others_exist() {
        let service = with_admin("admin-1").await;
        service.add_admin("admin-2").await.unwrap();

        let err = service.remove_admin("admin-1").await.unwrap_err();
        assert!(matches!(err, ServiceError::SelfRemoval(_)));

        service.remove_admin("admin-2").await.unwrap();
        assert_eq!(service.get_admin_list().await.unwrap(), vec!["admin-1".to_string()]);
    }

    #[tokio::test]
    async fn test_settings_partial_update() {
        let service = with_admin("admin-1").await;
        let mut update = EditableSettings::default();
        update.hero_title = Some("Fast".to_string());

        let stored = service.update_site_settings(&update).await.unwrap();
        assert_eq!(stored.hero_title, "Fast");
        assert!(stored.hero_badge.is_empty());
    }

    #[tokio::test]
    async fn test_logo_stored_as_data_url() {
        let service = with_admin("admin-1").await;
        let upload = LogoUpload {
            bytes: vec![1, 2, 3],
            content_type: "image/png".to_string(),
        };
        service.update_logo(&upload).await.unwrap();

        let logo = service.get_logo().await.unwrap().unwrap();
        assert_eq!(logo.url, "data:image/png;base64,AQID");
    }

    #[tokio::test]
    async fn test_roles() {
        let service = with_admin("admin-1").await;
        assert_eq!(service.get_caller_user_role().await.unwrap(), UserRole::Admin);

        service.assign_caller_user_role("member-1", UserRole::User).await.unwrap();
        service.sign_in_as("member-1");
        assert_eq!(service.get_caller_user_role().await.unwrap(), UserRole::User);

        service.sign_out();
        assert_eq!(service.get_caller_user_role().await.unwrap(), UserRole::Guest);
    }

    #[tokio::test]
    async fn test_profile_visibility() {
        let service = with_admin("admin-1").await;
        service.sign_in_as("member-1");
        service
            .save_caller_user_profile(&UserProfile { name: "Mia".to_string() })
            .await
            .unwrap();

        let err = service.get_user_profile("admin-1").await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));

        service.sign_in_as("admin-1");
        let profile = service.get_user_profile("member-1").await.unwrap();
        assert_eq!(profile.unwrap().name, "Mia");
    }
}
