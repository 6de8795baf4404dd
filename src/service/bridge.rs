//! JS Agent Bridge
//!
//! Calls `window.tripleHost.invoke(method, args)`, the agent the host page
//! installs for the backend canister. Rejected promises come back as
//! classified `ServiceError`s.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::RemoteService;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{
    AdminPrincipal, EditableSettings, Logo, LogoUpload, PlanDraft, PricingPlan, SiteSettings,
    UserProfile, UserRole,
};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "tripleHost"])]
    async fn invoke(method: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct IdArgs {
    id: u64,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UpdatePlanArgs<'a> {
    id: u64,
    #[serde(flatten)]
    draft: &'a PlanDraft,
}

#[derive(Serialize)]
struct PrincipalArgs<'a> {
    principal: &'a str,
}

#[derive(Serialize)]
struct AssignRoleArgs<'a> {
    user: &'a str,
    role: UserRole,
}

// ========================
// Helpers
// ========================

fn to_js<T: Serialize + ?Sized>(value: &T) -> ServiceResult<JsValue> {
    // Nat arguments must reach the agent as BigInt
    let serializer = serde_wasm_bindgen::Serializer::new()
        .serialize_large_number_types_as_bigints(true)
        .serialize_maps_as_objects(true);
    value
        .serialize(&serializer)
        .map_err(|e| ServiceError::Transport(format!("Serialization error: {}", e)))
}

fn from_js<T: DeserializeOwned>(value: JsValue) -> ServiceResult<T> {
    serde_wasm_bindgen::from_value(value)
        .map_err(|e| ServiceError::Transport(format!("Response error: {}", e)))
}

fn error_message(err: &JsValue) -> String {
    if let Some(e) = err.dyn_ref::<js_sys::Error>() {
        String::from(e.message())
    } else if let Some(s) = err.as_string() {
        s
    } else {
        format!("{:?}", err)
    }
}

async fn call(method: &str, args: JsValue) -> ServiceResult<JsValue> {
    invoke(method, args).await.map_err(|err| {
        let message = error_message(&err);
        tracing::debug!(method, %message, "remote call rejected");
        ServiceError::classify(message)
    })
}

async fn call_unit(method: &str, args: JsValue) -> ServiceResult<()> {
    call(method, args).await.map(|_| ())
}

/// Remote service reached through the page's JS agent
#[derive(Debug, Clone, Copy, Default)]
pub struct BridgeService;

#[async_trait(?Send)]
impl RemoteService for BridgeService {
    async fn whoami(&self) -> ServiceResult<Option<AdminPrincipal>> {
        from_js(call("whoami", JsValue::NULL).await?)
    }

    async fn login(&self) -> ServiceResult<AdminPrincipal> {
        from_js(call("login", JsValue::NULL).await?)
    }

    async fn logout(&self) -> ServiceResult<()> {
        call_unit("logout", JsValue::NULL).await
    }

    async fn create_pricing_plan(&self, draft: &PlanDraft) -> ServiceResult<u64> {
        from_js(call("createPricingPlan", to_js(draft)?).await?)
    }

    async fn update_pricing_plan(&self, id: u64, draft: &PlanDraft) -> ServiceResult<()> {
        call_unit("updatePricingPlan", to_js(&UpdatePlanArgs { id, draft })?).await
    }

    async fn delete_pricing_plan(&self, id: u64) -> ServiceResult<()> {
        call_unit("deletePricingPlan", to_js(&IdArgs { id })?).await
    }

    async fn get_all_pricing_plans(&self) -> ServiceResult<Vec<PricingPlan>> {
        from_js(call("getAllPricingPlans", JsValue::NULL).await?)
    }

    async fn get_pricing_plan(&self, id: u64) -> ServiceResult<Option<PricingPlan>> {
        from_js(call("getPricingPlan", to_js(&IdArgs { id })?).await?)
    }

    async fn get_site_settings(&self) -> ServiceResult<SiteSettings> {
        from_js(call("getSiteSettings", JsValue::NULL).await?)
    }

    async fn update_site_settings(&self, update: &EditableSettings) -> ServiceResult<SiteSettings> {
        from_js(call("updateSiteSettings", to_js(update)?).await?)
    }

    async fn get_logo(&self) -> ServiceResult<Option<Logo>> {
        from_js(call("getLogo", JsValue::NULL).await?)
    }

    async fn update_logo(&self, upload: &LogoUpload) -> ServiceResult<()> {
        // Bytes go across as a Uint8Array, not a number array
        let args = js_sys::Object::new();
        let bytes = js_sys::Uint8Array::from(upload.bytes.as_slice());
        js_sys::Reflect::set(&args, &"bytes".into(), &bytes)
            .and_then(|_| {
                js_sys::Reflect::set(&args, &"contentType".into(), &upload.content_type.as_str().into())
            })
            .map_err(|e| ServiceError::Transport(error_message(&e)))?;
        call_unit("updateLogo", args.into()).await
    }

    async fn get_admin_list(&self) -> ServiceResult<Vec<AdminPrincipal>> {
        from_js(call("getAdminList", JsValue::NULL).await?)
    }

    async fn add_admin(&self, principal: &str) -> ServiceResult<()> {
        call_unit("addAdmin", to_js(&PrincipalArgs { principal })?).await
    }

    async fn remove_admin(&self, principal: &str) -> ServiceResult<()> {
        call_unit("removeAdmin", to_js(&PrincipalArgs { principal })?).await
    }

    async fn does_admin_exist(&self) -> ServiceResult<bool> {
        from_js(call("doesAdminExist", JsValue::NULL).await?)
    }

    async fn claim_first_admin(&self) -> ServiceResult<()> {
        call_unit("claimFirstAdmin", JsValue::NULL).await
    }

    async fn is_caller_admin(&self) -> ServiceResult<bool> {
        from_js(call("isCallerAdmin", JsValue::NULL).await?)
    }

    async fn get_caller_user_profile(&self) -> ServiceResult<Option<UserProfile>> {
        from_js(call("getCallerUserProfile", JsValue::NULL).await?)
    }

    async fn get_user_profile(&self, user: &str) -> ServiceResult<Option<UserProfile>> {
        from_js(call("getUserProfile", to_js(&PrincipalArgs { principal: user })?).await?)
    }

    async fn save_caller_user_profile(&self, profile: &UserProfile) -> ServiceResult<()> {
        call_unit("saveCallerUserProfile", to_js(profile)?).await
    }

    async fn get_caller_user_role(&self) -> ServiceResult<UserRole> {
        from_js(call("getCallerUserRole", JsValue::NULL).await?)
    }

    async fn assign_caller_user_role(&self, user: &str, role: UserRole) -> ServiceResult<()> {
        call_unit("assignCallerUserRole", to_js(&AssignRoleArgs { user, role })?).await
    }
}
