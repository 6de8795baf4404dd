//! Profile & Role Commands

use super::or_fallback;
use crate::error::ServiceResult;
use crate::models::{UserProfile, UserRole};
use crate::query::{ops, QueryKey};
use crate::session::Session;

pub async fn fetch_caller_profile(session: &Session) -> Option<UserProfile> {
    let caller = session.caller()?;
    let result = session
        .cached(
            QueryKey::new(ops::CURRENT_USER_PROFILE).for_caller(Some(&caller)),
            || session.service().get_caller_user_profile(),
        )
        .await;
    or_fallback(ops::CURRENT_USER_PROFILE, result, None)
}

pub async fn fetch_user_profile(session: &Session, principal: &str) -> Option<UserProfile> {
    let caller = session.caller()?;
    let result = session
        .cached(
            QueryKey::new(ops::USER_PROFILE)
                .for_caller(Some(&caller))
                .with_arg(principal),
            || session.service().get_user_profile(principal),
        )
        .await;
    or_fallback(ops::USER_PROFILE, result, None)
}

pub async fn save_caller_profile(session: &Session, profile: &UserProfile) -> ServiceResult<()> {
    session.service().save_caller_user_profile(profile).await?;
    session.invalidate(&[ops::CURRENT_USER_PROFILE, ops::USER_PROFILE]);
    tracing::info!("profile saved");
    Ok(())
}

pub async fn fetch_caller_role(session: &Session) -> UserRole {
    let Some(caller) = session.caller() else {
        return UserRole::Guest;
    };
    let result = session
        .cached(
            QueryKey::new(ops::CALLER_ROLE).for_caller(Some(&caller)),
            || session.service().get_caller_user_role(),
        )
        .await;
    or_fallback(ops::CALLER_ROLE, result, UserRole::Guest)
}

pub async fn assign_role(session: &Session, user: &str, role: UserRole) -> ServiceResult<()> {
    session.service().assign_caller_user_role(user, role).await?;
    session.invalidate(&[ops::CALLER_ROLE, ops::IS_ADMIN, ops::ADMIN_EXISTS, ops::ADMIN_LIST]);
    tracing::info!(user, role = role.label(), "role assigned");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{claim_first_admin, fetch_admin_list};
    use crate::service::MemoryService;
    use chrono::TimeDelta;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_anonymous_reads_default() {
        let session = Session::new(Arc::new(MemoryService::new()), TimeDelta::seconds(30));
        assert_eq!(fetch_caller_profile(&session).await, None);
        assert_eq!(fetch_caller_role(&session).await, UserRole::Guest);
    }

    #[tokio::test]
    async fn test_save_then_read_profile() {
        let service = Arc::new(MemoryService::new());
        let session = Session::new(service, TimeDelta::seconds(30));
        session.sign_in().await.unwrap();

        assert_eq!(fetch_caller_profile(&session).await, None);
        save_caller_profile(&session, &UserProfile { name: "Ravi".to_string() })
            .await
            .unwrap();
        assert_eq!(
            fetch_caller_profile(&session).await,
            Some(UserProfile { name: "Ravi".to_string() })
        );
    }

    #[tokio::test]
    async fn test_assign_admin_role_updates_roster() {
        let service = Arc::new(MemoryService::new());
        service.sign_in_as("alice");
        let session = Session::new(service, TimeDelta::seconds(30));
        session.restore().await.unwrap();
        claim_first_admin(&session).await.unwrap();
        assert_eq!(fetch_caller_role(&session).await, UserRole::Admin);
        assert_eq!(fetch_admin_list(&session).await.unwrap().len(), 1);

        assign_role(&session, "bob", UserRole::Admin).await.unwrap();
        assert_eq!(fetch_admin_list(&session).await.unwrap().len(), 2);
    }
}
