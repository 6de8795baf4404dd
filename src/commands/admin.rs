//! Admin Roster Commands
//!
//! Includes the one-time first-admin claim. Every roster change drops the
//! cached admin flags so the header and panel gate re-check.

use super::or_fallback;
use crate::error::{ServiceError, ServiceResult};
use crate::gate::AdminGate;
use crate::models::AdminPrincipal;
use crate::query::{ops, QueryKey};
use crate::session::Session;

const ROSTER_READS: &[&str] = &[ops::IS_ADMIN, ops::ADMIN_EXISTS, ops::ADMIN_LIST, ops::CALLER_ROLE];

pub async fn fetch_admin_exists(session: &Session) -> bool {
    let result = session
        .cached(QueryKey::new(ops::ADMIN_EXISTS), || {
            session.service().does_admin_exist()
        })
        .await;
    or_fallback(ops::ADMIN_EXISTS, result, false)
}

/// `false` without a remote call when nobody is signed in
pub async fn fetch_is_caller_admin(session: &Session) -> bool {
    let Some(caller) = session.caller() else {
        return false;
    };
    let result = session
        .cached(
            QueryKey::new(ops::IS_ADMIN).for_caller(Some(&caller)),
            || session.service().is_caller_admin(),
        )
        .await;
    or_fallback(ops::IS_ADMIN, result, false)
}

pub async fn fetch_admin_gate(session: &Session) -> AdminGate {
    let admin_exists = fetch_admin_exists(session).await;
    let is_admin = fetch_is_caller_admin(session).await;
    AdminGate::from_flags(admin_exists, is_admin)
}

/// The roster is admin-only, so the error is returned for the panel to show
pub async fn fetch_admin_list(session: &Session) -> ServiceResult<Vec<AdminPrincipal>> {
    let caller = session.caller();
    session
        .cached(
            QueryKey::new(ops::ADMIN_LIST).for_caller(caller.as_deref()),
            || session.service().get_admin_list(),
        )
        .await
}

/// Become the first administrator. Fails once any admin exists.
pub async fn claim_first_admin(session: &Session) -> ServiceResult<()> {
    session.service().claim_first_admin().await?;
    session.invalidate(ROSTER_READS);
    tracing::info!(caller = ?session.caller(), "first admin claimed");
    Ok(())
}

pub async fn add_admin(session: &Session, principal: &str) -> ServiceResult<()> {
    let principal = principal.trim();
    if principal.is_empty() {
        return Err(ServiceError::InvalidInput("empty principal".to_string()));
    }
    session.service().add_admin(principal).await?;
    session.invalidate(ROSTER_READS);
    tracing::info!(principal, "admin added");
    Ok(())
}

pub async fn remove_admin(session: &Session, principal: &str) -> ServiceResult<()> {
    session.service().remove_admin(principal).await?;
    session.invalidate(ROSTER_READS);
    tracing::info!(principal, "admin removed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::MemoryService;
    use chrono::TimeDelta;
    use std::sync::Arc;

    async fn signed_in(service: &Arc<MemoryService>, principal: &str) -> Session {
        service.sign_in_as(principal);
        let session = Session::new(service.clone(), TimeDelta::seconds(30));
        session.restore().await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_claim_flips_cached_flags() {
        let service = Arc::new(MemoryService::new());
        let session = signed_in(&service, "alice").await;

        // Prime the cache with the pre-claim state
        assert!(!fetch_admin_exists(&session).await);
        assert!(!fetch_is_caller_admin(&session).await);
        assert_eq!(fetch_admin_gate(&session).await, AdminGate::NoAdminsConfigured);

        claim_first_admin(&session).await.unwrap();

        assert!(fetch_admin_exists(&session).await);
        assert!(fetch_is_caller_admin(&session).await);
        assert_eq!(fetch_admin_gate(&session).await, AdminGate::CallerAdmin);
        assert_eq!(fetch_admin_list(&session).await.unwrap(), vec!["alice".to_string()]);
    }

    #[tokio::test]
    async fn test_second_claim_fails_without_change() {
        let service = Arc::new(MemoryService::new());
        let alice = signed_in(&service, "alice").await;
        claim_first_admin(&alice).await.unwrap();

        let bob = signed_in(&service, "bob").await;
        let err = claim_first_admin(&bob).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyClaimed(_)));
        assert!(!fetch_is_caller_admin(&bob).await);
        assert_eq!(fetch_admin_gate(&bob).await, AdminGate::CallerNotAdmin);

        let alice = signed_in(&service, "alice").await;
        let err = claim_first_admin(&alice).await.unwrap_err();
        assert!(matches!(err, ServiceError::AlreadyClaimed(_)));
        assert_eq!(fetch_admin_list(&alice).await.unwrap(), vec!["alice".to_string()]);
    }

    #[tokio::test]
    async fn test_anonymous_claim_rejected() {
        let service = Arc::new(MemoryService::new());
        let session = Session::new(service.clone(), TimeDelta::seconds(30));

        let err = claim_first_admin(&session).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
        assert!(!fetch_admin_exists(&session).await);
    }

    #[tokio::test]
    async fn test_sole_admin_cannot_be_removed() {
        let service = Arc::new(MemoryService::new());
        let session = signed_in(&service, "alice").await;
        claim_first_admin(&session).await.unwrap();

        let err = remove_admin(&session, "alice").await.unwrap_err();
        assert!(matches!(err, ServiceError::LastAdmin(_)));
        assert_eq!(fetch_admin_list(&session).await.unwrap(), vec!["alice".to_string()]);
        assert!(fetch_is_caller_admin(&session).await);
    }

    #[tokio::test]
    async fn test_add_and_remove_refresh_roster() {
        let service = Arc::new(MemoryService::new());
        let session = signed_in(&service, "alice").await;
        claim_first_admin(&session).await.unwrap();
        assert_eq!(fetch_admin_list(&session).await.unwrap().len(), 1);

        add_admin(&session, "  bob  ").await.unwrap();
        assert_eq!(
            fetch_admin_list(&session).await.unwrap(),
            vec!["alice".to_string(), "bob".to_string()]
        );

        remove_admin(&session, "bob").await.unwrap();
        assert_eq!(fetch_admin_list(&session).await.unwrap(), vec!["alice".to_string()]);
    }

    #[tokio::test]
    async fn test_non_admin_cannot_list() {
        let service = Arc::new(MemoryService::new());
        let alice = signed_in(&service, "alice").await;
        claim_first_admin(&alice).await.unwrap();

        let bob = signed_in(&service, "bob").await;
        let err = fetch_admin_list(&bob).await.unwrap_err();
        assert!(matches!(err, ServiceError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn test_empty_principal_rejected_locally() {
        let service = Arc::new(MemoryService::new());
        let session = signed_in(&service, "alice").await;
        claim_first_admin(&session).await.unwrap();

        let err = add_admin(&session, "   ").await.unwrap_err();
        assert!(matches!(err, ServiceError::InvalidInput(_)));
    }
}
