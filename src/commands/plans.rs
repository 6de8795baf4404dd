//! Pricing Plan Commands

use super::or_fallback;
use crate::error::ServiceResult;
use crate::models::{PlanDraft, PricingPlan};
use crate::query::{ops, QueryKey};
use crate::session::Session;

const PLAN_READS: &[&str] = &[ops::PRICING_PLANS, ops::PRICING_PLAN];

pub async fn fetch_pricing_plans(session: &Session) -> Vec<PricingPlan> {
    let result = session
        .cached(QueryKey::new(ops::PRICING_PLANS), || {
            session.service().get_all_pricing_plans()
        })
        .await;
    or_fallback(ops::PRICING_PLANS, result, Vec::new())
}

pub async fn fetch_pricing_plan(session: &Session, id: u64) -> Option<PricingPlan> {
    let result = session
        .cached(QueryKey::new(ops::PRICING_PLAN).with_arg(id), || {
            session.service().get_pricing_plan(id)
        })
        .await;
    or_fallback(ops::PRICING_PLAN, result, None)
}

/// Returns the id the store assigned
pub async fn create_pricing_plan(session: &Session, draft: &PlanDraft) -> ServiceResult<u64> {
    let id = session.service().create_pricing_plan(draft).await?;
    session.invalidate(PLAN_READS);
    tracing::info!(id, name = %draft.name, "pricing plan created");
    Ok(id)
}

pub async fn update_pricing_plan(session: &Session, id: u64, draft: &PlanDraft) -> ServiceResult<()> {
    session.service().update_pricing_plan(id, draft).await?;
    session.invalidate(PLAN_READS);
    tracing::info!(id, "pricing plan updated");
    Ok(())
}

pub async fn delete_pricing_plan(session: &Session, id: u64) -> ServiceResult<()> {
    session.service().delete_pricing_plan(id).await?;
    session.invalidate(PLAN_READS);
    tracing::info!(id, "pricing plan deleted");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::claim_first_admin;
    use crate::service::MemoryService;
    use chrono::TimeDelta;
    use std::sync::Arc;

    fn draft(name: &str, price_cents: u64) -> PlanDraft {
        PlanDraft {
            name: name.to_string(),
            description: "Perfect for personal projects".to_string(),
            price_cents,
            duration_days: 30,
            features: vec!["2 GB RAM".to_string(), "2 CPU Cores".to_string()],
        }
    }

    async fn admin_session() -> Session {
        let service = Arc::new(MemoryService::new());
        service.sign_in_as("admin-1");
        let session = Session::new(service, TimeDelta::seconds(30));
        session.restore().await.unwrap();
        claim_first_admin(&session).await.unwrap();
        session
    }

    #[tokio::test]
    async fn test_crud_refreshes_cached_list() {
        let session = admin_session().await;
        assert!(fetch_pricing_plans(&session).await.is_empty());

        let id = create_pricing_plan(&session, &draft("Starter", 8000)).await.unwrap();
        let plans = fetch_pricing_plans(&session).await;
        assert_eq!(plans.len(), 1);
        assert_eq!(plans[0].id, id);

        update_pricing_plan(&session, id, &draft("Starter", 9000)).await.unwrap();
        assert_eq!(fetch_pricing_plan(&session, id).await.unwrap().price_cents, 9000);
        assert_eq!(fetch_pricing_plans(&session).await[0].price_cents, 9000);

        delete_pricing_plan(&session, id).await.unwrap();
        assert!(fetch_pricing_plans(&session).await.is_empty());
        assert_eq!(fetch_pricing_plan(&session, id).await, None);
    }

    #[tokio::test]
    async fn test_features_keep_order() {
        let session = admin_session().await;
        let mut plan = draft("Iron", 15000);
        plan.features = vec!["c".to_string(), "a".to_string(), "b".to_string()];
        let id = create_pricing_plan(&session, &plan).await.unwrap();

        let stored = fetch_pricing_plan(&session, id).await.unwrap();
        assert_eq!(stored.features, vec!["c", "a", "b"]);
    }

    #[tokio::test]
    async fn test_failed_mutation_keeps_cache() {
        let session = admin_session().await;
        create_pricing_plan(&session, &draft("Starter", 8000)).await.unwrap();
        assert_eq!(fetch_pricing_plans(&session).await.len(), 1);

        assert!(delete_pricing_plan(&session, 999).await.is_err());
        assert_eq!(fetch_pricing_plans(&session).await.len(), 1);
    }
}
