//! Site Settings Commands

use super::or_fallback;
use crate::error::ServiceResult;
use crate::models::{EditableSettings, SiteSettings};
use crate::query::{ops, QueryKey};
use crate::session::Session;
use crate::settings::merge_site_settings;

/// Stored settings, or `None` when they could not be loaded
pub async fn fetch_site_settings(session: &Session) -> Option<SiteSettings> {
    let result = session
        .cached(QueryKey::new(ops::SITE_SETTINGS), || {
            session.service().get_site_settings()
        })
        .await;
    or_fallback(ops::SITE_SETTINGS, result.map(Some), None)
}

/// Settings as the landing page shows them: stored values over built-in copy
pub async fn fetch_display_settings(session: &Session) -> SiteSettings {
    merge_site_settings(fetch_site_settings(session).await.as_ref())
}

pub async fn update_site_settings(
    session: &Session,
    update: &EditableSettings,
) -> ServiceResult<SiteSettings> {
    let stored = session.service().update_site_settings(update).await?;
    session.invalidate(&[ops::SITE_SETTINGS]);
    tracing::info!("site settings updated");
    Ok(stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SettingsField;
    use crate::service::MemoryService;
    use crate::settings::default_settings;
    use chrono::TimeDelta;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_update_visible_on_next_read() {
        let service = Arc::new(MemoryService::new());
        service.sign_in_as("admin-1");
        let session = Session::new(service.clone(), TimeDelta::seconds(30));
        crate::commands::claim_first_admin(&session).await.unwrap();

        assert_eq!(fetch_display_settings(&session).await, default_settings());

        let mut update = EditableSettings::default();
        update.set(SettingsField::HeroBadge, "X".to_string());
        update.set(SettingsField::HeroTitle, String::new());
        update_site_settings(&session, &update).await.unwrap();

        let shown = fetch_display_settings(&session).await;
        assert_eq!(shown.hero_badge, "X");
        assert_eq!(shown.hero_title, default_settings().hero_title);
    }

    #[tokio::test]
    async fn test_update_needs_admin() {
        let session = Session::new(Arc::new(MemoryService::new()), TimeDelta::seconds(30));
        let err = update_site_settings(&session, &EditableSettings::default())
            .await
            .unwrap_err();
        assert!(matches!(err, crate::error::ServiceError::Unauthorized(_)));
    }
}
