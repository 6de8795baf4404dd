//! Logo Commands

use super::or_fallback;
use crate::error::ServiceResult;
use crate::models::{Logo, LogoUpload};
use crate::query::{ops, QueryKey};
use crate::session::Session;

pub async fn fetch_logo(session: &Session) -> Option<Logo> {
    let result = session
        .cached(QueryKey::new(ops::LOGO), || session.service().get_logo())
        .await;
    or_fallback(ops::LOGO, result, None)
}

pub async fn update_logo(session: &Session, upload: &LogoUpload) -> ServiceResult<()> {
    session.service().update_logo(upload).await?;
    session.invalidate(&[ops::LOGO]);
    tracing::info!(bytes = upload.bytes.len(), content_type = %upload.content_type, "logo replaced");
    Ok(())
}
