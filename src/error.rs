//! Service Errors
//!
//! Remote failures arrive as plain messages; they are sorted into
//! categories by content so the UI can show a fixed explanation.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("admin already claimed: {0}")]
    AlreadyClaimed(String),
    #[error("last admin: {0}")]
    LastAdmin(String),
    #[error("self removal: {0}")]
    SelfRemoval(String),
    #[error("{0}")]
    Rejected(String),
    /// Bridge missing, serialization failures and the like
    #[error("transport: {0}")]
    Transport(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    /// Sort a remote error message into a category
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        let lower = message.to_lowercase();

        if lower.contains("already claimed")
            || lower.contains("already been claimed")
            || (lower.contains("admin") && lower.contains("already exist"))
        {
            ServiceError::AlreadyClaimed(message)
        } else if lower.contains("last admin") || lower.contains("last remaining admin") {
            ServiceError::LastAdmin(message)
        } else if lower.contains("yourself") || lower.contains("remove self") || lower.contains("self-removal") {
            ServiceError::SelfRemoval(message)
        } else if lower.contains("unauthorized")
            || lower.contains("not authenticated")
            || lower.contains("anonymous")
        {
            ServiceError::Unauthorized(message)
        } else if lower.contains("invalid") {
            ServiceError::InvalidInput(message)
        } else {
            ServiceError::Rejected(message)
        }
    }

    /// Text shown to the user at the UI boundary
    pub fn user_message(&self) -> String {
        match self {
            ServiceError::Unauthorized(_) => {
                "You must be signed in with sufficient permissions to do that.".to_string()
            }
            ServiceError::InvalidInput(_) => {
                "The submitted data is invalid. Please check the form and try again.".to_string()
            }
            ServiceError::AlreadyClaimed(_) => "Admin access has already been claimed.".to_string(),
            ServiceError::LastAdmin(_) => {
                "You cannot remove the last remaining administrator.".to_string()
            }
            ServiceError::SelfRemoval(_) => {
                "You cannot remove yourself as an administrator.".to_string()
            }
            ServiceError::Rejected(message) | ServiceError::Transport(message) => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_categories() {
        assert!(matches!(
            ServiceError::classify("Unauthorized: Only admins can add admins"),
            ServiceError::Unauthorized(_)
        ));
        assert!(matches!(
            ServiceError::classify("Caller is not authenticated"),
            ServiceError::Unauthorized(_)
        ));
        assert!(matches!(
            ServiceError::classify("Invalid principal text"),
            ServiceError::InvalidInput(_)
        ));
        assert!(matches!(
            ServiceError::classify("Admin has already been claimed"),
            ServiceError::AlreadyClaimed(_)
        ));
        assert!(matches!(
            ServiceError::classify("An admin already exists"),
            ServiceError::AlreadyClaimed(_)
        ));
        assert!(matches!(
            ServiceError::classify("Cannot remove the last admin"),
            ServiceError::LastAdmin(_)
        ));
        assert!(matches!(
            ServiceError::classify("You cannot remove yourself"),
            ServiceError::SelfRemoval(_)
        ));
        assert!(matches!(
            ServiceError::classify("canister trapped"),
            ServiceError::Rejected(_)
        ));
    }

    #[test]
    fn test_self_removal_needs_removal_wording() {
        assert!(matches!(
            ServiceError::classify("Admin cannot remove self"),
            ServiceError::SelfRemoval(_)
        ));
        assert!(matches!(
            ServiceError::classify("self-removal is not allowed"),
            ServiceError::SelfRemoval(_)
        ));
        // Bare "self" is not enough
        assert!(matches!(
            ServiceError::classify("selfcheck failed"),
            ServiceError::Rejected(_)
        ));
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ServiceError::classify("Cannot remove the last admin").user_message(),
            "You cannot remove the last remaining administrator."
        );
        assert_eq!(
            ServiceError::classify("canister trapped").user_message(),
            "canister trapped"
        );
        assert_eq!(
            ServiceError::Transport("bridge not installed".to_string()).user_message(),
            "bridge not installed"
        );
    }
}
