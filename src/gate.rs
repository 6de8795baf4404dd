//! Admin Gate
//!
//! Decides from remote state what the caller may see: the admin panel,
//! the first-admin claim, or an access-denied hint.

/// Bootstrap state of the admin roster relative to the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminGate {
    NoAdminsConfigured,
    CallerNotAdmin,
    CallerAdmin,
}

impl AdminGate {
    pub fn from_flags(admin_exists: bool, caller_is_admin: bool) -> Self {
        match (admin_exists, caller_is_admin) {
            (false, _) => AdminGate::NoAdminsConfigured,
            (true, false) => AdminGate::CallerNotAdmin,
            (true, true) => AdminGate::CallerAdmin,
        }
    }

    /// Claiming is only offered before any admin exists
    pub fn can_claim(self, authenticated: bool) -> bool {
        authenticated && self == AdminGate::NoAdminsConfigured
    }

    pub fn access(self, authenticated: bool) -> PanelAccess {
        if !authenticated {
            return PanelAccess::Denied { admins_exist: self != AdminGate::NoAdminsConfigured };
        }
        match self {
            AdminGate::CallerAdmin => PanelAccess::Granted,
            AdminGate::CallerNotAdmin => PanelAccess::Denied { admins_exist: true },
            AdminGate::NoAdminsConfigured => PanelAccess::Denied { admins_exist: false },
        }
    }
}

/// Claim offer while the gate may still be loading; `None` offers nothing
pub fn claim_offered(gate: Option<AdminGate>, authenticated: bool) -> bool {
    gate.is_some_and(|gate| gate.can_claim(authenticated))
}

/// Panel access while the gate may still be loading
pub fn panel_access(gate: Option<AdminGate>, authenticated: bool) -> PanelAccess {
    match gate {
        Some(gate) => gate.access(authenticated),
        None => PanelAccess::Checking,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAccess {
    /// Roster state not known yet
    Checking,
    Granted,
    /// The hint differs: contact an admin vs. claim admin access
    Denied { admins_exist: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flags() {
        assert_eq!(AdminGate::from_flags(false, false), AdminGate::NoAdminsConfigured);
        assert_eq!(AdminGate::from_flags(true, false), AdminGate::CallerNotAdmin);
        assert_eq!(AdminGate::from_flags(true, true), AdminGate::CallerAdmin);
    }

    #[test]
    fn test_claim_only_before_bootstrap() {
        assert!(AdminGate::NoAdminsConfigured.can_claim(true));
        assert!(!AdminGate::NoAdminsConfigured.can_claim(false));
        assert!(!AdminGate::CallerNotAdmin.can_claim(true));
        assert!(!AdminGate::CallerAdmin.can_claim(true));
    }

    #[test]
    fn test_panel_access() {
        assert_eq!(AdminGate::CallerAdmin.access(true), PanelAccess::Granted);
        assert_eq!(
            AdminGate::CallerAdmin.access(false),
            PanelAccess::Denied { admins_exist: true }
        );
        assert_eq!(
            AdminGate::NoAdminsConfigured.access(true),
            PanelAccess::Denied { admins_exist: false }
        );
    }

    #[test]
    fn test_unresolved_gate_offers_nothing() {
        assert!(!claim_offered(None, true));
        assert!(!claim_offered(None, false));
        assert_eq!(panel_access(None, true), PanelAccess::Checking);

        assert!(claim_offered(Some(AdminGate::NoAdminsConfigured), true));
        assert!(!claim_offered(Some(AdminGate::CallerNotAdmin), true));
        assert_eq!(
            panel_access(Some(AdminGate::CallerAdmin), true),
            PanelAccess::Granted
        );
    }
}
