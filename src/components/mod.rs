//! UI Components
//!
//! Landing page sections, admin panel tabs and dialogs.

mod admin_access_denied;
mod admin_panel;
mod admin_setup_dialog;
mod admins_panel;
mod alert;
mod delete_confirm_button;
mod footer;
mod header;
mod hero;
mod logo_panel;
mod pricing_plans_panel;
mod profile_dialog;
mod sections;
mod site_customization_panel;

pub use admin_access_denied::AdminAccessDenied;
pub use admin_panel::AdminPanel;
pub use admin_setup_dialog::AdminSetupDialog;
pub use admins_panel::AdminsPanel;
pub use alert::{dismiss_after, AlertKind, StatusAlert};
pub use delete_confirm_button::DeleteConfirmButton;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use logo_panel::LogoPanel;
pub use pricing_plans_panel::PricingPlansPanel;
pub use profile_dialog::ProfileDialog;
pub use sections::{Faq, Features, FinalCta, Pricing, Stats};
pub use site_customization_panel::SiteCustomizationPanel;
