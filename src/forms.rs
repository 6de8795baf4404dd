//! Form Validation
//!
//! Raw text state of the admin and profile forms, checked before anything
//! is sent to the remote service.

use crate::models::{PlanDraft, PricingPlan, UserProfile};

pub const MAX_LOGO_BYTES: usize = 5 * 1024 * 1024;

/// Pricing plan form as typed; numbers stay text until submit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanForm {
    pub name: String,
    pub description: String,
    pub price_cents: String,
    pub duration_days: String,
    /// One feature per line
    pub features: String,
}

impl Default for PlanForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            price_cents: String::new(),
            duration_days: "30".to_string(),
            features: String::new(),
        }
    }
}

impl PlanForm {
    pub fn from_plan(plan: &PricingPlan) -> Self {
        Self {
            name: plan.name.clone(),
            description: plan.description.clone(),
            price_cents: plan.price_cents.to_string(),
            duration_days: plan.duration_days.to_string(),
            features: plan.features.join("\n"),
        }
    }

    pub fn validate(&self) -> Result<PlanDraft, String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Plan name is required".to_string());
        }
        let price_cents = self
            .price_cents
            .trim()
            .parse::<u64>()
            .map_err(|_| "Valid price is required".to_string())?;
        let duration_days = self
            .duration_days
            .trim()
            .parse::<u64>()
            .map_err(|_| "Valid duration is required".to_string())?;

        let features: Vec<String> = self
            .features
            .lines()
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        if features.is_empty() {
            return Err("At least one feature is required".to_string());
        }

        Ok(PlanDraft {
            name: name.to_string(),
            description: self.description.trim().to_string(),
            price_cents,
            duration_days,
            features,
        })
    }

    /// Live hint under the price input
    pub fn price_hint(&self) -> String {
        match self.price_cents.trim().parse::<u64>() {
            Ok(cents) => format_price(cents),
            Err(_) => "Enter price in cents".to_string(),
        }
    }
}

/// `8000` -> `Rs 80`, `8050` -> `Rs 80.5`
pub fn format_price(cents: u64) -> String {
    let whole = cents / 100;
    match cents % 100 {
        0 => format!("Rs {}", whole),
        frac if frac % 10 == 0 => format!("Rs {}.{}", whole, frac / 10),
        frac => format!("Rs {}.{:02}", whole, frac),
    }
}

pub fn validate_profile_name(name: &str) -> Result<UserProfile, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Please enter your name".to_string());
    }
    Ok(UserProfile { name: name.to_string() })
}

pub fn validate_logo(content_type: &str, size: usize, max_bytes: usize) -> Result<(), String> {
    if !content_type.starts_with("image/") {
        return Err("Please select a valid image file (PNG, JPG, etc.)".to_string());
    }
    if size > max_bytes {
        return Err(format!(
            "Image file size must be less than {}MB",
            max_bytes / (1024 * 1024)
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PlanForm {
        PlanForm {
            name: " Starter ".to_string(),
            description: "Perfect for personal projects ".to_string(),
            price_cents: "8000".to_string(),
            duration_days: "30".to_string(),
            features: "2 GB RAM\n\n  2 CPU Cores  \n".to_string(),
        }
    }

    #[test]
    fn test_valid_form_builds_draft() {
        let draft = filled().validate().unwrap();
        assert_eq!(draft.name, "Starter");
        assert_eq!(draft.description, "Perfect for personal projects");
        assert_eq!(draft.price_cents, 8000);
        assert_eq!(draft.features, vec!["2 GB RAM", "2 CPU Cores"]);
    }

    #[test]
    fn test_validation_messages() {
        let mut form = filled();
        form.name = "   ".to_string();
        assert_eq!(form.validate().unwrap_err(), "Plan name is required");

        let mut form = filled();
        form.price_cents = "80.5".to_string();
        assert_eq!(form.validate().unwrap_err(), "Valid price is required");

        let mut form = filled();
        form.price_cents = "-1".to_string();
        assert_eq!(form.validate().unwrap_err(), "Valid price is required");

        let mut form = filled();
        form.duration_days = String::new();
        assert_eq!(form.validate().unwrap_err(), "Valid duration is required");

        let mut form = filled();
        form.features = " \n \n".to_string();
        assert_eq!(form.validate().unwrap_err(), "At least one feature is required");
    }

    #[test]
    fn test_default_duration() {
        assert_eq!(PlanForm::default().duration_days, "30");
    }

    #[test]
    fn test_edit_form_prefilled() {
        let plan = PricingPlan {
            id: 4,
            name: "Iron".to_string(),
            description: "d".to_string(),
            price_cents: 15000,
            duration_days: 90,
            features: vec!["a".to_string(), "b".to_string()],
        };
        let form = PlanForm::from_plan(&plan);
        assert_eq!(form.features, "a\nb");
        assert_eq!(form.price_hint(), "Rs 150");
        assert_eq!(form.validate().unwrap().into_plan(4), plan);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(8000), "Rs 80");
        assert_eq!(format_price(8050), "Rs 80.5");
        assert_eq!(format_price(8005), "Rs 80.05");
        assert_eq!(format_price(99), "Rs 0.99");
        assert_eq!(format_price(0), "Rs 0");
    }

    #[test]
    fn test_profile_and_logo_checks() {
        assert_eq!(validate_profile_name("  ").unwrap_err(), "Please enter your name");
        assert_eq!(validate_profile_name(" Mia ").unwrap().name, "Mia");

        assert!(validate_logo("image/png", 1024, MAX_LOGO_BYTES).is_ok());
        assert_eq!(
            validate_logo("text/plain", 10, MAX_LOGO_BYTES).unwrap_err(),
            "Please select a valid image file (PNG, JPG, etc.)"
        );
        assert_eq!(
            validate_logo("image/png", MAX_LOGO_BYTES + 1, MAX_LOGO_BYTES).unwrap_err(),
            "Image file size must be less than 5MB"
        );
    }
}
