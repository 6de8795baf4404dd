//! Frontend Models
//!
//! Data structures matching the remote service's records.

use serde::{Deserialize, Serialize};

/// Identity string of an administrator (or any caller)
pub type AdminPrincipal = String;

/// Editable marketing copy, total form as stored remotely
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteSettings {
    pub nav_cta_text: String,
    pub nav_cta_link: String,
    pub hero_badge: String,
    pub hero_title: String,
    pub hero_subtitle: String,
    pub hero_cta1_text: String,
    pub hero_cta2_text: String,
    pub stats_title: String,
    pub stats_subtitle: String,
    pub features_title: String,
    pub features_subtitle: String,
    pub faq_title: String,
    pub faq_subtitle: String,
    pub footer_tagline: String,
    pub footer_cta: String,
    pub footer_terms: String,
    pub footer_privacy: String,
    pub footer_support: String,
}

/// Partial settings sent by the customization form. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_cta_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nav_cta_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_badge: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_cta1_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hero_cta2_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub faq_subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_tagline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_cta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_terms: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_privacy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer_support: Option<String>,
}

/// Addressable settings field, used to drive the customization form from a table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingsField {
    NavCtaText,
    NavCtaLink,
    HeroBadge,
    HeroTitle,
    HeroSubtitle,
    HeroCta1Text,
    HeroCta2Text,
    StatsTitle,
    StatsSubtitle,
    FeaturesTitle,
    FeaturesSubtitle,
    FaqTitle,
    FaqSubtitle,
    FooterTagline,
    FooterCta,
    FooterTerms,
    FooterPrivacy,
    FooterSupport,
}

impl SettingsField {
    pub const ALL: [SettingsField; 18] = [
        SettingsField::NavCtaText,
        SettingsField::NavCtaLink,
        SettingsField::HeroBadge,
        SettingsField::HeroTitle,
        SettingsField::HeroSubtitle,
        SettingsField::HeroCta1Text,
        SettingsField::HeroCta2Text,
        SettingsField::StatsTitle,
        SettingsField::StatsSubtitle,
        SettingsField::FeaturesTitle,
        SettingsField::FeaturesSubtitle,
        SettingsField::FaqTitle,
        SettingsField::FaqSubtitle,
        SettingsField::FooterTagline,
        SettingsField::FooterCta,
        SettingsField::FooterTerms,
        SettingsField::FooterPrivacy,
        SettingsField::FooterSupport,
    ];

    /// Wire name (camelCase), also used as the form input id
    pub fn key(self) -> &'static str {
        match self {
            SettingsField::NavCtaText => "navCtaText",
            SettingsField::NavCtaLink => "navCtaLink",
            SettingsField::HeroBadge => "heroBadge",
            SettingsField::HeroTitle => "heroTitle",
            SettingsField::HeroSubtitle => "heroSubtitle",
            SettingsField::HeroCta1Text => "heroCta1Text",
            SettingsField::HeroCta2Text => "heroCta2Text",
            SettingsField::StatsTitle => "statsTitle",
            SettingsField::StatsSubtitle => "statsSubtitle",
            SettingsField::FeaturesTitle => "featuresTitle",
            SettingsField::FeaturesSubtitle => "featuresSubtitle",
            SettingsField::FaqTitle => "faqTitle",
            SettingsField::FaqSubtitle => "faqSubtitle",
            SettingsField::FooterTagline => "footerTagline",
            SettingsField::FooterCta => "footerCta",
            SettingsField::FooterTerms => "footerTerms",
            SettingsField::FooterPrivacy => "footerPrivacy",
            SettingsField::FooterSupport => "footerSupport",
        }
    }
}

impl SiteSettings {
    pub fn get(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::NavCtaText => &self.nav_cta_text,
            SettingsField::NavCtaLink => &self.nav_cta_link,
            SettingsField::HeroBadge => &self.hero_badge,
            SettingsField::HeroTitle => &self.hero_title,
            SettingsField::HeroSubtitle => &self.hero_subtitle,
            SettingsField::HeroCta1Text => &self.hero_cta1_text,
            SettingsField::HeroCta2Text => &self.hero_cta2_text,
            SettingsField::StatsTitle => &self.stats_title,
            SettingsField::StatsSubtitle => &self.stats_subtitle,
            SettingsField::FeaturesTitle => &self.features_title,
            SettingsField::FeaturesSubtitle => &self.features_subtitle,
            SettingsField::FaqTitle => &self.faq_title,
            SettingsField::FaqSubtitle => &self.faq_subtitle,
            SettingsField::FooterTagline => &self.footer_tagline,
            SettingsField::FooterCta => &self.footer_cta,
            SettingsField::FooterTerms => &self.footer_terms,
            SettingsField::FooterPrivacy => &self.footer_privacy,
            SettingsField::FooterSupport => &self.footer_support,
        }
    }

    pub fn get_mut(&mut self, field: SettingsField) -> &mut String {
        match field {
            SettingsField::NavCtaText => &mut self.nav_cta_text,
            SettingsField::NavCtaLink => &mut self.nav_cta_link,
            SettingsField::HeroBadge => &mut self.hero_badge,
            SettingsField::HeroTitle => &mut self.hero_title,
            SettingsField::HeroSubtitle => &mut self.hero_subtitle,
            SettingsField::HeroCta1Text => &mut self.hero_cta1_text,
            SettingsField::HeroCta2Text => &mut self.hero_cta2_text,
            SettingsField::StatsTitle => &mut self.stats_title,
            SettingsField::StatsSubtitle => &mut self.stats_subtitle,
            SettingsField::FeaturesTitle => &mut self.features_title,
            SettingsField::FeaturesSubtitle => &mut self.features_subtitle,
            SettingsField::FaqTitle => &mut self.faq_title,
            SettingsField::FaqSubtitle => &mut self.faq_subtitle,
            SettingsField::FooterTagline => &mut self.footer_tagline,
            SettingsField::FooterCta => &mut self.footer_cta,
            SettingsField::FooterTerms => &mut self.footer_terms,
            SettingsField::FooterPrivacy => &mut self.footer_privacy,
            SettingsField::FooterSupport => &mut self.footer_support,
        }
    }

    /// Apply a partial update: present fields overwrite, absent ones stay
    pub fn apply(&mut self, update: &EditableSettings) {
        for field in SettingsField::ALL {
            if let Some(value) = update.get(field) {
                *self.get_mut(field) = value.to_string();
            }
        }
    }
}

impl EditableSettings {
    pub fn get(&self, field: SettingsField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: SettingsField, value: String) {
        *self.slot_mut(field) = Some(value);
    }

    fn slot(&self, field: SettingsField) -> &Option<String> {
        match field {
            SettingsField::NavCtaText => &self.nav_cta_text,
            SettingsField::NavCtaLink => &self.nav_cta_link,
            SettingsField::HeroBadge => &self.hero_badge,
            SettingsField::HeroTitle => &self.hero_title,
            SettingsField::HeroSubtitle => &self.hero_subtitle,
            SettingsField::HeroCta1Text => &self.hero_cta1_text,
            SettingsField::HeroCta2Text => &self.hero_cta2_text,
            SettingsField::StatsTitle => &self.stats_title,
            SettingsField::StatsSubtitle => &self.stats_subtitle,
            SettingsField::FeaturesTitle => &self.features_title,
            SettingsField::FeaturesSubtitle => &self.features_subtitle,
            SettingsField::FaqTitle => &self.faq_title,
            SettingsField::FaqSubtitle => &self.faq_subtitle,
            SettingsField::FooterTagline => &self.footer_tagline,
            SettingsField::FooterCta => &self.footer_cta,
            SettingsField::FooterTerms => &self.footer_terms,
            SettingsField::FooterPrivacy => &self.footer_privacy,
            SettingsField::FooterSupport => &self.footer_support,
        }
    }

    fn slot_mut(&mut self, field: SettingsField) -> &mut Option<String> {
        match field {
            SettingsField::NavCtaText => &mut self.nav_cta_text,
            SettingsField::NavCtaLink => &mut self.nav_cta_link,
            SettingsField::HeroBadge => &mut self.hero_badge,
            SettingsField::HeroTitle => &mut self.hero_title,
            SettingsField::HeroSubtitle => &mut self.hero_subtitle,
            SettingsField::HeroCta1Text => &mut self.hero_cta1_text,
            SettingsField::HeroCta2Text => &mut self.hero_cta2_text,
            SettingsField::StatsTitle => &mut self.stats_title,
            SettingsField::StatsSubtitle => &mut self.stats_subtitle,
            SettingsField::FeaturesTitle => &mut self.features_title,
            SettingsField::FeaturesSubtitle => &mut self.features_subtitle,
            SettingsField::FaqTitle => &mut self.faq_title,
            SettingsField::FaqSubtitle => &mut self.faq_subtitle,
            SettingsField::FooterTagline => &mut self.footer_tagline,
            SettingsField::FooterCta => &mut self.footer_cta,
            SettingsField::FooterTerms => &mut self.footer_terms,
            SettingsField::FooterPrivacy => &mut self.footer_privacy,
            SettingsField::FooterSupport => &mut self.footer_support,
        }
    }
}

impl From<&SiteSettings> for EditableSettings {
    /// Seed the customization form with every stored value
    fn from(settings: &SiteSettings) -> Self {
        let mut editable = EditableSettings::default();
        for field in SettingsField::ALL {
            editable.set(field, settings.get(field).to_string());
        }
        editable
    }
}

/// Pricing plan (matches remote record)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricingPlan {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price_cents: u64,
    pub duration_days: u64,
    pub features: Vec<String>,
}

/// Plan fields without the store-assigned id, as sent on create/update
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDraft {
    pub name: String,
    pub description: String,
    pub price_cents: u64,
    pub duration_days: u64,
    pub features: Vec<String>,
}

impl PlanDraft {
    pub fn into_plan(self, id: u64) -> PricingPlan {
        PricingPlan {
            id,
            name: self.name,
            description: self.description,
            price_cents: self.price_cents,
            duration_days: self.duration_days,
            features: self.features,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    #[default]
    Guest,
}

impl UserRole {
    pub fn label(self) -> &'static str {
        match self {
            UserRole::Admin => "Admin",
            UserRole::User => "User",
            UserRole::Guest => "Guest",
        }
    }
}

/// Stored logo, resolved to a URL the page can load directly
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Logo {
    pub url: String,
}

/// Logo replacement payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoUpload {
    pub bytes: Vec<u8>,
    pub content_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_keys_are_unique() {
        let mut keys: Vec<_> = SettingsField::ALL.iter().map(|f| f.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), SettingsField::ALL.len());
    }

    #[test]
    fn test_apply_partial_update() {
        let mut settings = SiteSettings {
            hero_title: "Old".to_string(),
            hero_badge: "Badge".to_string(),
            ..Default::default()
        };
        let mut update = EditableSettings::default();
        update.set(SettingsField::HeroTitle, "New".to_string());

        settings.apply(&update);

        assert_eq!(settings.hero_title, "New");
        assert_eq!(settings.hero_badge, "Badge");
    }

    #[test]
    fn test_editable_serializes_only_present_fields() {
        let mut update = EditableSettings::default();
        update.set(SettingsField::FooterCta, "Buy".to_string());

        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({ "footerCta": "Buy" }));
    }

    #[test]
    fn test_plan_wire_names() {
        let json = r#"{"id":3,"name":"Iron","description":"d","priceCents":15000,"durationDays":30,"features":["4 GB RAM"]}"#;
        let plan: PricingPlan = serde_json::from_str(json).unwrap();
        assert_eq!(plan.price_cents, 15000);
        assert_eq!(plan.duration_days, 30);
        assert_eq!(plan.features, vec!["4 GB RAM".to_string()]);
    }
}
