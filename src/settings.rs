//! Site Settings Merge
//!
//! Combines the remote settings with the built-in copy, field by field.

use crate::content;
use crate::models::{SettingsField, SiteSettings};

/// Built-in value for every editable field.
///
/// The stats header has no built-in text; an empty title hides it.
pub fn default_settings() -> SiteSettings {
    SiteSettings {
        nav_cta_text: content::HEADER_CTA.to_string(),
        nav_cta_link: content::HEADER_CTA_LINK.to_string(),
        hero_badge: content::hero::BADGE.to_string(),
        hero_title: content::hero::TITLE.to_string(),
        hero_subtitle: content::hero::SUBTITLE.to_string(),
        hero_cta1_text: content::hero::PRIMARY_CTA.to_string(),
        hero_cta2_text: content::hero::SECONDARY_CTA.to_string(),
        stats_title: String::new(),
        stats_subtitle: String::new(),
        features_title: content::features::TITLE.to_string(),
        features_subtitle: content::features::SUBTITLE.to_string(),
        faq_title: content::faq::TITLE.to_string(),
        faq_subtitle: content::faq::SUBTITLE.to_string(),
        footer_tagline: content::footer::TAGLINE.to_string(),
        footer_cta: content::final_cta::PRIMARY_CTA.to_string(),
        footer_terms: content::footer::TERMS.to_string(),
        footer_privacy: content::footer::PRIVACY.to_string(),
        footer_support: content::footer::SUPPORT.to_string(),
    }
}

/// Each field takes the remote value when non-empty, else the default.
/// No remote settings at all yields the defaults unchanged.
pub fn merge_with_defaults(remote: Option<&SiteSettings>, defaults: &SiteSettings) -> SiteSettings {
    let Some(remote) = remote else {
        return defaults.clone();
    };

    let mut merged = defaults.clone();
    for field in SettingsField::ALL {
        let value = remote.get(field);
        if !value.is_empty() {
            *merged.get_mut(field) = value.to_string();
        }
    }
    merged
}

pub fn merge_site_settings(remote: Option<&SiteSettings>) -> SiteSettings {
    merge_with_defaults(remote, &default_settings())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_settings_yield_defaults() {
        assert_eq!(merge_site_settings(None), default_settings());
    }

    #[test]
    fn test_empty_fields_fall_back() {
        let remote = SiteSettings::default();
        let merged = merge_site_settings(Some(&remote));

        for field in SettingsField::ALL {
            assert_eq!(merged.get(field), default_settings().get(field), "{}", field.key());
        }
    }

    #[test]
    fn test_non_empty_fields_kept_verbatim() {
        let mut remote = SiteSettings::default();
        for field in SettingsField::ALL {
            *remote.get_mut(field) = format!("  custom {}  ", field.key());
        }

        let merged = merge_site_settings(Some(&remote));
        assert_eq!(merged, remote);
    }

    #[test]
    fn test_mixed_fields() {
        let remote = SiteSettings {
            hero_title: String::new(),
            hero_badge: "X".to_string(),
            ..Default::default()
        };
        let defaults = SiteSettings {
            hero_title: "Default Title".to_string(),
            hero_badge: "Default Badge".to_string(),
            ..Default::default()
        };

        let merged = merge_with_defaults(Some(&remote), &defaults);

        assert_eq!(merged.hero_title, "Default Title");
        assert_eq!(merged.hero_badge, "X");
    }

    #[test]
    fn test_stats_header_defaults_empty() {
        let merged = merge_site_settings(None);
        assert!(merged.stats_title.is_empty());
        assert_eq!(merged.nav_cta_link, "#pricing");
        assert_eq!(merged.footer_cta, "PLANS");
    }
}
