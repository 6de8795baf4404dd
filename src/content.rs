//! Static Site Copy
//!
//! Built-in marketing content. Editable fields fall back to these values
//! when the remote settings leave them empty.

use crate::forms::format_price;
use crate::models::PricingPlan;

pub const BRAND: &str = "tripple host";
pub const DEFAULT_LOGO: &str = "/assets/generated/tripple-host-logo.dim_512x256.png";

pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
}

pub const NAV: &[NavItem] = &[
    NavItem { id: "features", label: "Features" },
    NavItem { id: "pricing", label: "Pricing" },
    NavItem { id: "faq", label: "FAQ" },
    NavItem { id: "contact", label: "Contact" },
];

pub const HEADER_CTA: &str = "Get Started";
pub const HEADER_CTA_LINK: &str = "#pricing";

pub mod hero {
    pub const BADGE: &str = "Lightning Fast Hosting";
    pub const TITLE: &str = "Premium Hosting Built for Performance";
    pub const SUBTITLE: &str = "Experience unmatched speed, reliability, and support with tripple host. Deploy your projects instantly on our cutting-edge infrastructure.";
    pub const PRIMARY_CTA: &str = "PLANS";
    pub const SECONDARY_CTA: &str = "Explore Features";
    /// (icon, text)
    pub const HIGHLIGHTS: &[(&str, &str)] = &[
        ("shield", "99.9% Uptime SLA"),
        ("zap", "Instant Setup"),
        ("globe", "Global CDN"),
    ];
}

/// (value, label)
pub const STATS: &[(&str, &str)] = &[
    ("99.9%", "Uptime Guarantee"),
    ("10k+", "Active Servers"),
    ("<50ms", "Average Latency"),
    ("24/7", "Expert Support"),
];

pub struct FeatureItem {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub mod features {
    use super::FeatureItem;

    pub const TITLE: &str = "Everything You Need to Succeed";
    pub const SUBTITLE: &str = "Powerful features designed to give you complete control and peace of mind.";
    pub const ITEMS: &[FeatureItem] = &[
        FeatureItem {
            icon: "server",
            title: "High-Performance Servers",
            description: "Powered by AMD Ryzen and EPYC processors with NVMe SSDs for blazing-fast performance and zero lag.",
        },
        FeatureItem {
            icon: "zap",
            title: "Instant Deployment",
            description: "Go from signup to live in minutes. Our automated setup gets your server running instantly.",
        },
        FeatureItem {
            icon: "shield",
            title: "Advanced DDoS Protection",
            description: "Enterprise-grade security keeps your applications safe from attacks with always-on protection.",
        },
        FeatureItem {
            icon: "globe",
            title: "Global Network",
            description: "Multiple data center locations worldwide ensure low latency and optimal performance for your users.",
        },
        FeatureItem {
            icon: "users",
            title: "Scalable Infrastructure",
            description: "Easily scale your resources up or down as your needs change. Pay only for what you use.",
        },
        FeatureItem {
            icon: "clock",
            title: "24/7 Expert Support",
            description: "Real humans ready to help anytime via live chat and Discord. Fast, knowledgeable assistance when you need it.",
        },
    ];
}

/// A plan as the pricing section renders it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanCard {
    pub name: String,
    pub description: String,
    pub price: String,
    pub period: String,
    pub popular: bool,
    pub features: Vec<String>,
}

pub struct ShowcasePlan {
    pub name: &'static str,
    pub description: &'static str,
    pub price: &'static str,
    pub period: &'static str,
    pub popular: bool,
    pub features: &'static [&'static str],
}

pub mod pricing {
    use super::ShowcasePlan;

    pub const TITLE: &str = "Simple, Transparent Pricing";
    pub const SUBTITLE: &str = "Choose the perfect plan for your needs. All plans include our core features.";
    pub const DISCLAIMER: &str = "All purchases are final and non-refundable. Please choose your plan carefully.";
    pub const PLAN_CTA: &str = "Get Started";
    /// Shown until an admin publishes plans
    pub const SHOWCASE: &[ShowcasePlan] = &[
        ShowcasePlan {
            name: "Starter",
            description: "Perfect for personal projects",
            price: "Rs 80",
            period: "/month",
            popular: false,
            features: &[
                "2 GB RAM",
                "2 CPU Cores",
                "50GB NVMe Storage",
                "2TB Bandwidth",
                "Free SSL Certificate",
                "Daily Backups",
                "Email Support",
            ],
        },
        ShowcasePlan {
            name: "Iron",
            description: "Best for growing businesses",
            price: "Rs 150",
            period: "/month",
            popular: true,
            features: &[
                "4 GB RAM",
                "4 CPU Cores",
                "100GB NVMe Storage",
                "4TB Bandwidth",
                "Free SSL Certificate",
                "Hourly Backups",
                "Priority Support",
                "DDoS Protection",
            ],
        },
    ];
}

/// Published plans, or the showcase plans when none are published
pub fn plan_cards(plans: &[PricingPlan]) -> Vec<PlanCard> {
    if plans.is_empty() {
        return pricing::SHOWCASE
            .iter()
            .map(|plan| PlanCard {
                name: plan.name.to_string(),
                description: plan.description.to_string(),
                price: plan.price.to_string(),
                period: plan.period.to_string(),
                popular: plan.popular,
                features: plan.features.iter().map(|f| f.to_string()).collect(),
            })
            .collect();
    }
    plans
        .iter()
        .map(|plan| PlanCard {
            name: plan.name.clone(),
            description: plan.description.clone(),
            price: format_price(plan.price_cents),
            period: format!("/{} days", plan.duration_days),
            popular: false,
            features: plan.features.clone(),
        })
        .collect()
}

pub struct FaqItem {
    pub question: &'static str,
    pub answer: &'static str,
}

pub mod faq {
    use super::FaqItem;

    pub const TITLE: &str = "Frequently Asked Questions";
    pub const SUBTITLE: &str = "Everything you need to know about tripple host.";
    pub const ITEMS: &[FaqItem] = &[
        FaqItem {
            question: "How quickly can I get started?",
            answer: "Your server is deployed instantly after payment confirmation. You can start building within minutes of signing up.",
        },
        FaqItem {
            question: "What kind of support do you offer?",
            answer: "We provide 24/7 support via live chat and Discord. Our expert team is always ready to help with setup, troubleshooting, and optimization.",
        },
        FaqItem {
            question: "Can I upgrade my plan later?",
            answer: "Absolutely! You can upgrade or downgrade your plan at any time. Changes take effect immediately with prorated billing.",
        },
        FaqItem {
            question: "Do you offer refunds?",
            answer: "All purchases are final and non-refundable. We encourage you to carefully review the plan details and reach out to our support team if you have any questions before purchasing.",
        },
        FaqItem {
            question: "Where are your servers located?",
            answer: "We have data centers in multiple locations worldwide including North America, Europe, and Asia-Pacific to ensure low latency for your users.",
        },
        FaqItem {
            question: "What about backups?",
            answer: "All plans include automated backups. Starter plans get daily backups, and Iron plans get hourly backups for enhanced data protection.",
        },
    ];
}

pub mod final_cta {
    pub const BADGE: &str = "24/7 Support Available";
    pub const TITLE: &str = "Ready to Experience the Difference?";
    pub const SUBTITLE: &str = "Join thousands of developers and businesses who trust tripple host for their hosting needs. Get started today.";
    pub const NO_REFUND_REMINDER: &str = "Please note: All purchases are final and non-refundable.";
    pub const PRIMARY_CTA: &str = "PLANS";
    pub const SECONDARY_CTA: &str = "Purchase Plans";
    pub const SALES_URL: &str = "https://discord.gg/NMcBdXYVFe";
}

pub struct FooterColumn {
    pub title: &'static str,
    /// (section id, label)
    pub links: &'static [(&'static str, &'static str)],
}

pub mod footer {
    use super::FooterColumn;

    pub const TAGLINE: &str = "Premium hosting solutions built for performance and reliability.";
    pub const TERMS: &str = "Terms of Service";
    pub const PRIVACY: &str = "Privacy Policy";
    pub const SUPPORT: &str = "Support";
    /// (label, url)
    pub const SOCIAL: &[(&str, &str)] = &[
        ("Twitter", "https://twitter.com"),
        ("GitHub", "https://github.com"),
        ("LinkedIn", "https://linkedin.com"),
    ];
    pub const COLUMNS: &[FooterColumn] = &[
        FooterColumn {
            title: "Product",
            links: &[("features", "Features"), ("pricing", "Pricing"), ("faq", "FAQ")],
        },
        FooterColumn {
            title: "Company",
            links: &[("contact", "About Us"), ("contact", "Contact"), ("contact", "Careers")],
        },
        FooterColumn {
            title: "Resources",
            links: &[("contact", "Documentation"), ("contact", "API Reference"), ("contact", "Status")],
        },
    ];
}

/// Glyph for an icon name used in the copy tables
pub fn icon_glyph(icon: &str) -> &'static str {
    match icon {
        "shield" => "🛡",
        "zap" => "⚡",
        "globe" => "🌐",
        "server" => "🖥",
        "users" => "👥",
        "clock" => "🕒",
        _ => "•",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_showcase_until_plans_published() {
        let cards = plan_cards(&[]);
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[1].name, "Iron");
        assert!(cards[1].popular);
    }

    #[test]
    fn test_published_plans_replace_showcase() {
        let plan = PricingPlan {
            id: 1,
            name: "Copper".to_string(),
            description: "Entry tier".to_string(),
            price_cents: 4550,
            duration_days: 30,
            features: vec!["1 GB RAM".to_string()],
        };
        let cards = plan_cards(&[plan]);
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].price, "Rs 45.5");
        assert_eq!(cards[0].period, "/30 days");
        assert!(!cards[0].popular);
    }
}
