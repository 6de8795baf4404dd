//! Website Content Admin Panel
//!
//! Edits the stored site copy. Inputs are generated from a field table;
//! empty fields fall back to the built-in copy on the landing page.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{dismiss_after, AlertKind, StatusAlert};
use crate::context::use_app_context;
use crate::models::{EditableSettings, SettingsField};

struct FieldSpec {
    field: SettingsField,
    label: &'static str,
    placeholder: &'static str,
    multiline: bool,
}

struct SectionSpec {
    title: &'static str,
    description: &'static str,
    fields: &'static [FieldSpec],
}

const fn input(field: SettingsField, label: &'static str, placeholder: &'static str) -> FieldSpec {
    FieldSpec { field, label, placeholder, multiline: false }
}

const SECTIONS: &[SectionSpec] = &[
    SectionSpec {
        title: "Navigation",
        description: "Customize the header navigation button",
        fields: &[
            input(SettingsField::NavCtaText, "CTA Button Text", "e.g., Get Started"),
            input(SettingsField::NavCtaLink, "CTA Button Link", "e.g., #pricing"),
        ],
    },
    SectionSpec {
        title: "Hero Section",
        description: "Customize the main hero section at the top of the page",
        fields: &[
            input(SettingsField::HeroBadge, "Badge Text", "e.g., Lightning Fast Hosting"),
            input(SettingsField::HeroTitle, "Main Title", "e.g., Premium Hosting Built for Performance"),
            FieldSpec {
                field: SettingsField::HeroSubtitle,
                label: "Subtitle",
                placeholder: "e.g., Experience unmatched speed, reliability, and support...",
                multiline: true,
            },
            input(SettingsField::HeroCta1Text, "Primary CTA Text", "e.g., Get Started"),
            input(SettingsField::HeroCta2Text, "Secondary CTA Text", "e.g., Explore Features"),
        ],
    },
    SectionSpec {
        title: "Stats Section",
        description: "Optional titles for the statistics section",
        fields: &[
            input(SettingsField::StatsTitle, "Stats Title (optional)", "Leave empty for no title"),
            input(SettingsField::StatsSubtitle, "Stats Subtitle (optional)", "Leave empty for no subtitle"),
        ],
    },
    SectionSpec {
        title: "Features Section",
        description: "Customize the features section headings",
        fields: &[
            input(SettingsField::FeaturesTitle, "Features Title", "e.g., Everything You Need to Succeed"),
            input(
                SettingsField::FeaturesSubtitle,
                "Features Subtitle",
                "e.g., Powerful features designed to give you complete control",
            ),
        ],
    },
    SectionSpec {
        title: "FAQ Section",
        description: "Customize the FAQ section headings",
        fields: &[
            input(SettingsField::FaqTitle, "FAQ Title", "e.g., Frequently Asked Questions"),
            input(SettingsField::FaqSubtitle, "FAQ Subtitle", "e.g., Everything you need to know"),
        ],
    },
    SectionSpec {
        title: "Footer",
        description: "Customize footer content and links",
        fields: &[
            input(
                SettingsField::FooterTagline,
                "Footer Tagline",
                "e.g., Premium hosting solutions built for performance",
            ),
            input(SettingsField::FooterCta, "Footer CTA Text", "e.g., Get Started"),
            input(SettingsField::FooterTerms, "Terms Link Text", "e.g., Terms of Service"),
            input(SettingsField::FooterPrivacy, "Privacy Link Text", "e.g., Privacy Policy"),
            input(SettingsField::FooterSupport, "Support Link Text", "e.g., Support"),
        ],
    },
];

#[component]
pub fn SiteCustomizationPanel() -> impl IntoView {
    let ctx = use_app_context();

    let form = RwSignal::new(EditableSettings::default());
    let (loaded, set_loaded) = signal(false);
    let (saving, set_saving) = signal(false);
    let success = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    // Seed the form from the stored copy, not the merged display copy
    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let session = ctx.session();
        spawn_local(async move {
            if let Some(stored) = commands::fetch_site_settings(&session).await {
                form.set(EditableSettings::from(&stored));
            }
            set_loaded.set(true);
        });
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        success.set(None);
        error.set(None);
        let update = form.get_untracked();
        let session = ctx.session();
        set_saving.set(true);
        spawn_local(async move {
            match commands::update_site_settings(&session, &update).await {
                Ok(_) => {
                    success.set(Some("Website content updated successfully!".to_string()));
                    dismiss_after(success, 5000);
                    ctx.reload();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            set_saving.set(false);
        });
    };

    let field_input = move |spec: &'static FieldSpec| {
        let field = spec.field;
        let value = move || form.with(|f| f.get(field).unwrap_or_default().to_string());
        let on_input = move |ev: leptos::ev::Event| form.update(|f| f.set(field, event_target_value(&ev)));
        let control = if spec.multiline {
            view! {
                <textarea id=field.key() rows="3" placeholder=spec.placeholder prop:value=value on:input=on_input></textarea>
            }
            .into_any()
        } else {
            view! {
                <input id=field.key() type="text" placeholder=spec.placeholder prop:value=value on:input=on_input />
            }
            .into_any()
        };
        view! {
            <div class="form-field">
                <label for=field.key()>{spec.label}</label>
                {control}
            </div>
        }
    };

    view! {
        <Show when=move || loaded.get() fallback=|| view! { <div class="spinner">"Loading..."</div> }>
            <form class="form panel-section" on:submit=submit>
                <StatusAlert kind=AlertKind::Success message=success />
                <StatusAlert kind=AlertKind::Error message=error />

                {SECTIONS
                    .iter()
                    .map(|section| view! {
                        <div class="card">
                            <h3>{section.title}</h3>
                            <p class="muted">{section.description}</p>
                            {section.fields.iter().map(field_input).collect_view()}
                        </div>
                    })
                    .collect_view()}

                <div class="panel-toolbar">
                    <button type="submit" class="btn btn-primary btn-lg" disabled=move || saving.get()>
                        {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                    </button>
                </div>
            </form>
        </Show>
    }
}
