//! Landing Page Sections
//!
//! Stats, features, pricing, FAQ and the closing call to action.

use leptos::prelude::*;

use crate::content::{self, faq, features, final_cta, pricing, plan_cards, PlanCard};
use crate::dom;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Stats() -> impl IntoView {
    let store = use_app_store();
    let title = move || store.settings().get().stats_title;
    let subtitle = move || store.settings().get().stats_subtitle;

    view! {
        <section class="stats">
            <div class="container">
                // The header only renders once an admin sets a title
                <Show when=move || !title().is_empty()>
                    <div class="section-header">
                        <h2>{title}</h2>
                        <p>{subtitle}</p>
                    </div>
                </Show>
                <div class="stats-grid">
                    {content::STATS
                        .iter()
                        .map(|(value, label)| view! {
                            <div class="stat">
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label">{*label}</div>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    let store = use_app_store();

    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <h2>{move || store.settings().get().features_title}</h2>
                    <p>{move || store.settings().get().features_subtitle}</p>
                </div>
                <div class="feature-grid">
                    {features::ITEMS
                        .iter()
                        .map(|item| view! {
                            <div class="card feature-card">
                                <div class="feature-icon">{content::icon_glyph(item.icon)}</div>
                                <h3>{item.title}</h3>
                                <p>{item.description}</p>
                            </div>
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn Pricing() -> impl IntoView {
    let store = use_app_store();
    let cards = move || {
        plan_cards(&store.plans().read())
            .into_iter()
            .enumerate()
            .collect::<Vec<_>>()
    };

    view! {
        <section id="pricing" class="pricing">
            <div class="container">
                <div class="section-header">
                    <h2>{pricing::TITLE}</h2>
                    <p>{pricing::SUBTITLE}</p>
                </div>
                <Show
                    when=move || store.plans_loaded().get()
                    fallback=|| view! {
                        <div class="plan-grid">
                            <div class="card plan-card skeleton"></div>
                            <div class="card plan-card skeleton"></div>
                        </div>
                    }
                >
                    <div class="plan-grid">
                        <For
                            each=cards
                            key=|(index, card)| (*index, card.name.clone(), card.price.clone())
                            children=move |(_, card)| view! { <PlanCardView card=card /> }
                        />
                    </div>
                </Show>
                <p class="pricing-disclaimer">{pricing::DISCLAIMER}</p>
            </div>
        </section>
    }
}

#[component]
fn PlanCardView(card: PlanCard) -> impl IntoView {
    let class = if card.popular { "card plan-card popular" } else { "card plan-card" };
    let button_class = if card.popular { "btn btn-primary btn-lg" } else { "btn btn-outline btn-lg" };

    view! {
        <div class=class>
            {card.popular.then(|| view! { <div class="popular-tag">"Most Popular"</div> })}
            <h3 class="plan-name">{card.name}</h3>
            <p class="plan-description">{card.description}</p>
            <div class="plan-price">
                <span class="price">{card.price}</span>
                <span class="period">{card.period}</span>
            </div>
            <ul class="plan-features">
                {card
                    .features
                    .into_iter()
                    .map(|feature| view! { <li>"✓ " {feature}</li> })
                    .collect_view()}
            </ul>
            <button class=button_class on:click=|_| dom::scroll_to_section("contact")>
                {pricing::PLAN_CTA}
            </button>
        </div>
    }
}

#[component]
pub fn Faq() -> impl IntoView {
    let store = use_app_store();
    let (open_index, set_open_index) = signal::<Option<usize>>(None);

    view! {
        <section id="faq" class="faq">
            <div class="container narrow">
                <div class="section-header">
                    <h2>{move || store.settings().get().faq_title}</h2>
                    <p>{move || store.settings().get().faq_subtitle}</p>
                </div>
                <div class="accordion">
                    {faq::ITEMS
                        .iter()
                        .enumerate()
                        .map(|(index, item)| {
                            let is_open = move || open_index.get() == Some(index);
                            view! {
                                <div class="accordion-item">
                                    <button
                                        class="accordion-trigger"
                                        on:click=move |_| {
                                            set_open_index.update(|open| {
                                                *open = if *open == Some(index) { None } else { Some(index) };
                                            })
                                        }
                                    >
                                        {item.question}
                                        <span class="chevron">{move || if is_open() { "−" } else { "+" }}</span>
                                    </button>
                                    <Show when=is_open>
                                        <div class="accordion-content">{item.answer}</div>
                                    </Show>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn FinalCta() -> impl IntoView {
    let store = use_app_store();

    let talk_to_sales = |_: leptos::ev::MouseEvent| {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.open_with_url_and_target_and_features(
                final_cta::SALES_URL,
                "_blank",
                "noopener,noreferrer",
            ) {
                tracing::warn!(error = ?e, "could not open sales link");
            }
        }
    };

    view! {
        <section id="contact" class="final-cta">
            <div class="container narrow">
                <div class="badge">{final_cta::BADGE}</div>
                <h2>{final_cta::TITLE}</h2>
                <p>{final_cta::SUBTITLE}</p>
                <p class="no-refund">{final_cta::NO_REFUND_REMINDER}</p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" on:click=|_| dom::scroll_to_section("pricing")>
                        {move || store.settings().get().footer_cta}
                    </button>
                    <button class="btn btn-outline btn-lg" on:click=talk_to_sales>
                        {final_cta::SECONDARY_CTA}
                    </button>
                </div>
            </div>
        </section>
    }
}
