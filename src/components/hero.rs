//! Hero Section Component

use leptos::prelude::*;

use crate::content::{self, hero};
use crate::dom;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Hero() -> impl IntoView {
    let store = use_app_store();
    let settings = move || store.settings().get();

    view! {
        <section class="hero">
            <div class="hero-backdrop"></div>
            <div class="container hero-body">
                <div class="badge">
                    <span class="badge-icon">{content::icon_glyph("zap")}</span>
                    <span>{move || settings().hero_badge}</span>
                </div>
                <h1 class="hero-title">{move || settings().hero_title}</h1>
                <p class="hero-subtitle">{move || settings().hero_subtitle}</p>

                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg" on:click=|_| dom::scroll_to_section("pricing")>
                        {move || settings().hero_cta1_text} " →"
                    </button>
                    <button class="btn btn-outline btn-lg" on:click=|_| dom::scroll_to_section("features")>
                        {move || settings().hero_cta2_text}
                    </button>
                </div>

                <ul class="hero-highlights">
                    {hero::HIGHLIGHTS
                        .iter()
                        .map(|(icon, text)| {
                            view! {
                                <li>
                                    <span class="highlight-icon">{content::icon_glyph(icon)}</span>
                                    <span>{*text}</span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </section>
    }
}
