//! Site Footer Component

use chrono::Datelike;
use leptos::prelude::*;

use crate::content::{self, footer};
use crate::context::use_app_context;
use crate::dom;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let fallback_logo = StoredValue::new(ctx.config().logo_fallback_url);
    let year = chrono::Utc::now().year();
    let settings = move || store.settings().get();

    view! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-brand">
                    <img
                        class="footer-logo"
                        src=move || store.logo_url().get().unwrap_or_else(|| fallback_logo.get_value())
                        alt=content::BRAND
                    />
                    <p>{move || settings().footer_tagline}</p>
                </div>
                {footer::COLUMNS
                    .iter()
                    .map(|column| view! {
                        <div class="footer-column">
                            <h3>{column.title}</h3>
                            <ul>
                                {column
                                    .links
                                    .iter()
                                    .map(|(id, label)| {
                                        let id = *id;
                                        view! {
                                            <li>
                                                <button class="footer-link" on:click=move |_| dom::scroll_to_section(id)>
                                                    {*label}
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()}
            </div>

            <div class="container footer-bottom">
                <span>{format!("© {} {}. All rights reserved.", year, content::BRAND)}</span>
                <span class="footer-legal">
                    <button class="footer-link" on:click=|_| dom::scroll_to_section("contact")>
                        {move || settings().footer_terms}
                    </button>
                    <button class="footer-link" on:click=|_| dom::scroll_to_section("contact")>
                        {move || settings().footer_privacy}
                    </button>
                    <button class="footer-link" on:click=|_| dom::scroll_to_section("contact")>
                        {move || settings().footer_support}
                    </button>
                </span>
                <span class="footer-social">
                    {footer::SOCIAL
                        .iter()
                        .map(|(label, url)| view! {
                            <a href=*url target="_blank" rel="noopener noreferrer" aria-label=*label>
                                {*label}
                            </a>
                        })
                        .collect_view()}
                </span>
            </div>
        </footer>
    }
}
