//! Admin Panel Overlay
//!
//! Tabbed console over the landing page. Only mounted for admins.

use leptos::prelude::*;

use crate::components::{AdminsPanel, LogoPanel, PricingPlansPanel, SiteCustomizationPanel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Pricing,
    Content,
    Logo,
    Admins,
    Activity,
}

impl AdminTab {
    const ALL: [AdminTab; 5] = [
        AdminTab::Pricing,
        AdminTab::Content,
        AdminTab::Logo,
        AdminTab::Admins,
        AdminTab::Activity,
    ];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Pricing => "Pricing Plans",
            AdminTab::Content => "Website Content",
            AdminTab::Logo => "Logo",
            AdminTab::Admins => "Admins",
            AdminTab::Activity => "Activity",
        }
    }
}

#[component]
pub fn AdminPanel(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (active, set_active) = signal(AdminTab::Pricing);

    view! {
        <div class="admin-overlay">
            <div class="container admin-body">
                <div class="admin-head">
                    <div>
                        <h1>"Admin Panel"</h1>
                        <p class="muted">"Manage your website settings and content"</p>
                    </div>
                    <button class="btn btn-ghost" aria-label="Close" on:click=move |_| on_close.run(())>
                        "✕"
                    </button>
                </div>

                <div class="tab-list">
                    {AdminTab::ALL
                        .iter()
                        .map(|&tab| view! {
                            <button
                                class=move || if active.get() == tab { "tab active" } else { "tab" }
                                on:click=move |_| set_active.set(tab)
                            >
                                {tab.label()}
                            </button>
                        })
                        .collect_view()}
                </div>

                {move || match active.get() {
                    AdminTab::Pricing => view! { <PricingPlansPanel /> }.into_any(),
                    AdminTab::Content => view! { <SiteCustomizationPanel /> }.into_any(),
                    AdminTab::Logo => view! { <LogoPanel /> }.into_any(),
                    AdminTab::Admins => view! { <AdminsPanel /> }.into_any(),
                    AdminTab::Activity => view! { <ActivityLog /> }.into_any(),
                }}
            </div>
        </div>
    }
}

/// Recent log lines kept by the in-memory logger
#[component]
fn ActivityLog() -> impl IntoView {
    let (lines, set_lines) = signal(rolling_logger::recent_lines());

    view! {
        <div class="card panel-section">
            <div class="panel-toolbar">
                <h3>"Recent Activity"</h3>
                <button class="btn btn-ghost" on:click=move |_| set_lines.set(rolling_logger::recent_lines())>
                    "Refresh"
                </button>
            </div>
            <Show
                when=move || !lines.read().is_empty()
                fallback=|| view! { <p class="muted">"Nothing logged yet."</p> }
            >
                <pre class="log-lines">
                    {move || lines.get().into_iter().rev().collect::<Vec<_>>().join("\n")}
                </pre>
            </Show>
        </div>
    }
}
