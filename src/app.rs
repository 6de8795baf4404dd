//! Tripple Host Frontend App
//!
//! Landing page plus the admin overlay. Loaders re-run whenever the
//! reload trigger is bumped; the session cache decides what is refetched.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{
    AdminAccessDenied, AdminPanel, AdminSetupDialog, Faq, Features, FinalCta, Footer, Header, Hero,
    Pricing, Stats,
};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::gate::{panel_access, PanelAccess};
use crate::session::Session;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App(config: AppConfig, session: Session) -> impl IntoView {
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (restored, set_restored) = signal(false);
    let (show_panel, set_show_panel) = signal(false);
    let (show_setup, set_show_setup) = signal(false);

    let ctx = AppContext::new((reload_trigger, set_reload_trigger), session, config);
    provide_context(ctx);
    let store = Store::new(AppState::default());
    provide_context(store);

    // Pick up an identity the agent already holds
    spawn_local(async move {
        match ctx.session().restore().await {
            Ok(caller) => store.caller().set(caller),
            Err(e) => tracing::warn!(error = %e, "could not restore identity"),
        }
        set_restored.set(true);
    });

    // Public content
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let session = ctx.session();
        tracing::debug!(trigger, "loading site content");
        spawn_local(async move {
            store.settings().set(commands::fetch_display_settings(&session).await);
            store.plans().set(commands::fetch_pricing_plans(&session).await);
            store.plans_loaded().set(true);
            store.logo_url().set(commands::fetch_logo(&session).await.map(|logo| logo.url));
        });
    });

    // Caller-scoped state, after the identity is known
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let caller = store.caller().get();
        if !restored.get() {
            return;
        }
        let session = ctx.session();
        spawn_local(async move {
            let gate = commands::fetch_admin_gate(&session).await;
            tracing::debug!(?caller, ?gate, "admin gate resolved");
            store.gate().set(Some(gate));
            store.profile().set(commands::fetch_caller_profile(&session).await);
            store.role().set(commands::fetch_caller_role(&session).await);
        });
    });

    // Overlay remounts only when access actually changes
    let access = Memo::new(move |_| {
        let authenticated = store.caller().read().is_some();
        panel_access(store.gate().get(), authenticated)
    });

    view! {
        <div class="page">
            <Header
                on_admin=move |_| set_show_panel.set(true)
                on_setup=move |_| set_show_setup.set(true)
            />
            <main>
                <Hero />
                <Stats />
                <Features />
                <Pricing />
                <Faq />
                <FinalCta />
            </main>
            <Footer />

            {move || show_panel.get().then(|| match access.get() {
                PanelAccess::Checking => view! {
                    <div class="modal-backdrop">
                        <div class="modal modal-sm">
                            <p class="muted">"Checking access..."</p>
                        </div>
                    </div>
                }
                .into_any(),
                PanelAccess::Granted => view! {
                    <AdminPanel on_close=move |_| set_show_panel.set(false) />
                }
                .into_any(),
                PanelAccess::Denied { admins_exist } => view! {
                    <AdminAccessDenied
                        admins_exist=admins_exist
                        on_close=move |_| set_show_panel.set(false)
                    />
                }
                .into_any(),
            })}

            <Show when=move || show_setup.get()>
                <AdminSetupDialog on_close=move |_| set_show_setup.set(false) />
            </Show>
        </div>
    }
}
