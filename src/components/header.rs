//! Site Header Component
//!
//! Logo, section navigation, sign in/out and the admin entry points.

use leptos::ev;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ProfileDialog;
use crate::content;
use crate::context::use_app_context;
use crate::dom;
use crate::gate::claim_offered;
use crate::session::Session;
use crate::store::{store_is_admin, store_reset_identity, use_app_store, AppStateStoreFields};

/// Sticky header
#[component]
pub fn Header(
    /// Open the admin panel overlay
    #[prop(into)]
    on_admin: Callback<()>,
    /// Open the first-admin claim dialog
    #[prop(into)]
    on_setup: Callback<()>,
) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let fallback_logo = StoredValue::new(ctx.config().logo_fallback_url);

    let (scrolled, set_scrolled) = signal(dom::scroll_y() > 20.0);
    let (menu_open, set_menu_open) = signal(false);

    let scroll_listener = window_event_listener(ev::scroll, move |_| {
        set_scrolled.set(dom::scroll_y() > 20.0);
    });
    on_cleanup(move || scroll_listener.remove());

    let authenticated = move || store.caller().read().is_some();
    let can_claim = move || claim_offered(store.gate().get(), authenticated());

    let toggle_auth = move |_: ev::MouseEvent| {
        let session = ctx.session();
        if store.caller().get_untracked().is_some() {
            spawn_local(async move {
                match session.sign_out().await {
                    Ok(()) => {
                        store_reset_identity(&store);
                        ctx.reload();
                    }
                    Err(e) => tracing::error!(error = %e, "sign out failed"),
                }
            });
        } else {
            store.signing_in().set(true);
            spawn_local(async move {
                match sign_in(&session).await {
                    Ok(principal) => {
                        store.gate().set(None);
                        store.caller().set(Some(principal));
                        ctx.reload();
                    }
                    Err(e) => tracing::error!(error = %e, "sign in failed"),
                }
                store.signing_in().set(false);
            });
        }
    };

    let auth_label = move || {
        if store.signing_in().get() {
            "Signing in..."
        } else if authenticated() {
            "Sign out"
        } else {
            "Sign in"
        }
    };

    let logo_src = move || store.logo_url().get().unwrap_or_else(|| fallback_logo.get_value());

    let nav_buttons = move || {
        content::NAV
            .iter()
            .map(|item| {
                let id = item.id;
                view! {
                    <button
                        class="nav-link"
                        on:click=move |_| {
                            set_menu_open.set(false);
                            dom::scroll_to_section(id);
                        }
                    >
                        {item.label}
                    </button>
                }
            })
            .collect_view()
    };

    let actions = move || {
        view! {
            <Show when=can_claim>
                <button class="btn btn-outline" on:click=move |_| on_setup.run(())>
                    "Set up admin access"
                </button>
            </Show>
            <Show when=move || store_is_admin(&store)>
                <button class="btn btn-outline" on:click=move |_| on_admin.run(())>
                    "🛡 Admin"
                </button>
            </Show>
            <Show when=authenticated>
                <ProfileDialog />
            </Show>
            <button
                class=move || if authenticated() { "btn btn-ghost" } else { "btn btn-primary" }
                disabled=move || store.signing_in().get()
                on:click=toggle_auth
            >
                {auth_label}
            </button>
        }
    };

    view! {
        <header class=move || if scrolled.get() { "site-header scrolled" } else { "site-header" }>
            <div class="container header-row">
                <img class="header-logo" src=logo_src alt=content::BRAND />

                <nav class="header-nav">{nav_buttons}</nav>

                <div class="header-actions">
                    <a class="btn btn-primary" href=move || store.settings().get().nav_cta_link>
                        {move || store.settings().get().nav_cta_text}
                    </a>
                    {actions}
                </div>

                <button
                    class="menu-toggle"
                    aria-label="Menu"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    "☰"
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="mobile-menu">
                    <img class="header-logo" src=logo_src alt=content::BRAND />
                    {nav_buttons}
                    {actions}
                </div>
            </Show>
        </header>
    }
}

/// Sign in; a stale agent identity is cleared and the login retried once
async fn sign_in(session: &Session) -> crate::error::ServiceResult<String> {
    match session.sign_in().await {
        Err(e) if e.to_string().contains("already authenticated") => {
            tracing::warn!("agent held a stale identity, retrying login");
            session.sign_out().await?;
            gloo_timers::future::TimeoutFuture::new(300).await;
            session.sign_in().await
        }
        result => result,
    }
}
