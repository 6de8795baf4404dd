//! Admin Setup Dialog
//!
//! Offers the one-time first-admin claim while no administrator exists.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{AlertKind, StatusAlert};
use crate::context::use_app_context;

const CAPABILITIES: &[&str] = &[
    "Create and manage pricing plans",
    "Customize website content and branding",
    "Upload and manage the site logo",
    "Manage admin access for other users",
    "Access the admin control panel",
];

#[component]
pub fn AdminSetupDialog(#[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();

    let (claiming, set_claiming) = signal(false);
    let (claimed, set_claimed) = signal(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let claim = move |_| {
        error.set(None);
        set_claiming.set(true);
        let session = ctx.session();
        spawn_local(async move {
            match commands::claim_first_admin(&session).await {
                Ok(()) => {
                    set_claimed.set(true);
                    success.set(Some(
                        "Admin access successfully configured! The Admin button will now appear in the header."
                            .to_string(),
                    ));
                    ctx.reload();
                    set_claiming.set(false);
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    on_close.run(());
                }
                Err(e) => {
                    error.set(Some(e.user_message()));
                    set_claiming.set(false);
                    // Someone else got there first; refresh the gate
                    ctx.reload();
                }
            }
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal modal-sm">
                <h2>"🛡 Set Up Admin Access"</h2>
                <p class="muted">
                    "No administrators have been configured yet. As the first user, you can claim admin access to manage pricing plans, customize website content, and configure site settings."
                </p>

                <StatusAlert kind=AlertKind::Error message=error />
                <StatusAlert kind=AlertKind::Success message=success />

                <div class="card muted-card">
                    <h4>"What you'll be able to do:"</h4>
                    <ul>
                        {CAPABILITIES.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                    </ul>
                </div>

                <div class="modal-actions">
                    <button
                        class="btn btn-outline"
                        disabled=move || claiming.get()
                        on:click=move |_| on_close.run(())
                    >
                        "Cancel"
                    </button>
                    <button
                        class="btn btn-primary"
                        disabled=move || claiming.get() || claimed.get()
                        on:click=claim
                    >
                        {move || {
                            if claiming.get() {
                                "Setting up..."
                            } else if claimed.get() {
                                "✓ Success!"
                            } else {
                                "Claim Admin Access"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}
