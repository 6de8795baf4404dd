//! Admin Access Denied Component

use leptos::prelude::*;

/// Shown instead of the panel; the hint depends on whether any admin exists
#[component]
pub fn AdminAccessDenied(admins_exist: bool, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let (heading, hint) = if admins_exist {
        (
            "Admin access is required",
            "Please contact an existing administrator to request admin privileges for your account.",
        )
    } else {
        (
            "Admin setup required",
            "No administrators have been configured yet. Look for the \"Set up admin access\" button in the header to claim admin privileges.",
        )
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal modal-sm">
                <h2>"⚠ Access Denied"</h2>
                <p class="muted">"You do not have permission to access the admin panel."</p>
                <div class="card muted-card">
                    <p class="hint-heading">{heading}</p>
                    <p class="muted">{hint}</p>
                </div>
                <button class="btn btn-primary btn-lg btn-block" on:click=move |_| on_close.run(())>
                    "Close"
                </button>
            </div>
        </div>
    }
}
