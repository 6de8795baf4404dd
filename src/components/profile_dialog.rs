//! Profile Dialog Component
//!
//! Header button showing the caller's name; opens a form to change it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{AlertKind, StatusAlert};
use crate::context::use_app_context;
use crate::forms::validate_profile_name;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ProfileDialog() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let (open, set_open) = signal(false);
    let name = RwSignal::new(String::new());
    let (saving, set_saving) = signal(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    // Keep the input in step with the stored profile
    Effect::new(move |_| {
        if let Some(profile) = store.profile().get() {
            name.set(profile.name);
        }
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        error.set(None);
        success.set(None);
        let profile = match validate_profile_name(&name.get_untracked()) {
            Ok(profile) => profile,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };
        set_saving.set(true);
        let session = ctx.session();
        spawn_local(async move {
            match commands::save_caller_profile(&session, &profile).await {
                Ok(()) => {
                    store.profile().set(Some(profile));
                    success.set(Some("Profile updated successfully!".to_string()));
                    ctx.reload();
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    success.set(None);
                    set_open.set(false);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            set_saving.set(false);
        });
    };

    let button_label = move || {
        store
            .profile()
            .get()
            .map(|p| p.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Profile".to_string())
    };

    view! {
        <button class="btn btn-ghost btn-sm" on:click=move |_| set_open.set(true)>
            "👤 " {button_label}
        </button>
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal modal-sm">
                    <h2>"Your Profile"</h2>
                    <p class="muted">"Update your profile information here."</p>
                    <p class="muted">{move || format!("Role: {}", store.role().get().label())}</p>
                    <form class="form" on:submit=submit>
                        <StatusAlert kind=AlertKind::Success message=success />
                        <StatusAlert kind=AlertKind::Error message=error />
                        <label for="profile-name">"Name"</label>
                        <input
                            id="profile-name"
                            type="text"
                            placeholder="Enter your name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                        <div class="modal-actions">
                            <button type="button" class="btn btn-outline" on:click=move |_| set_open.set(false)>
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                {move || if saving.get() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
