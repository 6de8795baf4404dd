//! Admins Admin Panel
//!
//! Roster listing with add/remove, plus role assignment for any principal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{dismiss_after, AlertKind, DeleteConfirmButton, StatusAlert};
use crate::context::use_app_context;
use crate::dom;
use crate::models::{AdminPrincipal, UserRole};
use crate::store::{use_app_store, AppStateStoreFields};

/// Roster row: principal plus display name, if the member saved a profile
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct AdminRow {
    principal: AdminPrincipal,
    name: Option<String>,
}

#[component]
pub fn AdminsPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let rows = RwSignal::new(Vec::<AdminRow>::new());
    let (loading, set_loading) = signal(true);
    let list_error = RwSignal::new(None::<String>);

    let new_principal = RwSignal::new(String::new());
    let (adding, set_adding) = signal(false);
    let add_error = RwSignal::new(None::<String>);
    let add_success = RwSignal::new(None::<String>);

    let (removing, set_removing) = signal(false);
    let remove_error = RwSignal::new(None::<String>);
    let copied = RwSignal::new(None::<AdminPrincipal>);

    Effect::new(move |_| {
        let _ = ctx.reload_trigger.get();
        let session = ctx.session();
        spawn_local(async move {
            match commands::fetch_admin_list(&session).await {
                Ok(principals) => {
                    let mut loaded = Vec::with_capacity(principals.len());
                    for principal in principals {
                        let name = commands::fetch_user_profile(&session, &principal)
                            .await
                            .map(|p| p.name);
                        loaded.push(AdminRow { principal, name });
                    }
                    rows.set(loaded);
                    list_error.set(None);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "admin list unavailable");
                    rows.set(Vec::new());
                    list_error.set(Some(
                        "Failed to load admin list. You may not have permission to view this information."
                            .to_string(),
                    ));
                }
            }
            set_loading.set(false);
        });
    });

    let add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let principal = new_principal.get_untracked().trim().to_string();
        if principal.is_empty() {
            return;
        }
        add_error.set(None);
        add_success.set(None);
        set_adding.set(true);
        let session = ctx.session();
        spawn_local(async move {
            match commands::add_admin(&session, &principal).await {
                Ok(()) => {
                    new_principal.set(String::new());
                    add_success.set(Some("Administrator added successfully!".to_string()));
                    dismiss_after(add_success, 3000);
                    ctx.reload();
                }
                Err(e) => add_error.set(Some(e.user_message())),
            }
            set_adding.set(false);
        });
    };

    let remove = move |principal: AdminPrincipal| {
        remove_error.set(None);
        set_removing.set(true);
        let session = ctx.session();
        spawn_local(async move {
            match commands::remove_admin(&session, &principal).await {
                Ok(()) => ctx.reload(),
                Err(e) => remove_error.set(Some(e.user_message())),
            }
            set_removing.set(false);
        });
    };

    let copy = move |principal: AdminPrincipal| {
        spawn_local(async move {
            match dom::copy_to_clipboard(&principal).await {
                Ok(()) => {
                    copied.set(Some(principal.clone()));
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    if copied.get_untracked().as_ref() == Some(&principal) {
                        copied.set(None);
                    }
                }
                Err(e) => tracing::warn!(error = %e, "copy failed"),
            }
        });
    };

    view! {
        <div class="panel-section">
            <div class="card">
                <h3>"🛡 Admin Management"</h3>
                <p class="muted">
                    "Add or remove administrators who can manage pricing plans, website content, and site settings."
                </p>

                <form class="form" on:submit=add>
                    <label for="new-admin">"Add New Administrator"</label>
                    <div class="input-row">
                        <input
                            id="new-admin"
                            type="text"
                            placeholder="Enter principal ID (e.g., xxxxx-xxxxx-xxxxx-xxxxx-xxx)"
                            disabled=move || adding.get()
                            prop:value=move || new_principal.get()
                            on:input=move |ev| new_principal.set(event_target_value(&ev))
                        />
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || adding.get() || new_principal.with(|p| p.trim().is_empty())
                        >
                            {move || if adding.get() { "Adding..." } else { "Add Admin" }}
                        </button>
                    </div>
                    <StatusAlert kind=AlertKind::Error message=add_error />
                    <StatusAlert kind=AlertKind::Success message=add_success />
                </form>

                <div class="roster">
                    <label>{move || format!("Current Administrators ({})", rows.with(Vec::len))}</label>
                    <Show when=move || loading.get()>
                        <p class="muted">"Loading admin list..."</p>
                    </Show>
                    <StatusAlert kind=AlertKind::Error message=list_error />
                    <Show when=move || !loading.get() && list_error.with(Option::is_none) && rows.with(Vec::is_empty)>
                        <p class="muted">"No administrators found."</p>
                    </Show>
                    <For
                        each=move || rows.get()
                        key=|row| row.clone()
                        children=move |row| {
                            let principal = row.principal.clone();
                            let is_you = store.caller().read().as_deref() == Some(principal.as_str());
                            let copy_target = principal.clone();
                            let remove_target = principal.clone();
                            let is_copied = {
                                let principal = principal.clone();
                                move || copied.get().as_deref() == Some(principal.as_str())
                            };
                            view! {
                                <div class="roster-row">
                                    <div class="roster-identity">
                                        {row.name.map(|name| view! { <span class="roster-name">{name}</span> })}
                                        <code>{principal}</code>
                                        {is_you.then(|| view! { <span class="pill">"You"</span> })}
                                    </div>
                                    <div class="roster-actions">
                                        <button class="btn btn-ghost" on:click=move |_| copy(copy_target.clone())>
                                            {move || if is_copied() { "✓ Copied" } else { "Copy" }}
                                        </button>
                                        <DeleteConfirmButton
                                            label="🗑"
                                            prompt="Remove this administrator? They will lose access to the admin panel."
                                            disabled=removing
                                            on_confirm=move |_| remove(remove_target.clone())
                                        />
                                    </div>
                                </div>
                            }
                        }
                    />
                    <StatusAlert kind=AlertKind::Error message=remove_error />
                </div>
            </div>

            <RoleAssignment />
        </div>
    }
}

/// Assign a role to any principal. Granting or revoking admin updates the roster.
#[component]
fn RoleAssignment() -> impl IntoView {
    let ctx = use_app_context();

    let principal = RwSignal::new(String::new());
    let role = RwSignal::new(UserRole::User);
    let (saving, set_saving) = signal(false);
    let error = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = principal.get_untracked().trim().to_string();
        if user.is_empty() {
            return;
        }
        let selected = role.get_untracked();
        error.set(None);
        success.set(None);
        set_saving.set(true);
        let session = ctx.session();
        spawn_local(async move {
            match commands::assign_role(&session, &user, selected).await {
                Ok(()) => {
                    principal.set(String::new());
                    success.set(Some(format!("Role {} assigned.", selected.label())));
                    dismiss_after(success, 3000);
                    ctx.reload();
                }
                Err(e) => error.set(Some(e.user_message())),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="card">
            <h3>"Assign Role"</h3>
            <p class="muted">"Set the role of any principal."</p>
            <form class="form" on:submit=submit>
                <div class="input-row">
                    <input
                        type="text"
                        placeholder="Principal ID"
                        prop:value=move || principal.get()
                        on:input=move |ev| principal.set(event_target_value(&ev))
                    />
                    <select on:change=move |ev| {
                        let selected = match event_target_value(&ev).as_str() {
                            "admin" => UserRole::Admin,
                            "guest" => UserRole::Guest,
                            _ => UserRole::User,
                        };
                        role.set(selected);
                    }>
                        <option value="user" selected=move || role.get() == UserRole::User>"User"</option>
                        <option value="admin" selected=move || role.get() == UserRole::Admin>"Admin"</option>
                        <option value="guest" selected=move || role.get() == UserRole::Guest>"Guest"</option>
                    </select>
                    <button
                        type="submit"
                        class="btn btn-outline"
                        disabled=move || saving.get() || principal.with(|p| p.trim().is_empty())
                    >
                        {move || if saving.get() { "Saving..." } else { "Assign" }}
                    </button>
                </div>
                <StatusAlert kind=AlertKind::Error message=error />
                <StatusAlert kind=AlertKind::Success message=success />
            </form>
        </div>
    }
}
