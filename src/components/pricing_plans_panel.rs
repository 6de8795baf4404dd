//! Pricing Plans Admin Panel
//!
//! Lists the stored plans with edit/delete actions and a create/edit form.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::components::{AlertKind, DeleteConfirmButton, StatusAlert};
use crate::context::use_app_context;
use crate::forms::{format_price, PlanForm};
use crate::models::PricingPlan;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form state: hidden, creating, or editing the plan with this id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FormMode {
    Closed,
    Create,
    Edit(u64),
}

#[component]
pub fn PricingPlansPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let mode = RwSignal::new(FormMode::Closed);
    let form = RwSignal::new(PlanForm::default());
    let form_error = RwSignal::new(None::<String>);
    let list_error = RwSignal::new(None::<String>);
    let (saving, set_saving) = signal(false);
    let (deleting, set_deleting) = signal(false);

    let open_create = move |_| {
        form.set(PlanForm::default());
        form_error.set(None);
        mode.set(FormMode::Create);
    };

    let open_edit = move |plan: PricingPlan| {
        form.set(PlanForm::from_plan(&plan));
        form_error.set(None);
        mode.set(FormMode::Edit(plan.id));
    };

    let close_form = move || {
        mode.set(FormMode::Closed);
        form.set(PlanForm::default());
        form_error.set(None);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        form_error.set(None);
        let draft = match form.with_untracked(PlanForm::validate) {
            Ok(draft) => draft,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        let current = mode.get_untracked();
        let session = ctx.session();
        set_saving.set(true);
        spawn_local(async move {
            let result = match current {
                FormMode::Edit(id) => commands::update_pricing_plan(&session, id, &draft).await,
                _ => commands::create_pricing_plan(&session, &draft).await.map(|_| ()),
            };
            match result {
                Ok(()) => {
                    close_form();
                    ctx.reload();
                }
                Err(e) => form_error.set(Some(e.user_message())),
            }
            set_saving.set(false);
        });
    };

    let delete_plan = move |id: u64| {
        let session = ctx.session();
        list_error.set(None);
        set_deleting.set(true);
        spawn_local(async move {
            match commands::delete_pricing_plan(&session, id).await {
                Ok(()) => ctx.reload(),
                Err(e) => list_error.set(Some(e.user_message())),
            }
            set_deleting.set(false);
        });
    };

    view! {
        <div class="panel-section">
            <div class="panel-toolbar">
                <button class="btn btn-primary btn-lg" on:click=open_create>"+ Add New Plan"</button>
            </div>

            <StatusAlert kind=AlertKind::Error message=list_error />

            <Show
                when=move || store.plans_loaded().get()
                fallback=|| view! { <div class="spinner">"Loading..."</div> }
            >
                <Show
                    when=move || !store.plans().read().is_empty()
                    fallback=|| view! {
                        <div class="card empty-state">
                            "No pricing plans yet. Create your first plan to get started."
                        </div>
                    }
                >
                    <div class="admin-plan-grid">
                        <For
                            each=move || store.plans().get()
                            key=|plan| plan.clone()
                            children=move |plan| {
                                let id = plan.id;
                                let editable = plan.clone();
                                view! {
                                    <div class="card admin-plan-card">
                                        <div class="admin-plan-head">
                                            <div>
                                                <h3>{plan.name.clone()}</h3>
                                                <p class="muted">{plan.description.clone()}</p>
                                            </div>
                                            <div class="admin-plan-actions">
                                                <button
                                                    class="btn btn-ghost"
                                                    title="Edit"
                                                    on:click=move |_| open_edit(editable.clone())
                                                >
                                                    "✎"
                                                </button>
                                                <DeleteConfirmButton
                                                    label="🗑"
                                                    prompt="Delete this pricing plan?"
                                                    disabled=deleting
                                                    on_confirm=move |_| delete_plan(id)
                                                />
                                            </div>
                                        </div>
                                        <div class="plan-price">
                                            <span class="price">{format_price(plan.price_cents)}</span>
                                            <span class="period">{format!("/ {} days", plan.duration_days)}</span>
                                        </div>
                                        <p class="feature-heading">"Features:"</p>
                                        <ul class="plan-features">
                                            {plan
                                                .features
                                                .iter()
                                                .map(|feature| view! { <li>"• " {feature.clone()}</li> })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || mode.get() != FormMode::Closed>
                <div class="modal-backdrop">
                    <div class="modal">
                        <h2>
                            {move || match mode.get() {
                                FormMode::Edit(_) => "Edit Pricing Plan",
                                _ => "Create New Pricing Plan",
                            }}
                        </h2>
                        <p class="muted">
                            {move || match mode.get() {
                                FormMode::Edit(_) => "Update the details of your pricing plan.",
                                _ => "Fill in the details to create a new pricing plan.",
                            }}
                        </p>

                        <form class="form" on:submit=submit>
                            <StatusAlert kind=AlertKind::Error message=form_error />

                            <label for="plan-name">"Plan Name *"</label>
                            <input
                                id="plan-name"
                                type="text"
                                placeholder="e.g., Starter, Pro, Enterprise"
                                prop:value=move || form.with(|f| f.name.clone())
                                on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                            />

                            <label for="plan-description">"Description *"</label>
                            <input
                                id="plan-description"
                                type="text"
                                placeholder="e.g., Perfect for personal projects"
                                prop:value=move || form.with(|f| f.description.clone())
                                on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                            />

                            <div class="form-row">
                                <div>
                                    <label for="plan-price">"Price (in cents) *"</label>
                                    <input
                                        id="plan-price"
                                        type="number"
                                        placeholder="e.g., 8000 for Rs 80"
                                        prop:value=move || form.with(|f| f.price_cents.clone())
                                        on:input=move |ev| form.update(|f| f.price_cents = event_target_value(&ev))
                                    />
                                    <p class="hint">{move || form.with(PlanForm::price_hint)}</p>
                                </div>
                                <div>
                                    <label for="plan-duration">"Duration (days) *"</label>
                                    <input
                                        id="plan-duration"
                                        type="number"
                                        placeholder="e.g., 30"
                                        prop:value=move || form.with(|f| f.duration_days.clone())
                                        on:input=move |ev| form.update(|f| f.duration_days = event_target_value(&ev))
                                    />
                                </div>
                            </div>

                            <label for="plan-features">"Features (one per line) *"</label>
                            <textarea
                                id="plan-features"
                                rows="8"
                                placeholder="2 GB RAM\n2 CPU Cores\n50GB NVMe Storage\nFree SSL Certificate"
                                prop:value=move || form.with(|f| f.features.clone())
                                on:input=move |ev| form.update(|f| f.features = event_target_value(&ev))
                            ></textarea>
                            <p class="hint">"Enter each feature on a new line"</p>

                            <div class="modal-actions">
                                <button type="button" class="btn btn-outline" on:click=move |_| close_form()>
                                    "Cancel"
                                </button>
                                <button type="submit" class="btn btn-primary" disabled=move || saving.get()>
                                    {move || match (saving.get(), mode.get()) {
                                        (true, _) => "Saving...",
                                        (false, FormMode::Edit(_)) => "Update Plan",
                                        (false, _) => "Create Plan",
                                    }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>
        </div>
    }
}
