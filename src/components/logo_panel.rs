//! Logo Admin Panel

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands;
use crate::components::{dismiss_after, AlertKind, StatusAlert};
use crate::context::use_app_context;
use crate::dom;
use crate::forms::validate_logo;
use crate::models::LogoUpload;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn LogoPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let max_bytes = ctx.config().logo_max_bytes;

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let preview = RwSignal::new(None::<String>);
    let success = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);
    let (uploading, set_uploading) = signal(false);

    let clear_preview = move || {
        if let Some(url) = preview.get_untracked() {
            dom::revoke_object_url(&url);
        }
        preview.set(None);
    };

    let on_file = move |ev: leptos::ev::Event| {
        let Some(input) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
        else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        // Allow picking the same file again
        input.set_value("");

        let content_type = file.type_();
        if let Err(message) = validate_logo(&content_type, file.size() as usize, max_bytes) {
            error.set(Some(message));
            return;
        }

        success.set(None);
        error.set(None);
        clear_preview();
        preview.set(dom::object_url(&file));
        set_uploading.set(true);

        let session = ctx.session();
        spawn_local(async move {
            let result = match dom::read_file_bytes(&file).await {
                Ok(bytes) => commands::update_logo(&session, &LogoUpload { bytes, content_type })
                    .await
                    .map_err(|e| e.user_message()),
                Err(e) => Err(e),
            };
            match result {
                Ok(()) => {
                    success.set(Some("Logo updated successfully!".to_string()));
                    dismiss_after(success, 3000);
                    ctx.reload();
                }
                Err(message) => {
                    error.set(Some(message));
                    clear_preview();
                }
            }
            set_uploading.set(false);
        });
    };

    // Drop the local preview along with the success banner
    Effect::new(move |_| {
        if success.get().is_none() && !uploading.get() {
            clear_preview();
        }
    });

    view! {
        <div class="panel-section">
            <StatusAlert kind=AlertKind::Success message=success />
            <StatusAlert kind=AlertKind::Error message=error />

            <div class="card">
                <h3>"Current Logo"</h3>
                <p class="muted">"This logo appears in the header and footer of your website"</p>
                {move || match store.logo_url().get() {
                    Some(url) => view! {
                        <div class="logo-frame"><img src=url alt="Current logo" /></div>
                    }
                    .into_any(),
                    None => view! {
                        <div class="empty-state">"No custom logo uploaded. Using default logo."</div>
                    }
                    .into_any(),
                }}
            </div>

            <div class="card">
                <h3>"Upload New Logo"</h3>
                <p class="muted">
                    "Upload a PNG, JPG, or other image file (max 5MB). Recommended size: 512x256px or similar aspect ratio."
                </p>
                {move || preview.get().map(|url| view! {
                    <p class="feature-heading">"Preview:"</p>
                    <div class="logo-frame"><img src=url alt="Logo preview" /></div>
                })}
                <input
                    node_ref=input_ref
                    class="hidden"
                    type="file"
                    accept="image/*"
                    on:change=on_file
                />
                <button
                    class="btn btn-primary btn-lg"
                    disabled=move || uploading.get()
                    on:click=move |_| {
                        if let Some(input) = input_ref.get() {
                            input.click();
                        }
                    }
                >
                    {move || if uploading.get() { "Uploading..." } else { "Choose Image" }}
                </button>
            </div>
        </div>
    }
}
