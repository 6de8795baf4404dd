//! Status Alert Component

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    Success,
    Error,
}

/// Banner shown while `message` holds text
#[component]
pub fn StatusAlert(kind: AlertKind, #[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    let class = match kind {
        AlertKind::Success => "alert alert-success",
        AlertKind::Error => "alert alert-error",
    };
    move || {
        message.get().map(|text| {
            view! {
                <div class=class role="alert">
                    <span class="alert-text">{text}</span>
                </div>
            }
        })
    }
}

/// Clear `message` after `millis`, unless it changed in the meantime
pub fn dismiss_after(message: RwSignal<Option<String>>, millis: u32) {
    let shown = message.get_untracked();
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(millis).await;
        if message.get_untracked() == shown {
            message.set(None);
        }
    });
}
