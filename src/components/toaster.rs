//! Toast rendering and timed dismissal.

#[cfg(test)]
#[path = "toaster_test.rs"]
mod toaster_test;

use leptos::prelude::*;

use crate::state::toast::{ToastLevel, ToastState};

/// How long a toast stays visible, by level.
#[cfg(any(test, feature = "csr"))]
fn dismiss_after_ms(level: ToastLevel) -> u64 {
    match level {
        ToastLevel::Success => 3_000,
        ToastLevel::Error => 5_000,
    }
}

fn level_class(level: ToastLevel) -> &'static str {
    match level {
        ToastLevel::Success => "success",
        ToastLevel::Error => "error",
    }
}

/// Renders the toast queue and schedules dismissal for each new entry.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    // Ids below this mark already have a dismissal timer scheduled.
    #[cfg(feature = "csr")]
    {
        let scheduled_below = RwSignal::new(0u64);
        Effect::new(move || {
            let state = toasts.get();
            let from = scheduled_below.get_untracked();
            for toast in state.items.iter().filter(|toast| toast.id >= from) {
                let id = toast.id;
                let after = dismiss_after_ms(toast.level);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(after)).await;
                    toasts.update(|toasts| toasts.dismiss(id));
                });
            }
            scheduled_below.set(state.next_id);
        });
    }

    view! {
        <div class="toaster" aria-live="polite">
            {move || {
                toasts
                    .get()
                    .items
                    .into_iter()
                    .map(|toast| {
                        let id = toast.id;
                        view! {
                            <div class=format!("toast toast--{}", level_class(toast.level))>
                                <span class="toast__message">{toast.message}</span>
                                <button
                                    class="toast__close"
                                    aria-label="Dismiss"
                                    on:click=move |_| toasts.update(|toasts| toasts.dismiss(id))
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
