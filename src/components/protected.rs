//! Route guard for authenticated-only views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps protected route content. While session restoration is in flight the
//! guard renders a loading placeholder, never a redirect, so a valid
//! persisted session is not bounced to login during startup. A denied
//! evaluation is final for that navigation attempt.

#[cfg(test)]
#[path = "protected_test.rs"]
mod protected_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::net::api::encode_component;
use crate::state::session::{SessionState, SessionStore};

/// Outcome of evaluating session state for a protected view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session restoration still in flight; show a placeholder.
    Pending,
    /// Not authenticated; redirect to the login entry point.
    Denied,
    /// Authenticated; render the protected content.
    Granted,
}

/// Decide whether a protected view may render.
pub fn evaluate(state: &SessionState) -> GuardDecision {
    if state.loading {
        GuardDecision::Pending
    } else if state.authenticated {
        GuardDecision::Granted
    } else {
        GuardDecision::Denied
    }
}

/// Login route carrying the originally requested location, so a successful
/// login can return the user there.
pub fn login_redirect_target(from: &str) -> String {
    if from.is_empty() || from == "/admin/login" {
        "/admin/login".to_owned()
    } else {
        format!("/admin/login?from={}", encode_component(from))
    }
}

/// Gate for authenticated-only content. Renders a loading placeholder while
/// the session is restoring, redirects to login when denied, and the
/// children once granted.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionStore>().state();
    let location = use_location();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = session.get();
        if evaluate(&state) == GuardDecision::Denied {
            let from = location.pathname.get_untracked();
            navigate(&login_redirect_target(&from), NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || evaluate(&session.get()) == GuardDecision::Granted
            fallback=move || {
                view! {
                    <div class="guard-loading">
                        <div class="loading-spinner" aria-hidden="true"></div>
                        <p>"Loading..."</p>
                    </div>
                }
            }
        >
            {children()}
        </Show>
    }
}
