//! Admin login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entry point to the dashboard. Honors the `from` query parameter written
//! by the route guard so a successful login returns the user to the page
//! they originally requested.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_meta::Title;
#[cfg(feature = "csr")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::types::Credentials;
use crate::state::session::SessionStore;
use crate::util::validate::is_blank;

/// Validate the login form; both fields are required.
pub fn validate_login(identifier: &str, password: &str) -> Result<Credentials, &'static str> {
    if is_blank(identifier) || is_blank(password) {
        return Err("Enter both your email or username and your password.");
    }
    Ok(Credentials { identifier: identifier.trim().to_owned(), password: password.to_owned() })
}

/// Where to go after a successful login. Only same-origin absolute paths
/// are honored; anything else falls back to the dashboard.
pub fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => "/dashboard".to_owned(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();
    let stored_session = StoredValue::new(session);
    let query = use_query_map();
    let navigate = use_navigate();
    let stored_navigate = StoredValue::new(navigate);

    let identifier = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let form_error = RwSignal::new(None::<&'static str>);

    let busy = move || state.get().loading;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        let credentials = match validate_login(&identifier.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(message) => {
                form_error.set(Some(message));
                return;
            }
        };
        form_error.set(None);
        let target = post_login_target(query.get_untracked().get("from").as_deref());
        #[cfg(feature = "csr")]
        {
            let store = stored_session.get_value();
            leptos::task::spawn_local(async move {
                if store.login(credentials).await.is_ok() {
                    let navigate = stored_navigate.get_value();
                    navigate(&target, NavigateOptions::default());
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, target, stored_session, stored_navigate);
        }
    };

    view! {
        <Title text="Admin Login" />
        <div class="login-page">
            <div class="login-card">
                <h1 class="login-card__title">"Welcome Back"</h1>
                <p class="login-card__subtitle">"Sign in to manage your portfolio"</p>

                <form class="login-form" on:submit=on_submit>
                    <label class="login-form__label">
                        "Email or Username"
                        <input
                            class="login-form__input"
                            type="text"
                            placeholder="you@example.com"
                            prop:value=move || identifier.get()
                            on:input=move |ev| identifier.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="login-form__label">
                        "Password"
                        <span class="login-form__password">
                            <input
                                class="login-form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                            />
                            <button
                                class="login-form__toggle"
                                type="button"
                                aria-label=move || {
                                    if show_password.get() { "Hide password" } else { "Show password" }
                                }
                                on:click=move |_| show_password.update(|show| *show = !*show)
                            >
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </span>
                    </label>

                    <Show when=move || form_error.get().is_some()>
                        <p class="login-form__error">{move || form_error.get().unwrap_or_default()}</p>
                    </Show>
                    <Show when=move || state.get().error.is_some()>
                        <p class="login-form__error">
                            {move || state.get().error.unwrap_or_default()}
                        </p>
                    </Show>

                    <button class="btn btn--primary login-form__submit" type="submit" disabled=busy>
                        {move || if busy() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <a class="login-card__back" href="/">
                    "Back to portfolio"
                </a>
            </div>
        </div>
    }
}
