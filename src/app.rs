//! Application shell: context providers, hook wiring, and routing.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell constructs the one [`ApiClient`] and [`SessionStore`] for the
//! whole application, wires the client's notification and unauthorized
//! hooks, kicks off session restoration, and mounts the router. Restoration
//! settles before any user-initiated auth action because every auth control
//! stays disabled while the session is loading.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::NavigateOptions;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::path;

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::components::protected::RequireAuth;
use crate::components::toaster::Toaster;
use crate::config;
use crate::net::error::is_login_path;
use crate::net::http::ApiClient;
use crate::pages::about::AboutPage;
use crate::pages::contact::ContactPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::education::EducationPage;
use crate::pages::experience::ExperiencePage;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::projects::ProjectsPage;
use crate::pages::skills::SkillsPage;
use crate::state::session::SessionStore;
use crate::state::theme;
use crate::state::toast::ToastState;

/// Signal bumped by the HTTP client whenever a 401 demands a forced login;
/// the shell watches it and performs the navigation, keeping the HTTP layer
/// router-free.
#[derive(Clone, Copy)]
pub struct UnauthorizedSignal(pub RwSignal<u64>);

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = RwSignal::new(ToastState::default());
    provide_context(toasts);

    let client = ApiClient::new(config::api_base_url());
    client.set_notify_hook(Arc::new(move |level, message: &str| {
        let message = message.to_owned();
        toasts.update(|toasts| {
            toasts.push(level, message);
        });
    }));
    let unauthorized = UnauthorizedSignal(RwSignal::new(0));
    provide_context(unauthorized);
    client.set_unauthorized_hook(Arc::new(move || {
        unauthorized.0.update(|count| *count += 1);
    }));
    provide_context(client.clone());

    let session = SessionStore::new(client, toasts);
    provide_context(session.clone());
    #[cfg(feature = "csr")]
    {
        let restoring = session.clone();
        leptos::task::spawn_local(async move {
            restoring.restore().await;
        });
    }
    #[cfg(not(feature = "csr"))]
    let _ = session;

    let theme_signal = RwSignal::new(theme::read_preference());
    provide_context(theme_signal);
    Effect::new(move || theme::apply(theme_signal.get()));

    view! {
        <Router>
            <Shell />
        </Router>
    }
}

/// Layout and routes. Lives inside the router so navigation hooks resolve.
#[component]
fn Shell() -> impl IntoView {
    let unauthorized = expect_context::<UnauthorizedSignal>();
    let navigate = use_navigate();
    let location = use_location();

    // Forced logout on 401: reset the session (the client already wiped the
    // credential) and land on the login screen.
    let handled = RwSignal::new(0u64);
    let guard_session = expect_context::<SessionStore>();
    Effect::new(move || {
        let count = unauthorized.0.get();
        if count > handled.get_untracked() {
            handled.set(count);
            guard_session.force_logout();
            let path = location.pathname.get_untracked();
            if !is_login_path(&path) {
                navigate("/admin/login", NavigateOptions::default());
            }
        }
    });

    view! {
        <Navbar />
        <main class="main-content">
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=HomePage />
                <Route path=path!("/about") view=AboutPage />
                <Route path=path!("/projects") view=ProjectsPage />
                <Route path=path!("/skills") view=SkillsPage />
                <Route path=path!("/experience") view=ExperiencePage />
                <Route path=path!("/education") view=EducationPage />
                <Route path=path!("/contact") view=ContactPage />
                <Route path=path!("/admin/login") view=LoginPage />
                <Route path=path!("/login") view=|| view! { <Redirect path="/admin/login" /> } />
                <Route
                    path=path!("/dashboard")
                    view=|| {
                        view! {
                            <RequireAuth>
                                <DashboardPage />
                            </RequireAuth>
                        }
                    }
                />
            </Routes>
        </main>
        <Footer />
        <Toaster />
    }
}
