//! Top navigation bar with theme toggle and auth-aware actions.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::SessionStore;
use crate::state::theme::{self, Theme};

const LINKS: &[(&str, &str)] = &[
    ("/", "Home"),
    ("/about", "About"),
    ("/projects", "Projects"),
    ("/skills", "Skills"),
    ("/experience", "Experience"),
    ("/education", "Education"),
    ("/contact", "Contact"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let state = session.state();
    let stored_session = StoredValue::new(session);
    let theme_signal = expect_context::<RwSignal<Theme>>();
    let pathname = use_location().pathname;
    let menu_open = RwSignal::new(false);

    let on_logout = move |_| {
        #[cfg(feature = "csr")]
        {
            let store = stored_session.get_value();
            leptos::task::spawn_local(async move {
                store.logout().await;
                if let Some(window) = web_sys::window() {
                    let _ = window.location().set_href("/");
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = stored_session;
        }
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href="/">
                "folio"
            </a>
            <button
                class="navbar__menu-toggle"
                aria-label="Toggle menu"
                on:click=move |_| menu_open.update(|open| *open = !*open)
            >
                "☰"
            </button>
            <div class="navbar__links" class:navbar__links--open=move || menu_open.get()>
                {LINKS
                    .iter()
                    .map(|(href, label)| {
                        let href = *href;
                        let active = move || pathname.get() == href;
                        view! {
                            <a
                                class="navbar__link"
                                class:navbar__link--active=active
                                href=href
                                on:click=move |_| menu_open.set(false)
                            >
                                {*label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <div class="navbar__actions">
                <button
                    class="navbar__theme-toggle"
                    title="Toggle theme"
                    on:click=move |_| {
                        let next = theme::toggle(theme_signal.get());
                        theme_signal.set(next);
                    }
                >
                    {move || if theme_signal.get().is_dark() { "☀" } else { "☾" }}
                </button>
                <Show
                    when=move || state.get().authenticated
                    fallback=move || {
                        view! {
                            <a class="navbar__link navbar__link--admin" href="/admin/login">
                                "Login"
                            </a>
                        }
                    }
                >
                    <a class="navbar__link" href="/dashboard">
                        "Dashboard"
                    </a>
                    <button class="navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
