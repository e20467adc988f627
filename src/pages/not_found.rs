//! Catch-all 404 page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found" />
        <section class="page not-found-page">
            <h1 class="not-found-page__code">"404"</h1>
            <p class="not-found-page__message">"The page you are looking for does not exist."</p>
            <a class="btn btn--primary" href="/">
                "Back to Home"
            </a>
        </section>
    }
}
