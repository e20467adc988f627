//! About page.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <Title text="About" />
        <section class="page about-page">
            <header class="page__header">
                <h1>"About Me"</h1>
            </header>
            <div class="about-page__body">
                <p>
                    "I am a software engineer who enjoys the whole stack, with a soft spot for
                    typed languages, boring reliable infrastructure, and interfaces that stay
                    out of the user's way."
                </p>
                <p>
                    "This site doubles as a playground: the pages you are reading are a
                    WebAssembly application talking to a small REST backend, and the admin
                    area behind the login manages everything you see here."
                </p>
                <div class="about-page__highlights">
                    <div class="about-page__highlight">
                        <h3>"What I do"</h3>
                        <p>"Web applications, APIs, and the plumbing between them."</p>
                    </div>
                    <div class="about-page__highlight">
                        <h3>"How I work"</h3>
                        <p>"Small iterations, tests where they pay for themselves, and honest estimates."</p>
                    </div>
                    <div class="about-page__highlight">
                        <h3>"Beyond work"</h3>
                        <p>"Open source, long bike rides, and an unreasonable number of side projects."</p>
                    </div>
                </div>
                <a class="btn btn--primary" href="/contact">
                    "Say hello"
                </a>
            </div>
        </section>
    }
}
