//! Home page: hero plus featured-project preview.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::project_card::ProjectCard;
use crate::net::http::ApiClient;
#[cfg(feature = "csr")]
use crate::net::types::ListQuery;
use crate::net::types::Project;

#[component]
pub fn HomePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let featured = RwSignal::new(Vec::<Project>::new());

    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if let Ok(fetched) = crate::net::api::list_projects(&client, &ListQuery::featured(3)).await {
                featured.set(fetched);
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
    }

    view! {
        <Title text="Home" />
        <section class="page home-page">
            <div class="hero">
                <p class="hero__kicker">"Hi, I am"</p>
                <h1 class="hero__name">"a software engineer"</h1>
                <p class="hero__tagline">
                    "I design and build web applications, from backend services to the pixels in front of you."
                </p>
                <div class="hero__actions">
                    <a class="btn btn--primary" href="/projects">
                        "View Projects"
                    </a>
                    <a class="btn" href="/contact">
                        "Get in Touch"
                    </a>
                </div>
            </div>

            <Show when=move || !featured.get().is_empty()>
                <div class="home-page__featured">
                    <h2 class="home-page__section-title">"Featured Projects"</h2>
                    <div class="home-page__featured-grid">
                        {move || {
                            featured
                                .get()
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                    <a class="home-page__more" href="/projects">
                        "All projects"
                    </a>
                </div>
            </Show>

            <div class="home-page__links">
                <a class="home-page__link-card" href="/skills">
                    <h3>"Skills"</h3>
                    <p>"Languages, frameworks, and tooling."</p>
                </a>
                <a class="home-page__link-card" href="/experience">
                    <h3>"Experience"</h3>
                    <p>"Roles and responsibilities over the years."</p>
                </a>
                <a class="home-page__link-card" href="/education">
                    <h3>"Education"</h3>
                    <p>"Degrees and formal training."</p>
                </a>
            </div>
        </section>
    }
}
