//! Projects page: public project catalogue with search and category filter.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::project_card::ProjectCard;
use crate::net::http::ApiClient;
#[cfg(feature = "csr")]
use crate::net::types::ListQuery;
use crate::net::types::Project;
use crate::util::filter::{ALL_CATEGORY, matches_category, matches_search};

/// Apply the shared search/category predicates to a project list.
pub fn visible_projects(projects: &[Project], category: &str, term: &str) -> Vec<Project> {
    projects
        .iter()
        .filter(|project| matches_category(&project.category, category))
        .filter(|project| {
            let mut fields: Vec<&str> = vec![&project.title, &project.description];
            fields.extend(project.technologies.iter().map(String::as_str));
            matches_search(&fields, term)
        })
        .cloned()
        .collect()
}

#[component]
pub fn ProjectsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());
    let category = RwSignal::new(ALL_CATEGORY.to_owned());

    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if let Ok(fetched) = crate::net::api::list_projects(&client, &ListQuery::default()).await {
                projects.set(fetched);
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
    }

    let visible = move || visible_projects(&projects.get(), &category.get(), &search.get());

    view! {
        <Title text="Projects" />
        <section class="page projects-page">
            <header class="page__header">
                <h1>"Projects"</h1>
                <p class="page__subtitle">"A selection of things I have built."</p>
            </header>

            <div class="projects-page__filters">
                <input
                    class="projects-page__search"
                    type="search"
                    placeholder="Search projects..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
                <select
                    class="projects-page__category"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value=ALL_CATEGORY>{ALL_CATEGORY}</option>
                    {Project::CATEGORIES
                        .iter()
                        .map(|name| view! { <option value=*name>{*name}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading projects..."</p> }
            >
                <Show
                    when=move || !visible().is_empty()
                    fallback=move || view! { <p class="page__empty">"No projects match your filters."</p> }
                >
                    <div class="projects-page__grid">
                        {move || {
                            visible()
                                .into_iter()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect::<Vec<_>>()
                        }}
                    </div>
                </Show>
            </Show>
        </section>
    }
}
