//! Experience page: work history timeline with a search filter.

#[cfg(test)]
#[path = "experience_test.rs"]
mod experience_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::http::ApiClient;
use crate::net::types::Experience;
#[cfg(feature = "csr")]
use crate::net::types::ListQuery;
use crate::util::filter::matches_search;

/// Order entries for display: explicit `order` first, then most recent
/// start date.
pub fn sorted_entries(mut entries: Vec<Experience>) -> Vec<Experience> {
    entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| b.start_date.cmp(&a.start_date)));
    entries
}

/// Entries matching the search term over position, company, and description.
pub fn visible_entries(entries: &[Experience], term: &str) -> Vec<Experience> {
    entries
        .iter()
        .filter(|entry| matches_search(&[&entry.position, &entry.company, &entry.description], term))
        .cloned()
        .collect()
}

/// Human-readable date range; ongoing roles read "Present".
pub fn period_label(start: &str, end: Option<&str>, current: bool) -> String {
    let end = if current { "Present" } else { end.filter(|e| !e.is_empty()).unwrap_or("Present") };
    format!("{start} – {end}")
}

#[component]
pub fn ExperiencePage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let entries = RwSignal::new(Vec::<Experience>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if let Ok(fetched) = crate::net::api::list_experience(&client, &ListQuery::default()).await {
                entries.set(sorted_entries(fetched));
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
    }

    view! {
        <Title text="Experience" />
        <section class="page experience-page">
            <header class="page__header">
                <h1>"Experience"</h1>
                <p class="page__subtitle">"Where I have worked and what I did there."</p>
            </header>

            <input
                class="experience-page__search"
                type="search"
                placeholder="Search roles..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading experience..."</p> }
            >
                <ol class="timeline">
                    {move || {
                        visible_entries(&entries.get(), &search.get())
                            .into_iter()
                            .map(|entry| {
                                let period =
                                    period_label(&entry.start_date, entry.end_date.as_deref(), entry.current);
                                view! {
                                    <li class="timeline__item" class:timeline__item--current=entry.current>
                                        <div class="timeline__heading">
                                            <h2 class="timeline__title">{entry.position.clone()}</h2>
                                            <span class="timeline__period">{period}</span>
                                        </div>
                                        <p class="timeline__org">
                                            {entry.company.clone()}
                                            {entry
                                                .location
                                                .clone()
                                                .map(|location| format!(" · {location}"))
                                                .unwrap_or_default()}
                                        </p>
                                        <p class="timeline__description">{entry.description.clone()}</p>
                                        <ul class="timeline__tech">
                                            {entry
                                                .technologies
                                                .iter()
                                                .map(|tech| {
                                                    view! { <li class="timeline__tag">{tech.clone()}</li> }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ol>
            </Show>
        </section>
    }
}
