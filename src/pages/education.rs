//! Education page: studies timeline with a search filter.

#[cfg(test)]
#[path = "education_test.rs"]
mod education_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::http::ApiClient;
use crate::net::types::Education;
#[cfg(feature = "csr")]
use crate::net::types::ListQuery;
use crate::pages::experience::period_label;
use crate::util::filter::matches_search;

/// Order entries for display: explicit `order` first, then most recent
/// start date.
pub fn sorted_entries(mut entries: Vec<Education>) -> Vec<Education> {
    entries.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| b.start_date.cmp(&a.start_date)));
    entries
}

/// Entries matching the search term over degree, institution, and field.
pub fn visible_entries(entries: &[Education], term: &str) -> Vec<Education> {
    entries
        .iter()
        .filter(|entry| {
            matches_search(
                &[&entry.degree, &entry.institution, entry.field_of_study.as_deref().unwrap_or("")],
                term,
            )
        })
        .cloned()
        .collect()
}

#[component]
pub fn EducationPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let entries = RwSignal::new(Vec::<Education>::new());
    let loading = RwSignal::new(true);
    let search = RwSignal::new(String::new());

    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if let Ok(fetched) = crate::net::api::list_education(&client, &ListQuery::default()).await {
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
        <Title text="Education" />
        <section class="page education-page">
            <header class="page__header">
                <h1>"Education"</h1>
                <p class="page__subtitle">"Degrees, programs, and formal training."</p>
            </header>

            <input
                class="education-page__search"
                type="search"
                placeholder="Search studies..."
                prop:value=move || search.get()
                on:input=move |ev| search.set(event_target_value(&ev))
            />

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading education..."</p> }
            >
                <ol class="timeline">
                    {move || {
                        visible_entries(&entries.get(), &search.get())
                            .into_iter()
                            .map(|entry| {
                                let period = period_label(&entry.start_date, entry.end_date.as_deref(), false);
                                view! {
                                    <li class="timeline__item">
                                        <div class="timeline__heading">
                                            <h2 class="timeline__title">{entry.degree.clone()}</h2>
                                            <span class="timeline__period">{period}</span>
                                        </div>
                                        <p class="timeline__org">
                                            {entry.institution.clone()}
                                            {entry
                                                .field_of_study
                                                .clone()
                                                .map(|field| format!(" · {field}"))
                                                .unwrap_or_default()}
                                        </p>
                                        {entry
                                            .gpa
                                            .clone()
                                            .map(|gpa| {
                                                view! { <p class="timeline__gpa">{format!("GPA: {gpa}")}</p> }
                                            })}
                                        {entry
                                            .description
                                            .clone()
                                            .map(|description| {
                                                view! { <p class="timeline__description">{description}</p> }
                                            })}
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
