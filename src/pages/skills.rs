//! Skills page: proficiency bars grouped by category.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::net::http::ApiClient;
#[cfg(feature = "csr")]
use crate::net::types::ListQuery;
use crate::net::types::Skill;
use crate::util::filter::{ALL_CATEGORY, matches_category};

/// Group skills by category, categories alphabetical, skills within a
/// category by priority (highest first) then name.
pub fn group_by_category(skills: &[Skill], selected: &str) -> Vec<(String, Vec<Skill>)> {
    let mut groups: Vec<(String, Vec<Skill>)> = Vec::new();
    for skill in skills {
        if !matches_category(&skill.category, selected) {
            continue;
        }
        match groups.iter_mut().find(|(name, _)| *name == skill.category) {
            Some((_, members)) => members.push(skill.clone()),
            None => groups.push((skill.category.clone(), vec![skill.clone()])),
        }
    }
    groups.sort_by(|a, b| a.0.cmp(&b.0));
    for (_, members) in &mut groups {
        members.sort_by(|a, b| b.priority.cmp(&a.priority).then_with(|| a.name.cmp(&b.name)));
    }
    groups
}

/// Distinct categories present in the fetched list, alphabetical.
pub fn categories_of(skills: &[Skill]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for skill in skills {
        if !seen.contains(&skill.category) {
            seen.push(skill.category.clone());
        }
    }
    seen.sort();
    seen
}

#[component]
pub fn SkillsPage() -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let skills = RwSignal::new(Vec::<Skill>::new());
    let loading = RwSignal::new(true);
    let category = RwSignal::new(ALL_CATEGORY.to_owned());

    #[cfg(feature = "csr")]
    {
        let client = client.clone();
        leptos::task::spawn_local(async move {
            if let Ok(fetched) = crate::net::api::list_skills(&client, &ListQuery::default()).await {
                skills.set(fetched);
            }
            loading.set(false);
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = client;
    }

    view! {
        <Title text="Skills" />
        <section class="page skills-page">
            <header class="page__header">
                <h1>"Skills"</h1>
                <p class="page__subtitle">"Tools and technologies I work with."</p>
            </header>

            <div class="skills-page__filters">
                <select
                    class="skills-page__category"
                    prop:value=move || category.get()
                    on:change=move |ev| category.set(event_target_value(&ev))
                >
                    <option value=ALL_CATEGORY>{ALL_CATEGORY}</option>
                    {move || {
                        categories_of(&skills.get())
                            .into_iter()
                            .map(|name| view! { <option value=name.clone()>{name.clone()}</option> })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading skills..."</p> }
            >
                <div class="skills-page__groups">
                    {move || {
                        group_by_category(&skills.get(), &category.get())
                            .into_iter()
                            .map(|(name, members)| {
                                view! {
                                    <div class="skills-page__group">
                                        <h2 class="skills-page__group-title">{name}</h2>
                                        <ul class="skills-page__list">
                                            {members
                                                .into_iter()
                                                .map(|skill| {
                                                    let width = format!("width: {}%", skill.proficiency.min(100));
                                                    view! {
                                                        <li class="skill-row">
                                                            <span class="skill-row__name">{skill.name.clone()}</span>
                                                            <span class="skill-row__bar">
                                                                <span class="skill-row__fill" style=width></span>
                                                            </span>
                                                            <span class="skill-row__value">
                                                                {format!("{}%", skill.proficiency.min(100))}
                                                            </span>
                                                        </li>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </ul>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </Show>
        </section>
    }
}
