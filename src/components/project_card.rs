//! Card component for public project listings.
//!
//! DESIGN
//! ======
//! Keeps project presentation consistent between the projects page and the
//! home-page preview strip.

use leptos::prelude::*;

use crate::net::types::Project;

/// A project summary card with tech tags and outbound links.
#[component]
pub fn ProjectCard(project: Project) -> impl IntoView {
    let status_class = format!(
        "project-card__status project-card__status--{}",
        project.status.to_lowercase().replace(' ', "-")
    );
    let image = project.image.clone().map(|url| {
        view! { <img class="project-card__image" src=url alt=project.title.clone() /> }
    });

    view! {
        <article class="project-card" class:project-card--featured=project.is_featured>
            {image}
            <div class="project-card__body">
                <header class="project-card__header">
                    <h3 class="project-card__title">{project.title.clone()}</h3>
                    <span class=status_class>{project.status.clone()}</span>
                </header>
                <p class="project-card__summary">{project.short_description.clone()}</p>
                <ul class="project-card__tech">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <li class="project-card__tag">{tech.clone()}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <footer class="project-card__footer">
                    <span class="project-card__category">{project.category.clone()}</span>
                    <span class="project-card__stats">
                        {format!("{} views · {} likes", project.views, project.likes)}
                    </span>
                    <span class="project-card__links">
                        {project
                            .github_url
                            .clone()
                            .map(|url| {
                                view! {
                                    <a class="project-card__link" href=url target="_blank" rel="noreferrer">
                                        "Code"
                                    </a>
                                }
                            })}
                        {project
                            .live_url
                            .clone()
                            .map(|url| {
                                view! {
                                    <a class="project-card__link" href=url target="_blank" rel="noreferrer">
                                        "Live"
                                    </a>
                                }
                            })}
                    </span>
                </footer>
            </div>
        </article>
    }
}
