//! Dashboard page: stats overview and project CRUD for the signed-in owner.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route, rendered behind `RequireAuth`.
//! It fetches the owner's projects once on entry and keeps the list in sync
//! locally after create/update/delete instead of refetching.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::project_form::ProjectForm;
#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::http::ApiClient;
#[cfg(feature = "csr")]
use crate::net::types::ListQuery;
use crate::net::types::Project;
use crate::state::session::SessionStore;
#[cfg(feature = "csr")]
use crate::state::toast::ToastLevel;
use crate::state::toast::ToastState;

/// Aggregate figures shown in the stats strip.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub total: usize,
    pub completed: usize,
    pub total_views: i64,
    pub total_likes: i64,
}

/// Compute the stats strip from the owner's project list.
pub fn summarize(projects: &[Project]) -> DashboardStats {
    DashboardStats {
        total: projects.len(),
        completed: projects.iter().filter(|p| p.status == "Completed").count(),
        total_views: projects.iter().map(|p| p.views).sum(),
        total_likes: projects.iter().map(|p| p.likes).sum(),
    }
}

/// Replace the project with the same id, or prepend a new one.
pub fn upsert_project(projects: &mut Vec<Project>, project: Project) {
    match projects.iter_mut().find(|existing| existing.id == project.id) {
        Some(existing) => *existing = project,
        None => projects.insert(0, project),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let state = expect_context::<SessionStore>().state();
    let client = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let show_form = RwSignal::new(false);
    let editing = RwSignal::new(None::<Project>);
    let delete_pending = RwSignal::new(None::<Project>);
    let action_ctx = StoredValue::new(client);

    #[cfg(feature = "csr")]
    {
        let client = action_ctx.get_value();
        leptos::task::spawn_local(async move {
            if let Ok(fetched) = api::list_my_projects(&client, &ListQuery::default()).await {
                projects.set(fetched);
            }
            loading.set(false);
        });
    }

    let greeting = move || {
        state
            .get()
            .user
            .map(|user| format!("Welcome back, {}!", user.display_name()))
            .unwrap_or_else(|| "Welcome back!".to_owned())
    };

    let on_new = move |_| {
        editing.set(None);
        show_form.set(true);
    };
    let on_cancel = Callback::new(move |()| show_form.set(false));
    let on_saved = Callback::new(move |project: Project| {
        projects.update(|list| upsert_project(list, project));
        show_form.set(false);
    });
    let on_delete_cancel = Callback::new(move |()| delete_pending.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(project) = delete_pending.get_untracked() else {
            return;
        };
        #[cfg(feature = "csr")]
        {
            let client = action_ctx.get_value();
            leptos::task::spawn_local(async move {
                if api::delete_project(&client, &project.id).await.is_ok() {
                    projects.update(|list| list.retain(|existing| existing.id != project.id));
                    toasts.update(|toasts| {
                        toasts.push(ToastLevel::Success, "Project deleted successfully!");
                    });
                }
                delete_pending.set(None);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&project, &action_ctx, &toasts);
        }
    });

    let stats = move || summarize(&projects.get());

    view! {
        <Title text="Dashboard" />
        <section class="page dashboard-page">
            <header class="dashboard-page__header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="dashboard-page__greeting">{greeting}</p>
                </div>
                <button class="btn btn--primary" on:click=on_new>
                    "+ New Project"
                </button>
            </header>

            <div class="dashboard-page__stats">
                <div class="stat-card">
                    <span class="stat-card__value">{move || stats().total}</span>
                    <span class="stat-card__label">"Projects"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{move || stats().completed}</span>
                    <span class="stat-card__label">"Completed"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{move || stats().total_views}</span>
                    <span class="stat-card__label">"Total views"</span>
                </div>
                <div class="stat-card">
                    <span class="stat-card__value">{move || stats().total_likes}</span>
                    <span class="stat-card__label">"Total likes"</span>
                </div>
            </div>

            <Show
                when=move || !loading.get()
                fallback=move || view! { <p class="page__loading">"Loading your projects..."</p> }
            >
                <Show
                    when=move || !projects.get().is_empty()
                    fallback=move || {
                        view! {
                            <p class="page__empty">"No projects yet. Create your first one."</p>
                        }
                    }
                >
                    <table class="dashboard-page__table">
                        <thead>
                            <tr>
                                <th>"Title"</th>
                                <th>"Category"</th>
                                <th>"Status"</th>
                                <th>"Views"</th>
                                <th>"Likes"</th>
                                <th>"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                projects
                                    .get()
                                    .into_iter()
                                    .map(|project| {
                                        let edit_target = project.clone();
                                        let delete_target = project.clone();
                                        view! {
                                            <tr>
                                                <td class="dashboard-page__cell-title">{project.title.clone()}</td>
                                                <td>{project.category.clone()}</td>
                                                <td>{project.status.clone()}</td>
                                                <td>{project.views}</td>
                                                <td>{project.likes}</td>
                                                <td class="dashboard-page__actions">
                                                    <button
                                                        class="btn btn--small"
                                                        on:click=move |_| {
                                                            editing.set(Some(edit_target.clone()));
                                                            show_form.set(true);
                                                        }
                                                    >
                                                        "Edit"
                                                    </button>
                                                    <button
                                                        class="btn btn--small btn--danger"
                                                        on:click=move |_| {
                                                            delete_pending.set(Some(delete_target.clone()));
                                                        }
                                                    >
                                                        "Delete"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </tbody>
                    </table>
                </Show>
            </Show>

            <Show when=move || show_form.get()>
                {move || match editing.get_untracked() {
                    Some(project) => {
                        view! { <ProjectForm existing=project on_saved=on_saved on_cancel=on_cancel /> }
                            .into_any()
                    }
                    None => {
                        view! { <ProjectForm on_saved=on_saved on_cancel=on_cancel /> }.into_any()
                    }
                }}
            </Show>

            <Show when=move || delete_pending.get().is_some()>
                <DeleteProjectDialog
                    title=move || {
                        delete_pending.get().map(|project| project.title).unwrap_or_default()
                    }
                    on_cancel=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </section>
    }
}

/// Confirmation dialog shown before a project is deleted.
#[component]
fn DeleteProjectDialog(
    title: impl Fn() -> String + Send + Sync + 'static,
    on_cancel: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Delete Project"</h2>
                <p class="dialog__danger">
                    {move || format!("This will permanently delete \"{}\".", title())}
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--danger" on:click=move |_| on_confirm.run(())>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
