//! Create/edit form for project entries.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the dashboard as a modal dialog. Validation runs client-side
//! first; backend 422 responses still surface through the HTTP layer's
//! field-tagged toasts.

#[cfg(test)]
#[path = "project_form_test.rs"]
mod project_form_test;

use leptos::prelude::*;

#[cfg(feature = "csr")]
use crate::net::api;
use crate::net::http::ApiClient;
use crate::net::types::{Project, ProjectDraft};
#[cfg(feature = "csr")]
use crate::state::toast::ToastLevel;
use crate::state::toast::ToastState;
use crate::util::validate::{date_order_ok, is_blank};

/// Field-level validation failures keyed by wire field name.
pub type DraftErrors = Vec<(&'static str, &'static str)>;

/// Validate a draft before submission. Empty means submittable.
pub fn validate_draft(draft: &ProjectDraft) -> DraftErrors {
    let mut errors = DraftErrors::new();
    if is_blank(&draft.title) {
        errors.push(("title", "Title is required"));
    }
    if is_blank(&draft.short_description) {
        errors.push(("shortDescription", "Short description is required"));
    }
    if is_blank(&draft.description) {
        errors.push(("description", "Description is required"));
    }
    if is_blank(&draft.category) {
        errors.push(("category", "Category is required"));
    }
    if is_blank(&draft.start_date) {
        errors.push(("startDate", "Start date is required"));
    }
    if !date_order_ok(&draft.start_date, &draft.end_date) {
        errors.push(("endDate", "End date cannot be before start date"));
    }
    if draft.technologies.is_empty() {
        errors.push(("technologies", "Add at least one technology"));
    }
    errors
}

/// Look up the message recorded for `field`, if any.
pub fn error_for(errors: &DraftErrors, field: &str) -> Option<&'static str> {
    errors.iter().find(|(name, _)| *name == field).map(|(_, message)| *message)
}

/// Add a trimmed technology tag. Rejects blanks and duplicates.
pub fn add_technology(list: &mut Vec<String>, value: &str) -> bool {
    let value = value.trim();
    if value.is_empty() || list.iter().any(|existing| existing == value) {
        return false;
    }
    list.push(value.to_owned());
    true
}

/// Remove a technology tag.
pub fn remove_technology(list: &mut Vec<String>, value: &str) {
    list.retain(|existing| existing != value);
}

fn empty_draft() -> ProjectDraft {
    ProjectDraft {
        category: Project::CATEGORIES[0].to_owned(),
        status: Project::STATUSES[0].to_owned(),
        ..ProjectDraft::default()
    }
}

/// Modal form for creating or editing a project. `existing` switches the
/// form into edit mode.
#[component]
pub fn ProjectForm(
    #[prop(optional)] existing: Option<Project>,
    on_saved: Callback<Project>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let client = expect_context::<ApiClient>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editing_id = existing.as_ref().map(|project| project.id.clone());
    let is_edit = editing_id.is_some();
    let draft = RwSignal::new(existing.as_ref().map_or_else(empty_draft, ProjectDraft::from_project));
    let errors = RwSignal::new(DraftErrors::new());
    let new_tech = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let submit_ctx = StoredValue::new((client, editing_id));

    let on_add_tech = move |_| {
        let value = new_tech.get();
        draft.update(|draft| {
            add_technology(&mut draft.technologies, &value);
        });
        new_tech.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let current = draft.get();
        let found = validate_draft(&current);
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        errors.set(DraftErrors::new());
        busy.set(true);
        #[cfg(feature = "csr")]
        {
            let (client, editing_id) = submit_ctx.get_value();
            leptos::task::spawn_local(async move {
                let result = match editing_id.as_deref() {
                    Some(id) => api::update_project(&client, id, &current).await,
                    None => api::create_project(&client, &current).await,
                };
                if let Ok(project) = result {
                    let verb = if editing_id.is_some() { "updated" } else { "created" };
                    toasts.update(|toasts| {
                        toasts.push(ToastLevel::Success, format!("Project {verb} successfully!"));
                    });
                    on_saved.run(project);
                }
                // failures were already surfaced by the HTTP layer
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&submit_ctx, &toasts, &on_saved);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>{if is_edit { "Edit Project" } else { "New Project" }}</h2>
                <form class="project-form" on:submit=on_submit>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            class:dialog__input--error=move || error_for(&errors.get(), "title").is_some()
                            type="text"
                            prop:value=move || draft.get().title
                            on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                        />
                    </label>
                    <FieldError errors=errors field="title" />

                    <label class="dialog__label">
                        "Short description"
                        <input
                            class="dialog__input"
                            class:dialog__input--error=move || {
                                error_for(&errors.get(), "shortDescription").is_some()
                            }
                            type="text"
                            prop:value=move || draft.get().short_description
                            on:input=move |ev| {
                                draft.update(|d| d.short_description = event_target_value(&ev));
                            }
                        />
                    </label>
                    <FieldError errors=errors field="shortDescription" />

                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input dialog__input--multiline"
                            class:dialog__input--error=move || {
                                error_for(&errors.get(), "description").is_some()
                            }
                            prop:value=move || draft.get().description
                            on:input=move |ev| draft.update(|d| d.description = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <FieldError errors=errors field="description" />

                    <div class="project-form__row">
                        <label class="dialog__label">
                            "Category"
                            <select
                                class="dialog__input"
                                prop:value=move || draft.get().category
                                on:change=move |ev| draft.update(|d| d.category = event_target_value(&ev))
                            >
                                {Project::CATEGORIES
                                    .iter()
                                    .map(|category| view! { <option value=*category>{*category}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="dialog__label">
                            "Status"
                            <select
                                class="dialog__input"
                                prop:value=move || draft.get().status
                                on:change=move |ev| draft.update(|d| d.status = event_target_value(&ev))
                            >
                                {Project::STATUSES
                                    .iter()
                                    .map(|status| view! { <option value=*status>{*status}</option> })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                    </div>

                    <label class="dialog__label">
                        "Technologies"
                        <span class="project-form__tech-entry">
                            <input
                                class="dialog__input"
                                type="text"
                                placeholder="e.g. Rust"
                                prop:value=move || new_tech.get()
                                on:input=move |ev| new_tech.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        on_add_tech(());
                                    }
                                }
                            />
                            <button class="btn" type="button" on:click=move |_| on_add_tech(())>
                                "Add"
                            </button>
                        </span>
                    </label>
                    <FieldError errors=errors field="technologies" />
                    <ul class="project-form__tags">
                        {move || {
                            draft
                                .get()
                                .technologies
                                .into_iter()
                                .map(|tech| {
                                    let label = tech.clone();
                                    view! {
                                        <li class="project-form__tag">
                                            {label}
                                            <button
                                                class="project-form__tag-remove"
                                                type="button"
                                                aria-label="Remove technology"
                                                on:click=move |_| {
                                                    let tech = tech.clone();
                                                    draft.update(|d| remove_technology(&mut d.technologies, &tech));
                                                }
                                            >
                                                "✕"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>

                    <div class="project-form__row">
                        <label class="dialog__label">
                            "GitHub URL"
                            <input
                                class="dialog__input"
                                type="url"
                                prop:value=move || draft.get().github_url
                                on:input=move |ev| draft.update(|d| d.github_url = event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "Live URL"
                            <input
                                class="dialog__input"
                                type="url"
                                prop:value=move || draft.get().live_url
                                on:input=move |ev| draft.update(|d| d.live_url = event_target_value(&ev))
                            />
                        </label>
                    </div>

                    <div class="project-form__row">
                        <label class="dialog__label">
                            "Start date"
                            <input
                                class="dialog__input"
                                class:dialog__input--error=move || {
                                    error_for(&errors.get(), "startDate").is_some()
                                }
                                type="date"
                                prop:value=move || draft.get().start_date
                                on:input=move |ev| draft.update(|d| d.start_date = event_target_value(&ev))
                            />
                        </label>
                        <label class="dialog__label">
                            "End date"
                            <input
                                class="dialog__input"
                                class:dialog__input--error=move || {
                                    error_for(&errors.get(), "endDate").is_some()
                                }
                                type="date"
                                prop:value=move || draft.get().end_date
                                on:input=move |ev| draft.update(|d| d.end_date = event_target_value(&ev))
                            />
                        </label>
                    </div>
                    <FieldError errors=errors field="startDate" />
                    <FieldError errors=errors field="endDate" />

                    <label class="project-form__featured">
                        <input
                            type="checkbox"
                            prop:checked=move || draft.get().is_featured
                            on:change=move |ev| {
                                draft.update(|d| d.is_featured = event_target_checked(&ev));
                            }
                        />
                        "Featured project"
                    </label>

                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || {
                                if busy.get() {
                                    "Saving..."
                                } else if is_edit {
                                    "Save Changes"
                                } else {
                                    "Create Project"
                                }
                            }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Inline message for one validated field.
#[component]
fn FieldError(errors: RwSignal<DraftErrors>, field: &'static str) -> impl IntoView {
    view! {
        <Show when=move || error_for(&errors.get(), field).is_some()>
            <span class="form-error">{move || error_for(&errors.get(), field).unwrap_or_default()}</span>
        </Show>
    }
}
