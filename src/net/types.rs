//! Wire DTOs for the portfolio REST API.
//!
//! DESIGN
//! ======
//! The backend wraps success payloads in a `data` envelope and uses
//! camelCase field names; these types mirror that shape so serde handles
//! the boundary and the rest of the client works with plain structs.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Standard success envelope: payloads are nested under `data`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

/// Login credentials. `identifier` accepts an email or a username.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub identifier: String,
    pub password: String,
}

/// Registration payload.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// An authenticated user record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl User {
    /// Display name: first name when present, otherwise the username.
    pub fn display_name(&self) -> &str {
        self.first_name.as_deref().filter(|name| !name.is_empty()).unwrap_or(&self.username)
    }
}

/// All-optional mirror of [`User`], used both as the profile-update request
/// body and as the response shape merged back into the session, so fields
/// the backend does not return are preserved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Payload returned by login and register.
#[derive(Clone, Debug, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

/// Payload wrapper for endpoints returning the full current user.
#[derive(Clone, Debug, Deserialize)]
pub struct UserPayload {
    pub user: User,
}

/// Payload wrapper for the profile-update response; parsed as a patch so
/// only the returned fields overwrite the session copy.
#[derive(Clone, Debug, Deserialize)]
pub struct UserPatchPayload {
    pub user: UserPatch,
}

/// A portfolio project entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    pub category: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub views: i64,
    #[serde(default)]
    pub likes: i64,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl Project {
    /// Category options offered by the admin form and the public filter.
    pub const CATEGORIES: &'static [&'static str] = &[
        "Web Development",
        "Mobile Development",
        "Desktop Application",
        "Data Science",
        "Machine Learning",
        "Game Development",
        "DevOps",
        "UI/UX Design",
    ];

    /// Lifecycle states offered by the admin form.
    pub const STATUSES: &'static [&'static str] = &["Planning", "In Progress", "Completed", "On Hold"];
}

/// Client-side project form payload for create and update.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDraft {
    pub title: String,
    pub short_description: String,
    pub description: String,
    pub category: String,
    pub technologies: Vec<String>,
    pub github_url: String,
    pub live_url: String,
    pub status: String,
    pub start_date: String,
    pub end_date: String,
    pub is_featured: bool,
}

impl ProjectDraft {
    /// Prefill the form from an existing project for editing.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            short_description: project.short_description.clone(),
            description: project.description.clone(),
            category: project.category.clone(),
            technologies: project.technologies.clone(),
            github_url: project.github_url.clone().unwrap_or_default(),
            live_url: project.live_url.clone().unwrap_or_default(),
            status: project.status.clone(),
            start_date: project.start_date.clone().unwrap_or_default(),
            end_date: project.end_date.clone().unwrap_or_default(),
            is_featured: project.is_featured,
        }
    }
}

/// A skill entry with a 0–100 proficiency.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub proficiency: u8,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// A work-experience entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Experience {
    pub id: String,
    pub position: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub order: i32,
}

/// An education entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Education {
    pub id: String,
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub field_of_study: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    pub start_date: String,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub gpa: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub order: i32,
}

/// Contact-form submission.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Optional query parameters accepted by the list endpoints.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub category: Option<String>,
    pub search: Option<String>,
    pub featured: Option<bool>,
    pub limit: Option<u32>,
}

impl ListQuery {
    pub fn featured(limit: u32) -> Self {
        Self { featured: Some(true), limit: Some(limit), ..Self::default() }
    }
}
