//! REST endpoint wrappers for the portfolio backend.
//!
//! Thin typed functions over [`ApiClient`]: one per endpoint, unwrapping the
//! `data` envelope so callers receive domain types. Failure notifications
//! happen inside the client; callers only need local recovery.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{
    AuthPayload, ContactMessage, Credentials, Education, Envelope, Experience, ListQuery, Project,
    ProjectDraft, RegisterData, Skill, User, UserPatch, UserPatchPayload, UserPayload,
};

// ---------------------------------------------------------------------------
// Auth

/// Authenticate with an identifier/password pair via `POST /auth/login`.
pub async fn login(client: &ApiClient, credentials: &Credentials) -> Result<AuthPayload, ApiError> {
    let envelope: Envelope<AuthPayload> = client.post("/auth/login", credentials).await?;
    Ok(envelope.data)
}

/// Create an account via `POST /auth/register`.
pub async fn register(client: &ApiClient, data: &RegisterData) -> Result<AuthPayload, ApiError> {
    let envelope: Envelope<AuthPayload> = client.post("/auth/register", data).await?;
    Ok(envelope.data)
}

/// Fetch the currently authenticated user via `GET /auth/me`.
pub async fn fetch_current_user(client: &ApiClient) -> Result<User, ApiError> {
    let envelope: Envelope<UserPayload> = client.get("/auth/me").await?;
    Ok(envelope.data.user)
}

/// Update the current user's profile via `PUT /auth/me`. Returns the fields
/// the backend echoed back, as a patch.
pub async fn update_current_user(client: &ApiClient, patch: &UserPatch) -> Result<UserPatch, ApiError> {
    let envelope: Envelope<UserPatchPayload> = client.put("/auth/me", patch).await?;
    Ok(envelope.data.user)
}

// ---------------------------------------------------------------------------
// Projects

/// Fetch public projects via `GET /projects`.
pub async fn list_projects(client: &ApiClient, query: &ListQuery) -> Result<Vec<Project>, ApiError> {
    let envelope: Envelope<Vec<Project>> =
        client.get(&format!("/projects{}", query_string(query))).await?;
    Ok(envelope.data)
}

/// Fetch the authenticated owner's projects via `GET /projects/me`.
pub async fn list_my_projects(client: &ApiClient, query: &ListQuery) -> Result<Vec<Project>, ApiError> {
    let envelope: Envelope<Vec<Project>> =
        client.get(&format!("/projects/me{}", query_string(query))).await?;
    Ok(envelope.data)
}

/// Fetch one project via `GET /projects/:id`.
pub async fn fetch_project(client: &ApiClient, id: &str) -> Result<Project, ApiError> {
    let envelope: Envelope<Project> = client.get(&project_endpoint(id)).await?;
    Ok(envelope.data)
}

/// Create a project via `POST /projects`.
pub async fn create_project(client: &ApiClient, draft: &ProjectDraft) -> Result<Project, ApiError> {
    let envelope: Envelope<Project> = client.post("/projects", draft).await?;
    Ok(envelope.data)
}

/// Update a project via `PUT /projects/:id`.
pub async fn update_project(client: &ApiClient, id: &str, draft: &ProjectDraft) -> Result<Project, ApiError> {
    let envelope: Envelope<Project> = client.put(&project_endpoint(id), draft).await?;
    Ok(envelope.data)
}

/// Delete a project via `DELETE /projects/:id`.
pub async fn delete_project(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let _: Envelope<serde_json::Value> = client.delete(&project_endpoint(id)).await?;
    Ok(())
}

/// Like a project via `PUT /projects/:id/like`. Returns the updated record.
pub async fn like_project(client: &ApiClient, id: &str) -> Result<Project, ApiError> {
    let envelope: Envelope<Project> =
        client.put(&project_like_endpoint(id), &serde_json::json!({})).await?;
    Ok(envelope.data)
}

// ---------------------------------------------------------------------------
// Skills

/// Fetch public skills via `GET /skills`.
pub async fn list_skills(client: &ApiClient, query: &ListQuery) -> Result<Vec<Skill>, ApiError> {
    let envelope: Envelope<Vec<Skill>> = client.get(&format!("/skills{}", query_string(query))).await?;
    Ok(envelope.data)
}

/// Fetch the authenticated owner's skills via `GET /skills/me`.
pub async fn list_my_skills(client: &ApiClient, query: &ListQuery) -> Result<Vec<Skill>, ApiError> {
    let envelope: Envelope<Vec<Skill>> =
        client.get(&format!("/skills/me{}", query_string(query))).await?;
    Ok(envelope.data)
}

/// Fetch the known skill categories via `GET /skills/categories`.
pub async fn skill_categories(client: &ApiClient) -> Result<Vec<String>, ApiError> {
    let envelope: Envelope<Vec<String>> = client.get("/skills/categories").await?;
    Ok(envelope.data)
}

/// Create a skill via `POST /skills`.
pub async fn create_skill(client: &ApiClient, skill: &Skill) -> Result<Skill, ApiError> {
    let envelope: Envelope<Skill> = client.post("/skills", skill).await?;
    Ok(envelope.data)
}

/// Update a skill via `PUT /skills/:id`.
pub async fn update_skill(client: &ApiClient, id: &str, skill: &Skill) -> Result<Skill, ApiError> {
    let envelope: Envelope<Skill> = client.put(&skill_endpoint(id), skill).await?;
    Ok(envelope.data)
}

/// Delete a skill via `DELETE /skills/:id`.
pub async fn delete_skill(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let _: Envelope<serde_json::Value> = client.delete(&skill_endpoint(id)).await?;
    Ok(())
}

/// Reorder a skill via `PUT /skills/:id/priority`.
pub async fn set_skill_priority(client: &ApiClient, id: &str, priority: i32) -> Result<Skill, ApiError> {
    let envelope: Envelope<Skill> =
        client.put(&skill_priority_endpoint(id), &serde_json::json!({ "priority": priority })).await?;
    Ok(envelope.data)
}

// ---------------------------------------------------------------------------
// Experience

/// Fetch public experience entries via `GET /experience`.
pub async fn list_experience(client: &ApiClient, query: &ListQuery) -> Result<Vec<Experience>, ApiError> {
    let envelope: Envelope<Vec<Experience>> =
        client.get(&format!("/experience{}", query_string(query))).await?;
    Ok(envelope.data)
}

/// Fetch the authenticated owner's experience via `GET /experience/me`.
pub async fn list_my_experience(client: &ApiClient, query: &ListQuery) -> Result<Vec<Experience>, ApiError> {
    let envelope: Envelope<Vec<Experience>> =
        client.get(&format!("/experience/me{}", query_string(query))).await?;
    Ok(envelope.data)
}

/// Create an experience entry via `POST /experience`.
pub async fn create_experience(client: &ApiClient, entry: &Experience) -> Result<Experience, ApiError> {
    let envelope: Envelope<Experience> = client.post("/experience", entry).await?;
    Ok(envelope.data)
}

/// Update an experience entry via `PUT /experience/:id`.
pub async fn update_experience(client: &ApiClient, id: &str, entry: &Experience) -> Result<Experience, ApiError> {
    let envelope: Envelope<Experience> = client.put(&experience_endpoint(id), entry).await?;
    Ok(envelope.data)
}

/// Delete an experience entry via `DELETE /experience/:id`.
pub async fn delete_experience(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let _: Envelope<serde_json::Value> = client.delete(&experience_endpoint(id)).await?;
    Ok(())
}

/// Reorder an experience entry via `PUT /experience/:id/order`.
pub async fn set_experience_order(client: &ApiClient, id: &str, order: i32) -> Result<Experience, ApiError> {
    let envelope: Envelope<Experience> =
        client.put(&experience_order_endpoint(id), &serde_json::json!({ "order": order })).await?;
    Ok(envelope.data)
}

// ---------------------------------------------------------------------------
// Education

/// Fetch public education entries via `GET /education`.
pub async fn list_education(client: &ApiClient, query: &ListQuery) -> Result<Vec<Education>, ApiError> {
    let envelope: Envelope<Vec<Education>> =
        client.get(&format!("/education{}", query_string(query))).await?;
    Ok(envelope.data)
}

/// Fetch the authenticated owner's education via `GET /education/me`.
pub async fn list_my_education(client: &ApiClient, query: &ListQuery) -> Result<Vec<Education>, ApiError> {
    let envelope: Envelope<Vec<Education>> =
        client.get(&format!("/education/me{}", query_string(query))).await?;
    Ok(envelope.data)
}

/// Create an education entry via `POST /education`.
pub async fn create_education(client: &ApiClient, entry: &Education) -> Result<Education, ApiError> {
    let envelope: Envelope<Education> = client.post("/education", entry).await?;
    Ok(envelope.data)
}

/// Update an education entry via `PUT /education/:id`.
pub async fn update_education(client: &ApiClient, id: &str, entry: &Education) -> Result<Education, ApiError> {
    let envelope: Envelope<Education> = client.put(&education_endpoint(id), entry).await?;
    Ok(envelope.data)
}

/// Delete an education entry via `DELETE /education/:id`.
pub async fn delete_education(client: &ApiClient, id: &str) -> Result<(), ApiError> {
    let _: Envelope<serde_json::Value> = client.delete(&education_endpoint(id)).await?;
    Ok(())
}

/// Reorder an education entry via `PUT /education/:id/order`.
pub async fn set_education_order(client: &ApiClient, id: &str, order: i32) -> Result<Education, ApiError> {
    let envelope: Envelope<Education> =
        client.put(&education_order_endpoint(id), &serde_json::json!({ "order": order })).await?;
    Ok(envelope.data)
}

// ---------------------------------------------------------------------------
// Contact & health

/// Submit the contact form via `POST /contact`.
pub async fn send_contact_message(client: &ApiClient, message: &ContactMessage) -> Result<(), ApiError> {
    let _: Envelope<serde_json::Value> = client.post("/contact", message).await?;
    Ok(())
}

/// Probe the contact service via `GET /contact/health`.
pub async fn contact_health(client: &ApiClient) -> Result<serde_json::Value, ApiError> {
    client.get("/contact/health").await
}

/// Probe the API via `GET /health`.
pub async fn api_health(client: &ApiClient) -> Result<serde_json::Value, ApiError> {
    client.get("/health").await
}

/// Upload a file via multipart `POST /upload`. Returns the stored URL.
#[cfg(feature = "csr")]
pub async fn upload_file(client: &ApiClient, file: &web_sys::File) -> Result<String, ApiError> {
    #[derive(serde::Deserialize)]
    struct UploadPayload {
        url: String,
    }
    let form = web_sys::FormData::new().map_err(|_| ApiError::Network)?;
    form.append_with_blob("file", file).map_err(|_| ApiError::Network)?;
    let envelope: Envelope<UploadPayload> = client.post_form("/upload", &form).await?;
    Ok(envelope.data.url)
}

// ---------------------------------------------------------------------------
// Path helpers

fn project_endpoint(id: &str) -> String {
    format!("/projects/{id}")
}

fn project_like_endpoint(id: &str) -> String {
    format!("/projects/{id}/like")
}

fn skill_endpoint(id: &str) -> String {
    format!("/skills/{id}")
}

fn skill_priority_endpoint(id: &str) -> String {
    format!("/skills/{id}/priority")
}

fn experience_endpoint(id: &str) -> String {
    format!("/experience/{id}")
}

fn experience_order_endpoint(id: &str) -> String {
    format!("/experience/{id}/order")
}

fn education_endpoint(id: &str) -> String {
    format!("/education/{id}")
}

fn education_order_endpoint(id: &str) -> String {
    format!("/education/{id}/order")
}

/// Render list-query parameters as a query string, empty when no parameter
/// is set.
fn query_string(query: &ListQuery) -> String {
    let mut pairs: Vec<String> = Vec::new();
    if let Some(category) = query.category.as_deref().filter(|c| !c.is_empty()) {
        pairs.push(format!("category={}", encode_component(category)));
    }
    if let Some(search) = query.search.as_deref().filter(|s| !s.is_empty()) {
        pairs.push(format!("search={}", encode_component(search)));
    }
    if let Some(featured) = query.featured {
        pairs.push(format!("featured={featured}"));
    }
    if let Some(limit) = query.limit {
        pairs.push(format!("limit={limit}"));
    }
    if pairs.is_empty() { String::new() } else { format!("?{}", pairs.join("&")) }
}

/// Percent-encode a query or path component. Unreserved ASCII passes
/// through; everything else is encoded bytewise.
pub fn encode_component(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => out.push(byte as char),
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
