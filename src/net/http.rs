//! HTTP chokepoint for the portfolio REST backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! All REST traffic flows through [`ApiClient`] so bearer-token injection,
//! timeout handling, and failure side effects live in one place. The client
//! never touches the router or the toaster directly: the application shell
//! injects a notify hook and an unauthorized hook at startup, which keeps
//! this layer unit-testable in isolation.
//!
//! Client-side (`csr`): real HTTP via `gloo-net`. Native builds: stubs
//! returning [`ApiError::Network`] so the pure logic compiles and tests.

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::net::error::ApiError;
#[cfg(any(test, feature = "csr"))]
use crate::net::error::FailurePlan;
#[cfg(feature = "csr")]
use crate::net::error::{ErrorBody, is_login_path};
use crate::state::toast::ToastLevel;
#[cfg(feature = "csr")]
use crate::util::storage;

/// Hook invoked with every user-facing notification the client emits.
pub type NotifyHook = Arc<dyn Fn(ToastLevel, &str) + Send + Sync>;

/// Hook invoked after a 401 response has wiped the attached credential.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// Fixed request timeout. Expiry is reported as a network failure.
#[cfg(feature = "csr")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Shared REST client. Cheap to clone; all clones see the same attached
/// credential and hooks.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<Inner>,
}

struct Inner {
    base_url: String,
    token: RwLock<Option<String>>,
    notify: RwLock<Option<NotifyHook>>,
    unauthorized: RwLock<Option<UnauthorizedHook>>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            inner: Arc::new(Inner {
                base_url: base_url.into(),
                token: RwLock::new(None),
                notify: RwLock::new(None),
                unauthorized: RwLock::new(None),
            }),
        }
    }

    /// Register the sink for user-facing failure notifications.
    pub fn set_notify_hook(&self, hook: NotifyHook) {
        if let Ok(mut slot) = self.inner.notify.write() {
            *slot = Some(hook);
        }
    }

    /// Register the callback fired after a 401 has wiped the credential.
    pub fn set_unauthorized_hook(&self, hook: UnauthorizedHook) {
        if let Ok(mut slot) = self.inner.unauthorized.write() {
            *slot = Some(hook);
        }
    }

    /// Attach a bearer credential to all subsequent requests.
    pub fn attach_token(&self, token: &str) {
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = Some(token.to_owned());
        }
    }

    /// Detach the bearer credential. Idempotent.
    pub fn detach_token(&self) {
        if let Ok(mut slot) = self.inner.token.write() {
            *slot = None;
        }
    }

    /// The currently attached credential, read at call time.
    pub fn token(&self) -> Option<String> {
        self.inner.token.read().ok().and_then(|slot| slot.clone())
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.dispatch("GET", path, None).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Network)
        }
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.dispatch("POST", path, Some(encode_body(body)?)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Network)
        }
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.dispatch("PUT", path, Some(encode_body(body)?)).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (path, body);
            Err(ApiError::Network)
        }
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            self.dispatch("DELETE", path, None).await
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Network)
        }
    }

    /// Best-effort POST whose outcome is ignored entirely: no notification,
    /// no credential side effects, no error. Used by logout, which must
    /// succeed locally regardless of the backend.
    pub async fn post_best_effort(&self, path: &str) {
        #[cfg(feature = "csr")]
        {
            let mut builder = gloo_net::http::Request::post(&self.url(path));
            if let Some(token) = self.token() {
                builder = builder.header("Authorization", &authorization_header_value(&token));
            }
            if let Ok(request) = builder.build() {
                let _ = with_timeout(request.send(), REQUEST_TIMEOUT_MS).await;
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
        }
    }

    /// Multipart POST for file uploads. The browser sets the content type
    /// and boundary from the `FormData` itself.
    #[cfg(feature = "csr")]
    pub async fn post_form<T: DeserializeOwned>(
        &self,
        path: &str,
        form: &web_sys::FormData,
    ) -> Result<T, ApiError> {
        let mut builder = gloo_net::http::Request::post(&self.url(path));
        if let Some(token) = self.token() {
            builder = builder.header("Authorization", &authorization_header_value(&token));
        }
        let request = builder
            .body(wasm_bindgen::JsValue::from(form.clone()))
            .map_err(|_| ApiError::Network)?;
        self.handle(request, "POST", path).await
    }

    #[cfg(any(test, feature = "csr"))]
    fn url(&self, path: &str) -> String {
        join_url(&self.inner.base_url, path)
    }

    #[cfg(feature = "csr")]
    async fn dispatch<T: DeserializeOwned>(
        &self,
        method: &'static str,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let url = self.url(path);
        let mut builder = match method {
            "GET" => Request::get(&url),
            "POST" => Request::post(&url),
            "PUT" => Request::put(&url),
            _ => Request::delete(&url),
        };
        if let Some(token) = self.token() {
            builder = builder.header("Authorization", &authorization_header_value(&token));
        }
        let request = match body {
            Some(json) => builder.json(&json).map_err(|_| ApiError::Network)?,
            None => builder.build().map_err(|_| ApiError::Network)?,
        };
        self.handle(request, method, path).await
    }

    #[cfg(feature = "csr")]
    async fn handle<T: DeserializeOwned>(
        &self,
        request: gloo_net::http::Request,
        method: &'static str,
        path: &str,
    ) -> Result<T, ApiError> {
        let started = now_ms();
        let response = match with_timeout(request.send(), REQUEST_TIMEOUT_MS).await {
            Some(Ok(response)) => response,
            Some(Err(_)) | None => return Err(self.fail(ApiError::Network, method, path)),
        };
        let elapsed = now_ms() - started;
        let status = response.status();
        if response.ok() {
            log::debug!("{method} {path} -> {status} in {elapsed:.0}ms");
            return match response.json::<T>().await {
                Ok(payload) => Ok(payload),
                Err(_) => Err(self.fail(
                    ApiError::Unexpected { status, message: Some("Malformed response body.".to_owned()) },
                    method,
                    path,
                )),
            };
        }
        let body: ErrorBody = response.json().await.unwrap_or_default();
        Err(self.fail(ApiError::classify(status, body), method, path))
    }

    /// Execute the failure plan (notifications, credential wipe, forced
    /// login), then hand the error back for the caller's local recovery.
    #[cfg(feature = "csr")]
    fn fail(&self, error: ApiError, method: &'static str, path: &str) -> ApiError {
        log::warn!("{method} {path} failed: {error}");
        let plan = FailurePlan::for_error(&error, current_path_is_login());
        self.apply(&plan);
        error
    }

    #[cfg(any(test, feature = "csr"))]
    fn apply(&self, plan: &FailurePlan) {
        if plan.clear_credentials {
            #[cfg(feature = "csr")]
            storage::remove(storage::TOKEN_KEY);
            self.detach_token();
        }
        if let Ok(slot) = self.inner.notify.read() {
            if let Some(notify) = slot.as_ref() {
                for (level, message) in &plan.notifications {
                    notify(*level, message);
                }
            }
        }
        if plan.force_login {
            if let Ok(slot) = self.inner.unauthorized.read() {
                if let Some(unauthorized) = slot.as_ref() {
                    unauthorized();
                }
            }
        }
    }
}

/// `Authorization` header value for a bearer credential.
#[cfg(any(test, feature = "csr"))]
fn authorization_header_value(token: &str) -> String {
    format!("Bearer {token}")
}

/// Join the configured base URL with an endpoint path.
#[cfg(any(test, feature = "csr"))]
fn join_url(base: &str, path: &str) -> String {
    format!("{base}{path}")
}

#[cfg(feature = "csr")]
fn current_path_is_login() -> bool {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .is_some_and(|path| is_login_path(&path))
}

#[cfg(feature = "csr")]
fn now_ms() -> f64 {
    web_sys::window().and_then(|w| w.performance()).map_or(0.0, |p| p.now())
}

#[cfg(feature = "csr")]
fn encode_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(|_| ApiError::Unexpected { status: 0, message: None })
}

/// Race a future against the fixed timeout. `None` means the timer won.
#[cfg(feature = "csr")]
async fn with_timeout<F: Future>(future: F, timeout_ms: u32) -> Option<F::Output> {
    let sleep = gloo_timers::future::TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(future);
    futures::pin_mut!(sleep);
    match futures::future::select(future, sleep).await {
        futures::future::Either::Left((output, _)) => Some(output),
        futures::future::Either::Right(((), _)) => None,
    }
}
