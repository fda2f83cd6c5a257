//! Oneshot HTTP client - in-memory calls
//!
//! Requires the "in-process" feature.

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::header::{CONTENT_TYPE, COOKIE, SET_COOKIE};
use http::{Method, Request};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tower::ServiceExt;

use crate::{ClientError, ClientResult};

use super::http::{HttpClient, decode_body, status_error};

/// Oneshot HTTP client (in-memory calls)
///
/// Calls the Router directly through Tower's `oneshot`, with no network in
/// between. Cookies set by the router are replayed on later requests, like the
/// network client's cookie store.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use menu_client::OneshotHttpClient;
///
/// let router: Router = build_backend();
/// let client = OneshotHttpClient::new(router);
///
/// let categories: Vec<Category> = client.get("/menu/restore-category-session").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
    cookies: Arc<RwLock<BTreeMap<String, String>>>,
}

impl OneshotHttpClient {
    /// Create a new oneshot HTTP client
    ///
    /// # Arguments
    /// * `router` - a fully built axum Router (state already attached)
    pub fn new(router: Router) -> Self {
        Self {
            router,
            cookies: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Value of a cookie the router has set, if any
    pub async fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.read().await.get(name).cloned()
    }

    async fn build_request(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> ClientResult<Request<Body>> {
        let path = format!("/{}", path.trim_start_matches('/'));
        let mut builder = Request::builder().method(method).uri(path);

        let cookies = self.cookies.read().await;
        if !cookies.is_empty() {
            let header = cookies
                .iter()
                .map(|(name, value)| format!("{name}={value}"))
                .collect::<Vec<_>>()
                .join("; ");
            builder = builder.header(COOKIE, header);
        }
        drop(cookies);

        let body = match body {
            Some(bytes) => {
                builder = builder.header(CONTENT_TYPE, "application/json");
                Body::from(bytes)
            }
            None => Body::empty(),
        };

        builder
            .body(body)
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {e}")))
    }

    async fn remember_cookies(&self, headers: &http::HeaderMap) {
        let mut cookies = self.cookies.write().await;
        for value in headers.get_all(SET_COOKIE) {
            let Ok(value) = value.to_str() else {
                continue;
            };
            let pair = value.split(';').next().unwrap_or_default();
            if let Some((name, value)) = pair.split_once('=') {
                cookies.insert(name.trim().to_string(), value.trim().to_string());
            }
        }
    }

    /// Execute the request and handle the response
    async fn execute<T: DeserializeOwned>(&self, request: Request<Body>) -> ClientResult<T> {
        tracing::debug!(method = %request.method(), uri = %request.uri(), "oneshot");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {e}")))?;

        self.remember_cookies(response.headers()).await;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {e}")))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(status_error(status, text));
        }

        decode_body(&body_bytes)
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::GET, path, None).await?;
        self.execute(request).await
    }

    async fn post<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::POST, path, Some(bytes)).await?;
        self.execute(request).await
    }

    async fn put<T: DeserializeOwned + Send, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        let bytes = serde_json::to_vec(body)?;
        let request = self.build_request(Method::PUT, path, Some(bytes)).await?;
        self.execute(request).await
    }

    async fn delete<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<T> {
        let request = self.build_request(Method::DELETE, path, None).await?;
        self.execute(request).await
    }
}
