//! # HTTP client adapter
//!
//! [`ApiClient`] wraps a `reqwest::Client` with a fixed base URL. Every
//! request it builds goes through [`ApiClient::request`], which asks the
//! configured [`TokenSource`] for the current token at that moment and, when
//! one exists, attaches `Authorization: Bearer <token>`. Without a token the
//! request goes out unauthenticated and the backend is expected to answer 401.
//!
//! There is no retry, no timeout and no response interceptor: a failure is
//! returned once as an [`ApiError`].

use std::sync::Arc;

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use store::{DiaryEntry, EntryId, Session, SessionStorage};

use crate::error::ApiError;
use crate::models::{
    AuthResponse, EntriesResponse, EntryRequest, EntryResponse, LoginRequest, RegisterRequest,
};

/// Where the adapter reads the bearer token from on every request.
pub trait TokenSource {
    fn token(&self) -> Option<String>;
}

impl TokenSource for SessionStorage {
    fn token(&self) -> Option<String> {
        SessionStorage::token(self)
    }
}

/// The operations the views need from the diary backend.
///
/// [`ApiClient`] is the production implementation; view logic is written
/// against this trait so it can run against an in-memory double.
pub trait DiaryApi {
    async fn login(&self, req: &LoginRequest) -> Result<Session, ApiError>;
    async fn register(&self, req: &RegisterRequest) -> Result<Session, ApiError>;
    async fn list_entries(&self) -> Result<Vec<DiaryEntry>, ApiError>;
    async fn create_entry(&self, text: &str) -> Result<DiaryEntry, ApiError>;
    async fn update_entry(&self, id: &EntryId, text: &str) -> Result<DiaryEntry, ApiError>;
    async fn delete_entry(&self, id: &EntryId) -> Result<(), ApiError>;
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    tokens: Arc<dyn TokenSource>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl PartialEq for ApiClient {
    fn eq(&self, other: &Self) -> bool {
        self.base_url == other.base_url && Arc::ptr_eq(&self.tokens, &other.tokens)
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, tokens: impl TokenSource + 'static) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            tokens: Arc::new(tokens),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Start a request to `path`, with the bearer token attached if one is stored.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let builder = self.http.request(method, self.url(path));
        match self.tokens.token() {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_raw(&self, builder: RequestBuilder) -> Result<String, ApiError> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if status.is_success() {
            return Ok(body);
        }

        let err = ApiError::from_response(status.as_u16(), &body);
        tracing::warn!("Backend returned {}: {}", status, err);
        Err(err)
    }

    async fn send<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, ApiError> {
        let body = self.send_raw(builder).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl DiaryApi for ApiClient {
    async fn login(&self, req: &LoginRequest) -> Result<Session, ApiError> {
        tracing::debug!("POST /auth/login");
        let resp: AuthResponse = self
            .send(self.request(Method::POST, "/auth/login").json(req))
            .await?;
        Ok(resp.into())
    }

    async fn register(&self, req: &RegisterRequest) -> Result<Session, ApiError> {
        tracing::debug!("POST /auth/register");
        let resp: AuthResponse = self
            .send(self.request(Method::POST, "/auth/register").json(req))
            .await?;
        Ok(resp.into())
    }

    async fn list_entries(&self) -> Result<Vec<DiaryEntry>, ApiError> {
        tracing::debug!("GET /entries");
        let resp: EntriesResponse = self.send(self.request(Method::GET, "/entries")).await?;
        Ok(resp.entries)
    }

    async fn create_entry(&self, text: &str) -> Result<DiaryEntry, ApiError> {
        tracing::debug!("POST /entries");
        let resp: EntryResponse = self
            .send(
                self.request(Method::POST, "/entries")
                    .json(&EntryRequest { text_entry: text }),
            )
            .await?;
        Ok(resp.entry)
    }

    async fn update_entry(&self, id: &EntryId, text: &str) -> Result<DiaryEntry, ApiError> {
        tracing::debug!("PUT /entries/{}", id);
        let resp: EntryResponse = self
            .send(
                self.request(Method::PUT, &format!("/entries/{id}"))
                    .json(&EntryRequest { text_entry: text }),
            )
            .await?;
        Ok(resp.entry)
    }

    async fn delete_entry(&self, id: &EntryId) -> Result<(), ApiError> {
        tracing::debug!("DELETE /entries/{}", id);
        self.send_raw(self.request(Method::DELETE, &format!("/entries/{id}")))
            .await?;
        Ok(())
    }
}
