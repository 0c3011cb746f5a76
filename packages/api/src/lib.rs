//! # API crate: HTTP access to the diary backend
//!
//! Every call the web and desktop frontends make to the backend goes through
//! this crate.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`] (base URL + bearer token injection) and the [`DiaryApi`] trait |
//! | [`error`] | [`ApiError`] and extraction of `{message}` / `{errors: [{msg}]}` bodies |
//! | [`models`] | Request and response bodies for the auth and entry endpoints |
//!
//! ## Endpoints
//!
//! | Method | Path | Body | Response |
//! |--------|------|------|----------|
//! | `POST` | `/auth/login` | `{email, password}` | `{token, user}` |
//! | `POST` | `/auth/register` | `{email, password, username}` | `{token, user}` |
//! | `GET` | `/entries` | none | `{entries: [...]}` |
//! | `POST` | `/entries` | `{text_entry}` | `{entry}` |
//! | `PUT` | `/entries/{id}` | `{text_entry}` | `{entry}` |
//! | `DELETE` | `/entries/{id}` | none | any 2xx |

pub mod client;
pub mod error;
pub mod models;

pub use client::{ApiClient, DiaryApi, TokenSource};
pub use error::{ApiError, GENERIC_ERROR};
pub use models::{LoginRequest, RegisterRequest};
