//! Request and response bodies for the diary backend.

use serde::{Deserialize, Serialize};
use store::{DiaryEntry, Session, UserInfo};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub username: String,
}

/// `{token, user}` returned by both auth endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserInfo,
}

impl From<AuthResponse> for Session {
    fn from(resp: AuthResponse) -> Self {
        Session {
            token: resp.token,
            user: resp.user,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct EntryRequest<'a> {
    pub text_entry: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntriesResponse {
    pub entries: Vec<DiaryEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EntryResponse {
    pub entry: DiaryEntry,
}
