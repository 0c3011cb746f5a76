//! # Domain models for the diary client
//!
//! Defines the data structures exchanged with the diary backend and the values
//! derived from them for the dashboard charts. Every type is
//! `Serialize + Deserialize` so it can be persisted (the session) or decoded
//! straight from a backend response body (entries, users).
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`UserInfo`] | The user object returned next to the token on login/register. |
//! | [`Session`] | Token plus user, the unit the client persists and clears together. |
//! | [`EntryId`] | Backend identifier of an entry. Accepts string or numeric ids on the wire. |
//! | [`DiaryEntry`] | A single diary submission with its backend-derived sentiment and auto response. |
//! | [`WordFrequency`] | One `(text, value)` pair fed to the word cloud. |
//! | [`MoodTrendPoint`] | One `(date, sentiment_score)` point fed to the line chart. |

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// User information returned by the backend on authentication.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(alias = "_id")]
    pub id: EntryId,
    #[serde(default)]
    pub username: Option<String>,
    pub email: String,
}

impl UserInfo {
    /// Get display name, falling back to email if no username is set.
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.is_empty())
            .unwrap_or(&self.email)
    }
}

/// An authenticated session.
///
/// A non-empty token means the client treats the user as authenticated; no
/// expiry or signature check happens on this side.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserInfo,
}

/// Identifier of a backend record.
///
/// Backends disagree on whether ids are numbers or strings, so both decode
/// into the same textual form.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct EntryId(pub String);

impl EntryId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for EntryId {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl<'de> Deserialize<'de> for EntryId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
            Uint(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => EntryId(s),
            Raw::Int(n) => EntryId(n.to_string()),
            Raw::Uint(n) => EntryId(n.to_string()),
        })
    }
}

/// A diary entry as stored by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiaryEntry {
    #[serde(alias = "_id")]
    pub id: EntryId,
    pub text_entry: String,
    pub created_at: DateTime<Utc>,
    /// Opaque mood indicator computed by the backend.
    #[serde(default)]
    pub sentiment_score: f64,
    #[serde(default)]
    pub auto_response: Option<String>,
}

/// One word of the word cloud and how often it occurs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordFrequency {
    pub text: String,
    pub value: u32,
}

/// One point of the mood trend line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MoodTrendPoint {
    pub date: String,
    pub sentiment_score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_accepts_numeric_and_string_ids() {
        let numeric: DiaryEntry = serde_json::from_str(
            r#"{"id": 7, "text_entry": "Walked the dog", "created_at": "2024-03-01T10:00:00Z", "sentiment_score": 0.5, "auto_response": null}"#,
        )
        .unwrap();
        assert_eq!(numeric.id, EntryId::from(7));
        assert_eq!(numeric.sentiment_score, 0.5);
        assert!(numeric.auto_response.is_none());

        let mongo: DiaryEntry = serde_json::from_str(
            r#"{"_id": "65f0c0ffee", "text_entry": "Rainy day", "created_at": "2024-03-02T08:30:00Z"}"#,
        )
        .unwrap();
        assert_eq!(mongo.id.as_str(), "65f0c0ffee");
        assert_eq!(mongo.sentiment_score, 0.0);
    }

    #[test]
    fn test_display_name_falls_back_to_email() {
        let mut user = UserInfo {
            id: EntryId::from(1),
            username: Some("ada".to_string()),
            email: "ada@example.com".to_string(),
        };
        assert_eq!(user.display_name(), "ada");

        user.username = Some(String::new());
        assert_eq!(user.display_name(), "ada@example.com");

        user.username = None;
        assert_eq!(user.display_name(), "ada@example.com");
    }
}
