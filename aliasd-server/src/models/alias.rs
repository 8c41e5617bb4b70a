//! Alias record and the POST body it is saved from

use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Alias record as stored and listed.
///
/// `id` is assigned by the store and never changes. A NULL `text` column
/// reads back as the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Alias {
    pub id: i32,
    pub name: String,
    pub text: String,
}

/// Decoded body of `POST /aliases`.
///
/// Both `name` and `text` are required and unknown fields are rejected.
/// An `id` field is accepted so clients can echo back a listed record,
/// but it is discarded: identity always comes from the store.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SaveAlias {
    #[serde(default, rename = "id")]
    _id: Option<IgnoredAny>,
    pub name: String,
    pub text: String,
}

impl SaveAlias {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            _id: None,
            name: name.into(),
            text: text.into(),
        }
    }

    /// Confirmation line returned to the client after a successful save.
    pub fn confirmation(&self) -> String {
        format!("Alias for \"{}\" has been saved!\n", self.name)
    }
}
