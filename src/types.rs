use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

#[derive(Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AthleteRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i32>,
    pub name: String,
    pub grade: i32,
    pub personal_record: String,
    #[serde(default)]
    pub events: String,
}

impl AthleteRecord {
    /// Hash of everything the record carries, used to key rows the server
    /// sent without an id.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Identity of a rendered row. Never derived from list position.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub enum RowKey {
    Id(i32),
    /// `occurrence` counts earlier id-less records with the same content.
    Content { hash: u64, occurrence: usize },
}

/// Raw response handed back by a [`crate::client::Client`].
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Payload {
    pub status: u16,
    /// Left empty for non-success statuses.
    pub body: Vec<u8>,
}

impl Payload {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
