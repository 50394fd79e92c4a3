//! Audiobook and chapter models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ExternalUrls, Image};
use crate::decode::{drop_null_entries, unwrap_items, ApiResponse};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Author {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Narrator {
    pub name: String,
}

/// A chapter of an audiobook.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Chapter {
    pub id: String,
    pub chapter_number: u32,
    pub duration_ms: u64,
    pub images: Vec<Image>,
    pub languages: Vec<String>,
    pub name: String,
    pub explicit: bool,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
    pub external_urls: ExternalUrls,
}

impl ApiResponse for Chapter {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChaptersResponse {
    pub chapters: Vec<Chapter>,
}

impl ApiResponse for ChaptersResponse {}

/// Audiobook as returned by listing endpoints, without its chapter list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimplifiedAudiobook {
    pub id: String,
    pub authors: Vec<Author>,
    pub description: String,
    pub edition: String,
    pub external_urls: ExternalUrls,
    pub explicit: bool,
    pub html_description: String,
    pub images: Vec<Image>,
    pub languages: Vec<String>,
    pub name: String,
    pub narrators: Vec<Narrator>,
    pub publisher: String,
    pub total_chapters: u32,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
}

/// Full audiobook object, including its chapter list.
///
/// The chapter list arrives wrapped in a pagination envelope and is
/// flattened before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Audiobook {
    #[serde(flatten)]
    pub audiobook: SimplifiedAudiobook,
    pub chapters: Vec<Chapter>,
}

impl ApiResponse for Audiobook {
    fn prepare(value: &mut Value) {
        unwrap_items(value, "chapters");
    }
}

/// Response to a batch audiobook lookup. Unknown ids come back as `null`
/// entries; they are dropped before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AudiobooksResponse {
    pub audiobooks: Vec<Audiobook>,
}

impl ApiResponse for AudiobooksResponse {
    fn prepare(value: &mut Value) {
        drop_null_entries(value, "audiobooks");
        if let Some(Value::Array(audiobooks)) = value.get_mut("audiobooks") {
            for audiobook in audiobooks {
                unwrap_items(audiobook, "chapters");
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedAudiobooksResponse {
    pub items: Vec<SimplifiedAudiobook>,
}

impl ApiResponse for SavedAudiobooksResponse {
    fn prepare(value: &mut Value) {
        drop_null_entries(value, "items");
    }
}
