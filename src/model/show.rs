//! Show models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::{ExternalUrls, Image};
use super::episode::SimplifiedEpisode;
use crate::decode::{unwrap_items, ApiResponse};

/// Show as embedded in episodes and listings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimplifiedShow {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub publisher: String,
    pub description: String,
    pub total_episodes: Option<u32>,
}

/// Full show object, including its episode list.
///
/// The episode list arrives wrapped in a pagination envelope and is
/// flattened before decoding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Show {
    #[serde(flatten)]
    pub show: SimplifiedShow,
    pub episodes: Vec<SimplifiedEpisode>,
}

impl ApiResponse for Show {
    fn prepare(value: &mut Value) {
        unwrap_items(value, "episodes");
    }
}

/// A show in the user's library.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedShow {
    pub added_at: DateTime<Utc>,
    pub show: SimplifiedShow,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedShowsResponse {
    pub items: Vec<SavedShow>,
}

impl ApiResponse for SavedShowsResponse {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ShowEpisodesResponse {
    pub items: Vec<SimplifiedEpisode>,
}

impl ApiResponse for ShowEpisodesResponse {}
