//! Episode models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{ExternalUrls, Image, ReleaseDatePrecision};
use super::show::SimplifiedShow;
use crate::decode::ApiResponse;

/// Episode as embedded in show episode lists.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimplifiedEpisode {
    pub id: String,
    pub name: String,
    pub uri: String,
    pub images: Vec<Image>,
    pub external_urls: ExternalUrls,
    pub href: String,
    pub duration_ms: u64,
    pub explicit: bool,
    pub release_date: String,
    pub release_date_precision: ReleaseDatePrecision,
    pub description: String,
}

/// Full episode object, including its show.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Episode {
    #[serde(flatten)]
    pub episode: SimplifiedEpisode,
    pub show: SimplifiedShow,
}

impl ApiResponse for Episode {}

/// Response to a batch episode lookup.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EpisodesResponse {
    pub episodes: Vec<Episode>,
}

impl ApiResponse for EpisodesResponse {}

/// An episode in the user's library.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedEpisode {
    pub added_at: DateTime<Utc>,
    pub episode: Episode,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SavedEpisodesResponse {
    pub items: Vec<SavedEpisode>,
}

impl ApiResponse for SavedEpisodesResponse {}
