//! Artist models.

use serde::{Deserialize, Serialize};

use super::common::Image;
use crate::decode::ApiResponse;

/// Artist as embedded in albums and tracks.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SimplifiedArtist {
    pub id: String,
    pub name: String,
    pub uri: String,
}

/// Full artist object.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Artist {
    #[serde(flatten)]
    pub artist: SimplifiedArtist,
    pub images: Vec<Image>,
}

impl ApiResponse for Artist {}

/// Response to the followed-artists call, one nesting level deeper than the
/// usual envelope.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FollowedArtistsResponse {
    pub artists: ArtistList,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ArtistList {
    pub items: Vec<Artist>,
}

impl ApiResponse for FollowedArtistsResponse {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TopArtistsResponse {
    pub items: Vec<Artist>,
}

impl ApiResponse for TopArtistsResponse {}
