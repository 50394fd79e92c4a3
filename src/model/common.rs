//! Types shared across resource models.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::decode::ApiResponse;

/// Known external URLs for a resource, keyed by provider (`"spotify"` for
/// the canonical open.spotify.com link).
pub type ExternalUrls = HashMap<String, String>;

/// An image in one of the sizes Spotify provides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Image {
    pub url: String,
    pub height: Option<u32>,
    pub width: Option<u32>,
}

/// Precision of a release date string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReleaseDatePrecision {
    Year,
    Month,
    Day,
}

/// Kind of followable resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowType {
    Artist,
    User,
}

impl FollowType {
    pub fn as_str(self) -> &'static str {
        match self {
            FollowType::Artist => "artist",
            FollowType::User => "user",
        }
    }
}

/// One page of a paginated collection.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Page<T> {
    pub href: String,
    pub items: Vec<T>,
    pub limit: u32,
    pub next: Option<String>,
    pub offset: u32,
    pub previous: Option<String>,
    pub total: u32,
}

/// Response to a check-saved call: one flag per requested id, in order.
impl ApiResponse for Vec<bool> {}
