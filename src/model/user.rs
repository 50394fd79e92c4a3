//! User profile models.

use serde::{Deserialize, Serialize};

use super::common::Image;
use crate::decode::ApiResponse;

/// Subscription level of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductType {
    Premium,
    Free,
}

/// Public profile, as visible for any user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BaseUserProfile {
    pub display_name: String,
    pub id: String,
    pub images: Vec<Image>,
    #[serde(rename = "type")]
    pub object_type: String,
    pub uri: String,
}

impl ApiResponse for BaseUserProfile {}

/// Profile of the current user, with private fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    #[serde(flatten)]
    pub profile: BaseUserProfile,
    pub product: ProductType,
    #[serde(default)]
    pub email: Option<String>,
}

impl ApiResponse for UserProfile {}
