//! Browse category models.

use serde::{Deserialize, Serialize};

use super::common::Image;
use crate::decode::ApiResponse;

/// A browse category.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub href: String,
    pub icons: Vec<Image>,
}

impl ApiResponse for Category {}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoriesResponse {
    pub categories: CategoryList,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CategoryList {
    pub items: Vec<Category>,
}

impl ApiResponse for CategoriesResponse {}
