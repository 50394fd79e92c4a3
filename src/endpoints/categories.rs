//! Browse category endpoints.

use super::DEFAULT_PAGE_LIMIT;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::model::{CategoriesResponse, Category};

impl SpotifyClient {
    /// Get the browse categories.
    pub async fn get_categories(&self) -> Result<Vec<Category>> {
        let response: CategoriesResponse = self
            .get_json(
                "v1/browse/categories",
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.categories.items)
    }

    /// Get a single browse category.
    pub async fn get_category(&self, category_id: &str) -> Result<Category> {
        self.get_json(&format!("v1/browse/categories/{category_id}"), &[])
            .await
    }
}
