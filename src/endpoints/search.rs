//! Search endpoint.

use crate::client::SpotifyClient;
use crate::error::{Result, SpotifyError};
use crate::model::{SearchResults, SearchType};

impl SpotifyClient {
    /// Search the catalog for the given resource kinds.
    pub async fn search(
        &self,
        query: &str,
        types: &[SearchType],
        limit: Option<u32>,
    ) -> Result<SearchResults> {
        if types.is_empty() {
            return Err(SpotifyError::Validation(
                "at least one search type is required".to_string(),
            ));
        }
        let types = types
            .iter()
            .map(|search_type| search_type.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let mut params = vec![("q", query.to_string()), ("type", types)];
        if let Some(limit) = limit {
            params.push(("limit", limit.to_string()));
        }
        self.get_json("v1/search", &params).await
    }
}
