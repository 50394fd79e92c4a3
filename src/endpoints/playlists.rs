//! Playlist endpoints.

use super::{extract_identifier, DEFAULT_PAGE_LIMIT};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::model::{
    BasePlaylist, CategoryPlaylistsResponse, FeaturedPlaylistsResponse, Page, Playlist,
};

impl SpotifyClient {
    /// Get a playlist. Accepts a bare id or a `spotify:playlist:...` URI.
    pub async fn get_playlist(&self, playlist_id: &str) -> Result<Playlist> {
        let identifier = extract_identifier(playlist_id);
        self.get_json(&format!("v1/playlists/{identifier}"), &[])
            .await
    }

    /// Get the current user's playlists.
    pub async fn get_playlists_for_current_user(&self) -> Result<Vec<BasePlaylist>> {
        let response: Page<BasePlaylist> = self
            .get_json(
                "v1/me/playlists",
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.items)
    }

    /// Get Spotify's featured playlists.
    pub async fn get_featured_playlists(&self) -> Result<Vec<BasePlaylist>> {
        let response: FeaturedPlaylistsResponse = self
            .get_json(
                "v1/browse/featured-playlists",
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.playlists.items)
    }

    /// Get the playlists of a browse category.
    pub async fn get_category_playlists(&self, category_id: &str) -> Result<Vec<BasePlaylist>> {
        let response: CategoryPlaylistsResponse = self
            .get_json(
                &format!("v1/browse/categories/{category_id}/playlists"),
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.playlists.items)
    }
}
