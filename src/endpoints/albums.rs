//! Album endpoints.

use reqwest::Method;

use super::{extract_identifier, join_ids, DEFAULT_PAGE_LIMIT};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::model::{
    Album, AlbumTracksResponse, AlbumsResponse, NewReleasesResponse, SavedAlbum,
    SavedAlbumsResponse, SimplifiedAlbum, SimplifiedTrack,
};

const MAX_ALBUMS_PER_LOOKUP: usize = 20;
const MAX_ALBUMS_PER_LIBRARY_CHANGE: usize = 50;

impl SpotifyClient {
    /// Get an album. Accepts a bare id or a `spotify:album:...` URI.
    pub async fn get_album(&self, album_id: &str) -> Result<Album> {
        let identifier = extract_identifier(album_id);
        self.get_json(&format!("v1/albums/{identifier}"), &[]).await
    }

    /// Get up to 20 albums in one call. An empty id list short-circuits to
    /// an empty result without a network call.
    pub async fn get_albums(&self, album_ids: &[&str]) -> Result<Vec<Album>> {
        let Some(ids) = join_ids(album_ids, MAX_ALBUMS_PER_LOOKUP, "albums")? else {
            return Ok(Vec::new());
        };
        let response: AlbumsResponse = self.get_json("v1/albums", &[("ids", ids)]).await?;
        Ok(response.albums)
    }

    /// Get the tracks of an album.
    pub async fn get_album_tracks(&self, album_id: &str) -> Result<Vec<SimplifiedTrack>> {
        let identifier = extract_identifier(album_id);
        let response: AlbumTracksResponse = self
            .get_json(
                &format!("v1/albums/{identifier}/tracks"),
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.items)
    }

    /// Get new album releases.
    pub async fn get_new_releases(&self) -> Result<Vec<SimplifiedAlbum>> {
        let response: NewReleasesResponse = self
            .get_json(
                "v1/browse/new-releases",
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.albums.items)
    }

    /// Get the albums in the current user's library.
    pub async fn get_saved_albums(&self) -> Result<Vec<SavedAlbum>> {
        let response: SavedAlbumsResponse = self
            .get_json("v1/me/albums", &[("limit", DEFAULT_PAGE_LIMIT.to_string())])
            .await?;
        Ok(response.items)
    }

    /// Save up to 50 albums to the current user's library.
    pub async fn save_albums(&self, album_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(album_ids, MAX_ALBUMS_PER_LIBRARY_CHANGE, "albums")? else {
            return Ok(());
        };
        self.send(Method::PUT, "v1/me/albums", &[("ids", ids)], None)
            .await
    }

    /// Remove up to 50 albums from the current user's library.
    pub async fn remove_saved_albums(&self, album_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(album_ids, MAX_ALBUMS_PER_LIBRARY_CHANGE, "albums")? else {
            return Ok(());
        };
        self.send(Method::DELETE, "v1/me/albums", &[("ids", ids)], None)
            .await
    }

    /// Check which of up to 50 albums are in the current user's library.
    /// Flags come back in the order the ids were given.
    pub async fn are_albums_saved(&self, album_ids: &[&str]) -> Result<Vec<bool>> {
        let Some(ids) = join_ids(album_ids, MAX_ALBUMS_PER_LIBRARY_CHANGE, "albums")? else {
            return Ok(Vec::new());
        };
        self.get_json("v1/me/albums/contains", &[("ids", ids)]).await
    }
}
