//! Artist endpoints.

use reqwest::Method;

use super::{extract_identifier, join_ids, DEFAULT_PAGE_LIMIT};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::model::{
    Artist, FollowType, FollowedArtistsResponse, SimplifiedAlbum, SimplifiedAlbumList, Track,
    TracksResponse,
};

const MAX_FOLLOW_CHANGES: usize = 50;

impl SpotifyClient {
    /// Get an artist. Accepts a bare id or a `spotify:artist:...` URI.
    pub async fn get_artist(&self, artist_id: &str) -> Result<Artist> {
        let identifier = extract_identifier(artist_id);
        self.get_json(&format!("v1/artists/{identifier}"), &[]).await
    }

    /// Get an artist's albums.
    pub async fn get_artist_albums(&self, artist_id: &str) -> Result<Vec<SimplifiedAlbum>> {
        let identifier = extract_identifier(artist_id);
        let response: SimplifiedAlbumList = self
            .get_json(
                &format!("v1/artists/{identifier}/albums"),
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.items)
    }

    /// Get an artist's most played tracks.
    pub async fn get_artist_top_tracks(&self, artist_id: &str) -> Result<Vec<Track>> {
        let identifier = extract_identifier(artist_id);
        let response: TracksResponse = self
            .get_json(&format!("v1/artists/{identifier}/top-tracks"), &[])
            .await?;
        Ok(response.tracks)
    }

    /// Get the artists the current user follows.
    pub async fn get_followed_artists(&self) -> Result<Vec<Artist>> {
        let response: FollowedArtistsResponse = self
            .get_json(
                "v1/me/following",
                &[
                    ("limit", DEFAULT_PAGE_LIMIT.to_string()),
                    ("type", FollowType::Artist.as_str().to_string()),
                ],
            )
            .await?;
        Ok(response.artists.items)
    }

    /// Follow up to 50 artists.
    pub async fn follow_artists(&self, artist_ids: &[&str]) -> Result<()> {
        self.change_follows(Method::PUT, FollowType::Artist, artist_ids)
            .await
    }

    /// Unfollow up to 50 artists.
    pub async fn unfollow_artists(&self, artist_ids: &[&str]) -> Result<()> {
        self.change_follows(Method::DELETE, FollowType::Artist, artist_ids)
            .await
    }

    pub(crate) async fn change_follows(
        &self,
        method: Method,
        follow_type: FollowType,
        ids: &[&str],
    ) -> Result<()> {
        let Some(ids) = join_ids(ids, MAX_FOLLOW_CHANGES, "follows")? else {
            return Ok(());
        };
        self.send(
            method,
            "v1/me/following",
            &[
                ("type", follow_type.as_str().to_string()),
                ("ids", ids),
            ],
            None,
        )
        .await
    }
}
