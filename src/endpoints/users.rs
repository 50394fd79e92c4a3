//! User profile and personalization endpoints.

use reqwest::Method;

use super::DEFAULT_PAGE_LIMIT;
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::model::{
    Artist, BaseUserProfile, FollowType, TopArtistsResponse, TopTracksResponse, Track, UserProfile,
};

impl SpotifyClient {
    /// Get the current user's profile.
    pub async fn get_current_user(&self) -> Result<UserProfile> {
        self.get_json("v1/me", &[]).await
    }

    /// Get another user's public profile.
    pub async fn get_user(&self, user_id: &str) -> Result<BaseUserProfile> {
        self.get_json(&format!("v1/users/{user_id}"), &[]).await
    }

    /// Get the current user's most listened artists.
    pub async fn get_top_artists(&self) -> Result<Vec<Artist>> {
        let response: TopArtistsResponse = self
            .get_json(
                "v1/me/top/artists",
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.items)
    }

    /// Get the current user's most listened tracks.
    pub async fn get_top_tracks(&self) -> Result<Vec<Track>> {
        let response: TopTracksResponse = self
            .get_json(
                "v1/me/top/tracks",
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.items)
    }

    /// Follow up to 50 users.
    pub async fn follow_users(&self, user_ids: &[&str]) -> Result<()> {
        self.change_follows(Method::PUT, FollowType::User, user_ids)
            .await
    }

    /// Unfollow up to 50 users.
    pub async fn unfollow_users(&self, user_ids: &[&str]) -> Result<()> {
        self.change_follows(Method::DELETE, FollowType::User, user_ids)
            .await
    }
}
