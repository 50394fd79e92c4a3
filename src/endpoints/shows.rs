//! Show and episode endpoints.

use reqwest::Method;

use super::{extract_identifier, join_ids, DEFAULT_PAGE_LIMIT};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::model::{
    Episode, EpisodesResponse, SavedEpisode, SavedEpisodesResponse, SavedShow, SavedShowsResponse,
    Show, ShowEpisodesResponse, SimplifiedEpisode,
};

const MAX_SHOWS_PER_REQUEST: usize = 50;
const MAX_EPISODES_PER_REQUEST: usize = 50;

impl SpotifyClient {
    /// Get a show. Accepts a bare id or a `spotify:show:...` URI.
    pub async fn get_show(&self, show_id: &str) -> Result<Show> {
        let identifier = extract_identifier(show_id);
        self.get_json(&format!("v1/shows/{identifier}"), &[]).await
    }

    /// Get the episodes of a show.
    pub async fn get_show_episodes(&self, show_id: &str) -> Result<Vec<SimplifiedEpisode>> {
        let identifier = extract_identifier(show_id);
        let response: ShowEpisodesResponse = self
            .get_json(
                &format!("v1/shows/{identifier}/episodes"),
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.items)
    }

    /// Get the shows in the current user's library.
    pub async fn get_saved_shows(&self) -> Result<Vec<SavedShow>> {
        let response: SavedShowsResponse = self
            .get_json("v1/me/shows", &[("limit", DEFAULT_PAGE_LIMIT.to_string())])
            .await?;
        Ok(response.items)
    }

    /// Save up to 50 shows to the current user's library.
    pub async fn save_shows(&self, show_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(show_ids, MAX_SHOWS_PER_REQUEST, "shows")? else {
            return Ok(());
        };
        self.send(Method::PUT, "v1/me/shows", &[("ids", ids)], None)
            .await
    }

    /// Remove up to 50 shows from the current user's library.
    pub async fn remove_saved_shows(&self, show_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(show_ids, MAX_SHOWS_PER_REQUEST, "shows")? else {
            return Ok(());
        };
        self.send(Method::DELETE, "v1/me/shows", &[("ids", ids)], None)
            .await
    }

    /// Check which of up to 50 shows are in the current user's library.
    pub async fn are_shows_saved(&self, show_ids: &[&str]) -> Result<Vec<bool>> {
        let Some(ids) = join_ids(show_ids, MAX_SHOWS_PER_REQUEST, "shows")? else {
            return Ok(Vec::new());
        };
        self.get_json("v1/me/shows/contains", &[("ids", ids)]).await
    }

    /// Get an episode. Accepts a bare id or a `spotify:episode:...` URI.
    pub async fn get_episode(&self, episode_id: &str) -> Result<Episode> {
        let identifier = extract_identifier(episode_id);
        self.get_json(&format!("v1/episodes/{identifier}"), &[])
            .await
    }

    /// Get up to 50 episodes in one call.
    pub async fn get_episodes(&self, episode_ids: &[&str]) -> Result<Vec<Episode>> {
        let Some(ids) = join_ids(episode_ids, MAX_EPISODES_PER_REQUEST, "episodes")? else {
            return Ok(Vec::new());
        };
        let response: EpisodesResponse = self.get_json("v1/episodes", &[("ids", ids)]).await?;
        Ok(response.episodes)
    }

    /// Get the episodes in the current user's library.
    pub async fn get_saved_episodes(&self) -> Result<Vec<SavedEpisode>> {
        let response: SavedEpisodesResponse = self
            .get_json(
                "v1/me/episodes",
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.items)
    }

    /// Save up to 50 episodes to the current user's library.
    pub async fn save_episodes(&self, episode_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(episode_ids, MAX_EPISODES_PER_REQUEST, "episodes")? else {
            return Ok(());
        };
        self.send(Method::PUT, "v1/me/episodes", &[("ids", ids)], None)
            .await
    }

    /// Remove up to 50 episodes from the current user's library.
    pub async fn remove_saved_episodes(&self, episode_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(episode_ids, MAX_EPISODES_PER_REQUEST, "episodes")? else {
            return Ok(());
        };
        self.send(Method::DELETE, "v1/me/episodes", &[("ids", ids)], None)
            .await
    }

    /// Check which of up to 50 episodes are in the current user's library.
    pub async fn are_episodes_saved(&self, episode_ids: &[&str]) -> Result<Vec<bool>> {
        let Some(ids) = join_ids(episode_ids, MAX_EPISODES_PER_REQUEST, "episodes")? else {
            return Ok(Vec::new());
        };
        self.get_json("v1/me/episodes/contains", &[("ids", ids)])
            .await
    }
}
