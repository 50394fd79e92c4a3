//! Audiobook and chapter endpoints.

use reqwest::Method;

use super::{extract_identifier, join_ids, DEFAULT_PAGE_LIMIT};
use crate::client::SpotifyClient;
use crate::error::Result;
use crate::model::{
    Audiobook, AudiobooksResponse, Chapter, ChaptersResponse, SavedAudiobooksResponse,
    SimplifiedAudiobook,
};

const MAX_AUDIOBOOKS_PER_REQUEST: usize = 50;
const MAX_CHAPTERS_PER_REQUEST: usize = 50;

impl SpotifyClient {
    /// Get an audiobook. Accepts a bare id or a `spotify:audiobook:...` URI.
    pub async fn get_audiobook(&self, audiobook_id: &str) -> Result<Audiobook> {
        let identifier = extract_identifier(audiobook_id);
        self.get_json(&format!("v1/audiobooks/{identifier}"), &[])
            .await
    }

    /// Get up to 50 audiobooks in one call. Unknown ids are omitted from
    /// the result.
    pub async fn get_audiobooks(&self, audiobook_ids: &[&str]) -> Result<Vec<Audiobook>> {
        let Some(ids) = join_ids(audiobook_ids, MAX_AUDIOBOOKS_PER_REQUEST, "audiobooks")? else {
            return Ok(Vec::new());
        };
        let response: AudiobooksResponse = self.get_json("v1/audiobooks", &[("ids", ids)]).await?;
        Ok(response.audiobooks)
    }

    /// Get the audiobooks in the current user's library.
    pub async fn get_saved_audiobooks(&self) -> Result<Vec<SimplifiedAudiobook>> {
        let response: SavedAudiobooksResponse = self
            .get_json(
                "v1/me/audiobooks",
                &[("limit", DEFAULT_PAGE_LIMIT.to_string())],
            )
            .await?;
        Ok(response.items)
    }

    /// Save up to 50 audiobooks to the current user's library.
    pub async fn save_audiobooks(&self, audiobook_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(audiobook_ids, MAX_AUDIOBOOKS_PER_REQUEST, "audiobooks")? else {
            return Ok(());
        };
        self.send(Method::PUT, "v1/me/audiobooks", &[("ids", ids)], None)
            .await
    }

    /// Remove up to 50 audiobooks from the current user's library.
    pub async fn remove_saved_audiobooks(&self, audiobook_ids: &[&str]) -> Result<()> {
        let Some(ids) = join_ids(audiobook_ids, MAX_AUDIOBOOKS_PER_REQUEST, "audiobooks")? else {
            return Ok(());
        };
        self.send(Method::DELETE, "v1/me/audiobooks", &[("ids", ids)], None)
            .await
    }

    /// Check which of up to 50 audiobooks are in the current user's library.
    pub async fn are_audiobooks_saved(&self, audiobook_ids: &[&str]) -> Result<Vec<bool>> {
        let Some(ids) = join_ids(audiobook_ids, MAX_AUDIOBOOKS_PER_REQUEST, "audiobooks")? else {
            return Ok(Vec::new());
        };
        self.get_json("v1/me/audiobooks/contains", &[("ids", ids)])
            .await
    }

    /// Get a chapter. Accepts a bare id or a `spotify:chapter:...` URI.
    pub async fn get_chapter(&self, chapter_id: &str) -> Result<Chapter> {
        let identifier = extract_identifier(chapter_id);
        self.get_json(&format!("v1/chapters/{identifier}"), &[])
            .await
    }

    /// Get up to 50 chapters in one call.
    pub async fn get_chapters(&self, chapter_ids: &[&str]) -> Result<Vec<Chapter>> {
        let Some(ids) = join_ids(chapter_ids, MAX_CHAPTERS_PER_REQUEST, "chapters")? else {
            return Ok(Vec::new());
        };
        let response: ChaptersResponse = self.get_json("v1/chapters", &[("ids", ids)]).await?;
        Ok(response.chapters)
    }
}
