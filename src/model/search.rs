//! Search models.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::album::SimplifiedAlbum;
use super::artist::Artist;
use super::audiobook::SimplifiedAudiobook;
use super::common::Page;
use super::episode::SimplifiedEpisode;
use super::playlist::BasePlaylist;
use super::show::SimplifiedShow;
use super::track::Track;
use crate::decode::{drop_null_entries, ApiResponse};

/// Kind of resource to search for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Album,
    Artist,
    Playlist,
    Track,
    Show,
    Episode,
    Audiobook,
}

impl SearchType {
    pub fn as_str(self) -> &'static str {
        match self {
            SearchType::Album => "album",
            SearchType::Artist => "artist",
            SearchType::Playlist => "playlist",
            SearchType::Track => "track",
            SearchType::Show => "show",
            SearchType::Episode => "episode",
            SearchType::Audiobook => "audiobook",
        }
    }
}

/// Search results: one page per requested resource kind.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SearchResults {
    pub albums: Option<Page<SimplifiedAlbum>>,
    pub artists: Option<Page<Artist>>,
    pub tracks: Option<Page<Track>>,
    pub playlists: Option<Page<BasePlaylist>>,
    pub shows: Option<Page<SimplifiedShow>>,
    pub episodes: Option<Page<SimplifiedEpisode>>,
    pub audiobooks: Option<Page<SimplifiedAudiobook>>,
}

impl ApiResponse for SearchResults {
    fn prepare(value: &mut Value) {
        // Search pages are the one place Spotify routinely mixes null
        // entries into every kind of item list.
        for field in [
            "albums",
            "artists",
            "tracks",
            "playlists",
            "shows",
            "episodes",
            "audiobooks",
        ] {
            if let Some(page) = value.get_mut(field) {
                drop_null_entries(page, "items");
            }
        }
    }
}
