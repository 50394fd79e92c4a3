//! Typed models for Spotify Web API responses.
//!
//! All models are immutable value records decoded from upstream JSON.
//! "Full" variants embed their base record by value and add the fields only
//! the detail endpoints return; response envelopes mirror the wire shape
//! after the pre-processing hooks in [`crate::decode`] have run.

mod album;
mod artist;
mod audiobook;
mod category;
mod common;
mod episode;
mod player;
mod playlist;
mod search;
mod show;
mod track;
mod user;

pub use album::{
    Album, AlbumTracksResponse, AlbumType, AlbumsResponse, NewReleasesResponse, SavedAlbum,
    SavedAlbumsResponse, SimplifiedAlbum, SimplifiedAlbumList,
};
pub use artist::{Artist, ArtistList, FollowedArtistsResponse, SimplifiedArtist, TopArtistsResponse};
pub use audiobook::{
    Audiobook, AudiobooksResponse, Author, Chapter, ChaptersResponse, Narrator,
    SavedAudiobooksResponse, SimplifiedAudiobook,
};
pub use category::{CategoriesResponse, Category, CategoryList};
pub use common::{ExternalUrls, FollowType, Image, Page, ReleaseDatePrecision};
pub use episode::{Episode, EpisodesResponse, SavedEpisode, SavedEpisodesResponse, SimplifiedEpisode};
pub use player::{
    Context, ContextType, CurrentPlaying, Device, DeviceType, Devices, Item, PlaybackState,
    RepeatMode,
};
pub use playlist::{
    BasePlaylist, CategoryPlaylistsResponse, FeaturedPlaylistsResponse, Playlist, PlaylistOwner,
    PlaylistTrack, PlaylistTracks,
};
pub use search::{SearchResults, SearchType};
pub use show::{SavedShow, SavedShowsResponse, Show, ShowEpisodesResponse, SimplifiedShow};
pub use track::{
    AudioFeatures, Key, Mode, PlayedTrack, PlayedTracksResponse, SavedTrack, SavedTracksResponse,
    SimplifiedTrack, TimeSignature, TopTracksResponse, Track, TracksResponse,
};
pub use user::{BaseUserProfile, ProductType, UserProfile};
