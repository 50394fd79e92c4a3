//! Async typed client for the Spotify Web API.
//!
//! The client authenticates requests with a bearer token, dispatches calls
//! against the versioned REST endpoints and decodes the JSON responses into
//! typed models, normalizing the rough edges of the upstream API along the
//! way: nested pagination envelopes are flattened, local-only and `null`
//! entries are filtered out, polymorphic items are discriminated into a
//! closed [`Item`](model::Item) sum, and inconsistently cased enum tokens
//! are canonicalized.
//!
//! Token acquisition is out of scope: pass a token via
//! [`SpotifyClient::authenticate`] or register an async refresh callback
//! that is awaited before every request.
//!
//! # Example
//!
//! ```no_run
//! use spotify_client::{Item, SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = SpotifyClient::new();
//!     client.authenticate("token");
//!
//!     match client.get_playback().await? {
//!         Some(state) => match state.playing.item {
//!             Some(Item::Track(track)) => println!("track: {}", track.track.name),
//!             Some(Item::Episode(episode)) => println!("episode: {}", episode.episode.name),
//!             None => println!("nothing decodable is playing"),
//!         },
//!         None => println!("playback inactive"),
//!     }
//!
//!     client.close();
//!     Ok(())
//! }
//! ```

mod client;
mod decode;
mod endpoints;
mod error;
pub mod model;
mod response;

pub use client::{SpotifyClient, TokenRefreshFn};
pub use endpoints::StartPlaybackOptions;
pub use error::{Result, SpotifyError};
pub use model::*;
