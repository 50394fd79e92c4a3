//! Per-endpoint methods, grouped by resource.
//!
//! Every method is thin glue over the dispatch and decoding layers: validate
//! local constraints, format a path with a sanitized identifier, perform one
//! call, decode the fixed response type.

mod albums;
mod artists;
mod audiobooks;
mod categories;
mod player;
mod playlists;
mod search;
mod shows;
mod tracks;
mod users;

pub use player::StartPlaybackOptions;

use crate::error::{Result, SpotifyError};

/// Page size requested from listing endpoints.
pub(crate) const DEFAULT_PAGE_LIMIT: u32 = 48;

/// Derive a bare resource id from either a bare id or a compound Spotify
/// URI (`spotify:album:x` -> `x`). Idempotent.
pub(crate) fn extract_identifier(id: &str) -> &str {
    id.rsplit(':').next().unwrap_or(id)
}

/// Join batch ids into one comma-separated parameter.
///
/// Returns `Ok(None)` for an empty list (callers short-circuit without a
/// network call) and a validation error when the documented maximum is
/// exceeded.
pub(crate) fn join_ids(ids: &[&str], max: usize, resource: &str) -> Result<Option<String>> {
    if ids.is_empty() {
        return Ok(None);
    }
    if ids.len() > max {
        return Err(SpotifyError::Validation(format!(
            "a maximum of {max} {resource} can be processed in one request, got {}",
            ids.len()
        )));
    }
    Ok(Some(
        ids.iter()
            .map(|id| extract_identifier(id))
            .collect::<Vec<_>>()
            .join(","),
    ))
}
