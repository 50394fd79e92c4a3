//! Typed decoding of Spotify response bodies.
//!
//! Spotify's JSON is not uniform enough to map straight onto the models:
//! some sub-lists arrive wrapped in a pagination envelope, some lists carry
//! `null` or local-only entries, and some enum tokens are inconsistently
//! cased. Each response type can therefore declare a [`ApiResponse::prepare`]
//! hook that repairs the raw [`Value`] before structural validation runs.
//! The hooks are composed from the small transforms in this module.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SpotifyError};

const SNIPPET_LEN: usize = 200;

/// A type that can be decoded from a Spotify response body.
///
/// `prepare` runs on the parsed JSON before field mapping and defaults to a
/// no-op. Implementations reshape the payload where the upstream wire format
/// differs from the model.
pub(crate) trait ApiResponse: DeserializeOwned {
    fn prepare(_value: &mut Value) {}
}

/// Decode a raw response body into `T`.
///
/// Any mismatch (invalid JSON, missing required field, wrong primitive type,
/// unrecognized enum token or discriminator) is a single [`SpotifyError::Decode`]
/// carrying the target type name and a truncated fragment. Partial objects
/// are never produced.
pub(crate) fn decode<T: ApiResponse>(raw: &str) -> Result<T> {
    let mut value: Value =
        serde_json::from_str(raw).map_err(|source| decode_error::<T>(source, raw))?;
    T::prepare(&mut value);
    serde_json::from_value(value).map_err(|source| decode_error::<T>(source, raw))
}

fn decode_error<T>(source: serde_json::Error, raw: &str) -> SpotifyError {
    SpotifyError::Decode {
        type_name: std::any::type_name::<T>(),
        source,
        snippet: snippet(raw),
    }
}

fn snippet(raw: &str) -> String {
    if raw.len() <= SNIPPET_LEN {
        return raw.to_string();
    }
    let mut end = SNIPPET_LEN;
    while !raw.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &raw[..end])
}

/// Replace `{"<field>": {"items": [...]}}` with the flat array.
///
/// Several resource kinds (album tracks, show episodes, audiobook chapters)
/// embed their child collection in a pagination envelope whose metadata is
/// never exposed. Element order is preserved. Shapes that do not match are
/// left untouched for structural validation to reject.
pub(crate) fn unwrap_items(value: &mut Value, field: &str) {
    let Some(envelope) = value.get_mut(field) else {
        return;
    };
    if let Some(items) = envelope.get_mut("items") {
        *envelope = items.take();
    }
}

/// Remove `null` elements from the array at `field`, preserving order.
pub(crate) fn drop_null_entries(value: &mut Value, field: &str) {
    if let Some(Value::Array(items)) = value.get_mut(field) {
        items.retain(|item| !item.is_null());
    }
}

/// Remove entries whose `is_local` flag is set from the array at `field`,
/// preserving order. Local files carry no catalog identity and cannot be
/// decoded as catalog items.
pub(crate) fn drop_local_entries(value: &mut Value, field: &str) {
    if let Some(Value::Array(items)) = value.get_mut(field) {
        items.retain(|item| !is_local(item));
    }
}

/// Null out the currently-playing `item` when it is a local file.
pub(crate) fn clear_local_item(value: &mut Value) {
    if let Some(item) = value.get_mut("item") {
        if is_local(item) {
            *item = Value::Null;
        }
    }
}

fn is_local(item: &Value) -> bool {
    item.get("is_local").and_then(Value::as_bool) == Some(true)
}

/// Deserialize a `null` value as the type's default.
///
/// Spotify sends `null` instead of an empty list for some image fields.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + serde::Deserialize<'de>,
{
    let value = Option::<T>::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}
