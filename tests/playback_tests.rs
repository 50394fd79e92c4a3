//! Tests for the player endpoints: playback state decoding and the
//! outbound shape of playback control calls.

use serde_json::{json, Value};
use spotify_client::{Item, RepeatMode, SpotifyClient, StartPlaybackOptions};
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> SpotifyClient {
    let client = SpotifyClient::new().with_base_url(server.uri());
    client.authenticate("test");
    client
}

fn track_item() -> Value {
    json!({
        "type": "track",
        "id": "4yOn1TEcfsKHUJCL2h1r8I",
        "artists": [{
            "id": "0TnOYISbd1XYRBk9myaseg",
            "name": "Pitbull",
            "uri": "spotify:artist:0TnOYISbd1XYRBk9myaseg"
        }],
        "disc_number": 1,
        "duration_ms": 85400,
        "explicit": false,
        "external_urls": {"spotify": "https://open.spotify.com/track/4yOn1TEcfsKHUJCL2h1r8I"},
        "href": "https://api.spotify.com/v1/tracks/4yOn1TEcfsKHUJCL2h1r8I",
        "name": "Global Warming (Intro)",
        "is_local": false,
        "track_number": 1,
        "uri": "spotify:track:4yOn1TEcfsKHUJCL2h1r8I",
        "album": {
            "id": "6akEvsycLGftJxYudPjmqK",
            "album_type": "album",
            "total_tracks": 18,
            "images": [],
            "name": "Global Warming",
            "release_date": "2012-11-16",
            "release_date_precision": "day",
            "uri": "spotify:album:6akEvsycLGftJxYudPjmqK",
            "artists": []
        }
    })
}

fn playback_body(item: Value) -> Value {
    json!({
        "device": {
            "id": "21dac6b0e1a46ab66c075dd74368a9e86dd4a462",
            "is_active": true,
            "is_private_session": false,
            "is_restricted": false,
            "name": "Living room",
            "type": "Speaker",
            "volume_percent": 70,
            "supports_volume": true
        },
        "shuffle_state": false,
        "repeat_state": "off",
        "context": {
            "external_urls": {"spotify": "https://open.spotify.com/album/6akEvsycLGftJxYudPjmqK"},
            "href": "https://api.spotify.com/v1/albums/6akEvsycLGftJxYudPjmqK",
            "type": "album",
            "uri": "spotify:album:6akEvsycLGftJxYudPjmqK"
        },
        "progress_ms": 11222,
        "is_playing": true,
        "item": item,
        "currently_playing_type": "track"
    })
}

// =============================================================================
// Playback State
// =============================================================================

mod playback_state {
    use super::*;

    #[tokio::test]
    async fn single_track_payload_decodes_to_track_variant() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/me/player"))
            .and(query_param("additional_types", "track,episode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(playback_body(track_item())))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        let state = client.get_playback().await.unwrap().expect("playback");
        assert!(state.playing.is_playing);
        assert_eq!(state.playing.progress_ms, Some(11222));
        match state.playing.item {
            Some(Item::Track(ref track)) => {
                assert_eq!(track.track.uri, "spotify:track:4yOn1TEcfsKHUJCL2h1r8I");
                assert_eq!(track.track.duration_ms, 85400);
            }
            ref other => panic!("expected track item, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn idle_playback_yields_none_with_the_same_call_shape() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/me/player"))
            .and(query_param("additional_types", "track,episode"))
            .respond_with(ResponseTemplate::new(200).set_body_json(playback_body(track_item())))
            .up_to_n_times(1)
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/me/player"))
            .and(query_param("additional_types", "track,episode"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        assert!(client.get_playback().await.unwrap().is_some());
        assert!(client.get_playback().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn local_file_item_yields_playback_without_item() {
        let server = MockServer::start().await;

        let item = json!({"type": "track", "is_local": true, "name": "home recording"});
        Mock::given(method("GET"))
            .and(path("/v1/me/player"))
            .respond_with(ResponseTemplate::new(200).set_body_json(playback_body(item)))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let state = client.get_playback().await.unwrap().expect("playback");
        assert!(state.playing.item.is_none());
    }

    #[tokio::test]
    async fn currently_playing_decodes_without_device_fields() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/me/player/currently-playing"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "context": null,
                "progress_ms": 0,
                "is_playing": true,
                "item": track_item(),
                "currently_playing_type": "track"
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let playing = client.get_current_playing().await.unwrap().expect("playing");
        // 0 progress is a real position, not "no progress info".
        assert_eq!(playing.progress_ms, Some(0));
    }
}

// =============================================================================
// Playback Control
// =============================================================================

mod playback_control {
    use super::*;

    #[tokio::test]
    async fn set_repeat_echoes_the_wire_token() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/me/player/repeat"))
            .and(query_param("state", "context"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.set_repeat(RepeatMode::Context, None).await.unwrap();
    }

    #[tokio::test]
    async fn set_shuffle_sends_lowercase_boolean() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/me/player/shuffle"))
            .and(query_param("state", "true"))
            .and(query_param("device_id", "abc"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.set_shuffle(true, Some("abc")).await.unwrap();
    }

    #[tokio::test]
    async fn seek_and_volume_send_positions_as_query_params() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/me/player/seek"))
            .and(query_param("position_ms", "5000"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("PUT"))
            .and(path("/v1/me/player/volume"))
            .and(query_param("volume_percent", "55"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.seek_track(5000, None).await.unwrap();
        client.set_volume(55, None).await.unwrap();
    }

    #[tokio::test]
    async fn transfer_playback_sends_device_list_body() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/me/player"))
            .and(body_json(json!({"device_ids": ["abc"]})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client.transfer_playback("abc").await.unwrap();
    }

    #[tokio::test]
    async fn start_playback_builds_context_payload() {
        let server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/v1/me/player/play"))
            .and(query_param("device_id", "abc"))
            .and(body_json(json!({
                "position_ms": 0,
                "context_uri": "spotify:album:6akEvsycLGftJxYudPjmqK",
                "offset": {"position": 5}
            })))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .start_playback(StartPlaybackOptions {
                device_id: Some("abc".to_string()),
                context_uri: Some("spotify:album:6akEvsycLGftJxYudPjmqK".to_string()),
                position_offset: Some(5),
                ..StartPlaybackOptions::default()
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn queue_and_skip_calls_use_post() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/v1/me/player/queue"))
            .and(body_json(json!({"uri": "spotify:track:4yOn1TEcfsKHUJCL2h1r8I"})))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/me/player/next"))
            .and(query_param("device_id", "abc"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("POST"))
            .and(path("/v1/me/player/previous"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let client = client_for(&server);
        client
            .add_to_queue("spotify:track:4yOn1TEcfsKHUJCL2h1r8I", None)
            .await
            .unwrap();
        client.next_track(Some("abc")).await.unwrap();
        client.previous_track(None).await.unwrap();
    }

    #[tokio::test]
    async fn recently_played_tracks_decode_with_timestamps() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/v1/me/player/recently-played"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "items": [{
                    "played_at": "2024-01-15T09:26:42Z",
                    "track": track_item(),
                    "context": null
                }]
            })))
            .mount(&server)
            .await;

        let client = client_for(&server);
        let played = client.get_recently_played_tracks().await.unwrap();
        assert_eq!(played.len(), 1);
        assert_eq!(played[0].track.track.name, "Global Warming (Intro)");
    }
}
