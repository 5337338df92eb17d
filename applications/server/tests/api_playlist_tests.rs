/// API integration tests for playlists, membership, likes, and cascades
mod common;

use axum::http::StatusCode;
use common::*;
use serde_json::json;

async fn setup_artist_and_song(app: &axum::Router, token: &str) -> (i64, i64) {
    let (_, artist) = post(app, "/artists", Some(token), json!({ "name": "Daft Punk" })).await;
    let artist_id = artist["id"].as_i64().unwrap();

    let (_, song) = post(
        app,
        "/songs",
        Some(token),
        json!({ "title": "One More Time", "artist_id": artist_id, "length": "00:05:20" }),
    )
    .await;
    let song_id = song["id"].as_i64().unwrap();

    (artist_id, song_id)
}

#[tokio::test]
async fn test_playlist_crud_and_per_owner_uniqueness() {
    let app = create_test_app().await;
    let alice = register_and_login(&app.router, "alice@example.com").await;
    let bob = register_and_login(&app.router, "bob@example.com").await;

    let (status, playlist) = post(
        &app.router,
        "/playlists",
        Some(&alice),
        json!({ "name": "Road Trip" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    // Private by default
    assert_eq!(playlist["private"], true);
    let playlist_id = playlist["id"].as_i64().unwrap();

    // Same owner, same name
    let (status, _) = post(
        &app.router,
        "/playlists",
        Some(&alice),
        json!({ "name": "Road Trip" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Different owner may reuse the name
    let (status, _) = post(
        &app.router,
        "/playlists",
        Some(&bob),
        json!({ "name": "Road Trip" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = put(
        &app.router,
        &format!("/playlists/{playlist_id}"),
        Some(&alice),
        json!({ "description": "Long drives" }),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["description"], "Long drives");
    assert_eq!(body["name"], "Road Trip");

    // Ownership gates update and delete
    let (status, _) = put(
        &app.router,
        &format!("/playlists/{playlist_id}"),
        Some(&bob),
        json!({ "name": "Hijacked" }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = delete(&app.router, &format!("/playlists/{playlist_id}"), Some(&bob)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) =
        delete(&app.router, &format!("/playlists/{playlist_id}"), Some(&alice)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app.router, &format!("/playlists/{playlist_id}"), Some(&alice)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_playlist_visibility() {
    let app = create_test_app().await;
    let alice = register_and_login(&app.router, "alice@example.com").await;
    let bob = register_and_login(&app.router, "bob@example.com").await;

    let (_, private) = post(
        &app.router,
        "/playlists",
        Some(&alice),
        json!({ "name": "Secret Stash", "private": true }),
    )
    .await;
    let private_id = private["id"].as_i64().unwrap();

    post(
        &app.router,
        "/playlists",
        Some(&alice),
        json!({ "name": "Party Mix", "private": false }),
    )
    .await;

    // Listing requires identity
    let (status, _) = get(&app.router, "/playlists", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    // Alice sees both of her playlists
    let (_, body) = get(&app.router, "/playlists", Some(&alice)).await;
    assert_eq!(body.as_array().unwrap().len(), 2);

    // Bob only ever sees the public one
    let (_, body) = get(&app.router, "/playlists", Some(&bob)).await;
    let names: Vec<_> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["Party Mix"]);

    // The tags parameter is accepted and ignored
    let (status, body) = get(&app.router, "/playlists?tags=party", Some(&bob)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    // Single-playlist read is gated the same way
    let (status, _) = get(&app.router, &format!("/playlists/{private_id}"), Some(&bob)).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    let (status, _) = get(&app.router, &format!("/playlists/{private_id}"), Some(&alice)).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_playlist_membership_lifecycle() {
    let app = create_test_app().await;
    let alice = register_and_login(&app.router, "alice@example.com").await;
    let bob = register_and_login(&app.router, "bob@example.com").await;

    let (_, song_id) = setup_artist_and_song(&app.router, &alice).await;

    let (_, playlist) = post(
        &app.router,
        "/playlists",
        Some(&alice),
        json!({ "name": "Road Trip", "private": true }),
    )
    .await;
    let playlist_id = playlist["id"].as_i64().unwrap();

    // Unknown playlist
    let (status, _) = post(
        &app.router,
        "/playlist-songs",
        Some(&alice),
        json!({ "playlist_id": 9999, "song_id": song_id }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Private playlist rejects additions from non-owners
    let (status, _) = post(
        &app.router,
        "/playlist-songs",
        Some(&bob),
        json!({ "playlist_id": playlist_id, "song_id": song_id }),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Unknown song
    let (status, _) = post(
        &app.router,
        "/playlist-songs",
        Some(&alice),
        json!({ "playlist_id": playlist_id, "song_id": 9999 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, membership) = post(
        &app.router,
        "/playlist-songs",
        Some(&alice),
        json!({ "playlist_id": playlist_id, "song_id": song_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(membership["playlist_id"], json!(playlist_id));
    assert_eq!(membership["song_id"], json!(song_id));

    // Duplicate membership
    let (status, _) = post(
        &app.router,
        "/playlist-songs",
        Some(&alice),
        json!({ "playlist_id": playlist_id, "song_id": song_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    // Membership listing is visibility-gated
    let (status, body) = get(
        &app.router,
        &format!("/playlist-songs/{playlist_id}"),
        Some(&alice),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_array().unwrap().len(), 1);

    let (status, _) = get(
        &app.router,
        &format!("/playlist-songs/{playlist_id}"),
        Some(&bob),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    // Removal is owner-only
    let (status, _) = delete(
        &app.router,
        &format!("/playlist-songs/{playlist_id}/{song_id}"),
        Some(&bob),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = delete(
        &app.router,
        &format!("/playlist-songs/{playlist_id}/{song_id}"),
        Some(&alice),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    // Removing the absent membership reports not found
    let (status, _) = delete(
        &app.router,
        &format!("/playlist-songs/{playlist_id}/{song_id}"),
        Some(&alice),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_playlist_accepts_additions_from_any_actor() {
    let app = create_test_app().await;
    let alice = register_and_login(&app.router, "alice@example.com").await;
    let bob = register_and_login(&app.router, "bob@example.com").await;

    let (_, song_id) = setup_artist_and_song(&app.router, &alice).await;

    let (_, playlist) = post(
        &app.router,
        "/playlists",
        Some(&alice),
        json!({ "name": "Party Mix", "private": false }),
    )
    .await;
    let playlist_id = playlist["id"].as_i64().unwrap();

    let (status, _) = post(
        &app.router,
        "/playlist-songs",
        Some(&bob),
        json!({ "playlist_id": playlist_id, "song_id": song_id }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    // But removal still belongs to the owner alone
    let (status, _) = delete(
        &app.router,
        &format!("/playlist-songs/{playlist_id}/{song_id}"),
        Some(&bob),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_like_toggle() {
    let app = create_test_app().await;
    let alice = register_and_login(&app.router, "alice@example.com").await;

    let (_, song_id) = setup_artist_and_song(&app.router, &alice).await;

    // Unknown song
    let (status, _) = post(
        &app.router,
        "/like",
        Some(&alice),
        json!({ "song_id": 9999, "dir": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // dir outside {0,1}
    let (status, _) = post(
        &app.router,
        "/like",
        Some(&alice),
        json!({ "song_id": song_id, "dir": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Like
    let (status, _) = post(
        &app.router,
        "/like",
        Some(&alice),
        json!({ "song_id": song_id, "dir": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (_, body) = get(&app.router, &format!("/songs/{song_id}"), None).await;
    assert_eq!(body["likes"], 1);

    // Liking twice conflicts and leaves one row
    let (status, _) = post(
        &app.router,
        "/like",
        Some(&alice),
        json!({ "song_id": song_id, "dir": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = get(&app.router, &format!("/songs/{song_id}"), None).await;
    assert_eq!(body["likes"], 1);

    // Unlike returns the count to its pre-like value
    let (status, _) = post(
        &app.router,
        "/like",
        Some(&alice),
        json!({ "song_id": song_id, "dir": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (_, body) = get(&app.router, &format!("/songs/{song_id}"), None).await;
    assert_eq!(body["likes"], 0);

    // Unliking an unliked song
    let (status, _) = post(
        &app.router,
        "/like",
        Some(&alice),
        json!({ "song_id": song_id, "dir": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cascades_visible_through_the_api() {
    let app = create_test_app().await;
    let alice = register_and_login(&app.router, "alice@example.com").await;

    let (artist_id, song_id) = setup_artist_and_song(&app.router, &alice).await;

    let (_, playlist) = post(
        &app.router,
        "/playlists",
        Some(&alice),
        json!({ "name": "Road Trip" }),
    )
    .await;
    let playlist_id = playlist["id"].as_i64().unwrap();

    post(
        &app.router,
        "/playlist-songs",
        Some(&alice),
        json!({ "playlist_id": playlist_id, "song_id": song_id }),
    )
    .await;
    post(
        &app.router,
        "/like",
        Some(&alice),
        json!({ "song_id": song_id, "dir": 1 }),
    )
    .await;

    // Deleting the artist removes its songs, and with them the likes and
    // playlist memberships
    let (status, _) = delete(&app.router, &format!("/artists/{artist_id}"), Some(&alice)).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get(&app.router, &format!("/songs/{song_id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = get(&app.router, "/songs", None).await;
    assert!(body.as_array().unwrap().is_empty());

    let (_, body) = get(
        &app.router,
        &format!("/playlist-songs/{playlist_id}"),
        Some(&alice),
    )
    .await;
    assert!(body.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_full_scenario_register_to_filtered_song_list() {
    let app = create_test_app().await;
    let token = register_and_login(&app.router, "u1@example.com").await;

    let (_, genre) = post(
        &app.router,
        "/genres",
        Some(&token),
        json!({ "label": "House" }),
    )
    .await;
    let genre_id = genre["id"].as_i64().unwrap();

    let (status, artist) = post(
        &app.router,
        "/artists",
        Some(&token),
        json!({ "name": "Daft Punk" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    let artist_id = artist["id"].as_i64().unwrap();

    let (status, song) = post(
        &app.router,
        "/songs",
        Some(&token),
        json!({
            "title": "One More Time",
            "artist_id": artist_id,
            "genre": "House",
            "length": "00:05:20"
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(song["genre_id"], json!(genre_id));

    let (status, body) = get(&app.router, "/songs?genre=House", None).await;
    assert_eq!(status, StatusCode::OK);
    let songs = body.as_array().unwrap();
    assert_eq!(songs.len(), 1);
    assert_eq!(songs[0]["title"], "One More Time");
    assert_eq!(songs[0]["likes"], 0);
}
