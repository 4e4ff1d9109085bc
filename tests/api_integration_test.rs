use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use serde_json::{Value, json};
use tower::util::ServiceExt; // for `oneshot`
use vidtube::api;
use vidtube::auth;
use vidtube::db;
use vidtube::infrastructure::AppState;
use vidtube::models::{comment, like, subscription, tweet, user, video};

const MISSING_ID: &str = "00000000-0000-4000-8000-000000000000";

// Helper to create a test app backed by a fresh in-memory database
async fn setup_test_app() -> (Router, DatabaseConnection) {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let app = Router::new().nest("/api/v1", api::api_router(AppState::new(db.clone())));
    (app, db)
}

fn ts(day: u32) -> String {
    format!("2024-01-{:02}T00:00:00.000000Z", day)
}

// Helper to create a user, returning (id, bearer token)
async fn create_test_user(db: &DatabaseConnection, username: &str) -> (String, String) {
    let id = uuid::Uuid::new_v4().to_string();
    user::ActiveModel {
        id: Set(id.clone()),
        username: Set(username.to_string()),
        email: Set(format!("{}@example.com", username)),
        full_name: Set(format!("{} Tester", username)),
        avatar: Set(Some(format!("https://img.example.com/{}.png", username))),
        cover_image: Set(None),
        created_at: Set(ts(1)),
        updated_at: Set(ts(1)),
    }
    .insert(db)
    .await
    .expect("Failed to create user");

    let token = auth::create_jwt(&id, username).expect("Failed to create token");
    (id, token)
}

async fn create_test_video(
    db: &DatabaseConnection,
    owner_id: &str,
    title: &str,
    is_published: bool,
    views: i64,
    day: u32,
) -> String {
    let id = uuid::Uuid::new_v4().to_string();
    video::ActiveModel {
        id: Set(id.clone()),
        video_file: Set(format!("https://cdn.example.com/{}.mp4", id)),
        thumbnail: Set(format!("https://cdn.example.com/{}.jpg", id)),
        title: Set(title.to_string()),
        description: Set(format!("About {}", title)),
        duration: Set(90.0),
        views: Set(views),
        is_published: Set(is_published),
        owner_id: Set(owner_id.to_string()),
        created_at: Set(ts(day)),
        updated_at: Set(ts(day)),
    }
    .insert(db)
    .await
    .expect("Failed to create video");
    id
}

async fn create_test_like(db: &DatabaseConnection, video_id: &str, user_id: &str, day: u32) {
    like::ActiveModel {
        id: Set(uuid::Uuid::new_v4().to_string()),
        video_id: Set(Some(video_id.to_string())),
        comment_id: Set(None),
        tweet_id: Set(None),
        liked_by: Set(user_id.to_string()),
        created_at: Set(ts(day)),
        updated_at: Set(ts(day)),
    }
    .insert(db)
    .await
    .expect("Failed to create like");
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    token: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder()
        .uri(uri)
        .method(method)
        .header(header::AUTHORIZATION, format!("Bearer {}", token));

    let req = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&payload).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_channel_stats_empty_channel() {
    let (app, db) = setup_test_app().await;
    let (_, token) = create_test_user(&db, "newcomer").await;

    let (status, body) = send(&app, Method::GET, "/api/v1/dashboard/stats", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["stats"],
        json!({ "totalVideos": 0, "totalViews": 0, "totalSubscribers": 0, "totalLikes": 0 })
    );
}

#[tokio::test]
async fn test_channel_stats_totals() {
    let (app, db) = setup_test_app().await;
    let (alice, token) = create_test_user(&db, "alice").await;
    let (bob, _) = create_test_user(&db, "bob").await;
    let (carol, _) = create_test_user(&db, "carol").await;

    let first = create_test_video(&db, &alice, "First", true, 10, 2).await;
    let draft = create_test_video(&db, &alice, "Draft", false, 5, 3).await;
    let elsewhere = create_test_video(&db, &bob, "Bob's", true, 1000, 4).await;

    create_test_like(&db, &first, &bob, 5).await;
    create_test_like(&db, &first, &carol, 5).await;
    create_test_like(&db, &draft, &bob, 6).await;
    create_test_like(&db, &elsewhere, &alice, 6).await;

    for subscriber in [&bob, &carol] {
        subscription::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            subscriber_id: Set(subscriber.clone()),
            channel_id: Set(alice.clone()),
            created_at: Set(ts(7)),
            updated_at: Set(ts(7)),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    let (status, body) = send(&app, Method::GET, "/api/v1/dashboard/stats", &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["data"]["stats"],
        json!({ "totalVideos": 2, "totalViews": 15, "totalSubscribers": 2, "totalLikes": 3 })
    );
}

#[tokio::test]
async fn test_channel_videos_paginated_newest_first() {
    let (app, db) = setup_test_app().await;
    let (alice, token) = create_test_user(&db, "alice").await;
    let (bob, _) = create_test_user(&db, "bob").await;

    let oldest = create_test_video(&db, &alice, "Oldest", true, 0, 2).await;
    let middle = create_test_video(&db, &alice, "Middle", false, 0, 3).await;
    let newest = create_test_video(&db, &alice, "Newest", true, 0, 4).await;
    create_test_video(&db, &bob, "Not mine", true, 0, 5).await;
    create_test_like(&db, &newest, &bob, 6).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/dashboard/videos?page=1&limit=2",
        &token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let videos = body["data"]["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0]["_id"], newest.as_str());
    assert_eq!(videos[0]["numberOfLikes"], 1);
    assert_eq!(videos[0]["numberOfComments"], 0);
    assert_eq!(videos[0]["owner"], alice.as_str());
    // Unpublished videos are still listed for their owner
    assert_eq!(videos[1]["_id"], middle.as_str());
    assert_eq!(videos[1]["isPublished"], false);

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/v1/dashboard/videos?page=2&limit=2",
        &token,
        None,
    )
    .await;
    let videos = body["data"]["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["_id"], oldest.as_str());

    // Junk values fall back to the defaults
    let (status, body) = send(
        &app,
        Method::GET,
        "/api/v1/dashboard/videos?page=abc&limit=-3",
        &token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["videos"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_huge_page_numbers_return_empty_lists() {
    let (app, db) = setup_test_app().await;
    let (alice, token) = create_test_user(&db, "alice").await;
    create_test_video(&db, &alice, "Only", true, 0, 2).await;

    let playlists_uri = format!("/api/v1/playlist/user/{}?page=1e30", alice);
    let cases = [
        ("/api/v1/dashboard/videos?page=1e30", "videos"),
        ("/api/v1/likes/videos?page=100000000000000000&limit=100", "videos"),
        (playlists_uri.as_str(), "playlists"),
    ];

    for (uri, key) in cases {
        let (status, body) = send(&app, Method::GET, uri, &token, None).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(body["data"][key], json!([]), "{}", uri);
    }
}

#[tokio::test]
async fn test_channel_videos_count_comments() {
    let (app, db) = setup_test_app().await;
    let (alice, token) = create_test_user(&db, "alice").await;
    let (bob, _) = create_test_user(&db, "bob").await;
    let video_id = create_test_video(&db, &alice, "Talk", true, 0, 2).await;

    for text in ["Nice", "Great"] {
        comment::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            content: Set(text.to_string()),
            video_id: Set(video_id.clone()),
            owner_id: Set(bob.clone()),
            created_at: Set(ts(3)),
            updated_at: Set(ts(3)),
        }
        .insert(&db)
        .await
        .unwrap();
    }

    let (_, body) = send(&app, Method::GET, "/api/v1/dashboard/videos", &token, None).await;
    assert_eq!(body["data"]["videos"][0]["numberOfComments"], 2);
}

// ---------------------------------------------------------------------------
// Likes
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_toggle_video_like_twice_restores_state() {
    let (app, db) = setup_test_app().await;
    let (alice, _) = create_test_user(&db, "alice").await;
    let (bob, bob_token) = create_test_user(&db, "bob").await;
    let video_id = create_test_video(&db, &alice, "Likeable", true, 0, 2).await;
    let uri = format!("/api/v1/likes/toggle/v/{}", video_id);

    let (status, body) = send(&app, Method::POST, &uri, &bob_token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["liked"], true);
    assert_eq!(body["data"]["createdLike"]["video"], video_id.as_str());
    assert_eq!(body["data"]["createdLike"]["likedBy"], bob.as_str());
    assert!(body["data"]["createdLike"].get("comment").is_none());

    let (status, body) = send(&app, Method::POST, &uri, &bob_token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], json!({ "liked": false, "createdLike": null }));

    let remaining = like::Entity::find().all(&db).await.unwrap();
    assert!(remaining.is_empty());
}

#[tokio::test]
async fn test_toggle_comment_and_tweet_likes() {
    let (app, db) = setup_test_app().await;
    let (alice, token) = create_test_user(&db, "alice").await;
    let video_id = create_test_video(&db, &alice, "Host", true, 0, 2).await;

    let comment_id = uuid::Uuid::new_v4().to_string();
    comment::ActiveModel {
        id: Set(comment_id.clone()),
        content: Set("First!".to_string()),
        video_id: Set(video_id),
        owner_id: Set(alice.clone()),
        created_at: Set(ts(3)),
        updated_at: Set(ts(3)),
    }
    .insert(&db)
    .await
    .unwrap();

    let tweet_id = uuid::Uuid::new_v4().to_string();
    tweet::ActiveModel {
        id: Set(tweet_id.clone()),
        content: Set("Hello".to_string()),
        owner_id: Set(alice),
        created_at: Set(ts(3)),
        updated_at: Set(ts(3)),
    }
    .insert(&db)
    .await
    .unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/likes/toggle/c/{}", comment_id),
        &token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["createdLike"]["comment"], comment_id.as_str());

    let (status, body) = send(
        &app,
        Method::POST,
        &format!("/api/v1/likes/toggle/t/{}", tweet_id),
        &token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["createdLike"]["tweet"], tweet_id.as_str());
}

#[tokio::test]
async fn test_toggle_like_missing_targets() {
    let (app, db) = setup_test_app().await;
    let (_, token) = create_test_user(&db, "alice").await;

    for (prefix, message) in [
        ("v", "Video not found"),
        ("c", "Comment not found"),
        ("t", "Tweet not found"),
    ] {
        let uri = format!("/api/v1/likes/toggle/{}/{}", prefix, MISSING_ID);
        let (status, body) = send(&app, Method::POST, &uri, &token, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], message);
        assert_eq!(body["success"], false);
    }
}

#[tokio::test]
async fn test_liked_videos_most_recent_first_with_visibility() {
    let (app, db) = setup_test_app().await;
    let (alice, _) = create_test_user(&db, "alice").await;
    let (bob, bob_token) = create_test_user(&db, "bob").await;

    let public = create_test_video(&db, &alice, "Public", true, 7, 2).await;
    let hidden = create_test_video(&db, &alice, "Hidden", false, 3, 3).await;
    let own_draft = create_test_video(&db, &bob, "Bob draft", false, 0, 4).await;
    let gone = create_test_video(&db, &alice, "Soon deleted", true, 0, 5).await;

    create_test_like(&db, &public, &bob, 10).await;
    create_test_like(&db, &hidden, &bob, 11).await;
    create_test_like(&db, &own_draft, &bob, 12).await;
    create_test_like(&db, &public, &alice, 13).await;
    create_test_like(&db, &gone, &bob, 14).await;
    video::Entity::delete_by_id(gone).exec(&db).await.unwrap();

    let (status, body) = send(&app, Method::GET, "/api/v1/likes/videos", &bob_token, None).await;
    assert_eq!(status, StatusCode::OK);
    let videos = body["data"]["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 3);

    // Bob owns his draft, so he sees it in full
    assert_eq!(videos[0]["_id"], own_draft.as_str());
    assert_eq!(videos[0]["title"], "Bob draft");

    // Someone else's unpublished video is reduced to id + flag
    assert_eq!(videos[1], json!({ "_id": hidden, "isPublished": false }));

    assert_eq!(videos[2]["_id"], public.as_str());
    assert_eq!(videos[2]["numberOfLikes"], 2);
    assert_eq!(videos[2]["views"], 7);
    assert_eq!(videos[2]["owner"]["_id"], alice.as_str());
    assert_eq!(videos[2]["owner"]["username"], "alice");
    assert_eq!(videos[2]["owner"]["fullName"], "alice Tester");

    let (_, body) = send(
        &app,
        Method::GET,
        "/api/v1/likes/videos?page=2&limit=2",
        &bob_token,
        None,
    )
    .await;
    let videos = body["data"]["videos"].as_array().unwrap();
    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0]["_id"], public.as_str());
}

// ---------------------------------------------------------------------------
// Playlists
// ---------------------------------------------------------------------------

async fn create_playlist(app: &Router, token: &str) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/api/v1/playlist",
        token,
        Some(json!({
            "name": "  Road trip  ",
            "description": "Songs and vlogs for the long drive"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body["data"]["playlist"].clone()
}

#[tokio::test]
async fn test_create_playlist() {
    let (app, db) = setup_test_app().await;
    let (alice, token) = create_test_user(&db, "alice").await;

    let playlist = create_playlist(&app, &token).await;
    assert_eq!(playlist["name"], "Road trip");
    assert_eq!(playlist["owner"], alice.as_str());
    assert_eq!(playlist["videos"], json!([]));
    assert!(uuid::Uuid::parse_str(playlist["_id"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn test_create_playlist_validation() {
    let (app, db) = setup_test_app().await;
    let (_, token) = create_test_user(&db, "alice").await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/playlist",
        &token,
        Some(json!({ "name": "abc", "description": "too short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Name should be between 5 and 60 characters");
    assert_eq!(
        body["errors"],
        json!([
            "Name should be between 5 and 60 characters",
            "Description should be between 20 and 200 characters"
        ])
    );
    assert_eq!(body["data"], Value::Null);

    // Whitespace padding does not count towards the bound
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/v1/playlist",
        &token,
        Some(json!({ "name": "  abc  ", "description": "A perfectly fine description" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["errors"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_playlist_malformed_body() {
    let (app, db) = setup_test_app().await;
    let (_, token) = create_test_user(&db, "alice").await;

    let req = Request::builder()
        .uri("/api/v1/playlist")
        .method(Method::POST)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();

    let response = app.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_add_and_remove_videos() {
    let (app, db) = setup_test_app().await;
    let (alice, token) = create_test_user(&db, "alice").await;
    let first = create_test_video(&db, &alice, "First", true, 0, 2).await;
    let second = create_test_video(&db, &alice, "Second", true, 0, 3).await;

    let playlist = create_playlist(&app, &token).await;
    let playlist_id = playlist["_id"].as_str().unwrap();

    for video_id in [&second, &first, &second] {
        let (status, body) = send(
            &app,
            Method::PATCH,
            &format!("/api/v1/playlist/add/{}/{}", video_id, playlist_id),
            &token,
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["data"]["added"], true);
    }

    // Re-adding is a no-op and insertion order is kept
    let (_, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/playlist/{}", playlist_id),
        &token,
        None,
    )
    .await;
    let ids: Vec<&str> = body["data"]["playlist"]["videos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["_id"].as_str().unwrap())
        .collect();
    assert_eq!(ids, vec![second.as_str(), first.as_str()]);

    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/playlist/remove/{}/{}", second, playlist_id),
        &token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["removed"], true);
    assert_eq!(body["data"]["updatedPlaylist"]["videos"], json!([first]));

    // Adding a video that does not exist
    let (status, body) = send(
        &app,
        Method::PATCH,
        &format!("/api/v1/playlist/add/{}/{}", MISSING_ID, playlist_id),
        &token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Video not found");
}

#[tokio::test]
async fn test_playlist_detail_visibility_and_deleted_videos() {
    let (app, db) = setup_test_app().await;
    let (alice, alice_token) = create_test_user(&db, "alice").await;
    let (_, bob_token) = create_test_user(&db, "bob").await;

    let public = create_test_video(&db, &alice, "Public", true, 0, 2).await;
    let draft = create_test_video(&db, &alice, "Draft", false, 0, 3).await;
    let doomed = create_test_video(&db, &alice, "Doomed", true, 0, 4).await;

    let playlist = create_playlist(&app, &alice_token).await;
    let playlist_id = playlist["_id"].as_str().unwrap();
    for video_id in [&public, &draft, &doomed] {
        send(
            &app,
            Method::PATCH,
            &format!("/api/v1/playlist/add/{}/{}", video_id, playlist_id),
            &alice_token,
            None,
        )
        .await;
    }
    video::Entity::delete_by_id(doomed.clone())
        .exec(&db)
        .await
        .unwrap();

    let uri = format!("/api/v1/playlist/{}", playlist_id);

    let (status, body) = send(&app, Method::GET, &uri, &bob_token, None).await;
    assert_eq!(status, StatusCode::OK);
    let detail = &body["data"]["playlist"];
    assert_eq!(detail["owner"]["username"], "alice");
    assert_eq!(detail["deletedVideos"], json!([doomed]));
    assert_eq!(detail["videos"][0]["title"], "Public");
    assert_eq!(detail["videos"][1], json!({ "_id": draft, "isPublished": false }));

    // The owner sees their own draft
    let (_, body) = send(&app, Method::GET, &uri, &alice_token, None).await;
    assert_eq!(body["data"]["playlist"]["videos"][1]["title"], "Draft");
}

#[tokio::test]
async fn test_non_owner_cannot_modify_playlist() {
    let (app, db) = setup_test_app().await;
    let (alice, alice_token) = create_test_user(&db, "alice").await;
    let (_, bob_token) = create_test_user(&db, "bob").await;
    let video_id = create_test_video(&db, &alice, "Mine", true, 0, 2).await;

    let playlist = create_playlist(&app, &alice_token).await;
    let playlist_id = playlist["_id"].as_str().unwrap();
    let denied =
        "Either the playlist does not exist or you do not have permission to perform this action";

    let attempts = [
        (
            Method::PATCH,
            format!("/api/v1/playlist/add/{}/{}", video_id, playlist_id),
            None,
        ),
        (
            Method::PATCH,
            format!("/api/v1/playlist/remove/{}/{}", video_id, playlist_id),
            None,
        ),
        (
            Method::PATCH,
            format!("/api/v1/playlist/{}", playlist_id),
            Some(json!({ "name": "Hijacked list" })),
        ),
        (Method::DELETE, format!("/api/v1/playlist/{}", playlist_id), None),
    ];

    for (method, uri, body) in attempts {
        let (status, response) = send(&app, method, &uri, &bob_token, body).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
        assert_eq!(response["message"], denied);
    }

    // Still intact
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/playlist/{}", playlist_id),
        &alice_token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["playlist"]["name"], "Road trip");
}

#[tokio::test]
async fn test_update_playlist() {
    let (app, db) = setup_test_app().await;
    let (_, token) = create_test_user(&db, "alice").await;
    let playlist = create_playlist(&app, &token).await;
    let uri = format!("/api/v1/playlist/{}", playlist["_id"].as_str().unwrap());

    let (status, body) = send(&app, Method::PATCH, &uri, &token, Some(json!({}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Nothing to update");

    let (status, body) = send(
        &app,
        Method::PATCH,
        &uri,
        &token,
        Some(json!({ "description": "short" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["message"],
        "Description should be between 20 and 200 characters"
    );

    let (status, body) = send(
        &app,
        Method::PATCH,
        &uri,
        &token,
        Some(json!({ "name": "Summer trip" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let updated = &body["data"]["updatedPlaylist"];
    assert_eq!(updated["name"], "Summer trip");
    assert_eq!(updated["description"], playlist["description"]);
}

#[tokio::test]
async fn test_delete_playlist() {
    let (app, db) = setup_test_app().await;
    let (alice, token) = create_test_user(&db, "alice").await;
    let video_id = create_test_video(&db, &alice, "Clip", true, 0, 2).await;
    let playlist = create_playlist(&app, &token).await;
    let playlist_id = playlist["_id"].as_str().unwrap();
    send(
        &app,
        Method::PATCH,
        &format!("/api/v1/playlist/add/{}/{}", video_id, playlist_id),
        &token,
        None,
    )
    .await;

    let uri = format!("/api/v1/playlist/{}", playlist_id);
    let (status, body) = send(&app, Method::DELETE, &uri, &token, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["deletedPlaylist"]["_id"], playlist_id);
    assert_eq!(body["data"]["deletedPlaylist"]["videos"], json!([video_id]));

    let (status, body) = send(&app, Method::GET, &uri, &token, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No playlist found!!");
}

#[tokio::test]
async fn test_get_user_playlists() {
    let (app, db) = setup_test_app().await;
    let (alice, alice_token) = create_test_user(&db, "alice").await;
    let (_, bob_token) = create_test_user(&db, "bob").await;
    let video_id = create_test_video(&db, &alice, "Clip", true, 0, 2).await;

    let first = create_playlist(&app, &alice_token).await;
    send(
        &app,
        Method::PATCH,
        &format!(
            "/api/v1/playlist/add/{}/{}",
            video_id,
            first["_id"].as_str().unwrap()
        ),
        &alice_token,
        None,
    )
    .await;

    // Anyone may list another user's playlists
    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/playlist/user/{}", alice),
        &bob_token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let playlists = body["data"]["playlists"].as_array().unwrap();
    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0]["numberOfVideos"], 1);
    assert_eq!(playlists[0]["owner"]["_id"], alice.as_str());
    assert!(playlists[0].get("videos").is_none());

    let (status, body) = send(
        &app,
        Method::GET,
        &format!("/api/v1/playlist/user/{}", MISSING_ID),
        &bob_token,
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["playlists"], json!([]));
}
