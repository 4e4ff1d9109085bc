use crate::models::{
    comment, like, playlist, playlist_video, subscription, timestamp, tweet, user, video,
};
use sea_orm::sea_query::{IntoIden, OnConflict};
use sea_orm::*;

/// Demo accounts created by [`seed_demo_data`]: (id, username).
pub const DEMO_USERS: [(&str, &str); 2] = [
    ("8d1f2b4e-3c6a-4d7e-9f10-2a3b4c5d6e01", "alice"),
    ("8d1f2b4e-3c6a-4d7e-9f10-2a3b4c5d6e02", "bob"),
];

const ALICE_PUBLIC_VIDEO: &str = "5b7c9d1e-2f3a-4b5c-8d6e-7f8091a2b301";
const ALICE_DRAFT_VIDEO: &str = "5b7c9d1e-2f3a-4b5c-8d6e-7f8091a2b302";
const BOB_VIDEO: &str = "5b7c9d1e-2f3a-4b5c-8d6e-7f8091a2b303";

/// Insert a row unless its primary key is already taken.
async fn insert_once<A>(
    db: &DatabaseConnection,
    model: A,
    key: impl IntoIden,
) -> Result<(), DbErr>
where
    A: ActiveModelTrait,
    <A::Entity as EntityTrait>::Model: IntoActiveModel<A>,
{
    <A::Entity as EntityTrait>::insert(model)
        .on_conflict(OnConflict::column(key).do_nothing().to_owned())
        .exec_without_returning(db)
        .await?;
    Ok(())
}

/// Idempotent demo data: two channels, a few videos, and some engagement
pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    let now = timestamp();

    // 1. Users
    for (id, username) in DEMO_USERS {
        let account = user::ActiveModel {
            id: Set(id.to_owned()),
            username: Set(username.to_owned()),
            email: Set(format!("{}@vidtube.dev", username)),
            full_name: Set(format!("{} (demo)", username)),
            avatar: Set(Some(format!("https://avatars.vidtube.dev/{}.png", username))),
            cover_image: Set(None),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        };
        insert_once(db, account, user::Column::Id).await?;
    }
    let (alice, bob) = (DEMO_USERS[0].0, DEMO_USERS[1].0);

    // 2. Videos (one of alice's is still a draft)
    let videos = [
        (ALICE_PUBLIC_VIDEO, alice, "Rust in ten minutes", true, 120),
        (ALICE_DRAFT_VIDEO, alice, "Unfinished: async deep dive", false, 0),
        (BOB_VIDEO, bob, "Making sourdough", true, 42),
    ];
    for (id, owner, title, is_published, views) in videos {
        let clip = video::ActiveModel {
            id: Set(id.to_owned()),
            video_file: Set(format!("https://cdn.vidtube.dev/videos/{}.mp4", id)),
            thumbnail: Set(format!("https://cdn.vidtube.dev/thumbs/{}.jpg", id)),
            title: Set(title.to_owned()),
            description: Set(format!("{} - demo upload", title)),
            duration: Set(600.0),
            views: Set(views),
            is_published: Set(is_published),
            owner_id: Set(owner.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        };
        insert_once(db, clip, video::Column::Id).await?;
    }

    // 3. A comment, a tweet, a subscription
    insert_once(
        db,
        comment::ActiveModel {
            id: Set("c0a80101-0000-4000-8000-000000000001".to_owned()),
            content: Set("Great explanation!".to_owned()),
            video_id: Set(ALICE_PUBLIC_VIDEO.to_owned()),
            owner_id: Set(bob.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        comment::Column::Id,
    )
    .await?;

    insert_once(
        db,
        tweet::ActiveModel {
            id: Set("c0a80101-0000-4000-8000-000000000002".to_owned()),
            content: Set("New video is up".to_owned()),
            owner_id: Set(alice.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        tweet::Column::Id,
    )
    .await?;

    insert_once(
        db,
        subscription::ActiveModel {
            id: Set("c0a80101-0000-4000-8000-000000000003".to_owned()),
            subscriber_id: Set(bob.to_owned()),
            channel_id: Set(alice.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        subscription::Column::Id,
    )
    .await?;

    // 4. Bob likes alice's public video
    insert_once(
        db,
        like::ActiveModel {
            id: Set("c0a80101-0000-4000-8000-000000000004".to_owned()),
            video_id: Set(Some(ALICE_PUBLIC_VIDEO.to_owned())),
            comment_id: Set(None),
            tweet_id: Set(None),
            liked_by: Set(bob.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        like::Column::Id,
    )
    .await?;

    // 5. A playlist of bob's mixing both channels
    let playlist_id = "c0a80101-0000-4000-8000-000000000005";
    insert_once(
        db,
        playlist::ActiveModel {
            id: Set(playlist_id.to_owned()),
            name: Set("Weekend watching".to_owned()),
            description: Set("Things to catch up on over the weekend".to_owned()),
            owner_id: Set(bob.to_owned()),
            created_at: Set(now.clone()),
            updated_at: Set(now.clone()),
        },
        playlist::Column::Id,
    )
    .await?;

    for (position, video_id) in [ALICE_PUBLIC_VIDEO, BOB_VIDEO].into_iter().enumerate() {
        let entry = playlist_video::ActiveModel {
            playlist_id: Set(playlist_id.to_owned()),
            video_id: Set(video_id.to_owned()),
            position: Set(position as i32),
            added_at: Set(now.clone()),
        };
        playlist_video::Entity::insert(entry)
            .on_conflict(
                OnConflict::columns([
                    playlist_video::Column::PlaylistId,
                    playlist_video::Column::VideoId,
                ])
                .do_nothing()
                .to_owned(),
            )
            .exec_without_returning(db)
            .await?;
    }

    Ok(())
}
