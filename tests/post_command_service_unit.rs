// tests/post_command_service_unit.rs
use chrono::{Duration, Utc};
use kiroku_core::application::commands::posts::{DeletePostCommand, UpdatePostCommand};
use kiroku_core::application::commands::topics::GetOrCreateTopicCommand;
use kiroku_core::application::error::ApplicationError;
use std::sync::Arc;

mod support;
use support::{
    builders, helpers::build_context, helpers::build_context_with_clock, mocks::FixedClock,
};

#[tokio::test]
async fn create_post_allocates_slug_from_title() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;

    let post = ctx
        .services
        .post_commands
        .create_post(&actor, builders::create_post_command("My First Post"))
        .await
        .unwrap();

    assert_eq!(post.slug, "my-first-post");
    assert_eq!(post.author_id, i64::from(actor.id));
}

#[tokio::test]
async fn slug_collision_falls_back_to_suffixed_candidate() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;
    ctx.post_repo.reserve_slug("my-first-post");

    let post = ctx
        .services
        .post_commands
        .create_post(&actor, builders::create_post_command("My First Post"))
        .await
        .unwrap();

    // Second attempt carries the two-character suffix.
    assert_eq!(post.slug, "my-first-post-xx");
}

#[tokio::test]
async fn slug_exhaustion_rolls_back_the_insert() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;

    ctx.post_repo.reserve_slug("taken");
    for attempt in 2..=9u32 {
        ctx.post_repo
            .reserve_slug(&format!("taken-{}", "x".repeat(attempt as usize)));
    }

    let err = ctx
        .services
        .post_commands
        .create_post(&actor, builders::create_post_command("Taken"))
        .await
        .unwrap_err();

    match err {
        ApplicationError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("title"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(ctx.post_repo.post_count(), 0, "insert was not rolled back");
}

#[tokio::test]
async fn slug_write_failure_aborts_and_rolls_back_the_insert() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;
    ctx.post_repo.fail_slug_writes_with("connection reset");

    let err = ctx
        .services
        .post_commands
        .create_post(&actor, builders::create_post_command("Doomed Post"))
        .await
        .unwrap_err();

    // A storage failure must not be retried as if it were a collision, and
    // must not surface as a validation error.
    assert!(matches!(err, ApplicationError::Infrastructure(_)));
    assert_eq!(ctx.post_repo.post_count(), 0, "insert was not rolled back");
}

#[tokio::test]
async fn short_description_is_derived_from_description() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;

    let mut command = builders::create_post_command("Long One");
    command.description = Some("B".repeat(450));
    let post = ctx
        .services
        .post_commands
        .create_post(&actor, command)
        .await
        .unwrap();

    assert_eq!(post.short_description, "B".repeat(200));
}

#[tokio::test]
async fn explicit_short_description_wins() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;

    let mut command = builders::create_post_command("Summarised");
    command.short_description = Some("the summary".into());
    let post = ctx
        .services
        .post_commands
        .create_post(&actor, command)
        .await
        .unwrap();

    assert_eq!(post.short_description, "the summary");
}

#[tokio::test]
async fn past_publish_date_is_rejected() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;

    let command =
        builders::scheduled_post_command("Back Dated", Utc::now() - Duration::hours(1));
    let err = ctx
        .services
        .post_commands
        .create_post(&actor, command)
        .await
        .unwrap_err();

    match err {
        ApplicationError::Validation { field, .. } => {
            assert_eq!(field.as_deref(), Some("publish_at"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[tokio::test]
async fn publish_now_stamps_the_current_time() {
    let now = Utc::now();
    let ctx = build_context_with_clock(Arc::new(FixedClock(now)));
    let (actor, _) = ctx.register_actor("alice").await;

    let post = ctx
        .services
        .post_commands
        .create_post(&actor, builders::create_post_command("Published"))
        .await
        .unwrap();

    assert_eq!(post.publish_at, Some(now));
}

#[tokio::test]
async fn unknown_topic_slugs_are_dropped() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;

    let rust = ctx
        .services
        .topic_commands
        .get_or_create_topic(&actor, GetOrCreateTopicCommand { name: "rust".into() })
        .await
        .unwrap();

    let mut command = builders::create_post_command("Tagged");
    command.topics = vec!["rust".into(), "no-such-topic".into()];
    let post = ctx
        .services
        .post_commands
        .create_post(&actor, command)
        .await
        .unwrap();

    assert_eq!(post.topic_ids, vec![rust.topic.id]);
}

#[tokio::test]
async fn update_keeps_the_slug_stable() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;

    let created = ctx
        .services
        .post_commands
        .create_post(&actor, builders::create_post_command("Original Title"))
        .await
        .unwrap();

    let updated = ctx
        .services
        .post_commands
        .update_post(
            &actor,
            UpdatePostCommand {
                slug: created.slug.clone(),
                title: Some("Renamed Entirely".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Renamed Entirely");
    assert_eq!(updated.slug, created.slug);
}

#[tokio::test]
async fn update_recomputes_preview_from_new_description() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;

    let created = ctx
        .services
        .post_commands
        .create_post(&actor, builders::create_post_command("Preview"))
        .await
        .unwrap();

    let updated = ctx
        .services
        .post_commands
        .update_post(
            &actor,
            UpdatePostCommand {
                slug: created.slug,
                description: Some("C".repeat(300)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.short_description, "C".repeat(200));
}

#[tokio::test]
async fn only_the_author_may_update() {
    let ctx = build_context();
    let (alice, _) = ctx.register_actor("alice").await;
    let (mallory, _) = ctx.register_actor("mallory").await;

    let created = ctx
        .services
        .post_commands
        .create_post(&alice, builders::create_post_command("Protected"))
        .await
        .unwrap();

    let err = ctx
        .services
        .post_commands
        .update_post(
            &mallory,
            UpdatePostCommand {
                slug: created.slug,
                title: Some("Defaced".into()),
                ..Default::default()
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::Forbidden(_)));
}

#[tokio::test]
async fn only_the_author_may_delete() {
    let ctx = build_context();
    let (alice, _) = ctx.register_actor("alice").await;
    let (mallory, _) = ctx.register_actor("mallory").await;

    let created = ctx
        .services
        .post_commands
        .create_post(&alice, builders::create_post_command("Kept"))
        .await
        .unwrap();

    let err = ctx
        .services
        .post_commands
        .delete_post(
            &mallory,
            DeletePostCommand {
                slug: created.slug.clone(),
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApplicationError::Forbidden(_)));

    ctx.services
        .post_commands
        .delete_post(&alice, DeletePostCommand { slug: created.slug })
        .await
        .unwrap();
    assert_eq!(ctx.post_repo.post_count(), 0);
}

#[tokio::test]
async fn deleting_a_missing_post_is_not_found() {
    let ctx = build_context();
    let (actor, _) = ctx.register_actor("alice").await;

    let err = ctx
        .services
        .post_commands
        .delete_post(
            &actor,
            DeletePostCommand {
                slug: "nothing-here".into(),
            },
        )
        .await
        .unwrap_err();

    assert!(matches!(err, ApplicationError::NotFound(_)));
}
