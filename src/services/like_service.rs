//! Like Service - toggle semantics over the like repository

use serde::Serialize;

use crate::domain::ids::parse_id;
use crate::domain::{DomainError, Like, LikeKind, LikeRepository, LikeTarget};

/// Result of a toggle, as returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOutcome {
    pub liked: bool,
    pub created_like: Option<Like>,
}

/// Resolve a raw route parameter into a like target.
pub fn target(kind: LikeKind, raw_id: &str) -> Result<LikeTarget, DomainError> {
    let message = format!("Provide a valid id as {}", kind.param());
    let id = parse_id(raw_id, &message)?;
    Ok(LikeTarget { kind, id })
}

/// Unlike when `user_id` already likes the target, like it otherwise.
pub async fn toggle_like(
    repo: &dyn LikeRepository,
    target: &LikeTarget,
    user_id: &str,
) -> Result<ToggleOutcome, DomainError> {
    if repo.delete(target, user_id).await? {
        tracing::debug!("{} {} unliked by {}", target.kind.label(), target.id, user_id);
        return Ok(ToggleOutcome {
            liked: false,
            created_like: None,
        });
    }

    if !repo.target_exists(target).await? {
        return Err(DomainError::not_found(format!(
            "{} not found",
            target.kind.label()
        )));
    }

    // None: a concurrent request inserted the same like first
    let created_like = repo.create(target, user_id).await?;
    tracing::debug!("{} {} liked by {}", target.kind.label(), target.id, user_id);

    Ok(ToggleOutcome {
        liked: true,
        created_like,
    })
}
