// src/domain/services/slug.rs
use std::future::Future;
use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::{DomainError, DomainResult};

/// Upper bound on slug persist attempts, including the unsuffixed first try.
pub const MAX_SLUG_ATTEMPTS: u32 = 9;

/// Domain service that turns a human-readable base text into a unique,
/// URL-safe slug by racing candidates against the store's unique index.
///
/// The caller supplies `persist_attempt`, which must atomically write the
/// candidate onto an already-persisted entity and report a collision as
/// `DomainError::Conflict`. The first successful write wins. A conflict moves
/// on to the next candidate; any other error aborts the loop immediately so
/// that connectivity failures are not mistaken for collisions. On exhaustion
/// the caller is responsible for rolling back the speculatively created
/// entity.
pub struct SlugAllocator {
    generator: Arc<dyn SlugGenerator>,
}

impl SlugAllocator {
    pub fn new(generator: Arc<dyn SlugGenerator>) -> Self {
        Self { generator }
    }

    pub async fn allocate<F, Fut>(
        &self,
        base_text: &str,
        mut persist_attempt: F,
    ) -> DomainResult<String>
    where
        F: FnMut(String) -> Fut,
        Fut: Future<Output = DomainResult<()>>,
    {
        let base = self.generator.slugify(base_text);
        let base_slug = if base.is_empty() {
            // Titles made entirely of non-transliterable characters slugify
            // to nothing; fall back to a timestamp-derived base.
            format!("entry-{}", Utc::now().timestamp())
        } else {
            base
        };

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let candidate = if attempt == 1 {
                base_slug.clone()
            } else {
                format!("{base_slug}-{}", self.generator.random_suffix(attempt))
            };

            match persist_attempt(candidate.clone()).await {
                Ok(()) => return Ok(candidate),
                Err(DomainError::Conflict(_)) => {
                    tracing::debug!(attempt, candidate, "slug candidate collided");
                }
                Err(other) => return Err(other),
            }
        }

        Err(DomainError::Conflict(format!(
            "could not allocate a unique slug for '{base_slug}'"
        )))
    }
}
