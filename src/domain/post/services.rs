// src/domain/post/services.rs
use std::sync::Arc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::errors::DomainResult;
use crate::domain::post::repository::PostReadRepository;
use crate::domain::post::value_objects::{MAX_SLUG_LEN, PostId, PostSlug, PostTitle};

pub const FALLBACK_SLUG: &str = "post";

/// Domain service responsible for producing unique slugs for posts.
pub struct PostSlugService {
    read_repo: Arc<dyn PostReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl PostSlugService {
    pub fn new(read_repo: Arc<dyn PostReadRepository>, generator: Arc<dyn SlugGenerator>) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// Normalized base before any collision suffix is applied.
    ///
    /// A non-blank `requested` slug wins over the title; when both normalize to
    /// nothing the fixed fallback is used. The base is only shortened when it
    /// exceeds the slug length limit.
    pub fn base_slug(&self, title: &PostTitle, requested: Option<&str>) -> String {
        let from_requested = requested
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(|value| self.generator.slugify(value))
            .filter(|value| !value.is_empty());

        let base = from_requested
            .unwrap_or_else(|| self.generator.slugify(title.as_str()));

        let base = truncate_slug(&base, MAX_SLUG_LEN);
        if base.is_empty() {
            FALLBACK_SLUG.to_string()
        } else {
            base
        }
    }

    /// Probe `base`, `base-1`, `base-2`, ... until the store has no owner for
    /// the candidate. A post identified by `ignore_id` does not count as an owner.
    pub async fn assign_unique_slug(
        &self,
        title: &PostTitle,
        requested: Option<&str>,
        ignore_id: Option<PostId>,
    ) -> DomainResult<PostSlug> {
        let base_slug = self.base_slug(title, requested);

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = PostSlug::new(candidate.clone())?;
            match self.read_repo.find_by_slug(&slug).await? {
                Some(existing) if ignore_id.is_some_and(|id| id == existing.id) => {
                    return Ok(slug);
                }
                Some(_) => {
                    tracing::debug!(slug = %slug, "slug taken, trying next suffix");
                    candidate = suffixed(&base_slug, counter);
                    counter += 1;
                }
                None => return Ok(slug),
            }
        }
    }
}

/// `base-counter`, with the base shortened just enough to stay a valid slug.
fn suffixed(base: &str, counter: u64) -> String {
    let suffix = format!("-{counter}");
    let stem = truncate_slug(base, MAX_SLUG_LEN.saturating_sub(suffix.len()));
    format!("{stem}{suffix}")
}

/// Cut to at most `max_len` bytes on a char boundary, then drop edge hyphens.
fn truncate_slug(value: &str, max_len: usize) -> String {
    let end = value
        .char_indices()
        .map(|(start, ch)| start + ch.len_utf8())
        .take_while(|end| *end <= max_len)
        .last()
        .unwrap_or(0);
    value[..end].trim_matches('-').to_string()
}
