// src/application/commands/posts/update.rs
use super::{MAX_SLUG_ATTEMPTS, PostCommandService};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        activity::ActivityKind,
        errors::DomainError,
        post::{Post, PostContent, PostId, PostTags, PostTitle, PostUpdate},
    },
};

/// Partial edit. Omitted fields keep their current value; the slug only
/// changes when a new one is explicitly requested.
#[derive(Default)]
pub struct UpdatePostCommand {
    pub id: i64,
    pub title: Option<String>,
    pub content: Option<String>,
    pub slug: Option<String>,
    pub tags: Option<Vec<String>>,
    pub published: Option<bool>,
}

impl PostCommandService {
    pub async fn update_post(
        &self,
        actor: &AuthenticatedUser,
        command: UpdatePostCommand,
    ) -> ApplicationResult<PostDto> {
        ensure_capability(actor, "posts", "update")?;

        let id = PostId::new(command.id)?;
        let mut post = self
            .read_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;
        let was_published = post.published;

        let UpdatePostCommand {
            id: _,
            title,
            content,
            slug,
            tags,
            published,
        } = command;
        let title = title.map(PostTitle::new).transpose()?;
        let content = content.map(PostContent::new).transpose()?;
        let tags = tags.map(PostTags::new).transpose()?;
        let requested_slug = slug.filter(|value| !value.trim().is_empty());

        let now = self.clock.now();
        let mut update = PostUpdate::new(id, post.updated_at);

        if title.is_some() || content.is_some() {
            let new_title = title.unwrap_or_else(|| post.title.clone());
            let new_content = content.unwrap_or_else(|| post.content.clone());
            post.set_content(new_title.clone(), new_content.clone(), now);
            update = update.with_title(new_title).with_content(new_content);
        }

        if let Some(tags) = tags {
            post.set_tags(tags.clone(), now);
            update = update.with_tags(tags);
        }

        if let Some(flag) = published.filter(|flag| *flag != post.published) {
            post.set_published(flag, now);
            update = update.with_published(flag);
        }

        if update.is_empty() && requested_slug.is_none() {
            return Ok(post.into());
        }
        update.set_updated_at(now);

        let updated = self
            .apply_update(&post, update, requested_slug.as_deref())
            .await?;
        tracing::info!(post_id = updated.id.0, slug = %updated.slug, "post updated");

        match (was_published, updated.published) {
            (false, true) => self.record_activity(&updated, ActivityKind::Publish).await,
            (true, true) => self.record_activity(&updated, ActivityKind::Update).await,
            _ => {}
        }

        Ok(updated.into())
    }

    async fn apply_update(
        &self,
        post: &Post,
        update: PostUpdate,
        requested_slug: Option<&str>,
    ) -> ApplicationResult<Post> {
        let Some(requested) = requested_slug else {
            return Ok(self.write_repo.update(update).await?);
        };

        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = self
                .slug_service
                .assign_unique_slug(&post.title, Some(requested), Some(post.id))
                .await?;
            match self.write_repo.update(update.clone().with_slug(slug)).await {
                Ok(updated) => return Ok(updated),
                Err(DomainError::SlugTaken) => {
                    tracing::debug!(attempt, post_id = post.id.0, "slug claimed concurrently, retrying");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ApplicationError::conflict(
            "could not assign a unique slug, please retry",
        ))
    }
}
