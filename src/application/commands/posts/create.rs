// src/application/commands/posts/create.rs
use super::{MAX_SLUG_ATTEMPTS, PostCommandService};
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CreatePostResultDto, CrosspostResultDto, PostDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::{
        activity::ActivityKind,
        errors::DomainError,
        post::{NewPost, Post, PostContent, PostTags, PostTitle},
    },
};

pub struct CreatePostCommand {
    pub title: String,
    pub content: String,
    pub slug: Option<String>,
    pub tags: Vec<String>,
    pub published: bool,
    pub crosspost: bool,
}

impl CreatePostCommand {
    pub fn builder() -> CreatePostCommandBuilder {
        CreatePostCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreatePostCommandBuilder {
    title: Option<String>,
    content: Option<String>,
    slug: Option<String>,
    tags: Vec<String>,
    published: bool,
    crosspost: bool,
}

impl CreatePostCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn published(mut self, published: bool) -> Self {
        self.published = published;
        self
    }

    pub fn crosspost(mut self, crosspost: bool) -> Self {
        self.crosspost = crosspost;
        self
    }

    pub fn build(self) -> Result<CreatePostCommand, &'static str> {
        Ok(CreatePostCommand {
            title: self.title.ok_or("title is required")?,
            content: self.content.ok_or("content is required")?,
            slug: self.slug,
            tags: self.tags,
            published: self.published,
            crosspost: self.crosspost,
        })
    }
}

impl PostCommandService {
    pub async fn create_post(
        &self,
        actor: &AuthenticatedUser,
        command: CreatePostCommand,
    ) -> ApplicationResult<CreatePostResultDto> {
        ensure_capability(actor, "posts", "create")?;
        if command.crosspost {
            ensure_capability(actor, "crosspost", "publish")?;
        }

        let title = PostTitle::new(command.title)?;
        let content = PostContent::new(command.content)?;
        let tags = PostTags::new(command.tags)?;

        let created = self
            .insert_with_unique_slug(title, content, tags, command.slug.as_deref(), command.published)
            .await?;
        tracing::info!(post_id = created.id.0, slug = %created.slug, "post created");

        if created.published {
            self.record_activity(&created, ActivityKind::Publish).await;
        }

        let crosspost = if command.crosspost {
            Some(self.crosspost_after_save(actor, &created).await)
        } else {
            None
        };

        Ok(CreatePostResultDto {
            post: PostDto::from(created),
            crosspost,
        })
    }

    /// Re-run slug assignment when a concurrent writer claims the same slug
    /// between the existence probe and the insert.
    async fn insert_with_unique_slug(
        &self,
        title: PostTitle,
        content: PostContent,
        tags: PostTags,
        requested_slug: Option<&str>,
        published: bool,
    ) -> ApplicationResult<Post> {
        for attempt in 1..=MAX_SLUG_ATTEMPTS {
            let slug = self
                .slug_service
                .assign_unique_slug(&title, requested_slug, None)
                .await?;
            let now = self.clock.now();
            let new_post = NewPost {
                title: title.clone(),
                content: content.clone(),
                slug,
                tags: tags.clone(),
                published,
                created_at: now,
                updated_at: now,
            };

            match self.write_repo.insert(new_post).await {
                Ok(post) => return Ok(post),
                Err(DomainError::SlugTaken) => {
                    tracing::debug!(attempt, "slug claimed concurrently, retrying");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ApplicationError::conflict(
            "could not assign a unique slug, please retry",
        ))
    }

    async fn crosspost_after_save(
        &self,
        actor: &AuthenticatedUser,
        post: &Post,
    ) -> CrosspostResultDto {
        match self.crosspost.publish_post(actor, post).await {
            Ok(url) => CrosspostResultDto::published(url),
            Err(err) if err.is_client_error() => {
                tracing::info!(post_id = post.id.0, reason = %err, "cross-post skipped");
                CrosspostResultDto::failed(err.to_string())
            }
            Err(err) => {
                tracing::warn!(post_id = post.id.0, error = %err, "cross-post failed after save");
                CrosspostResultDto::failed(err.to_string())
            }
        }
    }
}
