use super::CrosspostCommandService;
use crate::{
    application::{
        commands::capability::ensure_capability,
        dto::{AuthenticatedUser, CrosspostResultDto},
        error::{ApplicationError, ApplicationResult},
        ports::publisher::PublishRequest,
    },
    domain::post::{Post, PostId},
};

pub struct CrosspostPostCommand {
    pub id: i64,
}

impl CrosspostCommandService {
    pub async fn crosspost_post(
        &self,
        actor: &AuthenticatedUser,
        command: CrosspostPostCommand,
    ) -> ApplicationResult<CrosspostResultDto> {
        ensure_capability(actor, "crosspost", "publish")?;

        let id = PostId::new(command.id)?;
        let post = self
            .post_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("post not found"))?;

        let url = self.publish_post(actor, &post).await?;
        Ok(CrosspostResultDto::published(url))
    }

    /// Mirror `post` with the actor's stored token and return the canonical URL.
    pub(crate) async fn publish_post(
        &self,
        actor: &AuthenticatedUser,
        post: &Post,
    ) -> ApplicationResult<String> {
        let credential = self
            .credential_repo
            .find_by_user(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::validation("cross-post account is not connected"))?;

        if post.tags.is_empty() {
            return Err(ApplicationError::validation(
                "at least one tag is required for cross-posting",
            ));
        }

        let request = PublishRequest {
            title: post.title.as_str().to_string(),
            body: post.content.as_str().to_string(),
            tags: post.tags.as_slice().to_vec(),
            private: false,
        };
        let published = self
            .publisher
            .publish(credential.access_token.expose(), request)
            .await?;
        tracing::info!(post_id = post.id.0, url = %published.url, "post cross-posted");
        Ok(published.url)
    }
}
