// tests/support/mocks/posts.rs
use async_trait::async_trait;
use folio_core::domain::errors::{DomainError, DomainResult};
use folio_core::domain::post::{
    NewPost, Post, PostId, PostListFilter, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository,
};
use std::sync::Mutex;

/// Post store enforcing slug uniqueness the way the database constraint does.
#[derive(Default)]
pub struct InMemoryPosts {
    state: Mutex<State>,
}

#[derive(Default)]
struct State {
    posts: Vec<Post>,
    next_id: i64,
    /// Writes that fail with `SlugTaken` before touching the store.
    injected_slug_races: u32,
    insert_calls: u32,
}

impl InMemoryPosts {
    pub fn seed(&self, post: Post) -> Post {
        let mut state = self.state.lock().unwrap();
        state.next_id = state.next_id.max(post.id.0);
        state.posts.push(post.clone());
        post
    }

    /// Make the next `count` writes lose a slug race.
    pub fn inject_slug_races(&self, count: u32) {
        self.state.lock().unwrap().injected_slug_races = count;
    }

    pub fn insert_calls(&self) -> u32 {
        self.state.lock().unwrap().insert_calls
    }

    pub fn get(&self, id: i64) -> Option<Post> {
        self.state
            .lock()
            .unwrap()
            .posts
            .iter()
            .find(|p| p.id.0 == id)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.state.lock().unwrap().posts.len()
    }
}

impl State {
    fn take_injected_race(&mut self) -> bool {
        if self.injected_slug_races > 0 {
            self.injected_slug_races -= 1;
            true
        } else {
            false
        }
    }

    fn slug_owned_by_other(&self, slug: &PostSlug, id: Option<PostId>) -> bool {
        self.posts
            .iter()
            .any(|p| &p.slug == slug && Some(p.id) != id)
    }
}

#[async_trait]
impl PostWriteRepository for InMemoryPosts {
    async fn insert(&self, post: NewPost) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        state.insert_calls += 1;
        if state.take_injected_race() || state.slug_owned_by_other(&post.slug, None) {
            return Err(DomainError::SlugTaken);
        }
        state.next_id += 1;
        let created = Post {
            id: PostId(state.next_id),
            title: post.title,
            content: post.content,
            slug: post.slug,
            tags: post.tags,
            published: post.published,
            created_at: post.created_at,
            updated_at: post.updated_at,
        };
        state.posts.push(created.clone());
        Ok(created)
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut state = self.state.lock().unwrap();
        if state.take_injected_race() {
            return Err(DomainError::SlugTaken);
        }
        if let Some(slug) = &update.slug {
            if state.slug_owned_by_other(slug, Some(update.id)) {
                return Err(DomainError::SlugTaken);
            }
        }

        let post = state
            .posts
            .iter_mut()
            .find(|p| p.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        if post.updated_at != update.original_updated_at {
            return Err(DomainError::Conflict("post was modified concurrently".into()));
        }

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(content) = update.content {
            post.content = content;
        }
        if let Some(slug) = update.slug {
            post.slug = slug;
        }
        if let Some(tags) = update.tags {
            post.tags = tags;
        }
        if let Some(published) = update.published {
            post.published = published;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut state = self.state.lock().unwrap();
        let before = state.posts.len();
        state.posts.retain(|p| p.id != id);
        if state.posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for InMemoryPosts {
    async fn find_by_id(&self, id: PostId) -> DomainResult<Option<Post>> {
        Ok(self.get(id.0))
    }

    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self
            .state
            .lock()
            .unwrap()
            .posts
            .iter()
            .find(|p| &p.slug == slug)
            .cloned())
    }

    async fn list(&self, filter: PostListFilter) -> DomainResult<Vec<Post>> {
        let state = self.state.lock().unwrap();
        let mut posts: Vec<Post> = state
            .posts
            .iter()
            .filter(|p| filter.include_drafts || p.published)
            .filter(|p| filter.tag.as_deref().is_none_or(|tag| p.tags.contains(tag)))
            .cloned()
            .collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.0.cmp(&a.id.0)));
        posts.truncate(filter.limit as usize);
        Ok(posts)
    }
}
