// tests/support/mocks.rs
//
// Stateful in-memory repositories backing the service-level and HTTP tests.
// They enforce the same uniqueness rules as the Postgres schema so the slug
// allocation and conflict paths behave like production.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use kiroku_core::application::ports::{time::Clock, util::SlugGenerator};
use kiroku_core::domain::comment::{
    Comment, CommentBody, CommentId, CommentRepository, NewComment, NewReply, Reply, ReplyId,
};
use kiroku_core::domain::errors::{DomainError, DomainResult};
use kiroku_core::domain::post::{
    NewPost, Post, PostId, PostListFilter, PostReadRepository, PostSlug, PostUpdate,
    PostWriteRepository,
};
use kiroku_core::domain::reaction::ReactionRepository;
use kiroku_core::domain::topic::{
    NewTopic, Topic, TopicId, TopicName, TopicRepository, TopicSlug,
};
use kiroku_core::domain::user::{NewUser, User, UserId, UserRepository, Username};
use std::collections::HashSet;
use std::sync::{
    Mutex,
    atomic::{AtomicI64, Ordering},
};

fn next(counter: &AtomicI64) -> i64 {
    counter.fetch_add(1, Ordering::SeqCst) + 1
}

#[derive(Default)]
pub struct MemoryUserRepo {
    users: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

#[async_trait]
impl UserRepository for MemoryUserRepo {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User> {
        let mut users = self.users.lock().unwrap();
        if users
            .iter()
            .any(|user| user.username.as_str() == new_user.username.as_str())
        {
            return Err(DomainError::Conflict("username already exists".into()));
        }
        let user = User {
            id: UserId::new(next(&self.next_id))?,
            username: new_user.username,
            full_name: new_user.full_name,
            image: new_user.image,
            password_hash: new_user.password_hash,
            is_active: new_user.is_active,
            joined_at: new_user.joined_at,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.username.as_str() == username.as_str())
            .cloned())
    }

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|user| user.id == id)
            .cloned())
    }

    async fn find_by_ids(&self, ids: &[UserId]) -> DomainResult<Vec<User>> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .filter(|user| ids.contains(&user.id))
            .cloned()
            .collect())
    }
}

impl MemoryUserRepo {
    pub fn deactivate(&self, username: &str) {
        let mut users = self.users.lock().unwrap();
        if let Some(user) = users
            .iter_mut()
            .find(|user| user.username.as_str() == username)
        {
            user.is_active = false;
        }
    }
}

#[derive(Default)]
pub struct MemoryTopicRepo {
    topics: Mutex<Vec<Topic>>,
    next_id: AtomicI64,
    /// Slugs treated as already taken, to force allocator collisions.
    reserved_slugs: Mutex<HashSet<String>>,
}

impl MemoryTopicRepo {
    pub fn reserve_slug(&self, slug: &str) {
        self.reserved_slugs.lock().unwrap().insert(slug.to_string());
    }

    pub fn topic_count(&self) -> usize {
        self.topics.lock().unwrap().len()
    }

    fn slug_taken(&self, topics: &[Topic], id: Option<TopicId>, slug: &str) -> bool {
        self.reserved_slugs.lock().unwrap().contains(slug)
            || topics
                .iter()
                .any(|topic| Some(topic.id) != id && topic.slug.as_str() == slug)
    }
}

#[async_trait]
impl TopicRepository for MemoryTopicRepo {
    async fn insert(&self, new_topic: NewTopic) -> DomainResult<Topic> {
        let mut topics = self.topics.lock().unwrap();
        if topics
            .iter()
            .any(|topic| topic.name.as_str() == new_topic.name.as_str())
        {
            return Err(DomainError::Conflict("topic name already exists".into()));
        }
        if self.slug_taken(&topics, None, new_topic.slug.as_str()) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let topic = Topic {
            id: TopicId::new(next(&self.next_id))?,
            name: new_topic.name,
            slug: new_topic.slug,
            user_id: new_topic.user_id,
            created_at: new_topic.created_at,
        };
        topics.push(topic.clone());
        Ok(topic)
    }

    async fn set_slug(&self, id: TopicId, slug: &TopicSlug) -> DomainResult<()> {
        let mut topics = self.topics.lock().unwrap();
        if self.slug_taken(&topics, Some(id), slug.as_str()) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let topic = topics
            .iter_mut()
            .find(|topic| topic.id == id)
            .ok_or_else(|| DomainError::NotFound("topic not found".into()))?;
        topic.set_slug(slug.clone());
        Ok(())
    }

    async fn delete(&self, id: TopicId) -> DomainResult<()> {
        let mut topics = self.topics.lock().unwrap();
        let before = topics.len();
        topics.retain(|topic| topic.id != id);
        if topics.len() == before {
            return Err(DomainError::NotFound("topic not found".into()));
        }
        Ok(())
    }

    async fn find_by_name(&self, name: &TopicName) -> DomainResult<Option<Topic>> {
        Ok(self
            .topics
            .lock()
            .unwrap()
            .iter()
            .find(|topic| topic.name.as_str() == name.as_str())
            .cloned())
    }

    async fn find_by_slugs(&self, slugs: &[String]) -> DomainResult<Vec<Topic>> {
        Ok(self
            .topics
            .lock()
            .unwrap()
            .iter()
            .filter(|topic| slugs.iter().any(|slug| slug == topic.slug.as_str()))
            .cloned()
            .collect())
    }

    async fn find_by_ids(&self, ids: &[TopicId]) -> DomainResult<Vec<Topic>> {
        Ok(self
            .topics
            .lock()
            .unwrap()
            .iter()
            .filter(|topic| ids.contains(&topic.id))
            .cloned()
            .collect())
    }

    async fn list(
        &self,
        name_contains: Option<&str>,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Topic>, u64)> {
        let topics = self.topics.lock().unwrap();
        let needle = name_contains.map(str::to_lowercase);
        let mut matching: Vec<Topic> = topics
            .iter()
            .filter(|topic| match &needle {
                Some(needle) => topic.name.as_str().contains(needle.as_str()),
                None => true,
            })
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.name.as_str().cmp(b.name.as_str()));
        let count = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, count))
    }
}

#[derive(Default)]
pub struct MemoryPostRepo {
    posts: Mutex<Vec<Post>>,
    next_id: AtomicI64,
    reserved_slugs: Mutex<HashSet<String>>,
    /// When set, `set_slug` fails with this persistence error while the other
    /// writes keep working, so the rollback delete can still go through.
    fail_slug_writes: Mutex<Option<String>>,
}

impl MemoryPostRepo {
    pub fn reserve_slug(&self, slug: &str) {
        self.reserved_slugs.lock().unwrap().insert(slug.to_string());
    }

    pub fn fail_slug_writes_with(&self, message: &str) {
        *self.fail_slug_writes.lock().unwrap() = Some(message.to_string());
    }

    pub fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn slug_taken(&self, posts: &[Post], id: Option<PostId>, slug: &str) -> bool {
        self.reserved_slugs.lock().unwrap().contains(slug)
            || posts
                .iter()
                .any(|post| Some(post.id) != id && post.slug.as_str() == slug)
    }

    fn matches(filter: &PostListFilter, post: &Post) -> bool {
        if let Some(cutoff) = filter.visible_before {
            if !matches!(post.publish_at, Some(at) if at < cutoff) {
                return false;
            }
        }
        if let Some(title) = &filter.title {
            if post.title.as_str() != title {
                return false;
            }
        }
        if let Some(author_id) = filter.author_id {
            if post.author_id != author_id {
                return false;
            }
        }
        if let Some(topic_ids) = &filter.topic_ids {
            if !post.topic_ids.iter().any(|id| topic_ids.contains(id)) {
                return false;
            }
        }
        true
    }
}

#[async_trait]
impl PostWriteRepository for MemoryPostRepo {
    async fn insert(&self, new_post: NewPost) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        if self.slug_taken(&posts, None, new_post.slug.as_str()) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let post = Post {
            id: PostId::new(next(&self.next_id))?,
            author_id: new_post.author_id,
            title: new_post.title,
            slug: new_post.slug,
            short_description: new_post.short_description,
            description: new_post.description,
            cover_image: new_post.cover_image,
            publish_at: new_post.publish_at,
            topic_ids: new_post.topic_ids,
            created_at: new_post.created_at,
            updated_at: new_post.updated_at,
        };
        posts.push(post.clone());
        Ok(post)
    }

    async fn set_slug(&self, id: PostId, slug: &PostSlug) -> DomainResult<()> {
        if let Some(message) = self.fail_slug_writes.lock().unwrap().as_ref() {
            return Err(DomainError::Persistence(message.clone()));
        }
        let mut posts = self.posts.lock().unwrap();
        if self.slug_taken(&posts, Some(id), slug.as_str()) {
            return Err(DomainError::Conflict("slug already exists".into()));
        }
        let post = posts
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;
        post.set_slug(slug.clone());
        Ok(())
    }

    async fn update(&self, update: PostUpdate) -> DomainResult<Post> {
        let mut posts = self.posts.lock().unwrap();
        let post = posts
            .iter_mut()
            .find(|post| post.id == update.id)
            .ok_or_else(|| DomainError::NotFound("post not found".into()))?;

        if let Some(title) = update.title {
            post.title = title;
        }
        if let Some(short_description) = update.short_description {
            post.short_description = short_description;
        }
        if let Some(description) = update.description {
            post.description = Some(description);
        }
        if let Some(cover_image) = update.cover_image {
            post.cover_image = Some(cover_image);
        }
        if let Some(publish_at) = update.publish_at {
            post.publish_at = publish_at;
        }
        if let Some(topic_ids) = update.topic_ids {
            post.topic_ids = topic_ids;
        }
        post.updated_at = update.updated_at;
        Ok(post.clone())
    }

    async fn delete(&self, id: PostId) -> DomainResult<()> {
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|post| post.id != id);
        if posts.len() == before {
            return Err(DomainError::NotFound("post not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl PostReadRepository for MemoryPostRepo {
    async fn find_by_slug(&self, slug: &PostSlug) -> DomainResult<Option<Post>> {
        Ok(self
            .posts
            .lock()
            .unwrap()
            .iter()
            .find(|post| post.slug.as_str() == slug.as_str())
            .cloned())
    }

    async fn list(
        &self,
        filter: &PostListFilter,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Post>, u64)> {
        let posts = self.posts.lock().unwrap();
        let mut matching: Vec<Post> = posts
            .iter()
            .filter(|post| Self::matches(filter, post))
            .cloned()
            .collect();
        matching.sort_by(|a, b| i64::from(b.id).cmp(&i64::from(a.id)));
        let count = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, count))
    }
}

#[derive(Default)]
pub struct MemoryCommentRepo {
    comments: Mutex<Vec<Comment>>,
    next_comment_id: AtomicI64,
    next_reply_id: AtomicI64,
}

impl MemoryCommentRepo {
    pub fn comment_count(&self) -> usize {
        self.comments.lock().unwrap().len()
    }
}

#[async_trait]
impl CommentRepository for MemoryCommentRepo {
    async fn insert(&self, new_comment: NewComment) -> DomainResult<Comment> {
        let comment = Comment {
            id: CommentId::new(next(&self.next_comment_id))?,
            post_id: new_comment.post_id,
            user_id: new_comment.user_id,
            body: new_comment.body,
            replies: Vec::new(),
            created_at: new_comment.created_at,
            updated_at: new_comment.updated_at,
        };
        self.comments.lock().unwrap().push(comment.clone());
        Ok(comment)
    }

    async fn find_by_id(&self, post_id: PostId, id: CommentId) -> DomainResult<Option<Comment>> {
        Ok(self
            .comments
            .lock()
            .unwrap()
            .iter()
            .find(|comment| comment.id == id && comment.post_id == post_id)
            .cloned())
    }

    async fn list_by_post(
        &self,
        post_id: PostId,
        offset: u64,
        limit: u32,
    ) -> DomainResult<(Vec<Comment>, u64)> {
        let comments = self.comments.lock().unwrap();
        let matching: Vec<Comment> = comments
            .iter()
            .filter(|comment| comment.post_id == post_id)
            .cloned()
            .collect();
        let count = matching.len() as u64;
        let page = matching
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect();
        Ok((page, count))
    }

    async fn update_body(
        &self,
        id: CommentId,
        body: &CommentBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .iter_mut()
            .find(|comment| comment.id == id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.body = body.clone();
        comment.updated_at = updated_at;
        Ok(())
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|comment| comment.id != id);
        if comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        let mut comments = self.comments.lock().unwrap();
        let before = comments.len();
        comments.retain(|comment| comment.post_id != post_id);
        Ok((before - comments.len()) as u64)
    }

    async fn insert_reply(&self, new_reply: NewReply) -> DomainResult<Reply> {
        let reply = Reply {
            id: ReplyId::new(next(&self.next_reply_id))?,
            comment_id: new_reply.comment_id,
            user_id: new_reply.user_id,
            body: new_reply.body,
            created_at: new_reply.created_at,
            updated_at: new_reply.updated_at,
        };
        let mut comments = self.comments.lock().unwrap();
        let comment = comments
            .iter_mut()
            .find(|comment| comment.id == reply.comment_id)
            .ok_or_else(|| DomainError::NotFound("comment not found".into()))?;
        comment.replies.push(reply.clone());
        Ok(reply)
    }

    async fn update_reply(
        &self,
        id: ReplyId,
        body: &CommentBody,
        updated_at: DateTime<Utc>,
    ) -> DomainResult<()> {
        let mut comments = self.comments.lock().unwrap();
        for comment in comments.iter_mut() {
            if let Some(reply) = comment.replies.iter_mut().find(|reply| reply.id == id) {
                reply.body = body.clone();
                reply.updated_at = updated_at;
                return Ok(());
            }
        }
        Err(DomainError::NotFound("reply not found".into()))
    }

    async fn delete_reply(&self, id: ReplyId) -> DomainResult<()> {
        let mut comments = self.comments.lock().unwrap();
        for comment in comments.iter_mut() {
            let before = comment.replies.len();
            comment.replies.retain(|reply| reply.id != id);
            if comment.replies.len() < before {
                return Ok(());
            }
        }
        Err(DomainError::NotFound("reply not found".into()))
    }
}

#[derive(Default)]
pub struct MemoryReactionRepo {
    reactions: Mutex<Vec<(PostId, UserId)>>,
}

impl MemoryReactionRepo {
    pub fn reaction_count(&self, post_id: PostId) -> usize {
        self.reactions
            .lock()
            .unwrap()
            .iter()
            .filter(|(post, _)| *post == post_id)
            .count()
    }
}

#[async_trait]
impl ReactionRepository for MemoryReactionRepo {
    async fn add(
        &self,
        post_id: PostId,
        user_id: UserId,
        _created_at: DateTime<Utc>,
    ) -> DomainResult<bool> {
        let mut reactions = self.reactions.lock().unwrap();
        if reactions.contains(&(post_id, user_id)) {
            return Ok(false);
        }
        reactions.push((post_id, user_id));
        Ok(true)
    }

    async fn remove(&self, post_id: PostId, user_id: UserId) -> DomainResult<bool> {
        let mut reactions = self.reactions.lock().unwrap();
        let before = reactions.len();
        reactions.retain(|pair| *pair != (post_id, user_id));
        Ok(reactions.len() < before)
    }

    async fn count_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        Ok(self.reaction_count(post_id) as u64)
    }

    async fn delete_by_post(&self, post_id: PostId) -> DomainResult<u64> {
        let mut reactions = self.reactions.lock().unwrap();
        let before = reactions.len();
        reactions.retain(|(post, _)| *post != post_id);
        Ok((before - reactions.len()) as u64)
    }
}

/// Deterministic generator: real slugification, fixed-alphabet suffixes.
#[derive(Default, Clone)]
pub struct TestSlugGenerator;

impl SlugGenerator for TestSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        slugify_basic(input)
    }

    fn random_suffix(&self, attempt: u32) -> String {
        "x".repeat(attempt as usize)
    }
}

fn slugify_basic(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut last_dash = true;
    for c in input.chars() {
        if c.is_ascii_alphanumeric() {
            out.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            out.push('-');
            last_dash = true;
        }
    }
    while out.ends_with('-') {
        out.pop();
    }
    out
}

pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Password hasher with a transparent, reversible format; unit tests should
/// not pay Argon2 cost.
#[derive(Default, Clone)]
pub struct PlainPasswordHasher;

#[async_trait]
impl kiroku_core::application::ports::security::PasswordHasher for PlainPasswordHasher {
    async fn hash(
        &self,
        password: &str,
    ) -> kiroku_core::application::error::ApplicationResult<String> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(
        &self,
        password: &str,
        expected_hash: &str,
    ) -> kiroku_core::application::error::ApplicationResult<()> {
        if expected_hash == format!("hashed:{password}") {
            Ok(())
        } else {
            Err(
                kiroku_core::application::error::ApplicationError::unauthorized(
                    "invalid credentials",
                ),
            )
        }
    }
}
