use std::collections::HashMap;

use crate::error::ValidationError;
use crate::models::post::{Comment, ImageRef, Post, PostDetail};
use crate::models::repository::PostRepository;
use crate::models::time::{time_posted, Clock};

pub const FALLBACK_DESCRIPTION: &str = "No detailed description available.";
pub const FALLBACK_AUTHOR: &str = "Anonymous";
pub const DEFAULT_COMMENT_AUTHOR: &str = "You";

/// In-memory community feed, most recent post first.
pub struct FeedStore {
    posts: Vec<Post>,
    repo: Box<dyn PostRepository>,
    clock: Box<dyn Clock>,
    comment_author: String,
    retain_comments: bool,
    // comments written while a detail view was open, newest first
    session_comments: HashMap<String, Vec<Comment>>,
    last_id: i64,
}

impl FeedStore {
    pub fn new(repo: Box<dyn PostRepository>, clock: Box<dyn Clock>) -> Self {
        let posts = repo.seed_posts(clock.now_millis());
        log::debug!("Seeded feed with {} posts", posts.len());
        let last_id = posts
            .iter()
            .filter_map(|post| post.id.parse::<i64>().ok())
            .max()
            .unwrap_or(0);
        Self {
            posts,
            repo,
            clock,
            comment_author: DEFAULT_COMMENT_AUTHOR.to_string(),
            retain_comments: false,
            session_comments: HashMap::new(),
            last_id,
        }
    }

    pub fn with_comment_author(mut self, author: impl Into<String>) -> Self {
        self.comment_author = author.into();
        self
    }

    /// Keep comments added in a detail view so they reappear when the post is reopened.
    pub fn retain_comments(mut self, retain: bool) -> Self {
        self.retain_comments = retain;
        self
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn get(&self, post_id: &str) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == post_id)
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    pub fn now(&self) -> i64 {
        self.clock.now_millis()
    }

    // Ids are the creation time in millis, bumped forward past any id already issued or in the feed.
    fn next_id(&mut self, now: i64) -> String {
        let mut id = now.max(self.last_id + 1);
        while self.get(&id.to_string()).is_some() {
            id += 1;
        }
        self.last_id = id;
        id.to_string()
    }

    pub fn create_post(&mut self, text: &str, image: Option<ImageRef>) -> Result<Post, ValidationError> {
        if text.trim().is_empty() && image.is_none() {
            return Err(ValidationError::EmptyPost);
        }

        let now = self.clock.now_millis();
        let post = Post {
            id: self.next_id(now),
            title: text.to_string(),
            content: text.to_string(),
            image,
            votes: 0,
            timestamp: now,
        };
        log::info!("Created post {}", post.id);
        self.posts.insert(0, post.clone());
        Ok(post)
    }

    pub fn upvote(&mut self, post_id: &str) {
        self.adjust_votes(post_id, 1);
    }

    pub fn downvote(&mut self, post_id: &str) {
        self.adjust_votes(post_id, -1);
    }

    fn adjust_votes(&mut self, post_id: &str, delta: i64) {
        match self.posts.iter_mut().find(|post| post.id == post_id) {
            Some(post) => post.votes += delta,
            None => log::debug!("Vote for unknown post {}", post_id),
        }
    }

    /// Builds a fresh detail copy of the post. `None` if the id is not in the feed.
    pub fn open_detail(&self, post_id: &str) -> Option<PostDetail> {
        let post = self.get(post_id)?.clone();
        let now = self.clock.now_millis();

        let (description, author) = match self.repo.fetch_post_detail(post_id) {
            Some(meta) => (meta.description, meta.author),
            None => (FALLBACK_DESCRIPTION.to_string(), FALLBACK_AUTHOR.to_string()),
        };

        let mut comments = Vec::new();
        if self.retain_comments {
            if let Some(kept) = self.session_comments.get(post_id) {
                comments.extend(kept.iter().cloned());
            }
        }
        comments.extend(self.repo.fetch_comments(post_id, now));

        Some(PostDetail {
            time_posted: time_posted(post.timestamp, now),
            post,
            description,
            author,
            comments,
        })
    }

    pub fn add_comment(&mut self, detail: &mut PostDetail, text: &str) -> Result<Comment, ValidationError> {
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyComment);
        }

        let now = self.clock.now_millis();
        let comment = Comment {
            id: self.next_id(now),
            author: self.comment_author.clone(),
            text: text.to_string(),
            timestamp: now,
            likes: 0,
        };
        detail.comments.insert(0, comment.clone());

        if self.retain_comments {
            self.session_comments
                .entry(detail.post.id.clone())
                .or_default()
                .insert(0, comment.clone());
        }
        Ok(comment)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicI64, Ordering};
    use std::sync::Arc;

    use super::*;
    use crate::models::repository::SeedRepository;

    const NOW: i64 = 1_700_000_000_000;

    #[derive(Clone)]
    struct FixedClock(Arc<AtomicI64>);

    impl Clock for FixedClock {
        fn now_millis(&self) -> i64 {
            self.0.load(Ordering::SeqCst)
        }
    }

    fn store() -> FeedStore {
        FeedStore::new(
            Box::new(SeedRepository),
            Box::new(FixedClock(Arc::new(AtomicI64::new(NOW)))),
        )
    }

    fn votes(store: &FeedStore) -> Vec<i64> {
        store.posts().iter().map(|p| p.votes).collect()
    }

    #[test]
    fn empty_post_is_rejected() {
        let mut store = store();
        let before = store.posts().to_vec();

        assert_eq!(store.create_post("   \n", None), Err(ValidationError::EmptyPost));
        assert_eq!(store.posts(), before.as_slice());
    }

    #[test]
    fn text_post_is_prepended_with_zero_votes() {
        let mut store = store();
        let post = store.create_post("Look at my LABUBU", None).unwrap();

        assert_eq!(store.len(), 5);
        assert_eq!(store.posts()[0], post);
        assert_eq!(post.votes, 0);
        assert_eq!(post.title, "Look at my LABUBU");
        assert_eq!(post.timestamp, NOW);
        assert_eq!(post.id, NOW.to_string());
    }

    #[test]
    fn image_only_post_is_accepted() {
        let mut store = store();
        let post = store.create_post("", Some(ImageRef::Bundled("x.png"))).unwrap();
        assert_eq!(post.content, "");
        assert_eq!(store.len(), 5);
    }

    #[test]
    fn posts_created_in_the_same_millisecond_get_distinct_ids() {
        let mut store = store();
        let a = store.create_post("a", None).unwrap();
        let b = store.create_post("b", None).unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(store.posts()[0].id, b.id);
    }

    #[test]
    fn post_ids_never_reuse_seed_ids() {
        let mut store = FeedStore::new(
            Box::new(SeedRepository),
            Box::new(FixedClock(Arc::new(AtomicI64::new(3)))),
        );
        let post = store.create_post("mine", None).unwrap();

        assert_eq!(post.id, "5");
        let mut ids: Vec<&str> = store.posts().iter().map(|p| p.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), store.len());

        let detail = store.open_detail(&post.id).unwrap();
        assert_eq!(detail.author, FALLBACK_AUTHOR);
        store.upvote(&post.id);
        assert_eq!(votes(&store), [1, 8, 12, 15, 5]);
    }

    #[test]
    fn voting_touches_only_the_target() {
        let mut store = store();
        assert_eq!(votes(&store), [8, 12, 15, 5]);

        store.upvote("2");
        assert_eq!(votes(&store), [8, 13, 15, 5]);

        store.downvote("4");
        assert_eq!(votes(&store), [8, 13, 15, 4]);
    }

    #[test]
    fn votes_can_go_negative() {
        let mut store = store();
        for _ in 0..7 {
            store.downvote("4");
        }
        assert_eq!(store.get("4").unwrap().votes, -2);
    }

    #[test]
    fn voting_unknown_post_is_a_no_op() {
        let mut store = store();
        store.upvote("nope");
        store.downvote("nope");
        assert_eq!(votes(&store), [8, 12, 15, 5]);
    }

    #[test]
    fn known_post_detail_uses_seed_tables() {
        let store = store();
        let detail = store.open_detail("1").unwrap();

        assert_eq!(detail.author, "PopMartLover");
        assert!(detail.description.starts_with("Just received this amazing"));
        assert_eq!(detail.time_posted, "10 minutes ago");
        assert_eq!(detail.comments.len(), 2);
    }

    #[test]
    fn unknown_post_detail_falls_back() {
        let mut store = store();
        let post = store.create_post("fresh", None).unwrap();
        let detail = store.open_detail(&post.id).unwrap();

        assert_eq!(detail.description, FALLBACK_DESCRIPTION);
        assert_eq!(detail.author, FALLBACK_AUTHOR);
        assert!(detail.comments.is_empty());
        assert_eq!(detail.time_posted, "0 minutes ago");
    }

    #[test]
    fn missing_post_has_no_detail() {
        assert!(store().open_detail("42").is_none());
    }

    #[test]
    fn empty_comment_is_rejected() {
        let mut store = store();
        let mut detail = store.open_detail("2").unwrap();
        let before = detail.comments.clone();

        assert_eq!(store.add_comment(&mut detail, "  "), Err(ValidationError::EmptyComment));
        assert_eq!(detail.comments, before);
    }

    #[test]
    fn comment_is_prepended_with_zero_likes() {
        let mut store = store().with_comment_author("Sarah");
        let mut detail = store.open_detail("2").unwrap();
        let comment = store.add_comment(&mut detail, "So cute").unwrap();

        assert_eq!(detail.comments.len(), 3);
        assert_eq!(detail.comments[0], comment);
        assert_eq!(comment.likes, 0);
        assert_eq!(comment.author, "Sarah");
    }

    #[test]
    fn comments_are_dropped_on_reopen_by_default() {
        let mut store = store();
        let mut detail = store.open_detail("3").unwrap();
        store.add_comment(&mut detail, "nice shelf").unwrap();

        let reopened = store.open_detail("3").unwrap();
        assert_eq!(reopened.comments.len(), 2);
    }

    #[test]
    fn retained_comments_survive_reopen() {
        let mut store = store().retain_comments(true);
        let mut detail = store.open_detail("3").unwrap();
        store.add_comment(&mut detail, "first").unwrap();
        store.add_comment(&mut detail, "second").unwrap();

        let reopened = store.open_detail("3").unwrap();
        let texts: Vec<&str> = reopened.comments.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts[..2], ["second", "first"]);
        assert_eq!(reopened.comments.len(), 4);
    }

    #[test]
    fn detail_is_a_snapshot() {
        let mut store = store();
        let detail = store.open_detail("1").unwrap();
        store.upvote("1");
        assert_eq!(detail.post.votes, 8);
        assert_eq!(store.get("1").unwrap().votes, 9);
    }
}
