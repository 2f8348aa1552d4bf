//! Source of seed posts and per-post display data.
//!
//! The feed store only talks to [`PostRepository`], so the static tables
//! below can be replaced by a real backend without touching the UI.

use crate::models::post::{Comment, ImageRef, Post, PostMeta};

pub trait PostRepository: Send {
    /// Posts shown when the feed is first built. `now` is epoch milliseconds.
    fn seed_posts(&self, now: i64) -> Vec<Post>;

    fn fetch_post_detail(&self, post_id: &str) -> Option<PostMeta>;

    /// Comments for a post, oldest first. Empty when none are known.
    fn fetch_comments(&self, post_id: &str, now: i64) -> Vec<Comment>;
}

/// Hardcoded collector posts.
#[derive(Debug, Default, Clone, Copy)]
pub struct SeedRepository;

struct SeedPost {
    id: &'static str,
    title: &'static str,
    content: &'static str,
    votes: i64,
    image: &'static str,
    age_ms: i64,
    author: &'static str,
    description: &'static str,
}

struct SeedComment {
    post_id: &'static str,
    id: &'static str,
    author: &'static str,
    text: &'static str,
    age_ms: i64,
    likes: u32,
}

const SEED_POSTS: &[SeedPost] = &[
    SeedPost {
        id: "1",
        title: "My Limited Edition POPMART Figurine!",
        content: "I just got this limited edition figurine and I am so excited about it. The colors and details are amazing!",
        votes: 8,
        image: "dbtt1.jpg",
        age_ms: 600_000,
        author: "PopMartLover",
        description: "Just received this amazing limited edition POPMART figurine from their latest blind box series! The attention to detail is incredible - from the metallic paint finish to the intricate accessories. This one is from the 'Fantastic World' collection, and it's even more beautiful in person. The translucent parts catch the light perfectly!",
    },
    SeedPost {
        id: "2",
        title: "Rare POPMART Collection",
        content: "Check out my rare POPMART collection. Each figurine has a unique style and character.",
        votes: 12,
        image: "dbtt2.jpeg",
        age_ms: 300_000,
        author: "CollectorKing",
        description: "Been collecting POPMART figures for over a year now, and these are some of my absolute favorites. Each one tells its own story, and the quality is consistently outstanding. The middle one is from the rare 'Midnight Dreams' series - took me months to find it!",
    },
    SeedPost {
        id: "3",
        title: "Custom POPMART Figurine Setup",
        content: "I arranged my POPMART figurines in a cool display at home. Love how they brighten up my space!",
        votes: 15,
        image: "dbtt3.jpg",
        age_ms: 100_000,
        author: "ArtisticDisplay",
        description: "Finally finished setting up my POPMART display corner! Used LED lighting to highlight each figure's unique features. The glass cabinet keeps them dust-free while showing off the collection perfectly. What do you think about the arrangement?",
    },
    SeedPost {
        id: "4",
        title: "My DIMOOOOOOO",
        content: "He is so cute with the clothes!",
        votes: 5,
        image: "dbtt4.webp",
        age_ms: 100_000,
        author: "DimooFanatic",
        description: "My newest DIMOO addition! The winter outfit series is absolutely adorable. The little scarf and earmuffs are so detailed, and the rosy cheeks add such a cute touch. Definitely one of my favorite designs from this collection!",
    },
];

const SEED_COMMENTS: &[SeedComment] = &[
    SeedComment {
        post_id: "1",
        id: "1-1",
        author: "ToyCritic",
        text: "The paint job on this one is incredible! Which store did you find it in?",
        age_ms: 300_000,
        likes: 5,
    },
    SeedComment {
        post_id: "1",
        id: "1-2",
        author: "CollectorPro",
        text: "I have been looking for this edition everywhere! So jealous!",
        age_ms: 200_000,
        likes: 3,
    },
    SeedComment {
        post_id: "2",
        id: "2-1",
        author: "POPMARTExpert",
        text: "That Midnight Dreams series is one of their best releases. Great collection!",
        age_ms: 250_000,
        likes: 7,
    },
    SeedComment {
        post_id: "2",
        id: "2-2",
        author: "ArtToy_Fan",
        text: "How long did it take you to complete this collection?",
        age_ms: 150_000,
        likes: 4,
    },
    SeedComment {
        post_id: "3",
        id: "3-1",
        author: "DisplayMaster",
        text: "The lighting setup is perfect! What LED strips are you using?",
        age_ms: 180_000,
        likes: 6,
    },
    SeedComment {
        post_id: "3",
        id: "3-2",
        author: "ToyPhotographer",
        text: "Love the arrangement! The depth really shows off each piece.",
        age_ms: 120_000,
        likes: 8,
    },
    SeedComment {
        post_id: "4",
        id: "4-1",
        author: "DimooLover",
        text: "This winter series is absolutely precious! The scarf details are amazing.",
        age_ms: 90_000,
        likes: 4,
    },
    SeedComment {
        post_id: "4",
        id: "4-2",
        author: "ToyCollector22",
        text: "I need this for my collection! Is this from the latest release?",
        age_ms: 60_000,
        likes: 3,
    },
];

impl PostRepository for SeedRepository {
    fn seed_posts(&self, now: i64) -> Vec<Post> {
        SEED_POSTS
            .iter()
            .map(|seed| Post {
                id: seed.id.to_string(),
                title: seed.title.to_string(),
                content: seed.content.to_string(),
                image: Some(ImageRef::Bundled(seed.image)),
                votes: seed.votes,
                timestamp: now - seed.age_ms,
            })
            .collect()
    }

    fn fetch_post_detail(&self, post_id: &str) -> Option<PostMeta> {
        SEED_POSTS
            .iter()
            .find(|seed| seed.id == post_id)
            .map(|seed| PostMeta {
                description: seed.description.to_string(),
                author: seed.author.to_string(),
            })
    }

    fn fetch_comments(&self, post_id: &str, now: i64) -> Vec<Comment> {
        SEED_COMMENTS
            .iter()
            .filter(|seed| seed.post_id == post_id)
            .map(|seed| Comment {
                id: seed.id.to_string(),
                author: seed.author.to_string(),
                text: seed.text.to_string(),
                timestamp: now - seed.age_ms,
                likes: seed.likes,
            })
            .collect()
    }
}
