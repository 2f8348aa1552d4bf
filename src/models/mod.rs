pub mod cache;
pub mod catalog;
pub mod config;
pub mod feed;
pub mod game;
pub mod image;
pub mod post;
pub mod repository;
pub mod scan;
pub mod time;

// Re-export important structs for convenience
pub use config::Config;
pub use feed::FeedStore;
pub use post::{Comment, ImageRef, Post, PostDetail};
pub use repository::{PostRepository, SeedRepository};
