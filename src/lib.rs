pub mod models;
pub mod views;
pub mod controllers;
pub mod cli;
pub mod error;

// Re-exports for convenience
pub use models::{Config, FeedStore, Post, PostDetail, Comment};
pub use controllers::{start_app, App};
