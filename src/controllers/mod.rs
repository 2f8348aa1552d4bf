pub mod app;
pub mod community;
pub mod navigation;
pub mod scheduler;

// Re-export key functions
pub use app::{start_app, App};
pub use navigation::{Route, Tab};
