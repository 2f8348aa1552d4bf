use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};

use collectui::cli::Flags;
use collectui::models::cache;
use collectui::models::image::DirectoryPicker;
use collectui::models::time::SystemClock;
use collectui::models::{Config, FeedStore, SeedRepository};

// The terminal belongs to the UI, so logs go to a file.
fn init_logging(explicit: Option<&Path>) -> Result<()> {
    let path = cache::log_file_path(explicit)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file at {:?}", path))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let flags = Flags::from_args();

    let config = Config::load(flags.config.as_deref())?;

    let log_file = flags.log_file.as_deref().or(config.log_file.as_deref());
    init_logging(log_file)?;
    match &config.source {
        Some(path) => log::info!("Loaded config from {:?}", path),
        None => log::info!("No config file found, using defaults"),
    }
    log::info!("Starting on {:?}", flags.start_tab());

    let feed = FeedStore::new(Box::new(SeedRepository), Box::new(SystemClock))
        .with_comment_author(config.comment_author.clone())
        .retain_comments(config.retain_comments);
    let picker = DirectoryPicker::new(config.image_dir.clone());

    collectui::start_app(config, feed, Box::new(picker), flags.start_tab()).await?;

    log::info!("Exiting");
    Ok(())
}
