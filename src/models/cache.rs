use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CollectError;

// XDG_CACHE_HOME first, then ~/.cache, then .cache under the working directory.
fn cache_base(xdg_cache_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    xdg_cache_home
        .map(PathBuf::from)
        .unwrap_or_else(|| {
            let home = home.map(PathBuf::from).unwrap_or_default();
            Path::new(&home).join(".cache")
        })
}

pub fn get_cache_dir() -> Result<PathBuf, CollectError> {
    let app_cache_dir =
        cache_base(env::var_os("XDG_CACHE_HOME"), env::var_os("HOME")).join("collectui");

    fs::create_dir_all(&app_cache_dir)
        .map_err(|e| CollectError::Io(format!("Failed to create cache directory: {}", e)))?;

    Ok(app_cache_dir)
}

/// Log file location: the explicit path if given, otherwise inside the cache directory.
pub fn log_file_path(explicit: Option<&Path>) -> Result<PathBuf, CollectError> {
    match explicit {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            Ok(path.to_path_buf())
        }
        None => Ok(get_cache_dir()?.join("collectui.log")),
    }
}
