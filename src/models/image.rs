use std::fs;
use std::path::PathBuf;

use crate::error::CollectError;
use crate::models::post::ImageRef;

const IMAGE_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "gif", "webp"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Access to the user's pictures.
pub trait ImagePicker: Send {
    fn request_permission(&mut self) -> Permission;

    fn list_images(&self) -> Result<Vec<ImageRef>, CollectError>;
}

/// Picks from the files of a single directory.
#[derive(Debug, Clone)]
pub struct DirectoryPicker {
    dir: Option<PathBuf>,
}

impl DirectoryPicker {
    pub fn new(dir: Option<PathBuf>) -> Self {
        Self { dir }
    }
}

impl ImagePicker for DirectoryPicker {
    fn request_permission(&mut self) -> Permission {
        match &self.dir {
            Some(dir) if dir.is_dir() => Permission::Granted,
            Some(dir) => {
                log::warn!("Image directory {:?} is not accessible", dir);
                Permission::Denied
            }
            None => Permission::Denied,
        }
    }

    fn list_images(&self) -> Result<Vec<ImageRef>, CollectError> {
        let dir = self
            .dir
            .as_ref()
            .ok_or_else(|| CollectError::Image("No image directory configured".to_string()))?;

        let entries = fs::read_dir(dir)
            .map_err(|e| CollectError::Image(format!("Failed to read {:?}: {}", dir, e)))?;

        let mut images = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_image = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
                .unwrap_or(false);
            if is_image && path.is_file() {
                images.push(path);
            }
        }
        images.sort();

        Ok(images.into_iter().map(ImageRef::File).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use super::*;

    #[test]
    fn missing_directory_denies_permission() {
        let mut picker = DirectoryPicker::new(None);
        assert_eq!(picker.request_permission(), Permission::Denied);

        let dir = tempfile::tempdir().unwrap();
        let mut picker = DirectoryPicker::new(Some(dir.path().join("gone")));
        assert_eq!(picker.request_permission(), Permission::Denied);
    }

    #[test]
    fn lists_only_images_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["b.PNG", "a.jpg", "notes.txt", "c.webp"] {
            File::create(dir.path().join(name)).unwrap();
        }
        fs::create_dir(dir.path().join("folder.png")).unwrap();

        let mut picker = DirectoryPicker::new(Some(dir.path().to_path_buf()));
        assert_eq!(picker.request_permission(), Permission::Granted);

        let names: Vec<String> = picker
            .list_images()
            .unwrap()
            .iter()
            .map(|image| image.to_string())
            .collect();
        assert_eq!(names, ["a.jpg", "b.PNG", "c.webp"]);
    }

    #[test]
    fn unreadable_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let picker = DirectoryPicker::new(Some(dir.path().join("missing")));
        assert!(matches!(picker.list_images(), Err(CollectError::Image(_))));
    }
}
