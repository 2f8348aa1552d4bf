use std::fmt;
use std::path::PathBuf;

/// Picture attached to a post. Only ever displayed, never uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageRef {
    /// Asset shipped with the seed data
    Bundled(&'static str),
    /// File chosen from the local picture directory
    File(PathBuf),
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageRef::Bundled(name) => write!(f, "{}", name),
            ImageRef::File(path) => match path.file_name() {
                Some(name) => write!(f, "{}", name.to_string_lossy()),
                None => write!(f, "{}", path.display()),
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub image: Option<ImageRef>,
    pub votes: i64,
    /// Epoch milliseconds
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: String,
    pub author: String,
    pub text: String,
    pub timestamp: i64,
    pub likes: u32,
}

/// Expanded copy of a post, built when the detail view opens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostDetail {
    pub post: Post,
    pub description: String,
    pub author: String,
    pub time_posted: String,
    pub comments: Vec<Comment>,
}

/// Display metadata looked up per post id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostMeta {
    pub description: String,
    pub author: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn image_ref_displays_file_name() {
        let image = ImageRef::File(PathBuf::from("/home/me/Pictures/labubu.png"));
        assert_eq!(image.to_string(), "labubu.png");
        assert_eq!(ImageRef::Bundled("dbtt1.jpg").to_string(), "dbtt1.jpg");
    }
}
