//! Storage-path computation for uploaded images.
//!
//! The rest of the data layer treats path policy as a collaborator: given
//! an owning entity and an original filename, hand back a deterministic
//! storage path. No file I/O happens here.

use crate::content_ref::ContentKind;

pub trait UploadPath: Send + Sync {
    /// Compute the storage path for `filename` uploaded against the owner
    /// identified by `kind` and `owner` (a slug, or a stringified id for
    /// slugless entities).
    fn upload_path(&self, kind: ContentKind, owner: &str, filename: &str) -> String;
}

/// Default policy: `<root>/<kind>/<owner>/<filename>`, with the filename
/// stripped of any directory components.
#[derive(Debug, Clone)]
pub struct MediaPaths {
    root: String,
}

impl MediaPaths {
    pub fn new(root: impl Into<String>) -> Self {
        Self { root: root.into() }
    }
}

impl Default for MediaPaths {
    fn default() -> Self {
        Self::new("images")
    }
}

impl UploadPath for MediaPaths {
    fn upload_path(&self, kind: ContentKind, owner: &str, filename: &str) -> String {
        let filename = filename
            .rsplit(['/', '\\'])
            .next()
            .unwrap_or(filename);
        format!("{}/{}/{}/{}", self.root, kind.as_str(), owner, filename)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_path_under_kind_and_owner() {
        let paths = MediaPaths::default();
        let path = paths.upload_path(ContentKind::Book, "war-and-peace", "cover.jpg");
        assert_eq!(path, "images/book/war-and-peace/cover.jpg");
    }

    #[test]
    fn strips_directory_components_from_filename() {
        let paths = MediaPaths::new("media");
        let path = paths.upload_path(ContentKind::Author, "tolstoy", "../../etc/portrait.png");
        assert_eq!(path, "media/author/tolstoy/portrait.png");
    }

    #[test]
    fn custom_root_is_used() {
        let paths = MediaPaths::new("uploads");
        let path = paths.upload_path(ContentKind::Publisher, "ast", "logo.svg");
        assert!(path.starts_with("uploads/publisher/"));
    }
}
