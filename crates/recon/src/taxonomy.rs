//! The fixed classification taxonomy and its configurable vocabulary.

use derive_more::Display;
use std::collections::HashSet;

/// Coarse content type of a stored object.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MediaCategory {
    #[display("images")]
    Images,
    #[display("videos")]
    Videos,
    #[display("documents")]
    Documents,
    #[display("other")]
    Other,
}

/// Structural role of a stored file relative to its original.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PathRole {
    #[display("original")]
    Original,
    #[display("thumbnail")]
    Thumbnail,
    #[display("reduced")]
    Reduced,
    #[display("snapshot")]
    Snapshot,
}

/// The single canonical classification ruleset.
///
/// Historically two extension vocabularies drifted apart between call sites
/// (a minimal images/videos one and an extended one with documents). This
/// struct is the consolidation: one vocabulary, built once from
/// configuration and injected into the classifier and the inclusion policy.
#[derive(Debug, Clone)]
pub struct Taxonomy {
    /// Extensions classified as [`MediaCategory::Images`].
    pub image_extensions: HashSet<String>,
    /// Extensions classified as [`MediaCategory::Videos`].
    pub video_extensions: HashSet<String>,
    /// Extensions classified as [`MediaCategory::Documents`].
    pub document_extensions: HashSet<String>,
    /// Top-level folder whose members are documents regardless of extension.
    pub document_folder: String,
    /// Key prefix outside which thumbnails are never retained.
    pub thumbnail_scope: String,
}

impl Default for Taxonomy {
    /// The canonical (extended) vocabulary: documents are recognised by
    /// extension as well as by folder.
    fn default() -> Self {
        Self {
            image_extensions: to_set(&["jpg", "jpeg", "png", "gif", "webp", "bmp", "svg"]),
            video_extensions: to_set(&["mp4", "mov", "avi", "mkv", "webm", "m4v"]),
            document_extensions: to_set(&["pdf", "doc", "docx", "xls", "xlsx", "txt"]),
            document_folder: "Documents".to_string(),
            thumbnail_scope: "CarImages/".to_string(),
        }
    }
}

impl Taxonomy {
    /// Classify by extension alone (the document-folder override lives in
    /// [`classify`](crate::classify::classify), which must run first).
    pub fn category_for_extension(&self, extension: &str) -> MediaCategory {
        if self.image_extensions.contains(extension) {
            MediaCategory::Images
        } else if self.video_extensions.contains(extension) {
            MediaCategory::Videos
        } else if self.document_extensions.contains(extension) {
            MediaCategory::Documents
        } else {
            MediaCategory::Other
        }
    }
}

fn to_set(extensions: &[&str]) -> HashSet<String> {
    extensions.iter().map(|ext| ext.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jpg", MediaCategory::Images)]
    #[case("webm", MediaCategory::Videos)]
    #[case("pdf", MediaCategory::Documents)]
    #[case("exe", MediaCategory::Other)]
    #[case("", MediaCategory::Other)]
    fn test_category_for_extension(#[case] ext: &str, #[case] expected: MediaCategory) {
        assert_eq!(Taxonomy::default().category_for_extension(ext), expected);
    }

    #[test]
    fn test_display_names_are_lowercase() {
        assert_eq!(MediaCategory::Images.to_string(), "images");
        assert_eq!(PathRole::Snapshot.to_string(), "snapshot");
    }
}
