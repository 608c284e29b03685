//! Object classification.
//!
//! Classification is a pure function of the key and the injected
//! [`Taxonomy`]; it never consults the reference set. Inclusion is decided
//! strictly afterwards, in [`policy`](crate::policy).

use crate::identity;
use crate::taxonomy::{MediaCategory, PathRole, Taxonomy};
use tracing::trace;

/// Everything the pipeline derives from a key before deciding inclusion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub category: MediaCategory,
    pub role: PathRole,
    /// Lowercased extension; empty when the key has none.
    pub extension: String,
    /// Join key against the reference set.
    pub base_identity: String,
}

/// Classify a key into exactly one [`MediaCategory`].
///
/// Document-folder membership always wins over extension: a scanned document
/// stored as `.jpg` under the document folder is still a document.
pub fn classify(taxonomy: &Taxonomy, key: &str, extension: &str) -> MediaCategory {
    if in_document_folder(key, &taxonomy.document_folder) {
        return MediaCategory::Documents;
    }
    taxonomy.category_for_extension(extension)
}

/// Classify a key into exactly one [`PathRole`].
///
/// Markers are checked in a fixed order; the markers are mutually exclusive
/// in practice, and a key somehow carrying several takes the first match.
pub fn path_role(key: &str) -> PathRole {
    if key.contains("/thumbnail/") {
        PathRole::Thumbnail
    } else if key.contains("/reduced/") {
        PathRole::Reduced
    } else if key.contains("/snapshot_") {
        PathRole::Snapshot
    } else {
        PathRole::Original
    }
}

/// Run the full per-object derivation: identity, extension, category, role.
///
/// Emits a structured trace event per object, replacing the ad hoc debug
/// printing that used to be interleaved with the decision logic.
pub fn classify_object(taxonomy: &Taxonomy, key: &str) -> Classification {
    let extension = identity::extension(key);
    let category = classify(taxonomy, key, &extension);
    let role = path_role(key);
    let base_identity = identity::base_identity(key);
    trace!(key, %category, %role, %extension, %base_identity, "classified object");
    Classification { category, role, extension, base_identity }
}

fn in_document_folder(key: &str, folder: &str) -> bool {
    key.strip_prefix(folder).is_some_and(|rest| rest.starts_with('/'))
        || key.contains(&format!("/{folder}/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CarImages/car1.jpg", MediaCategory::Images)]
    #[case("Clips/intro.mp4", MediaCategory::Videos)]
    #[case("misc/report.pdf", MediaCategory::Documents)]
    #[case("misc/data.bin", MediaCategory::Other)]
    // Document-folder membership beats the extension, at the root...
    #[case("Documents/scan.jpg", MediaCategory::Documents)]
    // ...and nested anywhere in the key.
    #[case("archive/Documents/scan.png", MediaCategory::Documents)]
    // A folder merely sharing the prefix is not the document folder.
    #[case("DocumentsBackup/scan.jpg", MediaCategory::Images)]
    fn test_classify(#[case] key: &str, #[case] expected: MediaCategory) {
        let taxonomy = Taxonomy::default();
        let extension = crate::identity::extension(key);
        assert_eq!(classify(&taxonomy, key, &extension), expected);
    }

    #[rstest]
    #[case("a/thumbnail/b.jpg", PathRole::Thumbnail)]
    #[case("a/reduced/b.jpg", PathRole::Reduced)]
    #[case("a/snapshot_1.png", PathRole::Snapshot)]
    #[case("a/b.jpg", PathRole::Original)]
    // Marker order is fixed: thumbnail beats reduced beats snapshot.
    #[case("a/thumbnail/reduced/snapshot_1.jpg", PathRole::Thumbnail)]
    fn test_path_role(#[case] key: &str, #[case] expected: PathRole) {
        assert_eq!(path_role(key), expected);
    }

    #[test]
    fn test_classify_object() {
        let classification = classify_object(&Taxonomy::default(), "CarImages/thumbnail/car1.JPG");
        assert_eq!(classification.category, MediaCategory::Images);
        assert_eq!(classification.role, PathRole::Thumbnail);
        assert_eq!(classification.extension, "jpg");
        assert_eq!(classification.base_identity, "car1");
    }
}
