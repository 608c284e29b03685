//! The reference set of base identities known to the application database.

use crate::identity;
use std::collections::HashSet;
use tracing::instrument;

/// Set of base identities considered "still in use".
///
/// Built once per run from the two database reference collections, read-only
/// afterwards, discarded at run end.
#[derive(Debug, Default, Clone)]
pub struct ReferenceSet {
    identities: HashSet<String>,
}

impl ReferenceSet {
    /// Build the set from the two database columns (`medias.url` and
    /// `users.picture`). Null and empty values are skipped silently;
    /// duplicates collapse via set semantics.
    #[instrument(skip_all)]
    pub fn build(
        media_urls: impl IntoIterator<Item = Option<String>>,
        user_pictures: impl IntoIterator<Item = Option<String>>,
    ) -> Self {
        let identities = media_urls
            .into_iter()
            .chain(user_pictures)
            .flatten()
            .filter(|url| !url.is_empty())
            .map(|url| identity::base_identity(&url))
            .collect();
        Self { identities }
    }

    /// Whether a base identity is referenced by the database.
    pub fn contains(&self, base_identity: &str) -> bool {
        self.identities.contains(base_identity)
    }

    pub fn len(&self) -> usize {
        self.identities.len()
    }

    /// An empty set means no object can ever match; callers should
    /// short-circuit to an empty result instead of scanning the listing.
    pub fn is_empty(&self) -> bool {
        self.identities.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some(value: &str) -> Option<String> {
        Some(value.to_string())
    }

    #[test]
    fn test_build_from_both_sources() {
        let set = ReferenceSet::build(
            vec![some("https://cdn.example.com/media/car1.jpg?sig=abc"), None, some("")],
            vec![some("avatars/user7.png")],
        );
        assert_eq!(set.len(), 2);
        assert!(set.contains("car1"));
        assert!(set.contains("user7"));
        assert!(!set.contains(""));
    }

    #[test]
    fn test_duplicates_collapse() {
        let set = ReferenceSet::build(
            vec![some("a/car1.jpg"), some("b/car1.png")],
            vec![some("car1.webp")],
        );
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_all_null_or_empty_is_empty() {
        let set = ReferenceSet::build(vec![None, some("")], vec![None]);
        assert!(set.is_empty());
    }
}
