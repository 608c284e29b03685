//! Base identity derivation.
//!
//! A storage key and a database URL referring to the same media must compare
//! equal, so both are reduced to the same canonical form: query string
//! dropped, path dropped, extension dropped. This is the join key between
//! the bucket and the database; everything downstream depends on it.

/// Derive the base identity of a storage key or database URL.
///
/// - Everything after the first `?` is dropped (signed-URL parameters).
/// - Only the final path segment is kept.
/// - The last `.extension` is stripped, but only when the dot sits at an
///   index greater than zero; a leading dot (`.gitignore`-style names) is
///   part of the name, not an extension separator.
///
/// Total function; an empty input yields an empty identity.
pub fn base_identity(path_or_url: &str) -> String {
    let filename = filename(path_or_url);
    match filename.rfind('.') {
        Some(dot) if dot > 0 => filename[..dot].to_string(),
        _ => filename.to_string(),
    }
}

/// Derive the lowercased extension of a storage key or URL.
///
/// Returns an empty string when the filename has no `.` at all.
pub fn extension(path_or_url: &str) -> String {
    match filename(path_or_url).rsplit_once('.') {
        Some((_, ext)) => ext.to_ascii_lowercase(),
        None => String::new(),
    }
}

/// The final path segment, query string stripped.
pub fn filename(path_or_url: &str) -> &str {
    let without_query = path_or_url.split('?').next().unwrap_or(path_or_url);
    without_query.rsplit('/').next().unwrap_or(without_query)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CarImages/car1.jpg", "car1")]
    #[case("car2.png", "car2")]
    #[case("https://cdn.example.com/media/car3.webp?X-Amz-Signature=abc&Expires=99", "car3")]
    #[case("Documents/2024/invoice.v2.pdf", "invoice.v2")]
    #[case("nested/path/noextension", "noextension")]
    #[case("nested/path/.gitignore", ".gitignore")]
    #[case("trailing/", "")]
    #[case("", "")]
    fn test_base_identity(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(base_identity(input), expected);
    }

    #[rstest]
    #[case("CarImages/car1.jpg", "jpg")]
    #[case("CarImages/car1.JPG", "jpg")]
    #[case("archive.tar.gz", "gz")]
    #[case("https://cdn.example.com/car3.webp?sig=a.b", "webp")]
    #[case("noextension", "")]
    #[case("trailing/", "")]
    #[case(".gitignore", "gitignore")]
    fn test_extension(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(extension(input), expected);
    }

    #[rstest]
    #[case("noext")]
    #[case("a/b/noext")]
    #[case(".gitignore")]
    fn test_base_identity_stable_under_extension_roundtrip(#[case] key: &str) {
        // Appending an extension to an extension-free identity and stripping
        // it again must return the original identity.
        let base = base_identity(key);
        assert_eq!(base_identity(&format!("{base}.ext")), base);
    }
}
