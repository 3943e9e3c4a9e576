//! Content packs: TOML files describing the pages of a book.
//!
//! ```toml
//! title = "Jane Doe"
//!
//! [[pages]]
//! id = "about"
//! title = "About"
//! body = "..."
//! image = "https://example.com/portrait.png"   # optional
//! ```

mod sanitize;

pub use sanitize::sanitize_body;

use crate::model::{ContentEntry, ContentError, EntryId, PageContentStore};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

const BUILTIN_PACK: &str = include_str!("portfolio.toml");
const BUILTIN_PACK_NAME: &str = "<builtin portfolio>";

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ContentFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    pages: Vec<PageRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct PageRecord {
    id: String,
    #[serde(default)]
    title: Option<String>,
    body: String,
    #[serde(default)]
    image: Option<String>,
}

/// Parse a content pack from TOML text.
///
/// `origin` only labels errors.
///
/// # Errors
///
/// Returns an error for invalid TOML, empty ids or duplicate ids.
pub fn parse_content(source: &str, origin: &Path) -> Result<PageContentStore, ContentError> {
    let file: ContentFile = toml::from_str(source).map_err(|e| ContentError::Parse {
        path: origin.to_path_buf(),
        reason: e.to_string(),
    })?;

    let entries = file
        .pages
        .into_iter()
        .enumerate()
        .map(|(position, page)| {
            let id = EntryId::new(page.id)
                .map_err(|source| ContentError::InvalidId { position, source })?;
            let mut entry = ContentEntry::new(id, page.body);
            if let Some(title) = page.title {
                entry = entry.with_title(title);
            }
            if let Some(image) = page.image {
                entry = entry.with_image(image);
            }
            Ok(entry)
        })
        .collect::<Result<Vec<_>, ContentError>>()?;

    let store = PageContentStore::new(entries)?;
    Ok(match file.title {
        Some(title) => store.with_title(title),
        None => store,
    })
}

/// Load a content pack from disk.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_content_file(path: impl Into<PathBuf>) -> Result<PageContentStore, ContentError> {
    let path = path.into();
    let contents = std::fs::read_to_string(&path).map_err(|source| ContentError::Read {
        path: path.clone(),
        source,
    })?;

    let store = parse_content(&contents, &path)?;
    info!(?path, pages = store.len(), "Loaded content pack");
    Ok(store)
}

/// The sample portfolio shipped with the binary.
///
/// # Errors
///
/// Only fails if the embedded pack is malformed.
pub fn builtin_store() -> Result<PageContentStore, ContentError> {
    parse_content(BUILTIN_PACK, Path::new(BUILTIN_PACK_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    #[test]
    fn builtin_pack_parses() {
        let store = builtin_store().unwrap();
        assert!(store.len() >= 6, "sample should have several pages");
        assert!(store.title().is_some());
        assert!(store.chapters().count() > 0);
    }

    #[test]
    fn parses_optional_fields() {
        let store = parse_content(
            r#"
title = "Book"

[[pages]]
id = "a"
body = "first"

[[pages]]
id = "b"
title = "Second"
body = "second"
image = "https://example.com/b.png"
"#,
            Path::new("inline"),
        )
        .unwrap();

        assert_eq!(store.title(), Some("Book"));
        assert_eq!(store.len(), 2);
        let a = store.get(0).unwrap();
        assert_eq!(a.title(), None);
        assert_eq!(a.image(), None);
        let b = store.get(1).unwrap();
        assert_eq!(b.title(), Some("Second"));
        assert_eq!(b.image(), Some("https://example.com/b.png"));
    }

    #[test]
    fn pack_without_pages_is_empty_store() {
        let store = parse_content("title = \"Nothing yet\"", Path::new("inline")).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn rejects_empty_id() {
        let result = parse_content(
            r#"
[[pages]]
id = "ok"
body = "x"

[[pages]]
id = ""
body = "y"
"#,
            Path::new("inline"),
        );
        assert!(matches!(
            result,
            Err(ContentError::InvalidId { position: 1, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_ids() {
        let result = parse_content(
            r#"
[[pages]]
id = "same"
body = "x"

[[pages]]
id = "same"
body = "y"
"#,
            Path::new("inline"),
        );
        assert!(matches!(result, Err(ContentError::DuplicateId(_))));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result = parse_content(
            r#"
[[pages]]
id = "a"
body = "x"
colour = "red"
"#,
            Path::new("pack.toml"),
        );
        match result {
            Err(ContentError::Parse { path, .. }) => assert_eq!(path, Path::new("pack.toml")),
            other => panic!("Expected Parse error, got {:?}", other),
        }
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let result = load_content_file("/nonexistent/folio/pack.toml");
        assert!(matches!(result, Err(ContentError::Read { .. })));
    }

    #[test]
    fn load_content_file_reads_from_disk() {
        let path = env::temp_dir().join("folio_test_pack.toml");
        fs::write(
            &path,
            "[[pages]]\nid = \"only\"\ntitle = \"Only\"\nbody = \"hello\"\n",
        )
        .unwrap();

        let store = load_content_file(&path).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.position("only"), Some(0));

        fs::remove_file(path).ok();
    }
}
