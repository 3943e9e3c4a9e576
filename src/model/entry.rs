//! Content entries and the ordered store the reader pages through.
//!
//! A store is built once per session and never mutated afterwards. The
//! pagination core only needs its length and indexed access; everything else
//! here exists for the rendering layer and the contents overlay.

use crate::model::error::{ContentError, InvalidEntryId};
use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

/// Stable identity of a page, used as a rendering key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EntryId(String);

impl EntryId {
    /// Smart constructor: validates non-empty id
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidEntryId> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            return Err(InvalidEntryId);
        }
        Ok(Self(raw))
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One unit of displayable content.
///
/// `body` and `image` are opaque to the core. Bodies are passed through
/// [`sanitize_body`](crate::content::sanitize_body) by the view before they
/// reach the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentEntry {
    id: EntryId,
    title: Option<String>,
    body: String,
    image: Option<String>,
}

impl ContentEntry {
    /// Create an untitled entry without an image.
    pub fn new(id: EntryId, body: impl Into<String>) -> Self {
        Self {
            id,
            title: None,
            body: body.into(),
            image: None,
        }
    }

    /// Attach a display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach an image URL.
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Entry id.
    pub fn id(&self) -> &EntryId {
        &self.id
    }

    /// Display title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Raw body content.
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Image URL, if any.
    pub fn image(&self) -> Option<&str> {
        self.image.as_deref()
    }
}

/// Ordered, immutable list of pages.
///
/// Cloning is cheap: entries are shared behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct PageContentStore {
    title: Option<String>,
    entries: Arc<[ContentEntry]>,
}

impl PageContentStore {
    /// Build a store, rejecting duplicate ids.
    pub fn new(entries: Vec<ContentEntry>) -> Result<Self, ContentError> {
        {
            let mut seen = HashSet::with_capacity(entries.len());
            for entry in &entries {
                if !seen.insert(entry.id().as_str()) {
                    return Err(ContentError::DuplicateId(entry.id().to_string()));
                }
            }
        }

        Ok(Self {
            title: None,
            entries: entries.into(),
        })
    }

    /// A store with no pages.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach the book title shown in the header.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Book title, if any.
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the store has no pages.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Page at `index`, or `None` when out of range.
    pub fn get(&self, index: usize) -> Option<&ContentEntry> {
        self.entries.get(index)
    }

    /// Iterate pages in order.
    pub fn iter(&self) -> impl Iterator<Item = &ContentEntry> {
        self.entries.iter()
    }

    /// Index of the page with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.id().as_str() == id)
    }

    /// Titled pages with their indices, in order. Feeds the contents overlay.
    pub fn chapters(&self) -> impl Iterator<Item = (usize, &str)> {
        self.entries
            .iter()
            .enumerate()
            .filter_map(|(i, e)| e.title().map(|t| (i, t)))
    }
}
