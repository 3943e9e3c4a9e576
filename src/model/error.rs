//! Error types for content loading.
//!
//! Navigation itself never fails: out-of-range requests, empty stores and
//! overlapping transitions degrade to no-ops. The only fallible edge of the
//! domain model is building a [`PageContentStore`](crate::model::PageContentStore)
//! from external data, which is what this module covers.

use std::path::PathBuf;
use thiserror::Error;

/// An entry id was empty or whitespace only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("entry id must not be empty")]
pub struct InvalidEntryId;

/// Failures while turning external data into a content store.
#[derive(Debug, Error)]
pub enum ContentError {
    /// Content file could not be read.
    #[error("Failed to read content file at {path:?}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Content file is not valid TOML or does not match the pack layout.
    #[error("Invalid content pack {path:?}: {reason}")]
    Parse {
        /// Path (or pseudo-path for embedded packs) being parsed.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// A page was declared with an empty id.
    #[error("Page {position} has an invalid id: {source}")]
    InvalidId {
        /// Zero-based position of the offending page.
        position: usize,
        /// Validation failure.
        #[source]
        source: InvalidEntryId,
    },

    /// Two pages share the same id.
    #[error("Duplicate page id {0:?}")]
    DuplicateId(String),
}
