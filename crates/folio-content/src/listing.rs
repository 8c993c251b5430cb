//! Static listing payload.
//!
//! The exported site has no server, so the full project listing is written
//! once at build time as a JSON file the client can fetch.

use std::path::Path;

use folio_core::{Error, Result};
use serde::{Deserialize, Serialize};

use crate::repository::ContentRepository;
use crate::source::ContentSource;
use crate::types::{Document, TagCount};

/// Everything the listing page needs in one document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectListing {
    /// All documents, newest first, without bodies.
    pub projects: Vec<Document>,
    /// Tag counts sorted by name.
    pub tags: Vec<TagCount>,
    /// Number of documents.
    pub total: usize,
}

impl ProjectListing {
    /// Snapshot the repository's listing.
    pub async fn collect<S: ContentSource>(repo: &ContentRepository<S>) -> Self {
        let projects = repo.load_all().await.to_vec();
        let tags = repo.tag_aggregates().await;
        Self {
            total: projects.len(),
            projects,
            tags,
        }
    }

    /// Pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| Error::serialization(format!("Failed to serialize listing: {e}")))
    }

    /// Write the listing to `path`, creating parent directories.
    pub async fn write_json(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io_with_path(e, parent))?;
        }
        tokio::fs::write(path, self.to_json()?)
            .await
            .map_err(|e| Error::io_with_path(e, path))
    }
}
