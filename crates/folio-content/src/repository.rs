//! The content repository: scan once, then answer listing queries.
//!
//! # Caching
//!
//! The first successful [`ContentRepository::load_all`] stores the sorted
//! documents behind an `Arc`; every later query reads that snapshot. The lock
//! is not held while scanning, so two concurrent first calls may both scan.
//! Both produce the same result and the last one stored wins.
//!
//! # Failure policy
//!
//! A missing or unreadable content directory yields an empty listing and a
//! warning rather than an error, so the site still builds without content.
//! The empty result is not cached. Single-document loads do report
//! [`Error::NotFound`].

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use folio_core::traits::ConfigProvider;
use folio_core::{Error, Result};
use futures::future::join_all;

use crate::frontmatter;
use crate::markdown;
use crate::query;
use crate::source::{ContentSource, FsSource};
use crate::types::{AdjacentProjects, Document, ProjectPage, TagCount};

/// Shared, immutable view of the sorted listing.
pub type Snapshot = Arc<Vec<Document>>;

/// Read-only access to the project documents of one content source.
pub struct ContentRepository<S: ContentSource = FsSource> {
    source: S,
    cache: RwLock<Option<Snapshot>>,
}

impl ContentRepository<FsSource> {
    /// Repository over `<root>/*.mdx`.
    pub fn from_dir(root: impl AsRef<Path>) -> Self {
        Self::new(FsSource::new(root))
    }

    /// Repository over the content directory named by `config`.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(FsSource::from_config(config)?))
    }

    /// The content directory this repository reads.
    pub fn root(&self) -> PathBuf {
        self.source.root().to_path_buf()
    }
}

impl<S: ContentSource> ContentRepository<S> {
    /// Create a repository over `source` with an empty cache.
    pub fn new(source: S) -> Self {
        Self {
            source,
            cache: RwLock::new(None),
        }
    }

    /// The underlying content source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// All documents, newest first.
    ///
    /// Scans the source on first use and serves the cached snapshot after
    /// that. Never fails: an unreadable source gives an empty listing.
    pub async fn load_all(&self) -> Snapshot {
        if let Some(snapshot) = self.cached() {
            return snapshot;
        }

        match self.scan().await {
            Ok(documents) => {
                let snapshot = Arc::new(documents);
                self.store(Some(Arc::clone(&snapshot)));
                snapshot
            }
            Err(e) => {
                log::warn!("Could not read project content, listing is empty: {e}");
                Arc::new(Vec::new())
            }
        }
    }

    /// Drop the cached snapshot; the next query rescans.
    pub fn invalidate(&self) {
        self.store(None);
    }

    /// Whether a snapshot is currently cached.
    pub fn is_cached(&self) -> bool {
        self.cached().is_some()
    }

    /// Load one document with its body rendered to HTML.
    ///
    /// Always reads the file again; the result is not cached. When the
    /// frontmatter has no title, the first `#` heading of the body is used.
    ///
    /// # Errors
    ///
    /// [`Error::NotFound`] when there is no file for `slug`.
    pub async fn load_one(&self, slug: &str) -> Result<Document> {
        let path = self.source.locate(slug).await?;
        let text = self.source.read_file(&path).await.map_err(|e| {
            if e.is_not_found() {
                Error::not_found(format!("Project '{slug}' not found"))
            } else {
                e
            }
        })?;

        let (mut metadata, body) = frontmatter::parse_document(&text);
        if metadata.title.is_empty() {
            if let Some(title) = markdown::extract_title(body) {
                metadata.title = title;
            }
        }

        Ok(Document {
            slug: slug.to_string(),
            metadata,
            content: Some(markdown::render_html(body)),
        })
    }

    /// Documents marked `featured`, newest first.
    pub async fn list_featured(&self) -> Vec<Document> {
        query::featured(&self.load_all().await)
    }

    /// One page of the listing, optionally filtered by exact tag.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidData`] when `page` or `page_size` is zero.
    pub async fn list_page(
        &self,
        page: usize,
        page_size: usize,
        tag: Option<&str>,
    ) -> Result<ProjectPage> {
        query::paginate(&self.load_all().await, page, page_size, tag)
    }

    /// Per-tag document counts, sorted by tag name.
    pub async fn tag_aggregates(&self) -> Vec<TagCount> {
        query::tag_counts(&self.load_all().await)
    }

    /// Neighbors of `slug` in listing order; both empty for unknown slugs.
    pub async fn adjacent(&self, slug: &str) -> AdjacentProjects {
        query::adjacent(&self.load_all().await, slug)
    }

    async fn scan(&self) -> Result<Vec<Document>> {
        let files = self.source.list_files().await?;
        log::debug!("Scanning {} content files", files.len());

        let reads = files.iter().map(|file| async move {
            let text = self.source.read_file(&file.path).await;
            (file.stem.as_str(), file.path.as_path(), text)
        });

        let mut documents = Vec::with_capacity(files.len());
        for (slug, path, text) in join_all(reads).await {
            match text {
                Ok(text) => {
                    let (metadata, _) = frontmatter::parse_document(&text);
                    documents.push(Document::new(slug, metadata));
                }
                Err(e) => log::warn!("Skipping {}: {e}", path.display()),
            }
        }

        query::sort_by_date_desc(&mut documents);
        Ok(documents)
    }

    fn cached(&self) -> Option<Snapshot> {
        match self.cache.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    fn store(&self, snapshot: Option<Snapshot>) {
        match self.cache.write() {
            Ok(mut guard) => *guard = snapshot,
            Err(poisoned) => *poisoned.into_inner() = snapshot,
        }
    }
}
