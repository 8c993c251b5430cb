//! Where content files come from.
//!
//! [`ContentSource`] is the seam between the repository and the filesystem.
//! [`FsSource`] reads a content directory with tokio; tests plug in an
//! in-memory source to count scans.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use folio_core::traits::ConfigProvider;
use folio_core::util::files::{self, FileInfo, FindOptions};
use folio_core::util::paths::expand_tilde;
use folio_core::{Error, Result};

/// Access to the raw content files of a repository.
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Enumerate content files in directory order.
    async fn list_files(&self) -> Result<Vec<FileInfo>>;

    /// Resolve the file holding `slug`.
    ///
    /// Returns [`Error::NotFound`] when no such file exists.
    async fn locate(&self, slug: &str) -> Result<PathBuf>;

    /// Read a file returned by [`list_files`](Self::list_files) or
    /// [`locate`](Self::locate).
    async fn read_file(&self, path: &Path) -> Result<String>;
}

/// Content files in a directory on disk.
#[derive(Debug, Clone)]
pub struct FsSource {
    root: PathBuf,
    options: FindOptions,
}

impl FsSource {
    /// Read `<root>/*.mdx`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: expand_tilde(root),
            options: FindOptions::mdx(),
        }
    }

    /// Use a different content file extension.
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.options = FindOptions::with_extension(extension);
        self
    }

    /// Build a source from a configuration provider.
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(config.content_root()?).with_extension(config.content_extension()))
    }

    /// The content directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The recognized extension, without dot.
    pub fn extension(&self) -> Option<&str> {
        self.options.extension.as_deref()
    }
}

#[async_trait]
impl ContentSource for FsSource {
    async fn list_files(&self) -> Result<Vec<FileInfo>> {
        files::list_files(&self.root, &self.options).await
    }

    async fn locate(&self, slug: &str) -> Result<PathBuf> {
        if !is_safe_slug(slug) {
            return Err(Error::not_found(format!("Project '{slug}' not found")));
        }
        files::find_file_by_id(&self.root, slug, &self.options)
            .await
            .map_err(|_| Error::not_found(format!("Project '{slug}' not found")))
    }

    async fn read_file(&self, path: &Path) -> Result<String> {
        files::read_file(path).await
    }
}

/// Slugs name files directly inside the root; no separators or parent hops.
pub(crate) fn is_safe_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\'])
        && !slug.contains('\0')
}
