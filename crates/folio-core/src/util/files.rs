//! Async file utilities for the Folio content pipeline.
//!
//! Content lives in a single flat directory, one file per document, so
//! listing is non-recursive and keeps the order the filesystem reports.

use std::path::{Path, PathBuf};

use tokio::fs;

use crate::{Error, Result};

/// Options for locating content files.
#[derive(Debug, Clone, Default)]
pub struct FindOptions {
    /// File extension to match (without dot), e.g., "mdx"
    pub extension: Option<String>,
}

impl FindOptions {
    /// Match files with the given extension.
    pub fn with_extension(extension: impl Into<String>) -> Self {
        Self {
            extension: Some(extension.into().trim_start_matches('.').to_string()),
        }
    }

    /// Create options for MDX content files.
    pub fn mdx() -> Self {
        Self::with_extension("mdx")
    }

    fn matches(&self, path: &Path) -> bool {
        match &self.extension {
            Some(ext) => path.extension().and_then(|e| e.to_str()) == Some(ext.as_str()),
            None => true,
        }
    }
}

/// Information about a discovered file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    /// Full path to the file.
    pub path: PathBuf,
    /// File stem (filename without extension).
    pub stem: String,
}

/// List the files directly inside `base_path` that match `options`.
///
/// Directories and non-UTF-8 names are skipped. Entries come back in the
/// order the filesystem enumerates them.
///
/// # Example
///
/// ```no_run
/// # use folio_core::util::files::{list_files, FindOptions};
/// # use std::path::Path;
/// # async fn example() -> folio_core::Result<()> {
/// let files = list_files(Path::new("content/projects"), &FindOptions::mdx()).await?;
/// for file in files {
///     println!("{}", file.stem);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn list_files(base_path: &Path, options: &FindOptions) -> Result<Vec<FileInfo>> {
    let mut files = Vec::new();
    let mut entries = fs::read_dir(base_path)
        .await
        .map_err(|e| Error::io_with_path(e, base_path))?;

    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, base_path))?
    {
        let path = entry.path();

        let is_file = entry
            .file_type()
            .await
            .map(|t| t.is_file() || t.is_symlink())
            .unwrap_or(false);
        if !is_file || !options.matches(&path) {
            continue;
        }

        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            log::debug!("Skipping non UTF-8 file name: {}", path.display());
            continue;
        };

        files.push(FileInfo {
            stem: stem.to_string(),
            path,
        });
    }

    Ok(files)
}

/// Find the file for `id` directly inside `base_path`.
///
/// Looks for `{id}.{extension}`; without an extension the bare `id` is tried.
pub async fn find_file_by_id(base_path: &Path, id: &str, options: &FindOptions) -> Result<PathBuf> {
    let file_name = match &options.extension {
        Some(ext) => format!("{id}.{ext}"),
        None => id.to_string(),
    };
    let path = base_path.join(file_name);

    if fs::metadata(&path)
        .await
        .map(|m| m.is_file())
        .unwrap_or(false)
    {
        return Ok(path);
    }

    Err(Error::not_found(format!(
        "File with id '{}' not found in {}",
        id,
        base_path.display()
    )))
}

/// Read a file's contents as a string.
///
/// Invalid UTF-8 sequences are replaced with U+FFFD instead of failing.
pub async fn read_file(path: &Path) -> Result<String> {
    let bytes = fs::read(path)
        .await
        .map_err(|e| Error::io_with_path(e, path))?;
    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => {
            log::debug!("{} is not valid UTF-8, decoding lossily", path.display());
            String::from_utf8_lossy(e.as_bytes()).into_owned()
        }
    })
}
