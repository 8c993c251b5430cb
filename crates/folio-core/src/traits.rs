//! Core traits for Folio.
//!
//! [`ConfigProvider`] abstracts where project content lives, so the content
//! reader can be built from any configuration type (the CLI's TOML config,
//! or a hand-rolled one in tests).

use std::path::PathBuf;

use crate::Result;

/// Default extension of project content files.
pub const DEFAULT_CONTENT_EXTENSION: &str = "mdx";

/// Trait for site configuration consumed by the content pipeline.
///
/// # Bounds
///
/// - `Send + Sync`: Configuration must be shareable across threads
/// - `Clone`: Configuration can be duplicated for passing to subsystems
/// - `'static`: Configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use folio_core::traits::ConfigProvider;
/// use folio_core::Result;
///
/// #[derive(Clone)]
/// struct SiteConfig {
///     root: PathBuf,
/// }
///
/// impl ConfigProvider for SiteConfig {
///     fn project_name(&self) -> &str {
///         "my-portfolio"
///     }
///
///     fn base_path(&self) -> Result<PathBuf> {
///         Ok(self.root.clone())
///     }
/// }
///
/// let config = SiteConfig { root: PathBuf::from("/site") };
/// assert_eq!(
///     config.content_root().unwrap(),
///     PathBuf::from("/site/content/projects")
/// );
/// assert_eq!(config.content_extension(), "mdx");
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used in log lines and CLI output.
    fn project_name(&self) -> &str;

    /// Base path of the site checkout.
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined.
    fn base_path(&self) -> Result<PathBuf>;

    /// Directory holding one content file per project.
    ///
    /// Defaults to `<base_path>/content/projects`.
    fn content_root(&self) -> Result<PathBuf> {
        Ok(self.base_path()?.join("content").join("projects"))
    }

    /// Extension (without dot) that marks a file as a project document.
    fn content_extension(&self) -> &str {
        DEFAULT_CONTENT_EXTENSION
    }
}
