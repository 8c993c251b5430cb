//! Project content pipeline: frontmatter parsing, listing, and rendering.
//!
//! A content directory holds one `.mdx` file per project. The
//! [`ContentRepository`] scans it once, keeps the documents sorted newest
//! first, and answers the queries the site pages need.
//!
//! # Modules
//!
//! - [`frontmatter`]: split files and parse metadata tolerantly
//! - [`markdown`]: render bodies to HTML
//! - [`date`]: date parsing for listing order
//! - [`query`]: pagination, tags, neighbors
//! - [`repository`]: cached repository over a [`ContentSource`]
//! - [`listing`]: static JSON listing payload
//!
//! # Example
//!
//! ```no_run
//! use folio_content::ContentRepository;
//!
//! # async fn example() -> folio_core::Result<()> {
//! let repo = ContentRepository::from_dir("content/projects");
//! let page = repo.list_page(1, 5, Some("rust")).await?;
//! for doc in &page.items {
//!     println!("{} ({})", doc.metadata.title, doc.slug);
//! }
//! # Ok(())
//! # }
//! ```

#![doc = include_str!("../README.md")]

pub mod date;
pub mod frontmatter;
pub mod listing;
pub mod markdown;
pub mod query;
pub mod repository;
pub mod source;
pub mod types;

pub use listing::ProjectListing;
pub use repository::ContentRepository;
pub use source::{ContentSource, FsSource};
pub use types::{AdjacentProjects, Document, ProjectImage, ProjectMetadata, ProjectPage, TagCount};
