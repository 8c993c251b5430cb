//! Document and query result types.

use serde::{Deserialize, Serialize};

/// Image reference in a project's frontmatter.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectImage {
    /// Image source path or URL.
    pub src: String,
    /// Intrinsic width in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    /// Intrinsic height in pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    /// Caption shown under the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Structured frontmatter of a project document.
///
/// Every field is optional except `title`, which is empty when the
/// frontmatter does not provide one. Keys not listed here are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Display title.
    #[serde(default)]
    pub title: String,
    /// Short summary used on cards and in meta tags.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Date string as written in the frontmatter; drives listing order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Project type (e.g. "Client work", "Side project").
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Role held on the project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    /// Services delivered, in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub services: Vec<String>,
    /// Tags as written; duplicates are kept.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// External link to the live project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Cover image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ProjectImage>,
    /// Additional images.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<ProjectImage>,
    /// Accent color for the project page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Whether the project shows up on the home page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ProjectMetadata {
    /// True when `featured: true` was set.
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }

    /// True when `tag` appears in the tag list (exact, case-sensitive).
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// One project document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// File name without extension.
    pub slug: String,
    /// Parsed frontmatter.
    pub metadata: ProjectMetadata,
    /// Rendered HTML body; only set when a single document is loaded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl Document {
    /// Create a listing document (no rendered body).
    pub fn new(slug: impl Into<String>, metadata: ProjectMetadata) -> Self {
        Self {
            slug: slug.into(),
            metadata,
            content: None,
        }
    }
}

/// A tag with the number of documents carrying it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    /// Tag text.
    pub name: String,
    /// Number of documents carrying the tag.
    pub count: usize,
}

/// One page of the (optionally tag-filtered) listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectPage {
    /// Documents on this page, newest first.
    pub items: Vec<Document>,
    /// More documents follow this page.
    pub has_next: bool,
    /// This is not the first page.
    pub has_prev: bool,
    /// Size of the filtered listing.
    pub total: usize,
}

/// Neighbors of a document in listing order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjacentProjects {
    /// Document one position before (newer).
    pub prev: Option<Document>,
    /// Document one position after (older).
    pub next: Option<Document>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_serializes_type_key() {
        let metadata = ProjectMetadata {
            title: "Atlas".into(),
            kind: Some("Client work".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&metadata).unwrap();
        assert_eq!(json["type"], "Client work");
        assert!(json.get("kind").is_none());
        assert!(json.get("tags").is_none());
        assert!(json.get("featured").is_none());
    }

    #[test]
    fn test_document_omits_missing_content() {
        let doc = Document::new("atlas", ProjectMetadata::default());
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["slug"], "atlas");
        assert!(json.get("content").is_none());
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let metadata = ProjectMetadata {
            tags: vec!["Rust".into()],
            ..Default::default()
        };
        assert!(metadata.has_tag("Rust"));
        assert!(!metadata.has_tag("rust"));
    }

    #[test]
    fn test_is_featured_defaults_false() {
        assert!(!ProjectMetadata::default().is_featured());
        let featured = ProjectMetadata {
            featured: Some(true),
            ..Default::default()
        };
        assert!(featured.is_featured());
    }
}
