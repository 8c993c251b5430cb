//! Handler functions for project, palette, and export commands.
//!
//! Each handler returns the text to print so [`crate::app::FolioCli`] owns
//! stdout and the handlers stay testable.

use std::path::Path;

use folio_content::{AdjacentProjects, ContentRepository, ContentSource, Document, ProjectListing};
use folio_core::{Error, Result};
use serde::Serialize;

/// Options for `projects list`.
#[derive(Debug, Clone)]
pub struct ListOptions {
    /// 1-based page number.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Tag filter.
    pub tag: Option<String>,
}

/// A project together with its listing neighbors.
#[derive(Debug, Serialize)]
struct ProjectView {
    project: Document,
    #[serde(flatten)]
    adjacent: AdjacentProjects,
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| Error::serialization(e.to_string()))
}

// ============================================================================
// Projects
// ============================================================================

/// One page of the listing as JSON.
pub async fn handle_list<S: ContentSource>(
    repo: &ContentRepository<S>,
    options: &ListOptions,
) -> Result<String> {
    let page = repo
        .list_page(options.page, options.per_page, options.tag.as_deref())
        .await?;
    tracing::debug!(
        page = options.page,
        items = page.items.len(),
        total = page.total,
        "Listed projects"
    );
    to_json(&page)
}

/// Featured projects as JSON.
pub async fn handle_featured<S: ContentSource>(repo: &ContentRepository<S>) -> Result<String> {
    to_json(&repo.list_featured().await)
}

/// One project with rendered body and neighbors as JSON.
pub async fn handle_show<S: ContentSource>(
    repo: &ContentRepository<S>,
    slug: &str,
) -> Result<String> {
    let project = repo.load_one(slug).await?;
    let adjacent = repo.adjacent(slug).await;
    to_json(&ProjectView { project, adjacent })
}

/// Tag counts as JSON.
pub async fn handle_tags<S: ContentSource>(repo: &ContentRepository<S>) -> Result<String> {
    to_json(&repo.tag_aggregates().await)
}

// ============================================================================
// Palette
// ============================================================================

/// Primary and secondary ramps as CSS custom properties, or JSON.
pub fn handle_palette(color: &str, json: bool) -> Result<String> {
    let (primary, secondary) = folio_palette::derive_primary_and_secondary(color)?;

    if json {
        return to_json(&serde_json::json!({
            "base": color,
            "primary": primary,
            "secondary": secondary,
        }));
    }

    let mut css = format!("/* Shades for {color} */\n:root {{\n");
    for ramp in [&primary, &secondary] {
        for line in ramp.to_css().lines() {
            css.push_str("  ");
            css.push_str(line);
            css.push('\n');
        }
    }
    css.push_str("}\n");
    Ok(css)
}

// ============================================================================
// Export
// ============================================================================

/// Write the listing payload to `output` and report what was written.
pub async fn handle_export<S: ContentSource>(
    repo: &ContentRepository<S>,
    output: &Path,
) -> Result<String> {
    let listing = ProjectListing::collect(repo).await;
    listing.write_json(output).await?;
    tracing::info!(path = %output.display(), total = listing.total, "Exported project listing");
    Ok(format!(
        "Wrote {} projects ({} tags) to {}",
        listing.total,
        listing.tags.len(),
        output.display()
    ))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write(dir: &Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    fn sample_repo(dir: &Path) -> ContentRepository {
        write(
            dir,
            "a.mdx",
            "---\ntitle: A\ndate: 2024-01-01\ntags: [x]\nfeatured: true\n---\nA body",
        );
        write(dir, "b.mdx", "---\ntitle: B\ndate: 2023-01-01\ntags: [x, y]\n---\n");
        write(dir, "c.mdx", "---\ntitle: C\ndate: 2025-01-01\n---\n*C* body");
        ContentRepository::from_dir(dir)
    }

    #[tokio::test]
    async fn test_handle_list() {
        let temp = TempDir::new().unwrap();
        let repo = sample_repo(temp.path());
        let options = ListOptions {
            page: 1,
            per_page: 2,
            tag: None,
        };

        let out = handle_list(&repo, &options).await.unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["has_next"], true);
        assert_eq!(value["has_prev"], false);
        assert_eq!(value["items"][0]["slug"], "c");
        assert_eq!(value["items"][1]["slug"], "a");
    }

    #[tokio::test]
    async fn test_handle_list_tag_and_zero_page() {
        let temp = TempDir::new().unwrap();
        let repo = sample_repo(temp.path());

        let options = ListOptions {
            page: 1,
            per_page: 5,
            tag: Some("y".into()),
        };
        let value: serde_json::Value =
            serde_json::from_str(&handle_list(&repo, &options).await.unwrap()).unwrap();
        assert_eq!(value["total"], 1);
        assert_eq!(value["items"][0]["slug"], "b");

        let options = ListOptions {
            page: 0,
            per_page: 5,
            tag: None,
        };
        let err = handle_list(&repo, &options).await.unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_handle_featured_and_tags() {
        let temp = TempDir::new().unwrap();
        let repo = sample_repo(temp.path());

        let featured: serde_json::Value =
            serde_json::from_str(&handle_featured(&repo).await.unwrap()).unwrap();
        assert_eq!(featured.as_array().unwrap().len(), 1);
        assert_eq!(featured[0]["slug"], "a");

        let tags: serde_json::Value =
            serde_json::from_str(&handle_tags(&repo).await.unwrap()).unwrap();
        assert_eq!(tags[0]["name"], "x");
        assert_eq!(tags[0]["count"], 2);
        assert_eq!(tags[1]["name"], "y");
    }

    #[tokio::test]
    async fn test_handle_show() {
        let temp = TempDir::new().unwrap();
        let repo = sample_repo(temp.path());

        let value: serde_json::Value =
            serde_json::from_str(&handle_show(&repo, "a").await.unwrap()).unwrap();
        assert_eq!(value["project"]["metadata"]["title"], "A");
        assert!(value["project"]["content"].as_str().unwrap().contains("<p>A body</p>"));
        assert_eq!(value["prev"]["slug"], "c");
        assert_eq!(value["next"]["slug"], "b");

        let err = handle_show(&repo, "missing").await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_handle_palette_css() {
        let css = handle_palette("#3b82f6", false).unwrap();
        assert!(css.starts_with("/* Shades for #3b82f6 */\n:root {\n"));
        assert!(css.contains("  --primary-500: #215bba;\n"));
        assert!(css.contains("  --secondary-500: #606976;\n"));
        assert!(css.ends_with("}\n"));
        assert_eq!(css.lines().filter(|l| l.contains("--")).count(), 22);
    }

    #[test]
    fn test_handle_palette_json() {
        let out = handle_palette("white", true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["base"], "white");
        assert_eq!(value["primary"]["--primary-50"], "#f5f5f5");
        assert_eq!(value["secondary"]["--secondary-400"], "#808080");
    }

    #[test]
    fn test_handle_palette_invalid() {
        let err = handle_palette("transparent", false).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)));
    }

    #[tokio::test]
    async fn test_handle_export() {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        std::fs::create_dir(&content).unwrap();
        let repo = sample_repo(&content);
        let output = temp.path().join("out").join("api").join("projects.json");

        let message = handle_export(&repo, &output).await.unwrap();
        assert!(message.starts_with("Wrote 3 projects (2 tags)"));

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(written["total"], 3);
        assert_eq!(written["projects"][0]["slug"], "c");
    }
}
