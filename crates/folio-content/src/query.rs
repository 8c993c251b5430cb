//! Listing queries over a date-sorted document slice.
//!
//! These are plain functions so the repository and tests share one
//! implementation of ordering, pagination, tag counting and neighbors.

use std::collections::{BTreeMap, BTreeSet};

use folio_core::{Error, Result};

use crate::date;
use crate::types::{AdjacentProjects, Document, ProjectPage, TagCount};

/// Sort newest first. Stable, so equal dates keep their input order.
pub fn sort_by_date_desc(documents: &mut [Document]) {
    documents.sort_by_key(|doc| std::cmp::Reverse(date::sort_key(doc.metadata.date.as_deref())));
}

/// Featured documents, order preserved.
pub fn featured(documents: &[Document]) -> Vec<Document> {
    documents
        .iter()
        .filter(|doc| doc.metadata.is_featured())
        .cloned()
        .collect()
}

/// One page of the listing, optionally restricted to `tag`.
///
/// `page` is 1-based. Pages past the end are empty but still report
/// `total`, `has_next` and `has_prev`.
///
/// # Errors
///
/// [`Error::InvalidData`] when `page` or `page_size` is zero.
pub fn paginate(
    documents: &[Document],
    page: usize,
    page_size: usize,
    tag: Option<&str>,
) -> Result<ProjectPage> {
    if page == 0 {
        return Err(Error::invalid_data("page must be at least 1"));
    }
    if page_size == 0 {
        return Err(Error::invalid_data("page size must be at least 1"));
    }

    let filtered: Vec<&Document> = match tag {
        Some(tag) => documents.iter().filter(|d| d.metadata.has_tag(tag)).collect(),
        None => documents.iter().collect(),
    };
    let total = filtered.len();

    let start = (page - 1).saturating_mul(page_size);
    let end = start.saturating_add(page_size);
    let items = filtered
        .iter()
        .skip(start)
        .take(page_size)
        .map(|doc| (*doc).clone())
        .collect();

    Ok(ProjectPage {
        items,
        has_next: end < total,
        has_prev: page > 1,
        total,
    })
}

/// Number of documents per tag, sorted by tag name.
///
/// A tag repeated inside one document counts that document once.
pub fn tag_counts(documents: &[Document]) -> Vec<TagCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for doc in documents {
        let distinct: BTreeSet<&str> = doc.metadata.tags.iter().map(String::as_str).collect();
        for tag in distinct {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(name, count)| TagCount {
            name: name.to_string(),
            count,
        })
        .collect()
}

/// The documents on either side of `slug`.
pub fn adjacent(documents: &[Document], slug: &str) -> AdjacentProjects {
    let Some(index) = documents.iter().position(|doc| doc.slug == slug) else {
        return AdjacentProjects::default();
    };

    AdjacentProjects {
        prev: index
            .checked_sub(1)
            .and_then(|i| documents.get(i))
            .cloned(),
        next: documents.get(index + 1).cloned(),
    }
}
