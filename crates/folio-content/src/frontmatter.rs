//! Frontmatter extraction.
//!
//! A content file starts with a `---` line, YAML metadata, and a closing
//! `---` line; everything after that is the body. Metadata parsing never
//! fails: fields that are missing or have the wrong shape are left empty and
//! the rest of the document is kept.

use yaml_serde::Value;

use crate::types::{ProjectImage, ProjectMetadata};

const DELIMITER: &str = "---";

/// A content file split into its frontmatter block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// YAML between the delimiters, if the file has a complete block.
    pub raw: Option<&'a str>,
    /// Text after the closing delimiter (or the whole file without a block).
    pub body: &'a str,
}

/// Split `content` into frontmatter and body.
///
/// A leading byte-order mark is skipped and CRLF line endings are accepted.
/// A file whose opening delimiter is never closed is treated as all body.
pub fn split(content: &str) -> Frontmatter<'_> {
    let text = content.strip_prefix('\u{feff}').unwrap_or(content);

    let Some(rest) = after_opening_delimiter(text) else {
        return Frontmatter {
            raw: None,
            body: text,
        };
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if is_delimiter(line) {
            return Frontmatter {
                raw: Some(&rest[..offset]),
                body: &rest[offset + line.len()..],
            };
        }
        offset += line.len();
    }

    Frontmatter {
        raw: None,
        body: text,
    }
}

fn after_opening_delimiter(text: &str) -> Option<&str> {
    let (first, rest) = match text.find('\n') {
        Some(i) => (&text[..=i], &text[i + 1..]),
        None => (text, ""),
    };
    is_delimiter(first).then_some(rest)
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == DELIMITER
}

/// Parse a frontmatter block into metadata, keeping whatever is usable.
pub fn parse_metadata(raw: &str) -> ProjectMetadata {
    match yaml_serde::from_str::<Value>(raw) {
        Ok(value) => metadata_from_value(&value),
        Err(e) => {
            log::debug!("Unparseable frontmatter, using empty metadata: {e}");
            ProjectMetadata::default()
        }
    }
}

/// Split `content` and parse its frontmatter in one step.
///
/// Returns the metadata and the body text.
pub fn parse_document(content: &str) -> (ProjectMetadata, &str) {
    let parts = split(content);
    let metadata = parts.raw.map(parse_metadata).unwrap_or_default();
    (metadata, parts.body)
}

/// Build metadata from an already parsed YAML value.
///
/// Non-mapping values yield empty metadata.
pub fn metadata_from_value(value: &Value) -> ProjectMetadata {
    if !matches!(value, Value::Mapping(_)) {
        return ProjectMetadata::default();
    }

    ProjectMetadata {
        title: string_field(value, "title").unwrap_or_default(),
        description: string_field(value, "description"),
        date: string_field(value, "date"),
        kind: string_field(value, "type"),
        role: string_field(value, "role"),
        services: string_list_field(value, "services"),
        tags: string_list_field(value, "tags"),
        url: string_field(value, "url"),
        image: value.get("image").and_then(image_from_value),
        gallery: value
            .get("gallery")
            .and_then(Value::as_sequence)
            .map(|items| items.iter().filter_map(image_from_value).collect())
            .unwrap_or_default(),
        color: string_field(value, "color"),
        featured: value.get("featured").and_then(bool_from_value),
    }
}

/// Strings, numbers and booleans all read as text.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_string)
}

/// A sequence of scalars; a lone scalar becomes a one-item list.
fn string_list_field(value: &Value, key: &str) -> Vec<String> {
    match value.get(key) {
        Some(Value::Sequence(items)) => items.iter().filter_map(scalar_string).collect(),
        Some(other) => scalar_string(other).into_iter().collect(),
        None => Vec::new(),
    }
}

fn bool_from_value(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

fn dimension(value: &Value, key: &str) -> Option<u32> {
    value
        .get(key)
        .and_then(Value::as_u64)
        .and_then(|n| u32::try_from(n).ok())
}

/// A mapping with a `src`, or a bare string used as the source.
fn image_from_value(value: &Value) -> Option<ProjectImage> {
    match value {
        Value::String(src) => Some(ProjectImage {
            src: src.clone(),
            ..Default::default()
        }),
        Value::Mapping(_) => Some(ProjectImage {
            src: string_field(value, "src")?,
            width: dimension(value, "width"),
            height: dimension(value, "height"),
            caption: string_field(value, "caption"),
        }),
        _ => None,
    }
}
