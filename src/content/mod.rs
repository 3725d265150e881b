//! Content records and the lookup collaborator that provides them.
//!
//! A [`ContentLookup`] turns a slug into an optional [`ContentRecord`].
//! `Ok(None)` means "no such content" and is a normal outcome; `Err` is a
//! lookup failure the resolver hands back to its caller untouched.
//!
//! | Lookup         | Source                                      |
//! |----------------|---------------------------------------------|
//! | `MemoryLookup` | In-memory slug → record map                 |
//! | `DirLookup`    | `<dir>/<slug>.toml` or `<dir>/<slug>.json`  |

mod dir;
mod memory;

pub use dir::DirLookup;
pub use memory::MemoryLookup;

use std::future::Future;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::DateTimeUtc;

// ============================================================================
// Records
// ============================================================================

/// Deserialize tags, treating `null` as empty vec
fn deserialize_tags<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<Vec<String>> = Option::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

/// A piece of content (typically a blog post) as returned by a lookup.
///
/// # Fields
///
/// | Field         | Type                  | Description                         |
/// |---------------|-----------------------|-------------------------------------|
/// | `title`       | `String`              | Page title                          |
/// | `excerpt`     | `String`              | Short summary, used as description  |
/// | `coverImage`  | `Option<String>`      | Share image URL                     |
/// | `publishedAt` | `DateTimeUtc`         | Publication time                    |
/// | `updatedAt`   | `Option<DateTimeUtc>` | Last update, defaults to published  |
/// | `author`      | `Author`              | Single author                       |
/// | `tags`        | `Vec<String>`         | Ordered tags, `null` = empty        |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub title: String,
    pub excerpt: String,
    #[serde(default)]
    pub cover_image: Option<String>,
    pub published_at: DateTimeUtc,
    #[serde(default)]
    pub updated_at: Option<DateTimeUtc>,
    pub author: Author,
    #[serde(default, deserialize_with = "deserialize_tags")]
    pub tags: Vec<String>,
}

impl ContentRecord {
    /// Last modification time, falling back to the publication time.
    pub fn modified_at(&self) -> DateTimeUtc {
        self.updated_at.unwrap_or(self.published_at)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    /// Social handle without the leading `@`.
    #[serde(default, alias = "twitter")]
    pub social_handle: Option<String>,
}

// ============================================================================
// Lookup
// ============================================================================

/// Data-access collaborator resolving a slug to a content record.
///
/// Implementations decide their own failure type; the resolver never
/// inspects or wraps it.
pub trait ContentLookup {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetch the record for `slug`, `Ok(None)` when there is none.
    fn fetch(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<ContentRecord>, Self::Error>> + Send;
}

impl<L: ContentLookup + Sync> ContentLookup for &L {
    type Error = L::Error;

    fn fetch(
        &self,
        slug: &str,
    ) -> impl Future<Output = Result<Option<ContentRecord>, Self::Error>> + Send {
        (**self).fetch(slug)
    }
}

/// Failures of the built-in lookups.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid TOML content record `{0}`")]
    Toml(PathBuf, #[source] toml::de::Error),

    #[error("invalid JSON content record `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),

    #[error("slug `{0}` is not a valid content name")]
    InvalidSlug(String),
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// The sample post used across tests.
    pub fn sample_record() -> ContentRecord {
        ContentRecord {
            title: "Example Blog Post Title".into(),
            excerpt: "This is a brief description of the blog post...".into(),
            cover_image: Some("https://example.com/images/blog-cover.jpg".into()),
            published_at: DateTimeUtc::from_ymd(2024, 1, 15),
            updated_at: Some(DateTimeUtc::from_ymd(2024, 1, 20)),
            author: Author {
                name: "John Doe".into(),
                url: Some("https://example.com/author/john-doe".into()),
                social_handle: Some("johndoe".into()),
            },
            tags: vec!["web development".into(), "nextjs".into(), "react".into()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deserialize_camel_case() {
        let json = r#"{
            "title": "Hello",
            "excerpt": "Intro",
            "coverImage": "https://example.com/c.jpg",
            "publishedAt": "2024-01-15",
            "updatedAt": "2024-01-20T08:00:00.000Z",
            "author": {"name": "X", "twitter": "x"},
            "tags": ["a", "b"]
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.cover_image.as_deref(), Some("https://example.com/c.jpg"));
        assert_eq!(record.author.social_handle.as_deref(), Some("x"));
        assert_eq!(record.tags, vec!["a", "b"]);
        assert_eq!(
            record.modified_at(),
            DateTimeUtc::new(2024, 1, 20, 8, 0, 0)
        );
    }

    #[test]
    fn test_record_optional_fields() {
        let json = r#"{
            "title": "Hello",
            "excerpt": "Intro",
            "publishedAt": "2024-01-15",
            "author": {"name": "X", "socialHandle": "x"},
            "tags": null
        }"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert!(record.cover_image.is_none());
        assert!(record.tags.is_empty());
        assert_eq!(record.modified_at(), record.published_at);
        assert_eq!(record.author.social_handle.as_deref(), Some("x"));
    }

    #[test]
    fn test_record_rejects_malformed_timestamp() {
        let json = r#"{
            "title": "Hello",
            "excerpt": "Intro",
            "publishedAt": "Jan 15",
            "author": {"name": "X"}
        }"#;
        assert!(serde_json::from_str::<ContentRecord>(json).is_err());
    }

    #[test]
    fn test_lookup_error_display() {
        let err = LookupError::InvalidSlug("../etc".into());
        assert_eq!(err.to_string(), "slug `../etc` is not a valid content name");
    }
}
