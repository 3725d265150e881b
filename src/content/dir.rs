//! Directory-backed content lookup.
//!
//! Each record is a file named after its slug:
//!
//! ```text
//! content/
//! ├── hello-world.toml
//! └── release-notes.json
//! ```
//!
//! `.toml` is tried before `.json`. A slug with no file is absent content,
//! not an error.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::{ContentLookup, ContentRecord, LookupError};

/// Record file formats, in lookup order.
const FORMATS: [Format; 2] = [Format::Toml, Format::Json];

#[derive(Debug, Clone, Copy)]
enum Format {
    Toml,
    Json,
}

impl Format {
    const fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }

    fn decode(self, path: &Path, content: &str) -> Result<ContentRecord, LookupError> {
        match self {
            Self::Toml => {
                toml::from_str(content).map_err(|e| LookupError::Toml(path.to_path_buf(), e))
            }
            Self::Json => {
                serde_json::from_str(content).map_err(|e| LookupError::Json(path.to_path_buf(), e))
            }
        }
    }
}

/// Reads content records from `<dir>/<slug>.{toml,json}`.
#[derive(Debug, Clone)]
pub struct DirLookup {
    dir: PathBuf,
}

impl DirLookup {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// A slug must be a single, non-special path segment.
fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && slug != "."
        && slug != ".."
        && !slug.contains(['/', '\\', '\0'])
}

impl ContentLookup for DirLookup {
    type Error = LookupError;

    async fn fetch(&self, slug: &str) -> Result<Option<ContentRecord>, Self::Error> {
        if !is_valid_slug(slug) {
            return Err(LookupError::InvalidSlug(slug.to_string()));
        }

        for format in FORMATS {
            let path = self.dir.join(format!("{slug}.{}", format.extension()));
            let content = match tokio::fs::read_to_string(&path).await {
                Ok(content) => content,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(LookupError::Io(path, e)),
            };
            return format.decode(&path, &content).map(Some);
        }

        Ok(None)
    }
}
