//! `[image]` configuration (Open Graph image defaults).

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;
use crate::config::util::check_http_url;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    /// Image used when a content record has no cover image.
    pub default_url: Option<String>,

    /// Alt text used with `default_url`.
    pub default_alt: String,

    /// Declared `og:image:width`.
    pub width: u32,

    /// Declared `og:image:height`.
    pub height: u32,
}

config_fields!(ImageConfig => ImageFields {
    default_url: "image.default_url",
    default_alt: "image.default_alt",
    width: "image.width",
    height: "image.height",
});

impl Default for ImageConfig {
    fn default() -> Self {
        Self {
            default_url: None,
            default_alt: "Site image".into(),
            width: 1200,
            height: 630,
        }
    }
}

impl ImageConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if let Some(url) = &self.default_url {
            check_http_url(diag, Self::FIELDS.default_url, url);
        }
        if self.width == 0 {
            diag.error(Self::FIELDS.width, "image width must be greater than 0");
        }
        if self.height == 0 {
            diag.error(Self::FIELDS.height, "image height must be greater than 0");
        }
    }
}
