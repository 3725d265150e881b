//! `[head]` configuration: site-wide `<head>` extras.
//!
//! These are emitted on every page regardless of content, next to the
//! per-page metadata.
//!
//! # Example
//!
//! ```toml
//! [head]
//! application_name = "My Blog"
//! referrer = "origin-when-cross-origin"
//! color_scheme = "light dark"
//! manifest = "/site.webmanifest"
//!
//! [[head.theme_colors]]
//! media = "(prefers-color-scheme: light)"
//! color = "#ffffff"
//!
//! [[head.icons]]
//! url = "/icon-32x32.png"
//! sizes = "32x32"
//! type = "image/png"
//!
//! [head.robots]
//! index = true
//! follow = true
//! max_image_preview = "large"
//!
//! [head.verification]
//! google = "abc123"
//! other = { "facebook-domain-verification" = "xyz" }
//!
//! [head.alternates]
//! en-US = "https://example.com/en-US"
//! es-ES = "https://example.com/es-ES"
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;
use crate::config::util::check_http_url;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadConfig {
    pub application_name: Option<String>,
    pub generator: Option<String>,
    pub referrer: Option<String>,
    pub color_scheme: Option<String>,
    pub creator: Option<String>,
    pub publisher: Option<String>,
    pub category: Option<String>,
    /// Web app manifest href.
    pub manifest: Option<String>,
    pub theme_colors: Vec<ThemeColor>,
    pub icons: Vec<IconLink>,
    pub robots: Option<RobotsConfig>,
    pub verification: VerificationConfig,
    /// Alternate-language URLs, keyed by language tag.
    pub alternates: BTreeMap<String, String>,
}

config_fields!(HeadConfig => HeadFields {
    theme_colors: "head.theme_colors",
    icons: "head.icons",
    robots: "head.robots",
    verification: "head.verification.other",
    alternates: "head.alternates",
});

/// `<meta name="theme-color">`, optionally scoped to a media query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeColor {
    #[serde(default)]
    pub media: Option<String>,
    pub color: String,
}

/// Icon `<link>` (favicon, apple-touch-icon, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconLink {
    #[serde(default = "default_icon_rel")]
    pub rel: String,
    pub url: String,
    #[serde(default)]
    pub sizes: Option<String>,
    #[serde(default, rename = "type")]
    pub mime: Option<String>,
}

fn default_icon_rel() -> String {
    "icon".into()
}

/// Crawler directives for `robots` and `googlebot` metas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RobotsConfig {
    pub index: bool,
    pub follow: bool,
    /// `none` | `standard` | `large`
    pub max_image_preview: Option<String>,
    /// Characters, `-1` for no limit.
    pub max_snippet: Option<i32>,
    /// Seconds, `-1` for no limit.
    pub max_video_preview: Option<i32>,
}

impl Default for RobotsConfig {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            max_image_preview: None,
            max_snippet: None,
            max_video_preview: None,
        }
    }
}

impl RobotsConfig {
    /// Content of `<meta name="robots">`.
    pub fn content(&self) -> String {
        let index = if self.index { "index" } else { "noindex" };
        let follow = if self.follow { "follow" } else { "nofollow" };
        format!("{index}, {follow}")
    }

    /// Content of `<meta name="googlebot">`, `None` without preview limits.
    pub fn googlebot_content(&self) -> Option<String> {
        let mut parts = Vec::new();
        if let Some(v) = self.max_video_preview {
            parts.push(format!("max-video-preview:{v}"));
        }
        if let Some(v) = &self.max_image_preview {
            parts.push(format!("max-image-preview:{v}"));
        }
        if let Some(v) = self.max_snippet {
            parts.push(format!("max-snippet:{v}"));
        }

        if parts.is_empty() {
            return None;
        }
        Some(format!("{}, {}", self.content(), parts.join(", ")))
    }
}

/// Search engine / service ownership verification codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VerificationConfig {
    pub google: Option<String>,
    pub yandex: Option<String>,
    /// Arbitrary `<meta name=… content=…>` verification pairs.
    pub other: BTreeMap<String, String>,
}

impl HeadConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for color in &self.theme_colors {
            if color.color.trim().is_empty() {
                diag.error(Self::FIELDS.theme_colors, "theme color is empty");
            }
        }

        for icon in &self.icons {
            if icon.url.trim().is_empty() {
                diag.error(Self::FIELDS.icons, "icon url is empty");
            }
        }

        if let Some(robots) = &self.robots
            && let Some(preview) = &robots.max_image_preview
            && !matches!(preview.as_str(), "none" | "standard" | "large")
        {
            diag.error_with_hint(
                Self::FIELDS.robots,
                format!("max_image_preview `{preview}` is not recognized"),
                "use one of: none | standard | large",
            );
        }

        if self.verification.other.keys().any(|name| name.trim().is_empty()) {
            diag.error_with_hint(
                Self::FIELDS.verification,
                "verification entry has an empty meta name",
                "use a name like \"facebook-domain-verification\"",
            );
        }

        for url in self.alternates.values() {
            check_http_url(diag, Self::FIELDS.alternates, url);
        }
    }
}
