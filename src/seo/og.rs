//! Open Graph and Twitter Card data.
//!
//! Provides pure data structures for OG tags generation.
//! Tag serialization is handled by `seo/head.rs`.

use serde::{Deserialize, Serialize};

use crate::config::{CardType, SeoConfig};

/// `og:type` values this crate emits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OgType {
    #[default]
    Website,
    Article,
}

impl OgType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Website => "website",
            Self::Article => "article",
        }
    }
}

/// Share image with its declared dimensions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
}

/// Open Graph section of a metadata bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: OgType,
    pub locale: String,
    pub url: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<OgImage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub published_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modified_time: Option<String>,
    pub authors: Vec<String>,
    pub tags: Vec<String>,
}

/// Twitter card section of a metadata bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialCard {
    pub card_type: CardType,
    pub site_handle: String,
    pub creator_handle: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Default Open Graph values from site config.
///
/// Only contains site-level defaults; page-specific values (title, url,
/// image, times) are filled in by the resolver.
pub struct OgDefaults<'a> {
    pub og_type: OgType,
    pub site_name: &'a str,
    pub locale: &'a str,
    pub site_handle: &'a str,
    pub card: CardType,
}

impl<'a> OgDefaults<'a> {
    /// Create default OG tags from site config.
    pub fn from_config(config: &'a SeoConfig) -> Self {
        Self {
            og_type: OgType::Website,
            site_name: &config.site.name,
            locale: &config.site.locale,
            site_handle: &config.social.site_handle,
            card: config.social.card,
        }
    }

    /// Same defaults for an article page.
    pub fn article(mut self) -> Self {
        self.og_type = OgType::Article;
        self
    }

    /// Open Graph section with only the page-independent fields set.
    pub fn open_graph(&self, url: String, title: &str, description: &str) -> OpenGraph {
        OpenGraph {
            og_type: self.og_type,
            locale: self.locale.to_string(),
            url,
            site_name: self.site_name.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: None,
            published_time: None,
            modified_time: None,
            authors: Vec::new(),
            tags: Vec::new(),
        }
    }

    /// Social card crediting the site account as creator.
    pub fn social(&self, title: &str, description: &str) -> SocialCard {
        SocialCard {
            card_type: self.card,
            site_handle: self.site_handle.to_string(),
            creator_handle: self.site_handle.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            image: None,
        }
    }
}
