//! `[site]` configuration.
//!
//! Site-level identity shared by every resolved page: base URL, site name,
//! locale, and the optional `<title>` template.

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;
use crate::config::util::check_http_url;

/// Placeholder replaced by the page title in `title_template`.
pub const TITLE_PLACEHOLDER: &str = "%s";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteInfoConfig {
    /// Base URL that slugs are appended to (e.g. "https://example.com/blog").
    pub url: String,

    /// Site name, emitted as `og:site_name`.
    pub name: String,

    /// Open Graph locale (e.g. "en_US").
    pub locale: String,

    /// Template for the rendered `<title>`, `%s` is the page title.
    ///
    /// Example: `"%s | My Blog"`. The bundle's `title` is never templated.
    pub title_template: Option<String>,
}

config_fields!(SiteInfoConfig => SiteInfoFields {
    url: "site.url",
    name: "site.name",
    locale: "site.locale",
    title_template: "site.title_template",
});

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            url: "https://example.com/blog".into(),
            name: "My Blog".into(),
            locale: "en_US".into(),
            title_template: None,
        }
    }
}

impl SiteInfoConfig {
    /// Base URL without trailing slashes.
    pub fn base_url(&self) -> &str {
        self.url.trim_end_matches('/')
    }

    /// Canonical URL for `slug`: base URL + "/" + slug.
    pub fn canonical_url(&self, slug: &str) -> String {
        format!("{}/{}", self.base_url(), slug)
    }

    /// Apply `title_template` to a page title.
    pub fn format_title(&self, title: &str) -> String {
        match &self.title_template {
            Some(template) => template.replacen(TITLE_PLACEHOLDER, title, 1),
            None => title.to_string(),
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        check_http_url(diag, Self::FIELDS.url, &self.url);

        if self.name.trim().is_empty() {
            diag.error_with_hint(
                Self::FIELDS.name,
                "site name is empty",
                "set a name, e.g.: \"My Blog\"",
            );
        }

        if let Some(template) = &self.title_template
            && !template.contains(TITLE_PLACEHOLDER)
        {
            diag.error_with_hint(
                Self::FIELDS.title_template,
                format!("template `{template}` has no `{TITLE_PLACEHOLDER}` placeholder"),
                "use format like \"%s | My Blog\"",
            );
        }

        if self.locale.contains('-') {
            diag.warn(
                Self::FIELDS.locale,
                format!(
                    "Open Graph locales use underscores, `{}` should probably be `{}`",
                    self.locale,
                    self.locale.replace('-', "_")
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let site = SiteInfoConfig::default();
        assert_eq!(site.url, "https://example.com/blog");
        assert_eq!(site.name, "My Blog");
        assert_eq!(site.locale, "en_US");
        assert!(site.title_template.is_none());
    }

    #[test]
    fn test_canonical_url_trims_trailing_slash() {
        let site = SiteInfoConfig {
            url: "https://example.com/blog/".into(),
            ..Default::default()
        };
        assert_eq!(site.base_url(), "https://example.com/blog");
        assert_eq!(
            site.canonical_url("hello-world"),
            "https://example.com/blog/hello-world"
        );
    }

    #[test]
    fn test_format_title() {
        let mut site = SiteInfoConfig::default();
        assert_eq!(site.format_title("Hello"), "Hello");

        site.title_template = Some("%s | My Blog".into());
        assert_eq!(site.format_title("Hello"), "Hello | My Blog");
        // Only the first placeholder is a title slot
        assert_eq!(site.format_title("100%s"), "100%s | My Blog");
    }

    #[test]
    fn test_validate_default_is_clean() {
        let mut diag = ConfigDiagnostics::new();
        SiteInfoConfig::default().validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings().is_empty());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let site = SiteInfoConfig {
            url: "not a url".into(),
            name: "  ".into(),
            title_template: Some("My Blog".into()),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert_eq!(diag.len(), 3);
    }

    #[test]
    fn test_validate_warns_on_dashed_locale() {
        let site = SiteInfoConfig {
            locale: "en-US".into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        assert!(diag.is_empty());
        assert!(diag.warnings()[0].1.contains("en_US"));
    }

    #[test]
    fn test_language_and_description_are_unknown_keys() {
        let (config, ignored) = crate::config::SeoConfig::parse_with_ignored(
            "[site]\nname = \"Blog\"\nlanguage = \"en\"\ndescription = \"Site wide\"\n",
        )
        .unwrap();
        assert_eq!(config.site.name, "Blog");
        assert_eq!(ignored, vec!["site.language", "site.description"]);
    }
}
