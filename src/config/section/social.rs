//! `[social]` configuration (Twitter card defaults).

use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::config::types::config_fields;

/// Twitter card type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardType {
    Summary,
    /// Large image card (default).
    #[default]
    SummaryLargeImage,
    App,
    Player,
}

impl CardType {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::SummaryLargeImage => "summary_large_image",
            Self::App => "app",
            Self::Player => "player",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialConfig {
    /// Handle of the site account, emitted as `twitter:site`.
    pub site_handle: String,

    /// Card type, emitted as `twitter:card`.
    pub card: CardType,
}

config_fields!(SocialConfig => SocialFields {
    site_handle: "social.site_handle",
    card: "social.card",
});

impl Default for SocialConfig {
    fn default() -> Self {
        Self {
            site_handle: "@yourblog".into(),
            card: CardType::SummaryLargeImage,
        }
    }
}

impl SocialConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        let handle = &self.site_handle;
        if !handle.is_empty() && !handle.starts_with('@') {
            diag.error_with_hint(
                Self::FIELDS.site_handle,
                format!("handle `{handle}` must start with `@`"),
                format!("use \"@{handle}\""),
            );
        }
    }
}

/// Prefix a bare handle with `@`, leaving an already-prefixed one alone.
pub fn at_handle(handle: &str) -> String {
    format!("@{}", handle.trim_start_matches('@'))
}
