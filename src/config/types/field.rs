//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// A type-safe wrapper for config field paths.
///
/// Section structs expose their paths through `config_fields!`, so
/// diagnostics never spell a dotted path by hand.
///
/// # Example
///
/// ```ignore
/// config_fields!(SiteInfoConfig => SiteInfoFields {
///     url: "site.url",
/// });
///
/// diag.error(SiteInfoConfig::FIELDS.url, "required");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}

/// Generate a `FIELDS` constant of [`FieldPath`]s for a config section.
macro_rules! config_fields {
    ($owner:ty => $fields:ident { $($name:ident: $path:literal),* $(,)? }) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $fields {
            $(pub $name: $crate::config::FieldPath,)*
        }

        impl $owner {
            pub const FIELDS: $fields = $fields {
                $($name: $crate::config::FieldPath::new($path),)*
            };
        }
    };
}

pub(crate) use config_fields;
