//! Configuration section definitions for `seo.toml`.
//!
//! # Example
//!
//! ```toml
//! [site]
//! url = "https://example.com/blog"
//! name = "My Blog"
//! locale = "en_US"
//! title_template = "%s | My Blog"
//!
//! [social]
//! site_handle = "@yourblog"
//! card = "summary_large_image"
//!
//! [image]
//! default_url = "https://example.com/og-image.jpg"
//! width = 1200
//! height = 630
//!
//! [not_found]
//! title = "Post Not Found"
//!
//! [content]
//! dir = "content"
//! ```

mod content;
mod head;
mod image;
mod not_found;
mod site;
mod social;

pub use content::ContentConfig;
pub use head::{HeadConfig, IconLink, RobotsConfig, ThemeColor, VerificationConfig};
pub use image::ImageConfig;
pub use not_found::NotFoundConfig;
pub use site::{SiteInfoConfig, TITLE_PLACEHOLDER};
pub use social::{CardType, SocialConfig, at_handle};
