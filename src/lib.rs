//! Seometa - resolve page content into search and social-sharing metadata.
//!
//! ```text
//! slug ─► ContentLookup ─► Resolver ─► MetadataBundle ─► render_head ─► <head> tags
//!                            ▲                              ▲
//!                            └──────── SeoConfig ───────────┘
//! ```
//!
//! # Example
//!
//! ```ignore
//! let config = SeoConfig::load(Path::new("seo.toml"))?;
//! let lookup = DirLookup::new(config.content_dir());
//! let bundle = Resolver::new(&config, lookup).resolve("hello-world").await?;
//!
//! let mut fragment = HeadFragment::new();
//! apply(&bundle, &config, &mut fragment);
//! print!("{}", fragment.to_html());
//! ```

pub mod config;
pub mod content;
pub mod logger;
pub mod seo;
pub mod utils;

pub use config::SeoConfig;
pub use content::{Author, ContentLookup, ContentRecord, DirLookup, LookupError, MemoryLookup};
pub use seo::{MetadataBundle, Resolver};
