//! Content record → metadata bundle resolution.
//!
//! ```text
//! slug ──► ContentLookup::fetch ──► Some(record) ──► from_record()
//!                    │                └─► None ──► not_found()
//!                    └─► Err(e) ──► returned to the caller as-is
//! ```
//!
//! Exactly one lookup per resolution. No retries, no caching, no logging.

use crate::config::{SeoConfig, at_handle};
use crate::content::{ContentLookup, ContentRecord};

use super::bundle::{AuthorLink, MetadataBundle};
use super::og::{OgDefaults, OgImage};

/// Resolves slugs against a lookup using one site configuration.
pub struct Resolver<'a, L> {
    config: &'a SeoConfig,
    lookup: L,
}

impl<'a, L: ContentLookup> Resolver<'a, L> {
    pub fn new(config: &'a SeoConfig, lookup: L) -> Self {
        Self { config, lookup }
    }

    pub fn config(&self) -> &SeoConfig {
        self.config
    }

    /// Resolve `slug` into a bundle.
    ///
    /// Absent content yields [`not_found`]; a lookup error is returned
    /// unchanged.
    pub async fn resolve(&self, slug: &str) -> Result<MetadataBundle, L::Error> {
        let bundle = match self.lookup.fetch(slug).await? {
            Some(record) => from_record(self.config, slug, &record),
            None => not_found(self.config),
        };
        Ok(bundle)
    }
}

/// Bundle for an existing record.
pub fn from_record(config: &SeoConfig, slug: &str, record: &ContentRecord) -> MetadataBundle {
    let defaults = OgDefaults::from_config(config).article();
    let canonical_url = config.site.canonical_url(slug);

    // Cover images describe the post; the site default keeps its own alt
    let image = match (&record.cover_image, &config.image.default_url) {
        (Some(url), _) => Some((url, &record.title)),
        (None, Some(url)) => Some((url, &config.image.default_alt)),
        (None, None) => None,
    }
    .map(|(url, alt)| OgImage {
        url: url.clone(),
        width: config.image.width,
        height: config.image.height,
        alt: alt.clone(),
    });

    let author = &record.author;
    let creator_handle = author
        .social_handle
        .as_deref()
        .filter(|handle| !handle.trim_start_matches('@').is_empty())
        .map(at_handle)
        .unwrap_or_else(|| config.social.site_handle.clone());

    let mut open_graph =
        defaults.open_graph(canonical_url.clone(), &record.title, &record.excerpt);
    open_graph.image = image.clone();
    open_graph.published_time = Some(record.published_at.to_iso8601());
    open_graph.modified_time = Some(record.modified_at().to_iso8601());
    open_graph.authors = vec![author.name.clone()];
    open_graph.tags = record.tags.clone();

    let mut social = defaults.social(&record.title, &record.excerpt);
    social.creator_handle = creator_handle;
    social.image = image.map(|image| image.url);

    MetadataBundle {
        title: record.title.clone(),
        description: record.excerpt.clone(),
        authors: vec![AuthorLink {
            name: author.name.clone(),
            url: author.url.clone(),
        }],
        keywords: record.tags.clone(),
        canonical_url,
        open_graph,
        social,
    }
}

/// The fixed bundle for a slug without content.
///
/// Independent of the slug: points at the site root, carries no image,
/// authors or keywords.
pub fn not_found(config: &SeoConfig) -> MetadataBundle {
    let defaults = OgDefaults::from_config(config);
    let title = &config.not_found.title;
    let description = &config.not_found.description;
    let canonical_url = config.site.base_url().to_string();

    MetadataBundle {
        title: title.clone(),
        description: description.clone(),
        authors: Vec::new(),
        keywords: Vec::new(),
        open_graph: defaults.open_graph(canonical_url.clone(), title, description),
        social: defaults.social(title, description),
        canonical_url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CardType;
    use crate::content::fixtures::sample_record;
    use crate::content::{Author, LookupError, MemoryLookup};
    use crate::seo::og::OgType;
    use crate::utils::date::DateTimeUtc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn hello_record() -> ContentRecord {
        ContentRecord {
            title: "Hello".into(),
            excerpt: "Intro".into(),
            cover_image: None,
            published_at: DateTimeUtc::from_ymd(2024, 1, 15),
            updated_at: None,
            author: Author {
                name: "X".into(),
                url: None,
                social_handle: Some("x".into()),
            },
            tags: vec!["a".into(), "b".into()],
        }
    }

    /// Lookup that counts calls and can be told to fail.
    struct CountingLookup {
        inner: MemoryLookup,
        calls: AtomicUsize,
        fail: bool,
    }

    impl CountingLookup {
        fn new(inner: MemoryLookup) -> Self {
            Self {
                inner,
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }
    }

    impl ContentLookup for CountingLookup {
        type Error = LookupError;

        async fn fetch(&self, slug: &str) -> Result<Option<ContentRecord>, Self::Error> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(LookupError::InvalidSlug(slug.to_string()));
            }
            Ok(self.inner.fetch(slug).await.unwrap_or_default())
        }
    }

    mod record {
        use super::*;

        #[tokio::test]
        async fn hello_world_example() {
            let config = SeoConfig::default();
            let lookup = MemoryLookup::new().with("hello-world", hello_record());
            let bundle = Resolver::new(&config, lookup)
                .resolve("hello-world")
                .await
                .unwrap();

            assert_eq!(bundle.keywords, vec!["a", "b"]);
            assert_eq!(bundle.social.creator_handle, "@x");
            assert_eq!(bundle.title, "Hello");
            assert_eq!(bundle.description, "Intro");
            assert!(bundle.canonical_url.ends_with("/hello-world"));
        }

        #[test]
        fn full_record_mapping() {
            let config = SeoConfig::default();
            let record = sample_record();
            let bundle = from_record(&config, "example", &record);

            assert_eq!(bundle.description, record.excerpt);
            assert_eq!(bundle.canonical_url, "https://example.com/blog/example");
            assert_eq!(
                bundle.authors,
                vec![AuthorLink {
                    name: "John Doe".into(),
                    url: Some("https://example.com/author/john-doe".into()),
                }]
            );
            assert_eq!(bundle.keywords, record.tags);

            let og = &bundle.open_graph;
            assert_eq!(og.og_type, OgType::Article);
            assert_eq!(og.url, bundle.canonical_url);
            assert_eq!(og.site_name, "My Blog");
            assert_eq!(og.locale, "en_US");
            assert_eq!(og.authors, vec!["John Doe"]);
            assert_eq!(og.tags, record.tags);
            assert_eq!(og.published_time.as_deref(), Some("2024-01-15T00:00:00.000Z"));
            assert_eq!(og.modified_time.as_deref(), Some("2024-01-20T00:00:00.000Z"));

            let image = og.image.as_ref().unwrap();
            assert_eq!(image.url, "https://example.com/images/blog-cover.jpg");
            assert_eq!((image.width, image.height), (1200, 630));
            assert_eq!(image.alt, record.title);

            let social = &bundle.social;
            assert_eq!(social.card_type, CardType::SummaryLargeImage);
            assert_eq!(social.site_handle, "@yourblog");
            assert_eq!(social.creator_handle, "@johndoe");
            assert_eq!(social.image.as_deref(), Some(image.url.as_str()));
            assert_eq!(social.title, record.title);
        }

        #[test]
        fn modified_time_defaults_to_published() {
            let bundle = from_record(&SeoConfig::default(), "hello", &hello_record());
            assert_eq!(
                bundle.open_graph.modified_time,
                bundle.open_graph.published_time
            );
        }

        #[test]
        fn cover_image_falls_back_to_site_default() {
            let mut config = SeoConfig::default();
            let bundle = from_record(&config, "hello", &hello_record());
            assert!(bundle.open_graph.image.is_none());
            assert!(bundle.social.image.is_none());

            config.image.default_url = Some("https://example.com/og-image.jpg".into());
            let bundle = from_record(&config, "hello", &hello_record());
            let image = bundle.open_graph.image.unwrap();
            assert_eq!(image.url, "https://example.com/og-image.jpg");
            assert_eq!(image.alt, "Site image");
        }

        #[test]
        fn creator_handle_fallbacks() {
            let config = SeoConfig::default();
            let mut record = hello_record();

            record.author.social_handle = Some("@x".into());
            let bundle = from_record(&config, "s", &record);
            assert_eq!(bundle.social.creator_handle, "@x");

            record.author.social_handle = None;
            let bundle = from_record(&config, "s", &record);
            assert_eq!(bundle.social.creator_handle, "@yourblog");

            record.author.social_handle = Some("@".into());
            let bundle = from_record(&config, "s", &record);
            assert_eq!(bundle.social.creator_handle, "@yourblog");
        }

        #[test]
        fn single_author_yields_one_entry() {
            let bundle = from_record(&SeoConfig::default(), "s", &hello_record());
            assert_eq!(bundle.authors.len(), 1);
            assert_eq!(bundle.open_graph.authors.len(), 1);
            assert_eq!(bundle.open_graph.authors[0], bundle.authors[0].name);
        }

        #[test]
        fn canonical_url_for_various_slugs() {
            let mut config = SeoConfig::default();
            config.site.url = "https://example.com/".into();
            for slug in ["a", "hello-world", "2024/recap", "ünïcode"] {
                let bundle = from_record(&config, slug, &hello_record());
                assert_eq!(bundle.canonical_url, format!("https://example.com/{slug}"));
                assert!(bundle.canonical_url.ends_with(&format!("/{slug}")));
            }
        }
    }

    mod absent {
        use super::*;

        #[tokio::test]
        async fn missing_slug_yields_not_found() {
            let config = SeoConfig::default();
            let resolver = Resolver::new(&config, MemoryLookup::new());
            let bundle = resolver.resolve("missing").await.unwrap();

            assert_eq!(bundle.title, "Post Not Found");
            assert_eq!(
                bundle.description,
                "The requested blog post could not be found."
            );
            assert!(bundle.open_graph.image.is_none());
            assert!(bundle.social.image.is_none());
        }

        #[tokio::test]
        async fn not_found_is_independent_of_slug() {
            let mut config = SeoConfig::default();
            config.image.default_url = Some("https://example.com/og-image.jpg".into());
            let resolver = Resolver::new(&config, MemoryLookup::new());

            let first = resolver.resolve("missing").await.unwrap();
            for slug in ["other", "", "a/b", "../x"] {
                assert_eq!(resolver.resolve(slug).await.unwrap(), first);
            }
            assert_eq!(first, not_found(&config));
            assert!(first.open_graph.image.is_none());
        }

        #[test]
        fn not_found_uses_site_defaults() {
            let bundle = not_found(&SeoConfig::default());
            assert_eq!(bundle.canonical_url, "https://example.com/blog");
            assert_eq!(bundle.open_graph.og_type, OgType::Website);
            assert!(bundle.authors.is_empty());
            assert!(bundle.keywords.is_empty());
            assert!(bundle.open_graph.published_time.is_none());
            assert_eq!(bundle.social.creator_handle, "@yourblog");
        }
    }

    mod lookup {
        use super::*;

        #[tokio::test]
        async fn failure_propagates_unchanged() {
            let config = SeoConfig::default();
            let mut lookup = CountingLookup::new(MemoryLookup::new());
            lookup.fail = true;
            let resolver = Resolver::new(&config, &lookup);

            let err = resolver.resolve("boom").await.unwrap_err();
            assert!(matches!(err, LookupError::InvalidSlug(ref s) if s == "boom"));
            assert_eq!(lookup.calls.load(Ordering::SeqCst), 1);
        }

        #[tokio::test]
        async fn one_fetch_per_resolution() {
            let config = SeoConfig::default();
            let lookup = CountingLookup::new(MemoryLookup::new().with("a", hello_record()));
            let resolver = Resolver::new(&config, &lookup);

            resolver.resolve("a").await.unwrap();
            resolver.resolve("missing").await.unwrap();
            assert_eq!(lookup.calls.load(Ordering::SeqCst), 2);
        }

        #[tokio::test]
        async fn resolution_is_idempotent() {
            let config = SeoConfig::default();
            let resolver =
                Resolver::new(&config, MemoryLookup::new().with("example", sample_record()));

            let first = resolver.resolve("example").await.unwrap();
            let second = resolver.resolve("example").await.unwrap();
            assert_eq!(first, second);
            assert_eq!(
                serde_json::to_string(&first).unwrap(),
                serde_json::to_string(&second).unwrap()
            );
        }
    }
}
