//! Metadata bundle → `<head>` tags.
//!
//! A fixed, literal mapping: the bundle supplies the page values, `[site]`
//! and `[head]` supply the site-wide ones. Meta tags with empty content are
//! dropped; the `<title>` is always emitted.
//!
//! Emitted groups, in order: primary (title, description, keywords, author),
//! site extras (robots, theme colors, ...), links (canonical, alternates,
//! icons, manifest), verification, Open Graph, Twitter.

use std::fmt;

use crate::config::SeoConfig;
use crate::utils::html::{escape, escape_attr};

use super::bundle::MetadataBundle;
use super::og::OgType;

/// Which attribute carries the key of a `<meta>` tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="…">`
    Name,
    /// `<meta property="…">` (Open Graph)
    Property,
}

impl MetaKey {
    const fn attr(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Property => "property",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetaTag {
    pub key: MetaKey,
    pub name: String,
    pub content: String,
    pub media: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkTag {
    pub rel: String,
    pub href: String,
    pub hreflang: Option<String>,
    pub sizes: Option<String>,
    pub mime: Option<String>,
}

/// One element of the rendered head.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadTag {
    Title(String),
    Meta(MetaTag),
    Link(LinkTag),
}

impl HeadTag {
    /// Key of a meta tag (`og:title`, `description`, ...).
    pub fn meta_name(&self) -> Option<&str> {
        match self {
            Self::Meta(meta) => Some(&meta.name),
            _ => None,
        }
    }
}

impl fmt::Display for HeadTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Title(title) => write!(f, "<title>{}</title>", escape(title)),
            Self::Meta(meta) => {
                write!(f, "<meta {}=\"{}\"", meta.key.attr(), escape_attr(&meta.name))?;
                if let Some(media) = &meta.media {
                    write!(f, " media=\"{}\"", escape_attr(media))?;
                }
                write!(f, " content=\"{}\"/>", escape_attr(&meta.content))
            }
            Self::Link(link) => {
                write!(f, "<link rel=\"{}\"", escape_attr(&link.rel))?;
                if let Some(hreflang) = &link.hreflang {
                    write!(f, " hreflang=\"{}\"", escape_attr(hreflang))?;
                }
                write!(f, " href=\"{}\"", escape_attr(&link.href))?;
                if let Some(sizes) = &link.sizes {
                    write!(f, " sizes=\"{}\"", escape_attr(sizes))?;
                }
                if let Some(mime) = &link.mime {
                    write!(f, " type=\"{}\"", escape_attr(mime))?;
                }
                write!(f, "/>")
            }
        }
    }
}

/// Render all head tags for `bundle`.
pub fn render_head(bundle: &MetadataBundle, config: &SeoConfig) -> Vec<HeadTag> {
    let mut head = HeadBuilder::default();
    head.primary(bundle, config);
    head.site_extras(config);
    head.links(bundle, config);
    head.verification(config);
    head.open_graph(bundle);
    head.twitter(bundle);
    head.tags
}

/// Render head tags as HTML, one tag per line.
pub fn to_html(tags: &[HeadTag]) -> String {
    tags.iter().map(|tag| format!("{tag}\n")).collect()
}

#[derive(Default)]
struct HeadBuilder {
    tags: Vec<HeadTag>,
}

impl HeadBuilder {
    fn push_meta(&mut self, key: MetaKey, name: &str, content: &str, media: Option<&str>) {
        if content.is_empty() {
            return;
        }
        self.tags.push(HeadTag::Meta(MetaTag {
            key,
            name: name.to_string(),
            content: content.to_string(),
            media: media.map(str::to_string),
        }));
    }

    fn name(&mut self, name: &str, content: &str) {
        self.push_meta(MetaKey::Name, name, content, None);
    }

    fn property(&mut self, name: &str, content: &str) {
        self.push_meta(MetaKey::Property, name, content, None);
    }

    fn optional_name(&mut self, name: &str, content: Option<&String>) {
        if let Some(content) = content {
            self.name(name, content);
        }
    }

    fn link(&mut self, link: LinkTag) {
        if !link.href.is_empty() {
            self.tags.push(HeadTag::Link(link));
        }
    }

    fn primary(&mut self, bundle: &MetadataBundle, config: &SeoConfig) {
        self.tags
            .push(HeadTag::Title(config.site.format_title(&bundle.title)));
        self.name("title", &bundle.title);
        self.name("description", &bundle.description);
        if !bundle.keywords.is_empty() {
            self.name("keywords", &bundle.keywords.join(", "));
        }
        for author in &bundle.authors {
            self.name("author", &author.name);
        }
        for author in &bundle.authors {
            if let Some(url) = &author.url {
                self.link(LinkTag {
                    rel: "author".into(),
                    href: url.clone(),
                    ..Default::default()
                });
            }
        }
    }

    fn site_extras(&mut self, config: &SeoConfig) {
        let head = &config.head;
        self.optional_name("application-name", head.application_name.as_ref());
        self.optional_name("generator", head.generator.as_ref());
        self.optional_name("referrer", head.referrer.as_ref());
        for theme in &head.theme_colors {
            self.push_meta(MetaKey::Name, "theme-color", &theme.color, theme.media.as_deref());
        }
        self.optional_name("color-scheme", head.color_scheme.as_ref());
        self.optional_name("creator", head.creator.as_ref());
        self.optional_name("publisher", head.publisher.as_ref());
        if let Some(robots) = &head.robots {
            self.name("robots", &robots.content());
            if let Some(googlebot) = robots.googlebot_content() {
                self.name("googlebot", &googlebot);
            }
        }
        self.optional_name("category", head.category.as_ref());
    }

    fn links(&mut self, bundle: &MetadataBundle, config: &SeoConfig) {
        self.link(LinkTag {
            rel: "canonical".into(),
            href: bundle.canonical_url.clone(),
            ..Default::default()
        });
        for (lang, href) in &config.head.alternates {
            self.link(LinkTag {
                rel: "alternate".into(),
                href: href.clone(),
                hreflang: Some(lang.clone()),
                ..Default::default()
            });
        }
        for icon in &config.head.icons {
            self.link(LinkTag {
                rel: icon.rel.clone(),
                href: icon.url.clone(),
                sizes: icon.sizes.clone(),
                mime: icon.mime.clone(),
                ..Default::default()
            });
        }
        if let Some(manifest) = &config.head.manifest {
            self.link(LinkTag {
                rel: "manifest".into(),
                href: manifest.clone(),
                ..Default::default()
            });
        }
    }

    fn verification(&mut self, config: &SeoConfig) {
        let verification = &config.head.verification;
        self.optional_name("google-site-verification", verification.google.as_ref());
        self.optional_name("yandex-verification", verification.yandex.as_ref());
        for (name, code) in &verification.other {
            self.name(name, code);
        }
    }

    fn open_graph(&mut self, bundle: &MetadataBundle) {
        let og = &bundle.open_graph;
        self.property("og:title", &og.title);
        self.property("og:description", &og.description);
        self.property("og:url", &og.url);
        self.property("og:site_name", &og.site_name);
        self.property("og:locale", &og.locale);
        if let Some(image) = &og.image {
            self.property("og:image", &image.url);
            self.property("og:image:width", &image.width.to_string());
            self.property("og:image:height", &image.height.to_string());
            self.property("og:image:alt", &image.alt);
        }
        self.property("og:type", og.og_type.as_str());

        if og.og_type == OgType::Article {
            if let Some(time) = &og.published_time {
                self.property("article:published_time", time);
            }
            if let Some(time) = &og.modified_time {
                self.property("article:modified_time", time);
            }
            for author in &og.authors {
                self.property("article:author", author);
            }
            for tag in &og.tags {
                self.property("article:tag", tag);
            }
        }
    }

    fn twitter(&mut self, bundle: &MetadataBundle) {
        let social = &bundle.social;
        self.name("twitter:card", social.card_type.as_str());
        self.name("twitter:site", &social.site_handle);
        self.name("twitter:creator", &social.creator_handle);
        self.name("twitter:title", &social.title);
        self.name("twitter:description", &social.description);
        self.name("twitter:url", &bundle.open_graph.url);
        if let Some(image) = &social.image {
            self.name("twitter:image", image);
            if let Some(og_image) = &bundle.open_graph.image {
                self.name("twitter:image:alt", &og_image.alt);
            }
        }
    }
}
