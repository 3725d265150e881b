//! Applying a bundle to a presentation layer.
//!
//! This is the only place where metadata has side effects: setting the
//! document title and adding head tags. Resolution never calls into it.

use thiserror::Error;

use crate::config::SeoConfig;
use crate::utils::html::{escape, find_ci};

use super::bundle::MetadataBundle;
use super::head::{HeadTag, render_head};

/// A target that can receive a document title and head tags.
pub trait Presentation {
    /// Set the document title (already templated).
    fn set_title(&mut self, title: &str);

    /// Add one non-title head tag.
    fn push_head(&mut self, tag: &HeadTag);
}

/// Render `bundle` and apply it to `target`.
pub fn apply<P: Presentation + ?Sized>(bundle: &MetadataBundle, config: &SeoConfig, target: &mut P) {
    for tag in render_head(bundle, config) {
        match &tag {
            HeadTag::Title(title) => target.set_title(title),
            _ => target.push_head(&tag),
        }
    }
}

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("template has no `</head>` to insert metadata before")]
    MissingHead,
}

// ============================================================================
// HeadFragment
// ============================================================================

/// Collects a standalone head fragment.
#[derive(Debug, Clone, Default)]
pub struct HeadFragment {
    title: Option<String>,
    lines: Vec<String>,
}

impl HeadFragment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The fragment as HTML, `<title>` first, one tag per line.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        if let Some(title) = &self.title {
            html.push_str(&HeadTag::Title(title.clone()).to_string());
            html.push('\n');
        }
        for line in &self.lines {
            html.push_str(line);
            html.push('\n');
        }
        html
    }
}

impl Presentation for HeadFragment {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn push_head(&mut self, tag: &HeadTag) {
        self.lines.push(tag.to_string());
    }
}

// ============================================================================
// HtmlPage
// ============================================================================

/// Splices metadata into an existing HTML page.
///
/// An existing `<title>` has its text replaced; otherwise a new one is
/// added. Tags are inserted right before `</head>`.
#[derive(Debug, Clone)]
pub struct HtmlPage {
    html: String,
    title: Option<String>,
    tags: Vec<String>,
}

impl HtmlPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            title: None,
            tags: Vec::new(),
        }
    }

    /// Produce the final HTML.
    pub fn render(self) -> Result<String, ApplyError> {
        let mut html = self.html;
        let mut insert = String::new();

        if let Some(title) = &self.title {
            if !replace_title(&mut html, title) {
                insert.push_str(&HeadTag::Title(title.clone()).to_string());
                insert.push('\n');
            }
        }
        for tag in &self.tags {
            insert.push_str(tag);
            insert.push('\n');
        }

        let close = find_ci(&html, "</head>", 0).ok_or(ApplyError::MissingHead)?;
        html.insert_str(close, &insert);
        Ok(html)
    }
}

/// Replace the text of the first `<title>` element inside `<head>`.
///
/// Returns `false` if the head has none; `<title>`s in the body (inline
/// SVG) are left alone.
fn replace_title(html: &mut String, title: &str) -> bool {
    let Some(head_close) = find_ci(html, "</head>", 0) else {
        return false;
    };
    let head = &html[..head_close];

    let mut from = 0;
    let open_end = loop {
        let Some(open) = find_ci(head, "<title", from) else {
            return false;
        };
        let after = open + "<title".len();
        match head.as_bytes().get(after) {
            Some(b'>') => break after + 1,
            Some(b) if b.is_ascii_whitespace() => match head[after..].find('>') {
                Some(i) => break after + i + 1,
                None => return false,
            },
            _ => from = after,
        }
    };
    let Some(close) = find_ci(head, "</title>", open_end) else {
        return false;
    };

    html.replace_range(open_end..close, &escape(title));
    true
}

impl Presentation for HtmlPage {
    fn set_title(&mut self, title: &str) {
        self.title = Some(title.to_string());
    }

    fn push_head(&mut self, tag: &HeadTag) {
        self.tags.push(tag.to_string());
    }
}
