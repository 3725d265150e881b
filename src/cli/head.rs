//! `seometa head`: print head tags for a slug, or splice them into a page.

use std::path::Path;

use anyhow::{Context, Result};
use seometa::config::SeoConfig;
use seometa::seo::{HeadFragment, HtmlPage, apply};

use super::resolve::resolve_bundle;

pub async fn run(
    config: &SeoConfig,
    slug: &str,
    template: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    let bundle = resolve_bundle(config, slug).await?;

    let html = match template {
        Some(path) => {
            let page = tokio::fs::read_to_string(path)
                .await
                .with_context(|| format!("failed to read template {}", path.display()))?;
            let mut page = HtmlPage::new(page);
            apply(&bundle, config, &mut page);
            page.render()
                .with_context(|| format!("cannot apply metadata to {}", path.display()))?
        }
        None => {
            let mut fragment = HeadFragment::new();
            apply(&bundle, config, &mut fragment);
            fragment.to_html()
        }
    };

    super::write_output("head", &html, output)
}
