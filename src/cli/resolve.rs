//! `seometa resolve`: print the metadata bundle for a slug.

use std::path::Path;

use anyhow::{Context, Result};
use seometa::config::SeoConfig;
use seometa::content::DirLookup;
use seometa::debug;
use seometa::seo::{MetadataBundle, Resolver};

/// Resolve `slug` through the configured content directory.
pub async fn resolve_bundle(config: &SeoConfig, slug: &str) -> Result<MetadataBundle> {
    let lookup = DirLookup::new(config.content_dir());
    debug!("resolve"; "looking up `{}` in {}", slug, lookup.dir().display());

    Resolver::new(config, lookup)
        .resolve(slug)
        .await
        .with_context(|| format!("failed to look up content for `{slug}`"))
}

pub async fn run(config: &SeoConfig, slug: &str, pretty: bool, output: Option<&Path>) -> Result<()> {
    let bundle = resolve_bundle(config, slug).await?;

    let mut json = if pretty {
        serde_json::to_string_pretty(&bundle)?
    } else {
        serde_json::to_string(&bundle)?
    };
    json.push('\n');

    super::write_output("resolve", &json, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn site() -> (TempDir, SeoConfig) {
        let temp = TempDir::new().unwrap();
        let content = temp.path().join("content");
        std::fs::create_dir(&content).unwrap();
        std::fs::write(
            content.join("hello-world.json"),
            r#"{
                "title": "Hello",
                "excerpt": "Intro",
                "publishedAt": "2024-01-15",
                "author": {"name": "X", "socialHandle": "x"},
                "tags": ["a", "b"]
            }"#,
        )
        .unwrap();

        let config = SeoConfig {
            root: temp.path().to_path_buf(),
            ..Default::default()
        };
        (temp, config)
    }

    #[tokio::test]
    async fn test_resolve_bundle_from_content_dir() {
        let (_temp, config) = site();
        let bundle = resolve_bundle(&config, "hello-world").await.unwrap();
        assert_eq!(bundle.keywords, vec!["a", "b"]);
        assert_eq!(bundle.social.creator_handle, "@x");

        let missing = resolve_bundle(&config, "missing").await.unwrap();
        assert_eq!(missing.title, "Post Not Found");
    }

    #[tokio::test]
    async fn test_resolve_bundle_reports_lookup_failure() {
        let (_temp, config) = site();
        let err = resolve_bundle(&config, "../escape").await.unwrap_err();
        assert!(err.to_string().contains("failed to look up content"));
        assert!(err.root_cause().to_string().contains("not a valid content name"));
    }

    #[tokio::test]
    async fn test_run_writes_json() {
        let (temp, config) = site();
        let out = temp.path().join("bundle.json");
        run(&config, "hello-world", true, Some(out.as_path())).await.unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["canonicalUrl"], "https://example.com/blog/hello-world");
        assert_eq!(json["openGraph"]["type"], "article");
        assert_eq!(json["social"]["cardType"], "summary_large_image");
    }
}
