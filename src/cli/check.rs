//! `seometa check`: validate `seo.toml`.
//!
//! Loading already rejects invalid configuration, so reaching `run` means
//! the file is valid; this reports what will be used.

use anyhow::Result;
use seometa::config::SeoConfig;
use seometa::log;

pub fn run(config: &SeoConfig) -> Result<()> {
    let source = if config.config_path.as_os_str().is_empty() {
        "defaults".to_string()
    } else {
        config.config_path.display().to_string()
    };
    log!("check"; "config is valid ({})", source);
    log!("check"; "canonical base: {}", config.site.base_url());

    let content_dir = config.content_dir();
    if !content_dir.is_dir() {
        log!("warning"; "content directory {} does not exist", content_dir.display());
    }

    Ok(())
}
