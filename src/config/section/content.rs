//! `[content]` configuration: where the CLI looks up content records.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Directory of `<slug>.toml` / `<slug>.json` records, relative to the
    /// config file.
    pub dir: PathBuf,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            dir: "content".into(),
        }
    }
}
