//! Command-line interface.
//!
//! | Command   | Purpose                                          |
//! |-----------|--------------------------------------------------|
//! | `resolve` | Slug → metadata bundle as JSON                   |
//! | `head`    | Slug → head tags, optionally spliced into a page |
//! | `check`   | Validate `seo.toml`                              |

pub mod args;
pub mod check;
pub mod head;
pub mod resolve;

pub use args::{Cli, Commands};

use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use seometa::log;

/// Write command output to a file, or stdout when no path is given.
pub(crate) fn write_output(module: &str, content: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            let mut file = fs::File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            file.write_all(content.as_bytes())?;
            log!(module; "wrote output to {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(content.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
