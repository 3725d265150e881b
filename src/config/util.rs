//! Configuration utility functions.

use std::path::{Path, PathBuf};

use super::{ConfigDiagnostics, FieldPath};

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/site/content/posts/  ← cwd
/// /home/user/site/seo.toml        ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting from `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.exists() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

/// Check that `value` is an absolute http(s) URL with a host.
///
/// Uses the `url` crate for strict validation. Returns `true` when valid.
pub fn check_http_url(diag: &mut ConfigDiagnostics, field: FieldPath, value: &str) -> bool {
    const HINT: &str = "use format like https://example.com";

    match url::Url::parse(value) {
        Ok(parsed) => {
            if !matches!(parsed.scheme(), "http" | "https") {
                diag.error_with_hint(
                    field,
                    format!(
                        "scheme '{}' not supported, must be http or https",
                        parsed.scheme()
                    ),
                    HINT,
                );
                return false;
            }
            if parsed.host_str().is_none() {
                diag.error_with_hint(field, "URL must have a valid host", HINT);
                return false;
            }
            true
        }
        Err(e) => {
            diag.error_with_hint(field, format!("invalid URL `{value}`: {e}"), HINT);
            false
        }
    }
}

// ============================================================================
// tests
// ============================================================================
