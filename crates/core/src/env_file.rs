//! `KEY=VALUE` env-file loader.
//!
//! Only the subset of dotenv syntax the runner needs: one assignment per
//! line, `#` comment lines, no quoting or interpolation. Values are kept
//! verbatim after trimming.

use std::collections::HashMap;
use std::io::ErrorKind;
use std::path::Path;

/// Key/value pairs read from an env file.
pub type EnvMap = HashMap<String, String>;

const COMMENT_MARKER: char = '#';
const SEPARATOR: char = '=';

/// Load the env file at `path`.
///
/// A missing file is a normal condition and yields an empty map. Any other
/// read failure is logged and also yields an empty map; the caller decides
/// whether an empty configuration is fatal.
pub fn load_env_file(path: &Path) -> EnvMap {
    match std::fs::read_to_string(path) {
        Ok(text) => parse_env(&text),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "Env file not found");
            EnvMap::new()
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Could not read env file");
            EnvMap::new()
        }
    }
}

/// Parse env-file text into a map. Later assignments override earlier ones.
pub fn parse_env(text: &str) -> EnvMap {
    let mut vars = EnvMap::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with(COMMENT_MARKER) {
            continue;
        }

        let Some((key, value)) = line.split_once(SEPARATOR) else {
            continue;
        };

        let key = key.trim();
        if key.is_empty() {
            continue;
        }

        vars.insert(key.to_string(), value.trim().to_string());
    }

    vars
}
