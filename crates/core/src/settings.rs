//! Database connection settings read from the env file.
//!
//! | Key           | Required | Default |
//! |---------------|----------|---------|
//! | `DB_HOST`     | yes      | --      |
//! | `DB_PORT`     | no       | `5432`  |
//! | `DB_NAME`     | yes      | --      |
//! | `DB_USER`     | yes      | --      |
//! | `DB_PASSWORD` | yes      | --      |

use std::fmt;

use crate::env_file::EnvMap;
use crate::error::CoreError;

pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";

/// Keys that must be present (and non-empty) before connecting.
pub const REQUIRED_KEYS: [&str; 4] = [DB_HOST, DB_NAME, DB_USER, DB_PASSWORD];

pub const DEFAULT_PORT: u16 = 5432;

/// Validated connection parameters.
#[derive(Clone, PartialEq, Eq)]
pub struct DbSettings {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub user: String,
    pub password: String,
}

impl DbSettings {
    /// Build settings from a loaded env map.
    ///
    /// Every missing required key is reported at once. An empty value
    /// counts as missing.
    pub fn from_env_map(vars: &EnvMap) -> Result<Self, CoreError> {
        let lookup = |key: &str| vars.get(key).map(String::as_str).filter(|v| !v.is_empty());

        let missing: Vec<&'static str> = REQUIRED_KEYS
            .into_iter()
            .filter(|key| lookup(*key).is_none())
            .collect();
        if !missing.is_empty() {
            return Err(CoreError::MissingSettings { keys: missing });
        }

        let port = match lookup(DB_PORT) {
            None => DEFAULT_PORT,
            Some(raw) => raw.parse().map_err(|_| CoreError::InvalidSetting {
                key: DB_PORT,
                reason: format!("'{raw}' is not a valid port number"),
            })?,
        };

        // Presence was checked above.
        let take = |key: &str| lookup(key).unwrap_or_default().to_string();

        Ok(Self {
            host: take(DB_HOST),
            port,
            database: take(DB_NAME),
            user: take(DB_USER),
            password: take(DB_PASSWORD),
        })
    }

    /// `host:port/database`, for log lines.
    pub fn endpoint(&self) -> String {
        format!("{}:{}/{}", self.host, self.port, self.database)
    }
}

impl fmt::Debug for DbSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DbSettings")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database", &self.database)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .finish()
    }
}
