use std::path::PathBuf;

use seedrun_core::error::CoreError;

/// Fatal conditions that stop the runner before or while connecting.
///
/// Per-statement failures are not represented here; they are logged and
/// counted by the executor.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(
        "No settings could be loaded from {}; create it with DB_HOST, DB_NAME, DB_USER and DB_PASSWORD",
        .path.display()
    )]
    EnvFileMissing { path: PathBuf },

    #[error("SQL file not found: {} (set SEEDRUN_SQL_FILE to override)", .path.display())]
    SqlFileMissing { path: PathBuf },

    /// Required `DB_*` keys missing or malformed.
    #[error("{0}; required keys are DB_HOST, DB_NAME, DB_USER, DB_PASSWORD")]
    Settings(#[from] CoreError),

    #[error("Failed to read SQL file {}: {source}", .path.display())]
    ReadSql {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to connect to {endpoint}: {source}")]
    Connect {
        endpoint: String,
        #[source]
        source: sqlx::Error,
    },
}

impl RunError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
