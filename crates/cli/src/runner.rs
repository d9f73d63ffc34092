//! The seed procedure: validate inputs, connect once, run every statement.

use seedrun_core::env_file::load_env_file;
use seedrun_core::settings::DbSettings;
use seedrun_core::sql_split::{preview, split_script};
use seedrun_db::executor::PREVIEW_CHARS;
use seedrun_db::{execute_script, RunSummary};

use crate::config::RunnerConfig;
use crate::error::RunError;

/// Run the seed script described by `config`.
///
/// Every precondition (env file, SQL file, `DB_*` settings) is checked
/// before the connection is opened. Once connected, statement failures are
/// only reflected in the returned [`RunSummary`].
pub async fn run(config: &RunnerConfig) -> Result<RunSummary, RunError> {
    let vars = load_env_file(&config.env_file);
    if vars.is_empty() {
        return Err(RunError::EnvFileMissing {
            path: config.env_file.clone(),
        });
    }
    tracing::debug!(path = %config.env_file.display(), keys = vars.len(), "Env file loaded");

    if !config.sql_file.is_file() {
        return Err(RunError::SqlFileMissing {
            path: config.sql_file.clone(),
        });
    }

    let settings = DbSettings::from_env_map(&vars)?;

    // File access is blocking throughout; the run is strictly sequential.
    let sql = std::fs::read_to_string(&config.sql_file).map_err(|source| RunError::ReadSql {
        path: config.sql_file.clone(),
        source,
    })?;

    let script = split_script(&sql);
    if let Some(tail) = &script.unterminated {
        tracing::warn!(
            sql = %preview(tail, PREVIEW_CHARS),
            "Trailing text has no terminating ';' and will not be executed",
        );
    }

    tracing::info!(
        endpoint = %settings.endpoint(),
        user = %settings.user,
        "Connecting to database",
    );

    let mut conn = seedrun_db::connect(&settings)
        .await
        .map_err(|source| RunError::Connect {
            endpoint: settings.endpoint(),
            source,
        })?;

    tracing::info!(
        path = %config.sql_file.display(),
        statements = script.statements.len(),
        "Executing SQL script",
    );

    let summary = execute_script(&mut conn, &script.statements).await;

    if let Err(e) = seedrun_db::close(conn).await {
        tracing::warn!(error = %e, "Connection did not close cleanly");
    }

    Ok(summary)
}
