//! PostgreSQL plumbing for the seed runner.
//!
//! A single connection is opened per run (no pool) and statements execute
//! outside any explicit transaction, so each one commits on its own.

pub mod executor;

use seedrun_core::settings::DbSettings;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use sqlx::{Connection, PgConnection};

pub use executor::{
    execute_script, is_duplicate_error, RunSummary, StatementExecutor, StatementOutcome,
};

/// Reported to the server as `application_name`.
pub const APPLICATION_NAME: &str = "seedrun";

/// Connection options for `settings`. TLS is mandatory.
pub fn connect_options(settings: &DbSettings) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(&settings.host)
        .port(settings.port)
        .database(&settings.database)
        .username(&settings.user)
        .password(&settings.password)
        .ssl_mode(PgSslMode::Require)
        .application_name(APPLICATION_NAME)
}

/// Open a single connection to the database described by `settings`.
pub async fn connect(settings: &DbSettings) -> Result<PgConnection, sqlx::Error> {
    PgConnection::connect_with(&connect_options(settings)).await
}

/// Close the connection, sending the terminate message to the server.
pub async fn close(conn: PgConnection) -> Result<(), sqlx::Error> {
    conn.close().await
}
