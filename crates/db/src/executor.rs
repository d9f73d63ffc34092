//! Sequential statement execution with duplicate tolerance.
//!
//! [`execute_script`] runs every statement in order against a
//! [`StatementExecutor`]. A failure never stops the batch: duplicate-object
//! failures are counted as ignored, anything else is logged and counted as
//! failed.

use std::future::Future;

use seedrun_core::duplicate::is_duplicate_message;
use seedrun_core::sql_split::preview;
use sqlx::PgConnection;

/// Characters of a failing statement shown in the error log.
pub const PREVIEW_CHARS: usize = 100;

/// SQLSTATE codes for duplicate-object conditions.
///
/// `23505` unique_violation plus the class 42 duplicates: `42701` column,
/// `42P03` cursor, `42P04` database, `42P05` prepared statement, `42P06`
/// schema, `42P07` table, `42712` alias, `42710` object, `42723` function.
pub const DUPLICATE_SQLSTATES: [&str; 10] = [
    "23505", "42701", "42P03", "42P04", "42P05", "42P06", "42P07", "42712", "42710", "42723",
];

/// Something that can run one SQL statement.
///
/// Implemented for [`PgConnection`]; tests substitute scripted executors.
pub trait StatementExecutor: Send {
    /// Execute `sql` and discard any rows it returns.
    fn execute_statement<'a>(
        &'a mut self,
        sql: &'a str,
    ) -> impl Future<Output = Result<(), sqlx::Error>> + Send + 'a;
}

impl StatementExecutor for PgConnection {
    fn execute_statement<'a>(
        &'a mut self,
        sql: &'a str,
    ) -> impl Future<Output = Result<(), sqlx::Error>> + Send + 'a {
        // Simple query protocol: no parameters, no prepared statement cache.
        let fut = sqlx::Executor::execute(self, sqlx::raw_sql(sql));
        async move {
            fut.await?;
            Ok(())
        }
    }
}

/// Result of executing a single statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatementOutcome {
    Executed,
    /// The statement hit a duplicate-object error and was skipped.
    Ignored,
    Failed { message: String },
}

impl StatementOutcome {
    /// Classify the outcome of a failed execution.
    pub fn from_error(err: &sqlx::Error) -> Self {
        if is_duplicate_error(err) {
            Self::Ignored
        } else {
            Self::Failed {
                message: err.to_string(),
            }
        }
    }
}

/// Returns `true` if `err` reports that the object being created exists.
///
/// Checks the SQLSTATE first, then falls back to the message text.
pub fn is_duplicate_error(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        if let Some(code) = db_err.code() {
            let code: &str = &code;
            if DUPLICATE_SQLSTATES.contains(&code) {
                return true;
            }
        }
        if is_duplicate_message(db_err.message()) {
            return true;
        }
    }
    is_duplicate_message(&err.to_string())
}

/// Per-run tally of statement outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub executed: usize,
    pub ignored: usize,
    pub failed: usize,
}

impl RunSummary {
    pub fn record(&mut self, outcome: &StatementOutcome) {
        self.total += 1;
        match outcome {
            StatementOutcome::Executed => self.executed += 1,
            StatementOutcome::Ignored => self.ignored += 1,
            StatementOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

/// Execute `statements` in order, one at a time.
///
/// Never aborts and never retries. Per-statement failures only affect the
/// returned [`RunSummary`].
pub async fn execute_script<E>(executor: &mut E, statements: &[String]) -> RunSummary
where
    E: StatementExecutor,
{
    let total = statements.len();
    let mut summary = RunSummary::default();

    for (idx, statement) in statements.iter().enumerate() {
        let number = idx + 1;

        let outcome = match executor.execute_statement(statement).await {
            Ok(()) => StatementOutcome::Executed,
            Err(e) => StatementOutcome::from_error(&e),
        };

        match &outcome {
            StatementOutcome::Executed => {
                tracing::info!(statement = number, total, "Statement executed");
            }
            StatementOutcome::Ignored => {
                tracing::warn!(statement = number, total, "Statement already applied (ignored)");
            }
            StatementOutcome::Failed { message } => {
                tracing::error!(
                    statement = number,
                    total,
                    error = %message,
                    sql = %preview(statement, PREVIEW_CHARS),
                    "Statement failed",
                );
            }
        }

        summary.record(&outcome);
    }

    summary
}
