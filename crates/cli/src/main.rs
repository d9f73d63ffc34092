//! `seedrun` -- load a SQL seed script into a remote PostgreSQL database.
//!
//! Connection settings come from `DB_*` keys in the env file; statements are
//! executed one by one and "already exists" failures are ignored so the
//! script can be re-run safely.
//!
//! # Environment variables
//!
//! | Variable           | Required | Default                                                         | Description                                     |
//! |--------------------|----------|-----------------------------------------------------------------|-------------------------------------------------|
//! | `SEEDRUN_ENV_FILE` | no       | `.env`                                                          | File holding the `DB_*` keys                    |
//! | `SEEDRUN_SQL_FILE` | no       | `pensamientoComputacional/src/main/resources/data-extended.sql` | Script to execute                               |
//! | `RUST_LOG`         | no       | `seedrun=info`                                                  | Log filter; else `RUST_LOG` from the env file   |

use seedrun_cli::RunnerConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_LOG_FILTER: &str = "seedrun=info,seedrun_cli=info,seedrun_db=info,seedrun_core=info";

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let config = RunnerConfig::from_env();

    let filter = EnvFilter::try_from_default_env()
        .ok()
        .or_else(|| {
            config
                .env_file_log_filter()
                .and_then(|directives| EnvFilter::try_new(directives).ok())
        })
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        env_file = %config.env_file.display(),
        sql_file = %config.sql_file.display(),
        "Loading seed data",
    );

    match seedrun_cli::run(&config).await {
        Ok(summary) => {
            tracing::info!(
                executed = summary.executed,
                ignored = summary.ignored,
                failed = summary.failed,
                total = summary.total,
                "Seed script finished",
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Seed run aborted");
            std::process::exit(e.exit_code());
        }
    }
}
