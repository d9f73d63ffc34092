use std::path::PathBuf;

/// Default location of the env file holding the `DB_*` settings.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Default seed script, relative to the working directory.
pub const DEFAULT_SQL_FILE: &str = "pensamientoComputacional/src/main/resources/data-extended.sql";

/// Where the runner reads its inputs from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub env_file: PathBuf,
    pub sql_file: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            env_file: DEFAULT_ENV_FILE.into(),
            sql_file: DEFAULT_SQL_FILE.into(),
        }
    }
}

impl RunnerConfig {
    /// Load paths from the process environment, falling back to defaults.
    ///
    /// | Env Var            | Default                                                         |
    /// |--------------------|-----------------------------------------------------------------|
    /// | `SEEDRUN_ENV_FILE` | `.env`                                                          |
    /// | `SEEDRUN_SQL_FILE` | `pensamientoComputacional/src/main/resources/data-extended.sql` |
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`RunnerConfig::from_env`] with an injectable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let path = |key: &str, default: &str| -> PathBuf {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
                .into()
        };

        Self {
            env_file: path("SEEDRUN_ENV_FILE", DEFAULT_ENV_FILE),
            sql_file: path("SEEDRUN_SQL_FILE", DEFAULT_SQL_FILE),
        }
    }

    /// `RUST_LOG` directives set in the env file, if any.
    ///
    /// Only this key is read; nothing from the env file is exported into
    /// the process environment.
    pub fn env_file_log_filter(&self) -> Option<String> {
        dotenvy::from_path_iter(&self.env_file)
            .ok()?
            .filter_map(Result::ok)
            .find(|(key, _)| key == "RUST_LOG")
            .map(|(_, value)| value)
            .filter(|value| !value.trim().is_empty())
    }
}
