#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing database settings: {}", .keys.join(", "))]
    MissingSettings { keys: Vec<&'static str> },

    #[error("Invalid setting {key}: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}
