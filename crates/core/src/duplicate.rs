//! Recognise "object already exists" failures from their error text.
//!
//! Seed scripts are re-run against databases that already contain part of
//! the data, so these failures are expected and reported as ignored.

/// Lowercase phrases that mark a duplicate-object failure.
pub const DUPLICATE_PHRASES: [&str; 3] = [
    "already exists",
    "duplicate",
    "violates unique constraint",
];

/// Returns `true` if `message` describes a duplicate-object failure.
///
/// Matching is case-insensitive.
pub fn is_duplicate_message(message: &str) -> bool {
    let message = message.to_lowercase();
    DUPLICATE_PHRASES
        .iter()
        .any(|phrase| message.contains(phrase))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relation_already_exists() {
        assert!(is_duplicate_message(r#"relation "students" already exists"#));
    }

    #[test]
    fn duplicate_key_value() {
        assert!(is_duplicate_message(
            r#"duplicate key value violates unique constraint "users_email_key""#
        ));
    }

    #[test]
    fn unique_constraint_without_duplicate_word() {
        assert!(is_duplicate_message(
            "insert or update violates unique constraint \"uq_group_code\""
        ));
    }

    #[test]
    fn case_insensitive() {
        assert!(is_duplicate_message("ERROR: Type \"role\" ALREADY EXISTS"));
        assert!(is_duplicate_message("Duplicate column name"));
    }

    #[test]
    fn other_errors_are_not_duplicates() {
        assert!(!is_duplicate_message(r#"relation "missing" does not exist"#));
        assert!(!is_duplicate_message("syntax error at or near \"SELEC\""));
        assert!(!is_duplicate_message(""));
    }
}
