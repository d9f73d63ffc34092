//! Line-based SQL statement splitter.
//!
//! This is a textual heuristic, not a parser: a statement ends at the first
//! line whose trimmed form ends with `;`. Lines whose trimmed form starts
//! with `--` are dropped wherever they appear. Semicolons inside string
//! literals or in the middle of a line do not split anything.

const LINE_COMMENT: &str = "--";
const TERMINATOR: char = ';';

/// Result of splitting a script: the complete statements plus any trailing
/// text that never reached a terminator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SplitScript {
    pub statements: Vec<String>,
    /// Trimmed unterminated tail, `None` when the script ends cleanly.
    pub unterminated: Option<String>,
}

/// Split a script, keeping the unterminated tail for diagnostics.
pub fn split_script(sql: &str) -> SplitScript {
    let mut statements = Vec::new();
    let mut current = String::new();

    for line in sql.lines() {
        let trimmed = line.trim();
        if trimmed.starts_with(LINE_COMMENT) {
            continue;
        }

        current.push_str(line);
        current.push('\n');

        if trimmed.ends_with(TERMINATOR) {
            let statement = current.trim();
            if !statement.is_empty() {
                statements.push(statement.to_string());
            }
            current.clear();
        }
    }

    let tail = current.trim();
    SplitScript {
        statements,
        unterminated: (!tail.is_empty()).then(|| tail.to_string()),
    }
}

/// Split a script into its `;`-terminated statements, in file order.
///
/// Text after the last terminator is discarded.
pub fn split_statements(sql: &str) -> Vec<String> {
    split_script(sql).statements
}

/// Shorten `statement` to at most `limit` characters for log output,
/// appending `...` when anything was cut.
pub fn preview(statement: &str, limit: usize) -> String {
    match statement.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &statement[..cut]),
        None => statement.to_string(),
    }
}
