/// Characters of collaborator stderr kept for display.
pub const DIAGNOSTIC_LIMIT: usize = 500;

/// Exit status and a bounded diagnostic reported by whoever ran the command.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ExecutionReport {
    /// Process exit code, `None` when killed by a signal.
    pub exit_code: Option<i32>,
    /// Tail of stderr, at most [`DIAGNOSTIC_LIMIT`] characters.
    pub diagnostic: String,
}

impl ExecutionReport {
    /// Build a report, keeping only the last [`DIAGNOSTIC_LIMIT`] characters of `stderr`.
    pub fn new(exit_code: Option<i32>, stderr: &str) -> Self {
        Self {
            exit_code,
            diagnostic: last_n_chars(stderr.trim_end(), DIAGNOSTIC_LIMIT),
        }
    }

    /// `true` for exit code 0.
    pub fn succeeded(&self) -> bool {
        self.exit_code == Some(0)
    }
}

fn last_n_chars(s: &str, n: usize) -> String {
    let count = s.chars().count();
    if count <= n {
        return s.to_string();
    }
    s.chars().skip(count - n).collect()
}

#[cfg(test)]
#[path = "../../tests/unit/command/report.rs"]
mod tests;
