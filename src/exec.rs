//! The `tx.exec` → `pqxx::params` substitution rule.
//!
//! Matching is purely textual. A call site is the marker, an opening
//! parenthesis, a non-empty double-quoted literal, a comma, and everything
//! up to the first closing parenthesis. Nested calls in the argument list are
//! therefore cut at their own `)`:
//!
//! ```
//! use exec_params_fix::exec::wrap_exec_params;
//!
//! assert_eq!(
//!     wrap_exec_params(r#"tx.exec("SELECT 1", x)"#),
//!     r#"tx.exec("SELECT 1", pqxx::params(x))"#
//! );
//! assert_eq!(
//!     wrap_exec_params(r#"tx.exec("q", f(x), y)"#),
//!     r#"tx.exec("q", pqxx::params(f(x)), y)"#
//! );
//! ```

use regex::{Captures, Regex};
use std::borrow::Cow;
use std::sync::LazyLock;

/// Call being rewritten.
pub const EXEC_MARKER: &str = "tx.exec";

/// Helper the trailing arguments are wrapped in.
pub const PARAMS_WRAPPER: &str = "pqxx::params";

const EXEC_CALL_PATTERN: &str = r#"tx\.exec\(\s*"([^"]+)",\s*([^)]+)\s*\)"#;

static EXEC_CALL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EXEC_CALL_PATTERN).expect("exec call pattern is valid"));

/// A single matched `tx.exec("...", ...)` site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecCall {
    /// Starting byte offset of the match (inclusive)
    pub byte_start: usize,
    /// Ending byte offset of the match (exclusive)
    pub byte_end: usize,
    /// Query literal without its quotes
    pub query: String,
    /// Everything after the first comma up to the first `)`, verbatim
    pub args: String,
    original: String,
}

impl ExecCall {
    fn from_captures(caps: &Captures<'_>) -> Self {
        let whole = caps.get(0).expect("group 0 is always present");
        Self {
            byte_start: whole.start(),
            byte_end: whole.end(),
            query: caps[1].to_string(),
            args: caps[2].to_string(),
            original: whole.as_str().to_string(),
        }
    }

    /// Source text covered by this match.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Text that replaces [`ExecCall::original`].
    pub fn rewritten(&self) -> String {
        render(&self.query, &self.args)
    }
}

fn render(query: &str, args: &str) -> String {
    format!("{EXEC_MARKER}(\"{query}\", {PARAMS_WRAPPER}({args}))")
}

/// Locate every call site, left to right, without overlap.
pub fn find_exec_calls(text: &str) -> Vec<ExecCall> {
    EXEC_CALL
        .captures_iter(text)
        .map(|caps| ExecCall::from_captures(&caps))
        .collect()
}

/// Rewrite every call site in `text` in one pass.
///
/// Borrows the input untouched when nothing matches.
pub fn wrap_exec_params(text: &str) -> Cow<'_, str> {
    EXEC_CALL.replace_all(text, |caps: &Captures<'_>| render(&caps[1], &caps[2]))
}
