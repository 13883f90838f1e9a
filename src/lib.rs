//! Exec Params Fix: rewrite libpqxx `tx.exec` calls to use `pqxx::params`
//!
//! Older libpqxx code passes query parameters straight after the SQL text:
//! `tx.exec("SELECT ... $1", id)`. This crate rewrites every such call in a
//! source file into `tx.exec("SELECT ... $1", pqxx::params(id))`.
//!
//! # Matching
//!
//! Matching is a single regular expression, not a parser. The argument list
//! runs from the first comma after the query literal to the first `)`, so
//! nested calls are cut short and already-wrapped calls get wrapped again.
//! See [`exec`] for the exact rule.
//!
//! # Example
//!
//! ```no_run
//! use exec_params_fix::rewrite;
//!
//! match rewrite("src/repository/MatchRepository.hpp") {
//!     Ok(report) => println!("Rewrote {} calls", report.calls_rewritten),
//!     Err(e) => eprintln!("Rewrite failed: {}", e),
//! }
//! ```

pub mod document;
pub mod errors;
pub mod exec;

// Re-exports
pub use document::{rewrite, Document, RewriteReport, Transformed};
pub use errors::RewriteError;
pub use exec::{find_exec_calls, wrap_exec_params, ExecCall, EXEC_MARKER, PARAMS_WRAPPER};
