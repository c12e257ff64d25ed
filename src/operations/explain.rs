//! Look up a single exit code

use crate::codes::{self, CodeInfo};
use crate::error::CodedError;
use crate::exit_error;

/// Find the named code for `query`, given as a number or a name
///
/// # Errors
///
/// Returns an error carrying [`codes::USAGE`] if `query` names no known code.
pub fn explain(query: &str) -> Result<&'static CodeInfo, CodedError> {
    let found = match query.trim().parse::<i32>() {
        Ok(code) => codes::lookup(code),
        Err(_) => codes::by_name(query),
    };

    found.ok_or_else(|| exit_error!(codes::USAGE, "Unknown exit code: {query}"))
}
