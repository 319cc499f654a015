//! Text extraction for rustdoc-generated kernel doctest stubs
//!
//! Centralized handling of test-name capture and the `Result`
//! qualification rewrite applied to stub bodies before persistence.

use doctest_record::{BuilderError, TestRecord, NAME_PREFIX};
use once_cell::sync::Lazy;
use regex::Regex;

// `[^\s]*` absorbs the generated prefix (e.g. `_doctest_main_`) plus any
// leading path (for `O=` builds).
static TEST_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"fn [^\s]*rust_kernel_([a-zA-Z0-9_]+)\(\)").unwrap());

/// Capture the single test identifier from stub source text
///
/// The identifier is the portion of the function name following the
/// `rust_kernel_` prefix.
///
/// # Errors
///
/// Returns `BuilderError::NoTestName` if no occurrence of the pattern is
/// found, or `BuilderError::AmbiguousTestName` if more than one is.
pub fn extract_test_id(content: &str) -> Result<&str, BuilderError> {
    let mut captures = TEST_NAME_RE.captures_iter(content);

    let first = captures.next().ok_or(BuilderError::NoTestName)?;
    let extra = captures.count();
    if extra > 0 {
        return Err(BuilderError::AmbiguousTestName { count: extra + 1 });
    }

    // Group 1 always participates in a match of this pattern
    Ok(first.get(1).map_or("", |m| m.as_str()))
}

/// Qualify the stub's `Result` return type to avoid the collision with
/// the kernel's own `Result` coming from the prelude
///
/// Purely textual: every literal occurrence is rewritten, and a body
/// without the substring is returned unchanged.
#[must_use]
pub fn qualify_result(content: &str, id: &str) -> String {
    content.replace(
        &format!("rust_kernel_{id}() -> Result<(), impl core::fmt::Debug> {{"),
        &format!("rust_kernel_{id}() -> core::result::Result<(), impl core::fmt::Debug> {{"),
    )
}

/// Build the persisted record for one stub
///
/// # Errors
///
/// Returns `BuilderError` if the test name cannot be extracted uniquely
pub fn build_record(content: &str) -> Result<TestRecord, BuilderError> {
    let id = extract_test_id(content)?;
    let name = format!("{NAME_PREFIX}{id}");
    let body = qualify_result(content, id);
    Ok(TestRecord::new(name, body))
}
