//! Command-line argument handling for the `fhexgen` binary.
//!
//! The binary takes exactly one positional argument, a base-10 integer
//! test identifier. Absent or malformed arguments are rejected up front
//! with a typed error rather than read past unchecked.

use thiserror::Error;

/// Rejected process arguments.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidArguments {
    /// No test identifier was supplied.
    #[error("missing test identifier (usage: fhexgen <test-id>)")]
    MissingTestId,
    /// The identifier did not parse as a base-10 integer.
    #[error("malformed test identifier {0:?}: expected a base-10 integer")]
    MalformedTestId(String),
}

/// Extracts the test identifier from process arguments.
///
/// Expects the conventional argv layout: program name first, identifier
/// second. Any identifier that parses as an `i64` is accepted; it only
/// perturbs the random seed, so no domain restriction applies. Arguments
/// past the identifier are ignored.
///
/// # Examples
///
/// ```
/// use fhexgen::cli::{parse_test_id, InvalidArguments};
///
/// let args = ["fhexgen", "42"].map(String::from);
/// assert_eq!(parse_test_id(args), Ok(42));
///
/// let args = ["fhexgen"].map(String::from);
/// assert_eq!(parse_test_id(args), Err(InvalidArguments::MissingTestId));
/// ```
pub fn parse_test_id<I>(args: I) -> Result<i64, InvalidArguments>
where
    I: IntoIterator<Item = String>,
{
    let raw = args
        .into_iter()
        .nth(1)
        .ok_or(InvalidArguments::MissingTestId)?;
    raw.parse()
        .map_err(|_| InvalidArguments::MalformedTestId(raw))
}
