//! Turns version strings into [`Version`] values. The grammar is semver's,
//! widened so prerelease and build identifiers may contain any Unicode
//! letter or digit:
//!
//! ```text
//! version := D{1,9} "." D{1,9} "." D{1,9} ["-" C+ ("." C+)*] ["+" C+ ("." C+)*]
//! ```

pub(crate) mod common;
mod version;

pub use common::MAX_CORE_DIGITS;

use nom::combinator::all_consuming;

use tracing::{instrument, event, Level};

use crate::error::{ParseError, Result};
use crate::models::version::Version;

/// Parses the whole of `input` as a version. Anything short of a complete
/// match, including trailing text, is an `InvalidVersion` error.
#[instrument]
pub fn parse_version(input: &str) -> Result<Version> {
    event!(Level::DEBUG, "Parsing version: '{}'", input);
    match all_consuming(version::version)(input) {
        Ok((_, parsed)) => {
            event!(Level::DEBUG, "Parsed version: {:?}", parsed);
            Ok(parsed)
        },
        Err(e) => {
            match e {
                nom::Err::Error(inner_e) | nom::Err::Failure(inner_e) => {
                    event!(Level::DEBUG, "Rejected version '{}': {:?}", input, inner_e.errors);
                },
                nom::Err::Incomplete(_) => {
                    event!(Level::DEBUG, "Rejected version '{}': incomplete input", input);
                },
            }
            Err(ParseError::invalid(input))
        }
    }
}
