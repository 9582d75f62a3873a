//! Parsing and precedence for semver-style version strings whose prerelease
//! and build identifiers may contain any Unicode letter, e.g.
//! `3.24.3-β+20150115102400`. Accepting non-ASCII identifiers makes this
//! deliberately looser than semver.org.
//!
//! ```
//! use unisemver::Version;
//!
//! let rc: Version = "1.0.0-rc.1".parse().unwrap();
//! let release = Version::parse("1.0.0").unwrap();
//! assert!(rc.less(&release));
//! ```

pub mod error;
pub mod models;
pub mod parser;
pub mod precedence;

pub use error::ParseError;
pub use models::Version;
pub use parser::{parse_version, MAX_CORE_DIGITS};
pub use precedence::{compare_identifier, identifiers_equal, identifiers_less};
