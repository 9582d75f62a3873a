//! Character classes and identifier lists shared by the version grammar
use nom::{
    IResult,
    error::VerboseError,
    bytes::complete::{tag, take_while1, take_while_m_n},
    combinator::map,
    multi::separated_list1,
};
use lazy_static::lazy_static;
use regex::Regex;

pub type VResult<'a, O> = IResult<&'a str, O, VerboseError<&'a str>>;

/// Upper bound on the digits in each of major, minor and patch. Nine digits
/// always fit a u64, so conversion of a grammar-valid component cannot fail.
pub const MAX_CORE_DIGITS: usize = 9;

lazy_static! {
    // Unicode decimal digits, letters of every L* category, and the hyphen.
    // Other number kinds (No, Nl) and combining marks are excluded.
    static ref IDENTIFIER_CHAR: Regex =
        Regex::new(r"^[\p{Nd}\p{L}\-]$").expect("Invalid identifier character class");
}

/// Prerelease and build identifiers accept any Unicode digit or letter plus
/// the hyphen, not only ASCII alphanumerics.
pub fn is_identifier_char(c: char) -> bool {
    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c == '-';
    }

    let mut buf = [0; 4];
    IDENTIFIER_CHAR.is_match(c.encode_utf8(&mut buf))
}

pub fn core_digits(input: &str) -> VResult<&str> {
    take_while_m_n(1, MAX_CORE_DIGITS, |c: char| c.is_ascii_digit())(input)
}

pub fn identifier(input: &str) -> VResult<&str> {
    take_while1(is_identifier_char)(input)
}

/// One or more non-empty identifiers separated by dots
pub fn identifiers(input: &str) -> VResult<Vec<String>> {
    map(separated_list1(tag("."), identifier), |ids: Vec<&str>| {
        ids.into_iter().map(String::from).collect()
    })(input)
}
