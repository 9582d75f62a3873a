//! Parses version strings such as 1.2.3-rc.1+build.5
use super::common::{core_digits, identifiers, VResult};
use nom::{
    bytes::complete::tag,
    combinator::{map_res, opt},
    sequence::{preceded, tuple},
};

use crate::models::version::Version;

pub fn version(input: &str) -> VResult<Version> {
    let (rest, (major, minor, patch)) = tuple((
        core_number,
        preceded(tag("."), core_number),
        preceded(tag("."), core_number),
    ))(input)?;
    let (rest, prerelease) = opt(preceded(tag("-"), identifiers))(rest)?;
    let (rest, build) = opt(preceded(tag("+"), identifiers))(rest)?;

    Ok((rest, Version { major, minor, patch, prerelease, build }))
}

fn core_number(input: &str) -> VResult<u64> {
    map_res(core_digits, |digits: &str| digits.parse::<u64>())(input)
}
