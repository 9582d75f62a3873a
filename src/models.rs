//! Data models for the values handled across the crate

pub mod version;

pub use version::Version;
