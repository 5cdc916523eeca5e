//! CLI command implementations

pub mod convert;
pub mod iterate;
pub mod list;
pub mod reset;
