//! Shared CLI argument types

mod common;
mod global;

pub use common::{OutputFormat, parse_period};
pub use global::GlobalOptions;
