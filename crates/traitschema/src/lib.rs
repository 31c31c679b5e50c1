//! traitschema - JSON Schema fragments for configurable traits
//!
//! Command-line front end over `traitschema-core`.

pub mod cli;
pub mod logging;
