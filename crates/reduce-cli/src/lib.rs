#![deny(missing_docs)]
//! Parsers, formatters and the flag surface for the `reduce` binary.

pub mod cli;
pub mod format;
pub mod parse;
