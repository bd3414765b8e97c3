//! Error types for the scanner, the parser and the driver.
//!
//! - Lexical errors recorded while scanning (invalid identifiers, unknown characters)
//! - Parse diagnostics anchored to a source line
//! - Driver errors for reading the input file

pub mod errors;
