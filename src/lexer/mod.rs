//! Lexical analysis module.
//!
//! This module contains the scanner that converts source text into a stream
//! of tokens plus a list of lexical errors. It handles:
//!
//! - Tokenization using an ordered table of regex patterns
//! - Keyword and symbol classification through static lookup tables
//! - `/@ ... @/` comments spanning any number of lines
//! - Invalid identifiers and unknown characters, recorded without stopping

pub mod lexer;
pub mod tokens;

#[cfg(test)]
mod tests;
