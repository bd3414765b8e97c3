//! Recursive-descent parser that checks a token stream against the grammar.
//!
//! The parser builds no tree. It records which grammar rule matched at which
//! line, and reports the lines where nothing matched. It handles:
//!
//! - Top-level comments, include commands, function and variable declarations
//! - Compound blocks with loops, conditionals, jumps and expression statements
//! - Expressions with assignment, one relational level, and arithmetic
//! - Recovery by skipping one token, and forwarding of the scanner's errors
//!
//! Every attempt function backtracks on failure through checkpoints, so a
//! rejected alternative leaves neither cursor movement nor records behind.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;
