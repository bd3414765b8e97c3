//! Type-specifier recognition.
//!
//! A type specifier is a single keyword token; there are no compound types.

use crate::lexer::tokens::TokenKind;

use super::parser::Parser;

pub const TYPE_SPECIFIERS: &[TokenKind] = &[
    TokenKind::Integer,
    TokenKind::SInteger,
    TokenKind::Character,
    TokenKind::String,
    TokenKind::Float,
    TokenKind::SFloat,
    TokenKind::Void,
    TokenKind::Type,
];

pub fn parse_type_specifier(parser: &mut Parser) -> bool {
    match parser.current_token_kind() {
        Some(kind) if kind.is_one_of_many(TYPE_SPECIFIERS) => {
            parser.advance();
            true
        }
        _ => false,
    }
}
