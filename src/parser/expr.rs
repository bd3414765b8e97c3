use crate::lexer::tokens::TokenKind;

use super::{
    lookups::{ADDITIVE_OPERATORS, MULTIPLICATIVE_OPERATORS, RELATIONAL_OPERATORS, SIGNS},
    parser::Parser,
};

/// expression → Identifier = expression | simple-expression
pub fn parse_expr(parser: &mut Parser) -> bool {
    parse_assignment_expr(parser) || parse_simple_expr(parser)
}

/// The identifier is taken speculatively and given back when no `=` follows.
pub fn parse_assignment_expr(parser: &mut Parser) -> bool {
    parser.attempt(|parser| {
        parser.eat(TokenKind::Identifier)
            && parser.eat(TokenKind::Assignment)
            && parse_expr(parser)
    })
}

/// simple-expression → additive-expression (relop additive-expression)?
pub fn parse_simple_expr(parser: &mut Parser) -> bool {
    parser.attempt(|parser| {
        if !parse_additive_expr(parser) {
            return false;
        }

        if at_one_of(parser, RELATIONAL_OPERATORS) {
            parser.advance();
            return parse_additive_expr(parser);
        }

        true
    })
}

/// additive-expression → term ((+|-) term)*
pub fn parse_additive_expr(parser: &mut Parser) -> bool {
    parse_binary_chain(parser, ADDITIVE_OPERATORS, parse_term)
}

/// term → factor ((*|/) factor)*
pub fn parse_term(parser: &mut Parser) -> bool {
    parse_binary_chain(parser, MULTIPLICATIVE_OPERATORS, parse_factor)
}

fn parse_binary_chain(
    parser: &mut Parser,
    operators: &[TokenKind],
    operand: fn(&mut Parser) -> bool,
) -> bool {
    parser.attempt(|parser| {
        if !operand(parser) {
            return false;
        }

        while at_one_of(parser, operators) {
            parser.advance();
            if !operand(parser) {
                return false;
            }
        }

        true
    })
}

/// factor → ( expression ) | call | Identifier | [sign] Constant
pub fn parse_factor(parser: &mut Parser) -> bool {
    parse_grouping_expr(parser) || parse_call_expr(parser) || parse_number(parser)
}

pub fn parse_grouping_expr(parser: &mut Parser) -> bool {
    parser.attempt(|parser| {
        parser.eat(TokenKind::OpenParen)
            && parse_expr(parser)
            && parser.eat(TokenKind::CloseParen)
    })
}

/// An identifier, optionally followed by a call argument list.
///
/// The closing `)` of a call is not required.
pub fn parse_call_expr(parser: &mut Parser) -> bool {
    if !parser.eat(TokenKind::Identifier) {
        return false;
    }

    if parser.eat(TokenKind::OpenParen) {
        parse_args(parser);
        parser.eat(TokenKind::CloseParen);
    }

    true
}

/// arg-list → expression (, expression)*
pub fn parse_args(parser: &mut Parser) -> bool {
    if parser.check(TokenKind::CloseParen) || !parse_expr(parser) {
        return false;
    }

    while parser.attempt(|parser| parser.eat(TokenKind::Comma) && parse_expr(parser)) {}

    true
}

/// [+|-] IntegerConstant | [+|-] FloatConstant
pub fn parse_number(parser: &mut Parser) -> bool {
    parser.attempt(|parser| {
        if at_one_of(parser, SIGNS) {
            parser.advance();
        }

        parser.eat(TokenKind::IntegerConstant) || parser.eat(TokenKind::FloatConstant)
    })
}

fn at_one_of(parser: &Parser, kinds: &[TokenKind]) -> bool {
    matches!(parser.current_token_kind(), Some(kind) if kind.is_one_of_many(kinds))
}
