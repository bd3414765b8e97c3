use crate::{errors::errors::ErrorImpl, lexer::tokens::TokenKind};

use super::{expr::parse_expr, lookups::BLOCK_RULES, parser::Parser, types::parse_type_specifier};

/// comment → CommentStart CommentContent* CommentEnd?
pub fn parse_comment(parser: &mut Parser) -> bool {
    if !parser.eat(TokenKind::CommentStart) {
        return false;
    }

    while parser.eat(TokenKind::CommentContent) {}
    // An unterminated comment still counts.
    parser.eat(TokenKind::CommentEnd);

    true
}

/// include-command → Include ( StringLiteral ) ;
///
/// Unlike the other attempts this one reports why it failed, and those
/// diagnostics stay recorded after the cursor is put back.
pub fn parse_include_command(parser: &mut Parser) -> bool {
    let start = parser.get_position();
    let keyword_line = match parser.current_token() {
        Some(token) if token.is(TokenKind::Include) => token.line,
        _ => return false,
    };
    parser.advance();

    let complete = expect_include_part(parser, TokenKind::OpenParen, None, keyword_line)
        && expect_include_part(parser, TokenKind::StringLiteral, Some("file string"), keyword_line)
        && expect_include_part(parser, TokenKind::CloseParen, None, keyword_line)
        && expect_include_part(parser, TokenKind::Semicolon, None, keyword_line);

    if !complete {
        parser.set_position(start);
    }

    complete
}

fn expect_include_part(
    parser: &mut Parser,
    kind: TokenKind,
    missing: Option<&str>,
    keyword_line: u32,
) -> bool {
    if parser.eat(kind) {
        return true;
    }

    let line = parser.current_token().map_or(keyword_line, |token| token.line);
    let error = match (missing, parser.current_token()) {
        (Some(construct), _) => ErrorImpl::MissingConstruct {
            construct: String::from(construct),
        },
        (None, Some(token)) => ErrorImpl::UnexpectedToken {
            token: token.value.clone(),
        },
        (None, None) => ErrorImpl::UnexpectedEnd,
    };

    parser.record_error(error, line);
    false
}

/// var-declaration → type-specifier Identifier ;
pub fn parse_var_decl(parser: &mut Parser) -> bool {
    parser.attempt(|parser| {
        parse_type_specifier(parser)
            && parser.eat(TokenKind::Identifier)
            && parser.eat(TokenKind::Semicolon)
    })
}

/// fun-declaration → type-specifier Identifier ( param-list? ) compound-stmt
pub fn parse_fun_decl(parser: &mut Parser) -> bool {
    parser.attempt(|parser| {
        if !(parse_type_specifier(parser)
            && parser.eat(TokenKind::Identifier)
            && parser.eat(TokenKind::OpenParen))
        {
            return false;
        }

        parse_param_list(parser);

        parser.eat(TokenKind::CloseParen) && parse_compound_stmt(parser)
    })
}

/// param-list → param (, param)* | NOReturn
///
/// Optional: returns whether anything was consumed.
pub fn parse_param_list(parser: &mut Parser) -> bool {
    if parse_param(parser) {
        while parser.attempt(|parser| parser.eat(TokenKind::Comma) && parse_param(parser)) {}
        return true;
    }

    parser.eat(TokenKind::Void)
}

/// param → type-specifier Identifier
pub fn parse_param(parser: &mut Parser) -> bool {
    parser.attempt(|parser| parse_type_specifier(parser) && parser.eat(TokenKind::Identifier))
}

/// compound-stmt → { statement* }
///
/// Inside the braces the block recovers like the top level: queued lexical
/// errors first, then the block rules, then skip one unexpected token. The
/// whole block, nested records included, is undone if no `}` closes it.
///
/// Such a block can only fail by running out of tokens, so its start is
/// remembered and later attempts from the same `{` fail at once.
pub fn parse_compound_stmt(parser: &mut Parser) -> bool {
    let start = parser.get_position();
    if !parser.check(TokenKind::OpenCurly) || parser.is_unclosed_block(start) {
        return false;
    }

    let closed = parser.attempt(|parser| {
        parser.advance();

        while let Some(token) = parser.current_token() {
            if token.is(TokenKind::CloseCurly) {
                break;
            }

            if parser.forward_lexical_errors() {
                continue;
            }

            if parser.run_rules(BLOCK_RULES) {
                continue;
            }

            parser.skip_unexpected();
        }

        parser.eat(TokenKind::CloseCurly)
    });

    if !closed {
        parser.mark_unclosed_block(start);
    }

    closed
}

/// selection-stmt → IfTrue ( expression ) compound-stmt (Otherwise compound-stmt)?
pub fn parse_selection_stmt(parser: &mut Parser) -> bool {
    parser.attempt(|parser| {
        if !(parser.eat(TokenKind::If)
            && parser.eat(TokenKind::OpenParen)
            && parse_expr(parser)
            && parser.eat(TokenKind::CloseParen)
            && parse_compound_stmt(parser))
        {
            return false;
        }

        parser.attempt(|parser| parser.eat(TokenKind::Else) && parse_compound_stmt(parser));

        true
    })
}

/// iteration-stmt → RepeatWhen ( expression ) compound-stmt
///                | Reiterate ( expression ; expression ; expression ) compound-stmt
pub fn parse_iteration_stmt(parser: &mut Parser) -> bool {
    parser.attempt(|parser| {
        parser.eat_value(TokenKind::Loop, "RepeatWhen")
            && parser.eat(TokenKind::OpenParen)
            && parse_expr(parser)
            && parser.eat(TokenKind::CloseParen)
            && parse_compound_stmt(parser)
    }) || parser.attempt(|parser| {
        parser.eat_value(TokenKind::Loop, "Reiterate")
            && parser.eat(TokenKind::OpenParen)
            && parse_expr(parser)
            && parser.eat(TokenKind::Semicolon)
            && parse_expr(parser)
            && parser.eat(TokenKind::Semicolon)
            && parse_expr(parser)
            && parser.eat(TokenKind::CloseParen)
            && parse_compound_stmt(parser)
    })
}

/// jump-stmt → Turnback expression ; | Stop ;
pub fn parse_jump_stmt(parser: &mut Parser) -> bool {
    parser.attempt(|parser| {
        parser.eat(TokenKind::Return) && parse_expr(parser) && parser.eat(TokenKind::Semicolon)
    }) || parser.attempt(|parser| parser.eat(TokenKind::Break) && parser.eat(TokenKind::Semicolon))
}

/// expression-stmt → ; | expression ;
pub fn parse_expression_stmt(parser: &mut Parser) -> bool {
    parser.eat(TokenKind::Semicolon)
        || parser.attempt(|parser| parse_expr(parser) && parser.eat(TokenKind::Semicolon))
}
