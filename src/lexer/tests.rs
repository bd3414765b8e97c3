//! Unit tests for the lexer module.
//!
//! This module contains tests for tokenization including:
//! - Keywords and identifiers
//! - Numeric, string and character literals
//! - Operators and punctuation, longest match first
//! - Comments spanning lines
//! - Error cases

use crate::errors::errors::LexicalErrorKind;

use super::{lexer::tokenize, tokens::TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    tokenize(source).0.iter().map(|token| token.kind).collect()
}

#[test]
fn test_tokenize_keywords() {
    let source = "IfTrue Otherwise Imw SIMw Chj Series IMwf SIMwf NOReturn RepeatWhen Reiterate Turnback OutLoop Stop Loli include int";
    let (tokens, errors) = tokenize(source);

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::If);
    assert_eq!(tokens[1].kind, TokenKind::Else);
    assert_eq!(tokens[2].kind, TokenKind::Integer);
    assert_eq!(tokens[3].kind, TokenKind::SInteger);
    assert_eq!(tokens[4].kind, TokenKind::Character);
    assert_eq!(tokens[5].kind, TokenKind::String);
    assert_eq!(tokens[6].kind, TokenKind::Float);
    assert_eq!(tokens[7].kind, TokenKind::SFloat);
    assert_eq!(tokens[8].kind, TokenKind::Void);
    assert_eq!(tokens[9].kind, TokenKind::Loop);
    assert_eq!(tokens[10].kind, TokenKind::Loop);
    assert_eq!(tokens[11].kind, TokenKind::Return);
    assert_eq!(tokens[12].kind, TokenKind::Break);
    assert_eq!(tokens[13].kind, TokenKind::Break);
    assert_eq!(tokens[14].kind, TokenKind::Struct);
    assert_eq!(tokens[15].kind, TokenKind::Include);
    assert_eq!(tokens[16].kind, TokenKind::Type);
    assert_eq!(tokens.len(), 17);
}

#[test]
fn test_tokenize_hyphenated_keyword() {
    let (tokens, _) = tokenize("IfTrue-Otherwise");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Condition);
}

#[test]
fn test_keywords_are_case_sensitive() {
    assert_eq!(kinds("iftrue imw Include"), vec![TokenKind::Identifier; 3]);
}

#[test]
fn test_tokenize_identifiers() {
    let (tokens, errors) = tokenize("foo bar_1 _under CamelCase my-var");

    assert!(errors.is_empty());
    let values: Vec<&str> = tokens.iter().map(|token| token.value.as_str()).collect();
    assert_eq!(values, vec!["foo", "bar_1", "_under", "CamelCase", "my-var"]);
    assert!(tokens.iter().all(|token| token.kind == TokenKind::Identifier));
}

#[test]
fn test_hyphen_after_space_is_minus() {
    assert_eq!(
        kinds("a - b"),
        vec![TokenKind::Identifier, TokenKind::Minus, TokenKind::Identifier]
    );
}

#[test]
fn test_tokenize_numbers() {
    let (tokens, _) = tokenize("42 3.14 0 100.5");

    assert_eq!(tokens[0].kind, TokenKind::IntegerConstant);
    assert_eq!(tokens[0].value, "42");
    assert_eq!(tokens[1].kind, TokenKind::FloatConstant);
    assert_eq!(tokens[1].value, "3.14");
    assert_eq!(tokens[2].kind, TokenKind::IntegerConstant);
    assert_eq!(tokens[3].kind, TokenKind::FloatConstant);
    assert_eq!(tokens[3].value, "100.5");
}

#[test]
fn test_trailing_dot_is_unknown() {
    let (tokens, errors) = tokenize("3.");

    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::IntegerConstant);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, ".");
    assert_eq!(errors[0].kind, LexicalErrorKind::UnknownToken);
}

#[test]
fn test_tokenize_strings_and_chars() {
    let (tokens, errors) = tokenize(r#""hello world" 'c' """#);

    assert!(errors.is_empty());
    assert_eq!(tokens[0].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[0].value, "\"hello world\"");
    assert_eq!(tokens[1].kind, TokenKind::CharLiteral);
    assert_eq!(tokens[1].value, "'c'");
    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].value, "\"\"");
}

#[test]
fn test_unterminated_string() {
    let (tokens, errors) = tokenize("\"abc");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "\"");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].value, "abc");
}

#[test]
fn test_tokenize_operators() {
    assert_eq!(
        kinds("+ - * / = == != < <= > >= && || ~"),
        vec![
            TokenKind::Plus,
            TokenKind::Minus,
            TokenKind::Mult,
            TokenKind::Div,
            TokenKind::Assignment,
            TokenKind::Equal,
            TokenKind::NotEqual,
            TokenKind::Less,
            TokenKind::LessEquals,
            TokenKind::Greater,
            TokenKind::GreaterEquals,
            TokenKind::And,
            TokenKind::Or,
            TokenKind::Not,
        ]
    );
}

#[test]
fn test_tokenize_punctuation() {
    assert_eq!(
        kinds("( ) { } [ ] ; : , ->"),
        vec![
            TokenKind::OpenParen,
            TokenKind::CloseParen,
            TokenKind::OpenCurly,
            TokenKind::CloseCurly,
            TokenKind::OpenBracket,
            TokenKind::CloseBracket,
            TokenKind::Semicolon,
            TokenKind::Colon,
            TokenKind::Comma,
            TokenKind::Arrow,
        ]
    );
}

#[test]
fn test_longest_symbol_match() {
    let (tokens, errors) = tokenize("<=");

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::LessEquals);
    assert_eq!(tokens[0].kind.to_string(), "Less Than or Equal");
}

#[test]
fn test_longest_symbol_match_without_spaces() {
    assert_eq!(
        kinds("a<=b->c==d"),
        vec![
            TokenKind::Identifier,
            TokenKind::LessEquals,
            TokenKind::Identifier,
            TokenKind::Arrow,
            TokenKind::Identifier,
            TokenKind::Equal,
            TokenKind::Identifier,
        ]
    );
}

#[test]
fn test_invalid_identifier_priority() {
    let (tokens, errors) = tokenize("123abc + 1");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "123abc");
    assert_eq!(errors[0].kind, LexicalErrorKind::InvalidIdentifier);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Plus);
    assert_eq!(tokens[1].kind, TokenKind::IntegerConstant);
    assert_eq!(tokens[1].value, "1");
}

#[test]
fn test_invalid_identifier_stops_at_hyphen() {
    let (tokens, errors) = tokenize("9a_b-c");

    assert_eq!(errors[0].text, "9a_b");
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].kind, TokenKind::Minus);
    assert_eq!(tokens[1].value, "c");
}

#[test]
fn test_unknown_characters() {
    let (tokens, errors) = tokenize("@ # $");

    assert!(tokens.is_empty());
    assert_eq!(errors.len(), 3);
    assert!(errors
        .iter()
        .all(|error| error.kind == LexicalErrorKind::UnknownToken));
    assert_eq!(errors[1].text, "#");
}

#[test]
fn test_unknown_multibyte_character() {
    let (tokens, errors) = tokenize("x é y");

    assert_eq!(tokens.len(), 2);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "é");
}

#[test]
fn test_line_numbers() {
    let (tokens, errors) = tokenize("Imw\n\nx\n  1abc");

    assert_eq!(tokens[0].line, 1);
    assert_eq!(tokens[1].line, 3);
    assert_eq!(errors[0].line, 4);
}

#[test]
fn test_single_line_comment() {
    let (tokens, errors) = tokenize("/@ foo = bar(1,2) @/");

    assert!(errors.is_empty());
    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::CommentStart,
            TokenKind::CommentContent,
            TokenKind::CommentEnd,
        ]
    );
    assert_eq!(tokens[1].value, "foo = bar(1,2)");
}

#[test]
fn test_multi_line_comment() {
    let source = "Imw x; /@ start\nIfTrue ( x ) {\n\n end @/ x = 1;";
    let (tokens, errors) = tokenize(source);

    assert!(errors.is_empty());
    let summary: Vec<(u32, TokenKind, &str)> = tokens
        .iter()
        .map(|token| (token.line, token.kind, token.value.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            (1, TokenKind::Integer, "Imw"),
            (1, TokenKind::Identifier, "x"),
            (1, TokenKind::Semicolon, ";"),
            (1, TokenKind::CommentStart, "/@"),
            (1, TokenKind::CommentContent, "start"),
            (2, TokenKind::CommentContent, "IfTrue ( x ) {"),
            (4, TokenKind::CommentContent, "end"),
            (4, TokenKind::CommentEnd, "@/"),
            (4, TokenKind::Identifier, "x"),
            (4, TokenKind::Assignment, "="),
            (4, TokenKind::IntegerConstant, "1"),
            (4, TokenKind::Semicolon, ";"),
        ]
    );
}

#[test]
fn test_comment_hides_bad_text() {
    let (tokens, errors) = tokenize("/@ 1abc # $\n@ ~ @/");

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 4);
    assert_eq!(tokens[2].value, "@ ~");
}

#[test]
fn test_empty_comment() {
    assert_eq!(
        kinds("/@@/"),
        vec![TokenKind::CommentStart, TokenKind::CommentEnd]
    );
}

#[test]
fn test_comment_markers_sharing_at_sign() {
    let (tokens, errors) = tokenize("/@/ Imw x ;");

    assert!(errors.is_empty());
    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::CommentStart,
            TokenKind::CommentEnd,
            TokenKind::Integer,
            TokenKind::Identifier,
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn test_close_marker_before_open_is_code() {
    let (tokens, errors) = tokenize("x @/ /@ y @/");

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].text, "@");
    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::Div,
            TokenKind::CommentStart,
            TokenKind::CommentContent,
        ]
    );
    assert_eq!(tokens[3].value, "y @/");
}

#[test]
fn test_comments_do_not_nest() {
    let (tokens, _) = tokenize("/@ a /@ b @/ c");

    assert_eq!(tokens[1].value, "a /@ b");
    assert_eq!(tokens[2].kind, TokenKind::CommentEnd);
    assert_eq!(tokens[3].kind, TokenKind::Identifier);
    assert_eq!(tokens.len(), 4);
}

#[test]
fn test_text_after_close_is_plain_code() {
    let (tokens, errors) = tokenize("/@ a @/ x /@ b @/");

    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::CommentStart,
            TokenKind::CommentContent,
            TokenKind::CommentEnd,
            TokenKind::Identifier,
            TokenKind::Div,
            TokenKind::Identifier,
            TokenKind::Div,
        ]
    );
    assert_eq!(errors.len(), 2);
    assert!(errors
        .iter()
        .all(|error| error.text == "@" && error.kind == LexicalErrorKind::UnknownToken));
}

#[test]
fn test_text_after_multi_line_close_is_plain_code() {
    let (tokens, errors) = tokenize("/@ a
b @/ x /@ c");

    assert_eq!(errors.len(), 1);
    assert_eq!(tokens.last().map(|token| token.value.as_str()), Some("c"));
    assert!(!tokens[4..].iter().any(|token| token.kind == TokenKind::CommentStart));
}

#[test]
fn test_unterminated_comment_runs_to_end() {
    let (tokens, errors) = tokenize("x /@ never\nclosed 1abc");

    assert!(errors.is_empty());
    assert_eq!(
        tokens.iter().map(|token| token.kind).collect::<Vec<_>>(),
        vec![
            TokenKind::Identifier,
            TokenKind::CommentStart,
            TokenKind::CommentContent,
            TokenKind::CommentContent,
        ]
    );
}

#[test]
fn test_whitespace_and_crlf() {
    let (tokens, errors) = tokenize("  Imw   x ;\r\n\tx = 2 ;\r\n");

    assert!(errors.is_empty());
    assert_eq!(tokens.len(), 7);
    assert_eq!(tokens[3].line, 2);
}

#[test]
fn test_empty_source() {
    let (tokens, errors) = tokenize("");

    assert!(tokens.is_empty());
    assert!(errors.is_empty());
}

#[test]
fn test_token_display() {
    let (tokens, _) = tokenize("Imw");

    assert_eq!(
        tokens[0].to_string(),
        "Line: 1 Token Text: Imw Token Type: Integer"
    );
}
