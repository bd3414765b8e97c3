use lazy_static::lazy_static;
use regex::Regex;

use crate::{
    errors::errors::{LexicalError, LexicalErrorKind},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP, SYMBOL_LOOKUP, SYMBOL_REGEX};

pub const COMMENT_START: &str = "/@";
pub const COMMENT_END: &str = "@/";

pub type RegexHandler = fn(&mut Lexer, &str);

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    /// Tried top to bottom at every position; the first anchored match wins.
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^\s+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+[A-Za-z_][A-Za-z0-9_]*").unwrap(), handler: invalid_identifier_handler },
        RegexPattern { regex: SYMBOL_REGEX.clone(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r#"^"[^"]*""#).unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StringLiteral) },
        RegexPattern { regex: Regex::new(r"^'[^']*'").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CharLiteral) },
        RegexPattern { regex: Regex::new(r"^[0-9]+\.[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::FloatConstant) },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::IntegerConstant) },
        RegexPattern { regex: Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*").unwrap(), handler: identifier_handler },
    ];
}

/// Scanner state. Only `in_comment` survives from one line to the next.
pub struct Lexer {
    tokens: Vec<Token>,
    errors: Vec<LexicalError>,
    pos: usize,
    line: u32,
    in_comment: bool,
}

impl Lexer {
    pub fn new() -> Lexer {
        Lexer {
            tokens: vec![],
            errors: vec![],
            pos: 0,
            line: 1,
            in_comment: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn push_error(&mut self, kind: LexicalErrorKind, text: &str) {
        self.errors.push(LexicalError::new(kind, String::from(text), self.line));
    }

    /// Splits one physical line into comment and code segments.
    ///
    /// At most one comment is recognized per line. Text after a closing
    /// marker is plain code, even if it holds another opening marker.
    fn scan_line(&mut self, text: &str) {
        if self.in_comment {
            match text.find(COMMENT_END) {
                Some(end) => {
                    self.push_comment_content(&text[..end]);
                    self.push(MK_TOKEN!(TokenKind::CommentEnd, String::from(COMMENT_END), self.line));
                    self.in_comment = false;
                    self.tokenize_segment(&text[end + COMMENT_END.len()..]);
                }
                None => self.push_comment_content(text),
            }
            return;
        }

        let start = match text.find(COMMENT_START) {
            Some(start) => start,
            None => {
                self.tokenize_segment(text);
                return;
            }
        };

        self.tokenize_segment(&text[..start]);
        self.push(MK_TOKEN!(TokenKind::CommentStart, String::from(COMMENT_START), self.line));
        let content_start = start + COMMENT_START.len();

        // Only the first closing marker of the line counts, and only if it
        // starts after the opening one. In `/@/` the two markers share the `@`.
        match text.find(COMMENT_END).filter(|&end| end > start) {
            Some(end) => {
                self.push_comment_content(text.get(content_start..end).unwrap_or(""));
                self.push(MK_TOKEN!(TokenKind::CommentEnd, String::from(COMMENT_END), self.line));
                self.tokenize_segment(&text[end + COMMENT_END.len()..]);
            }
            None => {
                self.push_comment_content(&text[content_start..]);
                self.in_comment = true;
            }
        }
    }

    fn push_comment_content(&mut self, text: &str) {
        let content = text.trim();
        if !content.is_empty() {
            self.push(MK_TOKEN!(TokenKind::CommentContent, String::from(content), self.line));
        }
    }

    /// Tokenizes code outside of any comment, left to right without backtracking.
    fn tokenize_segment(&mut self, segment: &str) {
        self.pos = 0;

        while self.pos < segment.len() {
            let remainder = &segment[self.pos..];
            let matched = PATTERNS.iter().find_map(|pattern| {
                pattern
                    .regex
                    .find(remainder)
                    .map(|found| (pattern.handler, found.as_str()))
            });

            match matched {
                Some((handler, text)) => handler(self, text),
                None => unknown_handler(self, remainder),
            }
        }
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Lexer::new()
    }
}

fn skip_handler(lexer: &mut Lexer, matched: &str) {
    lexer.advance_n(matched.len());
}

fn invalid_identifier_handler(lexer: &mut Lexer, matched: &str) {
    lexer.push_error(LexicalErrorKind::InvalidIdentifier, matched);
    lexer.advance_n(matched.len());
}

fn symbol_handler(lexer: &mut Lexer, matched: &str) {
    match SYMBOL_LOOKUP.get(matched) {
        Some(kind) => {
            let line = lexer.line;
            lexer.push(MK_TOKEN!(*kind, String::from(matched), line));
            lexer.advance_n(matched.len());
        }
        None => unknown_handler(lexer, matched),
    }
}

fn identifier_handler(lexer: &mut Lexer, matched: &str) {
    let kind = RESERVED_LOOKUP
        .get(matched)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    let line = lexer.line;
    lexer.push(MK_TOKEN!(kind, String::from(matched), line));
    lexer.advance_n(matched.len());
}

fn unknown_handler(lexer: &mut Lexer, remainder: &str) {
    if let Some(ch) = remainder.chars().next() {
        lexer.push_error(LexicalErrorKind::UnknownToken, &remainder[..ch.len_utf8()]);
        lexer.advance_n(ch.len_utf8());
    }
}

/// Scans the whole source, returning tokens and lexical errors in source order.
///
/// Never fails: malformed identifiers and unknown characters are recorded and
/// scanning resumes right after them.
pub fn tokenize(source: &str) -> (Vec<Token>, Vec<LexicalError>) {
    let mut lex = Lexer::new();

    for (index, text) in source.split('\n').enumerate() {
        lex.line = index as u32 + 1;
        lex.scan_line(text);
    }

    (lex.tokens, lex.errors)
}
