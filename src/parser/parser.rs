//! Parser state and the program loop.
//!
//! The parser walks the token stream with a single cursor. Every grammar
//! attempt runs inside [`Parser::attempt`], which takes a [`Checkpoint`] on
//! entry and restores it when the attempt declines, so sibling alternatives
//! always start from the same position with the same recorded output.
//!
//! Lexical errors from the scanner are queued per line. The first time the
//! cursor reaches a token on such a line, the queued errors are reported as
//! parse errors ahead of any grammar attempt on that line.

use std::{
    collections::{BTreeMap, HashSet, VecDeque},
    fmt::Display,
};

use crate::{
    errors::errors::{ErrorImpl, LexicalError, ParseError},
    lexer::tokens::{Token, TokenKind},
};

use super::lookups::{RuleAttempt, TOP_LEVEL_RULES};

/// How many lexical errors of a single line are reported by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LexicalErrorPolicy {
    /// Every lexical error becomes its own parse error.
    #[default]
    All,
    /// Only the first lexical error recorded on a line is reported.
    FirstPerLine,
}

/// Names of the grammar productions reported in parser output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Comment,
    IncludeCommand,
    FunDeclaration,
    VarDeclaration,
    IterationStmt,
    SelectionStmt,
    JumpStmt,
    ExpressionStmt,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Comment => "comment",
            Rule::IncludeCommand => "include-command",
            Rule::FunDeclaration => "fun-declaration",
            Rule::VarDeclaration => "var-declaration",
            Rule::IterationStmt => "iteration-stmt",
            Rule::SelectionStmt => "selection-stmt",
            Rule::JumpStmt => "jump-stmt",
            Rule::ExpressionStmt => "expression-stmt",
        }
    }
}

impl Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchedRule {
    pub line: u32,
    pub rule: Rule,
}

impl Display for MatchedRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line: {} Matched Rule: {}", self.line, self.rule)
    }
}

/// Everything an attempt may change, captured as lengths and a cursor.
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    pos: usize,
    rules: usize,
    errors: usize,
    forwarded: usize,
}

pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Current position in the token stream
    pos: usize,
    /// Lexical errors not yet reported, keyed by line
    pending: BTreeMap<u32, VecDeque<String>>,
    /// Queues already reported, in reporting order, kept so a rollback can requeue them
    forwarded: Vec<(u32, VecDeque<String>)>,
    rules: Vec<MatchedRule>,
    errors: Vec<ParseError>,
    /// Blocks that ran out of tokens before their `}`, keyed by the position
    /// of the `{` and whether that line's lexical errors were already forwarded.
    /// Never rolled back: the same start always fails the same way.
    unclosed_blocks: HashSet<(usize, bool)>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>, lexical_errors: &[LexicalError]) -> Self {
        Parser::with_policy(tokens, lexical_errors, LexicalErrorPolicy::default())
    }

    pub fn with_policy(
        tokens: Vec<Token>,
        lexical_errors: &[LexicalError],
        policy: LexicalErrorPolicy,
    ) -> Self {
        let mut pending: BTreeMap<u32, VecDeque<String>> = BTreeMap::new();
        for error in lexical_errors {
            let queue = pending.entry(error.line).or_default();
            if policy == LexicalErrorPolicy::All || queue.is_empty() {
                queue.push_back(error.text.clone());
            }
        }

        Parser {
            tokens,
            pos: 0,
            pending,
            forwarded: vec![],
            rules: vec![],
            errors: vec![],
            unclosed_blocks: HashSet::new(),
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    pub fn current_token_kind(&self) -> Option<TokenKind> {
        self.current_token().map(|token| token.kind)
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_token_kind() == Some(kind)
    }

    /// Advances to the next token and returns the one just passed.
    pub fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    /// Consumes the current token if it has the given kind.
    pub fn eat(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consumes the current token if both its kind and its text match.
    pub fn eat_value(&mut self, kind: TokenKind, value: &str) -> bool {
        match self.current_token() {
            Some(token) if token.kind == kind && token.value == value => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    pub fn has_tokens(&self) -> bool {
        self.pos < self.tokens.len()
    }

    pub fn get_position(&self) -> usize {
        self.pos
    }

    pub fn set_position(&mut self, pos: usize) {
        self.pos = pos.min(self.tokens.len());
    }

    pub fn matched_rules(&self) -> &[MatchedRule] {
        &self.rules
    }

    pub fn errors(&self) -> &[ParseError] {
        &self.errors
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            pos: self.pos,
            rules: self.rules.len(),
            errors: self.errors.len(),
            forwarded: self.forwarded.len(),
        }
    }

    pub fn restore(&mut self, checkpoint: Checkpoint) {
        self.pos = checkpoint.pos;
        self.rules.truncate(checkpoint.rules);
        self.errors.truncate(checkpoint.errors);

        while self.forwarded.len() > checkpoint.forwarded {
            if let Some((line, queue)) = self.forwarded.pop() {
                self.pending.insert(line, queue);
            }
        }
    }

    /// Runs `rule`, undoing everything it did if it returns false.
    pub fn attempt<F>(&mut self, rule: F) -> bool
    where
        F: FnOnce(&mut Parser) -> bool,
    {
        let checkpoint = self.checkpoint();

        if rule(self) {
            true
        } else {
            self.restore(checkpoint);
            false
        }
    }

    pub fn record_rule(&mut self, line: u32, rule: Rule) {
        self.rules.push(MatchedRule { line, rule });
    }

    pub fn record_error(&mut self, error: ErrorImpl, line: u32) {
        self.errors.push(ParseError::new(error, line));
    }

    /// Tries each entry in order and records the first one that matches.
    pub fn run_rules(&mut self, rules: &[RuleAttempt]) -> bool {
        let line = match self.current_token() {
            Some(token) => token.line,
            None => return false,
        };

        for entry in rules {
            if (entry.handler)(self) {
                self.record_rule(line, entry.rule);
                return true;
            }
        }

        false
    }

    /// Reports the queued lexical errors of the current line and skips one token.
    ///
    /// Returns false when the current line has nothing queued.
    pub fn forward_lexical_errors(&mut self) -> bool {
        let line = match self.current_token() {
            Some(token) => token.line,
            None => return false,
        };

        let queue = match self.pending.remove(&line) {
            Some(queue) => queue,
            None => return false,
        };

        for text in queue.iter() {
            self.record_error(ErrorImpl::InvalidIdentifier { text: text.clone() }, line);
        }
        self.forwarded.push((line, queue));
        self.advance();

        true
    }

    /// Skips the current token, reporting it unless its line already carries lexical errors.
    pub fn skip_unexpected(&mut self) {
        if let Some(token) = self.current_token().cloned() {
            if !self.is_suppressed(token.line) {
                self.record_error(ErrorImpl::UnexpectedToken { token: token.value }, token.line);
            }
            self.advance();
        }
    }

    fn is_suppressed(&self, line: u32) -> bool {
        self.forwarded.iter().any(|(forwarded, _)| *forwarded == line)
    }

    // Only the block's own first line can already be forwarded when it starts,
    // so that flag is all the outside state the block's outcome depends on.
    fn block_key(&self, pos: usize) -> (usize, bool) {
        let forwarded = self
            .tokens
            .get(pos)
            .is_some_and(|token| self.is_suppressed(token.line));

        (pos, forwarded)
    }

    /// Whether a block starting at `pos` is already known to reach the end of
    /// input without closing.
    pub fn is_unclosed_block(&self, pos: usize) -> bool {
        self.unclosed_blocks.contains(&self.block_key(pos))
    }

    pub fn mark_unclosed_block(&mut self, pos: usize) {
        let key = self.block_key(pos);
        self.unclosed_blocks.insert(key);
    }

    fn flush_lexical_errors(&mut self) {
        let pending = std::mem::take(&mut self.pending);

        for (line, queue) in pending {
            for text in queue {
                self.record_error(ErrorImpl::InvalidIdentifier { text }, line);
            }
        }
    }

    fn parse_program(&mut self) {
        while let Some(token) = self.current_token() {
            if token.is(TokenKind::CloseCurly) {
                self.advance();
                continue;
            }

            if self.forward_lexical_errors() {
                continue;
            }

            if self.run_rules(TOP_LEVEL_RULES) {
                continue;
            }

            self.skip_unexpected();
        }
    }

    /// Runs the program loop to the end of the tokens.
    ///
    /// Both returned lists are ordered by line; records on the same line keep
    /// the order in which they were produced.
    pub fn parse(mut self) -> (Vec<MatchedRule>, Vec<ParseError>) {
        self.parse_program();
        self.flush_lexical_errors();

        let mut rules = self.rules;
        let mut errors = self.errors;
        rules.sort_by_key(|rule| rule.line);
        errors.sort_by_key(|error| error.get_line());

        (rules, errors)
    }
}

/// Parses a token stream, merging in the scanner's lexical errors.
///
/// # Returns
///
/// A tuple containing:
/// - The matched grammar rules, ordered by line
/// - The parse errors, ordered by line
pub fn parse(
    tokens: Vec<Token>,
    lexical_errors: &[LexicalError],
) -> (Vec<MatchedRule>, Vec<ParseError>) {
    Parser::new(tokens, lexical_errors).parse()
}
