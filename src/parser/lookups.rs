use crate::lexer::tokens::TokenKind;

use super::{parser::{Parser, Rule}, stmt::*};

/// A grammar attempt: consumes input and returns true, or returns false with nothing consumed.
pub type AttemptHandler = fn(&mut Parser) -> bool;

pub struct RuleAttempt {
    pub rule: Rule,
    pub handler: AttemptHandler,
}

// Order is priority: the first attempt that matches wins.
pub const TOP_LEVEL_RULES: &[RuleAttempt] = &[
    RuleAttempt { rule: Rule::Comment, handler: parse_comment },
    RuleAttempt { rule: Rule::IncludeCommand, handler: parse_include_command },
    RuleAttempt { rule: Rule::FunDeclaration, handler: parse_fun_decl },
    RuleAttempt { rule: Rule::VarDeclaration, handler: parse_var_decl },
];

pub const BLOCK_RULES: &[RuleAttempt] = &[
    RuleAttempt { rule: Rule::Comment, handler: parse_comment },
    RuleAttempt { rule: Rule::VarDeclaration, handler: parse_var_decl },
    RuleAttempt { rule: Rule::IterationStmt, handler: parse_iteration_stmt },
    RuleAttempt { rule: Rule::SelectionStmt, handler: parse_selection_stmt },
    RuleAttempt { rule: Rule::JumpStmt, handler: parse_jump_stmt },
    RuleAttempt { rule: Rule::ExpressionStmt, handler: parse_expression_stmt },
];

// Relational and logical operators share one level and never chain
pub const RELATIONAL_OPERATORS: &[TokenKind] = &[
    TokenKind::Less,
    TokenKind::LessEquals,
    TokenKind::Greater,
    TokenKind::GreaterEquals,
    TokenKind::Equal,
    TokenKind::NotEqual,
    TokenKind::And,
    TokenKind::Or,
];

pub const ADDITIVE_OPERATORS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];

pub const MULTIPLICATIVE_OPERATORS: &[TokenKind] = &[TokenKind::Mult, TokenKind::Div];

pub const SIGNS: &[TokenKind] = &[TokenKind::Plus, TokenKind::Minus];
