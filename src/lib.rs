#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{LexicalError, ParseError},
    lexer::{lexer::tokenize, tokens::Token},
    parser::parser::{LexicalErrorPolicy, MatchedRule, Parser},
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod report;

extern crate regex;

/// Output of both stages for one source text.
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    pub lexical_errors: Vec<LexicalError>,
    /// `None` when the scanner produced no tokens and the parser was not run.
    pub parsed: Option<(Vec<MatchedRule>, Vec<ParseError>)>,
}

/// Scans `source`, then parses the tokens if there are any.
pub fn analyze(source: &str, policy: LexicalErrorPolicy) -> Analysis {
    let (tokens, lexical_errors) = tokenize(source);

    let parsed = if tokens.is_empty() {
        None
    } else {
        Some(Parser::with_policy(tokens.clone(), &lexical_errors, policy).parse())
    };

    Analysis {
        tokens,
        lexical_errors,
        parsed,
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parser::LexicalErrorPolicy;

    #[test]
    fn test_analyze_runs_both_stages() {
        let analysis = super::analyze("Imw x ;", LexicalErrorPolicy::All);

        assert_eq!(analysis.tokens.len(), 3);
        let (rules, errors) = analysis.parsed.unwrap();
        assert_eq!(rules.len(), 1);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_analyze_skips_parser_without_tokens() {
        let analysis = super::analyze("  \n/@", LexicalErrorPolicy::All);

        assert_eq!(analysis.tokens.len(), 1);
        assert!(analysis.parsed.is_some());

        let analysis = super::analyze("\n\n", LexicalErrorPolicy::All);
        assert!(analysis.tokens.is_empty());
        assert!(analysis.parsed.is_none());
    }
}
