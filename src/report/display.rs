//! Plain-text reports for the two stages, one record per line.

use crate::{
    errors::errors::{LexicalError, ParseError},
    lexer::tokens::Token,
    parser::parser::MatchedRule,
};

const SEPARATOR_WIDTH: usize = 30;

pub fn render_scan(tokens: &[Token], errors: &[LexicalError]) -> String {
    let mut lines = vec![String::from("Scanner Output:")];

    lines.extend(tokens.iter().map(Token::to_string));
    lines.extend(errors.iter().map(LexicalError::to_string));
    lines.push(format!("Total errors: {}", errors.len()));
    lines.push("-".repeat(SEPARATOR_WIDTH));

    lines.join("\n") + "\n"
}

pub fn render_parse(rules: &[MatchedRule], errors: &[ParseError]) -> String {
    let mut lines = vec![String::from("Parser Phase Output:")];

    lines.extend(rules.iter().map(MatchedRule::to_string));
    lines.extend(errors.iter().map(ParseError::to_string));
    lines.push(String::new());
    lines.push(format!("Total Errors: {}", errors.len()));

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use crate::{lexer::lexer::tokenize, parser::parser::parse};

    use super::{render_parse, render_scan};

    #[test]
    fn test_render_scan() {
        let (tokens, errors) = tokenize("Imw 1x;");
        let report = render_scan(&tokens, &errors);

        assert_eq!(
            report,
            "Scanner Output:\n\
             Line: 1 Token Text: Imw Token Type: Integer\n\
             Line: 1 Token Text: ; Token Type: Semicolon\n\
             Line: 1 Error in Token Text: 1x Token Type: Invalid Identifier\n\
             Total errors: 1\n\
             ------------------------------\n"
        );
    }

    #[test]
    fn test_render_parse() {
        let (tokens, errors) = tokenize("Imw x;\nfoo");
        let (rules, errors) = parse(tokens, &errors);
        let report = render_parse(&rules, &errors);

        assert_eq!(
            report,
            "Parser Phase Output:\n\
             Line: 1 Matched Rule: var-declaration\n\
             Line: 2 Error: Unexpected token \"foo\"\n\
             \n\
             Total Errors: 1\n"
        );
    }

    #[test]
    fn test_render_empty() {
        assert!(render_scan(&[], &[]).contains("Total errors: 0"));
        assert!(render_parse(&[], &[]).ends_with("Total Errors: 0\n"));
    }
}
