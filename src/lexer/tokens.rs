use lazy_static::lazy_static;
use regex::Regex;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("IfTrue-Otherwise", TokenKind::Condition);
        map.insert("IfTrue", TokenKind::If);
        map.insert("Otherwise", TokenKind::Else);
        map.insert("Imw", TokenKind::Integer);
        map.insert("SIMw", TokenKind::SInteger);
        map.insert("Chj", TokenKind::Character);
        map.insert("Series", TokenKind::String);
        map.insert("IMwf", TokenKind::Float);
        map.insert("SIMwf", TokenKind::SFloat);
        map.insert("NOReturn", TokenKind::Void);
        map.insert("RepeatWhen", TokenKind::Loop);
        map.insert("Reiterate", TokenKind::Loop);
        map.insert("Turnback", TokenKind::Return);
        map.insert("OutLoop", TokenKind::Break);
        map.insert("Stop", TokenKind::Break);
        map.insert("Loli", TokenKind::Struct);
        map.insert("include", TokenKind::Include);
        map.insert("int", TokenKind::Type);
        map
    };

    pub static ref SYMBOL_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("+", TokenKind::Plus);
        map.insert("-", TokenKind::Minus);
        map.insert("*", TokenKind::Mult);
        map.insert("/", TokenKind::Div);
        map.insert("=", TokenKind::Assignment);
        map.insert("==", TokenKind::Equal);
        map.insert("!=", TokenKind::NotEqual);
        map.insert("<", TokenKind::Less);
        map.insert("<=", TokenKind::LessEquals);
        map.insert(">", TokenKind::Greater);
        map.insert(">=", TokenKind::GreaterEquals);
        map.insert("&&", TokenKind::And);
        map.insert("||", TokenKind::Or);
        map.insert("~", TokenKind::Not);
        map.insert("(", TokenKind::OpenParen);
        map.insert(")", TokenKind::CloseParen);
        map.insert("{", TokenKind::OpenCurly);
        map.insert("}", TokenKind::CloseCurly);
        map.insert("[", TokenKind::OpenBracket);
        map.insert("]", TokenKind::CloseBracket);
        map.insert(";", TokenKind::Semicolon);
        map.insert(":", TokenKind::Colon);
        map.insert(",", TokenKind::Comma);
        map.insert("->", TokenKind::Arrow);
        map
    };

    /// Alternation over every symbol, longest spelling first, so `<=` wins over `<`.
    pub static ref SYMBOL_REGEX: Regex = {
        let mut symbols: Vec<&str> = SYMBOL_LOOKUP.keys().copied().collect();
        symbols.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));

        let alternation = symbols
            .iter()
            .map(|symbol| regex::escape(symbol))
            .collect::<Vec<String>>()
            .join("|");

        Regex::new(&format!("^(?:{})", alternation)).unwrap()
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    IntegerConstant,
    FloatConstant,
    StringLiteral,
    CharLiteral,
    Identifier,

    CommentStart,
    CommentContent,
    CommentEnd,

    Plus,
    Minus,
    Mult,
    Div,

    Assignment, // =
    Equal,      // ==
    NotEqual,   // !=

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    And,
    Or,
    Not, // ~

    OpenParen,
    CloseParen,
    OpenCurly,
    CloseCurly,
    OpenBracket,
    CloseBracket,

    Semicolon,
    Colon,
    Comma,
    Arrow, // ->

    // Reserved
    Condition,
    If,
    Else,
    Integer,
    SInteger,
    Character,
    String,
    Float,
    SFloat,
    Void,
    Loop,
    Return,
    Break,
    Struct,
    Include,
    Type,
}

impl TokenKind {
    /// Category name shown in scanner reports.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::IntegerConstant => "Constant",
            TokenKind::FloatConstant => "Float Number",
            TokenKind::StringLiteral => "String Literal",
            TokenKind::CharLiteral => "Character Literal",
            TokenKind::Identifier => "Identifier",
            TokenKind::CommentStart => "Comment Start",
            TokenKind::CommentContent => "Comment Content",
            TokenKind::CommentEnd => "Comment End",
            TokenKind::Plus => "Plus",
            TokenKind::Minus => "Minus",
            TokenKind::Mult => "Mult",
            TokenKind::Div => "Div",
            TokenKind::Assignment => "Assignment operator",
            TokenKind::Equal => "Equal",
            TokenKind::NotEqual => "Not Equal",
            TokenKind::Less => "Less Than",
            TokenKind::LessEquals => "Less Than or Equal",
            TokenKind::Greater => "Greater Than",
            TokenKind::GreaterEquals => "Greater Than or Equal",
            TokenKind::And => "And",
            TokenKind::Or => "Or",
            TokenKind::Not => "Not",
            TokenKind::OpenParen
            | TokenKind::CloseParen
            | TokenKind::OpenCurly
            | TokenKind::CloseCurly
            | TokenKind::OpenBracket
            | TokenKind::CloseBracket => "Braces",
            TokenKind::Semicolon => "Semicolon",
            TokenKind::Colon => "Colon",
            TokenKind::Comma => "Comma",
            TokenKind::Arrow => "Access Operator",
            TokenKind::Condition => "Condition",
            TokenKind::If => "If",
            TokenKind::Else => "Else",
            TokenKind::Integer => "Integer",
            TokenKind::SInteger => "SInteger",
            TokenKind::Character => "Character",
            TokenKind::String => "String",
            TokenKind::Float => "Float",
            TokenKind::SFloat => "SFloat",
            TokenKind::Void => "Void",
            TokenKind::Loop => "Loop",
            TokenKind::Return => "Return",
            TokenKind::Break => "Break",
            TokenKind::Struct => "Struct",
            TokenKind::Include => "Include",
            TokenKind::Type => "Type",
        }
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: u32,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Line: {} Token Text: {} Token Type: {}",
            self.line, self.value, self.kind
        )
    }
}

impl Token {
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
