use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Exact source slice consumed for this token, quotes and comment
    /// markers included. Concatenating every token's text in scan order
    /// reproduces the input.
    pub text: &'a str,
    /// 1-based line where the token started.
    pub line: u32,
    /// 1-based column where the token started.
    pub column: u32,
}

impl<'a> Token<'a> {
    pub fn new(kind: TokenKind, text: &'a str, line: u32, column: u32) -> Self {
        Self {
            kind,
            text,
            line,
            column,
        }
    }
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "'{}' - {} (Line {}, Column {})",
            self.text, self.kind, self.line, self.column
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Keyword,
    Ident,
    Number,
    Str,
    Operator,
    Delimiter,
    Comment,
    Whitespace,
    Unknown,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Ident => "IDENTIFIER",
            TokenKind::Number => "NUMBER",
            TokenKind::Str => "STRING",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Comment => "COMMENT",
            TokenKind::Whitespace => "WHITESPACE",
            TokenKind::Unknown => "UNKNOWN",
        };
        write!(f, "{label}")
    }
}
