pub mod cursor;
pub mod keywords;
pub mod tokens;

use cursor::Cursor;
use keywords::KeywordSet;
use tokens::{Token, TokenKind};

use phf::{phf_set, Set};

/// Two-character operators, matched greedily before the single-character
/// fallback. No operator is longer than two characters.
static COMPOUND_OPERATORS: Set<&'static str> = phf_set! {
    "++", "--", "==", "!=", "<=", ">=", "&&", "||", "+=", "-=", "*=", "/=",
};

pub fn tokenize<'a>(
    input: &'a str,
    keywords: &'a KeywordSet,
) -> impl Iterator<Item = Token<'a>> + 'a {
    let mut lexer = Lexer::new(input, keywords);
    std::iter::from_fn(move || lexer.next_token())
}

#[derive(Debug)]
pub struct Lexer<'a> {
    src: &'a str,
    cursor: Cursor<'a>,
    keywords: &'a KeywordSet,
}

impl<'a> Lexer<'a> {
    pub fn new(src: &'a str, keywords: &'a KeywordSet) -> Self {
        Self {
            src,
            cursor: Cursor::new(src),
            keywords,
        }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    /// Never fails: every character of the input ends up in exactly one
    /// token, malformed constructs included (they come back as `Unknown`).
    pub fn next_token(&mut self) -> Option<Token<'a>> {
        if self.cursor.is_eof() {
            return None;
        }

        let start = self.cursor.pos();
        let line = self.cursor.line();
        let column = self.cursor.column();

        let kind = match self.cursor.first() {
            c if c.is_whitespace() => self.whitespace(),

            c if is_ident_start(c) => self.ident(start),

            '0'..='9' => self.number(),

            '"' | '\'' => self.string(),

            '/' if matches!(self.cursor.second(), '/' | '*') => self.comment(),

            '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '&' | '|' | '%' | '^' => {
                self.operator()
            }

            ';' | ',' | '.' | '(' | ')' | '[' | ']' | '{' | '}' | ':' => self.delimiter(),

            _ => {
                self.cursor.bump();
                TokenKind::Unknown
            }
        };

        let text = &self.src[start..self.cursor.pos()];
        Some(Token::new(kind, text, line, column))
    }

    pub fn scan_all(mut self) -> Vec<Token<'a>> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn whitespace(&mut self) -> TokenKind {
        self.cursor.eat_while(char::is_whitespace);
        TokenKind::Whitespace
    }

    fn ident(&mut self, start: usize) -> TokenKind {
        self.cursor.eat_while(is_ident_continue);
        if self.keywords.contains(&self.src[start..self.cursor.pos()]) {
            TokenKind::Keyword
        } else {
            TokenKind::Ident
        }
    }

    /// At most one decimal point; a second `.` ends the run and is left for
    /// the next dispatch. A run may legally end in a trailing `.` since the
    /// point is not required to be followed by a digit.
    fn number(&mut self) -> TokenKind {
        let mut seen_dot = false;
        loop {
            match self.cursor.first() {
                '0'..='9' => {
                    self.cursor.bump();
                }
                '.' if !seen_dot => {
                    seen_dot = true;
                    self.cursor.bump();
                }
                _ => break,
            }
        }
        TokenKind::Number
    }

    /// Either quote closes a string, regardless of which one opened it.
    /// An unterminated string comes back as `Unknown` with the partial text.
    fn string(&mut self) -> TokenKind {
        self.cursor.bump();

        loop {
            if self.cursor.is_eof() {
                return TokenKind::Unknown;
            }
            match self.cursor.first() {
                '"' | '\'' => {
                    self.cursor.bump();
                    return TokenKind::Str;
                }
                '\\' if matches!(self.cursor.second(), '"' | '\'') => {
                    self.cursor.bump();
                    self.cursor.bump();
                }
                _ => {
                    self.cursor.bump();
                }
            }
        }
    }

    /// Line comments stop before the newline. Block comments consume the
    /// closing `*/`; an unterminated block comment still counts as a
    /// comment, unlike an unterminated string.
    fn comment(&mut self) -> TokenKind {
        self.cursor.bump();
        if self.cursor.first() == '/' {
            self.cursor.bump();
            self.cursor.eat_while(|c| c != '\n');
        } else {
            self.cursor.bump();
            loop {
                if self.cursor.is_eof() {
                    break;
                }
                if self.cursor.first() == '*' && self.cursor.second() == '/' {
                    self.cursor.bump();
                    self.cursor.bump();
                    break;
                }
                self.cursor.bump();
            }
        }
        TokenKind::Comment
    }

    fn operator(&mut self) -> TokenKind {
        let mut pair = String::with_capacity(2);
        pair.push(self.cursor.first());
        pair.push(self.cursor.second());
        if COMPOUND_OPERATORS.contains(pair.as_str()) {
            self.cursor.bump();
        }
        self.cursor.bump();
        TokenKind::Operator
    }

    fn delimiter(&mut self) -> TokenKind {
        self.cursor.bump();
        TokenKind::Delimiter
    }
}

pub fn is_ident_start(c: char) -> bool {
    c == '_' || unicode_ident::is_xid_start(c)
}

pub fn is_ident_continue(c: char) -> bool {
    unicode_ident::is_xid_continue(c)
}
