use std::str::Chars;

#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    src: &'a str,
    chars: Chars<'a>,
    line: u32,
    column: u32,
}

pub const EOF: char = '\0';

impl<'a> Cursor<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            chars: src.chars(),
            line: 1,
            column: 1,
        }
    }

    pub fn first(&self) -> char {
        self.chars.clone().next().unwrap_or(EOF)
    }

    pub fn second(&self) -> char {
        let mut chars = self.chars.clone();
        chars.next();
        chars.next().unwrap_or(EOF)
    }

    pub fn is_eof(&self) -> bool {
        self.chars.as_str().is_empty()
    }

    /// Byte offset of the next unconsumed character.
    pub fn pos(&self) -> usize {
        self.src.len() - self.chars.as_str().len()
    }

    /// 1-based line of the next unconsumed character.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// 1-based column of the next unconsumed character.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Consumes one character. The column resets to 1 and the line
    /// increments exactly when the consumed character is a newline.
    pub fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    pub fn eat_while(&mut self, mut predicate: impl FnMut(char) -> bool) {
        while predicate(self.first()) && !self.is_eof() {
            self.bump();
        }
    }
}
