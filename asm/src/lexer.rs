//! Source → token stream.
//!
//! The lexer drives a character stream with one-character lookahead and
//! appends into a single token vector, so several files can be lexed into
//! one stream. Include files are deduplicated by canonical path:
//! re-lexing a path that already entered the stream is a successful no-op.

use std::fmt;
use std::iter::Peekable;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::str::Chars;

use crate::keyword;
use crate::token::{Token, TokenKind};

/// Hard cap on the stored text of a single token.
const TOKEN_MAX_LEN: usize = 64;

/// A lexing failure, naming the source position it occurred at.
#[derive(Debug)]
pub struct LexError {
    pub message: String,
    pub file: PathBuf,
    pub line: usize,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: {}",
            self.file.display(),
            self.line,
            self.message
        )
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    tokens: Vec<Token>,
    includes: Vec<Rc<Path>>,
    file: Rc<Path>,
    line: usize,
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer {
    pub fn new() -> Self {
        Self {
            tokens: Vec::new(),
            includes: Vec::new(),
            file: Rc::from(Path::new("<input>")),
            line: 1,
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// The canonical paths of every file that entered the stream so far.
    pub fn include_files(&self) -> &[Rc<Path>] {
        &self.includes
    }

    /// Tokenize a source file. The path is canonicalized first; a path
    /// already present in the include set is a successful no-op, so a
    /// file can never enter the stream twice however it is spelled.
    pub fn lex_file(&mut self, path: &Path) -> Result<(), LexError> {
        let canonical = std::fs::canonicalize(path).map_err(|e| LexError {
            message: format!("failed to resolve include file '{}': {e}", path.display()),
            file: path.to_path_buf(),
            line: 0,
        })?;

        if self.includes.iter().any(|seen| **seen == *canonical) {
            return Ok(());
        }

        let canonical: Rc<Path> = Rc::from(canonical.as_path());
        self.includes.push(canonical.clone());

        let text = std::fs::read_to_string(&*canonical).map_err(|e| LexError {
            message: format!("failed to open file '{}': {e}", path.display()),
            file: path.to_path_buf(),
            line: 0,
        })?;

        self.scan(&text, canonical)
    }

    /// Tokenize in-memory source under a synthetic label, bypassing the
    /// include set.
    pub fn lex_source(&mut self, text: &str, label: &Path) -> Result<(), LexError> {
        self.scan(text, Rc::from(label))
    }

    // ---- Scanning ----

    fn scan(&mut self, text: &str, file: Rc<Path>) -> Result<(), LexError> {
        self.file = file;
        self.line = 1;

        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\n' => {
                    self.emit_eol();
                    self.line += 1;
                }
                c if c.is_whitespace() => {}
                '/' => self.collect_slash(&mut chars),
                c if c.is_ascii_alphabetic() || c == '_' => {
                    self.collect_identifier(c, &mut chars)?
                }
                '"' => self.collect_string(&mut chars)?,
                '\'' => self.collect_character(&mut chars)?,
                '@' => self.collect_placeholder(&mut chars)?,
                c if c.is_ascii_digit() => self.collect_number(c, &mut chars)?,
                c => self.collect_symbol(c, &mut chars)?,
            }
        }

        self.push(TokenKind::Eof, String::new());
        Ok(())
    }

    /// `/` starts a line comment, a block comment, `/=` or plain
    /// division.
    fn collect_slash(&mut self, chars: &mut Peekable<Chars>) {
        match chars.peek() {
            Some('/') => {
                // Line comment: leave the newline for the main loop.
                while let Some(&next) = chars.peek() {
                    if next == '\n' {
                        break;
                    }
                    chars.next();
                }
            }
            Some('*') => {
                chars.next();
                // Block comment, terminated by the first `*/`. Lines are
                // still counted so diagnostics after the comment stay
                // accurate.
                while let Some(inner) = chars.next() {
                    match inner {
                        '\n' => self.line += 1,
                        '*' => {
                            if chars.peek() == Some(&'/') {
                                chars.next();
                                break;
                            }
                        }
                        _ => {}
                    }
                }
            }
            Some('=') => {
                chars.next();
                self.push(TokenKind::DivAssign, String::new());
            }
            _ => self.push(TokenKind::Divide, String::new()),
        }
    }

    fn collect_identifier(
        &mut self,
        first: char,
        chars: &mut Peekable<Chars>,
    ) -> Result<(), LexError> {
        let mut text = String::new();
        text.push(first);

        while let Some(&next) = chars.peek() {
            if next.is_ascii_alphanumeric() || next == '_' {
                if text.len() >= TOKEN_MAX_LEN {
                    return Err(self.error("identifier token is too long"));
                }
                text.push(next);
                chars.next();
            } else {
                break;
            }
        }

        // Keywords are matched case-blind and stored lower-cased;
        // identifiers keep their original casing.
        let lowered = text.to_ascii_lowercase();
        if keyword::lookup(&lowered).is_some() {
            self.push(TokenKind::Keyword, lowered);
        } else {
            self.push(TokenKind::Identifier, text);
        }
        Ok(())
    }

    /// String literals store their raw text; escape sequences are not
    /// processed inside `"…"`.
    fn collect_string(&mut self, chars: &mut Peekable<Chars>) -> Result<(), LexError> {
        let mut text = String::new();
        loop {
            match chars.next() {
                None => return Err(self.error("unexpected end of file in string literal")),
                Some('"') => break,
                Some(c) => {
                    if text.len() >= TOKEN_MAX_LEN {
                        return Err(self.error("string token is too long"));
                    }
                    text.push(c);
                }
            }
        }

        self.push(TokenKind::String, text);
        Ok(())
    }

    /// Character literals permit one backslash escape and store the
    /// decoded character.
    fn collect_character(&mut self, chars: &mut Peekable<Chars>) -> Result<(), LexError> {
        let value = match chars.next() {
            None => return Err(self.error("unexpected end of file in character literal")),
            Some('\'') => return Err(self.error("empty character literal")),
            Some('\\') => match chars.next() {
                None => {
                    return Err(self.error("unexpected end of file in escaped character literal"));
                }
                Some(escape) => decode_escape(escape),
            },
            Some(c) => c,
        };

        match chars.next() {
            Some('\'') => {
                self.push(TokenKind::Character, value.to_string());
                Ok(())
            }
            Some(_) => Err(self.error("character token is too long")),
            None => Err(self.error("unexpected end of file in character literal")),
        }
    }

    /// Placeholder literals are `@` followed by a decimal position.
    fn collect_placeholder(&mut self, chars: &mut Peekable<Chars>) -> Result<(), LexError> {
        let mut text = String::new();
        while let Some(&next) = chars.peek() {
            if next.is_ascii_digit() {
                text.push(next);
                chars.next();
            } else {
                break;
            }
        }

        if text.is_empty() {
            return Err(self.error("expected a digit after '@' in placeholder literal"));
        }

        self.push(TokenKind::Placeholder, text);
        Ok(())
    }

    fn collect_number(&mut self, first: char, chars: &mut Peekable<Chars>) -> Result<(), LexError> {
        if first == '0' {
            match chars.peek() {
                Some('b' | 'B') => {
                    chars.next();
                    return self.collect_radix(chars, TokenKind::Binary, |c| {
                        matches!(c, '0' | '1')
                    });
                }
                Some('o' | 'O') => {
                    chars.next();
                    return self.collect_radix(chars, TokenKind::Octal, |c| {
                        c.is_ascii_digit() && c < '8'
                    });
                }
                Some('x' | 'X') => {
                    chars.next();
                    return self.collect_radix(chars, TokenKind::Hexadecimal, |c| {
                        c.is_ascii_hexdigit()
                    });
                }
                _ => {}
            }
        }

        // Decimal, with at most one '.' accepted into the token.
        let mut text = String::new();
        text.push(first);
        let mut seen_point = false;

        while let Some(&next) = chars.peek() {
            if next == '.' {
                if seen_point {
                    break;
                }
                seen_point = true;
            } else if !next.is_ascii_digit() {
                break;
            }

            if text.len() >= TOKEN_MAX_LEN {
                return Err(self.error("number token is too long"));
            }
            text.push(next);
            chars.next();
        }

        self.push(TokenKind::Number, text);
        Ok(())
    }

    /// Collect the digits of a prefixed literal; the `0b`/`0o`/`0x`
    /// prefix itself is not stored.
    fn collect_radix(
        &mut self,
        chars: &mut Peekable<Chars>,
        kind: TokenKind,
        accepts: fn(char) -> bool,
    ) -> Result<(), LexError> {
        let mut text = String::new();
        while let Some(&next) = chars.peek() {
            if !accepts(next) {
                break;
            }
            if text.len() >= TOKEN_MAX_LEN {
                return Err(self.error("number token is too long"));
            }
            text.push(next);
            chars.next();
        }

        if text.is_empty() {
            return Err(self.error("missing digits after numeric base prefix"));
        }

        self.push(kind, text);
        Ok(())
    }

    /// Operators and punctuation, longest match first.
    fn collect_symbol(&mut self, first: char, chars: &mut Peekable<Chars>) -> Result<(), LexError> {
        let kind = match first {
            '+' => self.either(chars, '=', TokenKind::AddAssign, TokenKind::Add),
            '-' => self.either(chars, '=', TokenKind::SubAssign, TokenKind::Subtract),
            '*' => {
                if self.take(chars, '=') {
                    TokenKind::MulAssign
                } else if self.take(chars, '*') {
                    self.either(chars, '=', TokenKind::ExpAssign, TokenKind::Exponent)
                } else {
                    TokenKind::Multiply
                }
            }
            '%' => self.either(chars, '=', TokenKind::ModAssign, TokenKind::Modulo),
            '&' => {
                if self.take(chars, '=') {
                    TokenKind::AndAssign
                } else if self.take(chars, '&') {
                    TokenKind::LogicalAnd
                } else {
                    TokenKind::BitwiseAnd
                }
            }
            '|' => {
                if self.take(chars, '=') {
                    TokenKind::OrAssign
                } else if self.take(chars, '|') {
                    TokenKind::LogicalOr
                } else {
                    TokenKind::BitwiseOr
                }
            }
            '^' => self.either(chars, '=', TokenKind::XorAssign, TokenKind::BitwiseXor),
            '~' => TokenKind::BitwiseNot,
            '<' => {
                if self.take(chars, '=') {
                    TokenKind::LessEqual
                } else if self.take(chars, '<') {
                    self.either(chars, '=', TokenKind::LshiftAssign, TokenKind::BitwiseLshift)
                } else {
                    TokenKind::Less
                }
            }
            '>' => {
                if self.take(chars, '=') {
                    TokenKind::GreaterEqual
                } else if self.take(chars, '>') {
                    self.either(chars, '=', TokenKind::RshiftAssign, TokenKind::BitwiseRshift)
                } else {
                    TokenKind::Greater
                }
            }
            '=' => {
                if self.take(chars, '=') {
                    TokenKind::Equal
                } else if self.take(chars, '>') {
                    TokenKind::Arrow
                } else {
                    TokenKind::Assign
                }
            }
            '!' => self.either(chars, '=', TokenKind::NotEqual, TokenKind::LogicalNot),
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Period,
            '?' => TokenKind::Question,
            '(' => TokenKind::OpenParen,
            ')' => TokenKind::CloseParen,
            '[' => TokenKind::OpenBracket,
            ']' => TokenKind::CloseBracket,
            '{' => TokenKind::OpenBrace,
            '}' => TokenKind::CloseBrace,
            c => return Err(self.error(&format!("unexpected symbol '{c}'"))),
        };

        self.push(kind, String::new());
        Ok(())
    }

    // ---- Helpers ----

    fn take(&mut self, chars: &mut Peekable<Chars>, expected: char) -> bool {
        if chars.peek() == Some(&expected) {
            chars.next();
            true
        } else {
            false
        }
    }

    fn either(
        &mut self,
        chars: &mut Peekable<Chars>,
        expected: char,
        matched: TokenKind,
        fallback: TokenKind,
    ) -> TokenKind {
        if self.take(chars, expected) {
            matched
        } else {
            fallback
        }
    }

    fn push(&mut self, kind: TokenKind, text: String) {
        self.tokens.push(Token {
            text,
            kind,
            source_file: self.file.clone(),
            line: self.line,
        });
    }

    /// Emit an EOL unless the stream is empty or already ends in one, so
    /// blank lines and leading newlines leave no trace.
    fn emit_eol(&mut self) {
        match self.tokens.last() {
            Some(last) if last.kind != TokenKind::Eol => self.push(TokenKind::Eol, String::new()),
            _ => {}
        }
    }

    fn error(&self, message: &str) -> LexError {
        LexError {
            message: message.to_string(),
            file: self.file.to_path_buf(),
            line: self.line,
        }
    }
}

fn decode_escape(escape: char) -> char {
    match escape {
        'n' => '\n',
        't' => '\t',
        'r' => '\r',
        '0' => '\0',
        other => other,
    }
}
