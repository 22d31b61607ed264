use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::{
    errors::errors::{LexError, LexErrorImpl},
    MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer) -> Token;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

/// Characters skipped after an illegal character or a malformed exponent.
const ERROR_SKIP_WIDTH: usize = 2;

lazy_static! {
    static ref IDENTIFIER_PATTERN: Regex = Regex::new(r"^[\p{L}_][\p{L}\p{N}_]*").unwrap();

    // Two-character operators come first so `<=` is never read as `<` `=`.
    static ref OPERATOR_PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign, ":=")},
        RegexPattern { regex: Regex::new("^\\*\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Raise, "**")},
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LTEqual, "<=")},
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GTEqual, ">=")},
        RegexPattern { regex: Regex::new("^!=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::NotEqual, "!=")},
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon, ";")},
        RegexPattern { regex: Regex::new("^:").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Colon, ":")},
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma, ",")},
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LeftParen, "(")},
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RightParen, ")")},
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")},
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Minus, "-")},
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Multiply, "*")},
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Divide, "/")},
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessThan, "<")},
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equal, "=")},
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterThan, ">")},
    ];
}

/// Character-level scanner for SimpCalc source text.
///
/// Each call to [`Lexer::next_token`] either yields the next token or a
/// recoverable [`LexError`]; after an error the lexer has already skipped the
/// offending span and the next call carries on from there. Once the input is
/// exhausted every call returns an `EndofFile` token.
pub struct Lexer {
    source: String,
    /// Byte offset of the cursor, always on a char boundary
    pos: usize,
    line: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(source: impl Into<String>) -> Lexer {
        Lexer {
            source: source.into(),
            pos: 0,
            line: 1,
            finished: false,
        }
    }

    pub fn line(&self) -> usize {
        self.line
    }

    /// Moves the cursor forward by `n` characters, stopping at end of input.
    /// Newlines stepped over here do not count towards the line number.
    pub fn advance_n(&mut self, n: usize) {
        for _ in 0..n {
            match self.at() {
                Some(c) => self.pos += c.len_utf8(),
                None => break,
            }
        }
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    fn peek_nth(&self, n: usize) -> Option<char> {
        self.remainder().chars().nth(n)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        while let Some(c) = self.at() {
            if c.is_whitespace() {
                if c == '\n' {
                    self.line += 1;
                }
                self.advance_n(1);
                continue;
            }

            if self.remainder().starts_with("//") {
                self.skip_comment();
                continue;
            }

            if c == '"' {
                return self.lex_string();
            }

            if let Some(matched) = IDENTIFIER_PATTERN.find(self.remainder()) {
                let lexeme = matched.as_str().to_string();
                return Ok(self.lex_symbol(lexeme));
            }

            if c.is_ascii_digit() {
                return self.lex_number();
            }

            if c == '.' {
                self.advance_n(1);
                return Err(self.error(LexErrorImpl::IllegalCharacter {
                    sequence: String::from("."),
                }));
            }

            for pattern in OPERATOR_PATTERNS.iter() {
                if pattern.regex.is_match(self.remainder()) {
                    return Ok((pattern.handler)(self));
                }
            }

            let sequence = self.remainder().chars().take(ERROR_SKIP_WIDTH).collect();
            self.advance_n(ERROR_SKIP_WIDTH);
            return Err(self.error(LexErrorImpl::IllegalCharacter { sequence }));
        }

        Ok(MK_TOKEN!(TokenKind::EndofFile, String::new(), self.line))
    }

    fn error(&self, error_impl: LexErrorImpl) -> LexError {
        let error = LexError::new(error_impl, self.line);
        debug!(line = self.line, "{}", error);
        error
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.at() {
            if c == '\n' {
                break;
            }
            self.advance_n(1);
        }
    }

    fn skip_digits(&mut self) {
        while self.at().is_some_and(|c| c.is_ascii_digit()) {
            self.advance_n(1);
        }
    }

    fn lex_symbol(&mut self, lexeme: String) -> Token {
        self.advance_n(lexeme.chars().count());

        if let Some(kind) = RESERVED_LOOKUP.get(lexeme.as_str()) {
            MK_TOKEN!(*kind, lexeme, self.line)
        } else {
            MK_TOKEN!(TokenKind::Identifier, lexeme, self.line)
        }
    }

    fn lex_string(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        self.advance_n(1);

        loop {
            match self.at() {
                Some('"') => {
                    self.advance_n(1);
                    let lexeme = self.source[start..self.pos].to_string();
                    return Ok(MK_TOKEN!(TokenKind::String, lexeme, self.line));
                }
                // Abandon the literal but leave the newline to be scanned.
                Some('\n') => {
                    let literal = self.source[start..self.pos].trim_end().to_string();
                    return Err(self.error(LexErrorImpl::UnterminatedString { literal }));
                }
                Some(_) => self.advance_n(1),
                None => {
                    let sequence = self.source[start..self.pos].to_string();
                    return Err(self.error(LexErrorImpl::IllegalCharacter { sequence }));
                }
            }
        }
    }

    fn lex_number(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        self.skip_digits();

        if self.at() == Some('.') {
            if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) {
                self.advance_n(1);
                self.skip_digits();
            } else {
                self.advance_n(2);
                return Err(self.invalid_number(start));
            }
        }

        if matches!(self.at(), Some('e' | 'E')) {
            let mut offset = 1;
            if matches!(self.peek_nth(offset), Some('+' | '-')) {
                offset += 1;
            }

            if self.peek_nth(offset).is_some_and(|c| c.is_ascii_digit()) {
                self.advance_n(offset);
                self.skip_digits();
            } else {
                if self.peek_nth(offset).is_some_and(|c| c.is_alphabetic()) {
                    offset += 1;
                }
                self.advance_n(offset);
                return Err(self.invalid_number(start));
            }
        }

        let lexeme = self.source[start..self.pos].to_string();
        Ok(MK_TOKEN!(TokenKind::Number, lexeme, self.line))
    }

    fn invalid_number(&self, start: usize) -> LexError {
        let literal = self.source[start..self.pos].trim_end().to_string();
        self.error(LexErrorImpl::InvalidNumberFormat { literal })
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Yields every token and diagnostic in source order, ending after the
    /// first `EndofFile`.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let item = self.next_token();
        if matches!(&item, Ok(token) if token.kind == TokenKind::EndofFile) {
            self.finished = true;
        }
        Some(item)
    }
}

/// Scans `source` to exhaustion. Tokens and diagnostics are kept interleaved
/// in the order the scanner produced them; the last item is `EndofFile`.
pub fn tokenize(source: impl Into<String>) -> Vec<Result<Token, LexError>> {
    Lexer::new(source).collect()
}

/// Separates the tokens of a scan from its diagnostics, keeping the order of
/// each.
pub fn split_diagnostics(items: Vec<Result<Token, LexError>>) -> (Vec<Token>, Vec<LexError>) {
    let mut tokens = vec![];
    let mut diagnostics = vec![];

    for item in items {
        match item {
            Ok(token) => tokens.push(token),
            Err(error) => diagnostics.push(error),
        }
    }

    (tokens, diagnostics)
}
