//! Recognizer state and the top-level parse entry point.
//!
//! The parser walks a fully buffered token list with one token of
//! lookahead. It builds no tree: its only products are the trace log of
//! recognized statements, the derivation record, and the outcome.

use tracing::{debug, instrument};

use crate::{
    errors::errors::{Diagnostic, Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
};

use super::{
    lookups::{Derivation, Nonterminal},
    stmt::parse_program,
};

/// The parser state: the token list, the cursor and the current lookahead.
pub struct Parser {
    /// The list of tokens to parse
    tokens: Vec<Token>,
    /// Index of the lookahead in `tokens`
    pos: usize,
    /// The lookahead; a synthetic `EndofFile` once `tokens` is exhausted
    current: Token,
    /// Lines describing each construct recognized so far
    trace: Vec<String>,
    /// Completed nonterminals, in the order they were completed
    derivations: Vec<Derivation>,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        let current = match tokens.first() {
            Some(token) => token.clone(),
            None => Token::end_of_file(1),
        };

        Parser {
            tokens,
            pos: 0,
            current,
            trace: vec![],
            derivations: vec![],
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn current_line(&self) -> usize {
        self.current.line
    }

    /// Index of the lookahead in the token list.
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Advances to the next token and returns the previous lookahead.
    ///
    /// Past the end of the list the lookahead stays a synthetic `EndofFile`
    /// on the line of the last real token.
    pub fn advance(&mut self) -> Token {
        self.pos += 1;

        let next = match self.tokens.get(self.pos) {
            Some(token) => token.clone(),
            None => Token::end_of_file(self.tokens.last().map_or(1, |token| token.line)),
        };

        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the lookahead if it is `expected_kind`, otherwise fails on the
    /// current line.
    pub fn expect(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.current_token_kind() == expected_kind {
            Ok(self.advance())
        } else {
            Err(self.error(ErrorImpl::ExpectedToken {
                expected: expected_kind,
            }))
        }
    }

    pub fn error(&self, error_impl: ErrorImpl) -> Error {
        Error::new(error_impl, self.current_line())
    }

    /// Appends a line to the trace log.
    pub fn log(&mut self, message: &str) {
        self.trace.push(String::from(message));
    }

    pub fn trace(&self) -> &[String] {
        &self.trace
    }

    /// Runs `rule` and, if it succeeds, records `nonterminal` over the tokens
    /// it consumed.
    pub fn derive<T>(
        &mut self,
        nonterminal: Nonterminal,
        rule: impl FnOnce(&mut Parser) -> Result<T, Error>,
    ) -> Result<T, Error> {
        let start = self.pos;
        let value = rule(self)?;

        self.derivations.push(Derivation {
            nonterminal,
            start,
            end: self.pos,
        });

        Ok(value)
    }
}

/// What a single recognizer run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome {
    pub trace: Vec<String>,
    pub derivations: Vec<Derivation>,
    pub result: Result<(), Error>,
}

impl ParseOutcome {
    pub fn is_valid(&self) -> bool {
        self.result.is_ok()
    }

    /// The terminal line: the success line naming `input_name`, or the
    /// diagnostic that aborted the parse.
    pub fn verdict(&self, input_name: &str) -> String {
        match &self.result {
            Ok(()) => format!("{} is a valid SimpCalc program", input_name),
            Err(error) => error.to_string(),
        }
    }

    /// Every output line of the run: the trace logged before success or the
    /// abort point, followed by the verdict.
    pub fn report(&self, input_name: &str) -> Vec<String> {
        let mut lines = self.trace.clone();
        lines.push(self.verdict(input_name));
        lines
    }
}

/// Recognizes a token list against the SimpCalc grammar.
///
/// The first syntax error aborts the walk; trace lines logged before it are
/// kept in the outcome.
#[instrument(skip_all, fields(tokens = tokens.len()))]
pub fn parse(tokens: Vec<Token>) -> ParseOutcome {
    let mut parser = Parser::new(tokens);

    let result = parse_program(&mut parser).and_then(|()| {
        if parser.current_token_kind() == TokenKind::EndofFile {
            Ok(())
        } else {
            Err(parser.error(ErrorImpl::TrailingTokens))
        }
    });

    match &result {
        Ok(()) => debug!(trace_lines = parser.trace().len(), "program recognized"),
        Err(error) => debug!(line = error.get_line(), "{}", error),
    }

    ParseOutcome {
        trace: parser.trace,
        derivations: parser.derivations,
        result,
    }
}
