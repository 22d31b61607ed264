use std::fmt::Display;

use thiserror::Error;

use crate::lexer::tokens::TokenKind;

/// Common surface of lexical and syntax diagnostics, used when reporting
/// either kind against the source text.
pub trait Diagnostic {
    fn get_line(&self) -> usize;
    fn get_error_name(&self) -> &str;
    fn get_tip(&self) -> ErrorTip;
}

/// A fatal error raised by the recognizer or the token stream loader.
///
/// The first one aborts the parse; its `Display` form is the single
/// diagnostic line written to the parse output.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    line: usize,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, line: usize) -> Self {
        Error {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_error(&self) -> &ErrorImpl {
        &self.internal_error
    }
}

impl Diagnostic for Error {
    fn get_line(&self) -> usize {
        self.line
    }

    fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::StatementExpected => "StatementExpected",
            ErrorImpl::IncompleteIf => "IncompleteIf",
            ErrorImpl::SymbolExpected => "SymbolExpected",
            ErrorImpl::MissingRelationalOperator => "MissingRelationalOperator",
            ErrorImpl::RelationalOperatorExpected => "RelationalOperatorExpected",
            ErrorImpl::TrailingTokens => "TrailingTokens",
            ErrorImpl::UnknownTokenKind { .. } => "UnknownTokenKind",
        }
    }

    fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { expected } => match expected {
                TokenKind::Semicolon => {
                    ErrorTip::Suggestion(String::from("did you miss a semicolon?"))
                }
                TokenKind::RightParen => {
                    ErrorTip::Suggestion(String::from("check for an unbalanced parenthesis"))
                }
                TokenKind::EndofFile => ErrorTip::Suggestion(String::from(
                    "a statement must start with an identifier, PRINT or IF",
                )),
                _ => ErrorTip::None,
            },
            ErrorImpl::IncompleteIf => ErrorTip::Suggestion(String::from(
                "an IF block must be closed with `ENDIF;` or continued with ELSE",
            )),
            ErrorImpl::SymbolExpected => ErrorTip::Suggestion(String::from(
                "expected an identifier, a number, SQRT(...) or a parenthesised expression",
            )),
            ErrorImpl::MissingRelationalOperator | ErrorImpl::RelationalOperatorExpected => {
                ErrorTip::Suggestion(String::from(
                    "a condition compares two expressions with one of < = > <= >= !=",
                ))
            }
            ErrorImpl::UnknownTokenKind { name } => {
                ErrorTip::Suggestion(format!("`{}` is not a SimpCalc token kind", name))
            }
            ErrorImpl::StatementExpected | ErrorImpl::TrailingTokens => ErrorTip::None,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Parse Error: {}. (Error at Line {})",
            self.internal_error, self.line
        )
    }
}

impl std::error::Error for Error {}

/// A recoverable diagnostic raised by the scanner. Scanning resumes after it.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    internal_error: LexErrorImpl,
    line: usize,
}

impl LexError {
    pub fn new(error_impl: LexErrorImpl, line: usize) -> Self {
        LexError {
            internal_error: error_impl,
            line,
        }
    }

    pub fn get_error(&self) -> &LexErrorImpl {
        &self.internal_error
    }
}

impl Diagnostic for LexError {
    fn get_line(&self) -> usize {
        self.line
    }

    fn get_error_name(&self) -> &str {
        match &self.internal_error {
            LexErrorImpl::UnterminatedString { .. } => "UnterminatedString",
            LexErrorImpl::InvalidNumberFormat { .. } => "InvalidNumberFormat",
            LexErrorImpl::IllegalCharacter { .. } => "IllegalCharacter",
        }
    }

    fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            LexErrorImpl::UnterminatedString { literal } => ErrorTip::Suggestion(format!(
                "string `{}` must be closed on the line it starts",
                literal
            )),
            LexErrorImpl::InvalidNumberFormat { literal } => ErrorTip::Suggestion(format!(
                "`{}` is not a number, a fraction or exponent needs at least one digit",
                literal
            )),
            LexErrorImpl::IllegalCharacter { sequence } => {
                ErrorTip::Suggestion(format!("unexpected `{}`", sequence))
            }
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Lexical Error: {} (Error at Line {})",
            self.internal_error, self.line
        )
    }
}

impl std::error::Error for LexError {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("{expected} expected")]
    ExpectedToken { expected: TokenKind },
    #[error("Statement expected")]
    StatementExpected,
    #[error("Incomplete if Statement")]
    IncompleteIf,
    #[error("Symbol expected")]
    SymbolExpected,
    #[error("Missing relational operator")]
    MissingRelationalOperator,
    #[error("Relational operator expected")]
    RelationalOperatorExpected,
    #[error("Unexpected tokens after program end")]
    TrailingTokens,
    #[error("Unrecognised token kind `{name}`")]
    UnknownTokenKind { name: String },
}

/// The offending text is carried for tips only; it never appears in the
/// diagnostic line itself.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexErrorImpl {
    #[error("Unterminated string")]
    UnterminatedString { literal: String },
    #[error("Invalid number format")]
    InvalidNumberFormat { literal: String },
    #[error("Illegal character/character sequence")]
    IllegalCharacter { sequence: String },
}
