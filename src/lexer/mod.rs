//! Lexical analysis module for SimpCalc.
//!
//! This module contains the scanner that converts source text into a
//! sequence of line-numbered tokens. It handles:
//!
//! - Keywords, identifiers, numbers and string literals
//! - One and two character operators and punctuation
//! - Line comments and whitespace
//! - Recovery from malformed input, reported as diagnostics

pub mod lexer;
pub mod tokens;
