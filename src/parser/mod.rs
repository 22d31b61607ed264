//! Recursive-descent recognizer for SimpCalc.
//!
//! This module checks a token list against the LL(1) SimpCalc grammar
//! using one token of lookahead. It builds no syntax tree and performs no
//! semantic checks. It handles:
//!
//! - Statement productions (assignment, PRINT, IF/ELSE/ENDIF blocks)
//! - Expression productions, with precedence encoded in the grammar
//! - Conditions with a single relational operator
//! - A trace log of recognized statements and a single fatal diagnostic
//!
//! `AND`, `OR` and `NOT` are reserved by the scanner but no production
//! consumes them.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
