//! Error types and error handling for the SimpCalc front end.
//!
//! Two independent taxonomies live here:
//!
//! - `LexError`: recoverable diagnostics recorded by the scanner
//! - `Error`: fatal syntax errors that abort the recognizer
//!
//! Both render the line-numbered message format used in the output files.

pub mod errors;
