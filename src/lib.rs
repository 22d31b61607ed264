#![allow(clippy::module_inception)]

use crate::{
    errors::errors::{Diagnostic, ErrorTip, LexError},
    lexer::lexer::{split_diagnostics, tokenize},
    parser::parser::{parse, ParseOutcome},
    stream::stream::{load_tokens, write_tokens},
};

pub mod errors;
pub mod lexer;
pub mod logging;
pub mod macros;
pub mod parser;
pub mod stream;

extern crate regex;

/// Scans `source` and returns the intermediate token stream text.
pub fn scan_to_stream(source: &str) -> String {
    write_tokens(&tokenize(source))
}

/// Loads a token stream and recognizes it. A stream that cannot be loaded
/// fails the parse with the loader's error.
pub fn parse_stream(text: &str) -> ParseOutcome {
    match load_tokens(text) {
        Ok(tokens) => parse(tokens),
        Err(error) => ParseOutcome {
            trace: vec![],
            derivations: vec![],
            result: Err(error),
        },
    }
}

/// Scans and recognizes `source` in one pass, without the intermediate
/// stream. Parse errors here carry source line numbers.
pub fn check_source(source: &str) -> (Vec<LexError>, ParseOutcome) {
    let (tokens, diagnostics) = split_diagnostics(tokenize(source));
    (diagnostics, parse(tokens))
}

/// Returns the text of the 1-based `line` in `content`, without its line
/// terminator.
pub fn get_line_at(content: &str, line: usize) -> Option<&str> {
    content.lines().nth(line.checked_sub(1)?)
}


/// Renders a diagnostic against the source line it was reported on.
///
/// ```text
/// Error: IllegalCharacter (unexpected `@z`)
/// -> prog.txt
///   |
/// 2 | y := @z;
///   |
/// ```
pub fn display_error(error: &dyn Diagnostic, file: &str, source: &str) -> String {
    let line_string = error.get_line().to_string();
    let padding = line_string.len() + 2;
    let mut lines = vec![];

    if let ErrorTip::None = error.get_tip() {
        lines.push(format!("Error: {}", error.get_error_name()));
    } else {
        lines.push(format!("Error: {} ({})", error.get_error_name(), error.get_tip()));
    }
    lines.push(format!("-> {}", file));
    lines.push(format!("{:>padding$}", "|"));

    if let Some(line_text) = get_line_at(source, error.get_line()) {
        lines.push(format!("{} | {}", line_string, line_text.trim()));
        lines.push(format!("{:>padding$}", "|"));
    }

    lines.join("\n")
}
