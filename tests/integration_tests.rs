//! Integration tests for the two-stage pipeline.
//!
//! These tests drive source text through the scanner, the intermediate token
//! stream and the recognizer, and run the `simpcalc` binary on real files.

use std::{env, fs, path::PathBuf, process::Command};

use simpcalc::{
    check_source,
    lexer::tokens::{Token, TokenKind},
    parse_stream, scan_to_stream,
    stream::stream::load_tokens,
};

fn scratch_dir(test: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("simpcalc_tests_{}_{}", test, std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_valid_program_end_to_end() {
    let stream = scan_to_stream("x := 3 + 4; PRINT(x); ");
    let tokens = load_tokens(&stream).unwrap();

    let kinds: Vec<TokenKind> = tokens.iter().map(|token| token.kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Identifier,
            TokenKind::Assign,
            TokenKind::Number,
            TokenKind::Plus,
            TokenKind::Number,
            TokenKind::Semicolon,
            TokenKind::Print,
            TokenKind::LeftParen,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::Semicolon,
            TokenKind::EndofFile,
        ]
    );
    assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "x", 1));
    assert_eq!(tokens[4], Token::new(TokenKind::Number, "4", 5));

    let outcome = parse_stream(&stream);
    assert_eq!(
        outcome.report("sample_input.txt").last().unwrap(),
        "sample_input.txt is a valid SimpCalc program"
    );
}

#[test]
fn test_missing_endif_cites_stream_line() {
    // One token per stream line: the stray `;` is the tenth.
    let outcome = parse_stream(&scan_to_stream("IF x < 5 : y := 1; ;"));

    assert_eq!(
        outcome.report("sample_input.txt"),
        vec![
            "If Statement Begins",
            "Assignment Statement Recognized",
            "Parse Error: Incomplete if Statement. (Error at Line 10)",
        ]
    );
}

#[test]
fn test_missing_endif_cites_source_line_in_one_pass() {
    let (diagnostics, outcome) = check_source("IF x < 5 :\n  y := 1;\n;\n");

    assert!(diagnostics.is_empty());
    assert_eq!(
        outcome.verdict("prog.txt"),
        "Parse Error: Incomplete if Statement. (Error at Line 3)"
    );
}

#[test]
fn test_lexical_error_does_not_reach_recognizer() {
    let stream = scan_to_stream("x := 5 . ;");

    assert!(stream.contains("\nError\n"));
    assert!(parse_stream(&stream).is_valid());
}

#[test]
fn test_unterminated_string_then_parse_error() {
    // Print, LeftParen, diagnostic, marker, RightParen ...
    let stream = scan_to_stream("PRINT(\"abc\n);");
    let outcome = parse_stream(&stream);

    assert!(stream.contains("Lexical Error: Unterminated string (Error at Line 1)"));
    assert_eq!(
        outcome.verdict("prog.txt"),
        "Parse Error: Symbol expected. (Error at Line 5)"
    );
}

#[test]
fn test_unknown_kind_in_stream() {
    let outcome = parse_stream("Identifier       x\nWhatever         ;");

    assert_eq!(
        outcome.verdict("prog.txt"),
        "Parse Error: Unrecognised token kind `Whatever`. (Error at Line 2)"
    );
}

#[test]
fn test_pipeline_is_deterministic() {
    let source = "a := 1.5e3 * (b - 2);\nIF a > 2 : PRINT(\"big\", a); ELSE PRINT(a); ENDIF;\n";

    assert_eq!(scan_to_stream(source), scan_to_stream(source));
    assert_eq!(
        parse_stream(&scan_to_stream(source)),
        parse_stream(&scan_to_stream(source))
    );
}

#[test]
fn test_cli_scan_then_parse() {
    let dir = scratch_dir("scan_parse");
    let input = dir.join("sample_input.txt");
    let scanned = dir.join("sample_output_scan.txt");
    let parsed = dir.join("sample_output_parse.txt");
    fs::write(&input, "x := 3 + 4;\nPRINT(x);\n").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_simpcalc"))
        .arg("scan")
        .arg(&input)
        .arg("-o")
        .arg(&scanned)
        .status()
        .unwrap();
    assert!(status.success());
    assert!(fs::read_to_string(&scanned)
        .unwrap()
        .starts_with("Identifier       x\n"));

    let status = Command::new(env!("CARGO_BIN_EXE_simpcalc"))
        .arg("parse")
        .arg(&scanned)
        .arg("--name")
        .arg("sample_input.txt")
        .arg("-o")
        .arg(&parsed)
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&parsed).unwrap(),
        "Assignment Statement Recognized\n\
         Print Statement Recognized\n\
         sample_input.txt is a valid SimpCalc program\n"
    );

    fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_cli_check_rejects_invalid_program() {
    let dir = scratch_dir("check");
    let input = dir.join("broken.txt");
    // The missing `;` is reported at `EndofFile`, after the final newline.
    fs::write(&input, "x := 1\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_simpcalc"))
        .arg("check")
        .arg(&input)
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(65));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Parse Error: Semicolon expected. (Error at Line 2)\n"
    );

    fs::remove_dir_all(&dir).unwrap();
}
