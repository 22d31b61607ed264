//! Unit tests for the parser module.
//!
//! This module contains tests for recognizing language constructs including:
//! - Assignments and PRINT statements
//! - IF / ELSE / ENDIF blocks
//! - Expression precedence
//! - Each syntax diagnostic

use crate::{
    errors::errors::{Diagnostic, ErrorImpl},
    lexer::{
        lexer::{split_diagnostics, tokenize},
        tokens::{Token, TokenKind},
    },
};

use super::{
    lookups::{Derivation, Nonterminal},
    parser::{parse, ParseOutcome, Parser},
    stmt::parse_program,
};

fn tokens_of(source: &str) -> Vec<Token> {
    let (tokens, diagnostics) = split_diagnostics(tokenize(source));
    assert!(diagnostics.is_empty(), "unexpected diagnostics: {:?}", diagnostics);
    tokens
}

fn parse_source(source: &str) -> ParseOutcome {
    parse(tokens_of(source))
}

fn error_of(source: &str) -> (ErrorImpl, usize) {
    let outcome = parse_source(source);
    let error = outcome.result.expect_err("expected a parse error");
    (error.get_error().clone(), error.get_line())
}

#[test]
fn test_parse_assignment_and_print() {
    let outcome = parse_source("x := 3 + 4; PRINT(x); ");

    assert!(outcome.is_valid());
    assert_eq!(
        outcome.report("test.txt"),
        vec![
            "Assignment Statement Recognized",
            "Print Statement Recognized",
            "test.txt is a valid SimpCalc program",
        ]
    );
}

#[test]
fn test_parse_empty_program() {
    let outcome = parse_source("// nothing here\n");

    assert!(outcome.is_valid());
    assert!(outcome.trace.is_empty());
}

#[test]
fn test_parse_empty_token_list() {
    let outcome = parse(vec![]);

    assert!(outcome.is_valid());
}

#[test]
fn test_parse_if_else() {
    let outcome = parse_source("IF x < 5 : y := 1; ELSE y := 2; ENDIF;");

    assert!(outcome.is_valid());
    assert_eq!(
        outcome.trace,
        vec![
            "If Statement Begins",
            "Assignment Statement Recognized",
            "Assignment Statement Recognized",
            "If Statement Ends",
        ]
    );
}

#[test]
fn test_parse_nested_if_and_empty_blocks() {
    let source = "IF a != b :\n  IF a >= 1 : ENDIF;\nELSE\nENDIF;";
    let outcome = parse_source(source);

    assert!(outcome.is_valid());
    assert_eq!(
        outcome.trace,
        vec![
            "If Statement Begins",
            "If Statement Begins",
            "If Statement Ends",
            "If Statement Ends",
        ]
    );
}

#[test]
fn test_parse_print_arguments() {
    let outcome = parse_source("PRINT(\"a\", x + 1, \"b\", -y ** 2);");

    assert!(outcome.is_valid());
    assert_eq!(outcome.trace, vec!["Print Statement Recognized"]);
}

#[test]
fn test_parse_sqrt_and_grouping() {
    assert!(parse_source("x := SQRT(4) * (1 + 2) / -z;").is_valid());
}

#[test]
fn test_all_relational_operators() {
    for operator in ["<", "=", ">", "<=", ">=", "!="] {
        let source = format!("IF x {} 1 : ENDIF;", operator);
        assert!(parse_source(&source).is_valid(), "{}", source);
    }
}

#[test]
fn test_incomplete_if() {
    let outcome = parse_source("IF x < 5 :\n  y := 1;\n;");

    assert_eq!(
        outcome.report("test.txt"),
        vec![
            "If Statement Begins",
            "Assignment Statement Recognized",
            "Parse Error: Incomplete if Statement. (Error at Line 3)",
        ]
    );
}

#[test]
fn test_missing_semicolon_reports_next_line() {
    assert_eq!(
        error_of("x := 1\ny := 2;"),
        (
            ErrorImpl::ExpectedToken {
                expected: TokenKind::Semicolon
            },
            2
        )
    );
}

#[test]
fn test_missing_semicolon_at_end_of_input() {
    assert_eq!(
        error_of("x := 1"),
        (
            ErrorImpl::ExpectedToken {
                expected: TokenKind::Semicolon
            },
            1
        )
    );
}

#[test]
fn test_missing_relational_operator() {
    assert_eq!(
        error_of("IF x : ENDIF;"),
        (ErrorImpl::MissingRelationalOperator, 1)
    );
}

#[test]
fn test_relational_operators_do_not_chain() {
    assert_eq!(
        error_of("IF x < y < z : ENDIF;"),
        (
            ErrorImpl::ExpectedToken {
                expected: TokenKind::Colon
            },
            1
        )
    );
}

#[test]
fn test_boolean_keywords_are_not_grammar() {
    assert_eq!(
        error_of("IF x < 1 AND y > 2 : ENDIF;"),
        (
            ErrorImpl::ExpectedToken {
                expected: TokenKind::Colon
            },
            1
        )
    );
    assert_eq!(
        error_of("AND := 1;"),
        (
            ErrorImpl::ExpectedToken {
                expected: TokenKind::EndofFile
            },
            1
        )
    );
}

#[test]
fn test_symbol_expected() {
    assert_eq!(error_of("x := ;"), (ErrorImpl::SymbolExpected, 1));
    assert_eq!(error_of("x := 1 + * 2;"), (ErrorImpl::SymbolExpected, 1));
}

#[test]
fn test_print_requires_parenthesis() {
    assert_eq!(
        error_of("PRINT x;"),
        (
            ErrorImpl::ExpectedToken {
                expected: TokenKind::LeftParen
            },
            1
        )
    );
}

#[test]
fn test_stray_endif_at_top_level() {
    let outcome = parse_source("x := 1;\nENDIF;");

    assert_eq!(
        outcome.verdict("test.txt"),
        "Parse Error: EndofFile expected. (Error at Line 2)"
    );
}

#[test]
fn test_trace_before_abort_is_kept() {
    let outcome = parse_source("x := 1; y := ;");

    assert_eq!(outcome.trace, vec!["Assignment Statement Recognized"]);
    assert!(!outcome.is_valid());
}

#[test]
fn test_tokens_after_end_of_file() {
    let tokens = vec![
        Token::end_of_file(1),
        Token::new(TokenKind::Identifier, "x", 2),
    ];
    let outcome = parse(tokens);

    assert_eq!(
        outcome.verdict("test.txt"),
        "Parse Error: Unexpected tokens after program end. (Error at Line 2)"
    );
}

#[test]
fn test_valid_program_consumes_every_token() {
    let tokens = tokens_of("x := 1;\nIF x > 0 : PRINT(x); ENDIF;");
    let count = tokens.len();
    let mut parser = Parser::new(tokens);

    assert!(parse_program(&mut parser).is_ok());
    assert_eq!(parser.position(), count);
    assert_eq!(parser.current_token_kind(), TokenKind::EndofFile);
}

#[test]
fn test_multiplication_is_derived_inside_term() {
    // 0:x 1::= 2:2 3:+ 4:3 5:* 6:4 7:; 8:EndofFile
    let outcome = parse_source("x := 2 + 3 * 4;");
    let derivations = &outcome.derivations;

    let product = Derivation {
        nonterminal: Nonterminal::Term,
        start: 4,
        end: 7,
    };
    let sum = Derivation {
        nonterminal: Nonterminal::Expr,
        start: 2,
        end: 7,
    };
    let product_at = derivations.iter().position(|d| *d == product).unwrap();
    let sum_at = derivations.iter().position(|d| *d == sum).unwrap();

    assert!(product_at < sum_at);
    assert!(derivations.contains(&Derivation {
        nonterminal: Nonterminal::Term,
        start: 2,
        end: 3,
    }));
}

#[test]
fn test_negation_binds_tighter_than_raise() {
    // 0:x 1::= 2:- 3:2 4:** 5:2 6:;
    let outcome = parse_source("x := -2 ** 2;");

    assert!(outcome.derivations.contains(&Derivation {
        nonterminal: Nonterminal::Atom,
        start: 2,
        end: 4,
    }));
    assert!(outcome.derivations.contains(&Derivation {
        nonterminal: Nonterminal::Factor,
        start: 2,
        end: 6,
    }));
}

#[test]
fn test_reparsing_is_deterministic() {
    let tokens = tokens_of("IF x < 5 : y := 1; ;");

    assert_eq!(parse(tokens.clone()), parse(tokens));
}
