//! Expression and condition productions.
//!
//! Precedence is carried by the shape of the grammar: `Expr` is a list of
//! `Term`s joined by `+ -`, a `Term` a list of `Factor`s joined by `* /`, a
//! `Factor` a list of `Atom`s joined by `**`. Each list is consumed
//! iteratively, so every binary operator groups left to right.

use crate::{errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::{
    lookups::{Nonterminal, ADDITIVE_OPERATORS, MULTIPLICATIVE_OPERATORS, RELATIONAL_OPERATORS},
    parser::Parser,
};

// Expr → Term TermList
pub fn parse_expr(parser: &mut Parser) -> Result<(), Error> {
    parser.derive(Nonterminal::Expr, |parser| {
        parse_term(parser)?;
        parse_term_list(parser)
    })
}

// TermList → (+|-) Term TermList | ε
fn parse_term_list(parser: &mut Parser) -> Result<(), Error> {
    while parser.current_token().is_one_of_many(&ADDITIVE_OPERATORS) {
        parser.advance();
        parse_term(parser)?;
    }

    Ok(())
}

// Term → Factor FactorList
pub fn parse_term(parser: &mut Parser) -> Result<(), Error> {
    parser.derive(Nonterminal::Term, |parser| {
        parse_factor(parser)?;
        parse_factor_list(parser)
    })
}

// FactorList → (*|/) Factor FactorList | ε
fn parse_factor_list(parser: &mut Parser) -> Result<(), Error> {
    while parser.current_token().is_one_of_many(&MULTIPLICATIVE_OPERATORS) {
        parser.advance();
        parse_factor(parser)?;
    }

    Ok(())
}

// Factor → Atom AtomList
pub fn parse_factor(parser: &mut Parser) -> Result<(), Error> {
    parser.derive(Nonterminal::Factor, |parser| {
        parse_atom(parser)?;
        parse_atom_list(parser)
    })
}

// AtomList → ** Atom AtomList | ε
fn parse_atom_list(parser: &mut Parser) -> Result<(), Error> {
    while parser.current_token_kind() == TokenKind::Raise {
        parser.advance();
        parse_atom(parser)?;
    }

    Ok(())
}

// Atom → - Value | Value
pub fn parse_atom(parser: &mut Parser) -> Result<(), Error> {
    parser.derive(Nonterminal::Atom, |parser| {
        if parser.current_token_kind() == TokenKind::Minus {
            parser.advance();
        }
        parse_value(parser)
    })
}

// Value → Identifier | Number | SQRT ( Expr ) | ( Expr )
pub fn parse_value(parser: &mut Parser) -> Result<(), Error> {
    parser.derive(Nonterminal::Value, |parser| match parser.current_token_kind() {
        TokenKind::Identifier | TokenKind::Number => {
            parser.advance();
            Ok(())
        }
        TokenKind::Sqrt => {
            parser.advance();
            parse_grouping(parser)
        }
        TokenKind::LeftParen => parse_grouping(parser),
        _ => Err(parser.error(ErrorImpl::SymbolExpected)),
    })
}

fn parse_grouping(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::LeftParen)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::RightParen)?;
    Ok(())
}

// Condition → Expr RelOp Expr
pub fn parse_condition(parser: &mut Parser) -> Result<(), Error> {
    parser.derive(Nonterminal::Condition, |parser| {
        parse_expr(parser)?;

        if !parser.current_token().is_one_of_many(&RELATIONAL_OPERATORS) {
            return Err(parser.error(ErrorImpl::MissingRelationalOperator));
        }

        parse_rel_op(parser)?;
        parse_expr(parser)
    })
}

// RelOp → < | = | > | <= | >= | !=
pub fn parse_rel_op(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token().is_one_of_many(&RELATIONAL_OPERATORS) {
        parser.advance();
        Ok(())
    } else {
        Err(parser.error(ErrorImpl::RelationalOperatorExpected))
    }
}
