use crate::{errors::errors::{Error, ErrorImpl}, lexer::tokens::TokenKind};

use super::{
    expr::{parse_condition, parse_expr},
    lookups::{Nonterminal, ASSIGNMENT_RECOGNIZED, IF_BEGINS, IF_ENDS, PRINT_RECOGNIZED, STATEMENT_FIRST},
    parser::Parser,
};

// Program → Block EndofFile
pub fn parse_program(parser: &mut Parser) -> Result<(), Error> {
    parse_block(parser)?;
    parser.expect(TokenKind::EndofFile)?;
    Ok(())
}

// Block → Statement Block | ε
pub fn parse_block(parser: &mut Parser) -> Result<(), Error> {
    while parser.current_token().is_one_of_many(&STATEMENT_FIRST) {
        parse_stmt(parser)?;
    }

    Ok(())
}

pub fn parse_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.derive(Nonterminal::Statement, |parser| match parser.current_token_kind() {
        TokenKind::Identifier => parse_assignment_stmt(parser),
        TokenKind::Print => parse_print_stmt(parser),
        TokenKind::If => parse_if_stmt(parser),
        _ => Err(parser.error(ErrorImpl::StatementExpected)),
    })
}

// Identifier := Expr ;
pub fn parse_assignment_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Identifier)?;
    parser.expect(TokenKind::Assign)?;
    parse_expr(parser)?;
    parser.expect(TokenKind::Semicolon)?;

    parser.log(ASSIGNMENT_RECOGNIZED);
    Ok(())
}

// PRINT ( Arg ArgList ) ;
pub fn parse_print_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::Print)?;
    parser.expect(TokenKind::LeftParen)?;
    parse_arg(parser)?;
    parse_arg_list(parser)?;
    parser.expect(TokenKind::RightParen)?;
    parser.expect(TokenKind::Semicolon)?;

    parser.log(PRINT_RECOGNIZED);
    Ok(())
}

// IF Condition : Block IfTail
pub fn parse_if_stmt(parser: &mut Parser) -> Result<(), Error> {
    parser.expect(TokenKind::If)?;
    parser.log(IF_BEGINS);

    parse_condition(parser)?;
    parser.expect(TokenKind::Colon)?;
    parse_block(parser)?;
    parse_if_tail(parser)?;

    parser.log(IF_ENDS);
    Ok(())
}

// IfTail → ENDIF ; | ELSE Block ENDIF ;
pub fn parse_if_tail(parser: &mut Parser) -> Result<(), Error> {
    match parser.current_token_kind() {
        TokenKind::Endif => {}
        TokenKind::Else => {
            parser.advance();
            parse_block(parser)?;
        }
        _ => return Err(parser.error(ErrorImpl::IncompleteIf)),
    }

    parser.expect(TokenKind::Endif)?;
    parser.expect(TokenKind::Semicolon)?;
    Ok(())
}

// ArgList → , Arg ArgList | ε
pub fn parse_arg_list(parser: &mut Parser) -> Result<(), Error> {
    while parser.current_token_kind() == TokenKind::Comma {
        parser.advance();
        parse_arg(parser)?;
    }

    Ok(())
}

// Arg → String | Expr
pub fn parse_arg(parser: &mut Parser) -> Result<(), Error> {
    if parser.current_token_kind() == TokenKind::String {
        parser.advance();
        Ok(())
    } else {
        parse_expr(parser)
    }
}
