use crate::lexer::tokens::TokenKind;

/// FIRST(Statement); `Block` keeps consuming statements while the lookahead
/// is one of these.
pub const STATEMENT_FIRST: [TokenKind; 3] = [TokenKind::Identifier, TokenKind::Print, TokenKind::If];

pub const RELATIONAL_OPERATORS: [TokenKind; 6] = [
    TokenKind::LessThan,
    TokenKind::Equal,
    TokenKind::GreaterThan,
    TokenKind::LTEqual,
    TokenKind::GTEqual,
    TokenKind::NotEqual,
];

pub const ADDITIVE_OPERATORS: [TokenKind; 2] = [TokenKind::Plus, TokenKind::Minus];

pub const MULTIPLICATIVE_OPERATORS: [TokenKind; 2] = [TokenKind::Multiply, TokenKind::Divide];

/// Nonterminals recorded in a parse's derivation.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Nonterminal {
    Statement,
    Condition,
    Expr,
    Term,
    Factor,
    Atom,
    Value,
}

/// A completed nonterminal and the half-open range of token indices it
/// consumed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Derivation {
    pub nonterminal: Nonterminal,
    pub start: usize,
    pub end: usize,
}

// Trace lines
pub const ASSIGNMENT_RECOGNIZED: &str = "Assignment Statement Recognized";
pub const PRINT_RECOGNIZED: &str = "Print Statement Recognized";
pub const IF_BEGINS: &str = "If Statement Begins";
pub const IF_ENDS: &str = "If Statement Ends";
