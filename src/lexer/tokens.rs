use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

/// Column width the kind name is padded to in the intermediate token stream.
pub const KIND_COLUMN_WIDTH: usize = 17;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("PRINT", TokenKind::Print);
        map.insert("IF", TokenKind::If);
        map.insert("ELSE", TokenKind::Else);
        map.insert("ENDIF", TokenKind::Endif);
        map.insert("SQRT", TokenKind::Sqrt);
        map.insert("AND", TokenKind::And);
        map.insert("OR", TokenKind::Or);
        map.insert("NOT", TokenKind::Not);
        map
    };

    /// Wire name -> kind, the inverse of `Display`.
    pub static ref KIND_LOOKUP: HashMap<String, TokenKind> = TokenKind::ALL
        .iter()
        .map(|kind| (kind.to_string(), *kind))
        .collect();
}

/// Variant names double as the kind names written to the token stream.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    Number,
    String,

    // Reserved
    Print,
    If,
    Else,
    Endif,
    Sqrt,
    And,
    Or,
    Not,

    Assign,      // :=
    Raise,       // **
    LTEqual,     // <=
    GTEqual,     // >=
    NotEqual,    // !=

    Semicolon,
    Colon,
    Comma,
    LeftParen,
    RightParen,
    Plus,
    Minus,
    Multiply,
    Divide,
    LessThan,
    Equal,
    GreaterThan,

    EndofFile,
    /// Marker line following a diagnostic in the token stream. Never produced
    /// as a token.
    Error,
}

impl TokenKind {
    pub const ALL: [TokenKind; 30] = [
        TokenKind::Identifier,
        TokenKind::Number,
        TokenKind::String,
        TokenKind::Print,
        TokenKind::If,
        TokenKind::Else,
        TokenKind::Endif,
        TokenKind::Sqrt,
        TokenKind::And,
        TokenKind::Or,
        TokenKind::Not,
        TokenKind::Assign,
        TokenKind::Raise,
        TokenKind::LTEqual,
        TokenKind::GTEqual,
        TokenKind::NotEqual,
        TokenKind::Semicolon,
        TokenKind::Colon,
        TokenKind::Comma,
        TokenKind::LeftParen,
        TokenKind::RightParen,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Multiply,
        TokenKind::Divide,
        TokenKind::LessThan,
        TokenKind::Equal,
        TokenKind::GreaterThan,
        TokenKind::EndofFile,
        TokenKind::Error,
    ];

    /// Looks up a kind by its wire name. The `Error` marker is not a token
    /// kind a stream line can carry, so it is rejected here.
    pub fn from_name(name: &str) -> Option<TokenKind> {
        match KIND_LOOKUP.get(name) {
            Some(TokenKind::Error) | None => None,
            Some(kind) => Some(*kind),
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub lexeme: String,
    pub line: usize,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, line: usize) -> Self {
        Token {
            kind,
            lexeme: lexeme.into(),
            line,
        }
    }

    pub fn end_of_file(line: usize) -> Self {
        Token::new(TokenKind::EndofFile, "", line)
    }

    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }
}

/// Renders the token-stream line: kind padded to 17 columns, then the lexeme.
impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<width$}{}",
            self.kind.to_string(),
            self.lexeme,
            width = KIND_COLUMN_WIDTH
        )
    }
}
