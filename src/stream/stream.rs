use crate::{
    errors::errors::{Error, ErrorImpl, LexError},
    lexer::tokens::{Token, TokenKind},
};

/// Serializes a scan in the order it was produced. Lines are joined with
/// `\n` and the text has no trailing newline.
pub fn write_tokens(items: &[Result<Token, LexError>]) -> String {
    let mut lines = vec![];

    for item in items {
        match item {
            Ok(token) => lines.push(token.to_string()),
            Err(error) => {
                lines.push(error.to_string());
                lines.push(TokenKind::Error.to_string());
            }
        }
    }

    lines.join("\n")
}

/// Rebuilds the token list from a token stream.
///
/// Line numbers are positions in `text`, not lines of the scanned source.
/// Blank lines are counted but yield nothing, and an `Error` marker removes
/// the diagnostic line right above it. Every other line is split on
/// whitespace into a kind name and a lexeme made of the remaining words
/// joined by single spaces.
pub fn load_tokens(text: &str) -> Result<Vec<Token>, Error> {
    let marker = TokenKind::Error.to_string();
    let mut entries: Vec<(usize, Vec<&str>)> = vec![];

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let parts: Vec<&str> = line.split_whitespace().collect();

        match parts.as_slice() {
            [] => {}
            [word] if *word == marker => {
                if matches!(entries.last(), Some((previous, _)) if *previous + 1 == line_number) {
                    entries.pop();
                }
            }
            _ => entries.push((line_number, parts)),
        }
    }

    entries
        .into_iter()
        .map(|(line, parts)| {
            let name = parts[0];
            let kind = TokenKind::from_name(name).ok_or_else(|| {
                Error::new(
                    ErrorImpl::UnknownTokenKind {
                        name: String::from(name),
                    },
                    line,
                )
            })?;

            Ok(Token::new(kind, parts[1..].join(" "), line))
        })
        .collect()
}
