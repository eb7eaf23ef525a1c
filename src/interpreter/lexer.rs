use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::operator::{self, Operator},
};

/// Represents a lexical token in the source expression.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in an RPN expression.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42` or `-17`.
    #[regex(r"-?[0-9]+", parse_integer, priority = 3)]
    Integer(i64),
    /// Operator symbol tokens, such as `+` or `MAX`, resolved through the
    /// operator registry.
    #[regex(r"[^ \t\r\n\f]+", parse_operator)]
    Operator(Operator),
    /// Spaces between symbols.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

/// Tokenizes an expression into an ordered sequence of classified tokens.
///
/// Each whitespace-separated symbol becomes exactly one token, paired with
/// its byte offset in the expression. A symbol is classified as an operator
/// when the registry knows it, and as an integer literal otherwise; order is
/// preserved and nothing else is produced.
///
/// # Errors
/// Returns `ParseError::MalformedToken` when a symbol is neither a
/// registered operator nor a valid integer literal (including integer
/// literals too large for an `i64`).
///
/// # Example
/// ```
/// use postfixa::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("4 2 +").unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert_eq!(tokens[0], (Token::Integer(4), 0));
///
/// assert!(tokenize("4 two +").is_err());
/// ```
pub fn tokenize(expression: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(expression);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            return Err(ParseError::MalformedToken { token:    lexer.slice().to_string(),
                                                    position: lexer.span().start, });
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if successful.
/// - `None`: If the token slice does not fit in an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
/// Resolves an operator symbol from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(Operator)`: The registered operator for this symbol.
/// - `None`: If the symbol is not present in the operator registry.
fn parse_operator(lex: &logos::Lexer<Token>) -> Option<Operator> {
    operator::lookup(lex.slice())
}
