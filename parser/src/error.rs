use thiserror::Error;

use crate::token::Token;
use util::Spanned;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum LexErrorKind {
    #[error("unrecognized token `{0}`")]
    UnrecognizedToken(String),
    #[error("integer constant `{0}` is too large")]
    TooLargeInteger(String),
}

pub type LexError = Spanned<LexErrorKind>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseErrorKind {
    #[error("parse error: unexpected end of file")]
    Eof,
    #[error("lexer error: {0}")]
    Lexical(LexErrorKind),
    #[error("parse error: found extra token `{0}`")]
    ExtraToken(Token),
    #[error("parse error: unrecognized token `{0}`, expected {1}")]
    UnrecognizedToken(Token, String),
    #[error("unknown physical register `${0}`")]
    UnknownRegister(String),
    #[error("unknown block `{0}`")]
    UnknownBlock(String),
    #[error("block `{0}` is defined twice")]
    DuplicateBlock(String),
    #[error("slot index `{0}` is out of range")]
    InvalidSlot(i64),
}

pub type ParseError = Spanned<ParseErrorKind>;

type LalrpopError = lalrpop_util::ParseError<usize, Token, LexError>;

pub fn from_lalrpop(err: LalrpopError) -> ParseError {
    match err {
        LalrpopError::InvalidToken { location } => {
            Spanned::new(ParseErrorKind::Eof, (location, location))
        }
        LalrpopError::ExtraToken {
            token: (lo, tok, hi),
        } => Spanned::new(ParseErrorKind::ExtraToken(tok), (lo, hi)),
        LalrpopError::User { error } => error.map(ParseErrorKind::Lexical),
        // the lexer closes an unterminated last line with a zero-width newline
        LalrpopError::UnrecognizedToken {
            token: (lo, Token::Newline, hi),
            ..
        } if lo == hi => Spanned::new(ParseErrorKind::Eof, (lo, hi)),
        LalrpopError::UnrecognizedToken {
            token: (lo, tok, hi),
            expected,
        } => {
            // take only first expected candidate
            let expected = expected.into_iter().next().unwrap_or_default();

            Spanned::new(ParseErrorKind::UnrecognizedToken(tok, expected), (lo, hi))
        }
        LalrpopError::UnrecognizedEOF { location, .. } => {
            Spanned::new(ParseErrorKind::Eof, (location, location))
        }
    }
}
