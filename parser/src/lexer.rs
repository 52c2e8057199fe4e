use crate::error::{LexError, LexErrorKind};
use crate::token::*;
use plex::lexer;
use util::Spanned;

pub type Result = std::result::Result<(usize, Token, usize), LexError>;

#[derive(Debug, Clone, PartialEq)]
enum LexToken {
    Tok(Token),
    Space,
    Error(LexErrorKind),
}

use LexToken::*;

fn number<T: std::str::FromStr>(digits: &str, lift: impl FnOnce(T) -> Token) -> LexToken {
    if let Ok(n) = digits.parse() {
        Tok(lift(n))
    } else {
        Error(LexErrorKind::TooLargeInteger(digits.to_owned()))
    }
}

lexer! {
    fn next_token(text: 'input) -> LexToken;

    r"[\t\r ]+" => Space,
    r"#[^\n]*" => Space,
    r"\n" => Tok(Token::Newline),
    "function" => Tok(Token::Function),
    "block" => Tok(Token::Block),
    "live" => Tok(Token::Live),
    "persistent" => Tok(Token::Persistent),
    "dbg" => Tok(Token::Dbg),
    r"\->" => Tok(Token::Arrow),
    "," => Tok(Token::Comma),
    "=" => Tok(Token::Equal),
    ":" => Tok(Token::Colon),
    r"\[" => Tok(Token::LBracket),
    r"\)" => Tok(Token::RPar),
    r"%[0-9]+" => number(&text[1..], Token::VReg),
    r"@[0-9]+" => number(&text[1..], Token::At),
    r"\-?[0-9]+" => number(text, Token::Int),
    r"\$[A-Za-z0-9_]+" => Tok(Token::PReg(text[1..].to_owned())),
    r"[A-Za-z_\.][A-Za-z0-9_\.]*" => Tok(Token::Ident(text.to_owned())),
    r"." => Error(LexErrorKind::UnrecognizedToken(text.to_owned()))
}

/// Token stream for the grammar. Blank and comment-only lines are dropped,
/// so every line reaches the parser as its tokens followed by exactly one
/// `Newline`; a last line without a trailing newline gets a zero-width one.
pub struct Lexer<'input> {
    original: &'input str,
    remaining: &'input str,
    line_start: bool,
}

impl<'input> Lexer<'input> {
    #[inline]
    pub fn new(s: &'input str) -> Self {
        Lexer {
            original: s,
            remaining: s,
            line_start: true,
        }
    }
}

impl<'input> Iterator for Lexer<'input> {
    type Item = Result;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some((tok, remaining)) = next_token(self.remaining) {
                let lo = self.original.len() - self.remaining.len();
                let hi = self.original.len() - remaining.len();
                self.remaining = remaining;

                match tok {
                    Space => continue,
                    Tok(Token::Newline) if self.line_start => continue,
                    Tok(tok) => {
                        self.line_start = tok == Token::Newline;
                        return Some(Ok((lo, tok, hi)));
                    }
                    Error(e) => return Some(Err(Spanned::new(e, (lo, hi)))),
                }
            } else if self.line_start {
                // EOF
                return None;
            } else {
                self.line_start = true;
                let eof = self.original.len();
                return Some(Ok((eof, Token::Newline, eof)));
            }
        }
    }
}
