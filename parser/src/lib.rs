pub mod error;
mod lexer;
mod lower;
mod syntax;
mod token;

pub use error::ParseError as Error;
pub use error::{LexErrorKind, ParseErrorKind};
pub use lower::{LiveDecl, ParsedFunction};
pub use token::Token;

#[macro_use]
extern crate lalrpop_util;

lalrpop_mod!(grammar);

#[inline]
pub fn parse(src: &str) -> Result<Vec<ParsedFunction>, Error> {
    let parser = grammar::FileParser::new();
    let lex = lexer::Lexer::new(src);

    let file = parser.parse(lex).map_err(error::from_lalrpop)?;
    lower::lower_file(file)
}
