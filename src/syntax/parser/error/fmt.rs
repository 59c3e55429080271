use std::fmt::Display as _;

use super::{lexer::TokenKind, Error, Expected};
use crate::{
	fmt::Display,
	symbol,
};


impl std::fmt::Display for Expected {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Special(special) => write!(f, "'{}'", special),
			Self::Construct(construct) => construct.fmt(f),
		}
	}
}


/// The error message, without the position.
impl<'a> Display<'a> for Error {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Lexer(error) => error.error.fmt(f),

			Self::Unexpected { token, expected } => {
				"unexpected ".fmt(f)?;

				if token.is_eof() {
					token.fmt(f, context)?;
				} else {
					"'".fmt(f)?;
					token.fmt(f, context)?;
					"'".fmt(f)?;
				}

				write!(f, ", expected {}", expected)
			}

			Self::Unrecognized { character, .. } => {
				write!(f, "unrecognized character '{}'", character.escape_debug())
			}

			Self::Semantic(error) => Display::fmt(error, f, context),
		}
	}
}


/// We need this in order to be able to implement std::error::Error.
/// Identifier names require the interner, so they are left out.
impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			Self::Lexer(error) => error.fmt(f),

			Self::Unexpected { token, expected } => {
				write!(f, "{} - unexpected ", token.pos)?;

				match &token.kind {
					TokenKind::Identifier(_) => "identifier".fmt(f)?,
					TokenKind::Keyword(keyword) => write!(f, "'{}'", keyword)?,
					TokenKind::Number(number) => write!(f, "'{}'", number)?,
					TokenKind::Special(special) => write!(f, "'{}'", special)?,
					TokenKind::EndOfInput => "end of input".fmt(f)?,
					TokenKind::Unrecognized(c) => write!(f, "'{}'", c.escape_debug())?,
				}

				write!(f, ", expected {}.", expected)
			}

			Self::Unrecognized { character, pos } => {
				write!(f, "{} - unrecognized character '{}'.", pos, character.escape_debug())
			}

			Self::Semantic(error) => std::fmt::Display::fmt(error, f),
		}
	}
}
