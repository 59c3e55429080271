mod fmt;

use super::{lexer, semantic, SourcePos, Special, Token};


/// What the parser was looking for when it found an unexpected token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
	/// A specific symbol, like a closing parenthesis.
	Special(Special),
	/// A syntactic construct, like "expression".
	Construct(&'static str),
}


/// A compile error. Parsing stops at the first one.
#[derive(Debug)]
pub enum Error {
	/// Malformed token.
	Lexer(lexer::Error),
	/// The current token doesn't fit the grammar.
	Unexpected {
		token: Token,
		expected: Expected,
	},
	/// A character that starts no token.
	Unrecognized {
		character: char,
		pos: SourcePos,
	},
	/// Symbol table failure.
	Semantic(semantic::Error),
}


impl Error {
	/// Unexpected token. Unrecognized characters get a dedicated error, as "unexpected"
	/// would be misleading.
	pub fn unexpected(token: Token, expected: Expected) -> Self {
		match token.kind {
			lexer::TokenKind::Unrecognized(character) => Self::Unrecognized {
				character,
				pos: token.pos,
			},

			_ => Self::Unexpected { token, expected },
		}
	}


	/// The position where the error was detected.
	pub fn pos(&self) -> SourcePos {
		match self {
			Self::Lexer(error) => error.pos,
			Self::Unexpected { token, .. } => token.pos,
			Self::Unrecognized { pos, .. } => *pos,
			Self::Semantic(error) => error.pos,
		}
	}
}


impl From<lexer::Error> for Error {
	fn from(error: lexer::Error) -> Self {
		Self::Lexer(error)
	}
}


impl From<semantic::Error> for Error {
	fn from(error: semantic::Error) -> Self {
		Self::Semantic(error)
	}
}


impl std::error::Error for Error {}
