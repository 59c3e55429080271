use std::fmt::Display as _;

use super::{Keyword, Special, Token, TokenKind};
use crate::{
	fmt::Display,
	symbol,
};


impl std::fmt::Display for Keyword {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		self.as_str().fmt(f)
	}
}


impl std::fmt::Display for Special {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		self.lexeme().fmt(f)
	}
}


impl<'a> Display<'a> for TokenKind {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Identifier(symbol) => symbol.fmt(f, context),
			Self::Keyword(keyword) => keyword.fmt(f),
			Self::Number(number) => number.fmt(f),
			Self::Special(special) => special.fmt(f),
			Self::EndOfInput => "end of input".fmt(f),
			Self::Unrecognized(c) => c.fmt(f),
		}
	}
}


impl<'a> Display<'a> for Token {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		self.kind.fmt(f, context)
	}
}
