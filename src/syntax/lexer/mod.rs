mod automata;
mod cursor;
mod error;
mod token;

use crate::symbol;
use automata::Automata;
use super::{Source, SourcePos};
pub use cursor::Cursor;
pub use error::{Error, ErrorKind};
pub use token::{Keyword, Special, Token, TokenKind};


/// The lexer for zoom source code.
///
/// Tokens are produced lazily, one per call to `next_token`. Once the input is exhausted,
/// every further call produces `EndOfInput` again.
#[derive(Debug)]
pub struct Lexer<'a, 'b> {
	automata: Automata<'a, 'b>,
	finished: bool,
}


impl<'a, 'b> Lexer<'a, 'b> {
	pub fn new(cursor: Cursor<'a>, interner: &'b mut symbol::Interner) -> Self {
		Self {
			automata: Automata::new(cursor, interner),
			finished: false,
		}
	}


	/// Produce the next token.
	pub fn next_token(&mut self) -> Result<Token, Error> {
		self.automata.next()
	}


	/// The interner where identifiers are stored.
	pub fn interner(&self) -> &symbol::Interner {
		self.automata.interner()
	}
}


/// Iterating yields the EndOfInput token once, and then stops.
impl<'a, 'b> Iterator for Lexer<'a, 'b> {
	type Item = Result<Token, Error>;

	fn next(&mut self) -> Option<Self::Item> {
		if self.finished {
			return None;
		}

		let output = self.next_token();

		if matches!(output, Ok(ref token) if token.is_eof()) {
			self.finished = true;
		}

		Some(output)
	}
}
