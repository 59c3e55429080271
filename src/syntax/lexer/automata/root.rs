use super::{
	symbol::SymbolChar,
	word::IsWord,
	Cursor,
	NumberLiteral,
	State,
	Symbol,
	Token,
	TokenKind,
	Transition,
	Word,
};


/// The top level lexer state.
#[derive(Debug)]
pub(super) struct Root;


impl Root {
	pub fn visit(self, cursor: &Cursor) -> Transition {
		let token = |kind| Token { kind, pos: cursor.pos() };

		match cursor.peek() {
			// Identifiers and keywords.
			Some(c) if c.is_word_start() => Transition::resume(Word::at(cursor)),

			// Number literals.
			Some(c) if c.is_ascii_digit() => Transition::resume(NumberLiteral::at(cursor)),

			// Symbols.
			Some(c) => match SymbolChar::from_first(c) {
				SymbolChar::Single(special) => {
					Transition::produce(self, token(TokenKind::Special(special)))
				}

				SymbolChar::Double { first } => Transition::step(Symbol::from_first(first, cursor)),

				// Whitespace.
				SymbolChar::None if is_whitespace(c) => Transition::step(self),

				SymbolChar::None => Transition::produce(self, token(TokenKind::Unrecognized(c))),
			},

			// Eof.
			None => Transition::resume_produce(self, token(TokenKind::EndOfInput)),
		}
	}
}


impl From<Root> for State {
	fn from(state: Root) -> State {
		State::Root(state)
	}
}


/// Only these are skipped, other control characters are unrecognized.
fn is_whitespace(c: char) -> bool {
	matches!(c, ' ' | '\t' | '\r' | '\n')
}
