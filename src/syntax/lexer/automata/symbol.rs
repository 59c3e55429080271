use super::{
	Cursor,
	Root,
	SourcePos,
	Special,
	State,
	Token,
	TokenKind,
	Transition,
};


/// The state for lexing two-character symbols.
#[derive(Debug)]
pub(super) struct Symbol {
	first: char,
	pos: SourcePos,
}


impl Symbol {
	pub fn from_first(first: char, cursor: &Cursor) -> Self {
		Self { first, pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		let token = |special| Token { kind: TokenKind::Special(special), pos: self.pos };

		let pair = cursor
			.peek()
			.and_then(|second| Special::pair(self.first, second));

		match (pair, Special::first(self.first)) {
			// The second character is only consumed when the pair is allowed.
			(Some(special), _) => Transition::produce(Root, token(special)),

			(None, Some(special)) => Transition::resume_produce(Root, token(special)),

			// We must have covered all possibilities for the first character.
			(None, None) => unreachable!("invalid first character in symbol state"),
		}
	}
}


impl From<Symbol> for State {
	fn from(state: Symbol) -> State {
		Self::Symbol(state)
	}
}


/// Helper for symbols.
pub enum SymbolChar {
	/// Not a symbol character.
	None,
	/// Some symbols are single characters. We can produce them straight away.
	Single(Special),
	/// Others may have two characters, so we must handle those separately.
	Double { first: char },
}


impl SymbolChar {
	pub fn from_first(first: char) -> Self {
		if let Some(special) = Special::single(first) {
			Self::Single(special)
		} else if Special::first(first).is_some() {
			Self::Double { first }
		} else {
			Self::None
		}
	}
}
