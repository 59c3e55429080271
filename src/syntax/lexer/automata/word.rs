use super::{
	Cursor,
	Keyword,
	Root,
	SourcePos,
	State,
	SymbolInterner,
	Token,
	TokenKind,
	Transition,
};


/// The state for lexing identifiers and keywords.
#[derive(Debug)]
pub(super) struct Word {
	start_offset: usize,
	pos: SourcePos,
}


impl Word {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor, interner: &mut SymbolInterner) -> Transition {
		// We don't need to check if the first character is a letter here, because the Root
		// state will only transition to this state if that is the case.
		match cursor.peek() {
			// Word character.
			Some(c) if c.is_word() => Transition::step(self),

			// If we visit EOF or a non-identifier character, we should just produce.
			_ => {
				let word = cursor.slice_from(self.start_offset);
				let token = to_token(word, interner);

				Transition::resume_produce(Root, Token { kind: token, pos: self.pos })
			}
		}
	}
}


impl From<Word> for State {
	fn from(state: Word) -> State {
		State::Word(state)
	}
}


pub fn to_token(word: &str, interner: &mut SymbolInterner) -> TokenKind {
	match Keyword::from_word(word) {
		Some(keyword) => TokenKind::Keyword(keyword),

		None => {
			let symbol = interner.get_or_intern(word);
			TokenKind::Identifier(symbol)
		}
	}
}


/// Helper trait for checking if a character is a valid word constituent.
pub trait IsWord {
	fn is_word_start(&self) -> bool;
	fn is_word(&self) -> bool;
}


impl IsWord for char {
	fn is_word_start(&self) -> bool {
		self.is_ascii_alphabetic()
	}

	fn is_word(&self) -> bool {
		self.is_ascii_alphanumeric() || *self == '_' || *self == '.'
	}
}
