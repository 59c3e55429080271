use super::{
	Cursor,
	Error,
	Root,
	SourcePos,
	State,
	Token,
	TokenKind,
	Transition,
};


/// The state for lexing integer literals. There are no signs, radix prefixes or
/// fractional parts.
#[derive(Debug)]
pub(super) struct NumberLiteral {
	start_offset: usize,
	pos: SourcePos,
}


impl NumberLiteral {
	pub fn at(cursor: &Cursor) -> Self {
		Self { start_offset: cursor.offset(), pos: cursor.pos() }
	}


	pub fn visit(self, cursor: &Cursor) -> Transition {
		match cursor.peek() {
			// Consume digits.
			Some(value) if value.is_ascii_digit() => Transition::step(self),

			// Stop and produce if a non-digit is found, including EOF.
			_ => match self.parse(cursor) {
				Ok(token) => Transition::resume_produce(Root, token),
				Err(error) => Transition::resume_error(Root, error),
			},
		}
	}


	/// Parse the consumed characters.
	fn parse(&self, cursor: &Cursor) -> Result<Token, Error> {
		let number = cursor.slice_from(self.start_offset);

		// Only digits were consumed, so the only possible failure is overflow.
		match number.parse() {
			Ok(int) => Ok(Token { kind: TokenKind::Number(int), pos: self.pos }),
			Err(_) => Err(Error::number_overflow(number, self.pos)),
		}
	}
}


impl From<NumberLiteral> for State {
	fn from(state: NumberLiteral) -> State {
		State::NumberLiteral(state)
	}
}
