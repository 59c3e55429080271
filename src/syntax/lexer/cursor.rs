use super::SourcePos;


/// A cursor for the source code.
/// The position always refers to the character under the cursor, or to the end of input.
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
	input: &'a str,
	offset: usize,
	pos: SourcePos,
}


impl<'a> Cursor<'a> {
	pub fn pos(&self) -> SourcePos {
		self.pos
	}


	pub fn offset(&self) -> usize {
		self.offset
	}


	pub fn peek(&self) -> Option<char> {
		self.input[self.offset ..].chars().next()
	}


	/// The consumed input since the given offset.
	pub fn slice_from(&self, start_offset: usize) -> &'a str {
		&self.input[start_offset .. self.offset]
	}


	pub fn step(&mut self) {
		if let Some(c) = self.peek() {
			self.offset += c.len_utf8();
			self.pos.visit(self.peek());
		}
	}
}


impl<'a> From<&'a str> for Cursor<'a> {
	fn from(input: &'a str) -> Self {
		let mut pos = SourcePos::default();
		pos.visit(input.chars().next());

		Self { input, offset: 0, pos }
	}
}


impl<'a> From<&'a super::Source> for Cursor<'a> {
	fn from(source: &'a super::Source) -> Self {
		Self::from(&*source.contents)
	}
}
