use std::{
	fmt::{self, Display},
	fs::File,
	path::Path,
};


/// Source code of a zoom program.
#[derive(Debug)]
pub struct Source {
	/// The origin path, may be something fictional like `<stdin>`.
	pub path: Box<Path>,
	/// The source code.
	pub contents: Box<str>,
}


impl Source {
	/// Load the source code from a file path.
	pub fn from_path<P>(path: P) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
	{
		let path = path.into();
		let file = File::open(&path)?;
		Self::from_reader(path, file)
	}


	/// Load the source code from a std::io::Read.
	/// The path argument may be anything, including fictional paths like `<stdin>`.
	pub fn from_reader<P, R>(path: P, mut reader: R) -> std::io::Result<Self>
	where
		P: Into<Box<Path>>,
		R: std::io::Read,
	{
		let path = path.into();
		let mut contents = String::with_capacity(512); // Expect a few characters.
		reader.read_to_string(&mut contents)?;

		Ok(Self { path, contents: contents.into() })
	}
}


/// A human readable position in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SourcePos {
	pub line: u32,
	pub column: u32,
}


impl SourcePos {
	/// Advance the position over the next character of the input, `None` being the end
	/// of input. The resulting position is the position of that character.
	///
	/// A carriage return starts a new line right away, regardless of a following line
	/// feed. A line feed only resets the column.
	pub fn visit(&mut self, input: Option<char>) {
		self.column += 1;

		match input {
			Some('\r') => {
				self.line += 1;
				self.column = 0;
			}

			Some('\n') => self.column = 0,

			_ => (),
		}
	}
}


impl Default for SourcePos {
	/// The position right before the first character.
	fn default() -> Self {
		Self { line: 1, column: 0 }
	}
}


impl Display for SourcePos {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "line {}, column {}", self.line, self.column)
	}
}
