mod fmt;

use super::SourcePos;


/// The kind of lexical error.
#[derive(Debug)]
pub enum ErrorKind {
	/// Integer literal that doesn't fit in 64 bits.
	NumberOverflow(Box<str>),
}


/// A lexical error.
#[derive(Debug)]
pub struct Error {
	pub error: ErrorKind,
	pub pos: SourcePos,
}


impl std::error::Error for Error {}


impl Error {
	pub fn number_overflow(number: &str, pos: SourcePos) -> Self {
		Self {
			error: ErrorKind::NumberOverflow(number.into()),
			pos,
		}
	}
}
