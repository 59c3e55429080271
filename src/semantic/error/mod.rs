mod fmt;

use super::{Symbol, SourcePos};


/// The kind of symbol table error. Neither can be triggered by the parser, which always
/// declares an identifier before resolving it, so both indicate a defect.
#[derive(Debug)]
pub enum ErrorKind {
	/// Variable resolved before being declared.
	Undeclared(Symbol),
	/// Variable declared twice in the same scope.
	SlotConflict(Symbol),
}


/// A symbol table error.
#[derive(Debug)]
pub struct Error {
	pub kind: ErrorKind,
	pub pos: SourcePos,
}


impl Error {
	/// Variable resolved before being declared.
	pub fn undeclared(symbol: Symbol, pos: SourcePos) -> Self {
		Self {
			kind: ErrorKind::Undeclared(symbol),
			pos
		}
	}


	/// Variable declared twice in the same scope.
	pub fn slot_conflict(symbol: Symbol, pos: SourcePos) -> Self {
		Self {
			kind: ErrorKind::SlotConflict(symbol),
			pos
		}
	}
}


impl std::error::Error for Error {}
