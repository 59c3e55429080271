use std::fmt::Display as _;

use super::{Error, ErrorKind};
use crate::{
	fmt::Display,
	symbol,
};


impl<'a> Display<'a> for ErrorKind {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		match self {
			Self::Undeclared(symbol) => {
				"undeclared variable '".fmt(f)?;
				symbol.fmt(f, context)?;
				"'".fmt(f)
			}

			Self::SlotConflict(symbol) => {
				"variable '".fmt(f)?;
				symbol.fmt(f, context)?;
				"' already has a slot in this scope".fmt(f)
			}
		}
	}
}


impl<'a> Display<'a> for Error {
	type Context = &'a symbol::Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter, context: Self::Context) -> std::fmt::Result {
		self.kind.fmt(f, context)
	}
}


/// We need this in order to be able to implement std::error::Error.
impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self.kind {
			ErrorKind::Undeclared(_) => write!(f, "{} - undeclared variable", self.pos),
			ErrorKind::SlotConflict(_) => write!(f, "{} - duplicate variable slot", self.pos),
		}
	}
}
