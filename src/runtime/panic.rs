use std::{
	fmt::{self, Display},
	io,
};

use crate::emit::SlotIx;


/// A runtime fault. Execution stops at the first one.
#[derive(Debug)]
pub enum Panic {
	/// An instruction needed more operands than the stack had.
	StackUnderflow { at: usize },
	/// Division or remainder by zero.
	DivisionByZero { at: usize },
	/// Access to a slot the program didn't allocate.
	InvalidSlot {
		slot: SlotIx,
		at: usize,
	},
	/// A line of input that isn't an integer.
	InvalidInput {
		input: Box<str>,
		at: usize,
	},
	Io(io::Error),
}


impl Panic {
	pub fn stack_underflow(at: usize) -> Self {
		Self::StackUnderflow { at }
	}


	pub fn division_by_zero(at: usize) -> Self {
		Self::DivisionByZero { at }
	}


	pub fn invalid_slot(slot: SlotIx, at: usize) -> Self {
		Self::InvalidSlot { slot, at }
	}


	pub fn invalid_input(input: &str, at: usize) -> Self {
		Self::InvalidInput { input: input.into(), at }
	}
}


impl From<io::Error> for Panic {
	fn from(error: io::Error) -> Self {
		Self::Io(error)
	}
}


impl Display for Panic {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::StackUnderflow { at } => write!(f, "stack underflow at instruction {}", at),

			Self::DivisionByZero { at } => write!(f, "division by zero at instruction {}", at),

			Self::InvalidSlot { slot, at } => {
				write!(f, "invalid slot {} at instruction {}", slot.index(), at)
			}

			Self::InvalidInput { input, at } => {
				write!(f, "invalid integer input {:?} at instruction {}", input, at)
			}

			Self::Io(error) => write!(f, "io error: {}", error),
		}
	}
}


impl std::error::Error for Panic {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			Self::Io(error) => Some(error),
			_ => None,
		}
	}
}
