mod fmt;

use serde::{Deserialize, Serialize};

use crate::emit::SlotIx;


/// Stack machine instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub enum Instruction {
	/// Push a constant that fits in 32 bits.
	PushInt(i32),
	/// Push a constant that needs the full 64 bits.
	PushLong(i64),
	Load(SlotIx),
	Store(SlotIx),
	Dup,
	Pop,

	Add,
	Sub,
	Mul,
	Div,
	Rem,
	And,
	Or,
	Xor,
	Not,

	Nop,
	ReadInt,
	WriteInt,

	/// Finish execution.
	Return,
}


impl Instruction {
	/// How many values the instruction pops, and how many it pushes afterwards.
	pub fn stack_effect(&self) -> (u32, u32) {
		match self {
			Self::PushInt(_) | Self::PushLong(_) | Self::Load(_) | Self::ReadInt => (0, 1),
			Self::Store(_) | Self::Pop | Self::WriteInt => (1, 0),
			Self::Dup => (1, 2),

			Self::Add
			| Self::Sub
			| Self::Mul
			| Self::Div
			| Self::Rem
			| Self::And
			| Self::Or
			| Self::Xor => (2, 1),

			Self::Not => (1, 1),

			Self::Nop | Self::Return => (0, 0),
		}
	}
}


/// A finished program, ready to be packaged or executed.
#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(Serialize, Deserialize)]
pub struct Program {
	pub instructions: Box<[Instruction]>,
	/// Number of local variable slots.
	pub locals: u32,
	/// The deepest the operand stack gets.
	pub max_stack: u32,
	/// Index of the first instruction to execute.
	pub entry: usize,
}
