use std::fmt::{self, Display};

use super::{Instruction, Program};


impl Display for Instruction {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::PushInt(value) => write!(f, "push.i32 {}", value),
			Self::PushLong(value) => write!(f, "push.i64 {}", value),
			Self::Load(slot) => write!(f, "load {}", slot.index()),
			Self::Store(slot) => write!(f, "store {}", slot.index()),
			Self::Dup => "dup".fmt(f),
			Self::Pop => "pop".fmt(f),
			Self::Add => "add".fmt(f),
			Self::Sub => "sub".fmt(f),
			Self::Mul => "mul".fmt(f),
			Self::Div => "div".fmt(f),
			Self::Rem => "rem".fmt(f),
			Self::And => "and".fmt(f),
			Self::Or => "or".fmt(f),
			Self::Xor => "xor".fmt(f),
			Self::Not => "not".fmt(f),
			Self::Nop => "nop".fmt(f),
			Self::ReadInt => "read".fmt(f),
			Self::WriteInt => "write".fmt(f),
			Self::Return => "ret".fmt(f),
		}
	}
}


impl Display for Program {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		writeln!(f, ".entry {}", self.entry)?;
		writeln!(f, ".locals {}", self.locals)?;
		writeln!(f, ".maxstack {}", self.max_stack)?;

		for (ix, instruction) in self.instructions.iter().enumerate() {
			writeln!(f, "{:>5}: {}", ix, instruction)?;
		}

		Ok(())
	}
}
