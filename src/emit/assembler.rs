use std::convert::TryFrom;

use super::{Emitter, SlotIx};
use crate::program::{Instruction, Program};


/// An emitter that assembles instructions for the runtime's stack machine.
#[derive(Debug, Default)]
pub struct Assembler {
	instructions: Vec<Instruction>,
	locals: u32,
	/// Operand stack depth after the last emitted instruction.
	depth: u32,
	max_depth: u32,
}


impl Assembler {
	pub fn new() -> Self {
		Self::default()
	}


	/// The instructions emitted so far.
	#[cfg(test)]
	pub fn instructions(&self) -> &[Instruction] {
		&self.instructions
	}


	fn emit(&mut self, instruction: Instruction) {
		let (pops, pushes) = instruction.stack_effect();

		debug_assert!(
			self.depth >= pops,
			"operand stack underflow emitting {} at {}",
			instruction,
			self.instructions.len()
		);

		self.depth = self.depth.saturating_sub(pops) + pushes;
		self.max_depth = self.max_depth.max(self.depth);

		log::trace!("{:>5}: {} (depth {})", self.instructions.len(), instruction, self.depth);

		self.instructions.push(instruction);
	}
}


impl Emitter for Assembler {
	type Artifact = Program;

	fn push_constant(&mut self, value: i64) {
		// Use the narrowest instruction that holds the value.
		let instruction = match i32::try_from(value) {
			Ok(value) => Instruction::PushInt(value),
			Err(_) => Instruction::PushLong(value),
		};

		self.emit(instruction)
	}

	fn load_local(&mut self, slot: SlotIx) {
		self.emit(Instruction::Load(slot))
	}

	fn store_local(&mut self, slot: SlotIx) {
		self.emit(Instruction::Store(slot))
	}

	fn duplicate(&mut self) {
		self.emit(Instruction::Dup)
	}

	fn pop(&mut self) {
		self.emit(Instruction::Pop)
	}

	fn add(&mut self) {
		self.emit(Instruction::Add)
	}

	fn sub(&mut self) {
		self.emit(Instruction::Sub)
	}

	fn mul(&mut self) {
		self.emit(Instruction::Mul)
	}

	fn div(&mut self) {
		self.emit(Instruction::Div)
	}

	fn rem(&mut self) {
		self.emit(Instruction::Rem)
	}

	fn bit_and(&mut self) {
		self.emit(Instruction::And)
	}

	fn bit_or(&mut self) {
		self.emit(Instruction::Or)
	}

	fn bit_xor(&mut self) {
		self.emit(Instruction::Xor)
	}

	fn bit_not(&mut self) {
		self.emit(Instruction::Not)
	}

	fn nop(&mut self) {
		self.emit(Instruction::Nop)
	}

	fn read_integer(&mut self) {
		self.emit(Instruction::ReadInt)
	}

	fn write_integer(&mut self) {
		self.emit(Instruction::WriteInt)
	}

	fn declare_local(&mut self) -> SlotIx {
		let slot = SlotIx::new(self.locals);
		self.locals += 1;
		slot
	}

	fn finalize(mut self) -> Program {
		self.emit(Instruction::Return);

		log::debug!(
			"finalized program: {} instructions, {} locals, max stack {}",
			self.instructions.len(),
			self.locals,
			self.max_depth,
		);

		Program {
			instructions: self.instructions.into(),
			locals: self.locals,
			max_stack: self.max_depth,
			entry: 0,
		}
	}
}
