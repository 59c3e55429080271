mod assembler;

use serde::{Deserialize, Serialize};

pub use assembler::Assembler;


/// A handle to the storage of one local variable.
/// Slots are issued by the emitter, and are only meaningful to the emitter that issued
/// them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[derive(Serialize, Deserialize)]
pub struct SlotIx(u32);


impl SlotIx {
	pub fn new(index: u32) -> Self {
		Self(index)
	}


	pub fn index(&self) -> usize {
		self.0 as usize
	}
}


/// The code generation target: an abstract operand stack machine.
///
/// Every operation either pushes one value, pops its operands and pushes a result, or
/// has no stack effect at all. The parser drives the emitter as it recognizes the
/// grammar, so the concrete instruction set stays behind this trait.
pub trait Emitter {
	/// The finished program.
	type Artifact;

	/// `→ v`: push an integer constant.
	fn push_constant(&mut self, value: i64);

	/// `→ v`: push the value of a local slot.
	fn load_local(&mut self, slot: SlotIx);

	/// `v →`: pop a value into a local slot.
	fn store_local(&mut self, slot: SlotIx);

	/// `v → v v`
	fn duplicate(&mut self);

	/// `v →`
	fn pop(&mut self);

	/// `a b → a + b`
	fn add(&mut self);

	/// `a b → a - b`
	fn sub(&mut self);

	/// `a b → a * b`
	fn mul(&mut self);

	/// `a b → a / b`
	fn div(&mut self);

	/// `a b → a % b`
	fn rem(&mut self);

	/// `a b → a & b`
	fn bit_and(&mut self);

	/// `a b → a | b`
	fn bit_or(&mut self);

	/// `a b → a ^ b`
	fn bit_xor(&mut self);

	/// `a → !a`
	fn bit_not(&mut self);

	fn nop(&mut self);

	/// `→ v`: read an integer from the input.
	fn read_integer(&mut self);

	/// `v →`: write an integer to the output, followed by a line terminator.
	fn write_integer(&mut self);

	/// Allocate storage for a new local variable.
	fn declare_local(&mut self) -> SlotIx;

	/// Close the instruction stream, mark the entry point and produce the artifact.
	fn finalize(self) -> Self::Artifact;
}
