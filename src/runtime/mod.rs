mod panic;
#[cfg(test)]
mod tests;

use std::io::{BufRead, Write};

use crate::{
	emit::SlotIx,
	program::{Instruction, Program},
};
pub use panic::Panic;


/// The stack machine that executes compiled programs.
///
/// Reading takes one line of input per integer. Writing prints one integer per line.
#[derive(Debug)]
pub struct Runtime<R, W> {
	input: R,
	output: W,
	stack: Vec<i64>,
	locals: Vec<i64>,
}


impl<R, W> Runtime<R, W>
where
	R: BufRead,
	W: Write,
{
	pub fn new(input: R, output: W) -> Self {
		Self {
			input,
			output,
			stack: Vec::new(),
			locals: Vec::new(),
		}
	}


	/// Execute a program from its entry point until it returns.
	/// Locals start zeroed on each execution.
	pub fn eval(&mut self, program: &Program) -> Result<(), Panic> {
		self.stack.clear();
		self.stack.reserve(program.max_stack as usize);
		self.locals.clear();
		self.locals.resize(program.locals as usize, 0);

		log::debug!(
			"executing {} instructions from entry {}",
			program.instructions.len(),
			program.entry
		);

		let result = self.eval_instructions(program);

		// Output written before a panic must still reach the writer.
		let flushed = self.output.flush();

		result?;
		flushed?;

		Ok(())
	}


	/// Destroy the runtime, giving back the input and output handles.
	#[cfg(test)]
	pub fn into_inner(self) -> (R, W) {
		(self.input, self.output)
	}


	fn eval_instructions(&mut self, program: &Program) -> Result<(), Panic> {
		let instructions = program.instructions
			.iter()
			.enumerate()
			.skip(program.entry);

		for (at, instruction) in instructions {
			if !self.eval_instruction(*instruction, at)? {
				break;
			}
		}

		Ok(())
	}


	/// Execute a single instruction, producing false when execution must stop.
	fn eval_instruction(&mut self, instruction: Instruction, at: usize) -> Result<bool, Panic> {
		match instruction {
			Instruction::PushInt(value) => self.stack.push(value.into()),
			Instruction::PushLong(value) => self.stack.push(value),

			Instruction::Load(slot) => {
				let value = *self.local(slot, at)?;
				self.stack.push(value);
			}

			Instruction::Store(slot) => {
				let value = self.pop(at)?;
				*self.local(slot, at)? = value;
			}

			Instruction::Dup => {
				let value = self.pop(at)?;
				self.stack.push(value);
				self.stack.push(value);
			}

			Instruction::Pop => {
				self.pop(at)?;
			}

			Instruction::Add => self.binop(at, |a, b| Ok(a.wrapping_add(b)))?,
			Instruction::Sub => self.binop(at, |a, b| Ok(a.wrapping_sub(b)))?,
			Instruction::Mul => self.binop(at, |a, b| Ok(a.wrapping_mul(b)))?,

			Instruction::Div => self.binop(
				at,
				|a, b| match b {
					0 => Err(Panic::division_by_zero(at)),
					b => Ok(a.wrapping_div(b)),
				}
			)?,

			Instruction::Rem => self.binop(
				at,
				|a, b| match b {
					0 => Err(Panic::division_by_zero(at)),
					b => Ok(a.wrapping_rem(b)),
				}
			)?,

			Instruction::And => self.binop(at, |a, b| Ok(a & b))?,
			Instruction::Or => self.binop(at, |a, b| Ok(a | b))?,
			Instruction::Xor => self.binop(at, |a, b| Ok(a ^ b))?,

			Instruction::Not => {
				let value = self.pop(at)?;
				self.stack.push(!value);
			}

			Instruction::Nop => (),

			Instruction::ReadInt => {
				let value = self.read_integer(at)?;
				self.stack.push(value);
			}

			Instruction::WriteInt => {
				let value = self.pop(at)?;
				writeln!(self.output, "{}", value)?;
			}

			Instruction::Return => return Ok(false),
		}

		Ok(true)
	}


	/// Pop two operands, pushing the result of the operation. The right operand is on top.
	fn binop<F>(&mut self, at: usize, op: F) -> Result<(), Panic>
	where
		F: FnOnce(i64, i64) -> Result<i64, Panic>,
	{
		let right = self.pop(at)?;
		let left = self.pop(at)?;

		self.stack.push(op(left, right)?);

		Ok(())
	}


	fn pop(&mut self, at: usize) -> Result<i64, Panic> {
		self.stack
			.pop()
			.ok_or_else(|| Panic::stack_underflow(at))
	}


	fn local(&mut self, slot: SlotIx, at: usize) -> Result<&mut i64, Panic> {
		self.locals
			.get_mut(slot.index())
			.ok_or_else(|| Panic::invalid_slot(slot, at))
	}


	/// Read an integer from the next line of input. End of input reads as zero.
	fn read_integer(&mut self, at: usize) -> Result<i64, Panic> {
		let mut line = String::new();

		if self.input.read_line(&mut line)? == 0 {
			return Ok(0);
		}

		let line = line.trim();

		line
			.parse()
			.map_err(|_| Panic::invalid_input(line, at))
	}
}
