use std::collections::HashMap;

use super::{Error, Symbol, SourcePos};
use crate::emit::{Emitter, SlotIx};


/// The bindings of a single lexical region.
type Scope = HashMap<Symbol, SlotIx>;


/// A scope stack, binding identifiers to the slots that hold them.
///
/// A program is a single implicit scope, but lookups go through the whole stack so that
/// nested scopes can be added later.
#[derive(Debug, Default)]
pub struct SymbolTable(Vec<Scope>);


impl SymbolTable {
	/// Enter a new empty scope.
	pub fn begin_scope(&mut self) {
		self.0.push(Scope::new());
	}


	/// Exit the current scope, returning its bindings.
	/// Panics if the stack is empty.
	pub fn end_scope(&mut self) -> Scope {
		self.0
			.pop()
			.expect("attempt to exit empty stack")
	}


	/// Check if the current scope has a binding for the symbol.
	pub fn exists_in_current_scope(&self, symbol: Symbol) -> bool {
		self.0
			.last()
			.map_or(false, |scope| scope.contains_key(&symbol))
	}


	/// Declares a symbol in the current scope, allocating a new slot from the emitter.
	/// Fails if the symbol was already declared in the current scope.
	/// Panics if the stack is empty.
	pub fn declare_local<E: Emitter>(
		&mut self,
		symbol: Symbol,
		pos: SourcePos,
		emitter: &mut E,
	) -> Result<SlotIx, Error> {
		let scope = self.0.last_mut().expect("empty scope stack");

		if scope.contains_key(&symbol) {
			return Err(Error::slot_conflict(symbol, pos));
		}

		let slot = emitter.declare_local();
		scope.insert(symbol, slot);

		Ok(slot)
	}


	/// Resolve the slot for a symbol, searching from the innermost scope.
	pub fn resolve(&self, symbol: Symbol, pos: SourcePos) -> Result<SlotIx, Error> {
		self.0
			.iter()
			.rev()
			.find_map(|scope| scope.get(&symbol))
			.copied()
			.ok_or_else(|| Error::undeclared(symbol, pos))
	}


	/// Resolve the slot for a symbol, declaring it in the current scope on first use.
	pub fn lookup_or_declare<E: Emitter>(
		&mut self,
		symbol: Symbol,
		pos: SourcePos,
		emitter: &mut E,
	) -> Result<SlotIx, Error> {
		if self.exists_in_current_scope(symbol) {
			self.resolve(symbol, pos)
		} else {
			self.declare_local(symbol, pos, emitter)
		}
	}


	/// The number of open scopes.
	pub fn depth(&self) -> usize {
		self.0.len()
	}
}
