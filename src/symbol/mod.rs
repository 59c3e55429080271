mod fmt;

use intaglio::{Symbol as SymbolInner, SymbolTable};


/// A symbol is a reference to an identifier stored in the symbol interner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Symbol(SymbolInner);


/// A symbol interner for identifier names.
/// Interning makes identifier comparison in the symbol table a plain integer comparison.
#[derive(Debug)]
pub struct Interner(SymbolTable);


impl Interner {
	/// Create a new, empty interner.
	pub fn new() -> Self {
		Self(SymbolTable::new())
	}


	/// Get the symbol for a value, if it has been interned.
	#[cfg(test)]
	pub fn get<T>(&self, value: T) -> Option<Symbol>
	where
		T: AsRef<str>,
	{
		self.0
			.check_interned(value.as_ref())
			.map(Symbol)
	}


	/// Get the symbol for a value. The value is interned if needed.
	pub fn get_or_intern<T>(&mut self, value: T) -> Symbol
	where
		T: AsRef<str>,
	{
		let value = value.as_ref().to_owned();

		Symbol(
			self.0
				.intern(value)
				.expect("failed to intern symbol")
		)
	}


	/// Resolve the string for a symbol.
	pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
		self.0.get(symbol.0)
	}


	/// Get the number of interned strings.
	#[cfg(test)]
	pub fn len(&self) -> usize {
		self.0.len()
	}
}


impl Default for Interner {
	fn default() -> Self {
		Self::new()
	}
}
