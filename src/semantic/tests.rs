use assert_matches::assert_matches;

use super::*;
use crate::{
	emit::{Assembler, Emitter},
	symbol,
};


fn pos() -> SourcePos {
	SourcePos { line: 1, column: 1 }
}


#[test]
fn test_declare_on_first_use() {
	let mut interner = symbol::Interner::new();
	let a = interner.get_or_intern("a");
	let b = interner.get_or_intern("b");

	let mut assembler = Assembler::new();
	let mut table = SymbolTable::default();
	table.begin_scope();

	let a1 = table.lookup_or_declare(a, pos(), &mut assembler).expect("declare a");
	let b1 = table.lookup_or_declare(b, pos(), &mut assembler).expect("declare b");
	let a2 = table.lookup_or_declare(a, pos(), &mut assembler).expect("resolve a");

	assert_eq!(a1, a2);
	assert_ne!(a1, b1);

	table.end_scope();

	assert_eq!(assembler.finalize().locals, 2);
}


#[test]
fn test_duplicate_declaration() {
	let mut interner = symbol::Interner::new();
	let a = interner.get_or_intern("a");

	let mut assembler = Assembler::new();
	let mut table = SymbolTable::default();
	table.begin_scope();

	assert!(!table.exists_in_current_scope(a));
	table.declare_local(a, pos(), &mut assembler).expect("declare a");
	assert!(table.exists_in_current_scope(a));

	assert_matches!(
		table.declare_local(a, pos(), &mut assembler),
		Err(Error { kind: ErrorKind::SlotConflict(symbol), .. }) if symbol == a
	);

	// The failed declaration must not allocate a slot.
	assert_eq!(assembler.finalize().locals, 1);
}


#[test]
fn test_resolve_undeclared() {
	let mut interner = symbol::Interner::new();
	let a = interner.get_or_intern("a");

	let mut table = SymbolTable::default();
	table.begin_scope();

	assert_matches!(
		table.resolve(a, pos()),
		Err(Error { kind: ErrorKind::Undeclared(_), pos: SourcePos { line: 1, column: 1 } })
	);
}


#[test]
fn test_nested_scopes() {
	let mut interner = symbol::Interner::new();
	let a = interner.get_or_intern("a");
	let b = interner.get_or_intern("b");

	let mut assembler = Assembler::new();
	let mut table = SymbolTable::default();

	table.begin_scope();
	let outer_a = table.declare_local(a, pos(), &mut assembler).expect("declare a");

	table.begin_scope();
	assert_eq!(table.depth(), 2);

	// Outer bindings are visible, but don't exist in the current scope.
	assert!(!table.exists_in_current_scope(a));
	assert_eq!(table.resolve(a, pos()).expect("resolve a"), outer_a);

	// Shadowing.
	let inner_a = table.lookup_or_declare(a, pos(), &mut assembler).expect("shadow a");
	assert_ne!(inner_a, outer_a);
	assert_eq!(table.resolve(a, pos()).expect("resolve a"), inner_a);

	table.declare_local(b, pos(), &mut assembler).expect("declare b");

	let inner = table.end_scope();
	assert_eq!(inner.len(), 2);

	assert_eq!(table.resolve(a, pos()).expect("resolve a"), outer_a);
	assert!(table.resolve(b, pos()).is_err());

	table.end_scope();
	assert_eq!(table.depth(), 0);
	assert!(!table.exists_in_current_scope(a));
}


#[test]
#[should_panic(expected = "attempt to exit empty stack")]
fn test_end_scope_on_empty_stack() {
	SymbolTable::default().end_scope();
}
