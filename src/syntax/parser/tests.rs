use super::*;
use crate::{
	emit::Assembler,
	program::{Instruction::*, Instruction, Program},
	symbol,
	syntax::lexer::Cursor,
};


type Errors = Vec<(u32, u32, String)>;


fn parse(input: &str) -> Result<Program, Errors> {
	let mut interner = symbol::Interner::new();
	let mut errors = Errors::new();
	let mut report = |line, column, message: &str| errors.push((line, column, message.to_owned()));

	let lexer = Lexer::new(Cursor::from(input), &mut interner);
	let program = Parser::new(lexer, SymbolTable::default(), Assembler::new(), &mut report).parse();

	match program {
		Some(program) => {
			assert!(errors.is_empty());
			Ok(program)
		}

		None => {
			assert_eq!(errors.len(), 1, "expected exactly one error, got {:?}", errors);
			Err(errors)
		}
	}
}


fn instructions(input: &str) -> Vec<Instruction> {
	parse(input)
		.expect("parse failed")
		.instructions
		.to_vec()
}


fn error(input: &str) -> (u32, u32, String) {
	let mut errors = parse(input).expect_err("parse should fail");
	errors.remove(0)
}


fn slot(ix: u32) -> SlotIx {
	SlotIx::new(ix)
}


#[test]
fn test_empty_program() {
	assert_eq!(instructions(""), &[Return]);
	assert_eq!(instructions(" ;;\r\n ; "), &[Return]);
}


#[test]
fn test_assignment() {
	let program = parse("a = 1;").expect("parse failed");

	assert_eq!(program.locals, 1);
	assert_eq!(
		&*program.instructions,
		&[PushInt(1), Store(slot(0)), Load(slot(0)), Pop, Return]
	);
}


#[test]
fn test_chained_assignment() {
	assert_eq!(
		instructions("a = b = 7;"),
		&[
			PushInt(7),
			Store(slot(1)),
			Load(slot(1)),
			Store(slot(0)),
			Load(slot(0)),
			Pop,
			Return,
		]
	);
}


#[test]
fn test_postfix_increment() {
	assert_eq!(
		instructions("a++;"),
		&[Load(slot(0)), Dup, PushInt(1), Add, Store(slot(0)), Pop, Return]
	);

	assert_eq!(
		instructions("a--;"),
		&[Load(slot(0)), Dup, PushInt(1), Sub, Store(slot(0)), Pop, Return]
	);
}


#[test]
fn test_prefix_increment() {
	assert_eq!(
		instructions("++a;"),
		&[Load(slot(0)), PushInt(1), Add, Dup, Store(slot(0)), Pop, Return]
	);

	assert_eq!(
		instructions("--a;"),
		&[Load(slot(0)), PushInt(1), Sub, Dup, Store(slot(0)), Pop, Return]
	);
}


#[test]
fn test_variables_keep_their_slots() {
	let program = parse("a = 1; b = a; a;").expect("parse failed");

	assert_eq!(program.locals, 2);
	assert_eq!(
		&*program.instructions,
		&[
			PushInt(1), Store(slot(0)), Load(slot(0)), Pop,
			Load(slot(0)), Store(slot(1)), Load(slot(1)), Pop,
			Load(slot(0)), Pop,
			Return,
		]
	);
}


#[test]
fn test_right_associativity() {
	// 10 - (4 - 3)
	assert_eq!(
		instructions("zoom(10 - 4 - 3);"),
		&[PushInt(10), PushInt(4), PushInt(3), Sub, Sub, WriteInt, PushInt(0), Pop, Return]
	);

	// 8 / (4 / 2)
	assert_eq!(
		instructions("8 / 4 / 2;"),
		&[PushInt(8), PushInt(4), PushInt(2), Div, Div, Pop, Return]
	);
}


#[test]
fn test_precedence() {
	assert_eq!(
		instructions("1 | 2 & 3 + 4 * 5;"),
		&[
			PushInt(1), PushInt(2), PushInt(3), PushInt(4), PushInt(5),
			Mul, Add, And, Or,
			Pop,
			Return,
		]
	);

	assert_eq!(
		instructions("(1 + 2) % 3;"),
		&[PushInt(1), PushInt(2), Add, PushInt(3), Rem, Pop, Return]
	);
}


#[test]
fn test_bitwise_not() {
	assert_eq!(
		instructions("~~a;"),
		&[Load(slot(0)), Not, Not, Pop, Return]
	);
}


#[test]
fn test_io() {
	assert_eq!(
		instructions("x = scanf();"),
		&[ReadInt, Store(slot(0)), Load(slot(0)), Pop, Return]
	);

	assert_eq!(
		instructions("printf(x);"),
		&[Load(slot(0)), WriteInt, PushInt(0), Pop, Return]
	);
}


#[test]
fn test_wide_constant() {
	assert_eq!(
		instructions("4294967296;"),
		&[PushLong(4294967296), Pop, Return]
	);
}


#[test]
fn test_nop_is_an_identifier() {
	let program = parse("nop;").expect("parse failed");

	assert_eq!(program.locals, 1);
	assert_eq!(&*program.instructions, &[Load(slot(0)), Pop, Return]);
}


#[test]
fn test_missing_expression() {
	assert_eq!(
		error("a = ;"),
		(1, 5, "unexpected ';', expected expression".to_owned())
	);

	assert_eq!(
		error("1 + ;"),
		(1, 5, "unexpected ';', expected expression".to_owned())
	);
}


#[test]
fn test_missing_semicolon() {
	assert_eq!(
		error("a = 1"),
		(1, 6, "unexpected end of input, expected ';'".to_owned())
	);

	assert_eq!(
		error("a b;"),
		(1, 3, "unexpected 'b', expected ';'".to_owned())
	);
}


#[test]
fn test_unbalanced_parens() {
	assert_eq!(
		error("zoom(1;"),
		(1, 7, "unexpected ';', expected ')'".to_owned())
	);

	assert_eq!(
		error("scanf(1);"),
		(1, 7, "unexpected '1', expected ')'".to_owned())
	);

	assert_eq!(
		error(")"),
		(1, 1, "unexpected ')', expected statement".to_owned())
	);
}


#[test]
fn test_return_is_reserved() {
	assert_eq!(
		error("a; return;"),
		(1, 4, "unexpected 'return', expected statement".to_owned())
	);
}


#[test]
fn test_increment_requires_identifier() {
	assert_eq!(
		error("++1;"),
		(1, 3, "unexpected '1', expected identifier".to_owned())
	);
}


#[test]
fn test_unrecognized_character() {
	assert_eq!(
		error("a # b;"),
		(1, 3, "unrecognized character '#'".to_owned())
	);

	assert_eq!(
		error("$"),
		(1, 1, "unrecognized character '$'".to_owned())
	);
}


#[test]
fn test_number_overflow() {
	assert_eq!(
		error("x = 99999999999999999999;"),
		(1, 5, "integer literal is too large: 99999999999999999999".to_owned())
	);
}


#[test]
fn test_error_position_on_later_line() {
	assert_eq!(
		error("a = 1;\rb = ;"),
		(2, 5, "unexpected ';', expected expression".to_owned())
	);
}
