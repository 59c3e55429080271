use std::{
	fs,
	io::{self, BufWriter},
	path::Path,
};

use assert_matches::assert_matches;

use crate::{
	compiler,
	emit::SlotIx,
	program::{Instruction, Program},
	symbol,
	syntax::Source,
	tests,
};
use super::{Panic, Runtime};


fn compile(input: &str) -> Program {
	let source = Source::from_reader(Path::new("<test>"), input.as_bytes())
		.expect("failed to read source");
	let mut interner = symbol::Interner::new();
	let mut report = |line: u32, column: u32, message: &str| {
		panic!("{}:{} - {}", line, column, message)
	};

	compiler::compile(&source, &mut interner, &mut report)
		.expect("compilation failed")
}


fn run(program: &Program, input: &str) -> Result<String, Panic> {
	let mut runtime = Runtime::new(input.as_bytes(), Vec::new());
	runtime.eval(program)?;

	let (_, output) = runtime.into_inner();

	Ok(String::from_utf8(output).expect("output is not utf-8"))
}


fn eval(source: &str, input: &str) -> Result<String, Panic> {
	run(&compile(source), input)
}


fn program(instructions: &[Instruction], locals: u32, entry: usize) -> Program {
	Program {
		instructions: instructions.into(),
		locals,
		max_stack: 2,
		entry,
	}
}


#[test]
fn test_single_slot() {
	let program = compile("a = 1; a = a + 1; zoom(a);");

	assert_eq!(program.locals, 1);
	assert_eq!(run(&program, "").expect("panic"), "2\n");
}


#[test]
fn test_right_associativity() {
	assert_eq!(eval("zoom(10 - 3 - 2);", "").expect("panic"), "9\n");
	assert_eq!(eval("zoom(2 * 3 % 2);", "").expect("panic"), "2\n");
}


#[test]
fn test_increments() {
	assert_eq!(eval("a = 5; zoom(a++); zoom(a);", "").expect("panic"), "5\n6\n");
	assert_eq!(eval("a = 5; zoom(++a); zoom(a);", "").expect("panic"), "6\n6\n");
	assert_eq!(eval("a = 5; zoom(a--); zoom(--a);", "").expect("panic"), "5\n3\n");
}


#[test]
fn test_bitwise() {
	assert_eq!(
		eval("zoom(12 & 10); zoom(12 | 3); zoom(~0);", "").expect("panic"),
		"8\n15\n-1\n"
	);
}


#[test]
fn test_locals_start_zeroed() {
	assert_eq!(eval("zoom(a); b++; zoom(b);", "").expect("panic"), "0\n1\n");
}


#[test]
fn test_write_evaluates_to_zero() {
	assert_eq!(eval("printf(zoom(5) + 1);", "").expect("panic"), "5\n1\n");
}


#[test]
fn test_wrapping_arithmetic() {
	assert_eq!(
		eval("zoom(9223372036854775807 + 1);", "").expect("panic"),
		"-9223372036854775808\n"
	);

	assert_eq!(
		eval("a = ~9223372036854775807; zoom(a / (0 - 1)); zoom(a % (0 - 1));", "")
			.expect("panic"),
		"-9223372036854775808\n0\n"
	);
}


#[test]
fn test_read() {
	assert_eq!(
		eval("a = scanf(); b = scanf(); zoom(a * b);", "6\n  -7 \r\n").expect("panic"),
		"-42\n"
	);
}


#[test]
fn test_read_end_of_input() {
	assert_eq!(eval("zoom(scanf()); zoom(scanf());", "3").expect("panic"), "3\n0\n");
}


#[test]
fn test_read_invalid_input() {
	assert_matches!(
		eval("zoom(scanf());", "three\n"),
		Err(Panic::InvalidInput { ref input, at: 0 }) if &**input == "three"
	);
}


#[test]
fn test_division_by_zero() {
	assert_matches!(eval("zoom(1 / 0);", ""), Err(Panic::DivisionByZero { at: 2 }));
	assert_matches!(eval("a % a;", ""), Err(Panic::DivisionByZero { .. }));
}


#[test]
fn test_output_before_panic() {
	let program = compile("zoom(1); zoom(1 / 0);");
	let mut runtime = Runtime::new(&b""[..], Vec::new());

	assert_matches!(runtime.eval(&program), Err(Panic::DivisionByZero { .. }));

	let (_, output) = runtime.into_inner();
	assert_eq!(output, b"1\n");
}


#[test]
fn test_flush_on_panic() {
	let program = compile("zoom(1); zoom(1 / 0);");
	let mut runtime = Runtime::new(&b""[..], BufWriter::new(Vec::new()));

	assert_matches!(runtime.eval(&program), Err(Panic::DivisionByZero { .. }));

	let (_, output) = runtime.into_inner();
	assert!(output.buffer().is_empty());
	assert_eq!(output.get_ref(), b"1\n");
}


#[test]
fn test_stack_underflow() {
	let program = program(&[Instruction::PushInt(1), Instruction::Add], 0, 0);

	assert_matches!(run(&program, ""), Err(Panic::StackUnderflow { at: 1 }));
}


#[test]
fn test_invalid_slot() {
	let program = program(&[Instruction::Load(SlotIx::new(3)), Instruction::Return], 1, 0);

	assert_matches!(
		run(&program, ""),
		Err(Panic::InvalidSlot { slot, at: 0 }) if slot == SlotIx::new(3)
	);
}


#[test]
fn test_entry_point() {
	let instructions = [
		Instruction::PushInt(1),
		Instruction::WriteInt,
		Instruction::PushLong(1 << 40),
		Instruction::WriteInt,
		Instruction::Return,
		Instruction::Nop,
	];

	assert_eq!(run(&program(&instructions, 0, 2), "").expect("panic"), "1099511627776\n");
	assert_eq!(run(&program(&instructions, 0, 5), "").expect("panic"), "");
}


#[test]
fn test_runtime_reuse() {
	let program = compile("a++; zoom(a);");
	let mut runtime = Runtime::new(&b""[..], Vec::new());

	runtime.eval(&program).expect("panic");
	runtime.eval(&program).expect("panic");

	let (_, output) = runtime.into_inner();
	assert_eq!(output, b"1\n1\n");
}


/// Contents of the file next to the given one, with another extension.
fn sibling(path: &Path, extension: &str) -> io::Result<Option<String>> {
	let path = path.with_extension(extension);

	if path.exists() {
		fs::read_to_string(path).map(Some)
	} else {
		Ok(None)
	}
}


/// Compile every program in the directory, rendering compile errors as strings.
fn compile_dir<F>(path: &str, mut check: F) -> io::Result<()>
where
	F: FnMut(&Path, Result<Program, String>) -> io::Result<()>,
{
	tests::util::test_dir(
		path,
		"zm",
		|path, file| {
			let source = Source::from_reader(path, file)?;
			let mut interner = symbol::Interner::new();

			let mut error = None;
			let mut report = |line: u32, column: u32, message: &str| {
				error = Some(format!("{}:{} - {}", line, column, message));
			};

			let program = compiler::compile(&source, &mut interner, &mut report);

			check(path, program.ok_or_else(|| error.unwrap_or_default()))
		}
	)
}


#[test]
fn test_positive() -> io::Result<()> {
	compile_dir(
		"src/runtime/tests/data/positive",
		|path, program| {
			let program = program
				.unwrap_or_else(|error| panic!("{}: {}", path.display(), error));

			let input = sibling(path, "in")?.unwrap_or_default();
			let expected = sibling(path, "out")?.unwrap_or_default();

			let output = run(&program, &input)
				.unwrap_or_else(|panic| panic!("{}: {}", path.display(), panic));

			assert_eq!(output, expected, "{}", path.display());

			Ok(())
		}
	)
}


#[test]
fn test_negative() -> io::Result<()> {
	compile_dir(
		"src/runtime/tests/data/negative",
		|path, program| {
			let program = program
				.unwrap_or_else(|error| panic!("{}: {}", path.display(), error));

			let input = sibling(path, "in")?.unwrap_or_default();

			if let Ok(output) = run(&program, &input) {
				panic!("{}: expected panic, got output {:?}", path.display(), output);
			}

			Ok(())
		}
	)
}


#[test]
fn test_invalid() -> io::Result<()> {
	compile_dir(
		"src/runtime/tests/data/invalid",
		|path, program| {
			let error = match program {
				Ok(_) => panic!("{}: expected compile error", path.display()),
				Err(error) => error,
			};

			// The expected diagnostic, when given, is the first line of the sibling file.
			if let Some(expected) = sibling(path, "err")? {
				assert_eq!(error, expected.trim_end(), "{}", path.display());
			}

			Ok(())
		}
	)
}
