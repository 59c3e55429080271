use std::{io, path::Path};

use crate::{
	artifact,
	diagnostics::Diagnostics,
	emit::Assembler,
	program::Program,
	semantic::SymbolTable,
	symbol,
	syntax::{lexer::Cursor, Lexer, Parser, Source},
};


/// Compile a source into a program. Errors are sent to the diagnostics sink, bracketed by
/// the source file notifications.
pub fn compile<D>(
	source: &Source,
	interner: &mut symbol::Interner,
	diagnostics: &mut D,
) -> Option<Program>
where
	D: Diagnostics + ?Sized,
{
	log::debug!("compiling {}", source.path.display());

	diagnostics.begin_source_file(&source.path);

	let lexer = Lexer::new(Cursor::from(source), interner);
	let program = Parser::new(lexer, SymbolTable::default(), Assembler::new(), &mut *diagnostics)
		.parse();

	diagnostics.end_source_file();

	program
}


/// Read a source file, `-` being stdin.
pub fn read_source(path: &Path) -> io::Result<Source> {
	if path == Path::new("-") {
		let stdin = io::stdin();
		Source::from_reader(Path::new("<stdin>"), stdin.lock())
	} else {
		Source::from_path(path)
	}
}


/// Compile a source file and save the artifact. Produces the program if compilation
/// succeeded. No artifact is written on failure.
pub fn compile_file<D>(
	source: &Path,
	artifact: &Path,
	diagnostics: &mut D,
) -> io::Result<Option<Program>>
where
	D: Diagnostics + ?Sized,
{
	let source = read_source(source)?;
	let mut interner = symbol::Interner::new();

	let program = compile(&source, &mut interner, diagnostics);

	if let Some(program) = &program {
		artifact::save(program, artifact)?;
		log::debug!("saved artifact to {}", artifact.display());
	}

	Ok(program)
}
