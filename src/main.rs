mod args;
mod artifact;
mod compiler;
mod diagnostics;
mod emit;
mod fmt;
mod program;
mod runtime;
mod semantic;
mod symbol;
mod syntax;
mod term;
#[cfg(test)]
mod tests;

use std::io;

use term::color;

use args::{Args, Command};
use program::Program;
use runtime::{Panic, Runtime};


fn main() -> ! {
	env_logger::init();

	let command = match args::parse(std::env::args_os()) {
		Ok(command) => command,
		Err(error) => {
			eprint!("{}", error);
			std::process::exit(1)
		}
	};

	let result = match command {
		Command::Run(args) => run(args),
		Command::Help(msg) | Command::Version(msg) => {
			println!("{}", msg);
			std::process::exit(0)
		},
	};

	let exit_code = match result {
		Ok(code) => code,
		Err(error) => {
			eprintln!("{}: {}", color::Fg(color::Red, "Error"), error);
			1
		}
	};

	std::process::exit(exit_code)
}


/// Produces the exit code: 2 for compile errors.
fn run(args: Args) -> Result<i32, Panic> {
	if args.exec {
		let program = artifact::load(&args.input)?;
		execute(&program)?;
		return Ok(0);
	}

	let mut diagnostics = diagnostics::Stderr::new();
	let artifact = args.artifact_path();

	let program = if args.check {
		let source = compiler::read_source(&args.input)?;
		let mut interner = symbol::Interner::new();
		compiler::compile(&source, &mut interner, &mut diagnostics)
	} else {
		compiler::compile_file(&args.input, &artifact, &mut diagnostics)?
	};

	let program = match program {
		Some(program) => program,
		None => {
			log::debug!("{} compile errors", diagnostics.errors());
			return Ok(2);
		}
	};

	if args.print_program {
		println!("{}", color::Fg(color::Yellow, "--------------------------------------------------"));
		print!("{}", program);
		println!("{}", color::Fg(color::Yellow, "--------------------------------------------------"));
	}

	if args.check {
		return Ok(0);
	}

	eprintln!(
		"{} {} to {}",
		color::Fg(color::Green, "Compiled"),
		args.input.display(),
		artifact.display()
	);

	if args.run {
		execute(&program)?;
	}

	Ok(0)
}


fn execute(program: &Program) -> Result<(), Panic> {
	let stdin = io::stdin();
	let stdout = io::stdout();

	Runtime::new(stdin.lock(), stdout.lock()).eval(program)
}
