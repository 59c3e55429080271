use std::path::Path;

use crate::term::color;


/// The sink for compile errors.
///
/// The compiler stops at the first error, so a compilation reports at most one error,
/// but sinks must not rely on that.
pub trait Diagnostics {
	/// Called before compiling a source file.
	fn begin_source_file(&mut self, _path: &Path) {}

	/// Called after compiling a source file, whatever the outcome.
	fn end_source_file(&mut self) {}

	fn report_error(&mut self, line: u32, column: u32, message: &str);
}


impl<F> Diagnostics for F
where
	F: FnMut(u32, u32, &str),
{
	fn report_error(&mut self, line: u32, column: u32, message: &str) {
		self(line, column, message)
	}
}


/// Prints colored errors to stderr, prefixed with the source path.
#[derive(Debug, Default)]
pub struct Stderr {
	path: Option<Box<Path>>,
	errors: usize,
}


impl Stderr {
	pub fn new() -> Self {
		Self::default()
	}


	/// How many errors have been reported so far.
	pub fn errors(&self) -> usize {
		self.errors
	}
}


impl Diagnostics for Stderr {
	fn begin_source_file(&mut self, path: &Path) {
		self.path = Some(path.into());
	}


	fn end_source_file(&mut self) {
		self.path = None;
	}


	fn report_error(&mut self, line: u32, column: u32, message: &str) {
		self.errors += 1;

		let path = self.path
			.as_deref()
			.unwrap_or_else(|| Path::new("<unknown>"));

		eprintln!(
			"{}: {}:{}:{} - {}",
			color::Fg(color::Red, "Error"),
			path.display(),
			line,
			column,
			message
		);
	}
}
