use std::{
	ffi::OsString,
	path::{Path, PathBuf},
};

use clap::{clap_app, crate_description, crate_version};


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Command {
	Help(Box<str>),
	Version(Box<str>),
	Run(Args),
}


#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Args {
	/// Source file, or `-` for stdin. An artifact when `exec` is set.
	pub input: PathBuf,
	/// Where to save the artifact.
	pub output: Option<PathBuf>,
	/// Compile, but don't save the artifact.
	pub check: bool,
	/// Print the program listing.
	pub print_program: bool,
	/// Run the program after compiling.
	pub run: bool,
	/// Run an artifact instead of compiling.
	pub exec: bool,
}


impl Args {
	/// The path of the artifact to produce. Defaults to the input with the `zx` extension.
	pub fn artifact_path(&self) -> PathBuf {
		match &self.output {
			Some(output) => output.clone(),
			None if self.input == Path::new("-") => PathBuf::from("a.zx"),
			None => self.input.with_extension("zx"),
		}
	}
}


pub fn parse<A, T>(args: A) -> clap::Result<Command>
where
	A: IntoIterator<Item = T>,
	T: Into<OsString> + Clone,
{
	let app = clap_app!(
		zoomc =>
			(version: crate_version!())
			(about: crate_description!())
			(@arg check: --check "Compile without saving the artifact")
			(@arg program: --program "Print the program listing")
			(@arg run: --run "Run the program after compiling")
			(@arg exec: --exec conflicts_with[check program run output] "Run INPUT as an artifact")
			(@arg output: -o --output +takes_value "Artifact path, defaults to INPUT with the zx extension")
			(@arg INPUT: +required "Source file, - for stdin")
	);

	match app.get_matches_from_safe(args) {
		Ok(matches) => Ok(
			Command::Run(
				Args {
					input: matches
						.value_of_os("INPUT")
						.map(PathBuf::from)
						.unwrap_or_default(),
					output: matches.value_of_os("output").map(PathBuf::from),
					check: matches.is_present("check"),
					print_program: matches.is_present("program"),
					run: matches.is_present("run"),
					exec: matches.is_present("exec"),
				}
			)
		),

		Err(error) => match error.kind {
			clap::ErrorKind::HelpDisplayed => Ok(
				Command::Help(error.message.into_boxed_str())
			),
			clap::ErrorKind::VersionDisplayed => Ok(
				Command::Version(error.message.into_boxed_str())
			),
			_ => Err(error)
		}
	}
}
