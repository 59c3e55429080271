use std::{
	ffi::OsString,
	fs::{self, File},
	io::{self, BufReader, BufWriter, Read, Write},
	path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::program::{Instruction, Program};


/// The format tag of every artifact.
pub const FORMAT: &str = "zoomc";
/// The artifact layout version.
pub const VERSION: u32 = 1;


#[derive(Serialize)]
struct Header<'a> {
	format: &'a str,
	version: u32,
	program: &'a Program,
}


#[derive(Deserialize)]
struct Artifact {
	format: String,
	version: u32,
	program: Program,
}


/// Write a program as an artifact.
pub fn write<W: Write>(program: &Program, mut writer: W) -> io::Result<()> {
	let artifact = Header { format: FORMAT, version: VERSION, program };

	serde_json::to_writer(&mut writer, &artifact)?;
	writer.write_all(b"\n")?;
	writer.flush()
}


/// Read a program from an artifact, checking the format, the version, and that the program
/// is consistent with its header.
pub fn read<R: Read>(reader: R) -> io::Result<Program> {
	let artifact: Artifact = serde_json::from_reader(reader)?;

	if artifact.format != FORMAT {
		return Err(
			io::Error::new(
				io::ErrorKind::InvalidData,
				format!("not a {} artifact: {:?}", FORMAT, artifact.format)
			)
		);
	}

	if artifact.version != VERSION {
		return Err(
			io::Error::new(
				io::ErrorKind::InvalidData,
				format!("unsupported artifact version {}", artifact.version)
			)
		);
	}

	check_program(&artifact.program)?;

	Ok(artifact.program)
}


/// Check the header counts against the instructions. Every slot and every stack entry
/// takes at least one instruction to use, so neither count may exceed the instruction
/// count.
fn check_program(program: &Program) -> io::Result<()> {
	let invalid = |message: String| Err(io::Error::new(io::ErrorKind::InvalidData, message));

	let len = program.instructions.len();

	if program.entry > len {
		return invalid(format!("entry {} out of {} instructions", program.entry, len));
	}

	if program.locals as usize > len {
		return invalid(format!("{} locals for {} instructions", program.locals, len));
	}

	if program.max_stack as usize > len {
		return invalid(format!("stack depth {} for {} instructions", program.max_stack, len));
	}

	for (ix, instruction) in program.instructions.iter().enumerate() {
		match instruction {
			Instruction::Load(slot) | Instruction::Store(slot)
				if slot.index() >= program.locals as usize => {
				return invalid(format!("invalid slot {} at instruction {}", slot.index(), ix));
			}

			_ => (),
		}
	}

	Ok(())
}


/// Save a program to the given path, replacing any existing file. The artifact is written
/// next to the path first and then moved in place, so a failed save leaves no partial
/// artifact behind.
pub fn save<P: AsRef<Path>>(program: &Program, path: P) -> io::Result<()> {
	let path = path.as_ref();
	let temp = temp_path(path);

	let result = File::create(&temp)
		.and_then(|file| write(program, BufWriter::new(file)))
		.and_then(|()| fs::rename(&temp, path));

	if result.is_err() {
		// The original error is the one worth reporting.
		let _ = fs::remove_file(&temp);
	}

	result
}


fn temp_path(path: &Path) -> PathBuf {
	let mut temp = OsString::from(path.as_os_str());
	temp.push(".tmp");
	temp.into()
}


pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Program> {
	let file = File::open(path)?;
	read(BufReader::new(file))
}
