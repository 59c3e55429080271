use std::{
	fs::{self, File},
	io,
	path::{Path, PathBuf},
};


/// Run the test on every file with the given extension in the directory tree, relative to
/// the crate root. Files are visited in path order, so failures are reproducible.
pub fn test_dir<P, F>(path: P, extension: &str, mut test: F) -> io::Result<()>
where
	P: AsRef<Path>,
	F: FnMut(&Path, File) -> io::Result<()>,
{
	let mut dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	dir.push(path);

	fn run<F>(dir: &Path, extension: &str, test: &mut F) -> io::Result<()>
	where
		F: FnMut(&Path, File) -> io::Result<()>,
	{
		let mut entries = fs::read_dir(dir)?
			.map(|entry| entry.map(|entry| entry.path()))
			.collect::<io::Result<Vec<_>>>()?;

		entries.sort();

		for path in entries {
			if path.is_dir() {
				run(&path, extension, test)?;
			} else if path.extension().map_or(false, |ext| ext == extension) {
				let file = File::open(&path)?;
				test(&path, file)?;
			}
		}

		Ok(())
	}

	run(&dir, extension, &mut test)
}
