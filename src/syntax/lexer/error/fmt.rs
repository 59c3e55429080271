use std::fmt::{self, Display};

use super::{Error, ErrorKind};


impl Display for ErrorKind {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Self::NumberOverflow(number) => {
				write!(f, "integer literal is too large: {}", number)
			}
		}
	}
}


impl Display for Error {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "{} - {}.", self.pos, self.error)
	}
}
