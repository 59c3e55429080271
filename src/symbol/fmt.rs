use std::fmt::Display as _;

use super::{Interner, Symbol};
use crate::fmt::Display;


impl<'a> Display<'a> for Symbol {
	type Context = &'a Interner;

	fn fmt(&self, f: &mut std::fmt::Formatter<'_>, context: Self::Context) -> std::fmt::Result {
		let ident = context.resolve(*self).expect("invalid symbol");

		ident.fmt(f)
	}
}
