mod error;
mod scope;
#[cfg(test)]
mod tests;

use crate::symbol::Symbol;
use super::syntax::SourcePos;
pub use error::{Error, ErrorKind};
pub use scope::SymbolTable;
