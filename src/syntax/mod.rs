pub mod lexer;
pub mod parser;
mod source;

pub use lexer::Lexer;
pub use parser::Parser;
pub use source::{Source, SourcePos};
