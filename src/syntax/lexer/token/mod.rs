mod fmt;

use super::SourcePos;
use crate::symbol::Symbol;


/// All keywords in the language. The set is closed and case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
	Scanf,
	Printf,
	Return,
	Zoom,
}


impl Keyword {
	/// The keyword for the given word, if any.
	pub fn from_word(word: &str) -> Option<Self> {
		match word {
			"scanf" => Some(Self::Scanf),
			"printf" => Some(Self::Printf),
			"return" => Some(Self::Return),
			"zoom" => Some(Self::Zoom),
			_ => None,
		}
	}


	pub fn as_str(&self) -> &'static str {
		match self {
			Self::Scanf => "scanf",
			Self::Printf => "printf",
			Self::Return => "return",
			Self::Zoom => "zoom",
		}
	}
}


/// Special symbols, either one or two characters long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Special {
	OpenBrace,   // {
	CloseBrace,  // }
	OpenParens,  // (
	CloseParens, // )
	Semicolon,   // ;
	Tilde,       // ~

	Percent,   // %
	Slash,     // /
	Bang,      // !
	Ampersand, // &
	Pipe,      // |
	Plus,      // +
	Minus,     // -
	Star,      // *
	Lower,     // <
	Assign,    // =
	Greater,   // >

	PlusAssign,    // +=
	MinusAssign,   // -=
	StarAssign,    // *=
	SlashAssign,   // /=
	PercentAssign, // %=
	NotEquals,     // !=
	And,           // &&
	Or,            // ||
	Increment,     // ++
	Decrement,     // --
	LowerEquals,   // <=
	Equals,        // ==
	GreaterEquals, // >=
}


impl Special {
	/// The special symbol that is always a single character.
	pub fn single(c: char) -> Option<Self> {
		match c {
			'{' => Some(Self::OpenBrace),
			'}' => Some(Self::CloseBrace),
			'(' => Some(Self::OpenParens),
			')' => Some(Self::CloseParens),
			';' => Some(Self::Semicolon),
			'~' => Some(Self::Tilde),
			_ => None,
		}
	}


	/// The special symbol that may start a two character symbol, by itself.
	pub fn first(c: char) -> Option<Self> {
		match c {
			'%' => Some(Self::Percent),
			'/' => Some(Self::Slash),
			'!' => Some(Self::Bang),
			'&' => Some(Self::Ampersand),
			'|' => Some(Self::Pipe),
			'+' => Some(Self::Plus),
			'-' => Some(Self::Minus),
			'*' => Some(Self::Star),
			'<' => Some(Self::Lower),
			'=' => Some(Self::Assign),
			'>' => Some(Self::Greater),
			_ => None,
		}
	}


	/// The two character symbol for the given pair, if the pair is allowed.
	pub fn pair(first: char, second: char) -> Option<Self> {
		match (first, second) {
			('+', '=') => Some(Self::PlusAssign),
			('-', '=') => Some(Self::MinusAssign),
			('*', '=') => Some(Self::StarAssign),
			('/', '=') => Some(Self::SlashAssign),
			('%', '=') => Some(Self::PercentAssign),
			('!', '=') => Some(Self::NotEquals),
			('&', '&') => Some(Self::And),
			('|', '|') => Some(Self::Or),
			('+', '+') => Some(Self::Increment),
			('-', '-') => Some(Self::Decrement),
			('<', '=') => Some(Self::LowerEquals),
			('=', '=') => Some(Self::Equals),
			('>', '=') => Some(Self::GreaterEquals),
			_ => None,
		}
	}


	/// The source text of the symbol.
	pub fn lexeme(&self) -> &'static str {
		match self {
			Self::OpenBrace => "{",
			Self::CloseBrace => "}",
			Self::OpenParens => "(",
			Self::CloseParens => ")",
			Self::Semicolon => ";",
			Self::Tilde => "~",

			Self::Percent => "%",
			Self::Slash => "/",
			Self::Bang => "!",
			Self::Ampersand => "&",
			Self::Pipe => "|",
			Self::Plus => "+",
			Self::Minus => "-",
			Self::Star => "*",
			Self::Lower => "<",
			Self::Assign => "=",
			Self::Greater => ">",

			Self::PlusAssign => "+=",
			Self::MinusAssign => "-=",
			Self::StarAssign => "*=",
			Self::SlashAssign => "/=",
			Self::PercentAssign => "%=",
			Self::NotEquals => "!=",
			Self::And => "&&",
			Self::Or => "||",
			Self::Increment => "++",
			Self::Decrement => "--",
			Self::LowerEquals => "<=",
			Self::Equals => "==",
			Self::GreaterEquals => ">=",
		}
	}
}


/// All possible kinds of token.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
	Identifier(Symbol),
	Keyword(Keyword),
	Number(i64),
	Special(Special),
	EndOfInput,
	/// A character that starts no token. The lexer doesn't fail on these, the parser
	/// reports them instead.
	Unrecognized(char),
}


/// A lexical token.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub kind: TokenKind,
	pub pos: SourcePos,
}


impl Token {
	pub fn is_eof(&self) -> bool {
		self.kind == TokenKind::EndOfInput
	}
}
