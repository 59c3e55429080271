mod error;
#[cfg(test)]
mod tests;

use super::{
	lexer::{self, Keyword, Lexer, Special, Token, TokenKind},
	SourcePos,
};
use crate::{
	diagnostics::Diagnostics,
	emit::{Emitter, SlotIx},
	fmt::FmtString,
	semantic::{self, SymbolTable},
	symbol::Symbol,
};
pub use error::{Error, Expected};


/// A grammar rule. Rules produce `Ok(true)` when they match, `Ok(false)` when the current
/// token can't start them, in which case nothing is consumed, and `Err` on malformed input.
type Rule<P> = fn(&mut P) -> Result<bool, Error>;

/// An emitter operation for a binary operator.
type Operation<E> = fn(&mut E);


/// The zoom parser. Code is emitted as soon as each construct is recognized, there is no
/// intermediate syntax tree.
///
/// The grammar is:
///
/// ```text
/// program        := statement* EOF
/// statement      := expression ';' | ';'
/// expression     := bitwise_and ('|' expression)?
/// bitwise_and    := additive ('&' bitwise_and)?
/// additive       := multiplicative (('+' | '-') additive)?
/// multiplicative := primary (('*' | '/' | '%') multiplicative)?
/// primary        := identifier ('=' expression | '++' | '--')?
///                 | '~' primary
///                 | ('++' | '--') identifier
///                 | '(' expression ')'
///                 | 'scanf' '(' ')'
///                 | ('zoom' | 'printf') '(' expression ')'
///                 | number
/// ```
///
/// Binary operators associate to the right.
pub struct Parser<'a, 'b, 'd, E, D: ?Sized> {
	lexer: Lexer<'a, 'b>,
	/// The lookahead token.
	token: Token,
	symbols: SymbolTable,
	emitter: E,
	diagnostics: &'d mut D,
}


impl<'a, 'b, 'd, E, D> Parser<'a, 'b, 'd, E, D>
where
	E: Emitter,
	D: Diagnostics + ?Sized,
{
	pub fn new(
		lexer: Lexer<'a, 'b>,
		symbols: SymbolTable,
		emitter: E,
		diagnostics: &'d mut D,
	) -> Self {
		Self {
			lexer,
			// Placeholder, the first token is only read when parsing, as it may be malformed.
			token: Token { kind: TokenKind::EndOfInput, pos: SourcePos::default() },
			symbols,
			emitter,
			diagnostics,
		}
	}


	/// Parse the whole program, emitting code along the way.
	/// On the first error, the error is reported to the diagnostics sink and no artifact is
	/// produced.
	pub fn parse(mut self) -> Option<E::Artifact> {
		self.symbols.begin_scope();
		let result = self.parse_program();
		let scope = self.symbols.end_scope();
		debug_assert_eq!(self.symbols.depth(), 0, "unbalanced scopes");

		match result {
			Ok(()) => {
				log::debug!("parsed program with {} variables", scope.len());
				Some(self.emitter.finalize())
			}

			Err(error) => {
				log::debug!("parse failed: {}", error);

				let pos = error.pos();
				let message = error.fmt_string(self.lexer.interner());
				self.diagnostics.report_error(pos.line, pos.column, &message);

				None
			}
		}
	}


	fn parse_program(&mut self) -> Result<(), Error> {
		self.step()?;

		while self.parse_statement()? { }

		if self.token.is_eof() {
			Ok(())
		} else {
			Err(self.unexpected(Expected::Construct("statement")))
		}
	}


	fn parse_statement(&mut self) -> Result<bool, Error> {
		if self.parse_expression()? {
			self.expect(Special::Semicolon)?;
			// The value of an expression statement is discarded.
			self.emitter.pop();
			return Ok(true);
		}

		// Empty statement.
		self.check_special(Special::Semicolon)
	}


	fn parse_expression(&mut self) -> Result<bool, Error> {
		self.parse_binop(
			Self::parse_bitwise_and,
			Self::parse_expression,
			&[(Special::Pipe, E::bit_or as Operation<E>)],
		)
	}


	fn parse_bitwise_and(&mut self) -> Result<bool, Error> {
		self.parse_binop(
			Self::parse_additive,
			Self::parse_bitwise_and,
			&[(Special::Ampersand, E::bit_and as Operation<E>)],
		)
	}


	fn parse_additive(&mut self) -> Result<bool, Error> {
		self.parse_binop(
			Self::parse_multiplicative,
			Self::parse_additive,
			&[
				(Special::Plus, E::add as Operation<E>),
				(Special::Minus, E::sub as Operation<E>),
			],
		)
	}


	fn parse_multiplicative(&mut self) -> Result<bool, Error> {
		self.parse_binop(
			Self::parse_primary,
			Self::parse_multiplicative,
			&[
				(Special::Star, E::mul as Operation<E>),
				(Special::Slash, E::div as Operation<E>),
				(Special::Percent, E::rem as Operation<E>),
			],
		)
	}


	/// Parse `operand (operator rhs)?`. The right hand side is parsed by `rhs` before the
	/// operation is emitted, hence the right associativity.
	fn parse_binop(
		&mut self,
		operand: Rule<Self>,
		rhs: Rule<Self>,
		operators: &[(Special, Operation<E>)],
	) -> Result<bool, Error> {
		if !operand(self)? {
			return Ok(false);
		}

		for &(special, operation) in operators {
			if self.check_special(special)? {
				self.require(rhs, "expression")?;
				operation(&mut self.emitter);
				break;
			}
		}

		Ok(true)
	}


	fn parse_primary(&mut self) -> Result<bool, Error> {
		if let Some((symbol, pos)) = self.check_identifier()? {
			// Variables are declared on first use, even when first used in an expression.
			let slot = self.local(symbol, pos)?;

			if self.check_special(Special::Assign)? {
				self.require(Self::parse_expression, "expression")?;
				self.emitter.store_local(slot);
				self.emitter.load_local(slot);
			} else if self.check_special(Special::Increment)? {
				self.emit_postfix(slot, E::add);
			} else if self.check_special(Special::Decrement)? {
				self.emit_postfix(slot, E::sub);
			} else {
				self.emitter.load_local(slot);
			}

			return Ok(true);
		}

		if self.check_special(Special::Tilde)? {
			self.require(Self::parse_primary, "expression")?;
			self.emitter.bit_not();
			return Ok(true);
		}

		if self.check_special(Special::Increment)? {
			let slot = self.expect_local()?;
			self.emit_prefix(slot, E::add);
			return Ok(true);
		}

		if self.check_special(Special::Decrement)? {
			let slot = self.expect_local()?;
			self.emit_prefix(slot, E::sub);
			return Ok(true);
		}

		if self.check_special(Special::OpenParens)? {
			self.require(Self::parse_expression, "expression")?;
			self.expect(Special::CloseParens)?;
			return Ok(true);
		}

		if self.check_keyword(Keyword::Scanf)? {
			self.expect(Special::OpenParens)?;
			self.expect(Special::CloseParens)?;
			self.emitter.read_integer();
			return Ok(true);
		}

		if self.check_keyword(Keyword::Zoom)? || self.check_keyword(Keyword::Printf)? {
			self.expect(Special::OpenParens)?;
			self.require(Self::parse_expression, "expression")?;
			self.emitter.write_integer();
			// Writing evaluates to zero.
			self.emitter.push_constant(0);
			self.expect(Special::CloseParens)?;
			return Ok(true);
		}

		if let Some(value) = self.check_number()? {
			self.emitter.push_constant(value);
			return Ok(true);
		}

		Ok(false)
	}


	/// `x++`: the old value is the result.
	fn emit_postfix(&mut self, slot: SlotIx, operation: Operation<E>) {
		self.emitter.load_local(slot);
		self.emitter.duplicate();
		self.emitter.push_constant(1);
		operation(&mut self.emitter);
		self.emitter.store_local(slot);
	}


	/// `++x`: the new value is the result.
	fn emit_prefix(&mut self, slot: SlotIx, operation: Operation<E>) {
		self.emitter.load_local(slot);
		self.emitter.push_constant(1);
		operation(&mut self.emitter);
		self.emitter.duplicate();
		self.emitter.store_local(slot);
	}


	/// The slot for the given variable, declaring it if needed.
	fn local(&mut self, symbol: Symbol, pos: SourcePos) -> Result<SlotIx, semantic::Error> {
		let slot = self.symbols.lookup_or_declare(symbol, pos, &mut self.emitter)?;
		log::trace!("{} - variable bound to slot {}", pos, slot.index());
		Ok(slot)
	}


	/// Require an identifier, producing its slot.
	fn expect_local(&mut self) -> Result<SlotIx, Error> {
		match self.check_identifier()? {
			Some((symbol, pos)) => Ok(self.local(symbol, pos)?),
			None => Err(self.unexpected(Expected::Construct("identifier"))),
		}
	}


	/// Require a rule to match.
	fn require(&mut self, rule: Rule<Self>, expected: &'static str) -> Result<(), Error> {
		if rule(self)? {
			Ok(())
		} else {
			Err(self.unexpected(Expected::Construct(expected)))
		}
	}


	/// Require a special symbol, consuming it.
	fn expect(&mut self, special: Special) -> Result<(), Error> {
		if self.check_special(special)? {
			Ok(())
		} else {
			Err(self.unexpected(Expected::Special(special)))
		}
	}


	/// Consume the current token if it is the given special symbol.
	fn check_special(&mut self, special: Special) -> Result<bool, Error> {
		if self.token.kind == TokenKind::Special(special) {
			self.step()?;
			Ok(true)
		} else {
			Ok(false)
		}
	}


	/// Consume the current token if it is the given keyword.
	fn check_keyword(&mut self, keyword: Keyword) -> Result<bool, Error> {
		if self.token.kind == TokenKind::Keyword(keyword) {
			self.step()?;
			Ok(true)
		} else {
			Ok(false)
		}
	}


	/// Consume the current token if it is an identifier.
	fn check_identifier(&mut self) -> Result<Option<(Symbol, SourcePos)>, Error> {
		match self.token.kind {
			TokenKind::Identifier(symbol) => {
				let pos = self.token.pos;
				self.step()?;
				Ok(Some((symbol, pos)))
			}

			_ => Ok(None),
		}
	}


	/// Consume the current token if it is an integer literal.
	fn check_number(&mut self) -> Result<Option<i64>, Error> {
		match self.token.kind {
			TokenKind::Number(value) => {
				self.step()?;
				Ok(Some(value))
			}

			_ => Ok(None),
		}
	}


	fn unexpected(&self, expected: Expected) -> Error {
		Error::unexpected(self.token.clone(), expected)
	}


	/// Advance to the next token.
	fn step(&mut self) -> Result<(), lexer::Error> {
		self.token = self.lexer.next_token()?;
		Ok(())
	}
}


impl<'a, 'b, 'd, E, D> std::fmt::Debug for Parser<'a, 'b, 'd, E, D>
where
	E: std::fmt::Debug,
	D: ?Sized,
{
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Parser")
			.field("lexer", &self.lexer)
			.field("token", &self.token)
			.field("symbols", &self.symbols)
			.field("emitter", &self.emitter)
			.finish()
	}
}
