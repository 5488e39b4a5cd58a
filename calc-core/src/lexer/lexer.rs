use super::error::{LexicalError, LexicalErrorType};
use super::token::{str_to_function, Token, TokenKind};
use crate::utils::prelude::SrcSpan;

pub type LexResult = std::result::Result<Token, LexicalError>;

// Scans tokens until the terminal Eof token, which is always the last
// element of a successful result.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexicalError> {
	let mut lexer = Lexer::new(source);
	let mut tokens = vec![];

	loop {
		let token = lexer.next_token()?;
		let is_eof = token.kind == TokenKind::Eof;

		tokens.push(token);

		if is_eof {
			break;
		}
	}

	Ok(tokens)
}

#[derive(Debug)]
pub struct Lexer<'a> {
	source: &'a str,
	start: usize,
	current: usize,
	last: Option<TokenKind>,
}

impl<'a> Lexer<'a> {
	pub fn new(source: &'a str) -> Self {
		Self {
			source,
			start: 0,
			current: 0,
			last: None,
		}
	}

	pub fn next_token(&mut self) -> LexResult {
		self.skip_whitespace();
		self.start = self.current;

		let ch = match self.advance() {
			Some(ch) => ch,
			None => return Ok(self.make_token(TokenKind::Eof, None)),
		};

		match ch {
			'+' => Ok(self.make_token(TokenKind::Plus, None)),
			'-' => {
				if matches!(self.peek(), Some(next) if next.is_ascii_digit()) && self.minus_starts_literal() {
					self.lex_number()
				} else {
					Ok(self.make_token(TokenKind::Minus, None))
				}
			},
			'*' => Ok(self.make_token(TokenKind::Multiply, None)),
			'/' => Ok(self.make_token(TokenKind::Divide, None)),
			'^' => Ok(self.make_token(TokenKind::Power, None)),
			'!' => Ok(self.make_token(TokenKind::Factorial, None)),
			'(' => Ok(self.make_token(TokenKind::LParen, None)),
			')' => Ok(self.make_token(TokenKind::RParen, None)),
			'0'..='9' => self.lex_number(),
			'a'..='z' | 'A'..='Z' => self.lex_ident(),
			ch => Err(LexicalError {
				error: LexicalErrorType::UnrecognizedCharacter { ch },
				location: SrcSpan::from(self.start as u32, self.current as u32),
			})
		}
	}

	// The sign reading of `-` only applies at the start of input or
	// straight after an operator or `(`; after a value it is always a
	// subtraction. This is what makes `3 - 2` a subtraction while
	// `2 * -3` carries the sign into the literal.
	fn minus_starts_literal(&self) -> bool {
		match self.last {
			None => true,
			Some(kind) => kind.binds_following_sign(),
		}
	}

	fn lex_number(&mut self) -> LexResult {
		while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
			self.advance();
		}

		// A fractional part needs a digit behind the period; a bare
		// period is left for the next scan step.
		if self.peek() == Some('.') && matches!(self.peek_next(), Some(ch) if ch.is_ascii_digit()) {
			self.advance();

			while matches!(self.peek(), Some(ch) if ch.is_ascii_digit()) {
				self.advance();
			}
		}

		match self.source[self.start..self.current].parse::<f64>() {
			Ok(value) => Ok(self.make_token(TokenKind::Number, Some(value))),
			Err(_) => Err(LexicalError {
				error: LexicalErrorType::InvalidNumber,
				location: SrcSpan::from(self.start as u32, self.current as u32),
			})
		}
	}

	fn lex_ident(&mut self) -> LexResult {
		while matches!(self.peek(), Some(ch) if ch.is_ascii_alphanumeric()) {
			self.advance();
		}

		let name = &self.source[self.start..self.current];

		match str_to_function(name) {
			Some(kind) => Ok(self.make_token(kind, None)),
			None => Err(LexicalError {
				error: LexicalErrorType::UnknownIdentifier { name: name.to_string() },
				location: SrcSpan::from(self.start as u32, self.current as u32),
			})
		}
	}

	fn make_token(&mut self, kind: TokenKind, literal: Option<f64>) -> Token {
		self.last = Some(kind);

		Token {
			kind,
			lexeme: self.source[self.start..self.current].to_string(),
			literal,
			location: SrcSpan::from(self.start as u32, self.current as u32),
		}
	}

	fn skip_whitespace(&mut self) {
		while matches!(self.peek(), Some(' ' | '\t' | '\r' | '\n')) {
			self.advance();
		}
	}

	fn advance(&mut self) -> Option<char> {
		let ch = self.peek()?;
		self.current += ch.len_utf8();

		Some(ch)
	}

	fn peek(&self) -> Option<char> {
		self.source[self.current..].chars().next()
	}

	fn peek_next(&self) -> Option<char> {
		let mut chars = self.source[self.current..].chars();
		chars.next();

		chars.next()
	}
}

impl<'a> Iterator for Lexer<'a> {
	type Item = LexResult;

	fn next(&mut self) -> Option<Self::Item> {
		Some(self.next_token())
	}
}
