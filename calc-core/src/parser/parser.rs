use crate::{
    lexer::prelude::{tokenize, Token, TokenKind},
    utils::prelude::SrcSpan
};
use super::ast::{BinaryOperator, Expression, FunctionName, UnaryOperator};
use super::error::{parse_error, ParseError, ParseErrorType};

pub fn parse_source(src: &str) -> Result<Expression, ParseError> {
    let tokens = match tokenize(src) {
        Ok(tokens) => tokens,
        Err(error) => return parse_error(
            ParseErrorType::LexError { error: error.clone() },
            error.location
        )
    };

    Parser::new(tokens)?.parse()
}

pub struct Parser {
    tokens: Vec<Token>,
    current: usize,
}

impl Parser {
    // The balance pre-check runs over the whole token sequence before
    // any descent, so unbalanced parentheses fail with one clear error
    // instead of a failure deep inside the grammar.
    pub fn new(tokens: Vec<Token>) -> Result<Self, ParseError> {
        let mut depth = 0i32;

        for token in &tokens {
            match token.kind {
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => {
                    depth -= 1;

                    if depth < 0 {
                        return parse_error(
                            ParseErrorType::UnexpectedClosingParen,
                            token.location
                        );
                    }
                },
                _ => {}
            }
        }

        if depth > 0 {
            let location = tokens.iter()
                .filter(|token| token.kind == TokenKind::LParen)
                .last()
                .map(|token| token.location)
                .unwrap_or(SrcSpan::from(0, 0));

            return parse_error(ParseErrorType::UnclosedParen, location);
        }

        Ok(Self { tokens, current: 0 })
    }

    pub fn parse(&mut self) -> Result<Expression, ParseError> {
        self.expression()
    }

    // expression -> term {("+" | "-") term}
    fn expression(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.term()?;

        loop {
            let operator = match self.current_kind() {
                TokenKind::Plus => BinaryOperator::Plus,
                TokenKind::Minus => BinaryOperator::Minus,
                _ => break
            };

            self.step();
            let right = self.term()?;
            expression = Self::binary(operator, expression, right);
        }

        Ok(expression)
    }

    // term -> power {("*" | "/" | ε) power}, where ε is an implicit
    // multiplication: the next token starts an atom with no operator
    // written between, as in 2(3+1), 2sin(30) or (2)(3).
    fn term(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.power()?;

        loop {
            let kind = self.current_kind();

            let operator = if kind == TokenKind::Multiply {
                self.step();
                BinaryOperator::Multiply
            } else if kind == TokenKind::Divide {
                self.step();
                BinaryOperator::Divide
            } else if kind.begins_atom() {
                BinaryOperator::Multiply
            } else {
                break;
            };

            let right = self.power()?;
            expression = Self::binary(operator, expression, right);
        }

        Ok(expression)
    }

    // power -> factorial ["^" power]; recursing on the right side
    // instead of looping makes `^` right-associative.
    fn power(&mut self) -> Result<Expression, ParseError> {
        let expression = self.factorial()?;

        if self.current_kind() == TokenKind::Power {
            self.step();
            let right = self.power()?;

            return Ok(Self::binary(BinaryOperator::Power, expression, right));
        }

        Ok(expression)
    }

    // factorial -> function {"!"}; looping chains (n!)! and binds the
    // postfix tighter than `^`.
    fn factorial(&mut self) -> Result<Expression, ParseError> {
        let mut expression = self.function()?;

        while self.current_kind() == TokenKind::Factorial {
            let location = SrcSpan::from(
                expression.location().start,
                self.current_location().end
            );
            self.step();

            expression = Expression::Unary {
                operator: UnaryOperator::Factorial,
                operand: Box::new(expression),
                location,
            };
        }

        Ok(expression)
    }

    // function -> ("sin" | "cos") "(" expression ")" | primary
    fn function(&mut self) -> Result<Expression, ParseError> {
        let name = match self.current_kind() {
            TokenKind::Sin => FunctionName::Sin,
            TokenKind::Cos => FunctionName::Cos,
            _ => return self.primary()
        };

        let start = self.current_location().start;
        self.step();

        self.expect_one(
            TokenKind::LParen,
            ParseErrorType::ExpectedLParenAfterFunction { function: name }
        )?;
        let argument = self.expression()?;
        let (_, end) = self.expect_one(
            TokenKind::RParen,
            ParseErrorType::ExpectedRParenAfterArgument
        )?;

        Ok(Expression::Function {
            name,
            argument: Box::new(argument),
            location: SrcSpan::from(start, end),
        })
    }

    // primary -> number | "(" expression ")"
    fn primary(&mut self) -> Result<Expression, ParseError> {
        match self.current_kind() {
            TokenKind::Number => {
                let token = &self.tokens[self.current];
                let value = token.literal.unwrap_or_default();
                let location = token.location;
                self.step();

                Ok(Expression::Number { value, location })
            },
            TokenKind::LParen => {
                self.step();
                let expression = self.expression()?;
                self.expect_one(
                    TokenKind::RParen,
                    ParseErrorType::ExpectedRParenAfterExpression
                )?;

                Ok(expression)
            },
            TokenKind::RParen => parse_error(
                ParseErrorType::UnexpectedClosingParen,
                self.current_location()
            ),
            TokenKind::Eof => parse_error(
                ParseErrorType::UnexpectedEof,
                self.current_location()
            ),
            kind => parse_error(
                ParseErrorType::UnexpectedToken { token: kind },
                self.current_location()
            )
        }
    }

    fn binary(operator: BinaryOperator, left: Expression, right: Expression) -> Expression {
        let location = left.location().union(right.location());

        Expression::Binary {
            operator,
            left: Box::new(left),
            right: Box::new(right),
            location,
        }
    }

    fn expect_one(&mut self, kind: TokenKind, error: ParseErrorType) -> Result<(u32, u32), ParseError> {
        if self.current_kind() == kind {
            let location = self.current_location();
            self.step();

            return Ok((location.start, location.end));
        }

        parse_error(error, self.current_location())
    }

    fn step(&mut self) {
        if self.current < self.tokens.len() {
            self.current += 1;
        }
    }

    // Token sequences produced by `tokenize` always end with Eof; a
    // hand-built sequence without one reads as exhausted here.
    fn current_kind(&self) -> TokenKind {
        self.tokens.get(self.current)
            .map(|token| token.kind)
            .unwrap_or(TokenKind::Eof)
    }

    fn current_location(&self) -> SrcSpan {
        self.tokens.get(self.current)
            .map(|token| token.location)
            .or(self.tokens.last().map(|token| token.location))
            .unwrap_or(SrcSpan::from(0, 0))
    }
}
