//! Recursive-descent parser from token slices to a `Program`
//!
//! ```text
//! program   := statement* EOF
//! statement := "let" IDENTIFIER "=" chain | chain
//! chain     := operand ( operator operand )*
//! operand   := NUMBER | IDENTIFIER | NULL
//! ```
//!
//! A statement ends where the chain stops finding an operator, so
//! `let a = 1 a + 2` is two statements.

use crate::config::compile_time::syntax::{MAX_CHAIN_LENGTH, MAX_STATEMENTS};
use crate::grammar::ast::nodes::{
    BinaryExpression, Expression, Program, Statement, VariableDeclaration,
};
use crate::syntax::error::{SyntaxError, SyntaxResult};
use crate::tokens::{Token, TokenCursor, TokenKind};
use crate::{log_debug, log_error};

pub struct LexisParser<'a> {
    tokens: &'a [Token],
    cursor: TokenCursor<'a>,
}

impl<'a> LexisParser<'a> {
    pub fn new(tokens: &'a [Token]) -> Self {
        log_debug!("Creating parser", "tokens" => tokens.len());
        Self {
            tokens,
            cursor: TokenCursor::new(tokens),
        }
    }

    pub fn parse_program(&mut self) -> SyntaxResult<Program> {
        self.validate_terminator()?;

        let mut body = Vec::new();
        while !self.cursor.is_at_eof() {
            if body.len() >= MAX_STATEMENTS {
                let error = SyntaxError::TooManyStatements {
                    count: body.len() + 1,
                    max: MAX_STATEMENTS,
                };
                log_error!(error.error_code(), "Statement limit exceeded",
                    "limit" => MAX_STATEMENTS
                );
                return Err(error);
            }
            body.push(self.parse_statement()?);
        }

        Ok(Program::new(body))
    }

    /// The slice must be non-empty and hold exactly one EOF, in last place
    fn validate_terminator(&self) -> SyntaxResult<()> {
        if self.tokens.is_empty() {
            return Err(SyntaxError::EmptyTokenStream);
        }

        let first_eof = self.tokens.iter().position(Token::is_eof);
        if first_eof != Some(self.tokens.len() - 1) {
            return Err(SyntaxError::MissingEof);
        }

        Ok(())
    }

    fn parse_statement(&mut self) -> SyntaxResult<Statement> {
        if self.cursor.check(TokenKind::Let) {
            return self.parse_declaration();
        }
        self.parse_chain().map(Statement::from_chain)
    }

    fn parse_declaration(&mut self) -> SyntaxResult<Statement> {
        self.expect(TokenKind::Let, "'let'")?;
        let identifier = self.expect(TokenKind::Identifier, "identifier")?;
        self.expect(TokenKind::Assign, "'='")?;
        let value = Statement::from_chain(self.parse_chain()?);

        log_debug!("Parsed variable declaration", "identifier" => identifier.value());
        Ok(Statement::VariableDeclaration(VariableDeclaration::new(
            identifier.value(),
            Some(value),
        )))
    }

    fn parse_chain(&mut self) -> SyntaxResult<BinaryExpression> {
        let first = self.parse_operand()?;
        let mut rest = Vec::new();

        while let Some(operator) = self
            .cursor
            .current()
            .filter(|t| t.kind().is_arithmetic_operator())
        {
            self.cursor.advance();
            let operand = self.parse_operand()?;

            let length = rest.len() + 2;
            if length > MAX_CHAIN_LENGTH {
                return Err(SyntaxError::MaxChainLength {
                    length,
                    max: MAX_CHAIN_LENGTH,
                    span: operator.span,
                });
            }
            rest.push((operator.value().to_string(), operand));
        }

        Ok(BinaryExpression::from_parts(first, rest))
    }

    fn parse_operand(&mut self) -> SyntaxResult<Expression> {
        let token = self.current_or_end("operand")?;

        if let Some(expression) = Expression::from_token(token) {
            self.cursor.advance();
            return Ok(expression);
        }

        match token.kind() {
            TokenKind::LeftParen | TokenKind::RightParen => {
                Err(SyntaxError::unsupported_token(token.value(), token.span))
            }
            _ => Err(SyntaxError::unexpected_token(
                "operand",
                token.value(),
                token.span,
            )),
        }
    }

    fn expect(&mut self, kind: TokenKind, expected: &str) -> SyntaxResult<&'a Token> {
        let token = self.current_or_end(expected)?;
        if token.kind() != kind {
            return Err(SyntaxError::unexpected_token(
                expected,
                token.value(),
                token.span,
            ));
        }
        self.cursor.advance();
        Ok(token)
    }

    /// Current token, or an end-of-input error if only EOF remains
    fn current_or_end(&self, expected: &str) -> SyntaxResult<&'a Token> {
        match self.cursor.current() {
            Some(token) if !token.is_eof() => Ok(token),
            Some(eof) => Err(SyntaxError::unexpected_end_of_input(expected, eof.span)),
            None => Err(SyntaxError::unexpected_end_of_input(
                expected,
                self.tokens.last().map(|t| t.span).unwrap_or_default(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::runtime::LexicalPreferences;
    use crate::grammar::ast::nodes::NodeType;
    use crate::lexical::tokenize_with_preferences;
    use crate::utils::Span;
    use assert_matches::assert_matches;

    fn parse(source: &str) -> SyntaxResult<Program> {
        let preferences = LexicalPreferences {
            strict_operator_fragments: false,
            collect_detailed_metrics: false,
            warn_on_truncation: false,
            split_on_newlines: true,
        };
        let sequence = tokenize_with_preferences(source, preferences).unwrap();
        LexisParser::new(sequence.as_slice()).parse_program()
    }

    #[test]
    fn test_regular_expression_statement() {
        let program = parse("45").unwrap();
        assert_eq!(
            program.body,
            vec![Statement::RegularExpression(Expression::numeric("45"))]
        );
    }

    #[test]
    fn test_chain_is_built_left_to_right() {
        let program = parse("a + b * 3").unwrap();
        assert_eq!(program.len(), 1);

        let Statement::BinaryExpression(chain) = &program.body[0] else {
            panic!("expected a chain, got {:?}", program.body[0]);
        };
        assert_eq!(chain.node_count(), 3);
        assert_eq!(chain.operators(), vec!["+", "*"]);
        let values: Vec<_> = chain.nodes().map(|n| n.current.value.as_str()).collect();
        assert_eq!(values, vec!["a", "b", "3"]);
    }

    #[test]
    fn test_declarations_and_statement_boundaries() {
        let program = parse("let x = 1 - null\nx / 2 y").unwrap();
        assert_eq!(program.len(), 3);

        let Statement::VariableDeclaration(declaration) = &program.body[0] else {
            panic!("expected a declaration");
        };
        assert_eq!(declaration.identifier, "x");
        assert_eq!(
            declaration.value.as_deref().map(Statement::node_type),
            Some(NodeType::BinaryExpression)
        );
        assert_eq!(program.body[1].node_type(), NodeType::BinaryExpression);
        assert_eq!(
            program.body[2],
            Statement::RegularExpression(Expression::identifier("y"))
        );
    }

    #[test]
    fn test_empty_program() {
        assert!(parse("").unwrap().is_empty());
    }

    #[test]
    fn test_parentheses_are_unsupported() {
        assert_matches!(
            parse("let x = 45 * ( 10 - 2 )"),
            Err(SyntaxError::UnsupportedToken { ref token, span }) if token == "(" && span.start.column == 14
        );
    }

    #[test]
    fn test_malformed_statements() {
        assert_matches!(
            parse("let = 1"),
            Err(SyntaxError::UnexpectedToken { ref expected, ref found, .. })
                if expected == "identifier" && found == "="
        );
        assert_matches!(
            parse("let x 1"),
            Err(SyntaxError::UnexpectedToken { ref expected, .. }) if expected == "'='"
        );
        assert_matches!(
            parse("1 +"),
            Err(SyntaxError::UnexpectedEndOfInput { ref expected, .. }) if expected == "operand"
        );
        assert_matches!(parse("let x ="), Err(SyntaxError::UnexpectedEndOfInput { .. }));
        assert_matches!(
            parse("* 2"),
            Err(SyntaxError::UnexpectedToken { ref found, .. }) if found == "*"
        );
        assert_matches!(parse("let let = 1"), Err(SyntaxError::UnexpectedToken { .. }));
    }

    #[test]
    fn test_token_stream_validation() {
        assert_matches!(
            LexisParser::new(&[]).parse_program(),
            Err(SyntaxError::EmptyTokenStream)
        );

        let no_eof = vec![Token::new(TokenKind::Number, "1", Span::default())];
        assert_matches!(
            LexisParser::new(&no_eof).parse_program(),
            Err(SyntaxError::MissingEof)
        );

        let early_eof = vec![
            Token::eof(Span::default()),
            Token::new(TokenKind::Number, "1", Span::default()),
            Token::eof(Span::default()),
        ];
        assert_matches!(
            LexisParser::new(&early_eof).parse_program(),
            Err(SyntaxError::MissingEof)
        );
    }

    #[test]
    fn test_chain_length_limit() {
        let mut source = String::from("1");
        for _ in 0..MAX_CHAIN_LENGTH {
            source.push_str(" + 1");
        }
        assert_matches!(
            parse(&source),
            Err(SyntaxError::MaxChainLength { length, .. }) if length == MAX_CHAIN_LENGTH + 1
        );
    }
}
