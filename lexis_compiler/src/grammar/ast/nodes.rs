//! AST node definitions for Lexis programs
//!
//! The tree is strictly owned: a `Program` owns its statements, and a
//! binary-expression chain owns each following node through a `Box`. Nodes
//! are built once by the parser and never mutated afterwards.
//!
//! Binary expressions are forward lists, not operator trees: `a + b * c` is
//! `a -(+)-> b -(*)-> c` with no precedence.

use crate::tokens::{Token, TokenKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discriminant carried by every node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    Program,
    VariableDeclaration,
    RegularExpression,
    BinaryExpression,
    NumericLiteral,
    Identifier,
    NullLiteral,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Program => "Program",
            Self::VariableDeclaration => "VariableDeclaration",
            Self::RegularExpression => "RegularExpression",
            Self::BinaryExpression => "BinaryExpression",
            Self::NumericLiteral => "NumericLiteral",
            Self::Identifier => "Identifier",
            Self::NullLiteral => "NullLiteral",
        }
    }

    /// Node types an `Expression` may carry
    pub fn is_expression_type(&self) -> bool {
        matches!(
            self,
            Self::NumericLiteral | Self::Identifier | Self::NullLiteral
        )
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Root node; statements in source order
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Program {
    pub body: Vec<Statement>,
}

impl Program {
    pub fn new(body: Vec<Statement>) -> Self {
        Self { body }
    }

    pub fn node_type(&self) -> NodeType {
        NodeType::Program
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Statement {
    RegularExpression(Expression),
    BinaryExpression(BinaryExpression),
    VariableDeclaration(VariableDeclaration),
}

impl Statement {
    pub fn node_type(&self) -> NodeType {
        match self {
            Self::RegularExpression(_) => NodeType::RegularExpression,
            Self::BinaryExpression(_) => NodeType::BinaryExpression,
            Self::VariableDeclaration(_) => NodeType::VariableDeclaration,
        }
    }

    /// A lone operand becomes a regular expression, anything longer a chain
    pub fn from_chain(chain: BinaryExpression) -> Self {
        if chain.is_terminal() {
            Self::RegularExpression(chain.current)
        } else {
            Self::BinaryExpression(chain)
        }
    }
}

/// Leaf value: a literal or a name, holding the exact token text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expression {
    pub node_type: NodeType,
    pub value: String,
}

impl Expression {
    pub fn numeric(value: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::NumericLiteral,
            value: value.into(),
        }
    }

    pub fn identifier(value: impl Into<String>) -> Self {
        Self {
            node_type: NodeType::Identifier,
            value: value.into(),
        }
    }

    pub fn null() -> Self {
        Self {
            node_type: NodeType::NullLiteral,
            value: "null".to_string(),
        }
    }

    /// Operand tokens only; `None` for anything else
    pub fn from_token(token: &Token) -> Option<Self> {
        match token.kind() {
            TokenKind::Number => Some(Self::numeric(token.value())),
            TokenKind::Identifier => Some(Self::identifier(token.value())),
            TokenKind::Null => Some(Self {
                node_type: NodeType::NullLiteral,
                value: token.value().to_string(),
            }),
            _ => None,
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.node_type, self.value)
    }
}

/// One node of a binary-expression chain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    pub current: Expression,
    /// Operator and following node; `None` on the terminal node
    pub link: Option<ChainLink>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChainLink {
    pub operator: String,
    pub next: Box<BinaryExpression>,
}

impl BinaryExpression {
    pub fn terminal(current: Expression) -> Self {
        Self {
            current,
            link: None,
        }
    }

    pub fn linked(current: Expression, operator: impl Into<String>, next: BinaryExpression) -> Self {
        Self {
            current,
            link: Some(ChainLink {
                operator: operator.into(),
                next: Box::new(next),
            }),
        }
    }

    /// Build `first op1 e1 op2 e2 ...` as a forward chain
    pub fn from_parts(first: Expression, rest: Vec<(String, Expression)>) -> Self {
        // Walk right to left so each node can take ownership of its successor
        let mut pending = first;
        let mut steps = Vec::with_capacity(rest.len());
        for (operator, operand) in rest {
            steps.push((std::mem::replace(&mut pending, operand), operator));
        }

        steps
            .into_iter()
            .rev()
            .fold(Self::terminal(pending), |next, (current, operator)| {
                Self::linked(current, operator, next)
            })
    }

    pub fn is_terminal(&self) -> bool {
        self.link.is_none()
    }

    pub fn operator(&self) -> Option<&str> {
        self.link.as_ref().map(|link| link.operator.as_str())
    }

    pub fn next(&self) -> Option<&BinaryExpression> {
        self.link.as_ref().map(|link| link.next.as_ref())
    }

    /// Nodes from this one to the terminal node
    pub fn nodes(&self) -> ChainIter<'_> {
        ChainIter { node: Some(self) }
    }

    pub fn node_count(&self) -> usize {
        self.nodes().count()
    }

    pub fn operators(&self) -> Vec<&str> {
        self.nodes().filter_map(BinaryExpression::operator).collect()
    }
}

impl fmt::Display for BinaryExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in self.nodes() {
            write!(f, "{}", node.current)?;
            if let Some(op) = node.operator() {
                write!(f, " {} ", op)?;
            }
        }
        Ok(())
    }
}

pub struct ChainIter<'a> {
    node: Option<&'a BinaryExpression>,
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = &'a BinaryExpression;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.node?;
        self.node = node.next();
        Some(node)
    }
}

/// `let <identifier> = <value>`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub identifier: String,
    /// A regular expression or a binary-expression chain
    pub value: Option<Box<Statement>>,
}

impl VariableDeclaration {
    pub fn new(identifier: impl Into<String>, value: Option<Statement>) -> Self {
        Self {
            identifier: identifier.into(),
            value: value.map(Box::new),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::Span;

    fn chain_abc() -> BinaryExpression {
        BinaryExpression::from_parts(
            Expression::identifier("a"),
            vec![
                ("+".to_string(), Expression::identifier("b")),
                ("*".to_string(), Expression::numeric("3")),
            ],
        )
    }

    #[test]
    fn test_from_parts_builds_forward_chain() {
        let chain = chain_abc();

        assert_eq!(chain.current.value, "a");
        assert_eq!(chain.operator(), Some("+"));
        let second = chain.next().unwrap();
        assert_eq!(second.current.value, "b");
        assert_eq!(second.operator(), Some("*"));
        let third = second.next().unwrap();
        assert_eq!(third.current, Expression::numeric("3"));
        assert!(third.is_terminal());

        assert_eq!(chain.node_count(), 3);
        assert_eq!(chain.operators(), vec!["+", "*"]);
        assert_eq!(
            chain.to_string(),
            "Identifier(a) + Identifier(b) * NumericLiteral(3)"
        );
    }

    #[test]
    fn test_single_operand_chain_is_regular_expression() {
        let chain = BinaryExpression::from_parts(Expression::numeric("7"), Vec::new());
        assert_eq!(chain.node_count(), 1);

        let statement = Statement::from_chain(chain);
        assert_eq!(statement.node_type(), NodeType::RegularExpression);
        assert_eq!(
            Statement::from_chain(chain_abc()).node_type(),
            NodeType::BinaryExpression
        );
    }

    #[test]
    fn test_expression_from_token() {
        let number = Token::new(TokenKind::Number, "45", Span::default());
        let null = Token::new(TokenKind::Null, "null", Span::default());
        let plus = Token::new(TokenKind::Plus, "+", Span::default());

        assert_eq!(
            Expression::from_token(&number),
            Some(Expression::numeric("45"))
        );
        assert_eq!(Expression::from_token(&null), Some(Expression::null()));
        assert_eq!(Expression::from_token(&plus), None);
    }

    #[test]
    fn test_node_types() {
        assert_eq!(Program::default().node_type(), NodeType::Program);
        assert!(NodeType::NullLiteral.is_expression_type());
        assert!(!NodeType::BinaryExpression.is_expression_type());

        let declaration = VariableDeclaration::new(
            "x",
            Some(Statement::RegularExpression(Expression::numeric("1"))),
        );
        assert_eq!(
            Statement::VariableDeclaration(declaration).node_type(),
            NodeType::VariableDeclaration
        );
    }

    #[test]
    fn test_serde_shape() {
        let json = serde_json::to_value(Statement::from_chain(chain_abc())).unwrap();
        let chain = &json["BinaryExpression"];
        assert_eq!(chain["current"]["node_type"], "Identifier");
        assert_eq!(chain["link"]["operator"], "+");
        assert_eq!(chain["link"]["next"]["link"]["next"]["link"], serde_json::Value::Null);

        let back: Statement = serde_json::from_value(json).unwrap();
        assert_eq!(back, Statement::from_chain(chain_abc()));
    }
}
