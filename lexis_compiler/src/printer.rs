//! Human-readable AST dump
//!
//! Layout follows the structure of the tree, one field per line. A binary
//! chain of N nodes is shown as N-1 transition blocks, each holding the next
//! node's operand, the operator, and the current node's operand.

use crate::config::runtime::{PrinterPreferences, MAX_INDENT_WIDTH};
use crate::grammar::ast::nodes::{
    BinaryExpression, Expression, Program, Statement, VariableDeclaration,
};
use std::fmt::Write as _;
use std::io;

/// Render with indentation width from the environment
pub fn render_program(program: &Program) -> String {
    AstPrinter::new(PrinterPreferences::default()).render(program)
}

pub fn print_program<W: io::Write>(program: &Program, out: &mut W) -> io::Result<()> {
    out.write_all(render_program(program).as_bytes())
}

pub struct AstPrinter {
    indent_width: usize,
    buffer: String,
}

impl AstPrinter {
    /// Widths above `MAX_INDENT_WIDTH` are clamped
    pub fn new(preferences: PrinterPreferences) -> Self {
        Self {
            indent_width: preferences.indent_width.min(MAX_INDENT_WIDTH),
            buffer: String::new(),
        }
    }

    pub fn with_indent_width(indent_width: usize) -> Self {
        Self::new(PrinterPreferences { indent_width })
    }

    pub fn render(mut self, program: &Program) -> String {
        self.line(0, "{");
        self.line(1, &format!("type: \"{}\",", program.node_type()));
        self.line(1, "body: [");
        for statement in &program.body {
            self.statement(statement, 2);
        }
        self.line(1, "]");
        self.line(0, "}");
        self.buffer
    }

    fn statement(&mut self, statement: &Statement, depth: usize) {
        match statement {
            Statement::RegularExpression(expression) => {
                self.line(depth, "{");
                self.line(
                    depth + 1,
                    &format!("stmt_type: \"{}\",", statement.node_type()),
                );
                self.line(depth + 1, "expr: {");
                self.expression(expression, depth + 2);
                self.line(depth + 1, "}");
                self.line(depth, "},");
            }
            Statement::BinaryExpression(chain) => self.chain(chain, depth),
            Statement::VariableDeclaration(declaration) => self.declaration(declaration, depth),
        }
    }

    fn chain(&mut self, chain: &BinaryExpression, depth: usize) {
        self.line(depth, "BinaryExpr {");
        for node in chain.nodes() {
            let Some(link) = &node.link else {
                break;
            };
            self.line(depth + 1, "{");
            self.line(depth + 2, "next: {");
            self.expression(&link.next.current, depth + 3);
            self.line(depth + 2, "},");
            self.line(depth + 2, &format!("op: \"{}\",", link.operator));
            self.line(depth + 2, "current: {");
            self.expression(&node.current, depth + 3);
            self.line(depth + 2, "}");
            self.line(depth + 1, "},");
        }
        self.line(depth, "},");
    }

    fn declaration(&mut self, declaration: &VariableDeclaration, depth: usize) {
        self.line(depth, "{");
        self.line(depth + 1, "stmt_type: \"VariableDeclaration\",");
        self.line(
            depth + 1,
            &format!("identifier: \"{}\",", declaration.identifier),
        );
        match &declaration.value {
            Some(value) => {
                self.line(depth + 1, "value:");
                self.statement(value, depth + 2);
            }
            None => self.line(depth + 1, "value: null"),
        }
        self.line(depth, "},");
    }

    fn expression(&mut self, expression: &Expression, depth: usize) {
        self.line(depth, &format!("type: \"{}\",", expression.node_type));
        self.line(depth, &format!("value: \"{}\"", expression.value));
    }

    fn line(&mut self, depth: usize, text: &str) {
        // Writing into a String cannot fail
        let _ = writeln!(
            self.buffer,
            "{:width$}{}",
            "",
            text,
            width = depth * self.indent_width
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn program_with(statement: Statement) -> Program {
        Program::new(vec![statement])
    }

    fn chain_of(values: &[&str]) -> BinaryExpression {
        let first = Expression::identifier(values[0]);
        let rest = values[1..]
            .iter()
            .map(|v| ("+".to_string(), Expression::identifier(*v)))
            .collect();
        BinaryExpression::from_parts(first, rest)
    }

    #[test]
    fn test_regular_expression_layout() {
        let program = program_with(Statement::RegularExpression(Expression::numeric("45")));
        let rendered = AstPrinter::with_indent_width(2).render(&program);

        let expected = "\
{
  type: \"Program\",
  body: [
    {
      stmt_type: \"RegularExpression\",
      expr: {
        type: \"NumericLiteral\",
        value: \"45\"
      }
    },
  ]
}
";
        assert_eq!(rendered, expected);
    }

    #[test]
    fn test_chain_block_contents() {
        let chain = BinaryExpression::from_parts(
            Expression::numeric("1"),
            vec![("*".to_string(), Expression::identifier("x"))],
        );
        let rendered =
            AstPrinter::with_indent_width(2).render(&program_with(Statement::BinaryExpression(chain)));

        let expected_block = concat!(
            "    BinaryExpr {\n",
            "      {\n",
            "        next: {\n",
            "          type: \"Identifier\",\n",
            "          value: \"x\"\n",
            "        },\n",
            "        op: \"*\",\n",
            "        current: {\n",
            "          type: \"NumericLiteral\",\n",
            "          value: \"1\"\n",
            "        }\n",
            "      },\n",
            "    },\n",
        );
        assert!(rendered.contains(expected_block), "{}", rendered);
    }

    #[test]
    fn test_chain_of_n_nodes_prints_n_minus_one_blocks() {
        for n in 2..6 {
            let values: Vec<String> = (0..n).map(|i| format!("v{}", i)).collect();
            let refs: Vec<&str> = values.iter().map(String::as_str).collect();
            let program = program_with(Statement::BinaryExpression(chain_of(&refs)));

            let rendered = AstPrinter::with_indent_width(2).render(&program);
            assert_eq!(rendered.matches("op: ").count(), n - 1);
            assert_eq!(rendered.matches("next: {").count(), n - 1);
        }
    }

    #[test]
    fn test_declaration_nests_value_and_honours_indent_width() {
        let declaration = VariableDeclaration::new(
            "total",
            Some(Statement::BinaryExpression(chain_of(&["a", "b"]))),
        );
        let rendered = AstPrinter::with_indent_width(4)
            .render(&program_with(Statement::VariableDeclaration(declaration)));

        assert!(rendered.contains("\n            stmt_type: \"VariableDeclaration\",\n"));
        assert!(rendered.contains("\n            identifier: \"total\",\n"));
        assert!(rendered.contains("\n                BinaryExpr {\n"));

        let empty = VariableDeclaration::new("nothing", None);
        let rendered = AstPrinter::with_indent_width(2)
            .render(&program_with(Statement::VariableDeclaration(empty)));
        assert!(rendered.contains("value: null"));
    }

    #[test]
    fn test_oversized_indent_width_is_clamped() {
        let program = program_with(Statement::RegularExpression(Expression::numeric("1")));

        for width in [40_000, usize::MAX / 2, usize::MAX] {
            let rendered = AstPrinter::with_indent_width(width).render(&program);
            let expected = format!("\n{}type: \"Program\",\n", " ".repeat(MAX_INDENT_WIDTH));
            assert!(rendered.contains(&expected), "{}", rendered);
        }
    }

    #[test]
    fn test_print_program_writes_rendered_text() {
        let program = Program::default();
        let mut out = Vec::new();
        print_program(&program, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("{\n"));
        assert!(text.contains("body: [\n"));
        assert!(text.ends_with("}\n"));
    }
}
