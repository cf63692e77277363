//! Builder-pattern printer for expression trees.
//!
//! One node per line, children indented by two spaces:
//!
//! ```text
//! BinaryExpression +
//!   Literal 1
//!   CallExpression
//!     Identifier f
//!     Identifier x
//! ```

use std::fmt::Write;

use crate::ast::Expr;

pub struct AstPrinter<'e> {
    root: Option<&'e Expr>,
    values: bool,
}

impl<'e> AstPrinter<'e> {
    pub fn new(root: Option<&'e Expr>) -> Self {
        Self {
            root,
            values: false,
        }
    }

    /// Print decoded literal values instead of their raw source text.
    pub fn with_values(mut self, value: bool) -> Self {
        self.values = value;
        self
    }

    pub fn dump(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        match self.root {
            Some(root) => self.format_expr(root, 0, w),
            None => writeln!(w, "(empty)"),
        }
    }

    fn format_expr(&self, expr: &Expr, indent: usize, w: &mut impl Write) -> std::fmt::Result {
        let prefix = "  ".repeat(indent);
        write!(w, "{}{}", prefix, expr.type_name())?;

        match expr {
            Expr::Identifier { name } => writeln!(w, " {name}"),
            Expr::Literal { value, raw } => {
                if self.values {
                    writeln!(w, " {value}")
                } else {
                    writeln!(w, " {raw}")
                }
            }
            Expr::ThisExpression => writeln!(w),
            Expr::MemberExpression {
                computed,
                object,
                property,
                optional,
            } => {
                if *computed {
                    w.write_str(" computed")?;
                }
                if optional.unwrap_or(false) {
                    w.write_str(" optional")?;
                }
                writeln!(w)?;
                self.format_expr(object, indent + 1, w)?;
                self.format_expr(property, indent + 1, w)
            }
            Expr::CallExpression {
                callee,
                arguments,
                optional,
            } => {
                if optional.unwrap_or(false) {
                    w.write_str(" optional")?;
                }
                writeln!(w)?;
                self.format_expr(callee, indent + 1, w)?;
                for arg in arguments {
                    self.format_expr(arg, indent + 1, w)?;
                }
                Ok(())
            }
            Expr::UnaryExpression {
                operator, argument, ..
            } => {
                writeln!(w, " {operator}")?;
                self.format_expr(argument, indent + 1, w)
            }
            Expr::BinaryExpression {
                operator,
                left,
                right,
            } => {
                writeln!(w, " {operator}")?;
                self.format_expr(left, indent + 1, w)?;
                self.format_expr(right, indent + 1, w)
            }
            Expr::ConditionalExpression {
                test,
                consequent,
                alternate,
            } => {
                writeln!(w)?;
                self.format_expr(test, indent + 1, w)?;
                self.format_expr(consequent, indent + 1, w)?;
                self.format_expr(alternate, indent + 1, w)
            }
            Expr::ArrayExpression { elements } => {
                writeln!(w)?;
                for element in elements {
                    match element {
                        Some(e) => self.format_expr(e, indent + 1, w)?,
                        None => writeln!(w, "{}  <hole>", prefix)?,
                    }
                }
                Ok(())
            }
            Expr::SequenceExpression { expressions: items } | Expr::Compound { body: items } => {
                writeln!(w)?;
                for item in items {
                    self.format_expr(item, indent + 1, w)?;
                }
                Ok(())
            }
        }
    }
}

impl Expr {
    pub fn printer(&self) -> AstPrinter<'_> {
        AstPrinter::new(Some(self))
    }

    pub fn dump(&self) -> String {
        self.printer().dump()
    }
}
