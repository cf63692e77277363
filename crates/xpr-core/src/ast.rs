//! Expression tree produced by the parser.
//!
//! Node shapes follow the ESTree conventions: every node serializes with a
//! `"type"` tag, and `optional` is only present on member/call links that were
//! written with `?.`.

use std::fmt;

use serde::Serialize;

/// Primitive value carried by a [`Expr::Literal`].
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Number(f64),
    String(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

/// An expression node.
///
/// Nodes own their children; there are no parent links.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Expr {
    Identifier {
        name: String,
    },
    Literal {
        value: Value,
        /// Exact source text, including quotes for strings.
        raw: String,
    },
    ThisExpression,
    MemberExpression {
        computed: bool,
        object: Box<Expr>,
        property: Box<Expr>,
        #[serde(skip_serializing_if = "Option::is_none")]
        optional: Option<bool>,
    },
    CallExpression {
        callee: Box<Expr>,
        arguments: Vec<Expr>,
        #[serde(skip_serializing_if = "Option::is_none")]
        optional: Option<bool>,
    },
    UnaryExpression {
        operator: String,
        argument: Box<Expr>,
        prefix: bool,
    },
    BinaryExpression {
        operator: String,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    /// Produced only by the ternary plugin.
    ConditionalExpression {
        test: Box<Expr>,
        consequent: Box<Expr>,
        alternate: Box<Expr>,
    },
    ArrayExpression {
        /// `None` marks a hole, as in `[a, , b]`.
        elements: Vec<Option<Expr>>,
    },
    SequenceExpression {
        expressions: Vec<Expr>,
    },
    Compound {
        body: Vec<Expr>,
    },
}

impl Expr {
    pub fn identifier(name: impl Into<String>) -> Self {
        Expr::Identifier { name: name.into() }
    }

    pub fn literal(value: impl Into<Value>, raw: impl Into<String>) -> Self {
        Expr::Literal {
            value: value.into(),
            raw: raw.into(),
        }
    }

    /// Numeric literal whose raw text is the shortest display of `value`.
    pub fn number(value: f64) -> Self {
        Expr::Literal {
            value: Value::Number(value),
            raw: value.to_string(),
        }
    }

    /// Single-quoted string literal. Escapes are not re-encoded in `raw`.
    pub fn string(value: impl Into<String>) -> Self {
        let value = value.into();
        let raw = format!("'{value}'");
        Expr::Literal {
            value: Value::String(value),
            raw,
        }
    }

    pub fn member(object: Expr, property: Expr, computed: bool) -> Self {
        Expr::MemberExpression {
            computed,
            object: Box::new(object),
            property: Box::new(property),
            optional: None,
        }
    }

    pub fn call(callee: Expr, arguments: Vec<Expr>) -> Self {
        Expr::CallExpression {
            callee: Box::new(callee),
            arguments,
            optional: None,
        }
    }

    pub fn unary(operator: impl Into<String>, argument: Expr) -> Self {
        Expr::UnaryExpression {
            operator: operator.into(),
            argument: Box::new(argument),
            prefix: true,
        }
    }

    pub fn binary(operator: impl Into<String>, left: Expr, right: Expr) -> Self {
        Expr::BinaryExpression {
            operator: operator.into(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn conditional(test: Expr, consequent: Expr, alternate: Expr) -> Self {
        Expr::ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        }
    }

    /// The ESTree `type` tag of this node.
    pub fn type_name(&self) -> &'static str {
        match self {
            Expr::Identifier { .. } => "Identifier",
            Expr::Literal { .. } => "Literal",
            Expr::ThisExpression => "ThisExpression",
            Expr::MemberExpression { .. } => "MemberExpression",
            Expr::CallExpression { .. } => "CallExpression",
            Expr::UnaryExpression { .. } => "UnaryExpression",
            Expr::BinaryExpression { .. } => "BinaryExpression",
            Expr::ConditionalExpression { .. } => "ConditionalExpression",
            Expr::ArrayExpression { .. } => "ArrayExpression",
            Expr::SequenceExpression { .. } => "SequenceExpression",
            Expr::Compound { .. } => "Compound",
        }
    }

    pub fn is_compound(&self) -> bool {
        matches!(self, Expr::Compound { .. })
    }

    /// Whether this link was written with `?.`.
    pub fn is_optional(&self) -> bool {
        match self {
            Expr::MemberExpression { optional, .. } | Expr::CallExpression { optional, .. } => {
                optional.unwrap_or(false)
            }
            _ => false,
        }
    }

    /// Marks a member or call link as optional. Other nodes are left as is.
    pub fn set_optional(&mut self) {
        if let Expr::MemberExpression { optional, .. } | Expr::CallExpression { optional, .. } =
            self
        {
            *optional = Some(true);
        }
    }

    /// Identifier name, if this is an identifier.
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Expr::Identifier { name } => Some(name),
            _ => None,
        }
    }
}
