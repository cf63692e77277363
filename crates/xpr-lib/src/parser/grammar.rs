//! Expressions, binary operator precedence, tokens and member/call chains.

use xpr_core::{Expr, ParseError};

use super::core::Parser;
use crate::hooks::HookPoint;

/// A scanned binary operator waiting on the operator stack.
#[derive(Debug)]
struct BinaryOpInfo {
    operator: String,
    precedence: u32,
    right_associative: bool,
}

impl BinaryOpInfo {
    /// Whether `top` must be reduced before `self` is pushed.
    fn reduces(&self, top: &BinaryOpInfo) -> bool {
        if self.right_associative && top.right_associative {
            self.precedence < top.precedence
        } else {
            self.precedence <= top.precedence
        }
    }
}

impl Parser<'_> {
    /// Expressions separated by `;` or `,`, up to end of input or `until`.
    pub(super) fn gobble_expressions(
        &mut self,
        until: Option<char>,
    ) -> Result<Vec<Expr>, ParseError> {
        let mut nodes = Vec::new();

        loop {
            self.gobble_spaces()?;
            let Some(ch) = self.current() else {
                break;
            };
            if ch == ';' || ch == ',' {
                self.advance(1);
                continue;
            }

            match self.gobble_expression()? {
                Some(node) => nodes.push(node),
                None => match self.current() {
                    None => break,
                    Some(ch) if Some(ch) == until => break,
                    Some(ch) => return Err(self.error(format!("Unexpected \"{ch}\""))),
                },
            }
        }

        Ok(nodes)
    }

    /// One expression, e.g. `a + b * c(d)`.
    ///
    /// `gobble-expression` hooks get first refusal; `after-expression` hooks
    /// may replace the result.
    pub fn gobble_expression(&mut self) -> Result<Option<Expr>, ParseError> {
        self.enter_recursion()?;
        let node = self.gobble_expression_inner();
        self.exit_recursion();
        node
    }

    fn gobble_expression_inner(&mut self) -> Result<Option<Expr>, ParseError> {
        let node = match self.search_hook(HookPoint::GobbleExpression)? {
            Some(node) => Some(node),
            None => self.gobble_binary_expression()?,
        };
        self.gobble_spaces()?;
        self.run_hook(HookPoint::AfterExpression, node)
    }

    fn gobble_binary_expression(&mut self) -> Result<Option<Expr>, ParseError> {
        let Some(left) = self.gobble_token()? else {
            return Ok(None);
        };
        let Some(first) = self.gobble_binary_op()? else {
            return Ok(Some(left));
        };
        let Some(right) = self.gobble_token()? else {
            return Err(self.error(format!("Expected expression after {}", first.operator)));
        };

        let mut operands = vec![left, right];
        let mut operators = vec![first];

        while let Some(info) = self.gobble_binary_op()? {
            if info.precedence == 0 {
                self.index -= info.operator.chars().count();
                break;
            }

            while let Some(top) = operators.last()
                && info.reduces(top)
            {
                reduce(&mut operands, &mut operators);
            }

            let Some(right) = self.gobble_token()? else {
                return Err(self.error(format!("Expected expression after {}", info.operator)));
            };
            operands.push(right);
            operators.push(info);
        }

        while !operators.is_empty() {
            reduce(&mut operands, &mut operators);
        }

        Ok(operands.pop())
    }

    fn gobble_binary_op(&mut self) -> Result<Option<BinaryOpInfo>, ParseError> {
        self.gobble_spaces()?;
        let engine = self.engine;
        let Some(operator) =
            self.scan_operator(engine.max_binary_op_len(), |op| engine.is_binary_op(op))
        else {
            return Ok(None);
        };
        self.advance(operator.chars().count());

        Ok(Some(BinaryOpInfo {
            precedence: engine.binary_precedence(&operator),
            right_associative: engine.is_right_associative(&operator),
            operator,
        }))
    }

    /// Longest operator at the cursor, without consuming it.
    ///
    /// A candidate starting with an identifier character must be followed by a
    /// non-identifier character or end of input, so `and` never matches inside
    /// `android`.
    fn scan_operator(&self, max_len: usize, is_op: impl Fn(&str) -> bool) -> Option<String> {
        let first = self.current()?;
        let word_like = self.engine.is_identifier_start(first);

        (1..=max_len.min(self.remaining())).rev().find_map(|len| {
            let candidate = self.slice(self.index, self.index + len);
            if !is_op(&candidate) {
                return None;
            }
            if word_like
                && self
                    .char_at(self.index + len)
                    .is_some_and(|next| self.engine.is_identifier_part(next))
            {
                return None;
            }
            Some(candidate)
        })
    }

    /// A single operand with its member and call links, e.g. `foo.bar(baz)`,
    /// `-x`, `"abc"` or `(a % 2)`.
    pub fn gobble_token(&mut self) -> Result<Option<Expr>, ParseError> {
        self.enter_recursion()?;
        let token = self.gobble_token_inner();
        self.exit_recursion();
        token
    }

    fn gobble_token_inner(&mut self) -> Result<Option<Expr>, ParseError> {
        self.gobble_spaces()?;

        if let Some(node) = self.search_hook(HookPoint::GobbleToken)? {
            return self.run_hook(HookPoint::AfterToken, Some(node));
        }

        let Some(ch) = self.current() else {
            return self.run_hook(HookPoint::AfterToken, None);
        };

        if self.engine.is_decimal_digit(ch) || ch == '.' {
            return self.gobble_numeric_literal().map(Some);
        }

        let node = if ch == '\'' || ch == '"' {
            Some(self.gobble_string_literal()?)
        } else if ch == '[' {
            Some(self.gobble_array()?)
        } else if let Some(operator) = self.scan_unary_op() {
            self.advance(operator.chars().count());
            let Some(argument) = self.gobble_token()? else {
                return Err(self.error("Missing unary operator argument"));
            };
            return self.run_hook(HookPoint::AfterToken, Some(Expr::unary(operator, argument)));
        } else if self.engine.is_identifier_start(ch) {
            Some(self.gobble_named_token()?)
        } else if ch == '(' {
            self.gobble_group()?
        } else {
            None
        };

        let node = match node {
            Some(node) => Some(self.gobble_token_property(node)?),
            None => None,
        };
        self.run_hook(HookPoint::AfterToken, node)
    }

    fn scan_unary_op(&self) -> Option<String> {
        let engine = self.engine;
        self.scan_operator(engine.max_unary_op_len(), |op| engine.is_unary_op(op))
    }

    /// Identifier, or the literal / `this` node it names.
    fn gobble_named_token(&mut self) -> Result<Expr, ParseError> {
        let name = self.scan_identifier()?;
        if let Some(value) = self.engine.literal(&name) {
            return Ok(Expr::literal(value.clone(), name));
        }
        if name == self.engine.this_keyword() {
            return Ok(Expr::ThisExpression);
        }
        Ok(Expr::Identifier { name })
    }

    /// Member accesses and calls following a token: `.b`, `[c]`, `(d)`, and
    /// their optional forms `?.b`, `?.[c]`, `?.(d)`.
    fn gobble_token_property(&mut self, mut node: Expr) -> Result<Expr, ParseError> {
        self.gobble_spaces()?;

        while let Some(ch) = self.current() {
            let optional = match ch {
                '.' | '[' | '(' => false,
                '?' if self.peek(1) == Some('.') => true,
                _ => break,
            };

            let link = if optional {
                self.advance(2);
                self.gobble_spaces()?;
                match self.current() {
                    Some(open @ ('[' | '(')) => {
                        self.advance(1);
                        open
                    }
                    _ => '.',
                }
            } else {
                self.advance(1);
                ch
            };

            node = match link {
                '[' => {
                    let Some(property) = self.gobble_expression()? else {
                        return Err(self.error("Expected expression"));
                    };
                    self.gobble_spaces()?;
                    if self.current() != Some(']') {
                        return Err(self.error("Unclosed ["));
                    }
                    self.advance(1);
                    Expr::member(node, property, true)
                }
                '(' => {
                    let arguments = self.gobble_arguments(')')?.into_iter().flatten().collect();
                    Expr::call(node, arguments)
                }
                _ => {
                    self.gobble_spaces()?;
                    let property = self.gobble_identifier()?;
                    Expr::member(node, property, false)
                }
            };

            if optional {
                node.set_optional();
            }

            self.gobble_spaces()?;
        }

        Ok(node)
    }

    /// Elements up to `terminator`, which is `)` for calls and `]` for arrays.
    ///
    /// Elements are separated either all by commas or all by spaces. Only
    /// arrays accept holes (`[a, , b]`); holes are returned as `None`.
    fn gobble_arguments(&mut self, terminator: char) -> Result<Vec<Option<Expr>>, ParseError> {
        let mut args: Vec<Option<Expr>> = Vec::new();
        let mut separators = 0usize;

        loop {
            self.gobble_spaces()?;
            let Some(ch) = self.current() else {
                return Err(self.error(format!("Expected {terminator}")));
            };

            if ch == terminator {
                self.advance(1);
                if terminator == ')' && separators > 0 && separators >= args.len() {
                    return Err(self.error(format!("Unexpected token {terminator}")));
                }
                return Ok(args);
            }

            if ch == ',' {
                self.advance(1);
                separators += 1;
                if separators != args.len() {
                    if terminator == ')' {
                        return Err(self.error("Unexpected token ,"));
                    }
                    args.resize_with(separators, || None);
                }
            } else if args.len() != separators && separators != 0 {
                return Err(self.error("Expected comma"));
            } else {
                match self.gobble_expression()? {
                    Some(node) if !node.is_compound() => args.push(Some(node)),
                    _ => return Err(self.error("Expected comma")),
                }
            }
        }
    }

    /// Parenthesised group: nothing, one expression, or a sequence.
    fn gobble_group(&mut self) -> Result<Option<Expr>, ParseError> {
        self.advance(1);
        let mut nodes = self.gobble_expressions(Some(')'))?;
        if self.current() != Some(')') {
            return Err(self.error("Unclosed ("));
        }
        self.advance(1);

        Ok(match nodes.len() {
            0 => None,
            1 => nodes.pop(),
            _ => Some(Expr::SequenceExpression { expressions: nodes }),
        })
    }

    fn gobble_array(&mut self) -> Result<Expr, ParseError> {
        self.advance(1);
        let elements = self.gobble_arguments(']')?;
        Ok(Expr::ArrayExpression { elements })
    }
}

/// Folds the top two operands and the top operator into a binary node.
fn reduce(operands: &mut Vec<Expr>, operators: &mut Vec<BinaryOpInfo>) {
    let (Some(info), Some(right), Some(left)) = (operators.pop(), operands.pop(), operands.pop())
    else {
        return;
    };
    operands.push(Expr::binary(info.operator, left, right));
}
