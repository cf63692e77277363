//! Numbers, strings and identifiers.

use xpr_core::{Expr, ParseError};

use super::core::Parser;

impl Parser<'_> {
    /// `12`, `3.4`, `.5`, `1e-3`. The raw text is kept exactly as written.
    pub(super) fn gobble_numeric_literal(&mut self) -> Result<Expr, ParseError> {
        let start = self.index;

        self.skip_digits();
        if self.current() == Some('.') {
            self.advance(1);
            self.skip_digits();
        }

        if matches!(self.current(), Some('e' | 'E')) {
            self.advance(1);
            if matches!(self.current(), Some('+' | '-')) {
                self.advance(1);
            }
            let digits = self.index;
            self.skip_digits();
            if self.index == digits {
                let raw = self.slice(start, self.index);
                let next = self.current().map(String::from).unwrap_or_default();
                return Err(self.error(format!("Expected exponent ({raw}{next})")));
            }
        }

        let raw = self.slice(start, self.index);

        if let Some(ch) = self.current()
            && self.engine.is_identifier_start(ch)
        {
            return Err(self.error(format!(
                "Variable names cannot start with a number ({raw}{ch})"
            )));
        }
        if self.current() == Some('.') || raw == "." {
            return Err(self.error("Unexpected period"));
        }

        let value: f64 = raw
            .parse()
            .map_err(|_| self.error(format!("Invalid number ({raw})")))?;
        Ok(Expr::literal(value, raw))
    }

    fn skip_digits(&mut self) {
        while self
            .current()
            .is_some_and(|ch| self.engine.is_decimal_digit(ch))
        {
            self.index += 1;
        }
    }

    /// Single- or double-quoted string with `\n \r \t \b \f \v` escapes.
    /// Any other escaped character stands for itself.
    pub(super) fn gobble_string_literal(&mut self) -> Result<Expr, ParseError> {
        let start = self.index;
        let Some(quote) = self.current() else {
            return Err(self.error("Unexpected end of input"));
        };
        self.advance(1);

        let mut value = String::new();
        while let Some(ch) = self.current() {
            self.advance(1);

            if ch == quote {
                let raw = self.slice(start, self.index);
                return Ok(Expr::literal(value, raw));
            }

            if ch != '\\' {
                value.push(ch);
                continue;
            }

            let Some(escaped) = self.current() else {
                break;
            };
            self.advance(1);
            value.push(match escaped {
                'n' => '\n',
                'r' => '\r',
                't' => '\t',
                'b' => '\u{8}',
                'f' => '\u{c}',
                'v' => '\u{b}',
                other => other,
            });
        }

        Err(self.error(format!("Unclosed quote after \"{value}\"")))
    }

    /// A bare identifier such as `foo`, `_value` or `$x1`.
    ///
    /// Unlike identifiers met while gobbling a token, the name is never turned
    /// into a literal or `this`.
    pub fn gobble_identifier(&mut self) -> Result<Expr, ParseError> {
        self.scan_identifier().map(Expr::identifier)
    }

    pub(super) fn scan_identifier(&mut self) -> Result<String, ParseError> {
        let start = self.index;

        match self.current() {
            Some(ch) if self.engine.is_identifier_start(ch) => self.advance(1),
            Some(ch) => return Err(self.error(format!("Unexpected {ch}"))),
            None => return Err(self.error("Unexpected end of input")),
        }

        while self
            .current()
            .is_some_and(|ch| self.engine.is_identifier_part(ch))
        {
            self.index += 1;
        }

        Ok(self.slice(start, self.index))
    }
}
