//! Rewrites equation text into the syntax symbolica parses.
//!
//! - `**` becomes `^`.
//! - Decimal literals become exact rationals (`0.25` → `(25/10^2)`).
//! - Functions symbolica does not know are expanded via [`Func::rewrite`].
//! - `pow(a, b)` becomes `((a)^(b))`.
//!
//! Anything that is not an identifier, number, operator or parenthesis is
//! rejected here with a position. Operator placement is left to symbolica.

use crate::error::{ExprError, ExprResult};
use crate::functions::{Constant, Func};

/// The variable every equation is written in.
pub(crate) const VARIABLE: &str = "x";

/// Normalizes `input`, or explains the first problem found.
pub(crate) fn normalize(input: &str) -> ExprResult<String> {
    if input.trim().is_empty() {
        return Err(ExprError::Empty);
    }
    let mut normalizer = Normalizer {
        chars: input.char_indices().collect(),
        len: input.len(),
        pos: 0,
    };
    let out = normalizer.sequence(None)?;
    match normalizer.peek() {
        Some((position, ch)) => Err(ExprError::UnexpectedChar { ch, position }),
        None => Ok(out),
    }
}

struct Normalizer {
    chars: Vec<(usize, char)>,
    len: usize,
    pos: usize,
}

impl Normalizer {
    fn peek(&self) -> Option<(usize, char)> {
        self.chars.get(self.pos).copied()
    }

    fn peek_char(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).map(|&(_, c)| c)
    }

    fn offset(&self) -> usize {
        self.peek().map_or(self.len, |(offset, _)| offset)
    }

    /// Copies tokens until the input ends or, inside a call opened at
    /// `call`, until a top-level `,` or `)` (left unconsumed).
    fn sequence(&mut self, call: Option<usize>) -> ExprResult<String> {
        let mut out = String::new();
        let mut open = Vec::new();

        while let Some((offset, ch)) = self.peek() {
            match ch {
                c if c.is_whitespace() => {
                    if !out.ends_with(' ') {
                        out.push(' ');
                    }
                    self.pos += 1;
                }
                c if c.is_ascii_digit() || c == '.' => out.push_str(&self.number()?),
                c if c.is_ascii_alphabetic() || c == '_' => out.push_str(&self.identifier()?),
                '*' if self.peek_char(1) == Some('*') => {
                    out.push('^');
                    self.pos += 2;
                }
                '+' | '-' | '*' | '/' | '^' => {
                    out.push(ch);
                    self.pos += 1;
                }
                '(' => {
                    open.push(offset);
                    out.push('(');
                    self.pos += 1;
                }
                ')' if open.is_empty() => {
                    if call.is_some() {
                        return Ok(out);
                    }
                    return Err(ExprError::UnmatchedParen { position: offset });
                }
                ')' => {
                    open.pop();
                    out.push(')');
                    self.pos += 1;
                }
                ',' if open.is_empty() && call.is_some() => return Ok(out),
                _ => return Err(ExprError::UnexpectedChar { ch, position: offset }),
            }
        }

        if let Some(position) = open.pop().or(call) {
            return Err(ExprError::UnclosedParen { position });
        }
        Ok(out)
    }

    fn number(&mut self) -> ExprResult<String> {
        let start = self.pos;
        let position = self.offset();
        let mut digits = String::new();
        let mut fraction_len: i64 = 0;
        let mut seen_dot = false;

        while let Some((_, c)) = self.peek() {
            match c {
                '0'..='9' => {
                    digits.push(c);
                    if seen_dot {
                        fraction_len += 1;
                    }
                }
                '.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            self.pos += 1;
        }

        // `2e3`, `1.5E-4`; a bare `2e` is `2` followed by the constant
        let mut exponent: i64 = 0;
        if matches!(self.peek_char(0), Some('e' | 'E')) {
            let sign_len = usize::from(matches!(self.peek_char(1), Some('+' | '-')));
            if self.peek_char(1 + sign_len).is_some_and(|c| c.is_ascii_digit()) {
                let negative = self.peek_char(1) == Some('-');
                self.pos += 1 + sign_len;
                let mut exp_digits = String::new();
                while let Some(c) = self.peek_char(0).filter(char::is_ascii_digit) {
                    exp_digits.push(c);
                    self.pos += 1;
                }
                exponent = exp_digits.parse().map_err(|_| self.invalid_number(start, position))?;
                if negative {
                    exponent = -exponent;
                }
            }
        }

        if self.peek_char(0) == Some('.') {
            while self.peek_char(0).is_some_and(|c| c.is_ascii_digit() || c == '.') {
                self.pos += 1;
            }
            return Err(self.invalid_number(start, position));
        }
        if digits.is_empty() {
            return Err(self.invalid_number(start, position));
        }

        let numerator = match digits.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };
        let scale = fraction_len - exponent;
        Ok(match scale {
            0 => numerator.to_string(),
            s if s > 0 => format!("({numerator}/10^{s})"),
            s => format!("({numerator}*10^{})", -s),
        })
    }

    fn invalid_number(&self, start: usize, position: usize) -> ExprError {
        ExprError::InvalidNumber {
            literal: self.chars[start..self.pos].iter().map(|&(_, c)| c).collect(),
            position,
        }
    }

    fn identifier(&mut self) -> ExprResult<String> {
        let position = self.offset();
        let mut name = String::new();
        while let Some(c) = self
            .peek_char(0)
            .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        {
            name.push(c);
            self.pos += 1;
        }

        if name == VARIABLE {
            return Ok(name);
        }
        if let Some(constant) = Constant::from_name(&name) {
            return Ok(constant.name().to_string());
        }

        let func = Func::from_name(&name);
        if func.is_none() && name != "pow" {
            return Err(ExprError::UnknownIdentifier { name, position });
        }

        while self.peek_char(0).is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
        if self.peek_char(0) != Some('(') {
            return Err(ExprError::MissingArguments { name, position });
        }
        let args = self.arguments()?;
        let expected = if func.is_some() { 1 } else { 2 };
        if args.iter().any(String::is_empty) {
            return Err(ExprError::ArgumentCount {
                actual: args.iter().filter(|a| !a.is_empty()).count(),
                expected,
                name,
            });
        }

        match (func, args.as_slice()) {
            (Some(func), [u]) => Ok(func.rewrite(&format!("({u})"))),
            (None, [base, exponent]) => Ok(format!("(({base})^({exponent}))")),
            _ => Err(ExprError::ArgumentCount {
                actual: args.len(),
                expected,
                name,
            }),
        }
    }

    /// Reads `( arg, ... )`, normalizing each argument. Blank arguments
    /// come back empty; `()` gives no arguments at all.
    fn arguments(&mut self) -> ExprResult<Vec<String>> {
        let open = self.offset();
        self.pos += 1;

        let mut args = Vec::new();
        loop {
            let arg = self.sequence(Some(open))?.trim().to_string();
            let closing = self.peek_char(0) == Some(')');
            self.pos += 1;
            if !(closing && args.is_empty() && arg.is_empty()) {
                args.push(arg);
            }
            if closing {
                return Ok(args);
            }
        }
    }
}
