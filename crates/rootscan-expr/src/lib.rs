//! # Rootscan Expr
//!
//! Single-variable expressions for the Rootscan solvers, backed by
//! [symbolica](https://symbolica.io).
//!
//! Equation text such as `x**3 - 2*x - 5` is normalized into symbolica's
//! syntax, parsed into an [`Atom`](symbolica::atom::Atom), differentiated
//! with respect to `x` and evaluated with `f64` arithmetic:
//!
//! - [`compile`]: parse text into an [`Expression`]
//! - [`derivative`]: parse text and return its symbolic derivative
//! - [`Expression::eval`]: evaluate at a point
//!
//! Evaluation never fails. Domain errors such as `log(-1)` come back as NaN
//! or infinity, which the solvers treat as a domain error.
//!
//! ```rust
//! use rootscan_expr::compile;
//!
//! let f = compile("x^2 - 4").unwrap();
//! assert_eq!(f.eval(3.0), 5.0);
//! assert_eq!(f.derivative().eval(3.0), 6.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::return_self_not_must_use)]

pub mod catalog;
pub mod error;
pub mod functions;
mod normalize;

use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use symbolica::atom::{Atom, AtomCore, Symbol};
use symbolica::state::State;

pub use error::{ExprError, ExprResult};
pub use functions::{Constant, Func, FuncCategory};

use normalize::{normalize, VARIABLE};

/// Symbols shared by every expression.
struct Symbols {
    x: Symbol,
    pi: Symbol,
    e: Symbol,
}

fn symbols() -> &'static Symbols {
    static SYMBOLS: OnceLock<Symbols> = OnceLock::new();
    SYMBOLS.get_or_init(|| Symbols {
        x: State::get_symbol(VARIABLE),
        pi: State::get_symbol(Constant::Pi.name()),
        e: State::get_symbol(Constant::E.name()),
    })
}

/// A parsed expression together with the text it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    atom: Atom,
}

impl Expression {
    /// The text this expression was compiled from.
    ///
    /// For derivatives this is symbolica's printing of the derived atom.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The symbolic form.
    pub fn atom(&self) -> &Atom {
        &self.atom
    }

    /// Evaluates at `x`.
    pub fn eval(&self, x: f64) -> f64 {
        self.try_eval(x).unwrap_or(f64::NAN)
    }

    fn try_eval(&self, x: f64) -> Result<f64, String> {
        let symbols = symbols();
        let const_map = [
            (Atom::new_var(symbols.x), x),
            (Atom::new_var(symbols.pi), Constant::Pi.value()),
            (Atom::new_var(symbols.e), Constant::E.value()),
        ]
        .into_iter()
        .collect();

        self.atom
            .evaluate(|r| r.into(), &const_map, &Default::default())
            .map_err(|err| err.to_string())
    }

    /// Symbolic derivative with respect to `x`.
    pub fn derivative(&self) -> Expression {
        let atom = self.atom.derivative(symbols().x);
        Expression {
            source: atom.to_string(),
            atom,
        }
    }

    /// Borrows the expression as a plain function.
    pub fn as_fn(&self) -> impl Fn(f64) -> f64 + Sync + '_ {
        move |x| self.eval(x)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.atom)
    }
}

impl FromStr for Expression {
    type Err = ExprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        compile(s)
    }
}

/// Parses `text` into an evaluable expression.
pub fn compile(text: &str) -> ExprResult<Expression> {
    let normalized = normalize(text)?;
    let atom = Atom::parse(&normalized).map_err(|err| ExprError::Syntax {
        message: err.to_string(),
    })?;

    let expression = Expression {
        source: text.trim().to_string(),
        atom,
    };
    // symbols all resolve, so this only fails on constructs the evaluator lacks
    expression
        .try_eval(1.0)
        .map_err(|message| ExprError::Evaluation { message })?;
    Ok(expression)
}

/// Parses `text` and returns its derivative with respect to `x`.
pub fn derivative(text: &str) -> ExprResult<Expression> {
    Ok(compile(text)?.derivative())
}
