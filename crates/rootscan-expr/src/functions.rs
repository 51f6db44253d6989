//! Function and constant vocabulary accepted in equations.
//!
//! Symbolica differentiates and evaluates `exp`, `log`, `sin` and `cos`
//! natively. Every other function is rewritten in terms of those (and
//! powers) before the text reaches the parser.

use std::f64::consts;

/// Functions of one argument, plus nothing else: `pow(a, b)` is handled as
/// an operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Func {
    /// Sine.
    Sin,
    /// Cosine.
    Cos,
    /// Tangent.
    Tan,
    /// Secant, `1 / cos`.
    Sec,
    /// Cosecant, `1 / sin`.
    Csc,
    /// Cotangent, `cos / sin`.
    Cot,
    /// Hyperbolic sine.
    Sinh,
    /// Hyperbolic cosine.
    Cosh,
    /// Hyperbolic tangent.
    Tanh,
    /// Inverse hyperbolic sine.
    Asinh,
    /// Inverse hyperbolic cosine.
    Acosh,
    /// Inverse hyperbolic tangent.
    Atanh,
    /// Natural exponential.
    Exp,
    /// Natural logarithm (`log` and `ln`).
    Ln,
    /// Base-10 logarithm.
    Log10,
    /// Base-2 logarithm.
    Log2,
    /// Square root.
    Sqrt,
    /// Absolute value, as `sqrt(u^2)`.
    Abs,
    /// Sign, as `u / sqrt(u^2)`. Undefined at zero.
    Sign,
}

/// Grouping used by the function catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FuncCategory {
    /// `abs`, `sqrt`, `sign`.
    Basic,
    /// Circular and hyperbolic functions.
    Trigonometric,
    /// `exp` and the logarithms.
    ExponentialLogarithmic,
}

impl Func {
    /// Every supported function, in catalog order.
    pub const ALL: [Func; 19] = [
        Func::Abs,
        Func::Sqrt,
        Func::Sign,
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Sec,
        Func::Csc,
        Func::Cot,
        Func::Sinh,
        Func::Cosh,
        Func::Tanh,
        Func::Asinh,
        Func::Acosh,
        Func::Atanh,
        Func::Exp,
        Func::Ln,
        Func::Log10,
        Func::Log2,
    ];

    /// Catalog name.
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Sec => "sec",
            Func::Csc => "csc",
            Func::Cot => "cot",
            Func::Sinh => "sinh",
            Func::Cosh => "cosh",
            Func::Tanh => "tanh",
            Func::Asinh => "asinh",
            Func::Acosh => "acosh",
            Func::Atanh => "atanh",
            Func::Exp => "exp",
            Func::Ln => "log",
            Func::Log10 => "log10",
            Func::Log2 => "log2",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
            Func::Sign => "sign",
        }
    }

    /// Looks a function up by any accepted spelling.
    pub fn from_name(name: &str) -> Option<Func> {
        let func = match name {
            "sin" => Func::Sin,
            "cos" => Func::Cos,
            "tan" => Func::Tan,
            "sec" => Func::Sec,
            "csc" => Func::Csc,
            "cot" => Func::Cot,
            "sinh" => Func::Sinh,
            "cosh" => Func::Cosh,
            "tanh" => Func::Tanh,
            "asinh" | "arcsinh" => Func::Asinh,
            "acosh" | "arccosh" => Func::Acosh,
            "atanh" | "arctanh" => Func::Atanh,
            "exp" => Func::Exp,
            "log" | "ln" => Func::Ln,
            "log10" => Func::Log10,
            "log2" => Func::Log2,
            "sqrt" => Func::Sqrt,
            "abs" | "Abs" => Func::Abs,
            "sign" => Func::Sign,
            _ => return None,
        };
        Some(func)
    }

    /// Catalog grouping.
    pub fn category(self) -> FuncCategory {
        match self {
            Func::Abs | Func::Sqrt | Func::Sign => FuncCategory::Basic,
            Func::Exp | Func::Ln | Func::Log10 | Func::Log2 => FuncCategory::ExponentialLogarithmic,
            _ => FuncCategory::Trigonometric,
        }
    }

    /// Spells `self(u)` with the parser's built-ins. `u` must already be
    /// parenthesised.
    pub(crate) fn rewrite(self, u: &str) -> String {
        match self {
            Func::Sin => format!("sin{u}"),
            Func::Cos => format!("cos{u}"),
            Func::Exp => format!("exp{u}"),
            Func::Ln => format!("log{u}"),
            Func::Tan => format!("(sin{u}/cos{u})"),
            Func::Sec => format!("(1/cos{u})"),
            Func::Csc => format!("(1/sin{u})"),
            Func::Cot => format!("(cos{u}/sin{u})"),
            Func::Sinh => format!("((exp{u}-exp(-{u}))/2)"),
            Func::Cosh => format!("((exp{u}+exp(-{u}))/2)"),
            Func::Tanh => format!("((exp(2*{u})-1)/(exp(2*{u})+1))"),
            Func::Asinh => format!("log({u}+({u}^2+1)^(1/2))"),
            Func::Acosh => format!("log({u}+({u}^2-1)^(1/2))"),
            Func::Atanh => format!("(log((1+{u})/(1-{u}))/2)"),
            Func::Log10 => format!("(log{u}/log(10))"),
            Func::Log2 => format!("(log{u}/log(2))"),
            Func::Sqrt => format!("({u}^(1/2))"),
            Func::Abs => format!("(({u}^2)^(1/2))"),
            Func::Sign => format!("({u}/({u}^2)^(1/2))"),
        }
    }
}

/// Named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    /// π
    Pi,
    /// Euler's number.
    E,
}

impl Constant {
    /// Numeric value.
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
            Constant::E => consts::E,
        }
    }

    /// Name used in equations and in printed derivatives.
    pub fn name(self) -> &'static str {
        match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        }
    }

    /// Looks a constant up by any accepted spelling.
    pub fn from_name(name: &str) -> Option<Constant> {
        match name {
            "pi" | "PI" => Some(Constant::Pi),
            "e" | "E" => Some(Constant::E),
            _ => None,
        }
    }
}
