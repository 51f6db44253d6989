//! Listing of what expressions may contain.

use crate::functions::{Constant, Func, FuncCategory};

/// Constants accepted in expressions.
pub const CONSTANTS: [Constant; 2] = [Constant::Pi, Constant::E];

/// Example equations that exercise the supported syntax.
pub const EXAMPLES: [&str; 7] = [
    "x**2 - 4",
    "sin(x) - 0.5",
    "exp(x) - 2",
    "log(x) - 1",
    "x**3 - 2*x - 5",
    "cos(x) - x",
    "tan(x) - x",
];

/// Names of the supported functions in `category`, in catalog order.
pub fn functions_in(category: FuncCategory) -> Vec<&'static str> {
    let mut names: Vec<&'static str> = Func::ALL
        .iter()
        .filter(|f| f.category() == category)
        .map(|f| f.name())
        .collect();
    if category == FuncCategory::Basic {
        names.push("pow");
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compile;

    #[test]
    fn test_examples_compile() {
        for example in EXAMPLES {
            assert!(compile(example).is_ok(), "{example}");
        }
    }

    #[test]
    fn test_categories_partition_functions() {
        let total: usize = [
            FuncCategory::Basic,
            FuncCategory::Trigonometric,
            FuncCategory::ExponentialLogarithmic,
        ]
        .into_iter()
        .map(|c| functions_in(c).len())
        .sum();
        // `pow` is listed but is not a `Func`
        assert_eq!(total, Func::ALL.len() + 1);
        assert!(functions_in(FuncCategory::ExponentialLogarithmic).contains(&"log10"));
    }
}
