//! Catalog DTOs.

use rootscan_expr::catalog::{functions_in, CONSTANTS, EXAMPLES};
use rootscan_expr::FuncCategory;
use serde::{Deserialize, Serialize};

/// Functions, constants and example equations the services accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub basic: Vec<String>,
    pub trigonometric: Vec<String>,
    pub exponential_logarithmic: Vec<String>,
    pub constants: Vec<String>,
    pub examples: Vec<String>,
}

impl CatalogResponse {
    /// Builds the catalog from the expression crate's listing.
    pub fn build() -> Self {
        let names = |category: FuncCategory| -> Vec<String> {
            functions_in(category)
                .into_iter()
                .map(str::to_string)
                .collect()
        };
        Self {
            basic: names(FuncCategory::Basic),
            trigonometric: names(FuncCategory::Trigonometric),
            exponential_logarithmic: names(FuncCategory::ExponentialLogarithmic),
            constants: CONSTANTS.iter().map(|c| c.name().to_string()).collect(),
            examples: EXAMPLES.iter().map(ToString::to_string).collect(),
        }
    }
}
