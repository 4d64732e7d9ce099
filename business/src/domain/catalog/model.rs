use std::collections::BTreeMap;

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use super::errors::CatalogError;

/// A catalog entry. Catalog data is immutable and defined statically by the
/// catalog adapter; products are never created or destroyed at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub price: BigDecimal,
    pub original_price: Option<BigDecimal>,
    pub category: ProductCategory,
    pub rating: f32,
    pub review_count: u32,
    pub in_stock: bool,
    pub is_on_sale: bool,
    pub features: Vec<String>,
    pub specifications: BTreeMap<String, String>,
}

impl Product {
    /// Case-insensitive match over name and description, mirroring the shop
    /// search box.
    pub fn matches_term(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductCategory {
    Organic,
    Plastic,
    Paper,
    Glass,
    Textile,
    Mixed,
}

impl std::fmt::Display for ProductCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductCategory::Organic => write!(f, "organic"),
            ProductCategory::Plastic => write!(f, "plastic"),
            ProductCategory::Paper => write!(f, "paper"),
            ProductCategory::Glass => write!(f, "glass"),
            ProductCategory::Textile => write!(f, "textile"),
            ProductCategory::Mixed => write!(f, "mixed"),
        }
    }
}

impl std::str::FromStr for ProductCategory {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "organic" => Ok(ProductCategory::Organic),
            "plastic" => Ok(ProductCategory::Plastic),
            "paper" => Ok(ProductCategory::Paper),
            "glass" => Ok(ProductCategory::Glass),
            "textile" => Ok(ProductCategory::Textile),
            "mixed" => Ok(ProductCategory::Mixed),
            _ => Err(CatalogError::UnknownCategory),
        }
    }
}
