use std::collections::BTreeMap;

use poem_openapi::Object;

use business::domain::catalog::model::Product;

use crate::api::money::format_amount;

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Catalog identifier
    pub id: u32,
    /// Product name
    pub name: String,
    /// One-line description for listings
    pub short_description: String,
    /// Full description for the product page
    pub description: String,
    /// Current price, rounded to cents
    pub price: String,
    /// Pre-sale price, when the product is discounted
    #[oai(skip_serializing_if_is_none)]
    pub original_price: Option<String>,
    /// Product category
    pub category: String,
    /// Average review rating (0-5)
    pub rating: f32,
    /// Number of reviews
    pub review_count: u32,
    /// Whether the product can currently be added to a cart
    pub in_stock: bool,
    /// Whether the product is discounted
    pub is_on_sale: bool,
    /// Marketing feature bullets
    pub features: Vec<String>,
    /// Technical specifications
    pub specifications: BTreeMap<String, String>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            short_description: product.short_description,
            description: product.description,
            price: format_amount(&product.price),
            original_price: product.original_price.as_ref().map(format_amount),
            category: product.category.to_string(),
            rating: product.rating,
            review_count: product.review_count,
            in_stock: product.in_stock,
            is_on_sale: product.is_on_sale,
            features: product.features,
            specifications: product.specifications,
        }
    }
}
