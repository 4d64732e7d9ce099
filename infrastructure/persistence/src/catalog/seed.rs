use std::collections::BTreeMap;

use bigdecimal::BigDecimal;

use business::domain::catalog::model::{Product, ProductCategory};

/// The storefront's static catalog. Products are fixed at build time; there
/// is no runtime catalog management.
pub fn products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            name: "Organic Compost".to_string(),
            short_description: "Premium organic compost for gardens".to_string(),
            description: "High-quality organic compost made from recycled organic waste. \
                          Perfect for gardens, lawns, and potted plants. Rich in nutrients \
                          and beneficial microorganisms."
                .to_string(),
            price: BigDecimal::from(25),
            original_price: Some(BigDecimal::from(35)),
            category: ProductCategory::Organic,
            rating: 4.8,
            review_count: 124,
            in_stock: true,
            is_on_sale: true,
            features: vec![
                "100% Organic".to_string(),
                "Rich in Nutrients".to_string(),
                "Eco-Friendly".to_string(),
                "Ready to Use".to_string(),
            ],
            specifications: BTreeMap::from([
                ("Weight".to_string(), "25 lbs".to_string()),
                ("Coverage".to_string(), "Up to 50 sq ft".to_string()),
                ("pH Level".to_string(), "6.5-7.0".to_string()),
                ("Moisture Content".to_string(), "40-50%".to_string()),
            ]),
        },
        Product {
            id: 2,
            name: "Recycled Plastic Planters".to_string(),
            short_description: "Durable planters from recycled plastic".to_string(),
            description: "Beautiful and durable planters made from 100% recycled plastic \
                          waste. Weather-resistant and perfect for both indoor and outdoor \
                          use."
                .to_string(),
            price: BigDecimal::from(35),
            original_price: None,
            category: ProductCategory::Plastic,
            rating: 4.6,
            review_count: 89,
            in_stock: true,
            is_on_sale: false,
            features: vec![
                "100% Recycled".to_string(),
                "Weather Resistant".to_string(),
                "Multiple Sizes".to_string(),
                "UV Protected".to_string(),
            ],
            specifications: BTreeMap::new(),
        },
        Product {
            id: 3,
            name: "Eco-Friendly Storage Boxes".to_string(),
            short_description: "Storage solutions from recycled materials".to_string(),
            description: "Versatile storage solutions crafted from recycled materials. \
                          Perfect for organizing your home while supporting sustainability."
                .to_string(),
            price: BigDecimal::from(45),
            original_price: None,
            category: ProductCategory::Mixed,
            rating: 4.7,
            review_count: 67,
            in_stock: false,
            is_on_sale: false,
            features: vec![
                "Recycled Materials".to_string(),
                "Stackable Design".to_string(),
                "Durable".to_string(),
                "Multiple Colors".to_string(),
            ],
            specifications: BTreeMap::new(),
        },
        Product {
            id: 4,
            name: "Recycled Paper Notebooks".to_string(),
            short_description: "High-quality notebooks from recycled paper".to_string(),
            description: "Premium notebooks made from 100% recycled paper waste. Perfect \
                          for students, professionals, and eco-conscious writers."
                .to_string(),
            price: BigDecimal::from(15),
            original_price: Some(BigDecimal::from(20)),
            category: ProductCategory::Paper,
            rating: 4.9,
            review_count: 203,
            in_stock: true,
            is_on_sale: true,
            features: vec![
                "100% Recycled Paper".to_string(),
                "Smooth Writing".to_string(),
                "Durable Binding".to_string(),
                "Various Sizes".to_string(),
            ],
            specifications: BTreeMap::new(),
        },
        Product {
            id: 5,
            name: "Recycled Glass Vases".to_string(),
            short_description: "Beautiful vases from recycled glass".to_string(),
            description: "Elegant vases handcrafted from recycled glass. Each piece is \
                          unique and adds a touch of sustainability to your home decor."
                .to_string(),
            price: BigDecimal::from(28),
            original_price: None,
            category: ProductCategory::Glass,
            rating: 4.5,
            review_count: 45,
            in_stock: true,
            is_on_sale: false,
            features: vec![
                "Handcrafted".to_string(),
                "Unique Design".to_string(),
                "Recycled Glass".to_string(),
                "Home Decor".to_string(),
            ],
            specifications: BTreeMap::new(),
        },
        Product {
            id: 6,
            name: "Eco Tote Bags".to_string(),
            short_description: "Reusable bags from recycled textiles".to_string(),
            description: "Stylish and durable tote bags made from recycled textile waste. \
                          Perfect for shopping, work, or everyday use."
                .to_string(),
            price: BigDecimal::from(18),
            original_price: Some(BigDecimal::from(25)),
            category: ProductCategory::Textile,
            rating: 4.7,
            review_count: 156,
            in_stock: true,
            is_on_sale: true,
            features: vec![
                "Recycled Textiles".to_string(),
                "Strong Handles".to_string(),
                "Machine Washable".to_string(),
                "Multiple Colors".to_string(),
            ],
            specifications: BTreeMap::new(),
        },
    ]
}
