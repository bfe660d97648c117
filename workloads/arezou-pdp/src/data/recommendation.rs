//! "You May Also Like" products.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct RecommendedProduct {
    pub id: u32,
    pub name: &'static str,
    pub price: u32,
    pub original_price: u32,
    pub rating: f32,
    pub review_count: u32,
    pub image: &'static str,
    pub discount_percent: u8,
}

pub static RECOMMENDATIONS: &[RecommendedProduct] = &[
    RecommendedProduct {
        id: 1,
        name: "Vitamin C Serum | Brightening & Anti-aging | 30ml",
        price: 1099,
        original_price: 1399,
        rating: 4.8,
        review_count: 156,
        image: "/static/hero-product.jpg",
        discount_percent: 21,
    },
    RecommendedProduct {
        id: 2,
        name: "Rose Water Toner | Hydrating & Soothing | 100ml",
        price: 599,
        original_price: 799,
        rating: 4.7,
        review_count: 89,
        image: "/static/arezou-product.png",
        discount_percent: 25,
    },
    RecommendedProduct {
        id: 3,
        name: "Night Repair Cream | Rejuvenating | 50g",
        price: 1499,
        original_price: 1899,
        rating: 4.9,
        review_count: 203,
        image: "/static/hero-product.jpg",
        discount_percent: 21,
    },
];
