//! Product data.

use arezou_sdk::arezou_state::{AccordionSection, Choice, SizeOption};
use serde::Serialize;

/// The product shown on the page.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub slug: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub badge: &'static str,
    /// Price in whole rupees.
    pub price: u32,
    pub original_price: u32,
    pub image: &'static str,
    pub image_alt: &'static str,
    pub rating: f32,
    pub review_count: u32,
    pub happy_customers: &'static str,
    pub sizes: &'static [SizeOption],
    pub sections: &'static [DetailSection],
    pub trust_badges: &'static [&'static str],
    pub payment_methods: &'static [&'static str],
}

/// Text shown under an accordion header.
#[derive(Debug, Clone, Serialize)]
pub struct DetailSection {
    pub id: AccordionSection,
    /// One entry per line.
    pub lines: &'static [&'static str],
}

impl DetailSection {
    pub fn title(&self) -> &'static str {
        self.id.label()
    }
}

impl Product {
    /// Percentage saved against the original price, rounded down.
    pub fn discount_percent(&self) -> u32 {
        if self.original_price <= self.price || self.original_price == 0 {
            return 0;
        }
        (self.original_price - self.price) * 100 / self.original_price
    }

    pub fn section(&self, id: AccordionSection) -> Option<&DetailSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}

/// Format whole rupees with Indian digit grouping, e.g. `₹1,299`.
pub fn format_rupees(amount: u32) -> String {
    let digits = amount.to_string();
    if digits.len() <= 3 {
        return format!("₹{}", digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("₹{},{}", groups.join(","), tail)
}

pub static PRODUCT: Product = Product {
    slug: "radiance-glow-face-oil",
    name: "Radiance & Glow Face Oil",
    tagline: "with Bergamot | Brightens, Hydrates & Glow | All Skin Types",
    badge: "Are-zōu Exclusive",
    price: 1299,
    original_price: 1599,
    image: "/static/arezou-product.png",
    image_alt: "Are-zōu Radiance & Glow Face Oil",
    rating: 4.9,
    review_count: 198,
    happy_customers: "2,500+",
    sizes: SizeOption::ALL,
    sections: &[
        DetailSection {
            id: AccordionSection::Features,
            lines: &[
                "100% Natural Botanical Extracts",
                "Cold-pressed Bergamot Oil",
                "Vitamin E & Rosehip Seed Oil",
                "Suitable for All Skin Types",
                "Paraben & Sulfate Free",
            ],
        },
        DetailSection {
            id: AccordionSection::Ingredients,
            lines: &["Prunus Armeniaca (Apricot) Kernel Oil, Rosa Canina (Rosehip) Seed Oil, \
                Simmondsia Chinensis (Jojoba) Seed Oil, Citrus Aurantium Bergamia (Bergamot) \
                Fruit Oil, Tocopherol (Vitamin E), Rosa Damascena (Rose) Flower Oil"],
        },
        DetailSection {
            id: AccordionSection::Shipping,
            lines: &["Free shipping on orders above ₹999. Standard delivery: 5-7 business days. \
                Express delivery available at checkout."],
        },
        DetailSection {
            id: AccordionSection::Returns,
            lines: &["7-day easy returns. If you're not satisfied with your purchase, return it \
                within 7 days for a full refund."],
        },
        DetailSection {
            id: AccordionSection::Description,
            lines: &["Radiance & Glow Face Oil is a luxurious blend of botanical oils designed to \
                nourish, hydrate, and illuminate your skin. Infused with bergamot and rose \
                essential oils, this face oil conjures sensorial moments of smell, touch, and \
                sight. Perfect for your daily skincare ritual."],
        },
    ],
    trust_badges: &["100% Authentic", "Free Shipping", "7-Day Returns"],
    payment_methods: &["Visa", "Mastercard", "American Express", "RuPay", "UPI"],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(999), "₹999");
        assert_eq!(format_rupees(1299), "₹1,299");
        assert_eq!(format_rupees(125000), "₹1,25,000");
        assert_eq!(format_rupees(12345678), "₹1,23,45,678");
    }

    #[test]
    fn test_discount() {
        assert_eq!(PRODUCT.discount_percent(), 18);
    }

    #[test]
    fn test_every_section_has_text() {
        for id in AccordionSection::ALL {
            let section = PRODUCT.section(*id).unwrap();
            assert!(!section.lines.is_empty());
        }
    }

    #[test]
    fn test_sizes_are_offered_options() {
        assert_eq!(PRODUCT.sizes, SizeOption::ALL);
    }
}
