//! Page chrome: notification bar, header, breadcrumb and footer content.

use serde::Serialize;

pub const BRAND: &str = "Are-zōu";
pub const BRAND_BYLINE: &str = "By Ishita Saxena";

pub const NOTIFICATION: &str = "Free Shipping on orders above ₹999 • Use code GLOW15 for 15% off";

/// One breadcrumb entry. The last entry has no link.
#[derive(Debug, Clone, Serialize)]
pub struct Crumb {
    pub label: &'static str,
    pub href: Option<&'static str>,
}

pub static BREADCRUMB: &[Crumb] = &[
    Crumb {
        label: "Home",
        href: Some("/"),
    },
    Crumb {
        label: "Face Oils",
        href: Some("/face-oils"),
    },
    Crumb {
        label: "Radiance & Glow Face Oil",
        href: None,
    },
];

#[derive(Debug, Clone, Serialize)]
pub struct FooterColumn {
    pub heading: &'static str,
    pub links: &'static [&'static str],
}

pub static FOOTER_COLUMNS: &[FooterColumn] = &[
    FooterColumn {
        heading: "Shop",
        links: &["Face Oils", "Serums", "Moisturizers", "Gift Sets"],
    },
    FooterColumn {
        heading: "Help",
        links: &["Privacy Policy", "Refund Policy", "Terms & Conditions", "FAQs"],
    },
    FooterColumn {
        heading: "About",
        links: &["Our Story", "Ingredients", "Sustainability"],
    },
];

pub const FOOTER_ABOUT_HEADING: &str = "About Arezou Skincare";
pub const FOOTER_ABOUT: &str =
    "Handcrafted botanical skincare, made with love in small batches using natural ingredients.";
pub const CONTACT_PHONE: &str = "+91 98765 43210";
pub const CONTACT_EMAIL: &str = "hello@arezou.com";
pub const COPYRIGHT: &str = "© 2026 Arezou by Ishita Saxena. All rights reserved.";
