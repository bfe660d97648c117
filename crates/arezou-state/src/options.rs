//! Product option state: size, quantity, wishlist and the detail accordion.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::disclosure::Disclosure;
use crate::error::StateError;

/// Bottle sizes offered for the product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SizeOption {
    #[default]
    #[serde(rename = "30ml")]
    Ml30,
    #[serde(rename = "50ml")]
    Ml50,
}

impl Choice for SizeOption {
    const ALL: &'static [Self] = &[SizeOption::Ml30, SizeOption::Ml50];

    fn as_str(&self) -> &'static str {
        match self {
            SizeOption::Ml30 => "30ml",
            SizeOption::Ml50 => "50ml",
        }
    }

    fn label(&self) -> &'static str {
        self.as_str()
    }
}

impl FromStr for SizeOption {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StateError::UnknownSize(s.to_string()))
    }
}

/// Quantity to add to the cart. Never below 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(u32);

impl Quantity {
    pub const MIN: Quantity = Quantity(1);

    /// Create a quantity, clamping anything below 1 up to 1.
    pub fn new(value: u32) -> Self {
        Self(value.max(1))
    }

    pub fn get(&self) -> u32 {
        self.0
    }

    /// Add one.
    pub fn increment(&mut self) {
        self.0 = self.0.saturating_add(1);
    }

    /// Remove one, stopping at 1.
    pub fn decrement(&mut self) {
        self.0 = self.0.saturating_sub(1).max(1);
    }
}

impl Default for Quantity {
    fn default() -> Self {
        Self::MIN
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Quantity {
    type Err = StateError;

    /// Strict parse: the text must be an integer of at least 1.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Ok(Self(n)),
            _ => Err(StateError::InvalidQuantity(s.to_string())),
        }
    }
}

/// Collapsible detail sections under the product options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AccordionSection {
    Features,
    Ingredients,
    Shipping,
    Returns,
    Description,
}

impl Choice for AccordionSection {
    const ALL: &'static [Self] = &[
        AccordionSection::Features,
        AccordionSection::Ingredients,
        AccordionSection::Shipping,
        AccordionSection::Returns,
        AccordionSection::Description,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            AccordionSection::Features => "features",
            AccordionSection::Ingredients => "ingredients",
            AccordionSection::Shipping => "shipping",
            AccordionSection::Returns => "returns",
            AccordionSection::Description => "description",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            AccordionSection::Features => "Key Features",
            AccordionSection::Ingredients => "Full Ingredients",
            AccordionSection::Shipping => "Shipping Policy",
            AccordionSection::Returns => "Return & Exchange Policy",
            AccordionSection::Description => "Description",
        }
    }
}

impl FromStr for AccordionSection {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StateError::UnknownSection(s.to_string()))
    }
}

/// Option state of the product details column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductOptions {
    pub size: SizeOption,
    pub quantity: Quantity,
    pub sections: Disclosure<AccordionSection>,
    pub wishlisted: bool,
}

impl ProductOptions {
    /// Section expanded when the page first loads.
    pub const INITIAL_SECTION: AccordionSection = AccordionSection::Features;

    pub fn select_size(&mut self, size: SizeOption) {
        self.size = size;
    }

    pub fn toggle_section(&mut self, section: AccordionSection) {
        self.sections.toggle(section);
    }

    pub fn toggle_wishlist(&mut self) {
        self.wishlisted = !self.wishlisted;
    }
}

impl Default for ProductOptions {
    fn default() -> Self {
        Self {
            size: SizeOption::default(),
            quantity: Quantity::default(),
            sections: Disclosure::new(Some(Self::INITIAL_SECTION)),
            wishlisted: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_every_size() {
        let mut options = ProductOptions::default();
        for size in SizeOption::ALL {
            options.select_size(*size);
            assert_eq!(options.size, *size);
        }
    }

    #[test]
    fn test_quantity_clamps_at_one() {
        let mut qty = Quantity::default();
        qty.decrement();
        qty.decrement();
        qty.decrement();
        assert_eq!(qty.get(), 1);

        qty.increment();
        qty.increment();
        assert_eq!(qty.get(), 3);

        assert_eq!(Quantity::new(0), Quantity::MIN);
    }

    #[test]
    fn test_quantity_saturates() {
        let mut qty = Quantity::new(u32::MAX);
        qty.increment();
        assert_eq!(qty.get(), u32::MAX);
    }

    #[test]
    fn test_quantity_parse_is_strict() {
        assert_eq!("4".parse::<Quantity>().unwrap().get(), 4);
        assert!("0".parse::<Quantity>().is_err());
        assert!("-2".parse::<Quantity>().is_err());
        assert!("two".parse::<Quantity>().is_err());
    }

    #[test]
    fn test_accordion_starts_on_features() {
        let mut options = ProductOptions::default();
        assert!(options.sections.is_expanded(AccordionSection::Features));

        options.toggle_section(AccordionSection::Features);
        assert_eq!(options.sections.expanded(), None);

        options.toggle_section(AccordionSection::Shipping);
        options.toggle_section(AccordionSection::Returns);
        assert!(options.sections.is_expanded(AccordionSection::Returns));
        assert!(!options.sections.is_expanded(AccordionSection::Shipping));
    }

    #[test]
    fn test_section_parse_accepts_slug_or_label() {
        assert_eq!(
            "ingredients".parse::<AccordionSection>().unwrap(),
            AccordionSection::Ingredients
        );
        assert_eq!(
            "Shipping Policy".parse::<AccordionSection>().unwrap(),
            AccordionSection::Shipping
        );
        assert!("warranty".parse::<AccordionSection>().is_err());
    }

    #[test]
    fn test_size_serializes_as_slug() {
        let json = serde_json::to_string(&SizeOption::Ml50).unwrap();
        assert_eq!(json, "\"50ml\"");
    }
}
