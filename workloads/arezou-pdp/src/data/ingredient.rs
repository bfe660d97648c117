//! Ingredient spotlight content.

use serde::Serialize;

/// How an ingredient is sourced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum IngredientKind {
    ColdPressed,
    Essential,
}

impl IngredientKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            IngredientKind::ColdPressed => "cold-pressed",
            IngredientKind::Essential => "essential",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            IngredientKind::ColdPressed => "Cold Pressed Oil",
            IngredientKind::Essential => "Essential Oil",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Ingredient {
    pub name: &'static str,
    pub benefit: &'static str,
    pub kind: IngredientKind,
}

/// Testimonial under the ingredient grid.
#[derive(Debug, Clone, Serialize)]
pub struct Whisper {
    pub quote: &'static str,
    pub author: &'static str,
    pub rating: f32,
    pub skin_type: &'static str,
}

pub static INGREDIENTS: &[Ingredient] = &[
    Ingredient {
        name: "Rosehip Oil",
        benefit: "Rich in vitamins A & C for cell renewal",
        kind: IngredientKind::ColdPressed,
    },
    Ingredient {
        name: "Bergamot Essential Oil",
        benefit: "Brightens and balances complexion",
        kind: IngredientKind::Essential,
    },
    Ingredient {
        name: "Lavender",
        benefit: "Soothes and promotes healing",
        kind: IngredientKind::Essential,
    },
    Ingredient {
        name: "Jojoba Oil",
        benefit: "Mimics skin's natural sebum",
        kind: IngredientKind::ColdPressed,
    },
    Ingredient {
        name: "Vitamin E",
        benefit: "Powerful antioxidant protection",
        kind: IngredientKind::ColdPressed,
    },
    Ingredient {
        name: "Geranium",
        benefit: "Tones and tightens skin",
        kind: IngredientKind::Essential,
    },
];

pub static INGREDIENT_NOTE: &str = "Being a natural and handmade product, slight variations in \
                                    color may occur between batches. This does not affect the \
                                    product's efficacy.";

pub static INGREDIENT_WHISPER: Whisper = Whisper {
    quote: "The bergamot scent is divine and my skin has never looked this healthy. You can \
            really feel the quality of the oils.",
    author: "Ananya S.",
    rating: 5.0,
    skin_type: "Combination",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_kinds_present() {
        let pressed = INGREDIENTS
            .iter()
            .filter(|i| i.kind == IngredientKind::ColdPressed)
            .count();
        assert_eq!(pressed, 3);
        assert_eq!(INGREDIENTS.len() - pressed, 3);
    }
}
