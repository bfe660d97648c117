//! State error types.

use thiserror::Error;

/// Errors raised while parsing state or actions from untrusted text.
///
/// Transitions themselves never fail; only decoding does.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// Size is not one of the offered sizes.
    #[error("Unknown size: {0}")]
    UnknownSize(String),

    /// Quantity is not an integer of at least 1.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),

    /// Accordion section id not recognized.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// View mode not recognized.
    #[error("Unknown view mode: {0}")]
    UnknownViewMode(String),

    /// Review filter not recognized.
    #[error("Unknown review filter: {0}")]
    UnknownFilter(String),

    /// Trust journey filter not recognized.
    #[error("Unknown trust filter: {0}")]
    UnknownTrustFilter(String),

    /// Insight card id not recognized.
    #[error("Unknown insight: {0}")]
    UnknownInsight(String),

    /// Boolean flag with a value other than 1/0/true/false/on/off.
    #[error("Invalid value for {field}: {value}")]
    InvalidFlag { field: String, value: String },

    /// Action text not recognized.
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl StateError {
    /// The query-string key this error relates to.
    pub fn field(&self) -> &str {
        match self {
            StateError::UnknownSize(_) => "size",
            StateError::InvalidQuantity(_) => "qty",
            StateError::UnknownSection(_) => "open",
            StateError::UnknownViewMode(_) => "view",
            StateError::UnknownFilter(_) => "filter",
            StateError::UnknownTrustFilter(_) => "trust",
            StateError::UnknownInsight(_) => "card",
            StateError::InvalidFlag { field, .. } => field,
            StateError::UnknownAction(_) => "action",
        }
    }
}
