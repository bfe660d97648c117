//! Query-string encoding of the page state.
//!
//! Only fields that differ from their defaults are written, in a fixed key
//! order, so equal states always produce equal URLs and the default state
//! is the bare page URL.

use std::str::FromStr;

use arezou_core::{parse_query, QueryParams};

use crate::choice::Choice;
use crate::error::StateError;
use crate::options::{ProductOptions, Quantity};
use crate::page::PageState;

/// Keys in the order `to_query` writes them.
pub const QUERY_KEYS: &[&str] = &[
    "size", "qty", "open", "wish", "zoom", "view", "all", "filter", "trust", "insights", "card",
];

/// Value of `open` for an accordion with nothing expanded.
const COLLAPSED: &str = "none";

/// Result of decoding a query string.
///
/// Decoding never fails as a whole: each malformed field falls back to its
/// default and is listed in `rejected`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct QueryDecode {
    pub state: PageState,
    pub rejected: Vec<StateError>,
}

impl QueryDecode {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}

impl PageState {
    /// Encode as a query string without the leading `?`.
    pub fn to_query(&self) -> String {
        let defaults = PageState::default();
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if self.options.size != defaults.options.size {
            pairs.push(("size", self.options.size.as_str().to_string()));
        }
        if self.options.quantity != defaults.options.quantity {
            pairs.push(("qty", self.options.quantity.to_string()));
        }
        if self.options.sections != defaults.options.sections {
            let open = match self.options.sections.expanded() {
                Some(section) => section.as_str(),
                None => COLLAPSED,
            };
            pairs.push(("open", open.to_string()));
        }
        if self.options.wishlisted {
            pairs.push(("wish", "1".to_string()));
        }
        if self.gallery.zoomed {
            pairs.push(("zoom", "1".to_string()));
        }
        if self.reviews.view_mode != defaults.reviews.view_mode {
            pairs.push(("view", self.reviews.view_mode.as_str().to_string()));
        }
        if self.reviews.show_all {
            pairs.push(("all", "1".to_string()));
        }
        if self.reviews.filter != defaults.reviews.filter {
            pairs.push(("filter", self.reviews.filter.as_str().to_string()));
        }
        if self.trust.filter != defaults.trust.filter {
            pairs.push(("trust", self.trust.filter.as_str().to_string()));
        }
        if self.insights.open {
            pairs.push(("insights", "1".to_string()));
        }
        if let Some(card) = self.insights.cards.expanded() {
            pairs.push(("card", card.as_str().to_string()));
        }

        pairs
            .into_iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Relative link to this state: `?` followed by the query.
    pub fn href(&self) -> String {
        format!("?{}", self.to_query())
    }

    /// Decode from already-parsed query parameters. Unknown keys are ignored.
    pub fn from_query(params: &QueryParams) -> QueryDecode {
        let mut state = PageState::default();
        let mut rejected = Vec::new();

        let take = |key: &str| params.get(key).map(String::as_str);

        if let Some(raw) = take("size") {
            decode_into(raw, &mut state.options.size, &mut rejected);
        }
        if let Some(raw) = take("qty") {
            match Quantity::from_str(raw) {
                Ok(qty) => state.options.quantity = qty,
                Err(e) => rejected.push(e),
            }
        }
        if let Some(raw) = take("open") {
            if raw.trim().eq_ignore_ascii_case(COLLAPSED) {
                state.options.sections.collapse();
            } else {
                match raw.parse() {
                    Ok(section) => state.options.sections.expand(section),
                    Err(e) => {
                        state.options.sections = ProductOptions::default().sections;
                        rejected.push(e);
                    }
                }
            }
        }
        if let Some(raw) = take("wish") {
            decode_flag("wish", raw, &mut state.options.wishlisted, &mut rejected);
        }
        if let Some(raw) = take("zoom") {
            decode_flag("zoom", raw, &mut state.gallery.zoomed, &mut rejected);
        }
        if let Some(raw) = take("view") {
            decode_into(raw, &mut state.reviews.view_mode, &mut rejected);
        }
        if let Some(raw) = take("all") {
            decode_flag("all", raw, &mut state.reviews.show_all, &mut rejected);
        }
        if let Some(raw) = take("filter") {
            decode_into(raw, &mut state.reviews.filter, &mut rejected);
        }
        if let Some(raw) = take("trust") {
            decode_into(raw, &mut state.trust.filter, &mut rejected);
        }
        if let Some(raw) = take("insights") {
            decode_flag("insights", raw, &mut state.insights.open, &mut rejected);
        }
        if let Some(raw) = take("card") {
            match raw.parse() {
                Ok(card) => state.insights.cards.expand(card),
                Err(e) => rejected.push(e),
            }
        }

        QueryDecode { state, rejected }
    }

    /// Decode from a raw query string (with or without the leading `?`).
    pub fn from_query_str(raw: &str) -> QueryDecode {
        Self::from_query(&parse_query(raw.trim_start_matches('?')))
    }
}

fn decode_into<T>(raw: &str, slot: &mut T, rejected: &mut Vec<StateError>)
where
    T: FromStr<Err = StateError>,
{
    match raw.parse() {
        Ok(value) => *slot = value,
        Err(e) => rejected.push(e),
    }
}

fn decode_flag(field: &str, raw: &str, slot: &mut bool, rejected: &mut Vec<StateError>) {
    match parse_flag(raw) {
        Some(value) => *slot = value,
        None => rejected.push(StateError::InvalidFlag {
            field: field.to_string(),
            value: raw.to_string(),
        }),
    }
}

/// Parse a boolean query flag.
pub fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" | "yes" => Some(true),
        "0" | "false" | "off" | "no" | "" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        AccordionSection, InsightId, PageAction, ReviewFilter, SizeOption, TrustFilter, ViewMode,
    };

    #[test]
    fn test_default_encodes_empty() {
        assert_eq!(PageState::default().to_query(), "");
        assert_eq!(PageState::default().href(), "?");
    }

    #[test]
    fn test_keys_written_in_fixed_order() {
        let mut state = PageState::default();
        state.apply_all([
            PageAction::ToggleInsight(InsightId::Recent),
            PageAction::OpenInsights,
            PageAction::SetTrustFilter(TrustFilter::Verified),
            PageAction::SetReviewFilter(ReviewFilter::FourStar),
            PageAction::ToggleShowAll,
            PageAction::SetViewMode(ViewMode::List),
            PageAction::ToggleZoom,
            PageAction::ToggleWishlist,
            PageAction::ToggleSection(AccordionSection::Returns),
            PageAction::IncrementQuantity,
            PageAction::SelectSize(SizeOption::Ml50),
        ]);

        assert_eq!(
            state.to_query(),
            "size=50ml&qty=2&open=returns&wish=1&zoom=1&view=list&all=1\
             &filter=4-star&trust=verified&insights=1&card=recent"
        );
    }

    #[test]
    fn test_round_trip_over_catalog() {
        let mut state = PageState::default();
        for action in PageAction::catalog() {
            state.apply(action);
            let decoded = PageState::from_query_str(&state.to_query());
            assert!(decoded.is_clean(), "{:?}", decoded.rejected);
            assert_eq!(decoded.state, state, "after {}", action);
        }
    }

    #[test]
    fn test_collapsed_accordion_encodes_none() {
        let state = PageState::default().after(PageAction::ToggleSection(AccordionSection::Features));
        assert_eq!(state.to_query(), "open=none");
        assert_eq!(PageState::from_query_str("?open=none").state, state);
    }

    #[test]
    fn test_malformed_fields_rejected_individually() {
        let decoded = PageState::from_query_str("size=1l&qty=0&view=list&wish=maybe&card=price");
        assert_eq!(decoded.state.options.size, SizeOption::Ml30);
        assert_eq!(decoded.state.options.quantity.get(), 1);
        assert_eq!(decoded.state.reviews.view_mode, ViewMode::List);
        assert!(!decoded.state.options.wishlisted);
        assert_eq!(decoded.state.insights.cards.expanded(), None);

        let fields: Vec<&str> = decoded.rejected.iter().map(|e| e.field()).collect();
        assert_eq!(fields.len(), 4);
        for field in ["size", "qty", "wish", "card"] {
            assert!(fields.contains(&field), "missing {}", field);
        }
    }

    #[test]
    fn test_bad_open_keeps_default_section() {
        let decoded = PageState::from_query_str("open=warranty");
        assert!(decoded
            .state
            .options
            .sections
            .is_expanded(AccordionSection::Features));
        assert_eq!(decoded.rejected.len(), 1);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let decoded = PageState::from_query_str("utm_source=mail&zoom=on");
        assert!(decoded.is_clean());
        assert!(decoded.state.gallery.zoomed);
    }

    #[test]
    fn test_percent_encoded_values() {
        let decoded = PageState::from_query_str("filter=With%20Photos&trust=Dry+Skin");
        assert_eq!(decoded.state.reviews.filter, ReviewFilter::WithPhotos);
        assert_eq!(decoded.state.trust.filter, TrustFilter::DrySkin);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("ON"), Some(true));
        assert_eq!(parse_flag(""), Some(false));
        assert_eq!(parse_flag("off"), Some(false));
        assert_eq!(parse_flag("2"), None);
    }
}
