//! Page-wide state and the action reducer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::error::StateError;
use crate::gallery::GalleryState;
use crate::insights::{InsightId, InsightsPanel};
use crate::options::{AccordionSection, ProductOptions, SizeOption};
use crate::reviews::{ReviewBrowser, ReviewFilter, TrustFilter, TrustJourney, ViewMode};

/// All UI state of the product page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageState {
    pub options: ProductOptions,
    pub gallery: GalleryState,
    pub reviews: ReviewBrowser,
    pub trust: TrustJourney,
    pub insights: InsightsPanel,
}

/// A single user interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PageAction {
    SelectSize(SizeOption),
    IncrementQuantity,
    DecrementQuantity,
    ToggleSection(AccordionSection),
    ToggleWishlist,
    ToggleZoom,
    SetViewMode(ViewMode),
    ToggleShowAll,
    SetReviewFilter(ReviewFilter),
    SetTrustFilter(TrustFilter),
    OpenInsights,
    CloseInsights,
    ToggleInsights,
    ToggleInsight(InsightId),
}

impl PageState {
    /// Perform one transition in place.
    pub fn apply(&mut self, action: PageAction) {
        match action {
            PageAction::SelectSize(size) => self.options.select_size(size),
            PageAction::IncrementQuantity => self.options.quantity.increment(),
            PageAction::DecrementQuantity => self.options.quantity.decrement(),
            PageAction::ToggleSection(section) => self.options.toggle_section(section),
            PageAction::ToggleWishlist => self.options.toggle_wishlist(),
            PageAction::ToggleZoom => self.gallery.toggle_zoom(),
            PageAction::SetViewMode(mode) => self.reviews.set_view_mode(mode),
            PageAction::ToggleShowAll => self.reviews.toggle_show_all(),
            PageAction::SetReviewFilter(filter) => self.reviews.set_filter(filter),
            PageAction::SetTrustFilter(filter) => self.trust.set_filter(filter),
            PageAction::OpenInsights => self.insights.open(),
            PageAction::CloseInsights => self.insights.close(),
            PageAction::ToggleInsights => self.insights.toggle(),
            PageAction::ToggleInsight(id) => self.insights.toggle_card(id),
        }
    }

    /// The state after `action`, leaving `self` untouched.
    pub fn after(&self, action: PageAction) -> PageState {
        let mut next = *self;
        next.apply(action);
        next
    }

    /// Apply a sequence of actions in order.
    pub fn apply_all<I>(&mut self, actions: I)
    where
        I: IntoIterator<Item = PageAction>,
    {
        for action in actions {
            self.apply(action);
        }
    }
}

impl PageAction {
    /// Every distinct action, for listings.
    pub fn catalog() -> Vec<PageAction> {
        let mut actions = Vec::new();
        actions.extend(SizeOption::ALL.iter().map(|s| PageAction::SelectSize(*s)));
        actions.push(PageAction::IncrementQuantity);
        actions.push(PageAction::DecrementQuantity);
        actions.extend(
            AccordionSection::ALL
                .iter()
                .map(|s| PageAction::ToggleSection(*s)),
        );
        actions.push(PageAction::ToggleWishlist);
        actions.push(PageAction::ToggleZoom);
        actions.extend(ViewMode::ALL.iter().map(|m| PageAction::SetViewMode(*m)));
        actions.push(PageAction::ToggleShowAll);
        actions.extend(
            ReviewFilter::ALL
                .iter()
                .map(|f| PageAction::SetReviewFilter(*f)),
        );
        actions.extend(
            TrustFilter::ALL
                .iter()
                .map(|f| PageAction::SetTrustFilter(*f)),
        );
        actions.push(PageAction::OpenInsights);
        actions.push(PageAction::CloseInsights);
        actions.push(PageAction::ToggleInsights);
        actions.extend(InsightId::ALL.iter().map(|i| PageAction::ToggleInsight(*i)));
        actions
    }

    /// Human-readable description.
    pub fn description(&self) -> String {
        match self {
            PageAction::SelectSize(size) => format!("Select size {}", size.label()),
            PageAction::IncrementQuantity => "Increase quantity".to_string(),
            PageAction::DecrementQuantity => "Decrease quantity (minimum 1)".to_string(),
            PageAction::ToggleSection(section) => format!("Toggle \"{}\"", section.label()),
            PageAction::ToggleWishlist => "Add to or remove from wishlist".to_string(),
            PageAction::ToggleZoom => "Zoom the product image in or out".to_string(),
            PageAction::SetViewMode(mode) => format!("Show reviews as {}", mode.label()),
            PageAction::ToggleShowAll => "Show all reviews or fewer".to_string(),
            PageAction::SetReviewFilter(filter) => {
                format!("Filter reviews: {}", filter.label())
            }
            PageAction::SetTrustFilter(filter) => {
                format!("Filter stories: {}", filter.label())
            }
            PageAction::OpenInsights => "Open review insights".to_string(),
            PageAction::CloseInsights => "Close review insights".to_string(),
            PageAction::ToggleInsights => "Open or close review insights".to_string(),
            PageAction::ToggleInsight(id) => format!("Expand or collapse {} insight", id.label()),
        }
    }
}

impl fmt::Display for PageAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageAction::SelectSize(size) => write!(f, "size:{}", size.as_str()),
            PageAction::IncrementQuantity => write!(f, "qty:inc"),
            PageAction::DecrementQuantity => write!(f, "qty:dec"),
            PageAction::ToggleSection(section) => write!(f, "section:{}", section.as_str()),
            PageAction::ToggleWishlist => write!(f, "wishlist"),
            PageAction::ToggleZoom => write!(f, "zoom"),
            PageAction::SetViewMode(mode) => write!(f, "view:{}", mode.as_str()),
            PageAction::ToggleShowAll => write!(f, "show-all"),
            PageAction::SetReviewFilter(filter) => write!(f, "filter:{}", filter.as_str()),
            PageAction::SetTrustFilter(filter) => write!(f, "trust:{}", filter.as_str()),
            PageAction::OpenInsights => write!(f, "insights:open"),
            PageAction::CloseInsights => write!(f, "insights:close"),
            PageAction::ToggleInsights => write!(f, "insights:toggle"),
            PageAction::ToggleInsight(id) => write!(f, "insight:{}", id.as_str()),
        }
    }
}

impl FromStr for PageAction {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let unknown = || StateError::UnknownAction(s.to_string());

        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg)),
            None => (s, None),
        };

        let action = match (verb.to_ascii_lowercase().as_str(), arg) {
            ("size", Some(arg)) => PageAction::SelectSize(arg.parse()?),
            ("qty", Some(arg)) => match arg.to_ascii_lowercase().as_str() {
                "inc" | "+" => PageAction::IncrementQuantity,
                "dec" | "-" => PageAction::DecrementQuantity,
                _ => return Err(unknown()),
            },
            ("section", Some(arg)) => PageAction::ToggleSection(arg.parse()?),
            ("wishlist", None) => PageAction::ToggleWishlist,
            ("zoom", None) => PageAction::ToggleZoom,
            ("view", Some(arg)) => PageAction::SetViewMode(arg.parse()?),
            ("show-all", None) => PageAction::ToggleShowAll,
            ("filter", Some(arg)) => PageAction::SetReviewFilter(arg.parse()?),
            ("trust", Some(arg)) => PageAction::SetTrustFilter(arg.parse()?),
            ("insights", Some(arg)) => match arg.to_ascii_lowercase().as_str() {
                "open" => PageAction::OpenInsights,
                "close" => PageAction::CloseInsights,
                "toggle" => PageAction::ToggleInsights,
                _ => return Err(unknown()),
            },
            ("insight", Some(arg)) => PageAction::ToggleInsight(arg.parse()?),
            _ => return Err(unknown()),
        };

        Ok(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantity_sequence() {
        let mut state = PageState::default();
        state.apply_all([
            PageAction::DecrementQuantity,
            PageAction::DecrementQuantity,
            PageAction::DecrementQuantity,
        ]);
        assert_eq!(state.options.quantity.get(), 1);

        state.apply_all([PageAction::IncrementQuantity, PageAction::IncrementQuantity]);
        assert_eq!(state.options.quantity.get(), 3);
    }

    #[test]
    fn test_select_size() {
        for size in SizeOption::ALL {
            let state = PageState::default().after(PageAction::SelectSize(*size));
            assert_eq!(state.options.size, *size);
        }
    }

    #[test]
    fn test_insights_toggle_twice() {
        let state = PageState::default()
            .after(PageAction::ToggleInsights)
            .after(PageAction::ToggleInsights);
        assert!(!state.insights.is_open());
    }

    #[test]
    fn test_accordion_transitions() {
        let mut state = PageState::default();
        state.apply(PageAction::ToggleSection(AccordionSection::Features));
        assert_eq!(state.options.sections.expanded(), None);

        state.apply(PageAction::ToggleSection(AccordionSection::Ingredients));
        state.apply(PageAction::ToggleSection(AccordionSection::Description));
        assert_eq!(
            state.options.sections.expanded(),
            Some(AccordionSection::Description)
        );
    }

    #[test]
    fn test_view_mode_leaves_filter() {
        let state = PageState::default()
            .after(PageAction::SetReviewFilter(ReviewFilter::FiveStar))
            .after(PageAction::SetViewMode(ViewMode::List));
        assert_eq!(state.reviews.filter, ReviewFilter::FiveStar);
        assert_eq!(state.reviews.view_mode, ViewMode::List);
    }

    #[test]
    fn test_after_does_not_mutate() {
        let state = PageState::default();
        let next = state.after(PageAction::ToggleWishlist);
        assert!(!state.options.wishlisted);
        assert!(next.options.wishlisted);
    }

    #[test]
    fn test_action_text_round_trip() {
        for action in PageAction::catalog() {
            let text = action.to_string();
            assert_eq!(text.parse::<PageAction>().unwrap(), action, "{}", text);
        }
    }

    #[test]
    fn test_catalog_is_complete() {
        // 2 sizes, 2 qty, 5 sections, wishlist, zoom, 2 views, show-all,
        // 5 filters, 6 trust filters, 3 panel, 6 cards
        assert_eq!(PageAction::catalog().len(), 34);
    }

    #[test]
    fn test_action_parse_errors() {
        assert!(matches!(
            "size:100ml".parse::<PageAction>(),
            Err(StateError::UnknownSize(_))
        ));
        assert!(matches!(
            "qty:double".parse::<PageAction>(),
            Err(StateError::UnknownAction(_))
        ));
        assert!(matches!(
            "wishlist:on".parse::<PageAction>(),
            Err(StateError::UnknownAction(_))
        ));
        assert!(matches!(
            "dance".parse::<PageAction>(),
            Err(StateError::UnknownAction(_))
        ));
    }

    #[test]
    fn test_action_parse_is_lenient_on_case() {
        assert_eq!(
            "Insights:Open".parse::<PageAction>().unwrap(),
            PageAction::OpenInsights
        );
        assert_eq!(
            "filter:With Photos".parse::<PageAction>().unwrap(),
            PageAction::SetReviewFilter(ReviewFilter::WithPhotos)
        );
    }
}
