//! Review browser and trust journey state.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::choice::Choice;
use crate::error::StateError;

/// Arrangement of review cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    /// Cards shown before "show all" is activated.
    pub fn initial_count(&self) -> usize {
        match self {
            ViewMode::Grid => 6,
            ViewMode::List => 4,
        }
    }
}

impl Choice for ViewMode {
    const ALL: &'static [Self] = &[ViewMode::Grid, ViewMode::List];

    fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ViewMode::Grid => "Grid",
            ViewMode::List => "List",
        }
    }
}

impl FromStr for ViewMode {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StateError::UnknownViewMode(s.to_string()))
    }
}

/// Filter pills of the community reviews section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReviewFilter {
    #[default]
    All,
    FiveStar,
    FourStar,
    Verified,
    WithPhotos,
}

impl Choice for ReviewFilter {
    const ALL: &'static [Self] = &[
        ReviewFilter::All,
        ReviewFilter::FiveStar,
        ReviewFilter::FourStar,
        ReviewFilter::Verified,
        ReviewFilter::WithPhotos,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ReviewFilter::All => "all",
            ReviewFilter::FiveStar => "5-star",
            ReviewFilter::FourStar => "4-star",
            ReviewFilter::Verified => "verified",
            ReviewFilter::WithPhotos => "with-photos",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ReviewFilter::All => "All",
            ReviewFilter::FiveStar => "5 Star",
            ReviewFilter::FourStar => "4 Star",
            ReviewFilter::Verified => "Verified",
            ReviewFilter::WithPhotos => "With Photos",
        }
    }
}

impl FromStr for ReviewFilter {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StateError::UnknownFilter(s.to_string()))
    }
}

/// How the community reviews are browsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ReviewBrowser {
    pub view_mode: ViewMode,
    pub show_all: bool,
    pub filter: ReviewFilter,
}

impl ReviewBrowser {
    /// Number of cards to display out of `total` reviews.
    pub fn visible_count(&self, total: usize) -> usize {
        if self.show_all {
            total
        } else {
            total.min(self.view_mode.initial_count())
        }
    }

    /// Whether the show-all control is offered for `total` reviews.
    pub fn offers_show_all(&self, total: usize) -> bool {
        total > self.view_mode.initial_count()
    }

    /// Change the arrangement. The filter and show-all flag are untouched.
    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn toggle_show_all(&mut self) {
        self.show_all = !self.show_all;
    }

    pub fn set_filter(&mut self, filter: ReviewFilter) {
        self.filter = filter;
    }
}

/// Filter pills of the trust journey section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TrustFilter {
    #[default]
    ShowAll,
    Excellent,
    Verified,
    FiveStar,
    DrySkin,
    OilySkin,
}

impl TrustFilter {
    /// Filters rendered as pills.
    pub const PILLS: &'static [TrustFilter] = &[
        TrustFilter::ShowAll,
        TrustFilter::Excellent,
        TrustFilter::Verified,
        TrustFilter::FiveStar,
    ];
}

impl Choice for TrustFilter {
    const ALL: &'static [Self] = &[
        TrustFilter::ShowAll,
        TrustFilter::Excellent,
        TrustFilter::Verified,
        TrustFilter::FiveStar,
        TrustFilter::DrySkin,
        TrustFilter::OilySkin,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TrustFilter::ShowAll => "show-all",
            TrustFilter::Excellent => "excellent",
            TrustFilter::Verified => "verified",
            TrustFilter::FiveStar => "5-star",
            TrustFilter::DrySkin => "dry-skin",
            TrustFilter::OilySkin => "oily-skin",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TrustFilter::ShowAll => "Show All",
            TrustFilter::Excellent => "Excellent",
            TrustFilter::Verified => "Verified",
            TrustFilter::FiveStar => "5 Star",
            TrustFilter::DrySkin => "Dry Skin",
            TrustFilter::OilySkin => "Oily Skin",
        }
    }
}

impl FromStr for TrustFilter {
    type Err = StateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| StateError::UnknownTrustFilter(s.to_string()))
    }
}

/// Trust journey section state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrustJourney {
    pub filter: TrustFilter,
}

impl TrustJourney {
    pub fn set_filter(&mut self, filter: TrustFilter) {
        self.filter = filter;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_counts() {
        assert_eq!(ViewMode::Grid.initial_count(), 6);
        assert_eq!(ViewMode::List.initial_count(), 4);
    }

    #[test]
    fn test_visible_count() {
        let mut browser = ReviewBrowser::default();
        assert_eq!(browser.visible_count(10), 6);
        assert_eq!(browser.visible_count(3), 3);

        browser.set_view_mode(ViewMode::List);
        assert_eq!(browser.visible_count(10), 4);

        browser.toggle_show_all();
        assert_eq!(browser.visible_count(10), 10);
    }

    #[test]
    fn test_show_all_offered_only_when_more_remain() {
        let browser = ReviewBrowser::default();
        assert!(!browser.offers_show_all(6));
        assert!(browser.offers_show_all(7));

        let list = ReviewBrowser {
            view_mode: ViewMode::List,
            ..Default::default()
        };
        assert!(list.offers_show_all(6));
    }

    #[test]
    fn test_view_mode_keeps_filter() {
        let mut browser = ReviewBrowser::default();
        browser.set_filter(ReviewFilter::Verified);
        browser.set_view_mode(ViewMode::List);
        assert_eq!(browser.filter, ReviewFilter::Verified);
        browser.set_view_mode(ViewMode::Grid);
        assert_eq!(browser.filter, ReviewFilter::Verified);
    }

    #[test]
    fn test_filter_parse_slug_and_label() {
        assert_eq!("5-star".parse::<ReviewFilter>().unwrap(), ReviewFilter::FiveStar);
        assert_eq!("With Photos".parse::<ReviewFilter>().unwrap(), ReviewFilter::WithPhotos);
        assert_eq!("show-all".parse::<TrustFilter>().unwrap(), TrustFilter::ShowAll);
        assert!(matches!(
            "3-star".parse::<ReviewFilter>(),
            Err(StateError::UnknownFilter(_))
        ));
    }

    #[test]
    fn test_trust_pills_are_first_four() {
        assert_eq!(TrustFilter::PILLS, &TrustFilter::ALL[..4]);
    }
}
