//! Gallery state.

use serde::{Deserialize, Serialize};

/// Main product image state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GalleryState {
    pub zoomed: bool,
}

impl GalleryState {
    pub fn toggle_zoom(&mut self) {
        self.zoomed = !self.zoomed;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zoom_toggles() {
        let mut gallery = GalleryState::default();
        gallery.toggle_zoom();
        assert!(gallery.zoomed);
        gallery.toggle_zoom();
        assert!(!gallery.zoomed);
    }
}
