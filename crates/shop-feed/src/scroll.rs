//! Infinite-scroll trigger.

use serde::{Deserialize, Serialize};

/// Default distance from the bottom that starts the next page.
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 250.0;

/// Scroll geometry as the browser reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub scroll_top: f64,
    pub viewport_height: f64,
    pub content_height: f64,
}

impl ScrollPosition {
    pub fn new(scroll_top: f64, viewport_height: f64, content_height: f64) -> Self {
        Self {
            scroll_top,
            viewport_height,
            content_height,
        }
    }

    /// Pixels of content below the visible area.
    pub fn remaining(&self) -> f64 {
        (self.content_height - (self.scroll_top + self.viewport_height)).max(0.0)
    }
}

/// Decides when scrolling should fetch another page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScrollTrigger {
    threshold_px: f64,
}

impl ScrollTrigger {
    pub fn new(threshold_px: f64) -> Self {
        Self {
            threshold_px: threshold_px.max(0.0),
        }
    }

    pub fn threshold_px(&self) -> f64 {
        self.threshold_px
    }

    /// Whether the viewport is within the threshold of the content end.
    pub fn is_near_end(&self, position: ScrollPosition) -> bool {
        position.remaining() <= self.threshold_px
    }

    /// Near the end, more pages exist and nothing is already loading.
    pub fn should_load_more(&self, position: ScrollPosition, loading: bool, has_more: bool) -> bool {
        !loading && has_more && self.is_near_end(position)
    }
}

impl Default for ScrollTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_SCROLL_THRESHOLD_PX)
    }
}
