//! Page geometry for paginated output

use crate::stylesheet::Stylesheet;

/// US Letter width in points
pub const LETTER_WIDTH: f32 = 612.0;
/// US Letter height in points
pub const LETTER_HEIGHT: f32 = 792.0;

/// Configuration options for page layout, in points
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub width: f32,
    pub height: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    pub margin_top: f32,
    pub margin_bottom: f32,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self::letter().with_margin(0.75 * 72.0)
    }
}

impl PageConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// US Letter without margins
    pub fn letter() -> Self {
        Self {
            width: LETTER_WIDTH,
            height: LETTER_HEIGHT,
            margin_left: 0.0,
            margin_right: 0.0,
            margin_top: 0.0,
            margin_bottom: 0.0,
        }
    }

    /// US Letter with the stylesheet's margins
    pub fn from_stylesheet(style: &Stylesheet) -> Self {
        Self::letter().with_margin(style.margin_pt())
    }

    /// Set the same margin on all four sides
    pub fn with_margin(mut self, margin: f32) -> Self {
        self.margin_left = margin;
        self.margin_right = margin;
        self.margin_top = margin;
        self.margin_bottom = margin;
        self
    }

    /// Width available to text between the side margins
    pub fn content_width(&self) -> f32 {
        self.width - self.margin_left - self.margin_right
    }

    /// Baseline limit: text may not descend below this y (from the top edge)
    pub fn content_bottom(&self) -> f32 {
        self.height - self.margin_bottom
    }
}
