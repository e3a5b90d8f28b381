use serde::{Deserialize, Serialize};

/// Pixels reserved around the plot area for tick labels and axis titles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Padding {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Padding {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    #[must_use]
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    #[must_use]
    pub fn horizontal(self) -> f64 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(self) -> f64 {
        self.top + self.bottom
    }
}

impl Default for Padding {
    fn default() -> Self {
        Self::new(50.0, 50.0, 60.0, 70.0)
    }
}

/// Pixel rectangle available for drawing, including its padding.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    #[serde(default)]
    pub padding: Padding,
}

impl Viewport {
    /// Creates a viewport with the default chart padding.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            padding: Padding::default(),
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn chart_width(self) -> f64 {
        self.width - self.padding.horizontal()
    }

    #[must_use]
    pub fn chart_height(self) -> f64 {
        self.height - self.padding.vertical()
    }

    /// Whether the plot area left after padding has positive extent on both axes.
    ///
    /// NaN sizes compare false and are therefore degenerate.
    #[must_use]
    pub fn is_drawable(self) -> bool {
        self.chart_width() > 0.0 && self.chart_height() > 0.0
    }

    /// Full surface rectangle, padding included.
    #[must_use]
    pub fn bounds(self) -> PixelRect {
        PixelRect::new(0.0, 0.0, self.width, self.height)
    }

    /// Plot area rectangle, padding excluded.
    #[must_use]
    pub fn plot_area(self) -> PixelRect {
        PixelRect::new(
            self.padding.left,
            self.padding.top,
            self.chart_width(),
            self.chart_height(),
        )
    }
}

/// Point in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Axis-aligned rectangle in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelRect {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn bottom(self) -> f64 {
        self.y + self.height
    }
}
