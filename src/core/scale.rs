use serde::{Deserialize, Serialize};

use crate::core::domain::Domain;
use crate::core::types::{PixelPoint, Viewport};

/// Linear data→pixel mapping for one render pass.
///
/// X is anchored at zero so renders of overlapping time ranges line up;
/// Y is inverted (data up, pixels down) and anchored at `domain.min_y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Scale {
    origin_x: f64,
    chart_width: f64,
    x_range: f64,
    baseline_y: f64,
    chart_height: f64,
    min_y: f64,
    half_y_range: f64,
}

impl Scale {
    #[must_use]
    pub fn map_x(self, x: f64) -> f64 {
        self.origin_x + proportion(x, self.chart_width, self.x_range)
    }

    #[must_use]
    pub fn map_y(self, y: f64) -> f64 {
        // Halved operands keep the offset finite for spans beyond `f64::MAX`.
        let half_offset = y / 2.0 - self.min_y / 2.0;
        self.baseline_y - proportion(half_offset, self.chart_height, self.half_y_range)
    }

    #[must_use]
    pub fn map_point(self, x: f64, y: f64) -> PixelPoint {
        PixelPoint::new(self.map_x(x), self.map_y(y))
    }
}

/// Builds the X/Y mapping for `domain` inside `viewport`'s plot area.
///
/// Callers are expected to gate on `Viewport::is_drawable` first; a
/// degenerate viewport still produces finite (if useless) mappings.
#[must_use]
pub fn build_scale(domain: Domain, viewport: Viewport) -> Scale {
    Scale {
        origin_x: viewport.padding.left,
        chart_width: viewport.chart_width(),
        x_range: domain.x_range(),
        baseline_y: viewport.height - viewport.padding.bottom,
        chart_height: viewport.chart_height(),
        min_y: domain.min_y,
        half_y_range: domain.half_y_range(),
    }
}

/// `value * length / range`, saturating instead of overflowing.
///
/// Multiplying first keeps boundary values exact; the divide-first form only
/// runs when the product leaves the finite range.
fn proportion(value: f64, length: f64, range: f64) -> f64 {
    let direct = value * length / range;
    if direct.is_finite() {
        return direct;
    }
    (value / range * length).clamp(-f64::MAX, f64::MAX)
}
