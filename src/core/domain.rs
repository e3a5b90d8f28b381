use serde::{Deserialize, Serialize};

use crate::core::series::SeriesSet;

/// Spans narrower than this are treated as zero when building a scale.
pub const EPSILON: f64 = 1e-12;

/// X denominator used when the largest time value is zero.
///
/// The X axis is anchored at zero, so `max_x == 0` would otherwise divide by
/// zero; a span of one keeps every point on the left edge instead.
pub const X_RANGE_FALLBACK: f64 = 1.0;

/// Y span used when every plotted value is equal.
///
/// A flat series then sits on the bottom edge of the plot area and the Y
/// ticks run from `min_y` to `min_y + 1`.
pub const Y_RANGE_FALLBACK: f64 = 1.0;

/// Where the Y axis starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum YAxisAnchor {
    /// Bottom edge is the smallest plotted value.
    #[default]
    DataMin,
    /// Bottom edge is zero, or the smallest value when it is negative.
    Zero,
}

/// Bounding box of every valid point in a series set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Domain {
    /// Denominator for the zero-anchored X mapping.
    #[must_use]
    pub fn x_range(self) -> f64 {
        if self.max_x.abs() < EPSILON {
            X_RANGE_FALLBACK
        } else {
            self.max_x
        }
    }

    /// Y span, never smaller than `EPSILON`.
    ///
    /// Saturates to infinity when the span exceeds `f64::MAX`; mapping code
    /// works with `half_y_range` instead.
    #[must_use]
    pub fn y_range(self) -> f64 {
        2.0 * self.half_y_range()
    }

    /// Half of `y_range`, finite for any finite bounds.
    #[must_use]
    pub fn half_y_range(self) -> f64 {
        let half_span = self.max_y / 2.0 - self.min_y / 2.0;
        if half_span < EPSILON / 2.0 {
            Y_RANGE_FALLBACK / 2.0
        } else {
            half_span
        }
    }

    #[must_use]
    pub fn anchored(mut self, anchor: YAxisAnchor) -> Self {
        if anchor == YAxisAnchor::Zero {
            self.min_y = self.min_y.min(0.0);
            self.max_y = self.max_y.max(0.0);
        }
        self
    }
}

/// Computes the shared domain across every series of `set`.
///
/// Returns `None` when no valid (time, value) pair exists anywhere.
#[must_use]
pub fn compute_domain(set: &SeriesSet) -> Option<Domain> {
    let mut domain: Option<Domain> = None;
    for series in set.series() {
        for (_, point) in set.valid_points(series) {
            domain = Some(match domain {
                None => Domain {
                    min_x: point.x,
                    max_x: point.x,
                    min_y: point.y,
                    max_y: point.y,
                },
                Some(current) => Domain {
                    min_x: current.min_x.min(point.x),
                    max_x: current.max_x.max(point.x),
                    min_y: current.min_y.min(point.y),
                    max_y: current.max_y.max(point.y),
                },
            });
        }
    }
    domain
}
