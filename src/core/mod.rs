pub mod axis;
pub mod domain;
pub mod legend;
pub mod scale;
pub mod series;
pub mod types;

pub use axis::{
    DEFAULT_MAX_X_LABELS, DEFAULT_Y_TICK_COUNT, XTick, YTick, format_x_label, format_y_label,
    plan_x_ticks, plan_y_ticks, round_half_up,
};
pub use domain::{
    Domain, EPSILON, X_RANGE_FALLBACK, Y_RANGE_FALLBACK, YAxisAnchor, compute_domain,
};
pub use legend::{DrawnCounts, LegendEntry, build_legend};
pub use scale::{Scale, build_scale};
pub use series::{DataPoint, Series, SeriesSet, valid_points};
pub use types::{Padding, PixelPoint, PixelRect, Viewport};
