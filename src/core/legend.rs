use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::series::Series;
use crate::render::Color;

/// Valid points stroked per series id, in draw order.
pub type DrawnCounts = IndexMap<String, usize>;

/// Legend row handed back to the host for its own presentation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendEntry {
    pub id: String,
    pub color: Color,
    pub label: String,
}

/// Legend rows for the series that actually drew at least one point.
///
/// Order follows `series`, not `drawn_counts`.
#[must_use]
pub fn build_legend(series: &[Series], drawn_counts: &DrawnCounts) -> Vec<LegendEntry> {
    series
        .iter()
        .filter(|series| drawn_counts.get(&series.id).copied().unwrap_or(0) > 0)
        .map(|series| LegendEntry {
            id: series.id.clone(),
            color: series.color,
            label: series.label.clone(),
        })
        .collect()
}
