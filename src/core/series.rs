use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// A (time, value) pair in data space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub x: f64,
    pub y: f64,
}

impl DataPoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Valid points have both components finite.
    #[must_use]
    pub fn is_valid(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// One named, colored sequence of values sharing the chart's time axis.
///
/// `None` marks a missing sample. Non-finite numbers are kept as-is and are
/// treated exactly like missing samples when drawing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub id: String,
    pub color: Color,
    pub label: String,
    pub values: Vec<Option<f64>>,
}

impl Series {
    #[must_use]
    pub fn new(id: impl Into<String>, color: Color, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            color,
            label: label.into(),
            values: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_values(mut self, values: Vec<Option<f64>>) -> Self {
        self.values = values;
        self
    }

    /// Convenience for dense numeric input; NaN entries stay invalid.
    #[must_use]
    pub fn with_numbers(mut self, values: &[f64]) -> Self {
        self.values = values.iter().copied().map(Some).collect();
        self
    }

    /// Finite value at `index`, if any.
    #[must_use]
    pub fn value_at(&self, index: usize) -> Option<f64> {
        self.values
            .get(index)
            .copied()
            .flatten()
            .filter(|value| value.is_finite())
    }
}

/// Immutable bundle of one shared time axis plus value series.
///
/// Series order is draw order and legend order. The time axis may be
/// unsorted and may contain non-finite entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SeriesSet {
    time_axis: Vec<f64>,
    series: Vec<Series>,
}

impl SeriesSet {
    #[must_use]
    pub fn new(time_axis: Vec<f64>) -> Self {
        Self {
            time_axis,
            series: Vec::new(),
        }
    }

    /// Appends a series; ids must be unique within the set.
    pub fn push_series(&mut self, series: Series) -> ChartResult<()> {
        if self.series.iter().any(|existing| existing.id == series.id) {
            return Err(ChartError::InvalidData(format!(
                "duplicate series id `{}`",
                series.id
            )));
        }
        self.series.push(series);
        Ok(())
    }

    pub fn with_series(mut self, series: Series) -> ChartResult<Self> {
        self.push_series(series)?;
        Ok(self)
    }

    #[must_use]
    pub fn time_axis(&self) -> &[f64] {
        &self.time_axis
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.time_axis.is_empty() || self.series.is_empty()
    }

    /// Number of indices where `series` is paired with the time axis.
    #[must_use]
    pub fn paired_len(&self, series: &Series) -> usize {
        self.time_axis.len().min(series.values.len())
    }

    /// Valid points of `series` in data order, with their source index.
    pub fn valid_points<'a>(
        &'a self,
        series: &'a Series,
    ) -> impl Iterator<Item = (usize, DataPoint)> + 'a {
        valid_points(&self.time_axis, series)
    }
}

/// Valid (index, point) pairs of `series` against `time_axis`, in data order.
pub fn valid_points<'a>(
    time_axis: &'a [f64],
    series: &'a Series,
) -> impl Iterator<Item = (usize, DataPoint)> + 'a {
    time_axis
        .iter()
        .zip(series.values.iter())
        .enumerate()
        .filter_map(|(index, (&x, &y))| {
            let point = DataPoint::new(x, y?);
            point.is_valid().then_some((index, point))
        })
}
