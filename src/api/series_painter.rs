use tracing::trace;

use crate::core::{PixelPoint, Scale, Series, valid_points};
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::ChartStyle;

/// Strokes one series and its sampled markers; returns the valid point count.
///
/// Invalid samples (missing, NaN, infinite, or a non-finite time) are
/// dropped, not interpolated: the polyline runs straight from the previous
/// valid point to the next one. A lone valid point gets no stroke, only its
/// marker when it falls on the marker stride.
pub fn paint_series<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    series: &Series,
    time_axis: &[f64],
    scale: Scale,
    style: &ChartStyle,
) -> ChartResult<usize> {
    let path: Vec<(usize, PixelPoint)> = valid_points(time_axis, series)
        .map(|(index, point)| (index, scale.map_point(point.x, point.y)))
        .collect();

    if path.is_empty() {
        trace!(series = %series.id, "series has no valid points");
        return Ok(0);
    }

    if path.len() >= 2 {
        let points: Vec<PixelPoint> = path.iter().map(|&(_, point)| point).collect();
        surface.stroke_line(&points, series.color, style.series_stroke_width)?;
    }

    // Marker stride follows the raw axis length so density stays bounded.
    let stride = style.marker_stride(time_axis.len());
    for &(_, center) in path.iter().filter(|(index, _)| index % stride == 0) {
        surface.fill_circle(center, style.marker_radius_px, series.color)?;
    }

    trace!(series = %series.id, points = path.len(), stride, "painted series");
    Ok(path.len())
}
