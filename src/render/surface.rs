use serde::{Deserialize, Serialize};

use crate::core::{PixelPoint, PixelRect};
use crate::error::ChartResult;
use crate::render::{Color, TextPrimitive};

/// Pixel size reported by a drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceSize {
    pub width: f64,
    pub height: f64,
}

impl SurfaceSize {
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Immediate-mode 2D drawing target the chart engine draws into.
///
/// Any raster API with lines, filled circles and text satisfies this.
/// Implementations draw in call order; the engine never reads pixels back.
pub trait DrawingSurface {
    fn viewport_size(&self) -> SurfaceSize;

    fn clear(&mut self, rect: PixelRect) -> ChartResult<()>;

    /// Strokes an open polyline through `points`.
    fn stroke_line(&mut self, points: &[PixelPoint], color: Color, width: f64) -> ChartResult<()>;

    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: Color) -> ChartResult<()>;

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()>;
}

impl<S: DrawingSurface + ?Sized> DrawingSurface for &mut S {
    fn viewport_size(&self) -> SurfaceSize {
        (**self).viewport_size()
    }

    fn clear(&mut self, rect: PixelRect) -> ChartResult<()> {
        (**self).clear(rect)
    }

    fn stroke_line(&mut self, points: &[PixelPoint], color: Color, width: f64) -> ChartResult<()> {
        (**self).stroke_line(points, color, width)
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: Color) -> ChartResult<()> {
        (**self).fill_circle(center, radius, color)
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        (**self).draw_text(text)
    }
}
