use std::f64::consts::{FRAC_PI_2, TAU};
use std::fs::File;
use std::path::Path;

use cairo::{Context, Format, ImageSurface, LineCap, LineJoin};
use pango::FontDescription;

use crate::core::{PixelPoint, PixelRect};
use crate::error::{ChartError, ChartResult};
use crate::render::{
    Color, DrawingSurface, SurfaceSize, TextHAlign, TextOrientation, TextPrimitive, TextVAlign,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub clears: usize,
    pub lines_drawn: usize,
    pub circles_drawn: usize,
    pub texts_drawn: usize,
}

/// Offscreen Cairo + Pango raster surface.
#[derive(Debug)]
pub struct CairoSurface {
    surface: ImageSurface,
    context: Context,
    clear_color: Color,
    stats: CairoRenderStats,
}

impl CairoSurface {
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidViewport {
                width: f64::from(width),
                height: f64::from(height),
            });
        }

        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self {
            surface,
            context,
            clear_color: Color::rgb(1.0, 1.0, 1.0),
            stats: CairoRenderStats::default(),
        })
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> ChartResult<()> {
        color.validate()?;
        self.clear_color = color;
        Ok(())
    }

    /// Counters since the last full-surface clear.
    #[must_use]
    pub fn stats(&self) -> CairoRenderStats {
        self.stats
    }

    pub fn write_png(&self, path: impl AsRef<Path>) -> ChartResult<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|err| {
                ChartError::Backend(format!("failed to create {}: {err}", parent.display()))
            })?;
        }
        let mut file = File::create(path).map_err(|err| {
            ChartError::Backend(format!("failed to create {}: {err}", path.display()))
        })?;
        self.surface.flush();
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| ChartError::Backend(format!("failed to encode png: {err}")))
    }

    fn size(&self) -> SurfaceSize {
        SurfaceSize::new(
            f64::from(self.surface.width()),
            f64::from(self.surface.height()),
        )
    }
}

impl DrawingSurface for CairoSurface {
    fn viewport_size(&self) -> SurfaceSize {
        self.size()
    }

    fn clear(&mut self, rect: PixelRect) -> ChartResult<()> {
        let size = self.size();
        if rect == PixelRect::new(0.0, 0.0, size.width, size.height) {
            self.stats = CairoRenderStats::default();
        }
        clear_rect(&self.context, rect, self.clear_color)?;
        self.stats.clears += 1;
        Ok(())
    }

    fn stroke_line(&mut self, points: &[PixelPoint], color: Color, width: f64) -> ChartResult<()> {
        stroke_polyline(&self.context, points, color, width)?;
        self.stats.lines_drawn += 1;
        Ok(())
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: Color) -> ChartResult<()> {
        fill_circle(&self.context, center, radius, color)?;
        self.stats.circles_drawn += 1;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        draw_text(&self.context, text)?;
        self.stats.texts_drawn += 1;
        Ok(())
    }
}

/// Draws onto an externally owned Cairo context, e.g. inside a GTK draw callback.
#[derive(Debug)]
pub struct CairoContextSurface<'a> {
    context: &'a Context,
    size: SurfaceSize,
    clear_color: Color,
}

impl<'a> CairoContextSurface<'a> {
    #[must_use]
    pub fn new(context: &'a Context, width: f64, height: f64) -> Self {
        Self {
            context,
            size: SurfaceSize::new(width, height),
            clear_color: Color::rgb(1.0, 1.0, 1.0),
        }
    }

    #[must_use]
    pub fn with_clear_color(mut self, color: Color) -> Self {
        self.clear_color = color;
        self
    }
}

impl DrawingSurface for CairoContextSurface<'_> {
    fn viewport_size(&self) -> SurfaceSize {
        self.size
    }

    fn clear(&mut self, rect: PixelRect) -> ChartResult<()> {
        clear_rect(self.context, rect, self.clear_color)
    }

    fn stroke_line(&mut self, points: &[PixelPoint], color: Color, width: f64) -> ChartResult<()> {
        stroke_polyline(self.context, points, color, width)
    }

    fn fill_circle(&mut self, center: PixelPoint, radius: f64, color: Color) -> ChartResult<()> {
        fill_circle(self.context, center, radius, color)
    }

    fn draw_text(&mut self, text: &TextPrimitive) -> ChartResult<()> {
        draw_text(self.context, text)
    }
}

fn clear_rect(context: &Context, rect: PixelRect, color: Color) -> ChartResult<()> {
    color.validate()?;
    apply_color(context, color);
    context.rectangle(rect.x, rect.y, rect.width, rect.height);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to clear surface", err))
}

fn stroke_polyline(
    context: &Context,
    points: &[PixelPoint],
    color: Color,
    width: f64,
) -> ChartResult<()> {
    let Some((first, rest)) = points.split_first() else {
        return Ok(());
    };

    apply_color(context, color);
    context.set_line_width(width);
    context.set_line_join(LineJoin::Round);
    context.set_line_cap(LineCap::Round);
    context.move_to(first.x, first.y);
    for point in rest {
        context.line_to(point.x, point.y);
    }
    context
        .stroke()
        .map_err(|err| map_backend_error("failed to stroke line", err))
}

fn fill_circle(context: &Context, center: PixelPoint, radius: f64, color: Color) -> ChartResult<()> {
    apply_color(context, color);
    context.new_sub_path();
    context.arc(center.x, center.y, radius, 0.0, TAU);
    context
        .fill()
        .map_err(|err| map_backend_error("failed to fill circle", err))
}

fn draw_text(context: &Context, text: &TextPrimitive) -> ChartResult<()> {
    let layout = pangocairo::functions::create_layout(context);
    let font_description =
        FontDescription::from_string(&format!("{} {}px", text.font.family, text.font.size_px));
    layout.set_font_description(Some(&font_description));
    layout.set_text(&text.text);

    let (text_width, text_height) = layout.pixel_size();
    let dx = match text.h_align {
        TextHAlign::Left => 0.0,
        TextHAlign::Center => -f64::from(text_width) / 2.0,
        TextHAlign::Right => -f64::from(text_width),
    };
    let dy = match text.v_align {
        TextVAlign::Top => 0.0,
        TextVAlign::Middle => -f64::from(text_height) / 2.0,
        TextVAlign::Baseline => -f64::from(layout.baseline()) / f64::from(pango::SCALE),
    };

    context
        .save()
        .map_err(|err| map_backend_error("failed to save cairo state", err))?;
    apply_color(context, text.color);
    context.translate(text.position.x, text.position.y);
    if text.orientation == TextOrientation::Vertical {
        context.rotate(-FRAC_PI_2);
    }
    context.move_to(dx, dy);
    pangocairo::functions::show_layout(context, &layout);
    context
        .restore()
        .map_err(|err| map_backend_error("failed to restore cairo state", err))
}

fn apply_color(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
