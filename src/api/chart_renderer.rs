use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::{
    Domain, DrawnCounts, LegendEntry, PixelPoint, Scale, SeriesSet, Viewport, XTick, YTick,
    build_legend, build_scale, compute_domain, plan_x_ticks, plan_y_ticks,
};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, RenderFrame, SurfaceSize, TextHAlign, TextPrimitive, TextVAlign};

use super::{ChartConfig, paint_series};

/// Gap between the X axis line and the top of its tick labels.
const X_TICK_LABEL_OFFSET_PX: f64 = 5.0;
/// Gap between Y tick labels and the Y axis line.
const Y_TICK_LABEL_OFFSET_PX: f64 = 10.0;
/// Distance of each axis title from its surface edge.
const AXIS_TITLE_EDGE_OFFSET_PX: f64 = 15.0;

/// Progress of one render call. `Skipped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderStage {
    Idle,
    DomainComputed,
    ScaleBuilt,
    AxesDrawn,
    SeriesDrawn,
    LegendEmitted,
    Skipped,
}

/// Reportable render outcomes other than full success.
///
/// These are status values for the host to show a fallback message; they
/// are never raised through `ChartError`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RenderIssue {
    #[error("viewport too small")]
    ViewportTooSmall,
    #[error("no plottable data")]
    NoPlottableData,
    /// Axes were drawn but no series contributed a point.
    #[error("no series rendered")]
    NoSeriesRendered,
}

/// Everything a render call computed, handed back to the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderReport {
    pub stage: RenderStage,
    pub issue: Option<RenderIssue>,
    pub domain: Option<Domain>,
    pub x_ticks: Vec<XTick>,
    pub y_ticks: Vec<YTick>,
    pub drawn_counts: DrawnCounts,
    pub legend: Vec<LegendEntry>,
}

impl RenderReport {
    fn skipped(issue: RenderIssue) -> Self {
        Self {
            stage: RenderStage::Skipped,
            issue: Some(issue),
            domain: None,
            x_ticks: Vec::new(),
            y_ticks: Vec::new(),
            drawn_counts: DrawnCounts::new(),
            legend: Vec::new(),
        }
    }

    /// `true` when at least one series reached the surface.
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.issue.is_none()
    }

    /// `true` when nothing at all was drawn.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.stage == RenderStage::Skipped
    }
}

/// Orchestrates domain, scale, axes, series and legend for one surface.
///
/// Holds configuration only; every call recomputes domain, scale and tick
/// plans from its inputs, so consecutive renders never share state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChartRenderer {
    config: ChartConfig,
}

impl ChartRenderer {
    pub fn new(config: ChartConfig) -> ChartResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Viewport covering the whole `size` with the configured padding.
    #[must_use]
    pub fn viewport_for(&self, size: SurfaceSize) -> Viewport {
        Viewport::new(size.width, size.height).with_padding(self.config.padding)
    }

    /// Renders onto the full surface, sizing the viewport from the surface.
    pub fn render_to_surface<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        set: &SeriesSet,
    ) -> ChartResult<RenderReport> {
        let viewport = self.viewport_for(surface.viewport_size());
        self.render(surface, set, viewport)
    }

    /// Records the render into a fresh `RenderFrame` instead of a live surface.
    pub fn render_frame(
        &self,
        set: &SeriesSet,
        viewport: Viewport,
    ) -> ChartResult<(RenderFrame, RenderReport)> {
        let mut frame = RenderFrame::new(SurfaceSize::new(viewport.width, viewport.height));
        let report = self.render(&mut frame, set, viewport)?;
        Ok((frame, report))
    }

    pub fn render<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        set: &SeriesSet,
        viewport: Viewport,
    ) -> ChartResult<RenderReport> {
        if !viewport.is_drawable() {
            debug!(
                width = viewport.width,
                height = viewport.height,
                "skip render: viewport too small"
            );
            return Ok(RenderReport::skipped(RenderIssue::ViewportTooSmall));
        }

        let Some(domain) = compute_domain(set) else {
            debug!(
                time_len = set.time_axis().len(),
                series = set.series().len(),
                "skip render: no plottable data"
            );
            return Ok(RenderReport::skipped(RenderIssue::NoPlottableData));
        };
        let domain = domain.anchored(self.config.y_axis_anchor);
        let mut stage = RenderStage::DomainComputed;
        debug!(?domain, ?stage, "domain computed");

        let scale = build_scale(domain, viewport);
        stage = RenderStage::ScaleBuilt;
        debug!(?stage, "scale built");

        let x_ticks = plan_x_ticks(set.time_axis(), scale, self.config.max_x_labels);
        let y_ticks = plan_y_ticks(domain, scale, self.config.y_tick_count);

        surface.clear(viewport.bounds())?;
        self.draw_axes(surface, viewport, &x_ticks, &y_ticks)?;
        stage = RenderStage::AxesDrawn;
        debug!(
            ?stage,
            x_ticks = x_ticks.len(),
            y_ticks = y_ticks.len(),
            "axes drawn"
        );

        let drawn_counts = self.draw_series(surface, set, scale)?;
        stage = RenderStage::SeriesDrawn;

        // Unreachable while a domain requires a valid point and every valid
        // point counts as drawn; kept so a stricter painter degrades to axes.
        if drawn_counts.values().all(|&count| count == 0) {
            warn!(series = set.series().len(), "no series rendered; axes only");
            return Ok(RenderReport {
                stage,
                issue: Some(RenderIssue::NoSeriesRendered),
                domain: Some(domain),
                x_ticks,
                y_ticks,
                drawn_counts,
                legend: Vec::new(),
            });
        }

        let legend = build_legend(set.series(), &drawn_counts);
        stage = RenderStage::LegendEmitted;
        debug!(?stage, legend = legend.len(), "render complete");

        Ok(RenderReport {
            stage,
            issue: None,
            domain: Some(domain),
            x_ticks,
            y_ticks,
            drawn_counts,
            legend,
        })
    }

    fn draw_axes<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        viewport: Viewport,
        x_ticks: &[XTick],
        y_ticks: &[YTick],
    ) -> ChartResult<()> {
        let style = &self.config.style;
        let plot = viewport.plot_area();
        let origin = PixelPoint::new(plot.x, plot.bottom());

        surface.stroke_line(
            &[origin, PixelPoint::new(plot.right(), plot.bottom())],
            style.axis_color,
            style.axis_stroke_width,
        )?;
        surface.stroke_line(
            &[PixelPoint::new(plot.x, plot.y), origin],
            style.axis_color,
            style.axis_stroke_width,
        )?;

        for tick in x_ticks {
            surface.draw_text(&TextPrimitive::new(
                tick.label.as_str(),
                PixelPoint::new(tick.pixel_x, plot.bottom() + X_TICK_LABEL_OFFSET_PX),
                TextHAlign::Center,
                TextVAlign::Top,
                style.tick_font.clone(),
                style.label_color,
            ))?;
        }

        for tick in y_ticks {
            surface.draw_text(&TextPrimitive::new(
                tick.label.as_str(),
                PixelPoint::new(plot.x - Y_TICK_LABEL_OFFSET_PX, tick.pixel_y),
                TextHAlign::Right,
                TextVAlign::Middle,
                style.tick_font.clone(),
                style.label_color,
            ))?;
        }

        if !self.config.x_axis_title.is_empty() {
            surface.draw_text(&TextPrimitive::new(
                self.config.x_axis_title.as_str(),
                PixelPoint::new(
                    viewport.width / 2.0,
                    viewport.height - AXIS_TITLE_EDGE_OFFSET_PX,
                ),
                TextHAlign::Center,
                TextVAlign::Middle,
                style.title_font.clone(),
                style.label_color,
            ))?;
        }

        if !self.config.y_axis_title.is_empty() {
            surface.draw_text(
                &TextPrimitive::new(
                    self.config.y_axis_title.as_str(),
                    PixelPoint::new(AXIS_TITLE_EDGE_OFFSET_PX, viewport.height / 2.0),
                    TextHAlign::Center,
                    TextVAlign::Middle,
                    style.title_font.clone(),
                    style.label_color,
                )
                .vertical(),
            )?;
        }

        Ok(())
    }

    fn draw_series<S: DrawingSurface + ?Sized>(
        &self,
        surface: &mut S,
        set: &SeriesSet,
        scale: Scale,
    ) -> ChartResult<DrawnCounts> {
        let mut drawn_counts = DrawnCounts::with_capacity(set.series().len());
        for series in set.series() {
            let count = paint_series(surface, series, set.time_axis(), scale, &self.config.style)?;
            debug!(series = %series.id, count, "series drawn");
            drawn_counts.insert(series.id.clone(), count);
        }
        Ok(drawn_counts)
    }
}
