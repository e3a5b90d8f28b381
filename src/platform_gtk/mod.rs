use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::{ChartRenderer, RenderReport};
use crate::core::SeriesSet;
use crate::render::CairoContextSurface;

type ReportCallback = Box<dyn Fn(&RenderReport)>;

#[derive(Default)]
struct AdapterState {
    series: Option<SeriesSet>,
    on_report: Option<ReportCallback>,
}

/// Embeds the chart in a GTK `DrawingArea`.
///
/// GTK only invokes the draw function once the widget is realized and
/// allocated, which is the surface-ready signal; `set_series` just stores the
/// latest bundle and queues a redraw, so rapid updates collapse into one
/// paint of the newest data.
pub struct GtkChartAdapter {
    area: gtk::DrawingArea,
    state: Rc<RefCell<AdapterState>>,
}

impl GtkChartAdapter {
    #[must_use]
    pub fn new(renderer: ChartRenderer) -> Self {
        let area = gtk::DrawingArea::new();
        area.set_hexpand(true);
        area.set_vexpand(true);

        let state = Rc::new(RefCell::new(AdapterState::default()));
        let draw_state = Rc::clone(&state);
        area.set_draw_func(move |_area, context, width, height| {
            let state = draw_state.borrow();
            let Some(series) = state.series.as_ref() else {
                return;
            };
            let mut surface =
                CairoContextSurface::new(context, f64::from(width), f64::from(height))
                    .with_clear_color(renderer.config().style.background_color);
            match renderer.render_to_surface(&mut surface, series) {
                Ok(report) => {
                    if let Some(callback) = state.on_report.as_ref() {
                        callback(&report);
                    }
                }
                Err(err) => warn!(error = %err, "chart draw failed"),
            }
        });

        area.connect_resize(|area, _width, _height| area.queue_draw());

        Self { area, state }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.area
    }

    /// Replaces the displayed data; the newest bundle wins.
    pub fn set_series(&self, series: SeriesSet) {
        self.state.borrow_mut().series = Some(series);
        self.area.queue_draw();
    }

    /// Called after every paint with the legend and status of that paint.
    pub fn connect_report(&self, callback: impl Fn(&RenderReport) + 'static) {
        self.state.borrow_mut().on_report = Some(Box::new(callback));
    }
}
