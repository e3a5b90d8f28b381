use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::core::SeriesSet;
use crate::error::ChartResult;
use crate::render::DrawingSurface;

use super::{ChartRenderer, RenderReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostState {
    /// Surface layout has not settled; submissions are held.
    WaitingForSurface,
    Ready,
}

/// Owns a surface and sequences render requests against it.
///
/// Rendering waits for an explicit surface-ready signal instead of a timer.
/// Until then only the most recent submission is kept (last call wins), and
/// it is drawn as soon as the surface becomes ready.
#[derive(Debug)]
pub struct ChartHost<S: DrawingSurface> {
    renderer: ChartRenderer,
    surface: S,
    state: HostState,
    pending: Option<SeriesSet>,
    current: Option<SeriesSet>,
    last_report: Option<RenderReport>,
}

impl<S: DrawingSurface> ChartHost<S> {
    #[must_use]
    pub fn new(renderer: ChartRenderer, surface: S) -> Self {
        Self {
            renderer,
            surface,
            state: HostState::WaitingForSurface,
            pending: None,
            current: None,
            last_report: None,
        }
    }

    #[must_use]
    pub fn state(&self) -> HostState {
        self.state
    }

    #[must_use]
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn last_report(&self) -> Option<&RenderReport> {
        self.last_report.as_ref()
    }

    #[must_use]
    pub fn renderer(&self) -> &ChartRenderer {
        &self.renderer
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable surface access, e.g. to resize it before signalling readiness.
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Hands a new data bundle to the host.
    ///
    /// Renders immediately when the surface is ready; otherwise replaces any
    /// earlier pending bundle and returns `None`.
    pub fn submit(&mut self, set: SeriesSet) -> ChartResult<Option<RenderReport>> {
        match self.state {
            HostState::Ready => self.render_now(set).map(Some),
            HostState::WaitingForSurface => {
                if self.pending.replace(set).is_some() {
                    trace!("pending series set superseded before surface was ready");
                }
                Ok(None)
            }
        }
    }

    /// Signals that the surface exists and has its final size.
    ///
    /// Draws the pending bundle if there is one, else redraws the current
    /// bundle so a resized surface is never left stale.
    pub fn mark_surface_ready(&mut self) -> ChartResult<Option<RenderReport>> {
        self.state = HostState::Ready;
        debug!(size = ?self.surface.viewport_size(), "surface ready");
        match self.pending.take().or_else(|| self.current.take()) {
            Some(set) => self.render_now(set).map(Some),
            None => Ok(None),
        }
    }

    /// Signals that the surface went away (unmapped, being resized, ...).
    pub fn mark_surface_lost(&mut self) {
        self.state = HostState::WaitingForSurface;
        debug!("surface lost; holding submissions");
    }

    /// Redraws the current bundle, e.g. from a paint callback.
    pub fn redraw(&mut self) -> ChartResult<Option<RenderReport>> {
        if self.state != HostState::Ready {
            return Ok(None);
        }
        match self.current.take() {
            Some(set) => self.render_now(set).map(Some),
            None => Ok(None),
        }
    }

    fn render_now(&mut self, set: SeriesSet) -> ChartResult<RenderReport> {
        let result = self.renderer.render_to_surface(&mut self.surface, &set);
        self.current = Some(set);
        let report = result?;
        self.last_report = Some(report.clone());
        Ok(report)
    }
}

/// Thread-safe handle that serializes concurrent triggers on one host.
///
/// Each call renders to completion under the lock and fully resets the
/// surface, so the last call to acquire the lock defines what is shown.
#[derive(Debug)]
pub struct SharedChartHost<S: DrawingSurface> {
    inner: Arc<Mutex<ChartHost<S>>>,
}

impl<S: DrawingSurface> Clone for SharedChartHost<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: DrawingSurface> SharedChartHost<S> {
    #[must_use]
    pub fn new(host: ChartHost<S>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(host)),
        }
    }

    pub fn submit(&self, set: SeriesSet) -> ChartResult<Option<RenderReport>> {
        self.lock().submit(set)
    }

    pub fn mark_surface_ready(&self) -> ChartResult<Option<RenderReport>> {
        self.lock().mark_surface_ready()
    }

    pub fn mark_surface_lost(&self) {
        self.lock().mark_surface_lost();
    }

    pub fn redraw(&self) -> ChartResult<Option<RenderReport>> {
        self.lock().redraw()
    }

    #[must_use]
    pub fn last_report(&self) -> Option<RenderReport> {
        self.lock().last_report().cloned()
    }

    /// Runs `f` with exclusive access to the host.
    pub fn with_host<T>(&self, f: impl FnOnce(&mut ChartHost<S>) -> T) -> T {
        f(&mut self.lock())
    }

    // A panic mid-render leaves nothing worth protecting: the next render
    // clears and redraws the whole surface.
    fn lock(&self) -> MutexGuard<'_, ChartHost<S>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
