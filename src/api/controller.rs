use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::core::RegionCode;
use crate::error::{MapError, MapResult};
use crate::interaction::{EventChannel, EventQueue, MapEvent};
use crate::surface::ChartSurface;
use crate::view::ViewConfiguration;

use super::catalog::{DrilldownCatalog, FeatureClass, ScopeEntry};

/// Scope currently rendered by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewState {
    #[default]
    National,
    Province(RegionCode),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lifecycle {
    Created,
    Active,
    Disposed,
}

/// Outcome of handling one click message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    DrilledDown(RegionCode),
    ResetToNational,
    Ignored,
}

/// Drives a [`ChartSurface`] between the national view and province views.
///
/// The controller exclusively owns its surface. Every state change is issued
/// to the surface in the same call, and the new state is committed only once
/// the surface accepted the configuration. Dropping the controller disposes it.
pub struct MapViewController<S: ChartSurface> {
    surface: S,
    catalog: DrilldownCatalog,
    queue: EventQueue,
    state: ViewState,
    lifecycle: Lifecycle,
}

impl<S: ChartSurface> MapViewController<S> {
    /// Creates an idle controller. Nothing is sent to the surface until
    /// [`initialize`](Self::initialize).
    #[must_use]
    pub fn new(surface: S, catalog: DrilldownCatalog) -> Self {
        Self {
            surface,
            catalog,
            queue: EventQueue::default(),
            state: ViewState::National,
            lifecycle: Lifecycle::Created,
        }
    }

    /// Creates and initializes a controller in one step.
    pub fn mount(surface: S, catalog: DrilldownCatalog) -> MapResult<Self> {
        let mut controller = Self::new(surface, catalog);
        controller.initialize()?;
        Ok(controller)
    }

    /// Renders the national view and subscribes to both click channels.
    ///
    /// On failure the surface is released and the controller is disposed
    /// before the error is returned.
    pub fn initialize(&mut self) -> MapResult<()> {
        match self.lifecycle {
            Lifecycle::Created => {}
            Lifecycle::Active => return Err(MapError::AlreadyInitialized),
            Lifecycle::Disposed => return Err(MapError::Disposed),
        }

        if let Err(err) = self.show_national() {
            warn!(error = %err, "map initialization failed; releasing surface");
            self.dispose();
            return Err(err);
        }
        self.surface
            .on_feature_click(self.queue.sink(EventChannel::Feature));
        self.surface
            .on_background_click(self.queue.sink(EventChannel::Background));
        self.lifecycle = Lifecycle::Active;

        info!(
            drillable = self.catalog.drillable_codes().count(),
            "map view mounted"
        );
        Ok(())
    }

    /// Handles a click on the feature named `name`.
    ///
    /// Unknown names reset to the national view. Known regions without a
    /// drill-down scope are ignored. Drillable regions switch to their
    /// province view.
    pub fn on_feature_clicked(&mut self, name: &str) -> MapResult<Transition> {
        if !self.accepts_input("feature click")? {
            return Ok(Transition::Ignored);
        }

        match self.catalog.classify(name) {
            FeatureClass::Unknown => {
                debug!(name, "unrecognized feature; resetting to national view");
                self.show_national()?;
                Ok(Transition::ResetToNational)
            }
            FeatureClass::Known(code) => {
                debug!(name, %code, "region has no drill-down scope");
                Ok(Transition::Ignored)
            }
            FeatureClass::Drillable(code, entry) => {
                show_scope(&mut self.surface, entry)?;
                self.state = ViewState::Province(code);
                debug!(name, %code, "drilled down into province");
                Ok(Transition::DrilledDown(code))
            }
        }
    }

    /// Handles a click on empty canvas: always re-renders the national view.
    pub fn on_background_clicked(&mut self) -> MapResult<Transition> {
        if !self.accepts_input("background click")? {
            return Ok(Transition::Ignored);
        }
        self.show_national()?;
        debug!("background click; national view restored");
        Ok(Transition::ResetToNational)
    }

    pub fn handle_event(&mut self, event: MapEvent) -> MapResult<Transition> {
        match event {
            MapEvent::FeatureClicked { name } => self.on_feature_clicked(&name),
            MapEvent::BackgroundClicked => self.on_background_clicked(),
        }
    }

    /// Handles clicks queued by the surface, oldest first.
    ///
    /// Stops at the first failing transition; later clicks stay queued.
    pub fn dispatch_pending(&mut self) -> MapResult<Vec<Transition>> {
        let mut transitions = Vec::new();
        if self.lifecycle != Lifecycle::Active {
            return Ok(transitions);
        }
        while let Some(event) = self.queue.pop() {
            transitions.push(self.handle_event(event)?);
        }
        Ok(transitions)
    }

    /// Releases the surface and stops all further click handling.
    ///
    /// Safe to call more than once.
    pub fn dispose(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.surface.release();
        let dropped = self.queue.drain().len();
        self.lifecycle = Lifecycle::Disposed;
        self.state = ViewState::National;
        info!(dropped_clicks = dropped, "map view disposed");
    }

    #[must_use]
    pub fn view_state(&self) -> ViewState {
        self.state
    }

    #[must_use]
    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    #[must_use]
    pub fn catalog(&self) -> &DrilldownCatalog {
        &self.catalog
    }

    /// Configuration matching the current view state.
    #[must_use]
    pub fn current_configuration(&self) -> &ViewConfiguration {
        let entry = match self.state {
            ViewState::National => self.catalog.national(),
            ViewState::Province(code) => self
                .catalog
                .province(code)
                .unwrap_or_else(|| self.catalog.national()),
        };
        &entry.configuration
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    fn accepts_input(&self, input: &str) -> MapResult<bool> {
        match self.lifecycle {
            Lifecycle::Created => Err(MapError::NotInitialized),
            Lifecycle::Active => Ok(true),
            Lifecycle::Disposed => {
                warn!(input, "ignoring input after dispose");
                Ok(false)
            }
        }
    }

    fn show_national(&mut self) -> MapResult<()> {
        show_scope(&mut self.surface, self.catalog.national())?;
        self.state = ViewState::National;
        Ok(())
    }
}

fn show_scope<S: ChartSurface>(surface: &mut S, entry: &ScopeEntry) -> MapResult<()> {
    surface.register_boundary(entry.key(), &entry.dataset)?;
    surface.apply_configuration(&entry.configuration)
}

impl<S: ChartSurface> Drop for MapViewController<S> {
    fn drop(&mut self) {
        self.dispose();
    }
}
