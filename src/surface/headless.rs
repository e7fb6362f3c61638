use indexmap::IndexMap;
use serde::de::IgnoredAny;
use tracing::{debug, warn};

use crate::core::{BoundaryDataset, MapKey};
use crate::error::{MapError, MapResult};
use crate::interaction::{EventChannel, EventSink, MapEvent};
use crate::view::ViewConfiguration;

use super::ChartSurface;

/// One request received by a [`HeadlessSurface`], in arrival order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceCall {
    RegisterBoundary(MapKey),
    /// Carries the map key of the applied configuration.
    ApplyConfiguration(MapKey),
    Subscribe(EventChannel),
    Release,
}

/// In-process surface used by tests and headless hosts.
///
/// It keeps the engine contract without drawing anything: payloads must be
/// well-formed JSON, configurations must validate and reference a registered
/// map. Every request is logged, including ones received after release.
#[derive(Debug, Default)]
pub struct HeadlessSurface {
    boundaries: IndexMap<MapKey, BoundaryDataset>,
    current: Option<ViewConfiguration>,
    feature_sink: Option<EventSink>,
    background_sink: Option<EventSink>,
    calls: Vec<SurfaceCall>,
    render_count: usize,
    released: bool,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn calls(&self) -> &[SurfaceCall] {
        &self.calls
    }

    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    #[must_use]
    pub fn current_configuration(&self) -> Option<&ViewConfiguration> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn boundary(&self, key: &str) -> Option<&BoundaryDataset> {
        self.boundaries.get(key)
    }

    #[must_use]
    pub fn registered_keys(&self) -> Vec<&MapKey> {
        self.boundaries.keys().collect()
    }

    #[must_use]
    pub fn render_count(&self) -> usize {
        self.render_count
    }

    #[must_use]
    pub fn is_released(&self) -> bool {
        self.released
    }

    #[must_use]
    pub fn is_subscribed(&self, channel: EventChannel) -> bool {
        match channel {
            EventChannel::Feature => self.feature_sink.is_some(),
            EventChannel::Background => self.background_sink.is_some(),
        }
    }

    /// Simulates the engine reporting a click on the feature named `name`.
    ///
    /// Returns `true` when the click reached a subscriber.
    pub fn click_feature(&self, name: &str) -> bool {
        self.feature_sink
            .as_ref()
            .is_some_and(|sink| sink.deliver(MapEvent::feature(name)))
    }

    /// Simulates a click on empty canvas.
    pub fn click_background(&self) -> bool {
        self.background_sink
            .as_ref()
            .is_some_and(|sink| sink.deliver(MapEvent::BackgroundClicked))
    }

    fn ignore_after_release(&self, request: &str) -> bool {
        if self.released {
            warn!(request, "headless surface ignoring request after release");
        }
        self.released
    }
}

impl ChartSurface for HeadlessSurface {
    fn register_boundary(&mut self, key: &MapKey, dataset: &BoundaryDataset) -> MapResult<()> {
        self.calls.push(SurfaceCall::RegisterBoundary(key.clone()));
        if self.ignore_after_release("register_boundary") {
            return Ok(());
        }
        serde_json::from_str::<IgnoredAny>(dataset.payload()).map_err(|e| {
            MapError::Surface(format!("boundary dataset `{key}` is not valid json: {e}"))
        })?;
        self.boundaries.insert(key.clone(), dataset.clone());
        debug!(%key, bytes = dataset.len(), "registered boundary dataset");
        Ok(())
    }

    fn apply_configuration(&mut self, config: &ViewConfiguration) -> MapResult<()> {
        self.calls
            .push(SurfaceCall::ApplyConfiguration(config.map_key.clone()));
        if self.ignore_after_release("apply_configuration") {
            return Ok(());
        }
        config.validate()?;
        if !self.boundaries.contains_key(&config.map_key) {
            return Err(MapError::Surface(format!(
                "map `{}` has no registered boundary dataset",
                config.map_key
            )));
        }
        self.current = Some(config.clone());
        self.render_count += 1;
        Ok(())
    }

    fn on_feature_click(&mut self, sink: EventSink) {
        self.calls.push(SurfaceCall::Subscribe(EventChannel::Feature));
        if self.ignore_after_release("on_feature_click") {
            return;
        }
        self.feature_sink = Some(sink);
    }

    fn on_background_click(&mut self, sink: EventSink) {
        self.calls
            .push(SurfaceCall::Subscribe(EventChannel::Background));
        if self.ignore_after_release("on_background_click") {
            return;
        }
        self.background_sink = Some(sink);
    }

    fn release(&mut self) {
        self.calls.push(SurfaceCall::Release);
        if self.ignore_after_release("release") {
            return;
        }
        self.feature_sink = None;
        self.background_sink = None;
        self.boundaries.clear();
        self.current = None;
        self.released = true;
    }
}
