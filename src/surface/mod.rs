mod headless;

pub use headless::{HeadlessSurface, SurfaceCall};

use crate::core::{BoundaryDataset, MapKey};
use crate::error::MapResult;
use crate::interaction::EventSink;
use crate::view::ViewConfiguration;

/// Capability surface of the charting engine that draws the map.
///
/// The view controller only talks to the engine through this trait, so hit
/// testing, projection and animation stay entirely on the engine side.
pub trait ChartSurface {
    /// Associates `dataset` with `key`, replacing any earlier registration.
    fn register_boundary(&mut self, key: &MapKey, dataset: &BoundaryDataset) -> MapResult<()>;

    /// Replaces the whole rendering configuration and redraws.
    fn apply_configuration(&mut self, config: &ViewConfiguration) -> MapResult<()>;

    /// Routes feature clicks into `sink`. Replaces the previous sink.
    fn on_feature_click(&mut self, sink: EventSink);

    /// Routes background clicks into `sink`. Replaces the previous sink.
    fn on_background_click(&mut self, sink: EventSink);

    /// Drops both sinks and frees engine resources.
    ///
    /// Calls made after release must be ignored without panicking.
    fn release(&mut self);
}
