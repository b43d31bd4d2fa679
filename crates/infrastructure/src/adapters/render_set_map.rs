//! In-memory map adapter
//!
//! Records drawing commands into a [`RenderSet`] that the HTTP layer hands
//! to the browser-side map widget. Calling `render` discards everything
//! recorded before it.

use application::ports::{MapPort, MapView, Marker, Padding, Polyline};
use domain::BoundingBox;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// Requested camera fit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundsFit {
    /// Area to keep visible
    pub bounds: BoundingBox,
    /// Pixels kept free on each side
    pub padding: Padding,
}

/// Everything drawn since the last `render`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RenderSet {
    /// Initial camera position
    pub view: MapView,
    /// Markers in drawing order
    pub markers: Vec<Marker>,
    /// Polylines in drawing order
    pub polylines: Vec<Polyline>,
    /// Final camera fit, if one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fit: Option<BoundsFit>,
}

/// [`MapPort`] implementation that records a [`RenderSet`]
#[derive(Debug, Default)]
pub struct RenderSetMap {
    current: Mutex<RenderSet>,
}

impl RenderSetMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the current render set, leaving an empty one behind
    #[must_use]
    pub fn take(&self) -> RenderSet {
        std::mem::take(&mut *self.current.lock())
    }
}

impl MapPort for RenderSetMap {
    fn render(&self, view: MapView) {
        trace!(?view, "Starting new render set");
        *self.current.lock() = RenderSet {
            view,
            ..RenderSet::default()
        };
    }

    fn add_marker(&self, marker: Marker) {
        self.current.lock().markers.push(marker);
    }

    fn add_polyline(&self, polyline: Polyline) {
        self.current.lock().polylines.push(polyline);
    }

    fn fit_bounds(&self, bounds: BoundingBox, padding: Padding) {
        self.current.lock().fit = Some(BoundsFit { bounds, padding });
    }
}
