use std::rc::Rc;

use crate::error::ViewportError;

/// Fraction of a target's area that must be in frame before it counts as visible.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Threshold(f64);

// Browsers may report the crossing notification a hair under the requested ratio.
const RATIO_TOLERANCE: f64 = 1e-3;

impl Threshold {
    pub const REGION: Threshold = Threshold(0.1);
    pub const METRIC: Threshold = Threshold(0.5);

    pub fn new(fraction: f64) -> Self {
        Threshold(fraction.clamp(0.0, 1.0))
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    pub fn is_met_by(self, ratio: f64) -> bool {
        ratio > 0.0 && ratio + RATIO_TOLERANCE >= self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverHandle(pub(crate) u64);

pub type OnEnter = Box<dyn FnMut()>;

/// Host primitive that reports when targets scroll into view.
///
/// `on_enter` runs every time the target goes from not intersecting to
/// intersecting at or above `threshold`, including immediately when the target
/// is already visible at registration. Latching is left to the caller.
pub trait Viewport {
    type Target;

    fn register(
        &self,
        target: &Self::Target,
        threshold: Threshold,
        on_enter: OnEnter,
    ) -> Result<ObserverHandle, ViewportError>;

    /// Stops callbacks for `handle` and releases its observation.
    fn unregister(&self, handle: ObserverHandle);
}

/// A set of registrations that are all unregistered when the watch is dropped.
pub struct Watch<V: Viewport> {
    viewport: Rc<V>,
    handles: Vec<ObserverHandle>,
}

impl<V: Viewport> Watch<V> {
    pub fn new(viewport: Rc<V>) -> Self {
        Self {
            viewport,
            handles: Vec::new(),
        }
    }

    pub fn register(
        &mut self,
        target: &V::Target,
        threshold: Threshold,
        on_enter: OnEnter,
    ) -> Result<ObserverHandle, ViewportError> {
        let handle = self.viewport.register(target, threshold, on_enter)?;
        self.handles.push(handle);
        Ok(handle)
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }
}

impl<V: Viewport> Drop for Watch<V> {
    fn drop(&mut self) {
        for handle in self.handles.drain(..) {
            self.viewport.unregister(handle);
        }
    }
}
