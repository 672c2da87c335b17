//! Scroll-triggered reveal engine.
//!
//! Regions latch `Hidden -> Revealed` on their first qualifying intersection
//! and metric bars latch `Idle -> Animating -> Settled`. Both fail open when the
//! host cannot observe intersections.

pub mod browser;
pub mod fill;
pub mod region;
pub mod scheduler;
pub mod viewport;

#[cfg(test)]
pub(crate) mod synthetic;

pub use browser::BrowserViewport;
pub use fill::{FillPhase, MetricFill, MetricWatch};
pub use region::{RegionAction, RegionId, RegionState, RegionWatch, Regions};
pub use scheduler::{Scheduler, TimeoutScheduler};
pub use viewport::{ObserverHandle, Threshold, Viewport, Watch};
