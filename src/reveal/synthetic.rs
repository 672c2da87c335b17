//! In-memory viewport and clock for driving the reveal engine without a browser.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, HashMap};
use std::rc::Rc;

use super::scheduler::Scheduler;
use super::viewport::{ObserverHandle, OnEnter, Threshold, Viewport};
use crate::error::ViewportError;

struct Registration {
    target: &'static str,
    threshold: Threshold,
    intersecting: bool,
    on_enter: Option<OnEnter>,
}

/// Targets are plain names; tests move them in and out of view by hand.
#[derive(Default)]
pub struct SyntheticViewport {
    supported: bool,
    next_handle: Cell<u64>,
    ratios: RefCell<HashMap<&'static str, f64>>,
    registrations: RefCell<BTreeMap<ObserverHandle, Registration>>,
}

impl SyntheticViewport {
    pub fn new() -> Self {
        Self {
            supported: true,
            ..Default::default()
        }
    }

    /// A host without an intersection primitive.
    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn scroll_into_view(&self, target: &'static str, ratio: f64) {
        self.ratios.borrow_mut().insert(target, ratio);
        self.deliver(target, ratio);
    }

    pub fn scroll_out_of_view(&self, target: &'static str) {
        self.scroll_into_view(target, 0.0);
    }

    pub fn active_registrations(&self) -> usize {
        self.registrations.borrow().len()
    }

    fn deliver(&self, target: &'static str, ratio: f64) {
        let entering: Vec<ObserverHandle> = {
            let mut registrations = self.registrations.borrow_mut();
            registrations
                .iter_mut()
                .filter(|(_, r)| r.target == target)
                .filter_map(|(handle, r)| {
                    let now = r.threshold.is_met_by(ratio);
                    let entered = now && !r.intersecting;
                    r.intersecting = now;
                    entered.then_some(*handle)
                })
                .collect()
        };
        for handle in entering {
            self.fire(handle);
        }
    }

    // The callback is taken out while it runs so it may touch the viewport.
    fn fire(&self, handle: ObserverHandle) {
        let callback = self
            .registrations
            .borrow_mut()
            .get_mut(&handle)
            .and_then(|r| r.on_enter.take());
        if let Some(mut callback) = callback {
            callback();
            if let Some(r) = self.registrations.borrow_mut().get_mut(&handle) {
                r.on_enter = Some(callback);
            }
        }
    }
}

impl Viewport for SyntheticViewport {
    type Target = &'static str;

    fn register(
        &self,
        target: &Self::Target,
        threshold: Threshold,
        on_enter: OnEnter,
    ) -> Result<ObserverHandle, ViewportError> {
        if !self.supported {
            return Err(ViewportError::Unsupported);
        }
        let handle = ObserverHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);

        let ratio = self.ratios.borrow().get(target).copied().unwrap_or(0.0);
        let visible = threshold.is_met_by(ratio);
        self.registrations.borrow_mut().insert(
            handle,
            Registration {
                target: *target,
                threshold,
                intersecting: visible,
                on_enter: Some(on_enter),
            },
        );
        if visible {
            self.fire(handle);
        }
        Ok(handle)
    }

    fn unregister(&self, handle: ObserverHandle) {
        self.registrations.borrow_mut().remove(&handle);
    }
}

/// A clock that only moves when the test advances it.
#[derive(Default)]
pub struct ManualScheduler {
    now: Cell<u64>,
    tasks: RefCell<Vec<Deferred>>,
}

struct Deferred {
    due: u64,
    cancelled: Rc<Cell<bool>>,
    task: Option<Box<dyn FnOnce()>>,
}

/// Cancels its task when dropped, like a browser timeout handle.
pub struct PendingTask {
    cancelled: Rc<Cell<bool>>,
}

impl Drop for PendingTask {
    fn drop(&mut self) {
        self.cancelled.set(true);
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        let now = self.now.get() + ms;
        self.now.set(now);
        let due: Vec<Box<dyn FnOnce()>> = {
            let mut tasks = self.tasks.borrow_mut();
            let mut due = Vec::new();
            tasks.retain_mut(|deferred| {
                if deferred.cancelled.get() {
                    return false;
                }
                if deferred.due <= now {
                    due.extend(deferred.task.take());
                    return false;
                }
                true
            });
            due
        };
        for task in due {
            task();
        }
    }

    pub fn pending(&self) -> usize {
        self.tasks
            .borrow()
            .iter()
            .filter(|d| !d.cancelled.get())
            .count()
    }
}

impl Scheduler for ManualScheduler {
    type Pending = PendingTask;

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Pending {
        let cancelled = Rc::new(Cell::new(false));
        self.tasks.borrow_mut().push(Deferred {
            due: self.now.get() + u64::from(delay_ms),
            cancelled: cancelled.clone(),
            task: Some(task),
        });
        PendingTask { cancelled }
    }
}
