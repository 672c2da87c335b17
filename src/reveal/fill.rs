use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::scheduler::Scheduler;
use super::viewport::{Threshold, Viewport, Watch};
use crate::content::Metric;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FillPhase {
    #[default]
    Idle,
    /// Triggered, waiting out the stagger delay.
    Animating,
    Settled,
}

/// Display state of one rendered metric bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetricFill {
    target: u8,
    delay_ms: u32,
    phase: FillPhase,
}

impl MetricFill {
    pub fn new(metric: &Metric) -> Self {
        Self {
            target: metric.percentage.min(100),
            delay_ms: metric.delay(),
            phase: FillPhase::Idle,
        }
    }

    pub fn phase(&self) -> FillPhase {
        self.phase
    }

    /// First viewport entry. Returns the delay to wait before settling, or
    /// `None` if the bar was already triggered.
    pub fn enter(&mut self) -> Option<u32> {
        if self.phase != FillPhase::Idle {
            return None;
        }
        self.phase = FillPhase::Animating;
        Some(self.delay_ms)
    }

    pub fn settle(&mut self) {
        if self.phase == FillPhase::Animating {
            self.phase = FillPhase::Settled;
        }
    }

    pub fn width(&self) -> u8 {
        match self.phase {
            FillPhase::Settled => self.target,
            FillPhase::Idle | FillPhase::Animating => 0,
        }
    }
}

/// Drives one `MetricFill` from viewport entry to its target width.
///
/// Dropping the watch unregisters the observer and cancels a pending stagger timer.
pub struct MetricWatch<V: Viewport, S: Scheduler> {
    fill: Rc<Cell<MetricFill>>,
    pending: Rc<RefCell<Option<S::Pending>>>,
    _watch: Watch<V>,
}

impl<V, S> MetricWatch<V, S>
where
    V: Viewport,
    S: Scheduler + 'static,
    S::Pending: 'static,
{
    pub fn mount<F>(
        viewport: Rc<V>,
        scheduler: Rc<S>,
        target: &V::Target,
        metric: &Metric,
        on_width: F,
    ) -> Self
    where
        F: Fn(u8) + 'static,
    {
        let fill = Rc::new(Cell::new(MetricFill::new(metric)));
        let pending: Rc<RefCell<Option<S::Pending>>> = Rc::new(RefCell::new(None));
        let on_width: Rc<dyn Fn(u8)> = Rc::new(on_width);

        let trigger = {
            let fill = fill.clone();
            let pending = pending.clone();
            let on_width = on_width.clone();
            move || {
                let mut state = fill.get();
                let Some(delay) = state.enter() else {
                    return;
                };
                fill.set(state);
                if delay == 0 {
                    settle(&fill, &on_width);
                    return;
                }
                let fill = fill.clone();
                let on_width = on_width.clone();
                let task = scheduler.defer(delay, Box::new(move || settle(&fill, &on_width)));
                *pending.borrow_mut() = Some(task);
            }
        };

        let mut watch = Watch::new(viewport);
        if let Err(e) = watch.register(target, Threshold::METRIC, Box::new(trigger)) {
            log::warn!("Cannot observe metric '{}': {}, filling it", metric.label, e);
            let mut state = fill.get();
            if state.enter().is_some() {
                fill.set(state);
                settle(&fill, &on_width);
            }
        }

        Self {
            fill,
            pending,
            _watch: watch,
        }
    }

    pub fn phase(&self) -> FillPhase {
        self.fill.get().phase()
    }

    pub fn width(&self) -> u8 {
        self.fill.get().width()
    }
}

impl<V: Viewport, S: Scheduler> Drop for MetricWatch<V, S> {
    fn drop(&mut self) {
        self.pending.borrow_mut().take();
    }
}

fn settle(fill: &Cell<MetricFill>, on_width: &Rc<dyn Fn(u8)>) {
    let mut state = fill.get();
    state.settle();
    fill.set(state);
    on_width(state.width());
}
