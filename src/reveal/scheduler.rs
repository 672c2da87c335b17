use gloo_timers::callback::Timeout;

/// Runs a task once after a delay. Dropping the returned value cancels the task.
pub trait Scheduler {
    type Pending;

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Pending;
}

/// Browser timers through `setTimeout`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Pending = Timeout;

    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Pending {
        Timeout::new(delay_ms, task)
    }
}
