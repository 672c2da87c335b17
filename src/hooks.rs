use std::rc::Rc;

use web_sys::Element;
use yew::prelude::*;

use crate::content::Metric;
use crate::reveal::{
    BrowserViewport, MetricWatch, RegionAction, RegionId, RegionWatch, Regions, TimeoutScheduler,
};

/// Page-lifetime observation resources shared by every revealing component.
#[derive(Clone)]
pub struct RevealContext {
    pub viewport: Rc<BrowserViewport>,
    pub scheduler: Rc<TimeoutScheduler>,
}

impl RevealContext {
    pub fn new() -> Self {
        Self {
            viewport: Rc::new(BrowserViewport::new()),
            scheduler: Rc::new(TimeoutScheduler),
        }
    }
}

impl Default for RevealContext {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for RevealContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.viewport, &other.viewport)
    }
}

/// Node refs for the four observed page regions.
#[derive(Default, PartialEq)]
pub struct RegionRefs {
    refs: [NodeRef; 4],
}

impl RegionRefs {
    pub fn get(&self, id: RegionId) -> NodeRef {
        self.refs[id as usize].clone()
    }

    fn mounted(&self) -> Vec<(RegionId, Element)> {
        RegionId::ALL
            .into_iter()
            .filter_map(|id| self.refs[id as usize].cast::<Element>().map(|el| (id, el)))
            .collect()
    }
}

/// Observes every region once on mount and returns their reveal flags.
#[hook]
pub fn use_region_reveal(refs: Rc<RegionRefs>) -> UseReducerHandle<Regions> {
    let regions = use_reducer_eq(Regions::new);
    let reveal = use_context::<RevealContext>();

    {
        let dispatcher = regions.dispatcher();
        use_effect_with_deps(
            move |_| {
                let watch = match reveal {
                    Some(reveal) => Some(RegionWatch::mount(
                        reveal.viewport,
                        refs.mounted(),
                        move |action| dispatcher.dispatch(action),
                    )),
                    None => {
                        log::warn!("No reveal context, showing all regions");
                        dispatcher.dispatch(RegionAction::RevealAll);
                        None
                    }
                };
                move || drop(watch)
            },
            (),
        );
    }

    regions
}

/// Width in percent for the bar whose container is `node`.
///
/// Starts at 0 and jumps to the metric's percentage once the container is half
/// visible and its stagger delay has passed; CSS interpolates the change.
#[hook]
pub fn use_metric_fill(node: NodeRef, metric: Metric) -> u8 {
    let width = use_state_eq(|| 0u8);
    let reveal = use_context::<RevealContext>();

    {
        let width = width.setter();
        use_effect_with_deps(
            move |metric| {
                let watch = match (reveal, node.cast::<Element>()) {
                    (Some(reveal), Some(container)) => Some(MetricWatch::mount(
                        reveal.viewport,
                        reveal.scheduler,
                        &container,
                        metric,
                        move |percent| width.set(percent),
                    )),
                    _ => {
                        width.set(metric.percentage.min(100));
                        None
                    }
                };
                move || drop(watch)
            },
            metric,
        );
    }

    *width
}
