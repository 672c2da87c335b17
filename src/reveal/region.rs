use std::fmt;
use std::rc::Rc;

use yew::Reducible;

use super::viewport::{Threshold, Viewport, Watch};

/// Page sections whose entrance is gated on scroll visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RegionId {
    Distinction,
    Data,
    Protocol,
    Contact,
}

impl RegionId {
    pub const ALL: [RegionId; 4] = [
        RegionId::Distinction,
        RegionId::Data,
        RegionId::Protocol,
        RegionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RegionId::Distinction => "distinction",
            RegionId::Data => "data",
            RegionId::Protocol => "protocol",
            RegionId::Contact => "contact",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionState {
    #[default]
    Hidden,
    Revealed,
}

/// One-shot reveal latch per region. `Revealed` is terminal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Regions {
    states: [RegionState; 4],
}

impl Regions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self, id: RegionId) -> RegionState {
        self.states[id.index()]
    }

    pub fn is_revealed(&self, id: RegionId) -> bool {
        self.state(id) == RegionState::Revealed
    }

    /// Returns true only on the `Hidden -> Revealed` transition.
    pub fn reveal(&mut self, id: RegionId) -> bool {
        let state = &mut self.states[id.index()];
        if *state == RegionState::Revealed {
            return false;
        }
        *state = RegionState::Revealed;
        true
    }

    pub fn reveal_all(&mut self) -> bool {
        RegionId::ALL
            .into_iter()
            .fold(false, |changed, id| self.reveal(id) | changed)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionAction {
    Reveal(RegionId),
    RevealAll,
}

impl Reducible for Regions {
    type Action = RegionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        let changed = match action {
            RegionAction::Reveal(id) => next.reveal(id),
            RegionAction::RevealAll => next.reveal_all(),
        };
        if changed {
            log::debug!("Region state after {:?}: {:?}", action, next.states);
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Observes the region containers for as long as it is alive.
pub struct RegionWatch<V: Viewport> {
    _watch: Watch<V>,
}

impl<V: Viewport> RegionWatch<V> {
    /// Registers each target and feeds reveal actions into `sink`.
    ///
    /// Regions without a mounted target, or whose registration fails, are
    /// revealed straight away so content is never left hidden.
    pub fn mount<F>(viewport: Rc<V>, targets: Vec<(RegionId, V::Target)>, sink: F) -> Self
    where
        F: Fn(RegionAction) + Clone + 'static,
    {
        let mut watch = Watch::new(viewport);
        for id in RegionId::ALL {
            let Some((_, target)) = targets.iter().find(|(region, _)| *region == id) else {
                log::warn!("Region {} has no mounted element, showing it", id);
                sink(RegionAction::Reveal(id));
                continue;
            };
            let emit = sink.clone();
            let registered = watch.register(
                target,
                Threshold::REGION,
                Box::new(move || emit(RegionAction::Reveal(id))),
            );
            if let Err(e) = registered {
                log::warn!("Cannot observe region {}: {}, showing it", id, e);
                sink(RegionAction::Reveal(id));
            }
        }
        Self { _watch: watch }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::synthetic::SyntheticViewport;
    use std::cell::{Cell, RefCell};

    struct Harness {
        viewport: Rc<SyntheticViewport>,
        regions: Rc<RefCell<Regions>>,
        deliveries: Rc<Cell<u32>>,
    }

    impl Harness {
        fn new(viewport: SyntheticViewport) -> Self {
            Self {
                viewport: Rc::new(viewport),
                regions: Rc::new(RefCell::new(Regions::new())),
                deliveries: Rc::new(Cell::new(0)),
            }
        }

        fn mount(&self, targets: Vec<(RegionId, &'static str)>) -> RegionWatch<SyntheticViewport> {
            let regions = self.regions.clone();
            let deliveries = self.deliveries.clone();
            RegionWatch::mount(self.viewport.clone(), targets, move |action| {
                deliveries.set(deliveries.get() + 1);
                let mut regions = regions.borrow_mut();
                match action {
                    RegionAction::Reveal(id) => regions.reveal(id),
                    RegionAction::RevealAll => regions.reveal_all(),
                };
            })
        }

        fn state(&self, id: RegionId) -> RegionState {
            self.regions.borrow().state(id)
        }
    }

    fn all_targets() -> Vec<(RegionId, &'static str)> {
        RegionId::ALL.iter().map(|id| (*id, id.as_str())).collect()
    }

    #[test]
    fn regions_start_hidden() {
        let harness = Harness::new(SyntheticViewport::new());
        let _watch = harness.mount(all_targets());
        for id in RegionId::ALL {
            assert_eq!(harness.state(id), RegionState::Hidden);
        }
    }

    #[test]
    fn first_intersection_reveals_and_stays_revealed() {
        let harness = Harness::new(SyntheticViewport::new());
        let _watch = harness.mount(all_targets());

        harness.viewport.scroll_into_view("data", 0.2);
        assert_eq!(harness.state(RegionId::Data), RegionState::Revealed);
        assert_eq!(harness.state(RegionId::Protocol), RegionState::Hidden);

        harness.viewport.scroll_out_of_view("data");
        harness.viewport.scroll_into_view("data", 1.0);
        assert_eq!(harness.state(RegionId::Data), RegionState::Revealed);
    }

    #[test]
    fn reveal_reports_only_the_first_transition() {
        let mut regions = Regions::new();
        assert!(regions.reveal(RegionId::Protocol));
        assert!(!regions.reveal(RegionId::Protocol));
        assert!(regions.reveal_all());
        assert!(!regions.reveal_all());
    }

    #[test]
    fn below_threshold_keeps_region_hidden() {
        let harness = Harness::new(SyntheticViewport::new());
        let _watch = harness.mount(all_targets());
        harness.viewport.scroll_into_view("protocol", 0.05);
        assert_eq!(harness.state(RegionId::Protocol), RegionState::Hidden);
    }

    #[test]
    fn above_the_fold_region_reveals_on_mount() {
        let harness = Harness::new(SyntheticViewport::new());
        harness.viewport.scroll_into_view("distinction", 0.4);
        let _watch = harness.mount(all_targets());
        assert_eq!(harness.state(RegionId::Distinction), RegionState::Revealed);
    }

    #[test]
    fn teardown_stops_further_deliveries() {
        let harness = Harness::new(SyntheticViewport::new());
        let watch = harness.mount(all_targets());

        harness.viewport.scroll_into_view("contact", 1.0);
        assert_eq!(harness.deliveries.get(), 1);

        drop(watch);
        assert_eq!(harness.viewport.active_registrations(), 0);
        harness.viewport.scroll_out_of_view("contact");
        harness.viewport.scroll_into_view("contact", 1.0);
        harness.viewport.scroll_into_view("data", 1.0);
        assert_eq!(harness.deliveries.get(), 1);
    }

    #[test]
    fn missing_primitive_reveals_everything() {
        let harness = Harness::new(SyntheticViewport::unsupported());
        let _watch = harness.mount(all_targets());
        for id in RegionId::ALL {
            assert_eq!(harness.state(id), RegionState::Revealed);
        }
    }

    #[test]
    fn unmounted_target_is_revealed_immediately() {
        let harness = Harness::new(SyntheticViewport::new());
        let targets = all_targets()
            .into_iter()
            .filter(|(id, _)| *id != RegionId::Contact)
            .collect();
        let _watch = harness.mount(targets);
        assert_eq!(harness.state(RegionId::Contact), RegionState::Revealed);
        assert_eq!(harness.state(RegionId::Data), RegionState::Hidden);
    }

    #[test]
    fn reducer_returns_same_state_when_nothing_changes() {
        let state = Rc::new(Regions::new()).reduce(RegionAction::Reveal(RegionId::Data));
        let again = state.clone().reduce(RegionAction::Reveal(RegionId::Data));
        assert!(Rc::ptr_eq(&state, &again));
    }
}
