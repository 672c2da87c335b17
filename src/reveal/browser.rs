use std::cell::{Cell, RefCell};
use std::collections::HashMap;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
};

use super::viewport::{ObserverHandle, OnEnter, Threshold, Viewport};
use crate::error::ViewportError;

type EntriesCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

struct Observation {
    observer: IntersectionObserver,
    // Kept alive for as long as the observer may call it.
    _callback: EntriesCallback,
}

/// `Viewport` backed by the browser's `IntersectionObserver`, one observer per registration.
pub struct BrowserViewport {
    supported: bool,
    next_handle: Cell<u64>,
    observations: RefCell<HashMap<ObserverHandle, Observation>>,
}

impl BrowserViewport {
    pub fn new() -> Self {
        let supported = web_sys::window()
            .and_then(|window| {
                Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).ok()
            })
            .unwrap_or(false);
        if !supported {
            log::warn!(
                "IntersectionObserver unavailable, showing content without reveal animations"
            );
        }
        Self {
            supported,
            next_handle: Cell::new(0),
            observations: RefCell::new(HashMap::new()),
        }
    }
}

impl Default for BrowserViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport for BrowserViewport {
    type Target = Element;

    fn register(
        &self,
        target: &Element,
        threshold: Threshold,
        mut on_enter: OnEnter,
    ) -> Result<ObserverHandle, ViewportError> {
        if !self.supported {
            return Err(ViewportError::Unsupported);
        }

        let on_entries = move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                // is_met_by tolerates a ratio reported just under the threshold.
                if entry.is_intersecting() && threshold.is_met_by(entry.intersection_ratio()) {
                    on_enter();
                }
            }
        };
        let callback: EntriesCallback =
            Closure::wrap(Box::new(on_entries) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold.fraction()));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| ViewportError::Observer(format!("{:?}", e)))?;
        observer.observe(target);

        let handle = ObserverHandle(self.next_handle.get());
        self.next_handle.set(handle.0 + 1);
        self.observations.borrow_mut().insert(
            handle,
            Observation {
                observer,
                _callback: callback,
            },
        );
        Ok(handle)
    }

    fn unregister(&self, handle: ObserverHandle) {
        if let Some(observation) = self.observations.borrow_mut().remove(&handle) {
            observation.observer.disconnect();
        }
    }
}

impl Drop for BrowserViewport {
    fn drop(&mut self) {
        for (_, observation) in self.observations.borrow_mut().drain() {
            observation.observer.disconnect();
        }
    }
}
