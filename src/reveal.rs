//! Fade-in of page sections the first time they scroll into view.

use std::cell::RefCell;
use std::collections::HashMap;
use std::hash::Hash;
use std::rc::Rc;

use log::{debug, info, warn};
use stylist::GlobalStyle;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit, Window,
};

use crate::config;
use crate::dom;
use crate::errors::SiteError;

const REVEAL_KEY_ATTR: &str = "data-reveal-key";
const REVEALED_CLASS: &str = "animate-in";
const REVEALED_STYLE: &str = r#"
    .animate-in {
        opacity: 1 !important;
        transform: translateY(0) !important;
    }
"#;

/// Which observed elements have already been revealed.
///
/// A key flips from unseen to seen exactly once; there is no way back.
#[derive(Debug)]
pub struct RevealTracker<K> {
    revealed: HashMap<K, bool>,
}

impl<K> Default for RevealTracker<K> {
    fn default() -> Self {
        Self {
            revealed: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> RevealTracker<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn track(&mut self, key: K) {
        self.revealed.entry(key).or_insert(false);
    }

    /// True only for the first reveal of a tracked key.
    pub fn reveal(&mut self, key: &K) -> bool {
        match self.revealed.get_mut(key) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.get(key).copied().unwrap_or(false)
    }

    pub fn pending(&self) -> usize {
        self.revealed.values().filter(|seen| !**seen).count()
    }
}

type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Live observer for the animated elements. Disconnects when dropped.
pub struct RevealAnimator {
    observer: Option<IntersectionObserver>,
    _callback: Option<ObserverCallback>,
    _style: Option<GlobalStyle>,
}

impl RevealAnimator {
    pub fn attach() -> Result<Self, SiteError> {
        let window = dom::window()?;
        let elements = animated_elements(&dom::document()?)?;

        if !supports_intersection_observer(&window) {
            info!(
                "IntersectionObserver unavailable, showing {} elements without animation",
                elements.len()
            );
            for element in &elements {
                set_style(element, &[("opacity", "1"), ("transform", "translateY(0)")])?;
            }
            return Ok(Self {
                observer: None,
                _callback: None,
                _style: None,
            });
        }

        let tracker = Rc::new(RefCell::new(RevealTracker::new()));
        let callback: ObserverCallback = {
            let tracker = tracker.clone();
            Closure::new(move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    let Some(key) = reveal_key(&target) else {
                        continue;
                    };
                    if tracker.borrow_mut().reveal(&key) {
                        if let Err(err) = target.class_list().add_1(REVEALED_CLASS) {
                            warn!("Failed to reveal element {}: {:?}", key, err);
                        }
                        debug!("Revealed element {} ({} left)", key, tracker.borrow().pending());
                    }
                    observer.unobserve(&target);
                }
            })
        };

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
        options.set_root_margin(config::REVEAL_ROOT_MARGIN);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for (index, element) in elements.iter().enumerate() {
            let key = index as u32;
            element.set_attribute(REVEAL_KEY_ATTR, &key.to_string())?;
            set_style(
                element,
                &[
                    ("opacity", "0"),
                    ("transform", "translateY(30px)"),
                    ("transition", "opacity 0.6s ease, transform 0.6s ease"),
                ],
            )?;
            tracker.borrow_mut().track(key);
            observer.observe(element);
        }

        let style = GlobalStyle::new(REVEALED_STYLE)?;
        info!("Watching {} elements for scroll-in animation", elements.len());

        Ok(Self {
            observer: Some(observer),
            _callback: Some(callback),
            _style: Some(style),
        })
    }
}

impl Drop for RevealAnimator {
    fn drop(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

fn supports_intersection_observer(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

fn animated_elements(document: &Document) -> Result<Vec<HtmlElement>, SiteError> {
    let nodes = document.query_selector_all(config::REVEAL_SELECTOR)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

fn reveal_key(element: &Element) -> Option<u32> {
    element.get_attribute(REVEAL_KEY_ATTR)?.parse().ok()
}

fn set_style(element: &HtmlElement, properties: &[(&str, &str)]) -> Result<(), SiteError> {
    let style = element.style();
    for (name, value) in properties {
        style.set_property(name, value)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_fires_once() {
        let mut tracker = RevealTracker::new();
        tracker.track(3u32);

        assert!(!tracker.is_revealed(&3));
        assert!(tracker.reveal(&3));
        assert!(tracker.is_revealed(&3));
        assert!(!tracker.reveal(&3));
        assert!(!tracker.reveal(&3));
    }

    #[test]
    fn test_untracked_keys_are_ignored() {
        let mut tracker = RevealTracker::new();
        tracker.track(0u32);

        assert!(!tracker.reveal(&7));
        assert!(!tracker.is_revealed(&7));
        assert_eq!(tracker.pending(), 1);
    }

    #[test]
    fn test_tracking_again_does_not_reset() {
        let mut tracker = RevealTracker::new();
        tracker.track("story");
        assert!(tracker.reveal(&"story"));

        tracker.track("story");
        assert!(tracker.is_revealed(&"story"));
        assert!(!tracker.reveal(&"story"));
    }

    #[test]
    fn test_pending_counts_unseen() {
        let mut tracker = RevealTracker::new();
        for key in 0..4u32 {
            tracker.track(key);
        }
        tracker.reveal(&1);
        tracker.reveal(&2);
        tracker.reveal(&2);
        assert_eq!(tracker.pending(), 2);
    }
}
