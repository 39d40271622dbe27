use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};

use crate::dom;
use crate::errors::SiteError;

const ANCHOR_SELECTOR: &str = r##"a[href^="#"]"##;

/// The selector an in-page link points at, or `None` for the bare `#` and
/// for links leaving the page.
pub fn anchor_target(href: &str) -> Option<&str> {
    if href.starts_with('#') && href != "#" {
        Some(href)
    } else {
        None
    }
}

/// Document offset that puts the target's top edge right under the fixed header.
pub fn scroll_offset(target_top: f64, scroll_y: f64, header_height: f64) -> f64 {
    target_top + scroll_y - header_height
}

/// Delegated click listener turning in-page anchor jumps into smooth scrolls.
/// Removed from the document when dropped.
pub struct SmoothScroll {
    document: Document,
    listener: Closure<dyn FnMut(MouseEvent)>,
}

impl SmoothScroll {
    pub fn attach() -> Result<Self, SiteError> {
        let document = dom::document()?;
        let listener = Closure::<dyn FnMut(MouseEvent)>::new(|event: MouseEvent| {
            if let Err(err) = handle_click(&event) {
                warn!("Smooth scroll failed: {}", err);
            }
        });
        document.add_event_listener_with_callback("click", listener.as_ref().unchecked_ref())?;
        Ok(Self { document, listener })
    }
}

impl Drop for SmoothScroll {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback("click", self.listener.as_ref().unchecked_ref());
    }
}

fn handle_click(event: &MouseEvent) -> Result<(), SiteError> {
    let Some(clicked) = event.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
        return Ok(());
    };
    let Some(link) = clicked.closest(ANCHOR_SELECTOR)? else {
        return Ok(());
    };
    let Some(href) = link.get_attribute("href") else {
        return Ok(());
    };
    let Some(selector) = anchor_target(&href) else {
        return Ok(());
    };

    // An href that is not a valid selector is treated like a missing target
    // and left to the browser.
    let Some(destination) = dom::document()?.query_selector(selector).ok().flatten() else {
        debug!("No element for {}, using default anchor jump", selector);
        return Ok(());
    };

    event.prevent_default();

    let window = dom::window()?;
    let header_height = dom::element_by_id("header")
        .ok()
        .and_then(|header| header.dyn_into::<HtmlElement>().ok())
        .map(|header| f64::from(header.offset_height()))
        .unwrap_or(0.0);
    let top = scroll_offset(
        destination.get_bounding_client_rect().top(),
        window.page_y_offset()?,
        header_height,
    );

    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anchor_target() {
        assert_eq!(anchor_target("#team"), Some("#team"));
        assert_eq!(anchor_target("#newsletter"), Some("#newsletter"));
        assert_eq!(anchor_target("#"), None);
        assert_eq!(anchor_target(""), None);
        assert_eq!(anchor_target("/shop#top"), None);
        assert_eq!(anchor_target("https://example.com/#team"), None);
    }

    #[test]
    fn test_scroll_offset_compensates_header() {
        assert_eq!(scroll_offset(420.0, 1000.0, 80.0), 1340.0);
        assert_eq!(scroll_offset(-300.0, 1000.0, 80.0), 620.0);
    }

    #[test]
    fn test_scroll_offset_without_header() {
        assert_eq!(scroll_offset(250.0, 0.0, 0.0), 250.0);
    }
}
