//! Fallible accessors for the browser globals the site touches.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlHeadElement, HtmlLinkElement, Window};

use crate::errors::SiteError;

pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::MissingGlobal("window"))
}

pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::MissingGlobal("document"))
}

pub fn head() -> Result<HtmlHeadElement, SiteError> {
    document()?.head().ok_or_else(|| SiteError::MissingElement("head".to_string()))
}

pub fn body() -> Result<HtmlElement, SiteError> {
    document()?.body().ok_or_else(|| SiteError::MissingElement("body".to_string()))
}

pub fn element_by_id(id: &str) -> Result<Element, SiteError> {
    document()?
        .get_element_by_id(id)
        .ok_or_else(|| SiteError::MissingElement(id.to_string()))
}

pub fn set_body_class(class: &str, enabled: bool) -> Result<(), SiteError> {
    let classes = body()?.class_list();
    if enabled {
        classes.add_1(class)?;
    } else {
        classes.remove_1(class)?;
    }
    Ok(())
}

/// Appends a `<link rel="preload" as="style">` hint to the document head.
pub fn preload_stylesheet(href: &str) -> Result<(), SiteError> {
    let link = document()?
        .create_element("link")?
        .dyn_into::<HtmlLinkElement>()
        .map_err(|_| SiteError::Js("created <link> is not an HtmlLinkElement".to_string()))?;
    link.set_rel("preload");
    link.set_as("style");
    link.set_href(href);
    head()?.append_child(&link)?;
    Ok(())
}
