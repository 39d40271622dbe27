use thiserror::Error;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::ErrorEvent;

use crate::dom;

#[derive(Debug, Error)]
pub enum SiteError {
    #[error("browser global `{0}` is not available")]
    MissingGlobal(&'static str),
    #[error("element `{0}` not found in document")]
    MissingElement(String),
    #[error("invalid countdown target `{0}`")]
    InvalidDate(String),
    #[error("DOM call failed: {0}")]
    Js(String),
    #[error("failed to inject style: {0}")]
    Style(String),
}

impl From<JsValue> for SiteError {
    fn from(value: JsValue) -> Self {
        SiteError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<stylist::Error> for SiteError {
    fn from(err: stylist::Error) -> Self {
        SiteError::Style(err.to_string())
    }
}

/// Logs every uncaught script error for the lifetime of the page.
///
/// Nothing is recovered here; a feature that threw simply stays broken.
pub fn install_global_error_handler() -> Result<(), SiteError> {
    let window = dom::window()?;
    let handler = Closure::<dyn FnMut(ErrorEvent)>::new(|event: ErrorEvent| {
        log::error!("An error occurred: {}", event.message());
    });
    window.add_event_listener_with_callback("error", handler.as_ref().unchecked_ref())?;
    handler.forget();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SiteError::MissingElement("days".to_string()).to_string(),
            "element `days` not found in document"
        );
        assert_eq!(
            SiteError::MissingGlobal("document").to_string(),
            "browser global `document` is not available"
        );
        assert_eq!(
            SiteError::InvalidDate("March 6".to_string()).to_string(),
            "invalid countdown target `March 6`"
        );
    }
}
