use log::Level;

/// Vertical scroll offset (px) past which the header switches to its solid style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 100.0;

/// Next race start, interpreted in the browser's local time zone.
pub const RACE_START: &str = "2026-03-06 14:00:00";
pub const RACE_START_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const COUNTDOWN_TICK_MS: u32 = 1000;

pub const SUCCESS_MESSAGE_TTL_MS: u32 = 5000;

pub const REVEAL_SELECTOR: &str = ".story-card, .team-card, .product-card, .section-header";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px";

pub const FONT_STYLESHEET_URL: &str =
    "https://fonts.googleapis.com/css2?family=Titillium+Web:wght@300;400;600;700;900&display=swap";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
