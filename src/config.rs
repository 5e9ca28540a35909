use log::Level;

/// Messaging service that receives contact-form transmissions.
pub const MESSAGING_DOMAIN: &str = "wa.me";

/// Number the contact form and the floating chat button hand off to.
pub const PRIMARY_PHONE: &str = "919346577461";

pub const SECONDARY_PHONE: &str = "919182239496";

/// Artificial "encrypting" pause before the hand-off, in milliseconds.
pub const SUBMIT_DELAY_MS: u32 = 1_500;

/// Scroll distance in pixels over which the hero parallax layers travel.
pub const HERO_SCROLL_RANGE: f64 = 800.0;

/// Scroll offset after which the navigation bar turns opaque.
pub const NAV_SOLID_AFTER: f64 = 80.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub fn chat_url(phone: &str) -> String {
    format!("https://{}/{}", MESSAGING_DOMAIN, phone)
}
