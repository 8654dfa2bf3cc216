use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose hub/observer tracing when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

pub const PAGE_TITLE: &str = "Modena Performance | Sorocaba";

// Navbar swaps to the solid background past this offset (px).
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

// Floating CTA shows once this fraction of the viewport has been scrolled.
pub const FLOATING_BUTTON_VIEWPORT_RATIO: f64 = 0.8;

// Hero is fully transparent after this many pixels.
pub const HERO_FADE_DISTANCE: f64 = 700.0;
pub const HERO_CONTENT_FACTOR: f64 = 0.3;
pub const HERO_BACKGROUND_FACTOR: f64 = 0.5;

pub const MANIFESTO_PARALLAX_FACTOR: f64 = 0.15;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const STAGGER_STEP_MS: u32 = 150;

// One dispatch per frame at 60Hz.
pub const SCROLL_THROTTLE_MS: u32 = 16;

pub const WHATSAPP_URL: &str = "https://wa.me/5515991234567";
pub const INSTAGRAM_URL: &str = "https://instagram.com/modenaperformance";
pub const MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d117070.76707324301!2d-47.52495360699052!3d-23.515949174526563!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x94c5f9f38f427f7b%3A0x6334690623d9061c!2sSorocaba%2C%20SP!5e0!3m2!1spt-BR!2sbr!4v1709123456789!5m2!1spt-BR!2sbr";
