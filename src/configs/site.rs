/// Element ids the behavior layer binds to. The views render the same ids.
pub mod ids {
    pub const THEME_TOGGLE: &str = "theme-toggle";
    pub const MOBILE_THEME_TOGGLE: &str = "mobile-theme-toggle";
    pub const SUN_ICON: &str = "sun-icon";
    pub const MOON_ICON: &str = "moon-icon";
    pub const MOBILE_SUN_ICON: &str = "mobile-sun-icon";
    pub const MOBILE_MOON_ICON: &str = "mobile-moon-icon";
    pub const MOBILE_MENU_BUTTON: &str = "mobile-menu-button";
    pub const MOBILE_MENU: &str = "mobile-menu";
    pub const CONTACT_FORM: &str = "contact-form";
    pub const SUCCESS_MESSAGE: &str = "success-message";
}

pub mod classes {
    pub const DARK: &str = "dark";
    pub const HIDDEN: &str = "hidden";
    pub const FORM_ERROR: &str = "form-error";
    pub const ERROR_MESSAGE: &str = "error-message";
    pub const ERROR_MESSAGE_STYLE: &str = "error-message text-red-500 text-sm mt-1";
    pub const LOADING: &str = "loading";
    pub const BACK_TO_TOP: &str = "back-to-top";
    pub const VISIBLE: &str = "visible";
    pub const PAGE_TRANSITION: &str = "page-transition";
    pub const LOADED: &str = "loaded";
}

pub const THEME_STORAGE_KEY: &str = "theme";

/// Scroll offset (px) above which the back-to-top button shows.
pub const SCROLL_THRESHOLD: f64 = 2.0;

pub const TRANSITION_START_DELAY_MS: u32 = 100;
pub const NAVIGATION_DELAY_MS: u32 = 250;
pub const SUCCESS_MESSAGE_DURATION_MS: u32 = 5_000;
pub const SIMULATED_LATENCY_MS: u32 = 1_000;

/// Link prefixes that always navigate natively.
pub const EXTERNAL_LINK_PREFIXES: [&str; 3] = ["tel:", "mailto:", "https://wa.me/"];

pub const SUBMIT_LABEL: &str = "Send Message";
pub const SENDING_LABEL: &str = "Sending...";
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Contact endpoint baked in at build time. Without one the form falls back
/// to the simulated submission.
pub fn contact_endpoint() -> Option<String> {
    match option_env!("CONTACT_ENDPOINT") {
        Some(endpoint) if !endpoint.trim().is_empty() => {
            log::info!("Contact form posts to {}", endpoint);
            Some(endpoint.trim().to_string())
        }
        _ => {
            log::warn!("CONTACT_ENDPOINT not set, using simulated contact submission");
            None
        }
    }
}

/// Browser console log level, overridable with `SITE_LOG_LEVEL` at build time.
pub fn log_level() -> log::Level {
    option_env!("SITE_LOG_LEVEL")
        .and_then(|level| level.parse().ok())
        .unwrap_or(log::Level::Info)
}
