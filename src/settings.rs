use log::Level;
use web_sys::window;

/// Global application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Default log level for the application
    pub log_level: Level,

    /// Enable debug mode (verbose normalization diagnostics)
    pub debug_mode: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            log_level: Level::Info,
            debug_mode: false,
        }
    }
}

impl AppSettings {
    /// Create settings from the window environment
    pub fn from_environment() -> Self {
        let mut settings = Self::default();

        if let Some(window) = window() {
            if let Ok(hostname) = window.location().hostname() {
                settings.debug_mode = hostname == "localhost" || hostname == "127.0.0.1";

                // In development, use more verbose logging
                if settings.debug_mode {
                    settings.log_level = Level::Debug;
                }

                // Try to read from localStorage for custom settings
                if let Ok(Some(storage)) = window.local_storage() {
                    if let Ok(Some(log_level)) = storage.get_item("explorer_log_level") {
                        settings.log_level = match log_level.to_lowercase().as_str() {
                            "error" => Level::Error,
                            "warn" => Level::Warn,
                            "info" => Level::Info,
                            "debug" => Level::Debug,
                            "trace" => Level::Trace,
                            _ => settings.log_level,
                        };
                    }

                    if let Ok(Some(debug_mode)) = storage.get_item("explorer_debug_mode") {
                        settings.debug_mode = debug_mode.to_lowercase() == "true";
                    }
                }
            }
        }

        settings
    }
}

// Global settings instance using thread_local
use std::cell::RefCell;

thread_local! {
    static SETTINGS: RefCell<AppSettings> = RefCell::new(AppSettings::from_environment());
}

/// Get a copy of the current settings
pub fn get_settings() -> AppSettings {
    SETTINGS.with(|s| s.borrow().clone())
}

/// Initialize settings (call this at app startup)
pub fn init_settings() {
    SETTINGS.with(|s| {
        *s.borrow_mut() = AppSettings::from_environment();
    });
}
