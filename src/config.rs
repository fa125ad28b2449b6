//! Configuration management with environment variable support.
//!
//! This module provides centralized configuration for Web Vision, supporting:
//! - Environment variables for all configurable values
//! - Sensible defaults matching the local dev-server setup
//! - A cached global configuration for library and binary callers
//!
//! # Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `WEB_VISION_BASE_URL` | Base URL of the served application | `http://127.0.0.1:4173` |
//! | `WEB_VISION_OUTPUT_DIR` | Directory for screenshot artifacts | `./verification` |
//! | `WEB_VISION_POLL_INTERVAL` | Predicate poll interval (ms) | `100` |
//! | `WEB_VISION_POLL_TIMEOUT` | Predicate poll budget (ms) | `10000` |
//! | `WEB_VISION_NAV_TIMEOUT` | Navigation/load wait budget (ms) | `30000` |
//! | `WEB_VISION_VIEWPORT` | Browser viewport size | `desktop` |
//!
//! # Example
//!
//! ```bash
//! # Point the harness at a different dev server
//! export WEB_VISION_BASE_URL="http://localhost:8000"
//!
//! # Collect artifacts somewhere else
//! export WEB_VISION_OUTPUT_DIR="/tmp/web-vision-artifacts"
//! ```

use std::env;
use std::sync::OnceLock;
use std::time::Duration;

// ============================================================================
// Default Values
// ============================================================================

/// Default base URL for the application under test
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:4173";

/// Default output directory for screenshot artifacts
pub const DEFAULT_OUTPUT_DIR: &str = "./verification";

/// Default predicate poll interval (milliseconds)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 100;

/// Default predicate poll budget (milliseconds)
pub const DEFAULT_POLL_TIMEOUT_MS: u64 = 10_000;

/// Default navigation/load wait budget (milliseconds)
pub const DEFAULT_NAV_TIMEOUT_MS: u64 = 30_000;

/// Default viewport preset
pub const DEFAULT_VIEWPORT: &str = "desktop";

/// Default viewport width (pixels)
pub const DEFAULT_VIEWPORT_WIDTH: u32 = 1280;

/// Default viewport height (pixels)
pub const DEFAULT_VIEWPORT_HEIGHT: u32 = 800;

// ============================================================================
// Environment Variable Names
// ============================================================================

/// Environment variable for the application base URL
pub const ENV_BASE_URL: &str = "WEB_VISION_BASE_URL";

/// Environment variable for the artifact output directory
pub const ENV_OUTPUT_DIR: &str = "WEB_VISION_OUTPUT_DIR";

/// Environment variable for the predicate poll interval
pub const ENV_POLL_INTERVAL: &str = "WEB_VISION_POLL_INTERVAL";

/// Environment variable for the predicate poll budget
pub const ENV_POLL_TIMEOUT: &str = "WEB_VISION_POLL_TIMEOUT";

/// Environment variable for the navigation wait budget
pub const ENV_NAV_TIMEOUT: &str = "WEB_VISION_NAV_TIMEOUT";

/// Environment variable for the browser viewport
pub const ENV_VIEWPORT: &str = "WEB_VISION_VIEWPORT";

// ============================================================================
// Configuration Getters (with caching)
// ============================================================================

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Get the global configuration (initialized from environment on first access)
pub fn get() -> &'static Config {
    CONFIG.get_or_init(Config::from_env)
}

/// Centralized configuration for Web Vision
#[derive(Debug, Clone)]
pub struct Config {
    /// Target application settings
    pub target: TargetSettings,
    /// Artifact output settings
    pub output: OutputSettings,
    /// Wait/timeout settings
    pub waits: WaitSettings,
    /// Browser settings
    pub browser: BrowserSettings,
}

/// Settings describing the application under test
#[derive(Debug, Clone)]
pub struct TargetSettings {
    /// Base URL the scenarios navigate to
    pub base_url: String,
}

/// Settings for screenshot artifact output
#[derive(Debug, Clone)]
pub struct OutputSettings {
    /// Directory where capture artifacts are written
    pub dir: String,
}

/// Wait and timeout budgets
#[derive(Debug, Clone)]
pub struct WaitSettings {
    /// Interval between predicate evaluations (milliseconds)
    pub poll_interval_ms: u64,
    /// Upper bound for predicate polls (milliseconds)
    pub poll_timeout_ms: u64,
    /// Upper bound for navigation/load waits (milliseconds)
    pub nav_timeout_ms: u64,
}

/// Browser launch settings
#[derive(Debug, Clone)]
pub struct BrowserSettings {
    /// Viewport width in pixels
    pub viewport_width: u32,
    /// Viewport height in pixels
    pub viewport_height: u32,
}

impl Config {
    /// Create configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            target: TargetSettings::from_env(),
            output: OutputSettings::from_env(),
            waits: WaitSettings::from_env(),
            browser: BrowserSettings::from_env(),
        }
    }

    /// Create configuration with all defaults (ignoring environment)
    pub fn defaults() -> Self {
        Self {
            target: TargetSettings::defaults(),
            output: OutputSettings::defaults(),
            waits: WaitSettings::defaults(),
            browser: BrowserSettings::defaults(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

impl TargetSettings {
    /// Create target settings from environment variables
    pub fn from_env() -> Self {
        Self {
            base_url: env::var(ENV_BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
        }
    }

    /// Create target settings with defaults
    pub fn defaults() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl OutputSettings {
    /// Create output settings from environment variables
    pub fn from_env() -> Self {
        Self {
            dir: env::var(ENV_OUTPUT_DIR).unwrap_or_else(|_| DEFAULT_OUTPUT_DIR.to_string()),
        }
    }

    /// Create output settings with defaults
    pub fn defaults() -> Self {
        Self {
            dir: DEFAULT_OUTPUT_DIR.to_string(),
        }
    }
}

impl WaitSettings {
    /// Create wait settings from environment variables
    pub fn from_env() -> Self {
        Self {
            poll_interval_ms: env::var(ENV_POLL_INTERVAL)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_POLL_INTERVAL_MS),
            poll_timeout_ms: env::var(ENV_POLL_TIMEOUT)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_POLL_TIMEOUT_MS),
            nav_timeout_ms: env::var(ENV_NAV_TIMEOUT)
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_NAV_TIMEOUT_MS),
        }
    }

    /// Create wait settings with defaults
    pub fn defaults() -> Self {
        Self {
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            poll_timeout_ms: DEFAULT_POLL_TIMEOUT_MS,
            nav_timeout_ms: DEFAULT_NAV_TIMEOUT_MS,
        }
    }

    /// Predicate poll interval as a [`Duration`]
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    /// Predicate poll budget as a [`Duration`]
    pub fn poll_timeout(&self) -> Duration {
        Duration::from_millis(self.poll_timeout_ms)
    }

    /// Navigation wait budget as a [`Duration`]
    pub fn nav_timeout(&self) -> Duration {
        Duration::from_millis(self.nav_timeout_ms)
    }
}

impl BrowserSettings {
    /// Create browser settings from environment variables
    pub fn from_env() -> Self {
        let viewport = env::var(ENV_VIEWPORT).unwrap_or_else(|_| DEFAULT_VIEWPORT.to_string());
        let (width, height) =
            parse_viewport(&viewport).unwrap_or((DEFAULT_VIEWPORT_WIDTH, DEFAULT_VIEWPORT_HEIGHT));

        Self {
            viewport_width: width,
            viewport_height: height,
        }
    }

    /// Create browser settings with defaults
    pub fn defaults() -> Self {
        Self {
            viewport_width: DEFAULT_VIEWPORT_WIDTH,
            viewport_height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Parse a viewport string into (width, height)
/// Supports: "desktop" (1280x800), "tablet" (768x1024), "mobile" (375x667), or "WxH"
pub fn parse_viewport(viewport: &str) -> Option<(u32, u32)> {
    match viewport.to_lowercase().as_str() {
        "desktop" => Some((1280, 800)),
        "tablet" => Some((768, 1024)),
        "mobile" => Some((375, 667)),
        custom => {
            let parts: Vec<&str> = custom.split('x').collect();
            if parts.len() == 2 {
                let w = parts[0].parse().ok()?;
                let h = parts[1].parse().ok()?;
                Some((w, h))
            } else {
                None
            }
        }
    }
}

/// Get the application base URL (convenience function)
pub fn base_url() -> String {
    get().target.base_url.clone()
}

/// Get the artifact output directory (convenience function)
pub fn output_dir() -> String {
    get().output.dir.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewport_presets() {
        assert_eq!(parse_viewport("desktop"), Some((1280, 800)));
        assert_eq!(parse_viewport("tablet"), Some((768, 1024)));
        assert_eq!(parse_viewport("mobile"), Some((375, 667)));
    }

    #[test]
    fn test_parse_viewport_custom() {
        assert_eq!(parse_viewport("1920x1080"), Some((1920, 1080)));
        assert_eq!(parse_viewport("800x600"), Some((800, 600)));
    }

    #[test]
    fn test_parse_viewport_invalid() {
        assert_eq!(parse_viewport("invalid"), None);
        assert_eq!(parse_viewport("1280"), None);
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::defaults();
        assert_eq!(config.target.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.output.dir, DEFAULT_OUTPUT_DIR);
        assert_eq!(config.waits.poll_interval_ms, DEFAULT_POLL_INTERVAL_MS);
        assert_eq!(config.browser.viewport_width, DEFAULT_VIEWPORT_WIDTH);
    }

    #[test]
    fn test_wait_settings_durations() {
        let waits = WaitSettings::defaults();
        assert_eq!(waits.poll_interval(), Duration::from_millis(100));
        assert_eq!(waits.nav_timeout(), Duration::from_millis(30_000));
    }
}
