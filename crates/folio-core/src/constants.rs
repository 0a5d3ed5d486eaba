//! Application constants and configuration defaults
//!
//! Centralized location for magic numbers and default values

use std::time::Duration;

/// Section tracking defaults
pub mod nav {
    /// Scroll offset past which the navigation bar switches to its solid style
    pub const SCROLL_THRESHOLD: i64 = 50;

    /// Early-trigger margin: a section activates this far before its top edge
    pub const ACTIVATION_MARGIN: i64 = 100;
}

/// Contact form timing
pub mod contact {
    use super::*;

    /// Simulated send time before the form reports success
    pub const SEND_DELAY: Duration = Duration::from_millis(1500);

    /// How long the success state stays up before the form resets
    pub const RESET_DELAY: Duration = Duration::from_millis(3000);
}

/// Configuration locations
pub mod config {
    /// Config directory name
    pub const CONFIG_DIR_NAME: &str = ".folio";

    /// Config file name inside the config directory
    pub const CONFIG_FILE_NAME: &str = "config.toml";

    /// Logs subdirectory name
    pub const LOGS_DIR_NAME: &str = "logs";
}
