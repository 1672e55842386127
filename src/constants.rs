//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Placeholder avatar base offered by the Add Friend form
pub const DEFAULT_AVATAR_URL: &str = "https://i.pravatar.cc/48";

/// Query parameter used to make each avatar reference unique
pub const AVATAR_ID_PARAM: &str = "u";

/// Directory under $HOME holding the optional config file
pub const CONFIG_DIR_NAME: &str = ".eat-n-split";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file name, written inside the configured log directory
pub const LOG_FILE_NAME: &str = "eat-n-split.log";

/// Application name
pub const APP_NAME: &str = "Eat-'n-Split";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");
