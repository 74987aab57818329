//! Builder Constants
//!
//! Compile-time configuration. Runtime configuration lives in `Settings`.

/// Prefix of every persisted workspace record key (`<prefix>-<workspace>`)
pub const STORAGE_PREFIX: &str = "pagebuilder";

/// Workspace used when `settings.workspace` is blank
pub const DEFAULT_WORKSPACE: &str = "default";

/// Media type under which the palette drag carries the block id
pub const BLOCK_PAYLOAD_TYPE: &str = "text/block-type";

/// Media type for dragging CRM leads between stages
pub const LEAD_PAYLOAD_TYPE: &str = "text/plain";

/// Suggested filename for exported/published pages
pub const EXPORT_FILE_NAME: &str = "halaman.html";

/// Filename prefix for the settings backup (`<prefix><millis>.json`)
pub const SETTINGS_EXPORT_PREFIX: &str = "pagebuilder-settings-";

pub const DEFAULT_PAGE_ID: &str = "home";
pub const DEFAULT_PAGE_NAME: &str = "Beranda";
pub const DEFAULT_BRAND: &str = "Page Builder";
pub const DEFAULT_THEME: &str = "dark";
pub const DEFAULT_LANGUAGE: &str = "id";
pub const DEFAULT_WA_TEMPLATE: &str =
    "Halo, saya ingin beli {{product}} ({{qty}}x) total {{total}}.";

/// Document title used when the brand name is blank
pub const FALLBACK_TITLE: &str = "Landing";

/// Category assigned to products created without one
pub const DEFAULT_PRODUCT_CATEGORY: &str = "Umum";

/// Number of log records kept by the console logger
pub const LOG_BUFFER_CAPACITY: usize = 200;

/// Key remembering which workspace the last session used
pub const LAST_WORKSPACE_KEY: &str = "pagebuilder:last-workspace";
