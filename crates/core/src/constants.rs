//! Shared constants for cafe-admin.
//!
//! Storage keys and page names are part of the persisted format and must not
//! change between releases.

/// Key of the session record (tab-scoped or persistent area).
pub const SESSION_KEY: &str = "coffeeAdminSession";

/// Key of the product list (persistent area).
pub const PRODUCTS_KEY: &str = "coffeeAdminProducts";

/// Key of the theme flag (persistent area), stored as a raw string.
pub const THEME_KEY: &str = "coffeeAdminTheme";

/// Key of the stock and sales ledger (persistent area).
pub const INVENTORY_KEY: &str = "coffeeAdminInventory";

/// Demo-only credential pair accepted by the login form.
pub const DEMO_USERNAME: &str = "admin";
pub const DEMO_PASSWORD: &str = "coffee123";

pub const MISSING_CREDENTIALS_MESSAGE: &str = "Please enter both username and password.";

/// Deliberately leaks the demo password; not an auth pattern to copy.
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid credentials. Hint: admin / coffee123";

pub const LOGIN_PAGE: &str = "index.html";
pub const DASHBOARD_PAGE: &str = "dashboard.html";

/// File holding the persistent area inside the data directory.
pub const LOCAL_STORAGE_FILE: &str = "local-storage.json";

/// Application directory name under the platform data dir.
pub const APP_DIR_NAME: &str = "cafe-admin";
