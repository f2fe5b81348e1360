//! Application-level configuration constants.

// Search suggestions
pub const DEBOUNCE_MS: u32 = 300;
pub const MIN_QUERY_LEN: usize = 2;
pub const MAX_SUGGESTIONS: usize = 5;

// Filter form
pub const FILTER_SUBMIT_DELAY_MS: u32 = 500;
pub const FILTER_IDLE_LABEL: &str = "Apply Filters";
pub const FILTER_BUSY_LABEL: &str = "Filtering...";

// Comparison list
pub const COMPARISON_STORAGE_KEY: &str = "propertyComparison";
pub const MAX_COMPARISON: usize = 3;

// Notifications
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;

// Backend endpoints (relative to the site origin)
pub const API_BASE_URL: &str = "/api";
pub const SEARCH_PATH: &str = "/search/";
pub const NEWSLETTER_PATH: &str = "/newsletter/subscribe/";
pub const PROPERTY_PATH: &str = "/property/";
pub const CONTACT_ACTION: &str = "/contact/";

// Property modal
pub const QUICK_INQUIRY_DELAY_MS: u32 = 1_500;
pub const SALES_PHONE: &str = "+919876543210";
pub const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1560518883-ce09059eeffa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

// Messages shared by more than one form
pub const GENERIC_ERROR: &str = "An error occurred. Please try again.";
