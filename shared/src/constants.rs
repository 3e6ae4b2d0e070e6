pub const MOUNT_TARGET_ID: &str = "app";

pub const POSTHOG_KEY_VAR: &str = "VITE_PUBLIC_POSTHOG_KEY";
pub const POSTHOG_HOST_VAR: &str = "VITE_PUBLIC_POSTHOG_HOST";

/// Variables outside these prefixes never reach client code.
pub const PUBLIC_ENV_PREFIXES: [&str; 2] = ["VITE_", "PUBLIC_"];

pub const COUNTER_CLICKED_EVENT: &str = "counter_clicked";

pub const NO_DOCUMENT_ERROR: &str = "No browser document is available to mount into";
pub const TARGET_MISSING_ERROR: &str = "Mount target element not found";
pub const ANALYTICS_UNAVAILABLE_ERROR: &str = "Analytics SDK is not loaded on this page";
