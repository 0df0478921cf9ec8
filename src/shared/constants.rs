// =============================================================================
// DATE FORMATS
// =============================================================================

/// File creation date on the dashboard cards, e.g. "Jan 2024"
pub const FILE_DATE_FORMAT: &str = "%b %Y";

/// Subscription renewal/cancellation date on the billing form, e.g. "31.12.2024"
pub const PLAN_DATE_FORMAT: &str = "%d.%m.%Y";

// =============================================================================
// NOTIFICATION COPY
// =============================================================================

pub const CHECKOUT_FAILED_TITLE: &str = "There was a problem...";
pub const CHECKOUT_FAILED_DESCRIPTION: &str = "Please try again in a moment";

pub const DELETE_FAILED_TITLE: &str = "Could not delete file";
pub const DELETE_FAILED_DESCRIPTION: &str = "Please try again in a moment";

// =============================================================================
// ROUTES
// =============================================================================

pub const DASHBOARD_PATH: &str = "/dashboard";
pub const BILLING_PATH: &str = "/dashboard/billing";

/// Query flag the dashboard reads after a failed delete redirect
pub const DELETE_FAILED_FLAG: &str = "delete_failed";

/// Display name used when the plan collaborator cannot be reached
pub const FALLBACK_PLAN_NAME: &str = "Free";
