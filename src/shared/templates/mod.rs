//! Page template management.
//!
//! Templates live in `templates/pages/` and use Jinja2 syntax. Views are plain
//! serde structs built by the feature handlers.

pub mod engine;

pub use engine::{render_page, TemplateError, BILLING_TEMPLATE, DASHBOARD_TEMPLATE};
