//! Template engine for the server-rendered dashboard pages (Jinja2 syntax).
//!
//! Page templates are compiled into the binary and registered once, on first use.

use minijinja::{AutoEscape, Environment, Value};
use serde::Serialize;
use std::sync::OnceLock;
use thiserror::Error;

/// Global template environment
static TEMPLATE_ENV: OnceLock<Environment<'static>> = OnceLock::new();

pub const DASHBOARD_TEMPLATE: &str = "pages/dashboard.html.jinja";
pub const BILLING_TEMPLATE: &str = "pages/billing.html.jinja";
const LAYOUT_TEMPLATE: &str = "pages/layout.html.jinja";

const TEMPLATES: &[(&str, &str)] = &[
    (
        LAYOUT_TEMPLATE,
        include_str!("../../../templates/pages/layout.html.jinja"),
    ),
    (
        DASHBOARD_TEMPLATE,
        include_str!("../../../templates/pages/dashboard.html.jinja"),
    ),
    (
        BILLING_TEMPLATE,
        include_str!("../../../templates/pages/billing.html.jinja"),
    ),
];

/// Errors that can occur during template operations
#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Template '{0}' not found")]
    NotFound(String),

    #[error("Failed to render template: {0}")]
    RenderError(String),
}

fn init_environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);

    for (name, source) in TEMPLATES {
        if let Err(e) = env.add_template(name, source) {
            tracing::warn!("Failed to load template {}: {}", name, e);
        } else {
            tracing::debug!("Loaded template: {}", name);
        }
    }

    env
}

fn get_environment() -> &'static Environment<'static> {
    TEMPLATE_ENV.get_or_init(init_environment)
}

/// Render a page template with a serializable view as its context.
pub fn render_page<V: Serialize>(template_name: &str, view: &V) -> Result<String, TemplateError> {
    let template = get_environment()
        .get_template(template_name)
        .map_err(|_| TemplateError::NotFound(template_name.to_string()))?;

    template
        .render(Value::from_serialize(view))
        .map_err(|e| TemplateError::RenderError(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;

    #[test]
    fn test_missing_template() {
        let result = render_page("definitely_not_a_real_template.jinja", &());
        assert!(matches!(result, Err(TemplateError::NotFound(_))));
    }

    #[test]
    fn test_all_pages_registered() {
        let env = get_environment();
        for (name, _) in TEMPLATES {
            assert!(env.get_template(name).is_ok(), "{} not registered", name);
        }
    }

    #[derive(Serialize)]
    struct Title {
        title: &'static str,
    }

    #[test]
    fn test_layout_escapes_html() {
        let html = render_page(
            LAYOUT_TEMPLATE,
            &Title {
                title: "<script>alert(1)</script>",
            },
        )
        .unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>alert(1)</script>"));
    }
}
