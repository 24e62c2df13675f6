//! Tera template engine setup.
//!
//! The landing page template is compiled into the binary with `include_str!`
//! so the deployable artifact stays a single file. Tera's HTML auto-escaping
//! applies to everything interpolated into it, which keeps environment-
//! supplied values like `APP_NAME` from injecting markup.

use tera::Tera;

use crate::error::AppError;

/// Template name for the landing page.
pub const LANDING_TEMPLATE: &str = "index.html";

/// Initialize the Tera template engine with the embedded templates.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(LANDING_TEMPLATE, include_str!("../templates/index.html"))?;
    Ok(tera)
}
