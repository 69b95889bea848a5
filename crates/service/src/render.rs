//! HTML rendering of the dashboard page.
//!
//! Output goes through an askama template with HTML escaping on, so product
//! names can carry markup characters safely.

use askama::Template;

use crate::dashboard::{DashboardController, OrderRow, ProductRow};
use crate::error::ServiceError;

#[derive(Template)]
#[template(path = "dashboard.html")]
struct DashboardTemplate<'a> {
    light: bool,
    user: &'a str,
    orders: &'a [OrderRow],
    products: &'a [ProductRow],
    year: Option<&'a str>,
}

/// Dashboard body: root theme class, both lists and the footer year.
///
/// # Errors
/// Returns error if the template fails to render.
pub fn dashboard_html(dashboard: &DashboardController) -> Result<String, ServiceError> {
    let page = DashboardTemplate {
        light: dashboard.theme().root_has_light_class(),
        user: dashboard.user(),
        orders: dashboard.orders(),
        products: dashboard.products(),
        year: dashboard.year(),
    };
    Ok(page.render()?)
}
