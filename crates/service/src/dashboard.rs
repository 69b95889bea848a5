//! Dashboard page controller
//!
//! Owns the rendered state of the dashboard: footer year, the demo order
//! board, the product rows and the theme applied to the document root.
//! Every mutation goes through storage first and then re-renders from what
//! was stored, so the rows always reflect the persisted list.

use chrono::{Datelike, Local};

use cafe_admin_core::{NewProduct, OrderStatus, ProductId, StatusPill, Theme, demo_orders};
use cafe_admin_storage::{ProductStore, SessionStore, StorageAreas, ThemeStore};

use crate::error::ServiceError;
use crate::navigation::{Location, Mount, Navigation};

/// Optional dashboard elements. The order board, product form, product list
/// and logout button are required; their absence is expressed by passing
/// `None` to [`DashboardController::mount`].
#[derive(Debug, Clone, Copy)]
pub struct DashboardElements {
    pub year_slot: bool,
    pub theme_toggle: bool,
}

impl Default for DashboardElements {
    fn default() -> Self {
        Self { year_slot: true, theme_toggle: true }
    }
}

/// Product form fields as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub price: String,
}

impl ProductForm {
    pub fn new(name: impl Into<String>, price: impl Into<String>) -> Self {
        Self { name: name.into(), price: price.into() }
    }

    pub fn reset(&mut self) {
        self.name.clear();
        self.price.clear();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRow {
    pub id: &'static str,
    pub summary: String,
    pub status: OrderStatus,
}

impl OrderRow {
    pub fn pill(&self) -> StatusPill {
        self.status.pill()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductRow {
    pub index: usize,
    pub id: ProductId,
    pub name: String,
    pub price: String,
}

impl ProductRow {
    pub fn summary(&self) -> String {
        format!("{} — ${}", self.name, self.price)
    }
}

pub struct DashboardController {
    sessions: SessionStore,
    products: ProductStore,
    themes: ThemeStore,
    user: String,
    theme_toggle: bool,
    year: Option<String>,
    orders: Vec<OrderRow>,
    product_rows: Vec<ProductRow>,
    theme: Theme,
}

impl DashboardController {
    /// Attach to the dashboard page.
    ///
    /// Missing elements → [`Mount::Absent`]. Without a session the page is
    /// replaced by the login page.
    ///
    /// # Errors
    /// Returns error if the product list or theme cannot be read from storage.
    pub fn mount(
        areas: &StorageAreas,
        elements: Option<DashboardElements>,
    ) -> Result<Mount<Self>, ServiceError> {
        let Some(elements) = elements else {
            return Ok(Mount::Absent);
        };
        let sessions = SessionStore::new(areas.clone());
        let Some(session) = sessions.read() else {
            tracing::debug!("no session, back to login");
            return Ok(Mount::Redirect(Navigation::Replace(Location::Login)));
        };

        let mut controller = Self {
            sessions,
            products: ProductStore::new(areas.persistent.clone()),
            themes: ThemeStore::new(areas.persistent.clone()),
            user: session.user,
            theme_toggle: elements.theme_toggle,
            year: elements.year_slot.then(|| Local::now().year().to_string()),
            orders: render_orders(),
            product_rows: Vec::new(),
            theme: Theme::Dark,
        };
        controller.render_products()?;
        controller.theme = controller.themes.load()?;
        Ok(Mount::Ready(controller))
    }

    /// Name of the logged-in user.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// Footer year, when the page has a slot for it.
    pub fn year(&self) -> Option<&str> {
        self.year.as_deref()
    }

    pub fn orders(&self) -> &[OrderRow] {
        &self.orders
    }

    pub fn products(&self) -> &[ProductRow] {
        &self.product_rows
    }

    /// Theme currently applied to the document root.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Handle a product form submit.
    ///
    /// Invalid input is dropped silently: returns `Ok(false)` and leaves both
    /// the list and the form untouched. On success the product is appended,
    /// the form is reset and the rows re-rendered.
    ///
    /// # Errors
    /// Returns error if storage fails.
    pub fn add_product(&mut self, form: &mut ProductForm) -> Result<bool, ServiceError> {
        let product = match NewProduct::parse(&form.name, &form.price) {
            Ok(product) => product.into_product(),
            Err(e) => {
                tracing::debug!(error = %e, "product form ignored");
                return Ok(false);
            },
        };
        tracing::info!(name = %product.name, id = %product.id, "product added");
        self.products.append(product)?;
        form.reset();
        self.render_products()?;
        Ok(true)
    }

    /// Handle a click on a row's remove control.
    ///
    /// Unknown identifiers (a row already removed, e.g. by a queued second
    /// click) remove nothing. Returns whether a product was removed.
    ///
    /// # Errors
    /// Returns error if storage fails.
    pub fn remove_product(&mut self, id: ProductId) -> Result<bool, ServiceError> {
        let removed = self.products.remove(id)?;
        self.render_products()?;
        Ok(removed.is_some())
    }

    /// Remove by rendered position instead of identifier.
    ///
    /// # Errors
    /// Returns error if storage fails.
    pub fn remove_product_at(&mut self, index: usize) -> Result<bool, ServiceError> {
        let removed = self.products.remove_at(index)?;
        self.render_products()?;
        Ok(removed.is_some())
    }

    /// Flip and persist the theme. No-op without a toggle control.
    ///
    /// # Errors
    /// Returns error if the flag cannot be stored.
    pub fn toggle_theme(&mut self) -> Result<Theme, ServiceError> {
        if !self.theme_toggle {
            return Ok(self.theme);
        }
        let next = self.theme.toggled();
        self.themes.save(next)?;
        self.theme = next;
        Ok(next)
    }

    /// Drop the session from both areas and replace the page with login.
    ///
    /// # Errors
    /// Returns error if the session cannot be removed.
    pub fn logout(self) -> Result<Navigation, ServiceError> {
        self.sessions.clear()?;
        tracing::info!(user = %self.user, "logged out");
        Ok(Navigation::Replace(Location::Login))
    }

    fn render_products(&mut self) -> Result<(), ServiceError> {
        self.product_rows = self
            .products
            .load()?
            .into_iter()
            .enumerate()
            .map(|(index, product)| ProductRow {
                index,
                id: product.id,
                price: product.display_price(),
                name: product.name,
            })
            .collect();
        Ok(())
    }
}

fn render_orders() -> Vec<OrderRow> {
    demo_orders()
        .iter()
        .map(|order| OrderRow {
            id: order.id,
            summary: format!("{} — {} · {}", order.id, order.customer, order.item),
            status: order.status,
        })
        .collect()
}
