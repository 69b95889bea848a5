use std::io::Write;

use anyhow::{Result, bail};
use cafe_admin_core::ProductId;
use cafe_admin_service::render::dashboard_html;
use cafe_admin_service::{DashboardController, ProductForm};
use clap::Subcommand;

use super::Host;

#[derive(Subcommand)]
pub(crate) enum ProductCommand {
    /// Append a product; an empty price counts as 0
    Add {
        name: String,
        #[arg(default_value = "", allow_hyphen_values = true)]
        price: String,
    },
    /// Remove a product by id
    Remove { id: ProductId },
    /// Remove the product at a list position
    RemoveAt { index: usize },
    /// List products
    List,
}

#[derive(Subcommand)]
pub(crate) enum ThemeCommand {
    Show,
    Toggle,
}

pub(crate) fn run_dashboard(host: &Host, html: bool, out: &mut impl Write) -> Result<()> {
    let dashboard = host.dashboard()?;
    if html {
        write!(out, "{}", dashboard_html(&dashboard)?)?;
        return Ok(());
    }

    writeln!(out, "Signed in as {}", dashboard.user())?;
    writeln!(out, "Theme: {}", dashboard.theme())?;
    writeln!(out)?;
    writeln!(out, "Orders")?;
    for order in dashboard.orders() {
        writeln!(out, "  {}  [{}] {}", order.summary, order.pill().css_class(), order.status)?;
    }
    writeln!(out)?;
    print_products(&dashboard, out)?;
    if let Some(year) = dashboard.year() {
        writeln!(out)?;
        writeln!(out, "© {year} Café Admin")?;
    }
    Ok(())
}

pub(crate) fn run_product(host: &Host, action: ProductCommand, out: &mut impl Write) -> Result<()> {
    let mut dashboard = host.dashboard()?;
    match action {
        ProductCommand::Add { name, price } => {
            let mut form = ProductForm::new(name, price);
            if !dashboard.add_product(&mut form)? {
                bail!("product not added: name must be set and price a non-negative number");
            }
            if let Some(row) = dashboard.products().last() {
                writeln!(out, "Added {} ({})", row.summary(), row.id)?;
            }
        },
        ProductCommand::Remove { id } => {
            if !dashboard.remove_product(id)? {
                bail!("no product with id {id}");
            }
            writeln!(out, "Removed {id}")?;
        },
        ProductCommand::RemoveAt { index } => {
            if !dashboard.remove_product_at(index)? {
                bail!("no product at position {index}");
            }
            writeln!(out, "Removed product at position {index}")?;
        },
        ProductCommand::List => print_products(&dashboard, out)?,
    }
    Ok(())
}

pub(crate) fn run_theme(host: &Host, action: ThemeCommand, out: &mut impl Write) -> Result<()> {
    let mut dashboard = host.dashboard()?;
    let theme = match action {
        ThemeCommand::Show => dashboard.theme(),
        ThemeCommand::Toggle => dashboard.toggle_theme()?,
    };
    writeln!(out, "Theme: {theme}")?;
    Ok(())
}

fn print_products(dashboard: &DashboardController, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Products")?;
    if dashboard.products().is_empty() {
        writeln!(out, "  (none)")?;
    }
    for row in dashboard.products() {
        writeln!(out, "  {}  {}  {}", row.index, row.id, row.summary())?;
    }
    Ok(())
}
