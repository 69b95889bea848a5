use std::io::Write;

use anyhow::Result;
use cafe_admin_core::{CoffeeType, parse_amount};
use cafe_admin_service::InventoryService;
use clap::Subcommand;

use super::Host;

#[derive(Subcommand)]
pub(crate) enum InventoryCommand {
    /// Receive stock (whole kilograms)
    Add {
        coffee_type: String,
        #[arg(allow_hyphen_values = true)]
        kg: String,
    },
    /// Record a sale (whole kilograms)
    Sell {
        coffee_type: String,
        #[arg(allow_hyphen_values = true)]
        kg: String,
    },
    /// Show stock and sales
    Show,
}

pub(crate) fn run_inventory(host: &Host, action: InventoryCommand, out: &mut impl Write) -> Result<()> {
    // back-office view, reachable only behind the login like the dashboard
    host.dashboard()?;
    let inventory = InventoryService::new(&host.areas);
    match action {
        InventoryCommand::Add { coffee_type, kg } => {
            let coffee_type: CoffeeType = coffee_type.parse()?;
            let kg = parse_amount(&kg)?;
            let quantity = inventory.add_stock(coffee_type, kg)?;
            writeln!(out, "{kg} kg of {coffee_type} added to inventory (now {quantity} kg)")?;
        },
        InventoryCommand::Sell { coffee_type, kg } => {
            let coffee_type: CoffeeType = coffee_type.parse()?;
            let kg = parse_amount(&kg)?;
            let receipt = inventory.sell(coffee_type, kg)?;
            writeln!(
                out,
                "{kg} kg of {coffee_type} is sold (inventory {} kg, total sales {} kg)",
                receipt.remaining_kg, receipt.total_sold_kg
            )?;
        },
        InventoryCommand::Show => {
            writeln!(out, "Current inventory:")?;
            for entry in inventory.stock()? {
                writeln!(out, "{}: {} kg", entry.coffee_type, entry.kilograms)?;
            }
            writeln!(out, "Sales data:")?;
            for entry in inventory.sales()? {
                writeln!(out, "{}: {} kg", entry.coffee_type, entry.kilograms)?;
            }
        },
    }
    Ok(())
}
