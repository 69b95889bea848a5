use std::io::Write;
use std::sync::Arc;

use anyhow::{Result, bail};
use cafe_admin_core::DataPaths;
use cafe_admin_service::{DashboardController, DashboardElements, Mount};
use cafe_admin_storage::{FileStore, StorageAreas};
use clap::Subcommand;

pub(crate) mod dashboard;
pub(crate) mod inventory;
pub(crate) mod login;
pub(crate) mod shell;

use dashboard::{ProductCommand, ThemeCommand};
use inventory::InventoryCommand;

/// One browser tab: a fresh tab area over the on-disk persistent area.
pub(crate) struct Host {
    pub(crate) areas: StorageAreas,
    /// Whether the tab dies with this single command.
    pub(crate) one_shot: bool,
}

impl Host {
    pub(crate) fn open(paths: &DataPaths, one_shot: bool) -> Result<Self> {
        let file = FileStore::open(paths.local_storage_file())?;
        tracing::debug!(path = %file.path().display(), "persistent area opened");
        Ok(Self { areas: StorageAreas::with_persistent(Arc::new(file)), one_shot })
    }

    /// Mount the dashboard or fail when the guard redirects.
    pub(crate) fn dashboard(&self) -> Result<DashboardController> {
        match DashboardController::mount(&self.areas, Some(DashboardElements::default()))? {
            Mount::Ready(dashboard) => Ok(dashboard),
            Mount::Redirect(navigation) => {
                bail!("not logged in (redirected to {}), run `login` first", navigation.target())
            },
            Mount::Absent => bail!("dashboard page unavailable"),
        }
    }
}

#[derive(Subcommand)]
pub(crate) enum PageCommand {
    /// Log in with the demo credentials
    Login {
        #[arg(short, long)]
        username: String,
        #[arg(short, long)]
        password: String,
        /// Keep the session across restarts
        #[arg(long)]
        remember: bool,
    },
    /// End the session
    Logout,
    /// Show orders, products and theme
    Dashboard {
        /// Print the dashboard as HTML
        #[arg(long)]
        html: bool,
    },
    /// Manage the product list
    #[command(subcommand)]
    Product(ProductCommand),
    /// Show or switch the colour theme
    #[command(subcommand)]
    Theme(ThemeCommand),
    /// Coffee bean stock and sales
    #[command(subcommand)]
    Inventory(InventoryCommand),
}

pub(crate) fn execute(host: &Host, command: PageCommand, out: &mut impl Write) -> Result<()> {
    match command {
        PageCommand::Login { username, password, remember } => {
            login::run_login(host, username, password, remember, out)
        },
        PageCommand::Logout => login::run_logout(host, out),
        PageCommand::Dashboard { html } => dashboard::run_dashboard(host, html, out),
        PageCommand::Product(action) => dashboard::run_product(host, action, out),
        PageCommand::Theme(action) => dashboard::run_theme(host, action, out),
        PageCommand::Inventory(action) => inventory::run_inventory(host, action, out),
    }
}
