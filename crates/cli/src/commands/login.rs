use std::io::Write;

use anyhow::{Result, bail};
use cafe_admin_service::{
    DashboardController, DashboardElements, LoginController, LoginElements, LoginForm, Mount,
};
use cafe_admin_storage::SessionStore;

use super::Host;

pub(crate) fn run_login(
    host: &Host,
    username: String,
    password: String,
    remember: bool,
    out: &mut impl Write,
) -> Result<()> {
    let mut login = match LoginController::mount(&host.areas, Some(LoginElements::default())) {
        Mount::Ready(login) => login,
        Mount::Redirect(navigation) => {
            let user = SessionStore::new(host.areas.clone()).read().map(|s| s.user).unwrap_or_default();
            writeln!(out, "Already logged in as {user} -> {}", navigation.target())?;
            return Ok(());
        },
        Mount::Absent => bail!("login page unavailable"),
    };

    let form = LoginForm { username, password, remember };
    let Some(navigation) = login.submit(&form)? else {
        bail!("{}", login.error_message().unwrap_or("login rejected"));
    };

    writeln!(out, "Logged in as {} -> {}", form.username.trim(), navigation.target())?;
    if !remember && host.one_shot {
        tracing::warn!("session is tab-scoped and ends with this command; use --remember or `shell`");
    }
    Ok(())
}

pub(crate) fn run_logout(host: &Host, out: &mut impl Write) -> Result<()> {
    match DashboardController::mount(&host.areas, Some(DashboardElements::default()))? {
        Mount::Ready(dashboard) => {
            let navigation = dashboard.logout()?;
            writeln!(out, "Logged out -> {}", navigation.target())?;
        },
        Mount::Redirect(_) | Mount::Absent => {
            // nothing to end, but make sure no half-readable record lingers
            SessionStore::new(host.areas.clone()).clear()?;
            writeln!(out, "Not logged in")?;
        },
    }
    Ok(())
}
