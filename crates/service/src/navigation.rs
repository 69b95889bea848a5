use std::fmt::{Display, Formatter, Result as FmtResult};

use cafe_admin_core::constants::{DASHBOARD_PAGE, LOGIN_PAGE};

/// Page a controller can send the user to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Login,
    Dashboard,
}

impl Location {
    pub fn page(&self) -> &'static str {
        match self {
            Self::Login => LOGIN_PAGE,
            Self::Dashboard => DASHBOARD_PAGE,
        }
    }
}

impl Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.page())
    }
}

/// How the host should move to the next page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// Replace the current history entry; back does not return here.
    Replace(Location),
    /// Push a new history entry.
    Assign(Location),
}

impl Navigation {
    #[must_use]
    pub const fn target(self) -> Location {
        match self {
            Self::Replace(location) | Self::Assign(location) => location,
        }
    }
}

/// Result of attaching a controller to a page.
#[derive(Debug)]
pub enum Mount<C> {
    /// The page lacks this controller's elements; nothing was done.
    Absent,
    /// The page guard sent the user elsewhere.
    Redirect(Navigation),
    /// Controller is live.
    Ready(C),
}

impl<C> Mount<C> {
    pub fn ready(self) -> Option<C> {
        match self {
            Self::Ready(controller) => Some(controller),
            Self::Absent | Self::Redirect(_) => None,
        }
    }

    pub fn redirect(&self) -> Option<Navigation> {
        match self {
            Self::Redirect(navigation) => Some(*navigation),
            Self::Absent | Self::Ready(_) => None,
        }
    }
}
