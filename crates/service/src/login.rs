//! Login page controller
//!
//! Demo-only gate: a single hardcoded credential pair, no hashing, and an
//! error hint that reveals the password. Do not reuse as an auth pattern.

use cafe_admin_core::Session;
use cafe_admin_core::constants::{
    DEMO_PASSWORD, DEMO_USERNAME, INVALID_CREDENTIALS_MESSAGE, MISSING_CREDENTIALS_MESSAGE,
};
use cafe_admin_storage::{SessionStore, StorageAreas};

use crate::error::ServiceError;
use crate::navigation::{Location, Mount, Navigation};

/// Elements present on the login page besides the form itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoginElements {
    pub password_toggle: bool,
}

/// Raw login form values as typed.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub remember: bool,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>, remember: bool) -> Self {
        Self { username: username.into(), password: password.into(), remember }
    }
}

pub struct LoginController {
    sessions: SessionStore,
    password_toggle: bool,
    password_visible: bool,
    error: Option<&'static str>,
}

impl LoginController {
    /// Attach to the login page.
    ///
    /// No form → [`Mount::Absent`]. An existing session replaces the page with
    /// the dashboard so back-navigation never lands on a stale login form.
    pub fn mount(areas: &StorageAreas, elements: Option<LoginElements>) -> Mount<Self> {
        let Some(elements) = elements else {
            return Mount::Absent;
        };
        let sessions = SessionStore::new(areas.clone());
        if sessions.is_logged_in() {
            tracing::debug!("already logged in, skipping login page");
            return Mount::Redirect(Navigation::Replace(Location::Dashboard));
        }
        Mount::Ready(Self {
            sessions,
            password_toggle: elements.password_toggle,
            password_visible: false,
            error: None,
        })
    }

    /// Flip the password input between masked and plain text.
    pub fn toggle_password_visibility(&mut self) {
        if self.password_toggle {
            self.password_visible = !self.password_visible;
        }
    }

    /// `type` attribute of the password input.
    pub fn password_input_type(&self) -> &'static str {
        if self.password_visible { "text" } else { "password" }
    }

    /// Accessible label of the toggle control, describing what a click does.
    pub fn toggle_label(&self) -> &'static str {
        if self.password_visible { "Hide password" } else { "Show password" }
    }

    /// Inline error text, if the last submit was rejected.
    pub fn error_message(&self) -> Option<&'static str> {
        self.error
    }

    /// Handle a form submit.
    ///
    /// Rejections set [`Self::error_message`] and return `Ok(None)`. On success
    /// a session is written (persistent when `remember`, tab otherwise) and the
    /// dashboard is pushed.
    ///
    /// # Errors
    /// Returns error if the session cannot be stored.
    pub fn submit(&mut self, form: &LoginForm) -> Result<Option<Navigation>, ServiceError> {
        let username = form.username.trim();
        let password = form.password.trim();

        if username.is_empty() || password.is_empty() {
            self.error = Some(MISSING_CREDENTIALS_MESSAGE);
            return Ok(None);
        }

        if !credentials_match(username, password) {
            tracing::warn!(username, "login rejected");
            self.error = Some(INVALID_CREDENTIALS_MESSAGE);
            return Ok(None);
        }

        self.sessions.write(&Session::started_now(username), form.remember)?;
        self.error = None;
        tracing::info!(username, remember = form.remember, "logged in");
        Ok(Some(Navigation::Assign(Location::Dashboard)))
    }
}

fn credentials_match(username: &str, password: &str) -> bool {
    username == DEMO_USERNAME && password == DEMO_PASSWORD
}
