//! Pre-auth pane toggle and role-based view dispatch.
//!
//! Two axes of state. Before a session exists the user is on one of two
//! panes (login or signup) and may toggle between them explicitly. The
//! instant a session exists the router is Home, and the active view is a
//! pure function of the session's role. The only way back out of Home is
//! an explicit logout, which also resets the pane to login.
//!
//! The router performs no authorization checking: it trusts the role
//! embedded in the session the backend issued.

use raterly_core::Role;

use crate::session::Session;

/// The pane shown before authentication.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthPane {
    /// Login form.
    #[default]
    Login,
    /// Signup form.
    Signup,
}

/// The role-specific top-level view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    /// Admin overview with filterable tables.
    Admin,
    /// Browsable, ratable store list.
    StoreList,
    /// Owner's per-store rating report.
    OwnerDashboard,
}

impl ActiveView {
    /// The view a role lands on. Pure: no session inspection beyond the
    /// role value.
    #[must_use]
    pub const fn for_role(role: Role) -> Self {
        match role {
            Role::Admin => Self::Admin,
            Role::User => Self::StoreList,
            Role::Owner => Self::OwnerDashboard,
        }
    }
}

/// Top-level screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// No session: one of the auth panes.
    Auth(AuthPane),
    /// Session present: the role's view.
    Home(Role),
}

/// The top-level screen state machine.
#[derive(Debug)]
pub struct ViewRouter {
    screen: Screen,
}

impl ViewRouter {
    /// Create a router from the session state restored at startup: Home
    /// for a restored session, the login pane otherwise.
    #[must_use]
    pub fn new(session: Option<&Session>) -> Self {
        let screen = session.map_or(Screen::Auth(AuthPane::Login), |session| {
            Screen::Home(session.user().role)
        });
        Self { screen }
    }

    /// Current screen.
    #[must_use]
    pub const fn screen(&self) -> Screen {
        self.screen
    }

    /// The auth pane, when no session is present.
    #[must_use]
    pub const fn auth_pane(&self) -> Option<AuthPane> {
        match self.screen {
            Screen::Auth(pane) => Some(pane),
            Screen::Home(_) => None,
        }
    }

    /// The role view, when a session is present.
    #[must_use]
    pub const fn active_view(&self) -> Option<ActiveView> {
        match self.screen {
            Screen::Auth(_) => None,
            Screen::Home(role) => Some(ActiveView::for_role(role)),
        }
    }

    /// Switch to the signup pane. No effect once a session exists.
    pub fn show_signup(&mut self) {
        if matches!(self.screen, Screen::Auth(_)) {
            self.screen = Screen::Auth(AuthPane::Signup);
        }
    }

    /// Switch to the login pane. No effect once a session exists.
    pub fn show_login(&mut self) {
        if matches!(self.screen, Screen::Auth(_)) {
            self.screen = Screen::Auth(AuthPane::Login);
        }
    }

    /// A session became present (login or signup succeeded): enter Home
    /// regardless of which pane was showing.
    pub fn session_started(&mut self, role: Role) {
        self.screen = Screen::Home(role);
    }

    /// The session was destroyed: back to the login pane.
    pub fn logged_out(&mut self) {
        self.screen = Screen::Auth(AuthPane::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen_is_login_pane() {
        let router = ViewRouter::new(None);
        assert_eq!(router.screen(), Screen::Auth(AuthPane::Login));
        assert_eq!(router.active_view(), None);
    }

    #[test]
    fn test_pane_toggle() {
        let mut router = ViewRouter::new(None);
        router.show_signup();
        assert_eq!(router.auth_pane(), Some(AuthPane::Signup));
        router.show_login();
        assert_eq!(router.auth_pane(), Some(AuthPane::Login));
    }

    #[test]
    fn test_each_role_gets_exactly_one_view() {
        for (role, expected) in [
            (Role::Admin, ActiveView::Admin),
            (Role::User, ActiveView::StoreList),
            (Role::Owner, ActiveView::OwnerDashboard),
        ] {
            let mut router = ViewRouter::new(None);
            router.session_started(role);
            assert_eq!(router.active_view(), Some(expected));
            assert_eq!(router.auth_pane(), None);
        }
    }

    #[test]
    fn test_session_entry_ignores_pane_state() {
        let mut router = ViewRouter::new(None);
        router.show_signup();
        router.session_started(Role::User);
        assert_eq!(router.screen(), Screen::Home(Role::User));
    }

    #[test]
    fn test_pane_unreachable_while_logged_in() {
        let mut router = ViewRouter::new(None);
        router.session_started(Role::Owner);
        router.show_signup();
        router.show_login();
        assert_eq!(router.screen(), Screen::Home(Role::Owner));
    }

    #[test]
    fn test_logout_resets_pane_to_login() {
        let mut router = ViewRouter::new(None);
        router.show_signup();
        router.session_started(Role::Admin);
        router.logged_out();
        assert_eq!(router.screen(), Screen::Auth(AuthPane::Login));
    }
}
