//! Routes and the session guard

use std::fmt;
use std::str::FromStr;

use shared::AppError;

use crate::session::SessionState;

/// Main app tabs, in tab-bar order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    Dashboard,
    Products,
    Orders,
    Users,
    Content,
    Analytics,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Dashboard,
        Tab::Products,
        Tab::Orders,
        Tab::Users,
        Tab::Content,
        Tab::Analytics,
    ];

    /// Translation key of the tab title
    pub fn title_key(&self) -> &'static str {
        match self {
            Tab::Dashboard => "navigation.dashboard",
            Tab::Products => "navigation.products",
            Tab::Orders => "navigation.orders",
            Tab::Users => "navigation.users",
            Tab::Content => "navigation.contentAI",
            Tab::Analytics => "navigation.analytics",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Tab::Dashboard => "dashboard",
            Tab::Products => "products",
            Tab::Orders => "orders",
            Tab::Users => "users",
            Tab::Content => "content",
            Tab::Analytics => "analytics",
        }
    }
}

impl FromStr for Tab {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| AppError::validation(format!("Unknown tab: {}", s)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Register,
    Tab(Tab),
}

impl Route {
    pub fn is_auth(&self) -> bool {
        matches!(self, Route::Login | Route::Register)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Login => f.write_str("/login"),
            Route::Register => f.write_str("/register"),
            Route::Tab(tab) => write!(f, "/tabs/{}", tab.as_str()),
        }
    }
}

/// What the root layout shows for a session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Guard {
    Spinner,
    AuthStack,
    App,
}

pub fn guard(state: &SessionState) -> Guard {
    if state.is_loading {
        Guard::Spinner
    } else if state.is_authenticated() {
        Guard::App
    } else {
        Guard::AuthStack
    }
}

/// Navigation stack with a session redirect
#[derive(Debug, Clone)]
pub struct Navigator {
    stack: Vec<Route>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}

impl Navigator {
    pub fn new(root: Route) -> Self {
        Self { stack: vec![root] }
    }

    pub fn current(&self) -> Route {
        self.stack.last().copied().unwrap_or(Route::Login)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn push(&mut self, route: Route) {
        tracing::debug!(route = %route, "push");
        self.stack.push(route);
    }

    /// Replace the whole stack (no way back)
    pub fn replace(&mut self, route: Route) {
        tracing::debug!(route = %route, "replace");
        self.stack.clear();
        self.stack.push(route);
    }

    /// Pop one route; the root stays
    pub fn back(&mut self) -> bool {
        if self.stack.len() > 1 {
            self.stack.pop();
            true
        } else {
            false
        }
    }

    /// Enforce the session guard on the current route
    ///
    /// App routes without a session go to Login; auth routes with a
    /// session go to the dashboard.
    pub fn resolve(&mut self, state: &SessionState) -> Route {
        match (guard(state), self.current()) {
            (Guard::AuthStack, route) if !route.is_auth() => self.replace(Route::Login),
            (Guard::App, route) if route.is_auth() => self.replace(Route::Tab(Tab::Dashboard)),
            _ => {}
        }
        self.current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use candy_client::{AuthUser, Session};
    use chrono::{Duration, Utc};

    fn signed_in() -> SessionState {
        SessionState {
            session: Some(Session {
                access_token: "t".into(),
                refresh_token: None,
                expires_at: Utc::now() + Duration::hours(1),
                user: AuthUser {
                    id: "u".into(),
                    email: None,
                },
            }),
            is_loading: false,
        }
    }

    fn signed_out() -> SessionState {
        SessionState {
            session: None,
            is_loading: false,
        }
    }

    #[test]
    fn test_guard() {
        assert_eq!(guard(&SessionState::default()), Guard::Spinner);
        assert_eq!(guard(&signed_out()), Guard::AuthStack);
        assert_eq!(guard(&signed_in()), Guard::App);
    }

    #[test]
    fn test_unauthenticated_redirects_to_login() {
        let mut nav = Navigator::new(Route::Tab(Tab::Orders));
        assert_eq!(nav.resolve(&signed_out()), Route::Login);
        assert_eq!(nav.depth(), 1);
    }

    #[test]
    fn test_authenticated_leaves_auth_stack() {
        let mut nav = Navigator::default();
        nav.push(Route::Register);
        assert_eq!(nav.resolve(&signed_in()), Route::Tab(Tab::Dashboard));
        assert!(!nav.back());
    }

    #[test]
    fn test_spinner_keeps_route() {
        let mut nav = Navigator::new(Route::Tab(Tab::Users));
        assert_eq!(nav.resolve(&SessionState::default()), Route::Tab(Tab::Users));
    }

    #[test]
    fn test_push_back() {
        let mut nav = Navigator::default();
        nav.push(Route::Register);
        assert_eq!(nav.current(), Route::Register);
        assert!(nav.back());
        assert_eq!(nav.current(), Route::Login);
        assert_eq!(Route::Tab(Tab::Content).to_string(), "/tabs/content");
        assert_eq!("Analytics".parse::<Tab>().unwrap(), Tab::Analytics);
    }
}
