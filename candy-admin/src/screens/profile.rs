//! Header profile dropdown

use super::ViewContext;
use crate::components::{Button, ButtonVariant, Card};
use crate::error::AdminResult;
use crate::router::{Navigator, Route, Tab};
use crate::session::SessionStore;

pub struct ProfileMenu {
    sessions: SessionStore,
    is_open: bool,
}

impl ProfileMenu {
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            sessions,
            is_open: false,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Profile entry leads to the users tab
    pub fn open_profile(&mut self, nav: &mut Navigator) {
        self.is_open = false;
        nav.push(Route::Tab(Tab::Users));
    }

    /// Sign out and reset the stack to the login screen
    pub async fn sign_out(&mut self, nav: &mut Navigator) -> AdminResult<()> {
        self.is_open = false;
        self.sessions.sign_out().await?;
        nav.replace(Route::Login);
        Ok(())
    }

    pub async fn render(&self, ctx: &ViewContext) -> String {
        let state = self.sessions.snapshot().await;
        let email = state.email().unwrap_or_default().to_string();
        let badge = email.chars().next().map(|c| c.to_ascii_uppercase()).unwrap_or('U');
        if !self.is_open {
            return format!("({})", badge);
        }
        Card::titled(format!("({}) {}", badge, email))
            .line(Button::new(ctx.tr("auth.profile")).variant(ButtonVariant::Outline).render())
            .line(Button::new(ctx.tr("auth.signOut")).variant(ButtonVariant::Danger).render())
            .render()
    }
}
