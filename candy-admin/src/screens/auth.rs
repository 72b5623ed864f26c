//! Login and registration forms

use shared::{AppError, ErrorCode};

use super::ViewContext;
use crate::components::{Button, ButtonVariant, Card, Input};
use crate::error::AdminError;
use crate::router::{Navigator, Route, Tab};
use crate::session::SessionStore;

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred. Please try again.";

fn banner(card: &mut Card, error: Option<&str>) {
    if let Some(error) = error {
        card.push(format!("! {}", error));
    }
}

pub struct LoginScreen {
    sessions: SessionStore,
    pub email: String,
    pub password: String,
    error: Option<String>,
    is_loading: bool,
}

impl LoginScreen {
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            sessions,
            email: String::new(),
            password: String::new(),
            error: None,
            is_loading: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Sign in and enter the app; returns whether navigation happened
    ///
    /// Bad credentials clear the password and keep the login screen.
    pub async fn submit(&mut self, nav: &mut Navigator) -> bool {
        if self.email.trim().is_empty() || self.password.is_empty() {
            self.error = Some(AppError::new(ErrorCode::RequiredField).message);
            return false;
        }
        self.is_loading = true;
        self.error = None;
        let result = self.sessions.sign_in(self.email.trim(), &self.password).await;
        self.is_loading = false;
        match result {
            Ok(_) => {
                nav.replace(Route::Tab(Tab::Dashboard));
                true
            }
            Err(e) => {
                self.error = Some(login_message(&e));
                self.password.clear();
                false
            }
        }
    }

    pub fn render(&self, ctx: &ViewContext) -> String {
        let mut card = Card::titled(ctx.tr("auth.signIn"));
        banner(&mut card, self.error.as_deref());
        card.push(Input::new(ctx.tr("auth.email")).value(&self.email).render());
        card.push(Input::new(ctx.tr("auth.password")).value(&self.password).secure().render());
        card.push(Button::new(ctx.tr("auth.signIn")).loading(self.is_loading).render());
        card.push(ctx.tr("auth.forgotPassword"));
        card.push(format!(
            "{} {}",
            ctx.tr("auth.noAccount"),
            Button::new(ctx.tr("auth.signUp")).variant(ButtonVariant::Outline).render()
        ));
        card.render()
    }
}

fn login_message(err: &AdminError) -> String {
    if err.is_auth() {
        AppError::new(ErrorCode::InvalidCredentials).message
    } else {
        UNEXPECTED_ERROR.to_string()
    }
}

pub struct RegisterScreen {
    sessions: SessionStore,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    error: Option<String>,
    is_loading: bool,
}

impl RegisterScreen {
    pub fn new(sessions: SessionStore) -> Self {
        Self {
            sessions,
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            error: None,
            is_loading: false,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Create the account and go back to login
    pub async fn submit(&mut self, nav: &mut Navigator) -> bool {
        if self.email.trim().is_empty() || self.password.is_empty() || self.confirm_password.is_empty() {
            self.error = Some(AppError::new(ErrorCode::RequiredField).message);
            return false;
        }
        if self.password != self.confirm_password {
            self.error = Some(AppError::new(ErrorCode::PasswordMismatch).message);
            self.clear_passwords();
            return false;
        }
        self.is_loading = true;
        self.error = None;
        let result = self.sessions.sign_up(self.email.trim(), &self.password).await;
        self.is_loading = false;
        match result {
            Ok(_) => {
                nav.replace(Route::Login);
                true
            }
            Err(e) => {
                self.error = Some(e.user_message());
                self.clear_passwords();
                false
            }
        }
    }

    fn clear_passwords(&mut self) {
        self.password.clear();
        self.confirm_password.clear();
    }

    pub fn render(&self, ctx: &ViewContext) -> String {
        let mut card = Card::titled(ctx.tr("auth.signUp"));
        banner(&mut card, self.error.as_deref());
        card.push(Input::new(ctx.tr("auth.email")).value(&self.email).render());
        card.push(Input::new(ctx.tr("auth.password")).value(&self.password).secure().render());
        card.push(
            Input::new(ctx.tr("auth.confirmPassword"))
                .value(&self.confirm_password)
                .secure()
                .render(),
        );
        card.push(Button::new(ctx.tr("auth.signUp")).loading(self.is_loading).render());
        card.push(ctx.tr("auth.hasAccount"));
        card.render()
    }
}
