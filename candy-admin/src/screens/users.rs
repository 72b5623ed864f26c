//! Users tab (read-only)

use async_trait::async_trait;
use shared::models::{UserProfile, UserRole};
use shared::util::relative_time;

use super::{Screen, ViewContext, header, list_body, settle};
use crate::error::AdminResult;
use crate::filter::SearchFilter;
use crate::hooks::UsersHook;
use crate::router::Tab;
use crate::theme::role_color;

fn full_name(u: &UserProfile) -> &str {
    &u.full_name
}

fn email(u: &UserProfile) -> &str {
    &u.email
}

fn role(u: &UserProfile) -> &str {
    u.role.as_str()
}

pub const USER_SEARCH: SearchFilter<UserProfile> = SearchFilter::new(&[full_name, email, role]);

pub fn role_label_key(role: UserRole) -> String {
    format!("users.role.{}", role.as_str())
}

pub struct UsersScreen {
    hook: UsersHook,
    search: String,
}

impl UsersScreen {
    pub fn new(hook: UsersHook) -> Self {
        Self {
            hook,
            search: String::new(),
        }
    }

    pub fn set_search(&mut self, query: impl Into<String>) {
        self.search = query.into();
    }

    pub async fn visible(&self) -> Vec<UserProfile> {
        let items = self.hook.collection().items().await;
        USER_SEARCH.apply(&items, &self.search).into_iter().cloned().collect()
    }
}

#[async_trait]
impl Screen for UsersScreen {
    fn tab(&self) -> Tab {
        Tab::Users
    }

    async fn refresh(&self) -> AdminResult<()> {
        settle(self.hook.fetch().await)
    }

    async fn render(&self, ctx: &ViewContext) -> String {
        let lines = self
            .visible()
            .await
            .iter()
            .map(|u| {
                let last_login = u
                    .last_login
                    .map(|at| relative_time(at, ctx.now))
                    .unwrap_or_else(|| "-".to_string());
                format!(
                    "({}) {}  {}  {} [{}]  {}: {}",
                    u.initial(),
                    u.full_name,
                    u.email,
                    ctx.tr(&role_label_key(u.role)),
                    role_color(u.role),
                    ctx.tr("users.lastLogin"),
                    last_login
                )
            })
            .collect();
        let error = self.hook.collection().error().await;
        let mut out = vec![header(ctx, "users.management", Some("users.subtitle"))];
        out.extend(list_body(ctx, error.as_deref(), lines));
        out.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, role: UserRole) -> UserProfile {
        UserProfile {
            id: email.into(),
            user_id: None,
            full_name: name.into(),
            email: email.into(),
            avatar_url: None,
            role,
            last_login: None,
        }
    }

    #[test]
    fn test_search_name_email_role() {
        let users = vec![
            user("Admin User", "admin@example.com", UserRole::Admin),
            user("Store Manager", "manager@example.com", UserRole::Manager),
            user("John Employee", "employee1@example.com", UserRole::Staff),
        ];
        assert_eq!(USER_SEARCH.apply(&users, "STAFF")[0].full_name, "John Employee");
        assert_eq!(USER_SEARCH.apply(&users, "example.com").len(), 3);
        assert_eq!(USER_SEARCH.apply(&users, "store").len(), 1);
    }
}
