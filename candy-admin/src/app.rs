//! Application wiring
//!
//! [`App`] owns the store, the session and one instance of every hook,
//! and hands out screens built on top of them.

use std::sync::Arc;

use candy_client::{GoTrueAuth, IdentityProvider, MemoryIdentity, MemoryStore, RemoteStore, RestClient, RestStore};
use chrono::Utc;

use crate::config::AppConfig;
use crate::content::{Clipboard, ContentProvider, ContentWorkflow, MemoryClipboard, SampleContentProvider};
use crate::demo;
use crate::error::AdminResult;
use crate::hooks::{
    ContentHistoryHook, EventTemplatesHook, OrdersHook, ProductsHook, TemplateSuggestionsHook, UsersHook,
};
use crate::i18n::{Locale, Translator};
use crate::router::{Navigator, Route};
use crate::screens::{
    AnalyticsScreen, ContentScreen, DashboardScreen, LoginScreen, OrdersScreen, ProductsScreen, ProfileMenu,
    RegisterScreen, UsersScreen, ViewContext,
};
use crate::session::{SessionCache, SessionStore};
use crate::theme::ColorScheme;

/// Handles kept when running against the in-process backend
pub struct DemoBackend {
    pub store: Arc<MemoryStore>,
    pub identity: Arc<MemoryIdentity>,
    pub user_id: String,
}

pub struct App {
    pub config: AppConfig,
    pub locale: Locale,
    pub scheme: ColorScheme,
    pub sessions: SessionStore,
    pub navigator: Navigator,
    store: Arc<dyn RemoteStore>,
    provider: Arc<dyn ContentProvider>,
    clipboard: Arc<dyn Clipboard>,
    products: ProductsHook,
    orders: OrdersHook,
    users: UsersHook,
    suggestions: TemplateSuggestionsHook,
    events: EventTemplatesHook,
    history: ContentHistoryHook,
    demo: Option<DemoBackend>,
}

impl App {
    /// Connect to the hosted backend, caching the session under the work dir
    pub fn connect(config: AppConfig) -> AdminResult<Self> {
        let client = RestClient::new(&config.client_config())?;
        let store: Arc<dyn RemoteStore> = Arc::new(RestStore::new(client.clone()));
        let identity: Arc<dyn IdentityProvider> = Arc::new(GoTrueAuth::new(client));
        let cache = SessionCache::new(&config.work_dir);
        tracing::info!(url = %config.store_url, "Using hosted backend");
        Ok(Self::from_parts(config, store, identity, Some(cache)))
    }

    /// Run against a seeded in-process backend; nothing is persisted
    pub async fn demo(config: AppConfig) -> Self {
        let store = Arc::new(MemoryStore::new());
        let identity = Arc::new(MemoryIdentity::new());
        let user_id = demo::seed(&store, &identity, Utc::now()).await;
        let mut app = Self::from_parts(config, store.clone(), identity.clone(), None);
        app.demo = Some(DemoBackend {
            store,
            identity,
            user_id,
        });
        app
    }

    pub fn from_parts(
        config: AppConfig,
        store: Arc<dyn RemoteStore>,
        identity: Arc<dyn IdentityProvider>,
        cache: Option<SessionCache>,
    ) -> Self {
        let locale = Locale::new(config.language);
        let sessions = SessionStore::new(identity, store.clone(), cache);
        Self {
            scheme: config.color_scheme,
            products: ProductsHook::new(store.clone()),
            orders: OrdersHook::new(store.clone()),
            users: UsersHook::new(store.clone()),
            suggestions: TemplateSuggestionsHook::new(store.clone(), sessions.clone(), locale.clone()),
            events: EventTemplatesHook::new(store.clone(), sessions.clone(), locale.clone()),
            history: ContentHistoryHook::new(store.clone(), sessions.clone()),
            provider: Arc::new(SampleContentProvider::new()),
            clipboard: Arc::new(MemoryClipboard::new()),
            navigator: Navigator::default(),
            config,
            locale,
            sessions,
            store,
            demo: None,
        }
    }

    pub fn with_provider(mut self, provider: Arc<dyn ContentProvider>) -> Self {
        self.provider = provider;
        self
    }

    pub fn with_clipboard(mut self, clipboard: Arc<dyn Clipboard>) -> Self {
        self.clipboard = clipboard;
        self
    }

    pub fn demo_backend(&self) -> Option<&DemoBackend> {
        self.demo.as_ref()
    }

    pub fn store(&self) -> &Arc<dyn RemoteStore> {
        &self.store
    }

    /// Restore the cached session and settle the navigator
    pub async fn start(&mut self) -> Route {
        self.sessions.restore().await;
        let state = self.sessions.snapshot().await;
        let route = self.navigator.resolve(&state);
        tracing::info!(route = %route, authenticated = state.is_authenticated(), "App started");
        route
    }

    pub fn translator(&self) -> Translator {
        Translator::new(self.locale.clone())
    }

    pub fn view_context(&self) -> ViewContext {
        ViewContext::new(self.translator(), self.scheme)
    }

    pub fn products(&self) -> &ProductsHook {
        &self.products
    }

    pub fn orders(&self) -> &OrdersHook {
        &self.orders
    }

    pub fn users(&self) -> &UsersHook {
        &self.users
    }

    pub fn suggestions(&self) -> &TemplateSuggestionsHook {
        &self.suggestions
    }

    pub fn events(&self) -> &EventTemplatesHook {
        &self.events
    }

    pub fn history(&self) -> &ContentHistoryHook {
        &self.history
    }

    pub fn content_workflow(&self) -> ContentWorkflow {
        ContentWorkflow::new(
            self.store.clone(),
            self.provider.clone(),
            self.sessions.clone(),
            self.locale.clone(),
            self.history.clone(),
        )
    }

    pub fn login_screen(&self) -> LoginScreen {
        LoginScreen::new(self.sessions.clone())
    }

    pub fn register_screen(&self) -> RegisterScreen {
        RegisterScreen::new(self.sessions.clone())
    }

    pub fn profile_menu(&self) -> ProfileMenu {
        ProfileMenu::new(self.sessions.clone())
    }

    pub fn dashboard_screen(&self) -> DashboardScreen {
        DashboardScreen::new(
            self.sessions.clone(),
            self.products.clone(),
            self.users.clone(),
            self.events.clone(),
        )
    }

    pub fn products_screen(&self) -> ProductsScreen {
        ProductsScreen::new(self.products.clone())
    }

    pub fn orders_screen(&self) -> OrdersScreen {
        OrdersScreen::new(self.orders.clone(), self.users.clone())
    }

    pub fn users_screen(&self) -> UsersScreen {
        UsersScreen::new(self.users.clone())
    }

    pub fn analytics_screen(&self) -> AnalyticsScreen {
        AnalyticsScreen::new(self.orders.clone(), self.products.clone())
    }

    pub fn content_screen(&self) -> ContentScreen {
        ContentScreen::new(
            self.content_workflow(),
            self.suggestions.clone(),
            self.events.clone(),
            self.clipboard.clone(),
        )
    }

    /// Drop every cached collection (after sign-out)
    pub async fn clear_collections(&self) {
        self.products.collection().clear().await;
        self.orders.collection().clear().await;
        self.users.collection().clear().await;
        self.suggestions.collection().clear().await;
        self.events.events().clear().await;
        self.events.templates().clear().await;
        self.history.collection().clear().await;
    }
}
