//! Command-line front end
//!
//! Every subcommand drives the same screens and hooks the dashboard is
//! built from and prints the rendered view.

use chrono::Utc;
use clap::{Args, Parser, Subcommand};
use shared::models::{ContentRating, ContentType, OrderStatus, ProductUpdate};

use crate::app::App;
use crate::config::AppConfig;
use crate::demo::{DEMO_EMAIL, DEMO_PASSWORD};
use crate::error::AdminResult;
use crate::i18n::Language;
use crate::router::{Route, Tab};
use crate::screens::Screen;
use crate::theme::ColorScheme;
use crate::validation::ProductDraft;

#[derive(Parser, Debug)]
#[command(name = "candy-admin", version)]
#[command(about = "Candy store admin dashboard", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Use the seeded in-process backend instead of the hosted one
    #[arg(long, global = true, env = "CANDY_DEMO")]
    pub demo: bool,

    /// UI language (en, ar, he, ru)
    #[arg(long, global = true)]
    pub lang: Option<Language>,

    /// Dark color scheme
    #[arg(long, global = true)]
    pub dark: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Sign in and cache the session
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long, env = "CANDY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and forget the cached session
    Logout,
    /// Create an account
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(short, long)]
        confirm: String,
    },
    /// Product catalogue
    Products {
        #[command(subcommand)]
        action: ProductsCommand,
    },
    /// Customer orders
    Orders {
        #[command(subcommand)]
        action: OrdersCommand,
    },
    /// Staff accounts
    Users {
        #[command(subcommand)]
        action: UsersCommand,
    },
    /// Marketing content generation
    Content {
        #[command(subcommand)]
        action: ContentCommand,
    },
    /// Upcoming events and their templates
    Events,
    /// Suggested templates for the active language
    Templates,
    /// Sales analytics
    Analytics,
    /// Overview tiles
    Dashboard,
}

#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Case-insensitive search text
    #[arg(short, long, default_value = "")]
    pub search: String,
}

#[derive(Subcommand, Debug)]
pub enum ProductsCommand {
    List(SearchArgs),
    Add {
        #[arg(long)]
        name: String,
        #[arg(long, allow_hyphen_values = true)]
        price: String,
        #[arg(long, allow_hyphen_values = true)]
        inventory: String,
        #[arg(long)]
        category: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long, default_value = "")]
        image_url: String,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long, allow_hyphen_values = true)]
        price: Option<f64>,
        #[arg(long, allow_hyphen_values = true)]
        inventory: Option<i64>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        description: Option<String>,
    },
    Delete {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum OrdersCommand {
    List(SearchArgs),
    /// Set an order's status
    Status { id: String, status: OrderStatus },
}

#[derive(Subcommand, Debug)]
pub enum UsersCommand {
    List(SearchArgs),
}

#[derive(Subcommand, Debug)]
pub enum ContentCommand {
    Generate {
        #[arg(short, long)]
        prompt: String,
        #[arg(short = 't', long = "type", default_value = "social")]
        content_type: ContentType,
    },
    History,
    Rate { id: String, rating: ContentRating },
    Publish { id: String },
    SaveTemplate { id: String },
    Delete { id: String },
}

impl Command {
    fn needs_session(&self) -> bool {
        !matches!(self, Command::Login { .. } | Command::Logout | Command::Register { .. })
    }
}

/// Apply the global flags over the environment configuration
pub fn apply_flags(cli: &Cli, mut config: AppConfig) -> AppConfig {
    if let Some(language) = cli.lang {
        config.language = language;
    }
    if cli.dark {
        config.color_scheme = ColorScheme::Dark;
    }
    config
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<()> {
    let config = apply_flags(&cli, config);
    let mut app = if cli.demo {
        App::demo(config).await
    } else {
        App::connect(config)?
    };
    app.start().await;

    if cli.command.needs_session() && !app.sessions.snapshot().await.is_authenticated() {
        if app.demo_backend().is_none() {
            anyhow::bail!("Not signed in. Run `candy-admin login` first.");
        }
        app.sessions.sign_in(DEMO_EMAIL, DEMO_PASSWORD).await?;
        app.navigator.replace(Route::Tab(Tab::Dashboard));
    }

    let ctx = app.view_context();
    match cli.command {
        Command::Login { email, password } => {
            let mut screen = app.login_screen();
            screen.email = email;
            screen.password = password;
            if !screen.submit(&mut app.navigator).await {
                println!("{}", screen.render(&ctx));
                anyhow::bail!(screen.error().unwrap_or_default().to_string());
            }
            println!("Signed in ({})", app.navigator.current());
        }
        Command::Logout => {
            let mut menu = app.profile_menu();
            menu.sign_out(&mut app.navigator).await?;
            app.clear_collections().await;
            println!("Signed out");
        }
        Command::Register {
            email,
            password,
            confirm,
        } => {
            let mut screen = app.register_screen();
            screen.email = email;
            screen.password = password;
            screen.confirm_password = confirm;
            if !screen.submit(&mut app.navigator).await {
                println!("{}", screen.render(&ctx));
                anyhow::bail!(screen.error().unwrap_or_default().to_string());
            }
            println!("Account created. Sign in with `candy-admin login`.");
        }
        Command::Products { action } => products(&app, &ctx, action).await?,
        Command::Orders { action } => {
            let mut screen = app.orders_screen();
            match action {
                OrdersCommand::List(args) => screen.set_search(args.search),
                OrdersCommand::Status { id, status } => {
                    screen.refresh().await?;
                    screen.set_status(&id, status).await?;
                }
            }
            show(&screen, &ctx).await?;
        }
        Command::Users {
            action: UsersCommand::List(args),
        } => {
            let mut screen = app.users_screen();
            screen.set_search(args.search);
            show(&screen, &ctx).await?;
        }
        Command::Content { action } => content(&app, &ctx, action).await?,
        Command::Events | Command::Templates => {
            // The events and suggestions sections live on the content tab
            show(&app.content_screen(), &ctx).await?;
        }
        Command::Analytics => show(&app.analytics_screen(), &ctx).await?,
        Command::Dashboard => show(&app.dashboard_screen(), &ctx).await?,
    }
    Ok(())
}

async fn show(screen: &dyn Screen, ctx: &crate::screens::ViewContext) -> AdminResult<()> {
    screen.refresh().await?;
    println!("{}", screen.render(ctx).await);
    Ok(())
}

async fn products(app: &App, ctx: &crate::screens::ViewContext, action: ProductsCommand) -> anyhow::Result<()> {
    let mut screen = app.products_screen();
    match action {
        ProductsCommand::List(args) => screen.set_search(args.search),
        ProductsCommand::Add {
            name,
            price,
            inventory,
            category,
            description,
            image_url,
        } => {
            screen.refresh().await?;
            screen
                .set_draft(ProductDraft {
                    name,
                    description,
                    price,
                    inventory,
                    category,
                    image_url,
                })
                .await;
            let product = screen.submit().await?;
            println!("Added {} ({})", product.name, product.id);
        }
        ProductsCommand::Update {
            id,
            name,
            price,
            inventory,
            category,
            description,
        } => {
            let update = ProductUpdate {
                name,
                description,
                price,
                inventory,
                category,
                image_url: None,
            };
            let product = screen.hook().update(&id, update).await?;
            println!("Updated {}", product.name);
        }
        ProductsCommand::Delete { id } => {
            screen.delete(&id).await?;
            println!("Deleted {}", id);
        }
    }
    show(&screen, ctx).await?;
    Ok(())
}

async fn content(app: &App, ctx: &crate::screens::ViewContext, action: ContentCommand) -> anyhow::Result<()> {
    let screen = app.content_screen();
    let now = Utc::now();
    match action {
        ContentCommand::Generate { prompt, content_type } => {
            screen.set_prompt(prompt).await;
            screen.set_content_type(content_type).await;
            let row = screen.generate().await?;
            println!("{}\n\n[{}] {}", row.content, row.id, row.content_type);
            return Ok(());
        }
        ContentCommand::History => {}
        ContentCommand::Rate { id, rating } => {
            screen.resume(&id).await?;
            screen.rate(rating).await?;
        }
        ContentCommand::Publish { id } => {
            screen.resume(&id).await?;
            screen.publish(now).await?;
        }
        ContentCommand::SaveTemplate { id } => {
            screen.resume(&id).await?;
            screen.save_template().await?;
        }
        ContentCommand::Delete { id } => {
            screen.refresh().await?;
            screen.delete_history(&id).await?;
        }
    }
    show(&screen, ctx).await?;
    Ok(())
}
