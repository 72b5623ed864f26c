use candy_admin::cli::{self, Cli};
use candy_admin::config::AppConfig;
use candy_admin::logger::init_logger;
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let config = AppConfig::from_env();
    init_logger(&config.log_level, config.log_dir.as_deref())?;

    if let Err(e) = cli::run(cli, config).await {
        tracing::error!(error = %e, "Command failed");
        return Err(e);
    }
    Ok(())
}
