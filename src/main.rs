use anyhow::Result;
use clap::{Parser, Subcommand};
use smartlearn::{App, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "smartlearn")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Override the configured backend base URL
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Forget the stored sign-in
    Logout,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "smartlearn=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Logout) => {
            smartlearn::config::session::Session::clear()?;
            println!("Đã đăng xuất.");
        }
        None => {
            let mut config = Config::load()?;
            if let Some(api_url) = cli.api_url {
                config.api_base_url = api_url;
            }
            let mut app = App::new(config)?;
            app.run().await?;
        }
    }

    Ok(())
}
