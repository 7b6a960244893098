use std::net::SocketAddr;
use std::sync::Arc;

use api::routes::AppState;
use api::seed::seed_roster;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use sea_orm::Database;
use tracing::{info, Level};

mod config;
mod http;

use config::AppConfig;

#[derive(Parser, Debug)]
#[command(name = "talent-bridge", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Run HTTP server
    Serve {
        #[arg(long, env = "BIND", default_value = "127.0.0.1:8080")]
        bind: String,
    },
    /// Run migrations (up|down|reset)
    Migrate {
        #[arg(long, default_value = "up")]
        action: String,
    },
    /// Seed the starter roster
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;
    let db = Arc::new(Database::connect(&config.database_url).await?);

    match cli.cmd {
        Cmd::Migrate { action } => {
            match action.as_str() {
                "up" => Migrator::up(db.as_ref(), None).await?,
                "down" => Migrator::down(db.as_ref(), None).await?,
                "reset" => Migrator::reset(db.as_ref()).await?,
                _ => eprintln!("Unknown action: {} (use up|down|reset)", action),
            }
            Ok(())
        }
        Cmd::Seed => {
            let inserted = seed_roster(db.as_ref()).await?;
            info!(inserted, "seed finished");
            Ok(())
        }
        Cmd::Serve { bind } => {
            Migrator::up(db.as_ref(), None).await?;
            let inserted = seed_roster(db.as_ref()).await?;
            if inserted > 0 {
                info!(inserted, "seeded starter roster");
            }
            let addr: SocketAddr = bind.parse()?;
            let state = AppState::new(db.clone());
            http::serve(addr, state, &config.cors_allowed_origins).await
        }
    }
}
