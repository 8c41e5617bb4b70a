//! aliasd - alias registry HTTP server
//!
//! Serves `GET /aliases` and `POST /aliases` backed by PostgreSQL. Startup
//! failures, bind failures and an overrun shutdown drain exit nonzero.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::process::ExitCode;

use aliasd_server::config::{DEFAULT_DATABASE_URL, DEFAULT_PORT};
use aliasd_server::db::pool::DEFAULT_MAX_CONNECTIONS;
use aliasd_server::http::DRAIN_TIMEOUT;
use aliasd_server::Config;
use anyhow::{Context, Result};
use clap::Parser;

mod tracing_setup;

use tracing_setup::TracingConfig;

#[derive(Parser, Debug)]
#[command(
    name = "aliasd",
    author,
    version,
    about = "Alias registry over HTTP, backed by PostgreSQL"
)]
struct Cli {
    /// Port number for the server
    #[arg(long, short = 'p', default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    host: IpAddr,

    /// PostgreSQL connection URL
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    postgres_url: String,

    /// Maximum connections in the database pool
    #[arg(long, default_value_t = DEFAULT_MAX_CONNECTIONS)]
    max_connections: u32,

    /// Enable debug logging
    #[arg(long)]
    debug: bool,
}

impl Cli {
    fn config(&self) -> Config {
        Config {
            bind_addr: SocketAddr::new(self.host, self.port),
            database_url: self.postgres_url.clone(),
            max_connections: self.max_connections,
            drain_timeout: DRAIN_TIMEOUT,
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = cli.config();
    tracing::info!("Starting aliasd on {}", config.bind_addr);

    aliasd_server::serve(config).await.context("aliasd failed")
}

#[tokio::main]
async fn main() -> ExitCode {
    // Allow DATABASE_URL to come from a local .env
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_setup::init(&TracingConfig { debug: cli.debug }).ok();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
