// SPDX-License-Identifier: AGPL-3.0-only
// Minimal bootstrap; all handlers reside in routes.
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};
use vizier::ChartStudio;

mod routes;

#[derive(Parser, Debug, Clone)]
#[command(name = "vizier-api", about = "Visualisation code generation service")]
struct Cli {
    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    Serve {
        #[arg(long)]
        catalogue: Option<std::path::PathBuf>,
    },

    Catalogue,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .init();
    let cli = Cli::parse();
    match cli.cmd.unwrap_or(Command::Serve { catalogue: None }) {
        Command::Serve { catalogue } => run_server(catalogue).await,
        Command::Catalogue => print_catalogue(),
    }
}

fn load_studio(catalogue: Option<std::path::PathBuf>) -> Result<ChartStudio> {
    let studio = match catalogue {
        Some(path) => ChartStudio::with_catalogue_file(&path)?,
        None => ChartStudio::new()?,
    };
    Ok(studio)
}

fn print_catalogue() -> Result<()> {
    let studio = ChartStudio::new()?;
    println!("{}", studio.catalogue().stats().summary());
    for chart in studio.get_available_charts() {
        println!(
            "{} {} ({}) - {}",
            chart.icon,
            chart.id,
            chart.library.as_str(),
            chart.description
        );
    }
    Ok(())
}

async fn run_server(catalogue: Option<std::path::PathBuf>) -> Result<()> {
    info!("vizier-api starting");
    let studio = load_studio(catalogue)?;
    info!("{}", studio.catalogue().stats().summary());

    let app = routes::build_router(Arc::new(studio));
    let addr: SocketAddr = std::env::var("VIZIER_HTTP_ADDR")
        .unwrap_or_else(|_| "127.0.0.1:8080".into())
        .parse()
        .expect("valid VIZIER_HTTP_ADDR");
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!(error=%e, %addr, "bind failed, using ephemeral");
            tokio::net::TcpListener::bind("127.0.0.1:0").await?
        }
    };
    let local = listener.local_addr()?;
    info!(%local, "visualisation api listening");

    tokio::select! { _ = axum::serve(listener, app) => {} _ = tokio::signal::ctrl_c() => {} }
    info!("vizier-api shutting down");
    Ok(())
}
