use std::io::{self, BufRead, Write};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use classboard::actions::{self, Confirm, DeleteOutcome};
use classboard::render::html::PageRenderer;
use classboard::render::text;
use classboard::server::{create_router, ServerState};
use classboard::{layout, ApiClient, Config, DashboardState, RoomFilter};

#[derive(Debug, Parser)]
#[command(name = "classboard", version, about = "Classroom scheduling dashboard")]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Base URL of the class API
    #[arg(long, env = "CLASSBOARD_API_URL", global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the dashboard over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "CLASSBOARD_BIND")]
        bind: Option<SocketAddr>,
    },
    /// Print the weekly timetable
    Timetable {
        /// Room to show, or "all"
        #[arg(long, default_value = "all")]
        room: String,
    },
    /// Delete a class by id
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

/// Asks on the terminal, unless `--yes` was given.
struct TerminalPrompt {
    assume_yes: bool,
}

impl Confirm for TerminalPrompt {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        eprint!("{} [y/N] ", prompt);
        let _ = io::stderr().flush();

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line).is_err() {
            return false;
        }
        matches!(line.trim().to_lowercase().as_str(), "y" | "yes")
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from_file(path)
            .map_err(|e| anyhow!("failed to load config {}: {}", path.display(), e))?,
        None => Config::default(),
    };

    if let Some(url) = &cli.api_url {
        config.api_base_url = url.clone();
    }
    if let Command::Serve { bind: Some(bind) } = &cli.command {
        config.bind_addr = *bind;
    }

    config.validate().map_err(|e| anyhow!("invalid configuration: {}", e))?;
    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let client = ApiClient::with_config(&config).context("failed to create API client")?;
    info!(api = %client.base_url(), "Using class API");
    let dashboard = DashboardState::new(Arc::new(client), config.hours());

    match cli.command {
        Command::Serve { .. } => {
            dashboard.reload().await;

            let pages = PageRenderer::new().context("failed to register page templates")?;
            let state = Arc::new(ServerState { dashboard, pages });
            let router = create_router(state);

            let listener = tokio::net::TcpListener::bind(config.bind_addr)
                .await
                .with_context(|| format!("failed to bind {}", config.bind_addr))?;
            info!("Dashboard listening on http://{}", config.bind_addr);

            axum::serve(listener, router)
                .with_graceful_shutdown(async {
                    let _ = tokio::signal::ctrl_c().await;
                    info!("Shutting down");
                })
                .await
                .context("server error")?;
        }
        Command::Timetable { room } => {
            dashboard.reload().await;
            let snapshot = dashboard.snapshot().await;
            let grid = layout(&snapshot.classes, dashboard.hours(), &RoomFilter::parse(Some(&room)));
            print!("{}", text::timetable(&grid));
        }
        Command::Delete { id, yes } => {
            let prompt = TerminalPrompt { assume_yes: yes };
            match actions::delete_class(&dashboard, id, &prompt).await {
                DeleteOutcome::Cancelled => println!("Cancelled"),
                DeleteOutcome::Submitted => {
                    let remaining = dashboard.snapshot().await.classes.len();
                    println!("{} classes scheduled", remaining);
                }
            }
        }
    }

    Ok(())
}
