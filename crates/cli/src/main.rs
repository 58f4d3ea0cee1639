//! Command Line Interface for the LP vault monitor.
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use dotenv::dotenv;
use lp_vault_dashboard::prelude::*;
use prettytable::{Table, format, row};
use std::env;
use std::future::Future;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Config file picked up from the working directory when `--config` is absent.
const DEFAULT_CONFIG_FILE: &str = "lp-vault.toml";

#[derive(Parser)]
#[command(name = "lp-vault")]
#[command(about = "Liquidity vault status monitor", long_about = None)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch every endpoint once and print the dashboard
    Show {
        /// Only show the tab with this label
        #[arg(short, long)]
        tab: Option<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Width of the range chart in columns
        #[arg(short, long, default_value_t = 50)]
        width: usize,
    },
    /// Redraw the dashboard periodically until interrupted
    Watch {
        /// Seconds between redraws (defaults to the configured interval)
        #[arg(short, long)]
        interval: Option<u64>,

        /// Only show the tab with this label
        #[arg(short, long)]
        tab: Option<String>,

        /// Width of the range chart in columns
        #[arg(short, long, default_value_t = 50)]
        width: usize,
    },
    /// Validate the configuration and list the endpoints
    CheckConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref())?;

    match &cli.command {
        Commands::Show { tab, format, width } => {
            let dashboard = Dashboard::from_config(config)?;
            let renderer: Box<dyn Renderer> = match format {
                OutputFormat::Text => Box::new(TextRenderer::new(*width)),
                OutputFormat::Json => Box::new(JsonRenderer),
            };
            let view = dashboard.build_view(tab.as_deref()).await?;
            print!("{}", renderer.render(&view)?);
        }
        Commands::Watch {
            interval,
            tab,
            width,
        } => {
            let period = match interval {
                Some(0) => bail!("--interval must be greater than 0"),
                Some(secs) => Duration::from_secs(*secs),
                None => config.refresh_interval(),
            };
            let dashboard = Dashboard::from_config(config)?;
            // Fail fast on an unknown tab instead of inside the loop.
            dashboard.config().select(tab.as_deref())?;

            let shutdown = async {
                if let Err(err) = tokio::signal::ctrl_c().await {
                    warn!(error = %err, "Cannot listen for Ctrl-C");
                    std::future::pending::<()>().await;
                }
            };
            watch(
                &dashboard,
                tab.as_deref(),
                TextRenderer::new(*width),
                period,
                io::stdout(),
                shutdown,
            )
            .await?;
        }
        Commands::CheckConfig => {
            print_config(&config);
        }
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    // stdout carries the dashboard; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Resolves the configuration: explicit file, then `lp-vault.toml`, then
/// `API_ENDPOINT_<n>` environment variables.
fn load_config(path: Option<&Path>) -> Result<DashboardConfig> {
    if let Some(path) = path {
        return DashboardConfig::load(path)
            .with_context(|| format!("Invalid configuration in {}", path.display()));
    }

    let default_path = Path::new(DEFAULT_CONFIG_FILE);
    if default_path.exists() {
        info!(path = DEFAULT_CONFIG_FILE, "Using configuration file");
        return Ok(DashboardConfig::load(default_path)?);
    }

    let config = config_from_env(|key| env::var(key).ok());
    if config.endpoints.is_empty() {
        bail!("No endpoints configured: pass --config, create {DEFAULT_CONFIG_FILE}, or set API_ENDPOINT_1");
    }
    config.validate()?;
    Ok(config)
}

/// Reads `API_ENDPOINT_1`, `API_ENDPOINT_2`, ... until the first unset one.
/// Blank values are skipped without shifting the labels of later endpoints.
fn config_from_env(lookup: impl Fn(&str) -> Option<String>) -> DashboardConfig {
    let endpoints = (1..)
        .map(|n| (n, lookup(&format!("API_ENDPOINT_{n}"))))
        .take_while(|(_, url)| url.is_some())
        .filter_map(|(n, url)| {
            let url = url?;
            if url.trim().is_empty() {
                warn!(n, "Ignoring empty API_ENDPOINT variable");
                return None;
            }
            Some(EndpointConfig::new(default_label(n), url))
        })
        .collect();
    DashboardConfig {
        endpoints,
        ..DashboardConfig::default()
    }
}

/// Redraws the dashboard every `period` until `shutdown` completes.
/// Returns the number of redraws.
async fn watch<P: StatusProvider>(
    dashboard: &Dashboard<P>,
    tab: Option<&str>,
    renderer: TextRenderer,
    period: Duration,
    mut out: impl Write,
    shutdown: impl Future<Output = ()>,
) -> Result<usize> {
    let mut ticker = tokio::time::interval(period);
    let mut redraws = 0;
    tokio::pin!(shutdown);
    info!(interval_secs = period.as_secs(), "Watching vault endpoints");

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                dashboard.fetcher().purge_expired().await;
                let view = dashboard.build_view(tab).await?;
                let rendered = renderer.render(&view)?;
                // Clear the screen and move the cursor home before redrawing.
                write!(out, "\x1B[2J\x1B[H{rendered}")?;
                out.flush()?;
                redraws += 1;
            }
            _ = &mut shutdown => {
                info!(redraws, "Stopping watch");
                break;
            }
        }
    }
    Ok(redraws)
}

fn print_config(config: &DashboardConfig) {
    println!("✅ Configuration is valid");
    println!("Title:            {}", config.title);
    println!("Cache TTL:        {}s", config.cache_ttl_secs);
    println!("Request timeout:  {}s", config.request_timeout_secs);
    println!("Refresh interval: {}s", config.refresh_interval_secs);
    println!();

    let mut table = Table::new();
    table.set_format(*format::consts::FORMAT_NO_BORDER_LINE_SEPARATOR);
    table.set_titles(row!["Tab", "URL", "Sections", "Vault fields"]);
    for endpoint in &config.endpoints {
        let sections: Vec<_> = endpoint.sections.iter().map(|s| s.key()).collect();
        let fields: Vec<_> = endpoint.vault_fields.iter().map(|f| f.key()).collect();
        table.add_row(row![
            endpoint.label,
            endpoint.url,
            sections.join(", "),
            fields.join(", ")
        ]);
    }
    table.printstd();
}
