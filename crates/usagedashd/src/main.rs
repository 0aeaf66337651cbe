use clap::{Args, Parser, Subcommand};
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use ud_api::{build_router, AppState};
use ud_report::UsageReport;
use usagedashd::{format_status, resolve_config, shutdown_signal, startup_banner, ConfigOverrides};

#[derive(Parser)]
#[command(
    name = "usagedashd",
    version = usagedashd::DAEMON_VERSION,
    about = "Model usage dashboard server"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the dashboard server in the foreground
    Run(RunArgs),
    /// Parse a report file and print the usage JSON
    Parse {
        /// Markdown report to parse
        path: PathBuf,
        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Query a running server for its current usage summary
    Status {
        /// Port the server listens on (defaults to the configured port)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print version
    Version,
}

#[derive(Args)]
struct RunArgs {
    /// Config file to load instead of ~/.usagedash/config.toml
    #[arg(long)]
    config: Option<PathBuf>,
    /// Address to bind to
    #[arg(long)]
    host: Option<IpAddr>,
    /// Port to bind to
    #[arg(long)]
    port: Option<u16>,
    /// Markdown report with the agent usage table
    #[arg(long)]
    report: Option<PathBuf>,
    /// HTML page served at / and /dashboard
    #[arg(long)]
    dashboard: Option<PathBuf>,
}

impl From<RunArgs> for ConfigOverrides {
    fn from(args: RunArgs) -> Self {
        Self {
            config_file: args.config,
            host: args.host,
            port: args.port,
            report_path: args.report,
            dashboard_path: args.dashboard,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "usagedashd=info,ud_api=info,tower_http=info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => {
            let config = resolve_config(&args.into())?;

            print!("{}", startup_banner(&config));
            println!();

            let addr: SocketAddr = config.bind_addr().parse()?;
            let app = build_router(AppState::new(config));

            let listener = tokio::net::TcpListener::bind(addr).await?;
            tracing::info!("Listening on {}", addr);

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;

            println!("Server stopped.");
            Ok(())
        }

        Commands::Parse { path, pretty } => {
            let agents = ud_report::load_report(&path, ud_config::DEFAULT_MAX_FILE_BYTES).await?;
            let report = UsageReport::new(agents);
            let json = if pretty {
                serde_json::to_string_pretty(&report)?
            } else {
                serde_json::to_string(&report)?
            };
            println!("{}", json);
            Ok(())
        }

        Commands::Status { port } => {
            let overrides = ConfigOverrides {
                port,
                ..Default::default()
            };
            let config = resolve_config(&overrides)?;
            let url = format!("{}/api/model-usage", config.local_url());

            let resp = match reqwest::get(&url).await {
                Ok(resp) => resp,
                Err(e) => {
                    tracing::debug!("status request failed: {}", e);
                    println!("Server is not reachable at {}", config.local_url());
                    return Ok(());
                }
            };

            if !resp.status().is_success() {
                let status = resp.status();
                let text = resp.text().await.unwrap_or_default();
                anyhow::bail!("Server returned {}: {}", status, text);
            }

            let report: UsageReport = resp.json().await?;
            println!("Server is running at {}", config.local_url());
            println!("{}", format_status(&report));
            Ok(())
        }

        Commands::Version => {
            println!("usagedashd {}", usagedashd::DAEMON_VERSION);
            Ok(())
        }
    }
}
