//! Greeting and health-check service entry point.

use std::net::IpAddr;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use hello_service::api::create_router;
use hello_service::check;
use hello_service::config::Config;
use hello_service::metrics;
use hello_service::utils::shutdown_signal;

/// Greeting and health-check HTTP service.
#[derive(Parser, Debug)]
#[command(name = "hello-service")]
#[command(about = "Serves a greeting on / and a health marker on /health")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Address to bind (overrides BIND_HOST).
    #[arg(long, global = true)]
    bind_host: Option<IpAddr>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<u16>,

    /// Prometheus exporter port (overrides METRICS_PORT).
    #[arg(long, global = true)]
    metrics_port: Option<u16>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Check configuration validity and exercise the routes in-process.
    CheckConfig,
}

impl Args {
    /// Apply CLI overrides on top of the environment configuration.
    fn apply(&self, mut config: Config) -> Config {
        if let Some(host) = self.bind_host {
            config.bind_host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.metrics_port.is_some() {
            config.metrics_port = self.metrics_port;
        }
        config.verbose |= self.verbose;
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();
    let config = args.apply(Config::load()?);

    init_logging(&config);

    // Initialize metrics
    metrics::init_metrics();

    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(&config).await,
        Some(Command::Serve) | None => cmd_serve(config).await,
    }
}

fn init_logging(config: &Config) {
    let filter = if config.verbose {
        EnvFilter::new("hello_service=debug,tower_http=debug,info")
    } else {
        EnvFilter::try_new(&config.rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = if config.log_json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();
}

/// Check configuration validity.
async fn cmd_check_config(config: &Config) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("HELLO SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Validating configuration and routes... ");
    let replies = match check::run_checks(config).await {
        Ok(replies) => {
            println!("OK");
            replies
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration check failed"));
        }
    };

    for (path, reply) in &replies {
        println!("  GET {} -> {} {:?}", path, reply.status.as_u16(), reply.body);
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Listen Address: {}", config.bind_addr());
    match config.metrics_addr() {
        Some(addr) => println!("  Metrics Exporter: {}", addr),
        None => println!("  Metrics Exporter: Disabled"),
    }
    println!("  Log Level: {}", if config.verbose { "debug (verbose)" } else { config.rust_log.as_str() });
    println!("  Log Format: {}", if config.log_json { "json" } else { "text" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(config: Config) -> anyhow::Result<()> {
    config.validate()?;

    if let Some(addr) = config.metrics_addr() {
        metrics::install_prometheus_exporter(addr)?;
    }

    let addr = config.bind_addr();
    let listener = TcpListener::bind(addr).await?;
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
