use clap::Parser;
use doh_relay_domain::{CliOverrides, Config};
use tracing::{error, info};

mod bootstrap;
mod di;
mod server;

#[derive(Parser)]
#[command(name = "doh-relay")]
#[command(version = "0.1.0")]
#[command(about = "DoH Relay - UDP DNS gateway to a DNS-over-HTTPS JSON resolver")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// DNS server port
    #[arg(short = 'd', long)]
    dns_port: Option<u16>,

    /// Bind address
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Upstream DoH JSON endpoint
    #[arg(short = 'u', long, value_name = "URL")]
    upstream: Option<String>,

    /// Upstream request timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        dns_port: cli.dns_port,
        bind_address: cli.bind,
        upstream_endpoint: cli.upstream,
        timeout_ms: cli.timeout_ms,
        log_level: cli.log_level,
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);

    info!("Starting DoH Relay v{}", env!("CARGO_PKG_VERSION"));
    match cli.config.or_else(Config::get_config_path) {
        Some(path) => info!(path = %path, "Configuration loaded"),
        None => info!("No configuration file found, using defaults"),
    }
    info!(
        upstream = %config.upstream.endpoint,
        timeout_ms = config.upstream.timeout_ms,
        "Upstream DoH JSON resolver"
    );

    let dns_services = di::DnsServices::new(&config)?;

    let dns_addr = config.server.listen_addr();
    let num_workers = config.server.udp_workers;
    let dns_server = tokio::spawn(server::start_dns_server(
        dns_addr,
        dns_services.handler,
        num_workers,
    ));

    tokio::select! {
        result = dns_server => {
            match result {
                Ok(Ok(())) => info!("DNS server stopped"),
                Ok(Err(e)) => {
                    error!(error = %e, "DNS server error");
                    return Err(e);
                }
                Err(e) => return Err(e.into()),
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
    }

    info!("Server shutdown complete");
    Ok(())
}
