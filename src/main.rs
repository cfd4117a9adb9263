//! prompt-boost - MCP server for prompt enhancement strategies

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use prompt_boost::config::Config;
use prompt_boost::mcp::{McpServer, TransportMode};
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(ValueEnum, Debug, Copy, Clone)]
enum TransportArg {
    Auto,
    Lsp,
    Line,
}

#[derive(Parser, Debug)]
#[command(name = "prompt-boost")]
#[command(about = "MCP server for prompt enhancement strategies")]
struct Args {
    /// Path to the JSON configuration file (defaults to
    /// prompt-boost-config.json in the working directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Transport framing: auto, lsp, line
    #[arg(long, value_enum, default_value = "auto")]
    transport: TransportArg,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Configuration is loaded before tracing init so the configured log
    // level can seed the filter; RUST_LOG still takes precedence.
    let (config, config_warning) = Config::load(args.config.as_deref());

    // Logs go to stderr (MCP uses stdout for the protocol)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    if let Some(warning) = config_warning {
        warn!("{}", warning);
    }

    info!("Starting prompt-boost MCP server");

    let transport_mode = match args.transport {
        TransportArg::Auto => None,
        TransportArg::Lsp => Some(TransportMode::Lsp),
        TransportArg::Line => Some(TransportMode::Line),
    };

    let server = McpServer::new(config, transport_mode);

    if let Err(e) = server.run().await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
