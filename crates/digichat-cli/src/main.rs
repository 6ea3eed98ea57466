//! DigiChat CLI entry point.
//!
//! # Usage
//!
//! ```bash
//! # Connect to a local endpoint
//! digichat ws://127.0.0.1:5000/chat
//!
//! # Looser reconnection budget, verbose logging
//! digichat ws://chat.example.net/chat --max-attempts 10 --log-level debug
//! ```

mod render;
mod runtime;

use clap::Parser;
use digichat_link::LinkConfig;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::runtime::Runtime;

/// DigiChat terminal client
#[derive(Parser, Debug)]
#[command(name = "digichat")]
#[command(about = "Line-oriented chat client for a DigiChat endpoint")]
#[command(version)]
struct Args {
    /// Endpoint URL to connect to
    #[arg(default_value = "ws://127.0.0.1:5000/chat")]
    endpoint: String,

    /// Maximum consecutive failed connection attempts before giving up
    #[arg(long, default_value = "5")]
    max_attempts: u32,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

    let config = LinkConfig { max_attempts: args.max_attempts, ..LinkConfig::default() };
    let runtime = Runtime::connect(args.endpoint, config)?;

    Ok(runtime.run().await?)
}
