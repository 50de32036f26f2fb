//! Commission API entry point
//!
//! Reads configuration from the command line, falling back to `COMMISSION_*`
//! environment variables (a `.env` file is loaded first when present).

use clap::Parser;
use commission::{Dataset, InMemoryDataProvider};
use shared::logging;
use std::net::SocketAddr;
use std::path::PathBuf;
use tokio::signal;

use webserver::{WebServer, WebServerError, WebServerResult};

const COMPONENT: &str = "webserver";

#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "HTTP API for the MLM commission engine")]
struct Args {
    /// Interface to bind
    #[arg(long, env = "COMMISSION_HOST", default_value = "127.0.0.1")]
    host: String,

    /// Port for HTTP server
    #[arg(long, env = "COMMISSION_PORT", default_value = "3000")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "COMMISSION_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// JSON dataset of users and sales; the demo network is served when omitted
    #[arg(long, env = "COMMISSION_DATA_FILE")]
    data_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // Missing .env is fine
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    logging::init_tracing(Some(&args.log_level));
    logging::log_startup(COMPONENT, &format!("commission API on {}:{}", args.host, args.port));

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|e| WebServerError::config(format!("Invalid listen address: {e}")))?;

    let dataset = match &args.data_file {
        Some(path) => Dataset::from_json_file(path).await.map_err(|e| {
            logging::log_error(COMPONENT, "Dataset loading", &e);
            WebServerError::from(e)
        })?,
        None => {
            tracing::info!("📦 No data file configured, serving the demo network");
            Dataset::demo()
        }
    };

    let webserver = WebServer::new(InMemoryDataProvider::new(dataset));

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(COMPONENT, "Received Ctrl+C signal"),
            Err(err) => logging::log_error(COMPONENT, "Signal handling", &err),
        }
    };

    if let Err(e) = webserver.run(addr, shutdown).await {
        logging::log_error(COMPONENT, "Serving", &e);
        return Err(e);
    }

    logging::log_success(COMPONENT, "WebServer stopped gracefully");
    Ok(())
}
