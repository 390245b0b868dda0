use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use postboard_api::graphql::build_schema;
use postboard_api::{routes, telemetry};
use postboard_common::Config;
use postboard_store::Store;

#[derive(Parser)]
#[command(name = "api", about = "Postboard GraphQL API server")]
struct Cli {
    /// Address to bind (overrides API_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to bind (overrides API_PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.api_host = host;
    }
    if let Some(port) = cli.port {
        config.api_port = port;
    }

    telemetry::init_tracing(config.log_format);
    config.log_summary();

    let store = Arc::new(Store::new());
    let schema = build_schema(store, &config);
    let app = routes::build_router(schema);

    let addr = format!("{}:{}", config.api_host, config.api_port);
    info!("Postboard API starting on {addr}");
    info!("GraphiQL IDE available at http://{addr}/graphql");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
