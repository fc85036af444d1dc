mod http;

use avail_da::{AvailConfig, AvailDa};
use clap::Parser;
use da::DataAvailability;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

#[derive(Parser, Debug)]
#[command(name = "avail-da-server")]
#[command(about = "Serves an Avail-backed data-availability adapter over HTTP")]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "127.0.0.1:3030")]
    listen: SocketAddr,

    /// Light-client base URL; overrides AVAIL_LC_URL.
    #[arg(long)]
    lc_url: Option<String>,

    /// Block-data path template; overrides AVAIL_BLOCKS_URL.
    #[arg(long)]
    blocks_url: Option<String>,

    /// Application tag attached to the adapter.
    #[arg(long, default_value_t = 1)]
    app_id: u32,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let mut config = AvailConfig::from_env();
    if let Some(lc_url) = cli.lc_url {
        config.lc_url = lc_url;
    }
    if let Some(blocks_url) = cli.blocks_url {
        config.blocks_url = blocks_url;
    }

    let adapter: Arc<dyn DataAvailability> = Arc::new(AvailDa::new(cli.app_id, config));
    let app = http::router(adapter);

    let listener = TcpListener::bind(cli.listen).await?;
    info!(addr = %listener.local_addr()?, app_id = cli.app_id, "serving avail-da over http");
    axum::serve(listener, app).await
}
