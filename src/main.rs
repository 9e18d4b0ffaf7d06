use clap::Parser;
use tokio::net::TcpListener;

use tinywiki::logger::Logger;
use tinywiki::{build_app, Args, Config, WikiError};

#[tokio::main]
async fn main() -> Result<(), WikiError> {
    Logger::init()?;

    let config = Config::from_args(Args::parse());
    log::debug!("Configuration: {:?}", config);

    let app = build_app(&config)?;

    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr).await?;
    log::info!("Wiki listening on http://{}, pages in {:?}", addr, config.data_dir);
    axum::serve(listener, app).await.map_err(WikiError::from)
}
