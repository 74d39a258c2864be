use std::path::PathBuf;

use anyhow::{Context, Result};
use blobpad_common::clock::Clock;
use blobpad_node::{NodeConfig, SecretKey};
use blobpad_server::api::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::init();

    let port = match std::env::var("PORT") {
        Ok(v) => v.parse().context("PORT must be a port number")?,
        Err(_) => 3001,
    };
    let storage_dir = std::env::var_os("BLOBPAD_DATA_DIR").map(PathBuf::from);
    let secret_key = match std::env::var("BLOBPAD_SECRET_KEY") {
        Ok(v) => Some(
            v.parse::<SecretKey>()
                .context("BLOBPAD_SECRET_KEY must be a hex-encoded secret key")?,
        ),
        Err(_) => None,
    };

    let config = ServerConfig {
        port,
        clock: Clock::new(),
        node: NodeConfig {
            storage_dir,
            secret_key,
        },
    };

    log::info!("blobpad backend listening on http://localhost:{port}");
    run_server(config).await
}
