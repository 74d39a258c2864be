use std::sync::Arc;

use actix_cors::Cors;
use actix_web::error::InternalError;
use actix_web::{web, App, HttpResponse, HttpServer};
use anyhow::{Context, Result};
use blobpad_api_schema::error::ErrorResponse;
use blobpad_common::clock::Clock;
use blobpad_node::{NodeConfig, StorageNode};

use crate::api_state::ApiState;

pub mod health;
pub mod read_blob;
pub mod store;

pub struct ServerConfig {
    pub port: u16,
    pub clock: Clock,
    pub node: NodeConfig,
}

pub async fn run_server(config: ServerConfig) -> Result<()> {
    let node = StorageNode::start(config.node)
        .await
        .context("failed to start storage node")?;
    let state = ApiState::new(Arc::new(node), config.clock.clone());

    let server = HttpServer::new(move || {
        // A malformed or missing JSON body should produce the same error
        // shape as everything else, not actix's default text response.
        let json_config = web::JsonConfig::default().error_handler(|err, _req| {
            let body = ErrorResponse {
                error: err.to_string(),
            };
            InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
        });

        App::new()
            .wrap(Cors::permissive())
            .app_data(json_config)
            .app_data(web::Data::new(state.clone()))
            .service(health::health)
            .service(store::store)
            .service(read_blob::read_blob)
    })
    .bind(("0.0.0.0", config.port))
    .with_context(|| format!("failed to bind port {}", config.port))?
    .run();

    server.await.context("http server terminated")?;

    Ok(())
}
