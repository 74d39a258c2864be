use actix_web::{get, web, HttpResponse, Responder};
use blobpad_api_schema::error::ErrorResponse;
use blobpad_api_schema::read_blob::ReadBlobResponse;
use blobpad_node::Hash;

use crate::api_state::ApiState;

#[get("/api/blob/{blob_id}")]
pub async fn read_blob(state: web::Data<ApiState>, path: web::Path<String>) -> impl Responder {
    let blob_id = path.into_inner();

    let hash: Hash = match blob_id.parse() {
        Ok(hash) => hash,
        Err(_) => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: format!("invalid blob id: {blob_id}"),
            });
        }
    };

    match state.node.read_blob(hash).await {
        // Decoded lossily: a blob is opaque bytes, the demo displays text.
        Ok(data) => HttpResponse::Ok().json(ReadBlobResponse {
            content: String::from_utf8_lossy(&data).into_owned(),
        }),
        Err(e) => {
            log::error!("failed to read blob {blob_id}: {e:#}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("{e:#}"),
            })
        }
    }
}
