use actix_web::{post, web, HttpResponse, Responder};
use blobpad_api_schema::error::ErrorResponse;
use blobpad_api_schema::store::{StoreRequest, StoreResponse};

use crate::api_state::ApiState;

#[post("/api/store")]
pub async fn store(state: web::Data<ApiState>, req: web::Json<StoreRequest>) -> impl Responder {
    if req.content.is_empty() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "missing content".to_string(),
        });
    }

    match state.node.store_blob(req.content.clone().into_bytes()).await {
        Ok(hash) => HttpResponse::Ok().json(StoreResponse {
            blob_id: hash.to_string(),
        }),
        Err(e) => {
            log::error!("failed to store blob: {e:#}");
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: format!("{e:#}"),
            })
        }
    }
}
