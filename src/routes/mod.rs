// Route exports
pub mod api;
pub mod pages;

use actix_web::{error, web, HttpRequest, HttpResponse};

use crate::core::Concierge;
use crate::models::ErrorResponse;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub concierge: Concierge,
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::QueryConfig::default().error_handler(handle_query_payload_error))
        .configure(api::configure)
        .configure(pages::configure)
        .default_service(web::to(not_found));
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Query payload error on {}: {}", req.path(), err);
    let body = ErrorResponse {
        error: "invalid_query".to_string(),
        detail: format!("Invalid query: {}", err),
        status_code: 400,
    };
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(body)).into()
}

async fn not_found(req: HttpRequest) -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse {
        error: "not_found".to_string(),
        detail: format!("No route for {} {}", req.method(), req.path()),
        status_code: 404,
    })
}
