use actix_web::{error::ResponseError, http::StatusCode, web, HttpResponse, Responder};

use crate::error::GuideError;
use crate::models::{ChatResponse, ErrorResponse, HealthResponse, PlaceQuery, PlaceSearchParams};
use crate::routes::AppState;

/// Configure JSON routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/chat", web::get().to(chat));
}

impl ResponseError for GuideError {
    fn status_code(&self) -> StatusCode {
        GuideError::status_code(self)
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(GuideError::status_code(self)).json(ErrorResponse {
            error: self.kind().to_string(),
            detail: self.to_string(),
            status_code: GuideError::status_code(self).as_u16(),
        })
    }
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok".to_string(),
        message: "サーバーが正常に動作しています".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Recommend a place as JSON
///
/// GET /chat?query=カフェ&location_name=新宿区&open_now=true&price_level=2&rating=4.0
///
/// Response:
/// ```json
/// { "message": "…はいかがですか？ … 住所は…です。" }
/// ```
async fn chat(
    state: web::Data<AppState>,
    params: web::Query<PlaceSearchParams>,
) -> Result<HttpResponse, GuideError> {
    let query = PlaceQuery::try_from(params.into_inner()).map_err(|e| {
        tracing::info!("Rejected chat request: {}", e);
        e
    })?;

    tracing::info!(
        "チャットリクエスト受信: クエリ={}, 地域={:?}",
        query.query,
        query.location_name
    );

    let recommendation = state.concierge.recommend(&query).await?;

    Ok(HttpResponse::Ok().json(ChatResponse {
        message: recommendation.narrative.collapsed(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_health_check_response() {
        let response = HealthResponse {
            status: "ok".to_string(),
            message: "サーバーが正常に動作しています".to_string(),
            version: "0.1.0".to_string(),
            timestamp: chrono::Utc::now(),
        };

        assert_eq!(response.status, "ok");
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let response = GuideError::NotFound("該当する場所が見つかりません".to_string()).error_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "not_found");
        assert_eq!(json["detail"], "該当する場所が見つかりません");
        assert_eq!(json["status_code"], 404);
    }
}
