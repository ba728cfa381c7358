use actix_web::{http::header::ContentType, web, HttpResponse, Responder};

use crate::error::GuideError;
use crate::models::{PlaceQuery, PlaceSearchParams};
use crate::routes::AppState;
use crate::views;

/// Configure HTML routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home))
        .route("/search", web::get().to(search_form))
        .route("/results", web::get().to(results))
        .route("/static/style.css", web::get().to(stylesheet));
}

fn html(body: String) -> HttpResponse {
    HttpResponse::Ok().content_type(ContentType::html()).body(body)
}

async fn home() -> impl Responder {
    html(views::render_home())
}

async fn search_form() -> impl Responder {
    html(views::render_search_form())
}

async fn stylesheet() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/css; charset=utf-8")
        .body(views::STYLESHEET)
}

/// Recommend a place as an HTML page
///
/// Errors are rendered as an error page carrying the mapped status code.
async fn results(
    state: web::Data<AppState>,
    params: Result<web::Query<PlaceSearchParams>, actix_web::Error>,
) -> HttpResponse {
    let params = match params {
        Ok(params) => params.into_inner(),
        Err(e) => {
            tracing::info!("Rejected results query: {}", e);
            return error_page(&GuideError::Validation(format!("クエリパラメータが不正です: {}", e)));
        }
    };

    let outcome = match PlaceQuery::try_from(params) {
        Ok(query) => state.concierge.recommend(&query).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(recommendation) => html(views::render_result(&recommendation)),
        Err(e) => {
            tracing::warn!("Rendering error page: {}", e);
            error_page(&e)
        }
    }
}

fn error_page(err: &GuideError) -> HttpResponse {
    HttpResponse::build(err.status_code())
        .content_type(ContentType::html())
        .body(views::render_error(&err.to_string()))
}
