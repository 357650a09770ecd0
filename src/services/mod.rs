//! HTTP service layer
//!
//! Handlers for the ingestion endpoints (open) and the read-back endpoints
//! (bearer-token protected), plus the route table shared between the server
//! binary and the integration tests.

mod metric;
mod quiz;

pub use metric::*;
pub use quiz::*;

use actix_web::middleware::from_fn;
use actix_web::{HttpResponse, web};

use crate::middleware::AuthMiddleware;

/// 路由表
///
/// POST 端点不鉴权；GET 端点包一层 Bearer Token 中间件。
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/metric")
            .route(web::post().to(MetricService::submit))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/metric/{video_id}")
            .wrap(from_fn(AuthMiddleware::bearer_auth))
            .route(web::get().to(MetricService::list)),
    )
    .service(
        web::resource("/quiz_metric")
            .route(web::post().to(QuizMetricService::submit))
            .default_service(web::route().to(method_not_allowed)),
    )
    .service(
        web::resource("/quiz_metric/{quiz_id}")
            .wrap(from_fn(AuthMiddleware::bearer_auth))
            .route(web::get().to(QuizMetricService::list)),
    );
}

/// 未匹配路由 → 404
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().body("not found")
}

/// 路径匹配但方法不支持 → 405
pub async fn method_not_allowed() -> HttpResponse {
    HttpResponse::MethodNotAllowed().body("method not allowed")
}
