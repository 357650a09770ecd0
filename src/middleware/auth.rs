use actix_web::middleware::Next;
use actix_web::{
    Error, HttpResponse,
    body::BoxBody,
    dev::{ServiceRequest, ServiceResponse},
    web,
};
use subtle::ConstantTimeEq;
use tracing::{debug, info};

use crate::config::Config;

pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 读取端点的 Bearer Token 验证中间件
    ///
    /// - 无 Authorization 头或格式不是 `Bearer <token>` → 401
    /// - 格式正确但 token 不匹配 → 403（常数时间比较）
    /// - 未配置 token 时认为读取 API 被禁用 → 404
    pub async fn bearer_auth(
        req: ServiceRequest,
        next: Next<BoxBody>,
    ) -> Result<ServiceResponse<BoxBody>, Error> {
        let api_token = req
            .app_data::<web::Data<Config>>()
            .map(|config| config.api_token.clone())
            .unwrap_or_default();

        // 如果 token 为空，认为读取 API 被禁用
        if api_token.is_empty() {
            return Ok(req.into_response(HttpResponse::NotFound().body("not found")));
        }

        let Some(auth_header) = req.headers().get("Authorization") else {
            info!("Read API authentication failed: missing Authorization header");
            return Ok(req.into_response(HttpResponse::Unauthorized().body("unauthorized")));
        };

        let Some(candidate) = auth_header.as_bytes().strip_prefix(b"Bearer ") else {
            info!("Read API authentication failed: malformed Authorization header");
            return Ok(req.into_response(HttpResponse::Unauthorized().body("unauthorized")));
        };

        if candidate.ct_eq(api_token.as_bytes()).into() {
            debug!("Read API authentication succeeded");
            next.call(req).await
        } else {
            info!("Read API authentication failed: token mismatch");
            Ok(req.into_response(HttpResponse::Forbidden().body("forbidden")))
        }
    }
}
