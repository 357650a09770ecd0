//! 客户端地址解析
//!
//! 服务部署在反向代理之后，按固定优先级读取代理注入的请求头：
//! 1. X-Real-IP
//! 2. X-Forwarded-For（取第一个，即原始客户端 IP）
//! 3. 都不存在时回退到字面量 "unknown"

use actix_web::HttpRequest;
use actix_web::http::header::HeaderMap;

/// Fallback identity for clients with no resolvable address. All such
/// clients share one anonymized identity per subject; an accepted
/// imprecision, not a bug.
pub const UNKNOWN_ADDRESS: &str = "unknown";

/// 从 HttpRequest 提取客户端地址
pub fn client_address(req: &HttpRequest) -> String {
    extract_client_address(req.headers())
}

/// 从 HeaderMap 提取客户端地址
pub fn extract_client_address(headers: &HeaderMap) -> String {
    headers
        .get("x-real-ip")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.trim().to_string())
        .or_else(|| {
            headers
                .get("x-forwarded-for")
                .and_then(|h| h.to_str().ok())
                .and_then(|s| s.split(',').next())
                .map(|s| s.trim().to_string())
        })
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_ADDRESS.to_string())
}
