use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::storage::MetricStore;
use crate::utils::{hash, ip};

/// 观看时长上报请求体
///
/// 严格解码：字段缺失或类型不符都会被拒绝，不做隐式转换。
/// `time: 0` 是合法值（初次打开即关闭的播放也是一次观测）。
#[derive(Debug, Deserialize)]
pub struct SubmitMetricRequest {
    pub video_id: String,
    pub time: f64,
}

#[derive(Debug, Serialize)]
pub struct WatchTimeEntry {
    pub ip_hash: String,
    pub last_watch_time: f64,
    pub updated_at: i64,
}

pub struct MetricService;

impl MetricService {
    /// POST /metric
    pub async fn submit(
        req: HttpRequest,
        body: web::Bytes,
        store: web::Data<MetricStore>,
    ) -> HttpResponse {
        let payload: SubmitMetricRequest = match serde_json::from_slice(&body) {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Rejected metric payload: {}", e);
                return HttpResponse::BadRequest().body("invalid payload");
            }
        };

        if payload.video_id.is_empty() || !payload.time.is_finite() {
            debug!("Rejected metric payload: empty video_id or non-finite time");
            return HttpResponse::BadRequest().body("invalid payload");
        }

        let address = ip::client_address(&req);
        let ip_hash = hash::anonymize(&address, &payload.video_id);

        match store
            .record_watch_time(&ip_hash, &payload.video_id, payload.time)
            .await
        {
            Ok(()) => HttpResponse::Created().body("ok"),
            Err(e) => {
                error!("Failed to record watch time: {}", e);
                HttpResponse::InternalServerError().body("internal server error")
            }
        }
    }

    /// GET /metric/{video_id}
    pub async fn list(path: web::Path<String>, store: web::Data<MetricStore>) -> HttpResponse {
        let video_id = path.into_inner();

        match store.watch_times(&video_id).await {
            Ok(models) => {
                let entries: Vec<WatchTimeEntry> = models
                    .into_iter()
                    .map(|model| WatchTimeEntry {
                        ip_hash: model.ip_hash,
                        last_watch_time: model.last_watch_time,
                        updated_at: model.updated_at,
                    })
                    .collect();
                HttpResponse::Ok().json(entries)
            }
            Err(e) => {
                error!("Failed to load watch times for {}: {}", video_id, e);
                HttpResponse::InternalServerError().body("internal server error")
            }
        }
    }
}
