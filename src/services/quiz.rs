use actix_web::{HttpRequest, HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::storage::MetricStore;
use crate::utils::{hash, ip};

/// 测验得分上报请求体，`score: 0` 是合法值
#[derive(Debug, Deserialize)]
pub struct SubmitQuizMetricRequest {
    pub quiz_id: String,
    pub score: f64,
}

#[derive(Debug, Serialize)]
pub struct QuizScoreEntry {
    pub ip_hash: String,
    pub score: f64,
    pub updated_at: i64,
}

pub struct QuizMetricService;

impl QuizMetricService {
    /// POST /quiz_metric
    pub async fn submit(
        req: HttpRequest,
        body: web::Bytes,
        store: web::Data<MetricStore>,
    ) -> HttpResponse {
        let payload: SubmitQuizMetricRequest = match serde_json::from_slice(&body) {
            Ok(payload) => payload,
            Err(e) => {
                debug!("Rejected quiz payload: {}", e);
                return HttpResponse::BadRequest().body("invalid payload");
            }
        };

        if payload.quiz_id.is_empty() || !payload.score.is_finite() {
            debug!("Rejected quiz payload: empty quiz_id or non-finite score");
            return HttpResponse::BadRequest().body("invalid payload");
        }

        let address = ip::client_address(&req);
        let ip_hash = hash::anonymize(&address, &payload.quiz_id);

        match store
            .record_quiz_score(&ip_hash, &payload.quiz_id, payload.score)
            .await
        {
            Ok(()) => HttpResponse::Created().body("ok"),
            Err(e) => {
                error!("Failed to record quiz score: {}", e);
                HttpResponse::InternalServerError().body("internal server error")
            }
        }
    }

    /// GET /quiz_metric/{quiz_id}
    pub async fn list(path: web::Path<String>, store: web::Data<MetricStore>) -> HttpResponse {
        let quiz_id = path.into_inner();

        match store.quiz_scores(&quiz_id).await {
            Ok(models) => {
                let entries: Vec<QuizScoreEntry> = models
                    .into_iter()
                    .map(|model| QuizScoreEntry {
                        ip_hash: model.ip_hash,
                        score: model.score,
                        updated_at: model.updated_at,
                    })
                    .collect();
                HttpResponse::Ok().json(entries)
            }
            Err(e) => {
                error!("Failed to load quiz scores for {}: {}", quiz_id, e);
                HttpResponse::InternalServerError().body("internal server error")
            }
        }
    }
}
