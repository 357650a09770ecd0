//! Query operations for MetricStore
//!
//! Read-back queries return every record for a subject, ordered ascending by
//! `updated_at`. Ties between equal timestamps keep storage iteration order;
//! no secondary sort key is applied.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use tracing::debug;

use super::MetricStore;
use crate::errors::{Result, WatchMetricsError};

use migration::entities::{quiz_metric, watch_metric};

impl MetricStore {
    /// 某个视频的全部观看记录，按 updated_at 升序
    pub async fn watch_times(&self, video_id: &str) -> Result<Vec<watch_metric::Model>> {
        let models = watch_metric::Entity::find()
            .filter(watch_metric::Column::VideoId.eq(video_id))
            .order_by_asc(watch_metric::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                WatchMetricsError::database_operation(format!("查询观看记录失败: {}", e))
            })?;

        debug!("Loaded {} watch records for video {}", models.len(), video_id);
        Ok(models)
    }

    /// 某个测验的全部得分记录，按 updated_at 升序
    pub async fn quiz_scores(&self, quiz_id: &str) -> Result<Vec<quiz_metric::Model>> {
        let models = quiz_metric::Entity::find()
            .filter(quiz_metric::Column::QuizId.eq(quiz_id))
            .order_by_asc(quiz_metric::Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                WatchMetricsError::database_operation(format!("查询得分记录失败: {}", e))
            })?;

        debug!("Loaded {} score records for quiz {}", models.len(), quiz_id);
        Ok(models)
    }
}
