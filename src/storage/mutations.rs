//! Mutation operations for MetricStore
//!
//! Both writes share the upsert-max policy: insert the first observation for
//! an (ip_hash, subject) pair, and on conflict raise the stored value to the
//! larger of old/new while always refreshing `updated_at`. The whole
//! operation is a single atomic statement; there is deliberately no
//! read-then-write path.

use sea_orm::ActiveValue::Set;
use sea_orm::EntityTrait;
use sea_orm::sea_query::{Expr, OnConflict, SimpleExpr};
use tracing::debug;

use super::MetricStore;
use crate::errors::{Result, WatchMetricsError};

use migration::entities::{quiz_metric, watch_metric};

impl MetricStore {
    /// 记录观看时长（upsert-max）
    pub async fn record_watch_time(
        &self,
        ip_hash: &str,
        video_id: &str,
        seconds: f64,
    ) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = watch_metric::ActiveModel {
            ip_hash: Set(ip_hash.to_string()),
            video_id: Set(video_id.to_string()),
            last_watch_time: Set(seconds),
            updated_at: Set(now),
        };

        watch_metric::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    watch_metric::Column::IpHash,
                    watch_metric::Column::VideoId,
                ])
                .value(
                    watch_metric::Column::LastWatchTime,
                    self.max_merge_expr("last_watch_time"),
                )
                .value(watch_metric::Column::UpdatedAt, Expr::value(now))
                .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                WatchMetricsError::database_operation(format!("记录观看时长失败: {}", e))
            })?;

        debug!("Watch time recorded for video {}", video_id);
        Ok(())
    }

    /// 记录测验得分（upsert-max）
    pub async fn record_quiz_score(&self, ip_hash: &str, quiz_id: &str, score: f64) -> Result<()> {
        let now = chrono::Utc::now().timestamp();

        let model = quiz_metric::ActiveModel {
            ip_hash: Set(ip_hash.to_string()),
            quiz_id: Set(quiz_id.to_string()),
            score: Set(score),
            updated_at: Set(now),
        };

        quiz_metric::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([quiz_metric::Column::IpHash, quiz_metric::Column::QuizId])
                    .value(quiz_metric::Column::Score, self.max_merge_expr("score"))
                    .value(quiz_metric::Column::UpdatedAt, Expr::value(now))
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| {
                WatchMetricsError::database_operation(format!("记录测验得分失败: {}", e))
            })?;

        debug!("Quiz score recorded for quiz {}", quiz_id);
        Ok(())
    }

    /// `MAX(col, excluded.col)` 合并表达式
    ///
    /// SQLite/MySQL 的标量 MAX 在 PostgreSQL 中是聚合函数，要用 GREATEST。
    fn max_merge_expr(&self, column: &str) -> SimpleExpr {
        let func = if self.backend_name == "postgres" {
            "GREATEST"
        } else {
            "MAX"
        };
        Expr::cust(format!("{}({}, excluded.{})", func, column, column))
    }
}
