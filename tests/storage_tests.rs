//! MetricStore tests
//!
//! Exercises the upsert-max policy directly against a temporary SQLite
//! database: uniqueness per (ip_hash, subject), monotonic values, timestamp
//! refresh, and read-back ordering.

use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, sea_query::Expr};
use tempfile::TempDir;

use migration::entities::{quiz_metric, watch_metric};
use watchmetrics::storage::MetricStore;

async fn test_store(name: &str) -> (TempDir, MetricStore) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join(format!("{}.db", name));
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let store = MetricStore::new(&db_url)
        .await
        .expect("Failed to create metric store");
    (temp_dir, store)
}

/// 把某个 ip_hash 的 updated_at 改写为指定时间戳（测试专用）
async fn backdate_watch(store: &MetricStore, ip_hash: &str, ts: i64) {
    watch_metric::Entity::update_many()
        .col_expr(watch_metric::Column::UpdatedAt, Expr::value(ts))
        .filter(watch_metric::Column::IpHash.eq(ip_hash))
        .exec(store.get_db())
        .await
        .expect("Failed to backdate record");
}

#[tokio::test]
async fn test_first_write_creates_single_row() {
    let (_dir, store) = test_store("first_write").await;

    store.record_watch_time("h1", "v1", 42.0).await.unwrap();

    let records = store.watch_times("v1").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].ip_hash, "h1");
    assert_eq!(records[0].last_watch_time, 42.0);
}

#[tokio::test]
async fn test_second_write_never_creates_second_row() {
    let (_dir, store) = test_store("no_second_row").await;

    store.record_watch_time("h1", "v1", 10.0).await.unwrap();
    store.record_watch_time("h1", "v1", 20.0).await.unwrap();

    let records = store.watch_times("v1").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].last_watch_time, 20.0);
}

#[tokio::test]
async fn test_lower_value_is_not_retained() {
    let (_dir, store) = test_store("max_retained").await;

    store.record_watch_time("h1", "v1", 10.0).await.unwrap();
    store.record_watch_time("h1", "v1", 5.0).await.unwrap();

    let records = store.watch_times("v1").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].last_watch_time, 10.0);
}

#[tokio::test]
async fn test_updated_at_refreshes_even_when_value_unchanged() {
    let (_dir, store) = test_store("timestamp_refresh").await;

    store.record_watch_time("h1", "v1", 10.0).await.unwrap();
    backdate_watch(&store, "h1", 1000).await;

    // 数值不变（5 < 10），但时间戳必须前移
    store.record_watch_time("h1", "v1", 5.0).await.unwrap();

    let records = store.watch_times("v1").await.unwrap();
    assert_eq!(records[0].last_watch_time, 10.0);
    assert!(records[0].updated_at > 1000);
}

#[tokio::test]
async fn test_read_is_ordered_by_updated_at_ascending() {
    let (_dir, store) = test_store("ordering").await;

    store.record_watch_time("h1", "v1", 1.0).await.unwrap();
    store.record_watch_time("h2", "v1", 2.0).await.unwrap();
    store.record_watch_time("h3", "v1", 3.0).await.unwrap();

    backdate_watch(&store, "h1", 3000).await;
    backdate_watch(&store, "h2", 1000).await;
    backdate_watch(&store, "h3", 2000).await;

    let records = store.watch_times("v1").await.unwrap();
    let hashes: Vec<&str> = records.iter().map(|r| r.ip_hash.as_str()).collect();
    assert_eq!(hashes, vec!["h2", "h3", "h1"]);
}

#[tokio::test]
async fn test_read_unknown_subject_returns_empty() {
    let (_dir, store) = test_store("empty_read").await;

    let records = store.watch_times("nope").await.unwrap();
    assert!(records.is_empty());

    let scores = store.quiz_scores("nope").await.unwrap();
    assert!(scores.is_empty());
}

#[tokio::test]
async fn test_subjects_are_isolated() {
    let (_dir, store) = test_store("subject_isolation").await;

    store.record_watch_time("h1", "v1", 10.0).await.unwrap();
    store.record_watch_time("h1", "v2", 20.0).await.unwrap();

    let v1 = store.watch_times("v1").await.unwrap();
    let v2 = store.watch_times("v2").await.unwrap();
    assert_eq!(v1.len(), 1);
    assert_eq!(v2.len(), 1);
    assert_eq!(v1[0].last_watch_time, 10.0);
    assert_eq!(v2[0].last_watch_time, 20.0);
}

#[tokio::test]
async fn test_concurrent_writes_keep_single_row_and_max() {
    let (_dir, store) = test_store("concurrent").await;

    // 同一 (ip_hash, video_id) 的并发写由存储引擎的冲突解决串行化
    let (a, b, c, d) = tokio::join!(
        store.record_watch_time("h1", "v1", 10.0),
        store.record_watch_time("h1", "v1", 40.0),
        store.record_watch_time("h1", "v1", 25.0),
        store.record_watch_time("h1", "v1", 5.0),
    );
    a.unwrap();
    b.unwrap();
    c.unwrap();
    d.unwrap();

    let records = store.watch_times("v1").await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].last_watch_time, 40.0);
}

#[tokio::test]
async fn test_quiz_scores_follow_same_policy() {
    let (_dir, store) = test_store("quiz_policy").await;

    store.record_quiz_score("h1", "q1", 80.0).await.unwrap();
    store.record_quiz_score("h1", "q1", 60.0).await.unwrap();
    store.record_quiz_score("h2", "q1", 0.0).await.unwrap();

    let records = store.quiz_scores("q1").await.unwrap();
    assert_eq!(records.len(), 2);

    let h1 = records.iter().find(|r| r.ip_hash == "h1").unwrap();
    assert_eq!(h1.score, 80.0);
    let h2 = records.iter().find(|r| r.ip_hash == "h2").unwrap();
    assert_eq!(h2.score, 0.0);
}

#[tokio::test]
async fn test_watch_and_quiz_tables_are_independent() {
    let (_dir, store) = test_store("table_isolation").await;

    store.record_watch_time("h1", "s1", 10.0).await.unwrap();
    store.record_quiz_score("h1", "s1", 90.0).await.unwrap();

    assert_eq!(store.watch_times("s1").await.unwrap().len(), 1);

    let scores = store.quiz_scores("s1").await.unwrap();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].score, 90.0);

    // 确认落在不同的表里
    let quiz_rows = quiz_metric::Entity::find()
        .all(store.get_db())
        .await
        .unwrap();
    assert_eq!(quiz_rows.len(), 1);
}
