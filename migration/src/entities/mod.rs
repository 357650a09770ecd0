pub mod quiz_metric;
pub mod watch_metric;
