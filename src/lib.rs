//! Watchmetrics - A minimal metrics-ingestion service
//!
//! This library provides the core functionality for the watchmetrics service:
//! anonymized per-client deduplication of watch-time and quiz-score events,
//! with max-retention aggregation and token-protected read-back.
//!
//! # Architecture
//! - `storage`: SeaORM-backed metric store (upsert-max policy)
//! - `services`: HTTP handlers and route table
//! - `middleware`: bearer-token authorization
//! - `utils`: identity anonymization and client address resolution
//! - `config`: environment-sourced configuration
//! - `system`: logging initialization

pub mod config;
pub mod errors;
pub mod middleware;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
