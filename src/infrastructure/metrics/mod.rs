//! Score store integration for click metrics.

pub mod redis_metrics_repository;

pub use redis_metrics_repository::RedisMetricsRepository;
