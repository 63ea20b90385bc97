#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use short_links::application::services::{LinkService, MetricsService};
use short_links::domain::entities::{LinkMetric, LinkTarget, NewShortLink, ShortLink};
use short_links::domain::repositories::{LinkRepository, MetricsRepository};
use short_links::error::AppError;
use short_links::state::AppState;

/// In-memory link store mirroring the Postgres repository contract:
/// generated ids, unique codes, listing newest first.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<ShortLink>>,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<i64, AppError> {
        let mut links = self.links.lock().unwrap();

        if links.iter().any(|link| link.code == new_link.code) {
            return Err(AppError::DuplicateCode);
        }

        let id = links.len() as i64 + 1;
        // Distinct timestamps keep created_at ordering deterministic.
        let created_at = Utc::now() + Duration::milliseconds(id);
        links.push(ShortLink::new(
            id,
            new_link.code,
            new_link.original_url,
            created_at,
        ));

        Ok(id)
    }

    async fn find_target_by_code(&self, code: &str) -> Result<Option<LinkTarget>, AppError> {
        let links = self.links.lock().unwrap();

        Ok(links
            .iter()
            .find(|link| link.code == code)
            .map(|link| LinkTarget {
                id: link.id,
                original_url: link.original_url.clone(),
            }))
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        let links = self.links.lock().unwrap();

        let mut all = links.clone();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(all)
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// In-memory score store mirroring the Redis sorted-set contract:
/// members appear on first increment, range queries are inclusive.
#[derive(Default)]
pub struct InMemoryMetricsRepository {
    clicks: Mutex<HashMap<i64, i64>>,
}

impl InMemoryMetricsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current click total for a link; zero when never incremented.
    pub fn clicks_for(&self, link_id: i64) -> i64 {
        *self.clicks.lock().unwrap().get(&link_id).unwrap_or(&0)
    }

    /// Writes a click total directly, bypassing the increment path.
    pub fn set_clicks(&self, link_id: i64, clicks: i64) {
        self.clicks.lock().unwrap().insert(link_id, clicks);
    }
}

#[async_trait]
impl MetricsRepository for InMemoryMetricsRepository {
    async fn increment_clicks(&self, link_id: i64) -> Result<i64, AppError> {
        let mut clicks = self.clicks.lock().unwrap();

        let total = clicks.entry(link_id).or_insert(0);
        *total += 1;

        Ok(*total)
    }

    async fn clicks_by_score(&self, min: i64, max: i64) -> Result<Vec<LinkMetric>, AppError> {
        let clicks = self.clicks.lock().unwrap();

        Ok(clicks
            .iter()
            .filter(|&(_, &count)| min <= count && count <= max)
            .map(|(&link_id, &count)| LinkMetric {
                link_id,
                clicks: count,
            })
            .collect())
    }

    async fn health_check(&self) -> bool {
        true
    }
}

/// Link store where every operation fails, for 500-path and health tests.
pub struct FailingLinkRepository;

#[async_trait]
impl LinkRepository for FailingLinkRepository {
    async fn insert(&self, _new_link: NewShortLink) -> Result<i64, AppError> {
        Err(AppError::internal("Database connection refused"))
    }

    async fn find_target_by_code(&self, _code: &str) -> Result<Option<LinkTarget>, AppError> {
        Err(AppError::internal("Database connection refused"))
    }

    async fn list_all(&self) -> Result<Vec<ShortLink>, AppError> {
        Err(AppError::internal("Database connection refused"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Score store where every operation fails.
pub struct FailingMetricsRepository;

#[async_trait]
impl MetricsRepository for FailingMetricsRepository {
    async fn increment_clicks(&self, _link_id: i64) -> Result<i64, AppError> {
        Err(AppError::internal("Redis connection refused"))
    }

    async fn clicks_by_score(&self, _min: i64, _max: i64) -> Result<Vec<LinkMetric>, AppError> {
        Err(AppError::internal("Redis connection refused"))
    }

    async fn health_check(&self) -> bool {
        false
    }
}

/// Builds application state over fresh in-memory stores, returning the
/// store handles so tests can seed and inspect them directly.
pub fn create_test_state() -> (
    AppState,
    Arc<InMemoryLinkRepository>,
    Arc<InMemoryMetricsRepository>,
) {
    let link_repo = Arc::new(InMemoryLinkRepository::new());
    let metrics_repo = Arc::new(InMemoryMetricsRepository::new());

    let state = AppState::new(
        Arc::new(LinkService::new(link_repo.clone())),
        Arc::new(MetricsService::new(metrics_repo.clone())),
    );

    (state, link_repo, metrics_repo)
}

/// Builds application state from arbitrary repository implementations.
pub fn create_state_with(
    link_repo: Arc<dyn LinkRepository>,
    metrics_repo: Arc<dyn MetricsRepository>,
) -> AppState {
    AppState::new(
        Arc::new(LinkService::new(link_repo)),
        Arc::new(MetricsService::new(metrics_repo)),
    )
}

/// Seeds a link through the repository and returns its generated id.
pub async fn seed_link(repo: &InMemoryLinkRepository, code: &str, url: &str) -> i64 {
    repo.insert(NewShortLink {
        code: code.to_string(),
        original_url: url.to_string(),
    })
    .await
    .unwrap()
}
