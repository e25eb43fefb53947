//! # 시드 로더
//!
//! 여섯 컬렉션 전체를 픽스처 데이터로 교체합니다.
//!
//! ## 처리 순서
//!
//! ```text
//! FixtureSet ─▶ validate_all ─▶ bcrypt hash ─▶ store.replace_all ─▶ count ─▶ SeedReport
//!                  │                 │                │
//!                  ▼                 ▼                ▼
//!          SeedError::Validation  Hashing   SeedError::Store(AppError)
//! ```
//!
//! 검증과 해싱은 저장소에 손대기 전에 끝나므로, 앞의 두 단계에서 실패하면
//! 기존 데이터는 그대로입니다. 교체 단계에서 실패하면 저장소가 롤백을 시도하며,
//! 롤백까지 실패한 경우에만 `AppError::PartialReplace`로 섞인 상태를 알립니다
//! ([`SeedError::live_data_intact`]).
//!
//! 같은 픽스처로 여러 번 실행해도 최종 건수는 같습니다.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use chrono::{DateTime, Utc};
use log::{debug, error, info};
use crate::config::SeedStrategy;
use crate::domain::entities::CollectionKind;
use crate::errors::SeedError;
use crate::fixtures::FixtureSet;
use crate::repositories::DashboardStore;
use crate::utils::display_terminal;

/// 시드 실행 결과
#[derive(Debug, Clone)]
pub struct SeedReport {
    /// 교체 후 컬렉션별 레코드 수
    pub counts: BTreeMap<CollectionKind, u64>,
    pub strategy: SeedStrategy,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
}

impl SeedReport {
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn count(&self, kind: CollectionKind) -> u64 {
        self.counts.get(&kind).copied().unwrap_or(0)
    }
}

pub struct SeedService {
    store: Arc<dyn DashboardStore>,
    strategy: SeedStrategy,
    bcrypt_cost: u32,
}

impl SeedService {
    pub fn new(store: Arc<dyn DashboardStore>, strategy: SeedStrategy, bcrypt_cost: u32) -> Self {
        Self { store, strategy, bcrypt_cost }
    }

    /// 픽스처로 모든 컬렉션을 교체합니다.
    ///
    /// # Errors
    ///
    /// * `SeedError::Validation` - 필드 검증 실패 (저장소 변경 없음)
    /// * `SeedError::Hashing` - bcrypt 해싱 실패 (저장소 변경 없음)
    /// * `SeedError::Store` - 교체 또는 건수 조회 실패
    pub async fn seed(&self, mut fixtures: FixtureSet) -> Result<SeedReport, SeedError> {
        let started_at = Utc::now();
        info!("🌱 시드 시작 (strategy: {})", self.strategy.as_str());

        fixtures.validate_all().map_err(|e| {
            error!("❌ 픽스처 검증 실패: {}", e);
            e
        })?;
        debug!("   ├─ 픽스처 검증 완료");

        let hash_start = Instant::now();
        self.hash_credentials(&mut fixtures)?;
        debug!("   ├─ 자격 증명 해싱 완료 ({:?})", hash_start.elapsed());

        self.store
            .replace_all(&fixtures, self.strategy)
            .await
            .map_err(|e| {
                error!("❌ 컬렉션 교체 실패: {}", e);
                SeedError::Store(e)
            })?;

        let mut counts = BTreeMap::new();
        for kind in CollectionKind::SEED_ORDER {
            counts.insert(kind, self.store.count(kind).await?);
        }

        let report = SeedReport {
            counts,
            strategy: self.strategy,
            started_at,
            finished_at: Utc::now(),
        };

        info!(
            "✅ 시드 완료: {}건 ({}ms)",
            report.total(),
            (report.finished_at - report.started_at).num_milliseconds()
        );

        Ok(report)
    }

    /// 결과를 로그와 터미널 요약으로 남깁니다.
    pub fn report(&self, report: &SeedReport) {
        for (kind, count) in &report.counts {
            info!("   ├─ {}: {}", kind, count);
        }
        display_terminal::print_seed_summary(report.strategy.as_str(), &report.counts);
    }

    fn hash_credentials(&self, fixtures: &mut FixtureSet) -> Result<(), SeedError> {
        for user in fixtures.users.iter_mut() {
            if let Some(plain) = user.password.as_deref() {
                let hashed = bcrypt::hash(plain, self.bcrypt_cost)
                    .map_err(|e| SeedError::Hashing(format!("{}: {}", user.id, e)))?;
                user.password = Some(hashed);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::repositories::InMemoryDashboardRepository;

    fn service_with(store: Arc<InMemoryDashboardRepository>) -> SeedService {
        SeedService::new(store, SeedStrategy::Swap, 4)
    }

    #[actix_web::test]
    async fn test_seed_counts_match_fixture_sizes() {
        let store = Arc::new(InMemoryDashboardRepository::new());
        let fixtures = FixtureSet::embedded().unwrap();
        let expected = fixtures.counts();

        let report = service_with(store.clone()).seed(fixtures).await.unwrap();

        assert_eq!(report.counts, expected);
        assert_eq!(report.count(CollectionKind::Users), 8);
        assert_eq!(report.total(), 30);
        assert!(report.finished_at >= report.started_at);
    }

    #[actix_web::test]
    async fn test_reseed_is_idempotent() {
        let store = Arc::new(InMemoryDashboardRepository::new());
        let service = service_with(store.clone());

        let first = service.seed(FixtureSet::embedded().unwrap()).await.unwrap();
        let second = service.seed(FixtureSet::embedded().unwrap()).await.unwrap();

        assert_eq!(first.counts, second.counts);
    }

    #[actix_web::test]
    async fn test_passwords_are_hashed() {
        let store = Arc::new(InMemoryDashboardRepository::new());
        let fixtures = FixtureSet::embedded().unwrap();
        let plain = fixtures.users[0].password.clone().unwrap();

        service_with(store.clone()).seed(fixtures).await.unwrap();

        let stored = store.raw_users().unwrap();
        let hashed = stored[0].password.as_deref().unwrap();
        assert_ne!(hashed, plain);
        assert!(bcrypt::verify(&plain, hashed).unwrap());
    }

    #[actix_web::test]
    async fn test_invalid_fixture_leaves_previous_data() {
        let previous = FixtureSet::embedded().unwrap();
        let store = Arc::new(InMemoryDashboardRepository::with_data(previous.clone()));

        let mut broken = FixtureSet::embedded().unwrap();
        broken.users.truncate(1);
        broken.users[0].email = "broken".to_string();

        let result = service_with(store.clone()).seed(broken).await;

        assert!(matches!(result, Err(SeedError::Validation(_))));
        assert_eq!(store.count(CollectionKind::Users).await.unwrap(), 8);
        assert_eq!(store.raw_users().unwrap(), previous.users);
    }

    #[actix_web::test]
    async fn test_store_failure_leaves_previous_data() {
        let previous = FixtureSet::embedded().unwrap();
        let store = Arc::new(InMemoryDashboardRepository::with_data(previous.clone()));
        store.fail_writes_at(Some(CollectionKind::ProductStats));

        let result = service_with(store.clone()).seed(FixtureSet::default()).await;

        assert!(matches!(result, Err(SeedError::Store(_))));
        assert_eq!(store.count(CollectionKind::Products).await.unwrap(), 5);
    }

    #[actix_web::test]
    async fn test_promote_failure_rolls_back_to_previous_data() {
        let previous = FixtureSet::embedded().unwrap();
        let store = Arc::new(InMemoryDashboardRepository::with_data(previous.clone()));
        store.fail_promote_at(Some(CollectionKind::OverallStats));

        let result = service_with(store.clone()).seed(FixtureSet::default()).await;

        match result {
            Err(e @ SeedError::Store(AppError::DatabaseError(_))) => assert!(e.live_data_intact()),
            other => panic!("expected rolled back store error, got {:?}", other),
        }
        assert_eq!(store.snapshot().unwrap(), previous);
    }

    #[actix_web::test]
    async fn test_failed_rollback_reports_mixed_data() {
        let store = Arc::new(InMemoryDashboardRepository::with_data(FixtureSet::embedded().unwrap()));
        store.fail_promote_at(Some(CollectionKind::OverallStats));
        store.fail_restore_at(Some(CollectionKind::Products));

        let err = service_with(store.clone()).seed(FixtureSet::default()).await.unwrap_err();

        assert!(!err.live_data_intact());
        // 복원되지 못한 products만 새 (빈) 데이터
        assert_eq!(store.count(CollectionKind::Products).await.unwrap(), 0);
        assert_eq!(store.count(CollectionKind::Users).await.unwrap(), 8);
    }

    #[actix_web::test]
    async fn test_empty_fixtures_clear_collections() {
        let store = Arc::new(InMemoryDashboardRepository::with_data(FixtureSet::embedded().unwrap()));

        let report = service_with(store.clone()).seed(FixtureSet::default()).await.unwrap();

        assert_eq!(report.total(), 0);
        assert_eq!(report.counts.len(), 6);
    }
}
