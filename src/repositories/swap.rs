//! # 컬렉션 교체 (staged swap)
//!
//! `SeedStrategy::Swap`의 단계 순서와 실패 처리를 저장소 구현과 분리합니다.
//! 각 저장소는 [`SwapSteps`]의 개별 단계만 구현하고, 순서와 롤백은
//! [`swap_all`]이 담당합니다.
//!
//! ```text
//! 1. stage(kind)             모든 kind를 <name>__staging 에 적재
//!    실패 → 스테이징 정리, 운영 컬렉션 변경 없음
//!
//! 2. kind 마다 (SEED_ORDER):
//!      backup(kind)          <name>        → <name>__previous
//!      promote(kind)         <name>__staging → <name>
//!    실패 → 백업한 kind를 역순으로 restore, 스테이징 정리
//!
//! 3. drop_backup(kind)       모든 교체가 끝난 뒤 백업 삭제
//! ```
//!
//! 롤백이 모두 성공하면 `AppError::DatabaseError`를 반환하며 운영 데이터는
//! 교체 전과 같습니다. 복원에 실패한 kind가 있으면 `AppError::PartialReplace`에
//! 그 컬렉션 이름이 담기고, 해당 백업(`__previous`)은 수동 복구를 위해 남겨 둡니다.

use async_trait::async_trait;
use log::{error, info, warn};
use crate::domain::entities::CollectionKind;
use crate::errors::{AppError, AppResult};
use crate::fixtures::FixtureSet;

/// staged swap의 개별 단계
#[async_trait]
pub trait SwapSteps: Send + Sync {
    /// `kind` 픽스처를 스테이징 컬렉션에 적재합니다. 이전 스테이징은 덮어씁니다.
    async fn stage(&self, kind: CollectionKind, fixtures: &FixtureSet) -> AppResult<()>;

    /// 운영 컬렉션을 백업 이름으로 옮깁니다.
    async fn backup(&self, kind: CollectionKind) -> AppResult<()>;

    /// 스테이징 컬렉션을 운영 이름으로 옮깁니다.
    async fn promote(&self, kind: CollectionKind) -> AppResult<()>;

    /// 백업을 운영 이름으로 되돌립니다. 운영 이름의 컬렉션은 대체됩니다.
    async fn restore(&self, kind: CollectionKind) -> AppResult<()>;

    async fn drop_staging(&self, kind: CollectionKind) -> AppResult<()>;

    async fn drop_backup(&self, kind: CollectionKind) -> AppResult<()>;
}

/// 여섯 컬렉션을 스테이징 후 교체합니다.
pub async fn swap_all<S>(steps: &S, fixtures: &FixtureSet) -> AppResult<()>
where
    S: SwapSteps + ?Sized,
{
    for kind in CollectionKind::SEED_ORDER {
        if let Err(e) = steps.stage(kind, fixtures).await {
            error!("❌ {} 스테이징 실패: {}", kind, e);
            drop_all_staging(steps).await;
            return Err(e);
        }
    }

    let mut backed_up = Vec::with_capacity(CollectionKind::SEED_ORDER.len());

    for kind in CollectionKind::SEED_ORDER {
        let result = match steps.backup(kind).await {
            Ok(()) => {
                backed_up.push(kind);
                steps.promote(kind).await
            }
            Err(e) => Err(e),
        };

        if let Err(e) = result {
            error!("❌ {} 교체 실패: {}", kind, e);
            return Err(roll_back(steps, &backed_up, kind, e).await);
        }
    }

    for kind in backed_up {
        if let Err(e) = steps.drop_backup(kind).await {
            warn!("⚠️ 백업 컬렉션 정리 실패 ({}): {}", kind.backup_name(), e);
        }
    }

    info!("✅ 스테이징 컬렉션 교체 완료");
    Ok(())
}

async fn roll_back<S>(
    steps: &S,
    backed_up: &[CollectionKind],
    failed: CollectionKind,
    cause: AppError,
) -> AppError
where
    S: SwapSteps + ?Sized,
{
    warn!("↩️ 롤백 시작: {}개 컬렉션 복원", backed_up.len());

    let mut unrestored = Vec::new();
    for kind in backed_up.iter().rev() {
        if let Err(e) = steps.restore(*kind).await {
            error!("❌ {} 복원 실패: {}", kind, e);
            unrestored.push(kind.collection_name());
        }
    }

    drop_all_staging(steps).await;

    if unrestored.is_empty() {
        info!("↩️ 롤백 완료: 운영 데이터는 교체 전과 같습니다");
        AppError::DatabaseError(format!("{} 교체 실패, 이전 데이터로 롤백됨: {}", failed, cause))
    } else {
        unrestored.reverse();
        AppError::PartialReplace(format!(
            "{} 교체 실패 후 복원되지 않은 컬렉션: [{}] ({})",
            failed,
            unrestored.join(", "),
            cause
        ))
    }
}

async fn drop_all_staging<S>(steps: &S)
where
    S: SwapSteps + ?Sized,
{
    for kind in CollectionKind::SEED_ORDER {
        if let Err(e) = steps.drop_staging(kind).await {
            warn!("⚠️ 스테이징 컬렉션 정리 실패 ({}): {}", kind.staging_name(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{DashboardStore, InMemoryDashboardRepository};

    fn previous() -> FixtureSet {
        FixtureSet::embedded().unwrap()
    }

    fn replacement() -> FixtureSet {
        let mut next = FixtureSet::embedded().unwrap();
        next.users.truncate(2);
        next.products.truncate(1);
        next.product_stats.truncate(1);
        next.transactions.truncate(3);
        next.affiliate_stats.truncate(1);
        next
    }

    async fn live_counts(store: &InMemoryDashboardRepository) -> Vec<u64> {
        let mut counts = Vec::new();
        for kind in CollectionKind::SEED_ORDER {
            counts.push(store.count(kind).await.unwrap());
        }
        counts
    }

    #[actix_web::test]
    async fn test_swap_replaces_every_kind_and_clears_shadows() {
        let store = InMemoryDashboardRepository::with_data(previous());

        swap_all(&store, &replacement()).await.unwrap();

        assert_eq!(live_counts(&store).await, vec![2, 1, 1, 3, 1, 1]);
        assert!(store.staged_kinds().unwrap().is_empty());
        assert!(store.backed_up_kinds().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_stage_failure_at_each_kind_changes_nothing() {
        for failing in CollectionKind::SEED_ORDER {
            let store = InMemoryDashboardRepository::with_data(previous());
            store.fail_writes_at(Some(failing));

            let result = swap_all(&store, &replacement()).await;

            assert!(result.is_err(), "{}", failing);
            assert_eq!(store.snapshot().unwrap(), previous(), "{}", failing);
            assert!(store.staged_kinds().unwrap().is_empty(), "{}", failing);
        }
    }

    #[actix_web::test]
    async fn test_promote_failure_rolls_back_promoted_kinds() {
        let store = InMemoryDashboardRepository::with_data(previous());
        store.fail_promote_at(Some(CollectionKind::Transactions));

        let result = swap_all(&store, &replacement()).await;

        assert!(matches!(result, Err(AppError::DatabaseError(_))));
        assert_eq!(store.snapshot().unwrap(), previous());
        assert!(store.staged_kinds().unwrap().is_empty());
        assert!(store.backed_up_kinds().unwrap().is_empty());
    }

    #[actix_web::test]
    async fn test_failed_restore_reports_partial_replace() {
        let store = InMemoryDashboardRepository::with_data(previous());
        store.fail_promote_at(Some(CollectionKind::Transactions));
        store.fail_restore_at(Some(CollectionKind::Users));

        let result = swap_all(&store, &replacement()).await;

        match result {
            Err(AppError::PartialReplace(msg)) => {
                assert!(msg.contains("[users]"));
            }
            other => panic!("expected PartialReplace, got {:?}", other),
        }

        // users는 새 데이터, 나머지는 복원됨
        assert_eq!(store.count(CollectionKind::Users).await.unwrap(), 2);
        assert_eq!(store.count(CollectionKind::Products).await.unwrap(), 5);
        assert_eq!(store.count(CollectionKind::Transactions).await.unwrap(), 8);
        assert!(store.staged_kinds().unwrap().is_empty());
        assert_eq!(store.backed_up_kinds().unwrap(), vec![CollectionKind::Users]);
    }
}
