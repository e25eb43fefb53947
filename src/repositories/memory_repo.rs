//! # 인메모리 대시보드 리포지토리
//!
//! MongoDB 없이 [`DashboardStore`] 계약을 만족하는 구현입니다.
//! 핸들러/시드 테스트에서 사용되며, 장애 상황을 흉내 낼 수 있습니다.
//!
//! - [`set_unavailable`](InMemoryDashboardRepository::set_unavailable): 모든 호출이
//!   `AppError::StoreUnavailable`을 반환
//! - [`fail_writes_at`](InMemoryDashboardRepository::fail_writes_at): 지정한 컬렉션을
//!   스테이징(또는 트랜잭션 안에서 쓰기)할 때 실패
//! - [`fail_promote_at`](InMemoryDashboardRepository::fail_promote_at): 지정한 컬렉션을
//!   운영 이름으로 옮길 때 실패
//! - [`fail_restore_at`](InMemoryDashboardRepository::fail_restore_at): 롤백 중 지정한
//!   컬렉션 복원이 실패
//!
//! `SeedStrategy::Swap`은 MongoDB 구현과 같은 [`swap_all`] 순서를 따르며, 스테이징과
//! 백업 컬렉션은 별도의 그림자 묶음으로 흉내 냅니다. 락은 await 구간을 넘어 잡지
//! 않고, 두 락이 필요하면 항상 운영 데이터 락을 먼저 잡습니다.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard, RwLock, RwLockReadGuard, RwLockWriteGuard};
use async_trait::async_trait;
use log::debug;
use crate::config::SeedStrategy;
use crate::domain::entities::{
    AffiliateStat, CollectionKind, OverallStat, Product, ProductStat, Role, Transaction, User,
};
use crate::errors::{AppError, AppResult, ErrorContext};
use crate::fixtures::FixtureSet;
use crate::repositories::store::DashboardStore;
use crate::repositories::swap::{swap_all, SwapSteps};

/// 단계별로 주입할 실패 지점
#[derive(Debug, Default, Clone, Copy)]
struct FailurePlan {
    stage: Option<CollectionKind>,
    promote: Option<CollectionKind>,
    restore: Option<CollectionKind>,
}

/// `__staging` / `__previous` 컬렉션 흉내
#[derive(Debug, Default)]
struct Shadow {
    data: FixtureSet,
    present: BTreeSet<CollectionKind>,
}

impl Shadow {
    fn take_from(&mut self, source: &FixtureSet, kind: CollectionKind) {
        self.data.copy_kind_from(source, kind);
        self.present.insert(kind);
    }

    fn remove(&mut self, kind: CollectionKind) {
        self.data.clear_kind(kind);
        self.present.remove(&kind);
    }

    fn kinds(&self) -> Vec<CollectionKind> {
        self.present.iter().copied().collect()
    }
}

#[derive(Default)]
pub struct InMemoryDashboardRepository {
    data: RwLock<FixtureSet>,
    staging: Mutex<Shadow>,
    backup: Mutex<Shadow>,
    unavailable: AtomicBool,
    failures: Mutex<FailurePlan>,
}

impl InMemoryDashboardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 주어진 데이터로 미리 채워진 저장소. 자격 증명은 그대로 보관됩니다.
    pub fn with_data(data: FixtureSet) -> Self {
        Self {
            data: RwLock::new(data),
            ..Self::default()
        }
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// 다음 교체부터 `kind` 컬렉션을 쓸 때 실패하도록 설정합니다. `None`이면 해제.
    pub fn fail_writes_at(&self, kind: Option<CollectionKind>) {
        self.plan_failure(|plan| plan.stage = kind);
    }

    /// 스테이징된 `kind`를 운영 이름으로 옮길 때 실패하도록 설정합니다.
    pub fn fail_promote_at(&self, kind: Option<CollectionKind>) {
        self.plan_failure(|plan| plan.promote = kind);
    }

    /// 롤백 중 `kind` 복원이 실패하도록 설정합니다.
    pub fn fail_restore_at(&self, kind: Option<CollectionKind>) {
        self.plan_failure(|plan| plan.restore = kind);
    }

    /// 저장된 원본 사용자 (테스트에서 해시 적용 여부 확인용)
    pub fn raw_users(&self) -> AppResult<Vec<User>> {
        Ok(self.read()?.users.clone())
    }

    /// 운영 데이터 전체의 복사본
    pub fn snapshot(&self) -> AppResult<FixtureSet> {
        Ok(self.read()?.clone())
    }

    /// 남아 있는 스테이징 컬렉션
    pub fn staged_kinds(&self) -> AppResult<Vec<CollectionKind>> {
        Ok(self.shadow(&self.staging, "스테이징")?.kinds())
    }

    /// 남아 있는 백업 컬렉션
    pub fn backed_up_kinds(&self) -> AppResult<Vec<CollectionKind>> {
        Ok(self.shadow(&self.backup, "백업")?.kinds())
    }

    fn plan_failure<F>(&self, apply: F)
    where
        F: FnOnce(&mut FailurePlan),
    {
        if let Ok(mut plan) = self.failures.lock() {
            apply(&mut plan);
        }
    }

    fn failure_plan(&self) -> AppResult<FailurePlan> {
        Ok(*self.failures.lock().context("실패 설정 락이 오염되었습니다")?)
    }

    fn ensure_available(&self) -> AppResult<()> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::StoreUnavailable("in-memory store is offline".to_string()));
        }
        Ok(())
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, FixtureSet>> {
        self.ensure_available()?;
        self.data
            .read()
            .context("저장소 락이 오염되었습니다")
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, FixtureSet>> {
        self.ensure_available()?;
        self.data
            .write()
            .context("저장소 락이 오염되었습니다")
    }

    fn shadow<'a>(&self, shadow: &'a Mutex<Shadow>, name: &str) -> AppResult<MutexGuard<'a, Shadow>> {
        shadow
            .lock()
            .with_context(|| format!("{} 컬렉션 락이 오염되었습니다", name))
    }

    fn simulated_failure(step: &str, planned: Option<CollectionKind>, kind: CollectionKind) -> AppResult<()> {
        if planned == Some(kind) {
            return Err(AppError::DatabaseError(format!("{} {} 실패 (simulated)", kind, step)));
        }
        Ok(())
    }

    fn users_where<F>(&self, predicate: F) -> AppResult<Vec<User>>
    where
        F: Fn(&User) -> bool,
    {
        Ok(self.read()?
            .users
            .iter()
            .filter(|u| predicate(u))
            .cloned()
            .map(User::without_password)
            .collect())
    }

    /// 트랜잭션 교체: 모든 쓰기가 성공해야 한 번에 반영됩니다.
    fn replace_in_transaction(&self, fixtures: &FixtureSet) -> AppResult<()> {
        let plan = self.failure_plan()?;
        for kind in CollectionKind::SEED_ORDER {
            Self::simulated_failure("쓰기", plan.stage, kind)?;
        }

        let mut data = self.write()?;
        *data = fixtures.clone();
        Ok(())
    }
}

#[async_trait]
impl SwapSteps for InMemoryDashboardRepository {
    async fn stage(&self, kind: CollectionKind, fixtures: &FixtureSet) -> AppResult<()> {
        self.ensure_available()?;
        Self::simulated_failure("스테이징", self.failure_plan()?.stage, kind)?;

        self.shadow(&self.staging, "스테이징")?.take_from(fixtures, kind);
        debug!("staged {} ({} records)", kind.staging_name(), fixtures.count(kind));
        Ok(())
    }

    async fn backup(&self, kind: CollectionKind) -> AppResult<()> {
        let mut data = self.write()?;
        self.shadow(&self.backup, "백업")?.take_from(&data, kind);
        data.clear_kind(kind);
        Ok(())
    }

    async fn promote(&self, kind: CollectionKind) -> AppResult<()> {
        Self::simulated_failure("교체", self.failure_plan()?.promote, kind)?;

        let mut data = self.write()?;
        let mut staging = self.shadow(&self.staging, "스테이징")?;
        if !staging.present.contains(&kind) {
            return Err(AppError::DatabaseError(format!("{} 이(가) 없습니다", kind.staging_name())));
        }

        data.copy_kind_from(&staging.data, kind);
        staging.remove(kind);
        Ok(())
    }

    async fn restore(&self, kind: CollectionKind) -> AppResult<()> {
        Self::simulated_failure("복원", self.failure_plan()?.restore, kind)?;

        let mut data = self.write()?;
        let mut backup = self.shadow(&self.backup, "백업")?;
        if !backup.present.contains(&kind) {
            return Err(AppError::DatabaseError(format!("{} 이(가) 없습니다", kind.backup_name())));
        }

        data.copy_kind_from(&backup.data, kind);
        backup.remove(kind);
        Ok(())
    }

    async fn drop_staging(&self, kind: CollectionKind) -> AppResult<()> {
        self.shadow(&self.staging, "스테이징")?.remove(kind);
        Ok(())
    }

    async fn drop_backup(&self, kind: CollectionKind) -> AppResult<()> {
        self.shadow(&self.backup, "백업")?.remove(kind);
        Ok(())
    }
}

#[async_trait]
impl DashboardStore for InMemoryDashboardRepository {
    async fn find_users_by_role(&self, role: Role) -> AppResult<Vec<User>> {
        self.users_where(|u| u.role == role)
    }

    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        self.users_where(|_| true)
    }

    async fn find_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        Ok(self.users_where(|u| u.id == id)?.into_iter().next())
    }

    async fn find_products(&self) -> AppResult<Vec<Product>> {
        Ok(self.read()?.products.clone())
    }

    async fn find_product_stats(&self) -> AppResult<Vec<ProductStat>> {
        Ok(self.read()?.product_stats.clone())
    }

    async fn find_transactions(&self) -> AppResult<Vec<Transaction>> {
        Ok(self.read()?.transactions.clone())
    }

    async fn find_transactions_by_ids(&self, ids: &[String]) -> AppResult<Vec<Transaction>> {
        Ok(self.read()?
            .transactions
            .iter()
            .filter(|t| ids.contains(&t.id))
            .cloned()
            .collect())
    }

    async fn find_overall_stats(&self) -> AppResult<Vec<OverallStat>> {
        Ok(self.read()?.overall_stats.clone())
    }

    async fn find_affiliate_stat_by_user(&self, user_id: &str) -> AppResult<Option<AffiliateStat>> {
        Ok(self.read()?
            .affiliate_stats
            .iter()
            .find(|s| s.user_id == user_id)
            .cloned())
    }

    async fn count(&self, kind: CollectionKind) -> AppResult<u64> {
        Ok(self.read()?.count(kind))
    }

    async fn replace_all(&self, fixtures: &FixtureSet, strategy: SeedStrategy) -> AppResult<()> {
        self.ensure_available()?;

        match strategy {
            SeedStrategy::Swap => swap_all(self, fixtures).await,
            SeedStrategy::Transaction => self.replace_in_transaction(fixtures),
        }
    }
}
