//! # MongoDB 대시보드 리포지토리
//!
//! [`DashboardStore`]의 MongoDB 구현입니다. 모든 조회는 단일 `find` 호출이며
//! 정렬, 페이징, 캐싱은 하지 않습니다.
//!
//! ## 컬렉션 교체 전략
//!
//! ### `SeedStrategy::Transaction`
//! 여섯 개의 `deleteMany` + `insertMany` 쌍을 하나의 멀티 도큐먼트 트랜잭션에서
//! 실행합니다. replica set(또는 sharded cluster)이 필요하며, 실패 시 트랜잭션을
//! abort 하므로 어떤 컬렉션도 바뀌지 않습니다.
//!
//! ### `SeedStrategy::Swap`
//! 각 컬렉션을 `<name>__staging`에 먼저 적재합니다. 적재 중 실패하면 스테이징
//! 컬렉션을 정리하고 운영 데이터는 건드리지 않습니다. 여섯 개가 모두 적재되면
//! 컬렉션마다 운영 컬렉션을 `<name>__previous`로 옮긴 뒤 스테이징을 운영 이름으로
//! 옮깁니다 (`renameCollection { dropTarget: true }`). 이 구간에서 실패하면 이미
//! 옮긴 컬렉션을 `__previous`에서 역순으로 되돌립니다. 순서와 롤백은
//! [`swap_all`]에 있고 이 모듈은 각 단계만 구현합니다.
//!
//! 되돌리기까지 실패하면 운영 데이터는 컬렉션 단위로 이전/새 데이터가 섞인 상태가
//! 되며, `AppError::PartialReplace`가 복원되지 않은 컬렉션을 알려 줍니다. 이때
//! `__previous` 컬렉션은 수동 복구를 위해 남겨 둡니다.
//! 부트스트랩은 리스너 시작 전에 시드하므로 교체 중에 요청이 들어오지 않습니다.

use std::sync::Arc;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use log::{debug, info, warn};
use mongodb::bson::{doc, Document};
use mongodb::{ClientSession, Collection};
use serde::de::DeserializeOwned;
use serde::Serialize;
use crate::config::SeedStrategy;
use crate::db::Database;
use crate::domain::entities::{
    AffiliateStat, CollectionKind, OverallStat, Product, ProductStat, Role, Transaction, User,
};
use crate::errors::AppResult;
use crate::fixtures::FixtureSet;
use crate::repositories::store::DashboardStore;
use crate::repositories::swap::{swap_all, SwapSteps};

/// MongoDB 기반 대시보드 리포지토리
#[derive(Clone)]
pub struct MongoDashboardRepository {
    db: Arc<Database>,
}

impl MongoDashboardRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    fn collection<T: Send + Sync>(&self, kind: CollectionKind) -> Collection<T> {
        self.db.get_database().collection::<T>(kind.collection_name())
    }

    /// 자격 증명을 제외하는 사용자 프로젝션
    fn user_projection() -> Document {
        doc! { "password": 0 }
    }

    async fn find_users(&self, filter: Document) -> AppResult<Vec<User>> {
        let users = self.collection::<User>(CollectionKind::Users)
            .find(filter)
            .projection(Self::user_projection())
            .await?
            .try_collect::<Vec<_>>()
            .await?;

        Ok(users)
    }

    async fn find_all<T>(&self, kind: CollectionKind) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned + Send + Sync,
    {
        let records = self.collection::<T>(kind)
            .find(doc! {})
            .await?
            .try_collect::<Vec<_>>()
            .await?;

        Ok(records)
    }

    // ---- Transaction strategy -------------------------------------------

    async fn replace_with_transaction(&self, fixtures: &FixtureSet) -> AppResult<()> {
        let mut session = self.db.client().start_session().await?;
        session.start_transaction().await?;

        match self.write_all_in_session(&mut session, fixtures).await {
            Ok(()) => {
                session.commit_transaction().await?;
                info!("✅ 트랜잭션 커밋 완료");
                Ok(())
            }
            Err(e) => {
                if let Err(abort_err) = session.abort_transaction().await {
                    warn!("⚠️ 트랜잭션 abort 실패: {}", abort_err);
                }
                Err(e)
            }
        }
    }

    async fn write_all_in_session(
        &self,
        session: &mut ClientSession,
        fixtures: &FixtureSet,
    ) -> AppResult<()> {
        self.replace_in_session(session, CollectionKind::Users, &fixtures.users).await?;
        self.replace_in_session(session, CollectionKind::Products, &fixtures.products).await?;
        self.replace_in_session(session, CollectionKind::ProductStats, &fixtures.product_stats).await?;
        self.replace_in_session(session, CollectionKind::Transactions, &fixtures.transactions).await?;
        self.replace_in_session(session, CollectionKind::OverallStats, &fixtures.overall_stats).await?;
        self.replace_in_session(session, CollectionKind::AffiliateStats, &fixtures.affiliate_stats).await?;
        Ok(())
    }

    async fn replace_in_session<T>(
        &self,
        session: &mut ClientSession,
        kind: CollectionKind,
        records: &[T],
    ) -> AppResult<()>
    where
        T: Serialize + Send + Sync,
    {
        let collection = self.collection::<T>(kind);

        let deleted = collection
            .delete_many(doc! {})
            .session(&mut *session)
            .await?;

        if !records.is_empty() {
            collection
                .insert_many(records)
                .session(&mut *session)
                .await?;
        }

        debug!("   ├─ {}: {}건 삭제, {}건 삽입", kind, deleted.deleted_count, records.len());
        Ok(())
    }

    // ---- Staged swap strategy -------------------------------------------

    async fn stage_records<T>(&self, kind: CollectionKind, records: &[T]) -> AppResult<()>
    where
        T: Serialize + Send + Sync,
    {
        let database = self.db.get_database();
        let staging = database.collection::<T>(&kind.staging_name());

        // 이전 실행에서 남은 스테이징 컬렉션 제거
        staging.drop().await?;

        if records.is_empty() {
            // rename 대상이 존재하도록 빈 컬렉션을 만든다
            database.create_collection(kind.staging_name()).await?;
        } else {
            staging.insert_many(records).await?;
        }

        debug!("   ├─ {}: {}건 스테이징", kind.staging_name(), records.len());
        Ok(())
    }

    async fn ensure_exists(&self, name: &str) -> AppResult<()> {
        let database = self.db.get_database();
        let existing = database
            .list_collection_names()
            .filter(doc! { "name": name })
            .await?;

        if existing.is_empty() {
            database.create_collection(name).await?;
        }
        Ok(())
    }

    /// 같은 데이터베이스 안에서 컬렉션 이름을 바꿉니다. 대상이 있으면 대체됩니다.
    async fn rename(&self, from: &str, to: &str) -> AppResult<()> {
        let db_name = self.db.database_name();

        self.db
            .client()
            .database("admin")
            .run_command(doc! {
                "renameCollection": format!("{}.{}", db_name, from),
                "to": format!("{}.{}", db_name, to),
                "dropTarget": true,
            })
            .await?;

        debug!("   ├─ {} → {}", from, to);
        Ok(())
    }

    async fn drop_named(&self, name: &str) -> AppResult<()> {
        self.db
            .get_database()
            .collection::<Document>(name)
            .drop()
            .await?;
        Ok(())
    }
}

#[async_trait]
impl SwapSteps for MongoDashboardRepository {
    async fn stage(&self, kind: CollectionKind, fixtures: &FixtureSet) -> AppResult<()> {
        match kind {
            CollectionKind::Users => self.stage_records(kind, &fixtures.users).await,
            CollectionKind::Products => self.stage_records(kind, &fixtures.products).await,
            CollectionKind::ProductStats => self.stage_records(kind, &fixtures.product_stats).await,
            CollectionKind::Transactions => self.stage_records(kind, &fixtures.transactions).await,
            CollectionKind::OverallStats => self.stage_records(kind, &fixtures.overall_stats).await,
            CollectionKind::AffiliateStats => self.stage_records(kind, &fixtures.affiliate_stats).await,
        }
    }

    async fn backup(&self, kind: CollectionKind) -> AppResult<()> {
        // 첫 시드에서는 운영 컬렉션이 없을 수 있다
        self.ensure_exists(kind.collection_name()).await?;
        self.rename(kind.collection_name(), &kind.backup_name()).await
    }

    async fn promote(&self, kind: CollectionKind) -> AppResult<()> {
        self.rename(&kind.staging_name(), kind.collection_name()).await
    }

    async fn restore(&self, kind: CollectionKind) -> AppResult<()> {
        self.rename(&kind.backup_name(), kind.collection_name()).await
    }

    async fn drop_staging(&self, kind: CollectionKind) -> AppResult<()> {
        self.drop_named(&kind.staging_name()).await
    }

    async fn drop_backup(&self, kind: CollectionKind) -> AppResult<()> {
        self.drop_named(&kind.backup_name()).await
    }
}

#[async_trait]
impl DashboardStore for MongoDashboardRepository {
    async fn find_users_by_role(&self, role: Role) -> AppResult<Vec<User>> {
        self.find_users(doc! { "role": role.as_str() }).await
    }

    async fn find_all_users(&self) -> AppResult<Vec<User>> {
        self.find_users(doc! {}).await
    }

    async fn find_user_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let user = self.collection::<User>(CollectionKind::Users)
            .find_one(doc! { "_id": id })
            .projection(Self::user_projection())
            .await?;

        Ok(user)
    }

    async fn find_products(&self) -> AppResult<Vec<Product>> {
        self.find_all(CollectionKind::Products).await
    }

    async fn find_product_stats(&self) -> AppResult<Vec<ProductStat>> {
        self.find_all(CollectionKind::ProductStats).await
    }

    async fn find_transactions(&self) -> AppResult<Vec<Transaction>> {
        self.find_all(CollectionKind::Transactions).await
    }

    async fn find_transactions_by_ids(&self, ids: &[String]) -> AppResult<Vec<Transaction>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let transactions = self.collection::<Transaction>(CollectionKind::Transactions)
            .find(doc! { "_id": { "$in": ids.to_vec() } })
            .await?
            .try_collect::<Vec<_>>()
            .await?;

        Ok(transactions)
    }

    async fn find_overall_stats(&self) -> AppResult<Vec<OverallStat>> {
        self.find_all(CollectionKind::OverallStats).await
    }

    async fn find_affiliate_stat_by_user(&self, user_id: &str) -> AppResult<Option<AffiliateStat>> {
        let stat = self.collection::<AffiliateStat>(CollectionKind::AffiliateStats)
            .find_one(doc! { "userId": user_id })
            .await?;

        Ok(stat)
    }

    async fn count(&self, kind: CollectionKind) -> AppResult<u64> {
        let count = self.collection::<Document>(kind)
            .count_documents(doc! {})
            .await?;

        Ok(count)
    }

    async fn replace_all(&self, fixtures: &FixtureSet, strategy: SeedStrategy) -> AppResult<()> {
        info!("🔁 컬렉션 교체 시작 (strategy: {})", strategy.as_str());

        match strategy {
            SeedStrategy::Transaction => self.replace_with_transaction(fixtures).await,
            SeedStrategy::Swap => swap_all(self, fixtures).await,
        }
    }
}
