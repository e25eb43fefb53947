//! # Dashboard Store
//!
//! 데이터 액세스 계층의 경계 trait입니다. 핸들러와 시드 로더는 이 trait만을
//! 통해 저장소에 접근하며, 실제 구현은 MongoDB([`MongoDashboardRepository`])와
//! 인메모리([`InMemoryDashboardRepository`]) 두 가지가 있습니다.
//!
//! ## 자격 증명 제외 규칙
//!
//! 사용자를 반환하는 모든 메서드는 `password`가 `None`인 레코드를 돌려줘야 합니다.
//! MongoDB 구현은 `{ password: 0 }` 프로젝션으로 이를 보장합니다.
//!
//! ## 동시성
//!
//! 구현체는 `Send + Sync`이며 여러 actix 워커에서 동시에 호출됩니다.
//! 호출자는 조회들 사이의 직렬화를 가정하지 않습니다.
//!
//! [`MongoDashboardRepository`]: crate::repositories::mongo_repo::MongoDashboardRepository
//! [`InMemoryDashboardRepository`]: crate::repositories::memory_repo::InMemoryDashboardRepository

use async_trait::async_trait;
use crate::config::SeedStrategy;
use crate::domain::entities::{
    AffiliateStat, CollectionKind, OverallStat, Product, ProductStat, Role, Transaction, User,
};
use crate::errors::AppResult;
use crate::fixtures::FixtureSet;

#[async_trait]
pub trait DashboardStore: Send + Sync {
    /// 역할이 일치하는 사용자 (자격 증명 제외)
    async fn find_users_by_role(&self, role: Role) -> AppResult<Vec<User>>;

    /// 전체 사용자 (자격 증명 제외)
    async fn find_all_users(&self) -> AppResult<Vec<User>>;

    /// ID로 사용자 조회 (자격 증명 제외)
    async fn find_user_by_id(&self, id: &str) -> AppResult<Option<User>>;

    async fn find_products(&self) -> AppResult<Vec<Product>>;

    async fn find_product_stats(&self) -> AppResult<Vec<ProductStat>>;

    async fn find_transactions(&self) -> AppResult<Vec<Transaction>>;

    /// 주어진 ID 목록에 해당하는 거래. 없는 ID는 무시됩니다.
    async fn find_transactions_by_ids(&self, ids: &[String]) -> AppResult<Vec<Transaction>>;

    async fn find_overall_stats(&self) -> AppResult<Vec<OverallStat>>;

    async fn find_affiliate_stat_by_user(&self, user_id: &str) -> AppResult<Option<AffiliateStat>>;

    /// 컬렉션의 레코드 수
    async fn count(&self, kind: CollectionKind) -> AppResult<u64>;

    /// 여섯 컬렉션 전체를 픽스처로 교체합니다.
    ///
    /// 실패하면 기존 데이터가 그대로 남아 있어야 합니다.
    async fn replace_all(&self, fixtures: &FixtureSet, strategy: SeedStrategy) -> AppResult<()>;
}
