//! # 대시보드 조회 서비스
//!
//! HTTP 핸들러가 호출하는 조회 로직입니다. 각 메서드는 저장소 읽기 후
//! 필요한 경우 메모리에서 조합만 수행하며, 사용자 응답은 항상
//! [`UserResponse`]로 변환되어 자격 증명이 직렬화될 수 없습니다.
//!
//! | 메서드 | 저장소 호출 |
//! |--------|-------------|
//! | [`get_admins`](DashboardService::get_admins) | `find_users_by_role(Admin)` |
//! | [`get_customers`](DashboardService::get_customers) | `find_users_by_role(User)` |
//! | [`get_products`](DashboardService::get_products) | `find_products` + `find_product_stats` |
//! | [`get_transactions`](DashboardService::get_transactions) | `find_transactions` |
//! | [`get_geography`](DashboardService::get_geography) | `find_all_users` |
//! | [`get_user`](DashboardService::get_user) | `find_user_by_id` |
//! | [`get_performance`](DashboardService::get_performance) | 사용자 + 제휴 실적 + 거래 |
//! | [`get_sales`](DashboardService::get_sales) | `find_overall_stats` |

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use log::debug;
use crate::domain::dto::{AffiliatePerformance, GeographyEntry, ProductWithStats, UserResponse};
use crate::domain::entities::validation::is_object_id;
use crate::domain::entities::{OverallStat, ProductStat, Role, Transaction};
use crate::errors::{AppError, AppResult};
use crate::repositories::DashboardStore;

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<dyn DashboardStore>,
}

impl DashboardService {
    pub fn new(store: Arc<dyn DashboardStore>) -> Self {
        Self { store }
    }

    /// `role == admin` 인 사용자 목록
    pub async fn get_admins(&self) -> AppResult<Vec<UserResponse>> {
        let admins = self.store.find_users_by_role(Role::Admin).await?;
        debug!("관리자 {}명 조회", admins.len());
        Ok(admins.into_iter().map(UserResponse::from).collect())
    }

    /// `role == user` 인 고객 목록
    pub async fn get_customers(&self) -> AppResult<Vec<UserResponse>> {
        let customers = self.store.find_users_by_role(Role::User).await?;
        Ok(customers.into_iter().map(UserResponse::from).collect())
    }

    /// 상품마다 `productId`가 일치하는 통계를 붙여 반환합니다.
    pub async fn get_products(&self) -> AppResult<Vec<ProductWithStats>> {
        let products = self.store.find_products().await?;
        let stats = self.store.find_product_stats().await?;

        let mut stats_by_product: HashMap<String, Vec<ProductStat>> = HashMap::new();
        for stat in stats {
            stats_by_product.entry(stat.product_id.clone()).or_default().push(stat);
        }

        Ok(products
            .into_iter()
            .map(|product| {
                let stat = stats_by_product.remove(&product.id).unwrap_or_default();
                ProductWithStats { product, stat }
            })
            .collect())
    }

    pub async fn get_transactions(&self) -> AppResult<Vec<Transaction>> {
        self.store.find_transactions().await
    }

    /// 국가 코드별 사용자 수. 국가가 없는 사용자는 제외되며 코드 순으로 정렬됩니다.
    ///
    /// 코드는 저장된 ISO-3166 alpha-2 값 그대로이며 alpha-3로 바꾸지 않습니다.
    pub async fn get_geography(&self) -> AppResult<Vec<GeographyEntry>> {
        let users = self.store.find_all_users().await?;

        let mut by_country: BTreeMap<String, u64> = BTreeMap::new();
        for country in users.into_iter().filter_map(|u| u.country) {
            *by_country.entry(country).or_insert(0) += 1;
        }

        Ok(by_country
            .into_iter()
            .map(|(id, value)| GeographyEntry { id, value })
            .collect())
    }

    /// ID로 단일 사용자를 조회합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 24자리 16진수가 아닌 ID
    /// * `AppError::NotFound` - 해당 ID의 사용자 없음
    pub async fn get_user(&self, id: &str) -> AppResult<UserResponse> {
        Self::ensure_object_id(id)?;

        self.store
            .find_user_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or_else(|| AppError::NotFound(format!("사용자를 찾을 수 없습니다: {}", id)))
    }

    /// 사용자와 그 사용자의 제휴 판매 거래를 반환합니다.
    ///
    /// 제휴 실적 문서가 없으면 `sales`는 빈 배열입니다.
    pub async fn get_performance(&self, id: &str) -> AppResult<AffiliatePerformance> {
        let user = self.get_user(id).await?;

        let sales = match self.store.find_affiliate_stat_by_user(id).await? {
            Some(stat) => self.store.find_transactions_by_ids(&stat.affiliate_sales).await?,
            None => Vec::new(),
        };

        Ok(AffiliatePerformance { user, sales })
    }

    /// 첫 번째 전체 판매 집계
    pub async fn get_sales(&self) -> AppResult<OverallStat> {
        self.store
            .find_overall_stats()
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| AppError::NotFound("판매 집계가 없습니다".to_string()))
    }

    fn ensure_object_id(id: &str) -> AppResult<()> {
        if is_object_id(id) {
            Ok(())
        } else {
            Err(AppError::ValidationError(format!("유효하지 않은 ID 형식입니다: {}", id)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;
    use crate::repositories::InMemoryDashboardRepository;

    fn seeded() -> DashboardService {
        let store = InMemoryDashboardRepository::with_data(FixtureSet::embedded().unwrap());
        DashboardService::new(Arc::new(store))
    }

    #[actix_web::test]
    async fn test_admins_only() {
        let admins = seeded().get_admins().await.unwrap();
        assert_eq!(admins.len(), 3);
        assert!(admins.iter().all(|a| a.role == Role::Admin));
    }

    #[actix_web::test]
    async fn test_products_joined_with_stats() {
        let products = seeded().get_products().await.unwrap();
        assert_eq!(products.len(), 5);
        for p in &products {
            assert_eq!(p.stat.len(), 1);
            assert_eq!(p.stat[0].product_id, p.product.id);
        }
    }

    #[actix_web::test]
    async fn test_geography_groups_by_country() {
        let geography = seeded().get_geography().await.unwrap();
        let indonesia = geography.iter().find(|g| g.id == "ID").unwrap();
        assert_eq!(indonesia.value, 2);
        assert_eq!(geography.iter().map(|g| g.value).sum::<u64>(), 8);
    }

    #[actix_web::test]
    async fn test_geography_keeps_alpha2_codes() {
        let geography = seeded().get_geography().await.unwrap();

        assert!(geography.iter().all(|g| g.id.len() == 2));
        assert!(geography.iter().all(|g| g.id.chars().all(|c| c.is_ascii_uppercase())));
        assert!(geography.iter().any(|g| g.id == "ID"));
        assert!(!geography.iter().any(|g| g.id == "IDN"));
    }

    #[actix_web::test]
    async fn test_get_user_rejects_malformed_id() {
        let result = seeded().get_user("not-an-id").await;
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[actix_web::test]
    async fn test_get_user_unknown_id() {
        let result = seeded().get_user("000000000000000000000000").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[actix_web::test]
    async fn test_performance_collects_affiliate_sales() {
        let performance = seeded().get_performance("63701cc1f03239c72c000181").await.unwrap();
        assert_eq!(performance.user.id, "63701cc1f03239c72c000181");
        assert_eq!(performance.sales.len(), 3);
    }

    #[actix_web::test]
    async fn test_performance_without_affiliate_stat() {
        let performance = seeded().get_performance("63701cc1f03239c72c00017f").await.unwrap();
        assert!(performance.sales.is_empty());
    }

    #[actix_web::test]
    async fn test_sales_missing_is_not_found() {
        let service = DashboardService::new(Arc::new(InMemoryDashboardRepository::new()));
        assert!(matches!(service.get_sales().await, Err(AppError::NotFound(_))));
    }
}
