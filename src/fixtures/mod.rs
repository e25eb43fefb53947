//! # Fixture Data
//!
//! 시드 로더가 컬렉션을 교체할 때 사용하는 정적 데이터 묶음입니다.
//!
//! 기본적으로 `src/fixtures/data/*.json`이 바이너리에 내장되며,
//! `SEED_FIXTURES_DIR`이 지정되면 같은 파일 이름으로 해당 디렉터리에서 읽습니다.
//!
//! ```text
//! users.json  products.json  productstats.json
//! transactions.json  overallstats.json  affiliatestats.json
//! ```
//!
//! 레코드 간 참조 관계는 검증하지 않습니다. 필드 단위 검증은
//! [`FixtureSet::validate_all`]에서 수행되며, 하나라도 실패하면 시드가
//! 아무것도 삭제하기 전에 중단됩니다.

use std::collections::BTreeMap;
use std::path::Path;
use serde::de::DeserializeOwned;
use validator::Validate;
use crate::domain::entities::{
    AffiliateStat, CollectionKind, OverallStat, Product, ProductStat, Transaction, User,
};
use crate::errors::SeedError;

const USERS_JSON: &str = include_str!("data/users.json");
const PRODUCTS_JSON: &str = include_str!("data/products.json");
const PRODUCT_STATS_JSON: &str = include_str!("data/productstats.json");
const TRANSACTIONS_JSON: &str = include_str!("data/transactions.json");
const OVERALL_STATS_JSON: &str = include_str!("data/overallstats.json");
const AFFILIATE_STATS_JSON: &str = include_str!("data/affiliatestats.json");

/// 여섯 컬렉션 분량의 픽스처 레코드
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureSet {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub product_stats: Vec<ProductStat>,
    pub transactions: Vec<Transaction>,
    pub overall_stats: Vec<OverallStat>,
    pub affiliate_stats: Vec<AffiliateStat>,
}

impl FixtureSet {
    /// 바이너리에 내장된 픽스처를 파싱합니다.
    pub fn embedded() -> Result<Self, SeedError> {
        Ok(Self {
            users: parse(CollectionKind::Users, USERS_JSON)?,
            products: parse(CollectionKind::Products, PRODUCTS_JSON)?,
            product_stats: parse(CollectionKind::ProductStats, PRODUCT_STATS_JSON)?,
            transactions: parse(CollectionKind::Transactions, TRANSACTIONS_JSON)?,
            overall_stats: parse(CollectionKind::OverallStats, OVERALL_STATS_JSON)?,
            affiliate_stats: parse(CollectionKind::AffiliateStats, AFFILIATE_STATS_JSON)?,
        })
    }

    /// 디렉터리에서 `<collection>.json` 파일들을 읽습니다.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, SeedError> {
        let dir = dir.as_ref();
        let read = |kind: CollectionKind| -> Result<String, SeedError> {
            let path = dir.join(format!("{}.json", kind.collection_name()));
            std::fs::read_to_string(&path).map_err(|e| {
                SeedError::Fixture(format!("{} 읽기 실패: {}", path.display(), e))
            })
        };

        Ok(Self {
            users: parse(CollectionKind::Users, &read(CollectionKind::Users)?)?,
            products: parse(CollectionKind::Products, &read(CollectionKind::Products)?)?,
            product_stats: parse(CollectionKind::ProductStats, &read(CollectionKind::ProductStats)?)?,
            transactions: parse(CollectionKind::Transactions, &read(CollectionKind::Transactions)?)?,
            overall_stats: parse(CollectionKind::OverallStats, &read(CollectionKind::OverallStats)?)?,
            affiliate_stats: parse(CollectionKind::AffiliateStats, &read(CollectionKind::AffiliateStats)?)?,
        })
    }

    /// 설정에 따라 디렉터리 또는 내장 픽스처를 로드합니다.
    pub fn load(fixtures_dir: Option<&str>) -> Result<Self, SeedError> {
        match fixtures_dir {
            Some(dir) => Self::from_dir(dir),
            None => Self::embedded(),
        }
    }

    /// 모든 레코드를 검증합니다. 첫 번째 실패에서 중단합니다.
    pub fn validate_all(&self) -> Result<(), SeedError> {
        validate_records(CollectionKind::Users, &self.users, |u| &u.id)?;
        validate_records(CollectionKind::Products, &self.products, |p| &p.id)?;
        validate_records(CollectionKind::ProductStats, &self.product_stats, |s| &s.id)?;
        validate_records(CollectionKind::Transactions, &self.transactions, |t| &t.id)?;
        validate_records(CollectionKind::OverallStats, &self.overall_stats, |s| &s.id)?;
        validate_records(CollectionKind::AffiliateStats, &self.affiliate_stats, |s| &s.id)?;
        Ok(())
    }

    /// 컬렉션별 레코드 수
    pub fn counts(&self) -> BTreeMap<CollectionKind, u64> {
        CollectionKind::SEED_ORDER
            .iter()
            .map(|kind| (*kind, self.count(*kind)))
            .collect()
    }

    /// `source`의 `kind` 레코드로 이 묶음의 같은 컬렉션을 덮어씁니다.
    pub fn copy_kind_from(&mut self, source: &FixtureSet, kind: CollectionKind) {
        match kind {
            CollectionKind::Users => self.users = source.users.clone(),
            CollectionKind::Products => self.products = source.products.clone(),
            CollectionKind::ProductStats => self.product_stats = source.product_stats.clone(),
            CollectionKind::Transactions => self.transactions = source.transactions.clone(),
            CollectionKind::OverallStats => self.overall_stats = source.overall_stats.clone(),
            CollectionKind::AffiliateStats => self.affiliate_stats = source.affiliate_stats.clone(),
        }
    }

    pub fn clear_kind(&mut self, kind: CollectionKind) {
        self.copy_kind_from(&FixtureSet::default(), kind);
    }

    pub fn count(&self, kind: CollectionKind) -> u64 {
        let len = match kind {
            CollectionKind::Users => self.users.len(),
            CollectionKind::Products => self.products.len(),
            CollectionKind::ProductStats => self.product_stats.len(),
            CollectionKind::Transactions => self.transactions.len(),
            CollectionKind::OverallStats => self.overall_stats.len(),
            CollectionKind::AffiliateStats => self.affiliate_stats.len(),
        };
        len as u64
    }
}

fn parse<T: DeserializeOwned>(kind: CollectionKind, json: &str) -> Result<Vec<T>, SeedError> {
    serde_json::from_str(json)
        .map_err(|e| SeedError::Fixture(format!("{} 픽스처 파싱 실패: {}", kind, e)))
}

fn validate_records<T, F>(kind: CollectionKind, records: &[T], id_of: F) -> Result<(), SeedError>
where
    T: Validate,
    F: Fn(&T) -> &String,
{
    for record in records {
        record.validate().map_err(|e| {
            SeedError::Validation(format!("{} [{}]: {}", kind, id_of(record), e))
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;

    #[test]
    fn test_embedded_fixtures_parse_and_validate() {
        let fixtures = FixtureSet::embedded().unwrap();
        fixtures.validate_all().unwrap();

        assert_eq!(fixtures.count(CollectionKind::Users), 8);
        assert_eq!(fixtures.count(CollectionKind::Products), 5);
        assert_eq!(fixtures.count(CollectionKind::ProductStats), 5);
        assert_eq!(fixtures.count(CollectionKind::Transactions), 8);
        assert_eq!(fixtures.count(CollectionKind::OverallStats), 1);
        assert_eq!(fixtures.count(CollectionKind::AffiliateStats), 3);
    }

    #[test]
    fn test_embedded_fixtures_have_admins() {
        let fixtures = FixtureSet::embedded().unwrap();
        let admins = fixtures.users.iter().filter(|u| u.has_role(Role::Admin)).count();
        assert_eq!(admins, 3);
    }

    #[test]
    fn test_embedded_fixtures_carry_plain_credentials() {
        let fixtures = FixtureSet::embedded().unwrap();
        assert!(fixtures.users.iter().all(|u| u.password.is_some()));
    }

    #[test]
    fn test_invalid_email_fails_validation() {
        let mut fixtures = FixtureSet::embedded().unwrap();
        fixtures.users[0].email = "not-an-email".to_string();

        let result = fixtures.validate_all();
        assert!(matches!(result, Err(SeedError::Validation(msg)) if msg.contains("users")));
    }

    #[test]
    fn test_negative_cost_fails_validation() {
        let mut fixtures = FixtureSet::embedded().unwrap();
        fixtures.transactions[0].cost = "-3.00".to_string();
        assert!(matches!(fixtures.validate_all(), Err(SeedError::Validation(_))));
    }

    #[test]
    fn test_missing_directory_is_fixture_error() {
        let result = FixtureSet::from_dir("/nonexistent/fixtures/dir");
        assert!(matches!(result, Err(SeedError::Fixture(_))));
    }

    #[test]
    fn test_copy_kind_touches_only_that_kind() {
        let source = FixtureSet::embedded().unwrap();
        let mut target = FixtureSet::default();

        target.copy_kind_from(&source, CollectionKind::Products);
        assert_eq!(target.products, source.products);
        assert_eq!(target.count(CollectionKind::Users), 0);

        target.clear_kind(CollectionKind::Products);
        assert_eq!(target, FixtureSet::default());
    }

    #[test]
    fn test_counts_follow_seed_order() {
        let fixtures = FixtureSet::embedded().unwrap();
        let kinds: Vec<_> = fixtures.counts().keys().copied().collect();
        assert_eq!(kinds, CollectionKind::SEED_ORDER.to_vec());
    }
}
