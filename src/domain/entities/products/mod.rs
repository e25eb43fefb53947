//! 상품 및 상품 통계 엔티티

pub mod product;
pub mod product_stat;

pub use product::Product;
pub use product_stat::{DailyData, MonthlyData, ProductStat};
