//! 집계 통계 엔티티

pub mod affiliate_stat;
pub mod overall_stat;

pub use affiliate_stat::AffiliateStat;
pub use overall_stat::OverallStat;
