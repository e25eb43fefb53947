//! 거래 엔티티

pub mod transaction;

pub use transaction::Transaction;
