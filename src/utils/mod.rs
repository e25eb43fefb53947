//! 공통 유틸리티 함수 모듈
//!
//! - [`display_terminal`] - 부트스트랩/시드 진행 상황 터미널 출력
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! print_boxed_title("Seed Completed");
//! ```

pub mod display_terminal;
