//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 서버, 시드, 환경 관련 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리 (Environment Separation)
//!
//! `PROFILE`에 따라 `.env.dev` / `.env.prod` / `.env` 파일을 읽고,
//! `ENVIRONMENT` 값으로 bcrypt cost 등 환경별 기본값을 결정합니다.
//!
//! ### 2. Fail-Fast
//!
//! - `MONGO_URL`이 없으면 서버를 시작하지 않습니다
//! - 잘못된 `SEED_STRATEGY` 값은 조용히 무시하지 않고 에러로 처리합니다
//!
//! ### 3. 명시적 시드
//!
//! 시작 시 재시드는 `SEED_ON_START=true`로만 활성화됩니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export MONGO_URL="mongodb://localhost:27017"
//!
//! # 선택
//! export DATABASE_NAME="dashboard"
//! export HOST="0.0.0.0"
//! export PORT="9000"
//! export SEED_ON_START="true"
//! export SEED_STRATEGY="swap"          # swap | transaction
//! export SEED_FIXTURES_DIR="./fixtures"
//! export BCRYPT_COST="10"              # 4-15 범위
//! ```

pub mod data_config;

pub use data_config::*;
