//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 서버, 시드, 보안 관련 설정을 환경 변수에서 읽어옵니다.

use std::env;
use std::str::FromStr;
use log::{error, info, warn};
use crate::errors::{AppError, AppResult};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 또는 `NODE_ENV` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        let raw = env::var("ENVIRONMENT")
            .unwrap_or_else(|_| env::var("NODE_ENV").unwrap_or_else(|_| "production".to_string()));
        Self::from_name(&raw)
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
///
/// 시드 데이터의 평문 자격 증명을 bcrypt 해시로 바꿀 때 사용됩니다.
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그대로 사용하고,
    /// 그렇지 않으면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        Self::parse_cost(env::var("BCRYPT_COST").ok().as_deref())
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// `BCRYPT_COST` 원시 값을 검증합니다. 범위를 벗어나면 `None`.
    pub fn parse_cost(raw: Option<&str>) -> Option<u32> {
        raw.and_then(|s| s.trim().parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    /// 기본 리스닝 포트
    pub const DEFAULT_PORT: u16 = 9000;

    /// 환경 변수 `HOST`, `PORT`, `HTTP_WORKERS`에서 서버 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: Self::parse_port(env::var("PORT").ok().as_deref()),
            workers: env::var("HTTP_WORKERS")
                .ok()
                .and_then(|w| w.parse::<usize>().ok())
                .filter(|w| *w > 0)
                .unwrap_or(4),
        }
    }

    /// 포트 문자열을 해석합니다. 없거나 잘못된 값이면 9000.
    pub fn parse_port(raw: Option<&str>) -> u16 {
        match raw {
            Some(value) => value.trim().parse::<u16>().unwrap_or_else(|e| {
                error!("PORT 파싱 실패: {}. 기본값 {} 사용", e, Self::DEFAULT_PORT);
                Self::DEFAULT_PORT
            }),
            None => Self::DEFAULT_PORT,
        }
    }

    /// `host:port` 형태의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// 연결 문자열 (`MONGO_URL`, 필수)
    pub url: String,
    /// 데이터베이스 이름 (`DATABASE_NAME`, 기본값 "dashboard")
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_env() -> AppResult<Self> {
        Self::from_values(
            env::var("MONGO_URL").ok(),
            env::var("DATABASE_NAME").ok(),
        )
    }

    /// 연결 문자열이 없거나 비어 있으면 즉시 실패합니다.
    pub fn from_values(url: Option<String>, database_name: Option<String>) -> AppResult<Self> {
        let url = url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty())
            .ok_or_else(|| AppError::ConfigurationError(
                "MONGO_URL 환경 변수가 설정되지 않았습니다".to_string()
            ))?;

        let database_name = database_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "dashboard".to_string());

        Ok(Self { url, database_name })
    }
}

/// 시드 적용 방식
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedStrategy {
    /// 섀도 컬렉션에 적재한 뒤 `renameCollection`으로 교체 (standalone 서버 지원)
    Swap,
    /// 단일 멀티 도큐먼트 트랜잭션 (replica set 필요)
    Transaction,
}

impl SeedStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeedStrategy::Swap => "swap",
            SeedStrategy::Transaction => "transaction",
        }
    }
}

impl FromStr for SeedStrategy {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "swap" | "staged" | "staged_swap" => Ok(SeedStrategy::Swap),
            "transaction" | "tx" => Ok(SeedStrategy::Transaction),
            other => Err(AppError::ConfigurationError(format!(
                "알 수 없는 SEED_STRATEGY 값입니다: {}", other
            ))),
        }
    }
}

/// 시작 시 시드 설정
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// `SEED_ON_START=true`일 때만 부트스트랩 중 시드를 실행합니다.
    pub on_start: bool,
    pub strategy: SeedStrategy,
    /// 외부 픽스처 디렉터리. 없으면 바이너리에 내장된 픽스처 사용
    pub fixtures_dir: Option<String>,
    /// 픽스처 자격 증명 해싱에 쓰는 bcrypt cost
    pub bcrypt_cost: u32,
}

impl SeedConfig {
    pub fn from_env() -> AppResult<Self> {
        let strategy = match env::var("SEED_STRATEGY") {
            Ok(raw) => raw.parse::<SeedStrategy>()?,
            Err(_) => SeedStrategy::Swap,
        };

        Ok(Self {
            on_start: parse_flag(env::var("SEED_ON_START").ok().as_deref()),
            strategy,
            fixtures_dir: env::var("SEED_FIXTURES_DIR").ok().filter(|d| !d.trim().is_empty()),
            bcrypt_cost: PasswordConfig::bcrypt_cost(),
        })
    }
}

/// Rate Limiting 설정
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
}

impl RateLimitConfig {
    /// 환경변수에서 Rate Limiting 설정을 로드합니다
    ///
    /// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
    /// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
    pub fn from_env() -> Self {
        let per_second = env::var("RATE_LIMIT_PER_SECOND")
            .unwrap_or_else(|_| "100".to_string())
            .parse::<u64>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
                100
            });

        let burst_size = env::var("RATE_LIMIT_BURST_SIZE")
            .unwrap_or_else(|_| "200".to_string())
            .parse::<u32>()
            .unwrap_or_else(|e| {
                error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
                200
            });

        let config = Self { per_second, burst_size };
        info!("Rate Limiting 설정 로드됨: {:?}", config);
        config
    }
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub seed: SeedConfig,
    pub rate_limit: RateLimitConfig,
}

impl AppConfig {
    /// 모든 설정을 한 번에 로드합니다. 필수 값이 없으면 에러를 반환합니다.
    pub fn from_env() -> AppResult<Self> {
        let config = Self {
            environment: Environment::current(),
            server: ServerConfig::from_env(),
            database: DatabaseConfig::from_env()?,
            seed: SeedConfig::from_env()?,
            rate_limit: RateLimitConfig::from_env(),
        };

        if config.seed.on_start && config.environment == Environment::Production {
            warn!("⚠️ 프로덕션 환경에서 SEED_ON_START가 활성화되어 있습니다. 모든 컬렉션이 교체됩니다");
        }

        Ok(config)
    }
}

/// "true"/"1"/"yes"/"on" 만 참으로 취급합니다.
pub fn parse_flag(raw: Option<&str>) -> bool {
    matches!(
        raw.map(|v| v.trim().to_lowercase()).as_deref(),
        Some("true") | Some("1") | Some("yes") | Some("on")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_bcrypt_cost_out_of_range_is_ignored() {
        assert_eq!(PasswordConfig::parse_cost(Some("6")), Some(6));
        assert_eq!(PasswordConfig::parse_cost(Some("3")), None);
        assert_eq!(PasswordConfig::parse_cost(Some("31")), None);
        assert_eq!(PasswordConfig::parse_cost(Some("abc")), None);
        assert_eq!(PasswordConfig::parse_cost(None), None);
    }

    #[test]
    fn test_port_defaults_to_9000() {
        assert_eq!(ServerConfig::parse_port(None), 9000);
        assert_eq!(ServerConfig::parse_port(Some("not-a-port")), 9000);
        assert_eq!(ServerConfig::parse_port(Some("5001")), 5001);
    }

    #[test]
    fn test_database_config_requires_url() {
        let missing = DatabaseConfig::from_values(None, None);
        assert!(matches!(missing, Err(AppError::ConfigurationError(_))));

        let blank = DatabaseConfig::from_values(Some("   ".to_string()), None);
        assert!(matches!(blank, Err(AppError::ConfigurationError(_))));

        let config = DatabaseConfig::from_values(
            Some("mongodb://localhost:27017".to_string()),
            None,
        ).unwrap();
        assert_eq!(config.database_name, "dashboard");
    }

    #[test]
    fn test_seed_strategy_parsing() {
        assert_eq!("swap".parse::<SeedStrategy>().unwrap(), SeedStrategy::Swap);
        assert_eq!("Transaction".parse::<SeedStrategy>().unwrap(), SeedStrategy::Transaction);
        assert!("sometimes".parse::<SeedStrategy>().is_err());
    }

    #[test]
    fn test_seed_flag_is_explicit() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some("1")));
        assert!(parse_flag(Some(" YES ")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(Some("")));
        assert!(!parse_flag(None));
    }
}
