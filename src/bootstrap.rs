//! # Bootstrap Sequencer
//!
//! 프로세스 시작 단계를 명시적인 상태 기계로 관리합니다.
//!
//! ```text
//!                 ┌──────────────┐
//!                 │ Disconnected │
//!                 └──────┬───────┘
//!                        ▼
//!                 ┌──────────────┐   ping 실패   ┌───────────────┐
//!                 │  Connecting  │ ─────────────▶│ ConnectFailed │ (종료)
//!                 └──┬────────┬──┘               └───────────────┘
//!   SEED_ON_START    │        │
//!                    ▼        │
//!             ┌──────────┐    │
//!             │ Seeding  │    │
//!             └────┬─────┘    │
//!                  ▼          ▼
//!                 ┌──────────────┐
//!                 │  Listening   │
//!                 └──────────────┘
//! ```
//!
//! 시드는 HTTP 리스너가 바인딩되기 전에 끝나므로 요청이 교체 중인 데이터를
//! 보는 일은 없습니다. 시드가 실패해도 로그만 남기고 `Listening`으로 진행합니다.
//! 대부분의 실패는 기존 데이터를 그대로 두지만, 교체 롤백까지 실패하면 컬렉션이
//! 섞인 채로 서버가 뜨므로 [`SeedOutcome::Failed`]가 이를 구분합니다.
//!
//! `Listening` 전이는 포트 바인딩이 성공한 뒤 실제 주소와 함께 기록합니다.
//! 연결 실패는 재시도하지 않습니다.

use std::fmt;
use std::net::SocketAddr;
use std::sync::Arc;
use log::{error, info, warn};
use crate::config::AppConfig;
use crate::db::Database;
use crate::errors::{AppError, AppResult};
use crate::fixtures::FixtureSet;
use crate::repositories::DashboardStore;
use crate::services::{SeedReport, SeedService};
use crate::utils::display_terminal::{
    print_boxed_title, print_step_complete, print_step_failed, print_step_start, print_sub_task,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    Disconnected,
    Connecting,
    Seeding,
    Listening,
    ConnectFailed,
}

impl BootstrapState {
    /// 허용된 전이인지 확인합니다.
    pub fn can_transition_to(&self, next: BootstrapState) -> bool {
        use BootstrapState::*;

        matches!(
            (self, next),
            (Disconnected, Connecting)
                | (Connecting, ConnectFailed)
                | (Connecting, Seeding)
                | (Connecting, Listening)
                | (Seeding, Listening)
        )
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, BootstrapState::Listening | BootstrapState::ConnectFailed)
    }
}

impl fmt::Display for BootstrapState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BootstrapState::Disconnected => "Disconnected",
            BootstrapState::Connecting => "Connecting",
            BootstrapState::Seeding => "Seeding",
            BootstrapState::Listening => "Listening",
            BootstrapState::ConnectFailed => "ConnectFailed",
        };
        f.write_str(name)
    }
}

/// 부트스트랩 시드 단계의 결과
#[derive(Debug)]
pub enum SeedOutcome {
    /// `SEED_ON_START`가 꺼져 있음
    Skipped,
    Seeded(SeedReport),
    /// 시드 실패. `live_data_intact`가 false면 운영 컬렉션이 섞인 상태입니다.
    Failed { live_data_intact: bool },
}

pub struct Bootstrap {
    config: AppConfig,
    state: BootstrapState,
}

impl Bootstrap {
    pub fn new(config: AppConfig) -> Self {
        Self { config, state: BootstrapState::Disconnected }
    }

    pub fn state(&self) -> BootstrapState {
        self.state
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// 상태를 전이합니다. 허용되지 않은 전이는 `AppError::InternalError`입니다.
    pub fn transition(&mut self, next: BootstrapState) -> AppResult<()> {
        if !self.state.can_transition_to(next) {
            return Err(AppError::InternalError(format!(
                "허용되지 않은 부트스트랩 전이: {} → {}", self.state, next
            )));
        }

        info!("🔀 부트스트랩 상태: {} → {}", self.state, next);
        self.state = next;
        Ok(())
    }

    /// MongoDB에 연결합니다. 실패하면 `ConnectFailed`로 전이한 뒤 에러를 반환합니다.
    pub async fn connect(&mut self) -> AppResult<Arc<Database>> {
        print_boxed_title("🚀 DASHBOARD BACKEND BOOTSTRAP");

        self.transition(BootstrapState::Connecting)?;
        print_step_start(1, "Connecting to MongoDB");

        match Database::connect(&self.config.database).await {
            Ok(database) => {
                print_sub_task("database", database.database_name());
                print_step_complete(1, "MongoDB connected");
                Ok(Arc::new(database))
            }
            Err(e) => {
                error!("❌ MongoDB 연결 실패: {}", e);
                print_step_failed(1, "MongoDB connection", &e.to_string());
                self.transition(BootstrapState::ConnectFailed)?;
                Err(e)
            }
        }
    }

    /// `SEED_ON_START`가 켜져 있으면 시드를 실행합니다.
    ///
    /// 시드 실패는 에러로 전파하지 않고 로그를 남긴 뒤 [`SeedOutcome::Failed`]로
    /// 돌려줍니다. 상태 전이 자체가 잘못된 경우에만 `Err`입니다.
    pub async fn seed_if_enabled(
        &mut self,
        store: Arc<dyn DashboardStore>,
    ) -> AppResult<SeedOutcome> {
        if !self.config.seed.on_start {
            info!("⏭️ SEED_ON_START 비활성화: 시드를 건너뜁니다");
            return Ok(SeedOutcome::Skipped);
        }

        self.transition(BootstrapState::Seeding)?;
        print_step_start(2, "Seeding collections");

        let fixtures = match FixtureSet::load(self.config.seed.fixtures_dir.as_deref()) {
            Ok(fixtures) => fixtures,
            Err(e) => {
                error!("❌ 픽스처 로드 실패: {}", e);
                print_step_failed(2, "Seeding", &e.to_string());
                return Ok(SeedOutcome::Failed { live_data_intact: true });
            }
        };

        let seeder = SeedService::new(store, self.config.seed.strategy, self.config.seed.bcrypt_cost);

        match seeder.seed(fixtures).await {
            Ok(report) => {
                seeder.report(&report);
                print_step_complete(2, "Collections seeded");
                Ok(SeedOutcome::Seeded(report))
            }
            Err(e) => {
                error!("❌ 시드 실패: {}", e);
                let live_data_intact = e.live_data_intact();
                if live_data_intact {
                    warn!("⚠️ 기존 데이터를 유지한 채 서버를 시작합니다");
                } else {
                    error!("🚨 컬렉션 일부만 교체된 상태로 서버를 시작합니다. __previous 컬렉션에서 수동 복구가 필요합니다");
                }
                print_step_failed(2, "Seeding", &e.to_string());
                Ok(SeedOutcome::Failed { live_data_intact })
            }
        }
    }

    /// 리스너 바인딩이 성공한 뒤 실제 주소와 함께 호출합니다.
    pub fn mark_listening(&mut self, addrs: &[SocketAddr]) -> AppResult<()> {
        if addrs.is_empty() {
            return Err(AppError::InternalError("바인딩된 주소가 없습니다".to_string()));
        }

        self.transition(BootstrapState::Listening)?;

        let listening = addrs
            .iter()
            .map(|addr| addr.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        info!("🌐 서버가 http://{} 에서 실행중입니다", listening);
        print_step_complete(3, &format!("Listening on {}", listening));
        Ok(())
    }
}
