//! 블랙리스트 주기 정리 작업
//!
//! 하나의 백그라운드 tokio 태스크가 고정 주기로 만료된 블랙리스트 항목을 제거합니다.
//! 한 번의 정리가 실패하거나 panic이 나도 로그만 남기고 다음 주기는 그대로 실행됩니다.
//!
//! ```rust,ignore
//! let handle = BlacklistSweeper::new(blacklist.clone(), BlacklistConfig::sweep_interval()).spawn();
//! // ... 서버 실행 ...
//! handle.shutdown().await;
//! ```

use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;

use futures_util::FutureExt;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::repositories::tokens::TokenBlacklist;
use crate::utils::now_millis;

pub struct BlacklistSweeper {
    blacklist: Arc<dyn TokenBlacklist>,
    period: Duration,
}

impl BlacklistSweeper {
    pub fn new(blacklist: Arc<dyn TokenBlacklist>, period: Duration) -> Self {
        Self { blacklist, period }
    }

    /// 정리 태스크를 시작합니다.
    ///
    /// 첫 정리는 기동 직후가 아니라 한 주기가 지난 뒤에 실행됩니다.
    /// tokio 런타임(actix 런타임 포함) 안에서 호출해야 합니다.
    pub fn spawn(self) -> SweeperHandle {
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel::<()>();

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + self.period, self.period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            log::info!("Blacklist sweeper started (interval: {:?})", self.period);

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        self.sweep_once().await;
                    }
                }
            }

            log::info!("Blacklist sweeper stopped");
        });

        SweeperHandle {
            shutdown: Some(shutdown_tx),
            task,
        }
    }

    /// 만료된 항목을 한 번 정리하고 제거한 개수를 반환합니다.
    ///
    /// 저장소 에러와 panic은 모두 로그로만 남기며 0을 반환합니다.
    pub async fn sweep_once(&self) -> usize {
        let purge = self.blacklist.purge_expired(now_millis());

        match AssertUnwindSafe(purge).catch_unwind().await {
            Ok(Ok(removed)) => {
                if removed > 0 {
                    log::info!("Blacklist sweep removed {} expired token(s)", removed);
                } else {
                    log::debug!("Blacklist sweep found nothing to remove");
                }
                removed
            }
            Ok(Err(e)) => {
                log::error!("Blacklist sweep failed: {}", e);
                0
            }
            Err(_) => {
                log::error!("Blacklist sweep panicked; next cycle will retry");
                0
            }
        }
    }
}

/// 실행 중인 정리 태스크의 핸들
pub struct SweeperHandle {
    shutdown: Option<oneshot::Sender<()>>,
    task: JoinHandle<()>,
}

impl SweeperHandle {
    /// 태스크에 종료를 알리고 끝날 때까지 기다립니다.
    pub async fn shutdown(mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Err(e) = self.task.await {
            log::error!("Blacklist sweeper task ended abnormally: {}", e);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}
