//! 밀리초 단위 시각 유틸리티
//!
//! 토큰과 블랙리스트의 모든 시각은 Unix epoch 기준 밀리초로 표현합니다.

use std::time::Duration;

use chrono::Utc;

/// 현재 시각 (Unix epoch 밀리초)
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// `Duration`을 밀리초 정수로 변환합니다. `i64` 범위를 넘으면 최대값으로 고정합니다.
pub fn duration_millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}
