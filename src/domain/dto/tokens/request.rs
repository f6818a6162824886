use serde::Deserialize;

/// 토큰 갱신 요청 DTO
///
/// `{"refresh": "<token>"}` 형식이며, 필드가 없으면 유효하지 않은 토큰으로 처리합니다.
#[derive(Debug, Deserialize)]
pub struct RefreshRequest {
    #[serde(default)]
    pub refresh: Option<String>,
}
