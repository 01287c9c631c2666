//! OAuth2 클라이언트 컨텍스트
//!
//! 서비스 간 호출에 쓰는 액세스 토큰을 보관합니다. 여러 클라이언트가
//! `Arc`로 공유하며, 잠금은 `.await` 너머로 유지하지 않습니다.

use std::sync::RwLock;

use chrono::{DateTime, Duration, Utc};

/// 만료 직전 토큰을 보내지 않도록 두는 여유 시간(초)
const EXPIRY_SKEW_SECS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessToken {
    pub value: String,
    pub token_type: String,
    /// `None`이면 인가 서버가 만료 시간을 알려주지 않은 것으로, 만료되지 않는 것으로 취급합니다.
    pub expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    pub fn new(value: impl Into<String>, token_type: impl Into<String>, expires_in: Option<i64>) -> Self {
        Self {
            value: value.into(),
            token_type: token_type.into(),
            expires_at: expires_in
                .and_then(Duration::try_seconds)
                .and_then(|ttl| Utc::now().checked_add_signed(ttl)),
        }
    }

    pub fn is_expired(&self) -> bool {
        match self.expires_at {
            Some(expires_at) => Utc::now() + Duration::seconds(EXPIRY_SKEW_SECS) >= expires_at,
            None => false,
        }
    }
}

#[derive(Debug, Default)]
pub struct OAuth2ClientContext {
    token: RwLock<Option<AccessToken>>,
}

impl OAuth2ClientContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// 아직 유효한 토큰만 반환합니다.
    pub fn access_token(&self) -> Option<AccessToken> {
        self.token
            .read()
            .ok()
            .and_then(|guard| guard.clone())
            .filter(|token| !token.is_expired())
    }

    pub fn set_access_token(&self, token: AccessToken) {
        match self.token.write() {
            Ok(mut guard) => *guard = Some(token),
            Err(_) => log::warn!("OAuth2 컨텍스트 잠금 실패, 토큰을 저장하지 않습니다"),
        }
    }

    pub fn clear(&self) {
        if let Ok(mut guard) = self.token.write() {
            guard.take();
        }
    }
}
