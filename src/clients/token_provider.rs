//! # OAuth2 Access Token Provider
//!
//! `client_credentials` 그랜트로 인가 서버(UAA)에서 액세스 토큰을 발급받습니다.
//!
//! ```text
//! POST {access_token_uri}
//! Authorization: Basic base64(client_id:client_secret)
//! Content-Type: application/x-www-form-urlencoded
//!
//! grant_type=client_credentials&scope=web-app
//! ```
//!
//! 응답 예시:
//! ```json
//! { "access_token": "eyJhbGciOi...", "token_type": "bearer", "expires_in": 43199, "scope": "web-app" }
//! ```

use async_trait::async_trait;
use serde::Deserialize;

use crate::clients::token_context::AccessToken;
use crate::config::ClientAuthorization;
use crate::core::errors::{AppError, AppResult};

/// 토큰 엔드포인트 응답
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default = "default_token_type")]
    pub token_type: String,
    pub expires_in: Option<i64>,
    pub scope: Option<String>,
}

fn default_token_type() -> String {
    "bearer".to_string()
}

#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    async fn obtain_access_token(&self) -> AppResult<AccessToken>;
}

pub struct ClientCredentialsTokenProvider {
    http: reqwest::Client,
    authorization: ClientAuthorization,
}

impl ClientCredentialsTokenProvider {
    pub fn new(http: reqwest::Client, authorization: ClientAuthorization) -> Self {
        Self { http, authorization }
    }

    fn form_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("grant_type", "client_credentials".to_string())];
        if let Some(scope) = &self.authorization.scope {
            params.push(("scope", scope.clone()));
        }
        params
    }
}

#[async_trait]
impl AccessTokenProvider for ClientCredentialsTokenProvider {
    async fn obtain_access_token(&self) -> AppResult<AccessToken> {
        let auth = &self.authorization;
        log::debug!("액세스 토큰 요청: {} (client_id={})", auth.access_token_uri, auth.client_id);

        let response = self
            .http
            .post(&auth.access_token_uri)
            .basic_auth(&auth.client_id, Some(&auth.client_secret))
            .form(&self.form_params())
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("토큰 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "토큰 발급 실패 ({}): {}",
                status, error_text
            )));
        }

        let token = response
            .json::<TokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("토큰 응답 파싱 실패: {}", e)))?;

        log::info!(
            "액세스 토큰 발급 완료 (expires_in={:?}, scope={:?})",
            token.expires_in,
            token.scope
        );

        Ok(AccessToken::new(token.access_token, token.token_type, token.expires_in))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn authorization(scope: Option<&str>) -> ClientAuthorization {
        ClientAuthorization {
            access_token_uri: "http://uaa/oauth/token".to_string(),
            client_id: "internal".to_string(),
            client_secret: "internal".to_string(),
            scope: scope.map(str::to_string),
        }
    }

    #[test]
    fn test_form_params_include_scope_when_configured() {
        let provider = ClientCredentialsTokenProvider::new(reqwest::Client::new(), authorization(Some("web-app")));
        assert_eq!(
            provider.form_params(),
            vec![
                ("grant_type", "client_credentials".to_string()),
                ("scope", "web-app".to_string()),
            ]
        );

        let provider = ClientCredentialsTokenProvider::new(reqwest::Client::new(), authorization(None));
        assert_eq!(provider.form_params().len(), 1);
    }

    #[test]
    fn test_token_response_defaults_token_type() {
        let token: TokenResponse = serde_json::from_str(r#"{"access_token":"abc"}"#).unwrap();

        assert_eq!(token.token_type, "bearer");
        assert_eq!(token.expires_in, None);
    }
}
