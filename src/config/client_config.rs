//! # Service Client Configuration Module
//!
//! 다른 마이크로서비스를 호출할 때 필요한 설정을 관리합니다.
//!
//! ## OAuth2 클라이언트 인증 (client_credentials)
//! ```bash
//! export CLIENT_AUTHORIZATION_ACCESS_TOKEN_URI="http://uaa:9999/oauth/token"
//! export CLIENT_AUTHORIZATION_CLIENT_ID="internal"
//! export CLIENT_AUTHORIZATION_CLIENT_SECRET="internal"
//! export CLIENT_AUTHORIZATION_SCOPE="web-app"   # 선택
//! ```
//!
//! ## 정적 서버 목록
//! 서비스 이름을 대문자 스네이크 케이스로 바꾼 뒤 `_SERVERS`를 붙인 변수를 읽습니다.
//! ```bash
//! export LOCAL_API_SERVERS="localhost:8081,localhost:8082"
//! ```

use std::env;

use crate::clients::load_balancer::Server;
use crate::core::errors::{AppError, AppResult, ErrorContext};

/// OAuth2 client_credentials 그랜트에 필요한 클라이언트 정보
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientAuthorization {
    pub access_token_uri: String,
    pub client_id: String,
    pub client_secret: String,
    pub scope: Option<String>,
}

pub struct ClientAuthorizationConfig;

impl ClientAuthorizationConfig {
    pub fn access_token_uri() -> String {
        env::var("CLIENT_AUTHORIZATION_ACCESS_TOKEN_URI")
            .unwrap_or_else(|_| "http://uaa/oauth/token".to_string())
    }

    pub fn client_id() -> String {
        env::var("CLIENT_AUTHORIZATION_CLIENT_ID").unwrap_or_else(|_| "internal".to_string())
    }

    pub fn client_secret() -> String {
        env::var("CLIENT_AUTHORIZATION_CLIENT_SECRET").unwrap_or_else(|_| {
            log::warn!("CLIENT_AUTHORIZATION_CLIENT_SECRET not set, using default (not secure for production!)");
            "internal".to_string()
        })
    }

    pub fn scope() -> Option<String> {
        env::var("CLIENT_AUTHORIZATION_SCOPE")
            .ok()
            .filter(|scope| !scope.trim().is_empty())
    }

    pub fn load() -> ClientAuthorization {
        ClientAuthorization {
            access_token_uri: Self::access_token_uri(),
            client_id: Self::client_id(),
            client_secret: Self::client_secret(),
            scope: Self::scope(),
        }
    }
}

pub struct ServiceDiscoveryConfig;

impl ServiceDiscoveryConfig {
    /// `local-api` → `LOCAL_API_SERVERS`
    pub fn env_key(service_name: &str) -> String {
        format!("{}_SERVERS", service_name.to_uppercase().replace(['-', '.'], "_"))
    }

    /// 서비스 이름에 해당하는 정적 서버 목록을 읽습니다.
    pub fn servers(service_name: &str) -> AppResult<Vec<Server>> {
        let key = Self::env_key(service_name);
        let raw = env::var(&key).map_err(|_| {
            AppError::InternalError(format!("{} is not set for service '{}'", key, service_name))
        })?;

        parse_server_list(&raw)
    }
}

/// `host:port` 항목을 콤마로 구분한 목록을 파싱합니다.
pub fn parse_server_list(raw: &str) -> AppResult<Vec<Server>> {
    let servers = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(parse_server)
        .collect::<AppResult<Vec<_>>>()?;

    if servers.is_empty() {
        return Err(AppError::InternalError("Server list is empty".to_string()));
    }

    Ok(servers)
}

fn parse_server(entry: &str) -> AppResult<Server> {
    let (host, port) = entry
        .rsplit_once(':')
        .ok_or_else(|| AppError::InternalError(format!("Server entry '{}' must be host:port", entry)))?;

    if host.is_empty() {
        return Err(AppError::InternalError(format!("Server entry '{}' has no host", entry)));
    }

    let port = port
        .parse::<u16>()
        .with_context(|| format!("Invalid port in '{}'", entry))?;

    Ok(Server::new(host, port))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_key_from_service_name() {
        assert_eq!(ServiceDiscoveryConfig::env_key("local-api"), "LOCAL_API_SERVERS");
        assert_eq!(ServiceDiscoveryConfig::env_key("uaa"), "UAA_SERVERS");
    }

    #[test]
    fn test_parse_server_list() {
        let servers = parse_server_list("localhost:8081, 10.0.0.2:9000,").unwrap();

        assert_eq!(servers, vec![Server::new("localhost", 8081), Server::new("10.0.0.2", 9000)]);
    }

    #[test]
    fn test_parse_server_list_rejects_bad_entries() {
        assert!(parse_server_list("").is_err());
        assert!(parse_server_list("localhost").is_err());
        assert!(parse_server_list(":8080").is_err());
        assert!(parse_server_list("localhost:http").is_err());
    }
}
