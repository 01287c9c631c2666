//! `local-api` 서비스 클라이언트

use std::collections::HashMap;

use crate::clients::service_client::ServiceClient;
use crate::config::{ClientAuthorizationConfig, ServiceDiscoveryConfig};
use crate::core::errors::AppResult;

pub const LOCAL_API_SERVICE: &str = "local-api";

pub struct LocalApiClient {
    client: ServiceClient,
}

impl LocalApiClient {
    pub fn new(client: ServiceClient) -> Self {
        Self { client }
    }

    /// `LOCAL_API_SERVERS`와 `CLIENT_AUTHORIZATION_*` 설정으로 클라이언트를 구성합니다.
    pub fn from_env() -> AppResult<Self> {
        let servers = ServiceDiscoveryConfig::servers(LOCAL_API_SERVICE)?;
        let client = ServiceClient::with_oauth2(LOCAL_API_SERVICE, servers, ClientAuthorizationConfig::load());

        Ok(Self::new(client))
    }

    /// `GET /headers`: 상대 서비스가 받은 요청 헤더를 그대로 돌려받습니다.
    pub async fn get_headers(&self) -> AppResult<HashMap<String, String>> {
        self.client.get_json("/headers").await
    }
}
