//! 이름 있는 서비스 클라이언트
//!
//! reqwest 클라이언트, 로드 밸런서, 인터셉터 체인을 하나로 묶습니다.
//!
//! ```rust,ignore
//! let client = ServiceClient::with_oauth2("local-api", servers, ClientAuthorizationConfig::load());
//! let headers: HashMap<String, String> = client.get_json("/headers").await?;
//! ```

use std::sync::Arc;

use serde::de::DeserializeOwned;

use crate::clients::interceptor::{OAuth2RequestInterceptor, RequestInterceptor};
use crate::clients::load_balancer::{RoundRobinLoadBalancer, Server, StaticServerList};
use crate::clients::token_context::OAuth2ClientContext;
use crate::clients::token_provider::ClientCredentialsTokenProvider;
use crate::config::ClientAuthorization;
use crate::core::errors::{AppError, AppResult};

pub struct ServiceClient {
    http: reqwest::Client,
    balancer: RoundRobinLoadBalancer,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
}

impl ServiceClient {
    pub fn new(http: reqwest::Client, balancer: RoundRobinLoadBalancer) -> Self {
        Self {
            http,
            balancer,
            interceptors: Vec::new(),
        }
    }

    /// 정적 서버 목록과 client_credentials 토큰 인터셉터를 갖춘 클라이언트를 만듭니다.
    pub fn with_oauth2(service_name: &str, servers: Vec<Server>, authorization: ClientAuthorization) -> Self {
        let http = reqwest::Client::new();
        let balancer = RoundRobinLoadBalancer::new(service_name, Arc::new(StaticServerList::new(servers)));
        let provider = ClientCredentialsTokenProvider::new(http.clone(), authorization);
        let interceptor = OAuth2RequestInterceptor::new(Arc::new(OAuth2ClientContext::new()), Arc::new(provider));

        Self::new(http, balancer).with_interceptor(Arc::new(interceptor))
    }

    pub fn with_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn service_name(&self) -> &str {
        self.balancer.service_name()
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> AppResult<T> {
        let server = self.balancer.choose()?;
        let url = format!("{}{}", server.base_url(), path);
        log::debug!("[{}] GET {}", self.service_name(), url);

        let mut request = self.http.get(&url);
        for interceptor in &self.interceptors {
            request = interceptor.apply(request).await?;
        }

        let response = request.send().await.map_err(|e| {
            AppError::ExternalServiceError(format!("{} 요청 실패: {}", self.service_name(), e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "{} 응답 오류 ({}): {}",
                self.service_name(),
                status,
                error_text
            )));
        }

        response.json::<T>().await.map_err(|e| {
            AppError::ExternalServiceError(format!("{} 응답 파싱 실패: {}", self.service_name(), e))
        })
    }
}
