//! 나가는 요청 데코레이터
//!
//! [`ServiceClient`](crate::clients::service_client::ServiceClient)는 요청을 보내기 전에
//! 등록된 인터셉터를 순서대로 적용합니다.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::RequestBuilder;

use crate::clients::token_context::{AccessToken, OAuth2ClientContext};
use crate::clients::token_provider::AccessTokenProvider;
use crate::core::errors::AppResult;

#[async_trait]
pub trait RequestInterceptor: Send + Sync {
    async fn apply(&self, request: RequestBuilder) -> AppResult<RequestBuilder>;
}

/// `Authorization: Bearer {token}` 헤더를 붙이는 인터셉터
///
/// 컨텍스트에 유효한 토큰이 있으면 재사용하고, 없거나 만료되었으면
/// 제공자에게서 새로 발급받아 컨텍스트에 저장합니다.
pub struct OAuth2RequestInterceptor {
    context: Arc<OAuth2ClientContext>,
    provider: Arc<dyn AccessTokenProvider>,
}

impl OAuth2RequestInterceptor {
    pub fn new(context: Arc<OAuth2ClientContext>, provider: Arc<dyn AccessTokenProvider>) -> Self {
        Self { context, provider }
    }

    async fn access_token(&self) -> AppResult<AccessToken> {
        if let Some(token) = self.context.access_token() {
            return Ok(token);
        }

        let token = self.provider.obtain_access_token().await?;
        self.context.set_access_token(token.clone());

        Ok(token)
    }
}

#[async_trait]
impl RequestInterceptor for OAuth2RequestInterceptor {
    async fn apply(&self, request: RequestBuilder) -> AppResult<RequestBuilder> {
        let token = self.access_token().await?;
        Ok(request.bearer_auth(&token.value))
    }
}
