//! # Inter-service Clients
//!
//! 다른 마이크로서비스를 호출하는 OAuth2 보호 클라이언트입니다.
//!
//! ```text
//! LocalApiClient::get_headers()
//!   └─ ServiceClient::get_json("/headers")
//!        ├─ RoundRobinLoadBalancer::choose()      → http://host:port
//!        ├─ OAuth2RequestInterceptor::apply()     → Authorization: Bearer {token}
//!        │    └─ OAuth2ClientContext / ClientCredentialsTokenProvider
//!        └─ reqwest send + JSON 디코딩
//! ```

pub mod interceptor;
pub mod load_balancer;
pub mod local_api;
pub mod service_client;
pub mod token_context;
pub mod token_provider;

pub use interceptor::{OAuth2RequestInterceptor, RequestInterceptor};
pub use load_balancer::{RoundRobinLoadBalancer, Server, ServerList, StaticServerList};
pub use local_api::LocalApiClient;
pub use service_client::ServiceClient;
pub use token_context::{AccessToken, OAuth2ClientContext};
pub use token_provider::{AccessTokenProvider, ClientCredentialsTokenProvider};
