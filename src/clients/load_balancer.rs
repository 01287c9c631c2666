//! 클라이언트 측 로드 밸런싱
//!
//! 논리적인 서비스 이름을 요청마다 하나의 실제 서버로 해석합니다.
//! 서버 목록은 설정(`{SERVICE}_SERVERS`)에서 읽는 정적 목록이며,
//! 선택은 라운드 로빈으로 이루어집니다.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub host: String,
    pub port: u16,
}

impl Server {
    pub fn new(host: &str, port: u16) -> Self {
        Self {
            host: host.to_string(),
            port,
        }
    }

    pub fn base_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl fmt::Display for Server {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// 서비스 인스턴스 목록의 출처
pub trait ServerList: Send + Sync {
    fn servers(&self) -> Vec<Server>;
}

/// 설정에 고정된 서버 목록
#[derive(Debug, Clone)]
pub struct StaticServerList {
    servers: Vec<Server>,
}

impl StaticServerList {
    pub fn new(servers: Vec<Server>) -> Self {
        Self { servers }
    }
}

impl ServerList for StaticServerList {
    fn servers(&self) -> Vec<Server> {
        self.servers.clone()
    }
}

/// 라운드 로빈 로드 밸런서
///
/// 매 호출마다 서버 목록을 다시 읽으므로 동적인 [`ServerList`] 구현과도
/// 함께 쓸 수 있습니다.
pub struct RoundRobinLoadBalancer {
    service_name: String,
    server_list: Arc<dyn ServerList>,
    position: AtomicUsize,
}

impl RoundRobinLoadBalancer {
    pub fn new(service_name: &str, server_list: Arc<dyn ServerList>) -> Self {
        Self {
            service_name: service_name.to_string(),
            server_list,
            position: AtomicUsize::new(0),
        }
    }

    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// 다음 요청을 보낼 서버를 고릅니다.
    pub fn choose(&self) -> AppResult<Server> {
        let servers = self.server_list.servers();
        if servers.is_empty() {
            return Err(AppError::ExternalServiceError(format!(
                "No servers available for service '{}'",
                self.service_name
            )));
        }

        let index = self.position.fetch_add(1, Ordering::Relaxed) % servers.len();
        let server = servers[index].clone();
        log::debug!("{} → {}", self.service_name, server);

        Ok(server)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn balancer(servers: Vec<Server>) -> RoundRobinLoadBalancer {
        RoundRobinLoadBalancer::new("local-api", Arc::new(StaticServerList::new(servers)))
    }

    #[test]
    fn test_base_url() {
        assert_eq!(Server::new("localhost", 8081).base_url(), "http://localhost:8081");
    }

    #[test]
    fn test_round_robin_cycles_servers() {
        let a = Server::new("a", 1);
        let b = Server::new("b", 2);
        let balancer = balancer(vec![a.clone(), b.clone()]);

        let picks: Vec<_> = (0..4).map(|_| balancer.choose().unwrap()).collect();
        assert_eq!(picks, vec![a.clone(), b.clone(), a, b]);
    }

    #[test]
    fn test_empty_server_list_is_an_error() {
        let result = balancer(Vec::new()).choose();
        assert!(matches!(result, Err(AppError::ExternalServiceError(_))));
    }
}
