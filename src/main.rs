//! Users 마이크로서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 사용자 리포지토리를 초기화합니다.
//! `REPOSITORY_BACKEND`에 따라 MongoDB 또는 메모리 저장소를 사용합니다.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use users_microservice::config::{
    ApplicationConfig, Environment, RepositoryBackend, RepositoryConfig, ServerConfig,
};
use users_microservice::db::Database;
use users_microservice::repositories::users::{
    InMemoryUserRepository, MongoUserRepository, UserRepository,
};
use users_microservice::routes::configure_all_routes;

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let env_file = load_env_file();
    init_logging();
    report_env_file(&env_file);
    ApplicationConfig::check();

    info!(
        "🚀 {} 시작중... (environment: {})",
        ApplicationConfig::name(),
        Environment::current().as_str()
    );

    let repository = initialize_repository().await?;

    start_http_server(repository).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 로깅, 경로 정규화 미들웨어를 순서대로 적용하고
/// 리포지토리를 `web::Data<dyn UserRepository>`로 등록합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(repository: Arc<dyn UserRepository>) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/api/users", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    let repository = web::Data::from(repository);

    HttpServer::new(move || {
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(repository.clone())
            .configure(configure_all_routes)
    })
        .bind(bind_address)?
        .workers(4) // 워커 스레드 수
        .run()
        .await
}

/// `.env` 파일 로드 결과
///
/// 로거가 초기화되기 전에 로드되므로, 결과는 초기화 후 [`report_env_file`]로 출력합니다.
struct EnvFile {
    profile: String,
    file_name: &'static str,
    result: Result<PathBuf, dotenv::Error>,
}

/// 환경별 설정 파일을 로드합니다
///
/// `.env` 파일의 `RUST_LOG`가 로깅 설정에 반영되도록 로거보다 먼저 호출합니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> EnvFile {
    load_profile_env_file(std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string()))
}

fn load_profile_env_file(profile: String) -> EnvFile {
    let (file_name, result) = match profile.as_str() {
        "prod" => (".env.prod", dotenv::from_filename(".env.prod")),
        "dev" => (".env.dev", dotenv::from_filename(".env.dev")),
        _ => (".env", dotenv()),
    };

    EnvFile {
        profile,
        file_name,
        result,
    }
}

fn report_env_file(env_file: &EnvFile) {
    info!("Current profile: {}", env_file.profile);

    match &env_file.result {
        Ok(path) => info!("{} 파일 로드 됨 ({})", env_file.file_name, path.display()),
        Err(e) => error!("{} 파일 로드 실패: {}", env_file.file_name, e),
    }
}

/// 로깅 시스템을 초기화합니다
///
/// `RUST_LOG`가 없으면 "info,actix_web=debug"를 사용합니다.
///
/// ```bash
/// RUST_LOG=users_microservice=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 백엔드에 맞는 사용자 리포지토리를 생성합니다
///
/// MongoDB 연결에 실패하면 서버를 시작하지 않고 에러를 반환합니다.
async fn initialize_repository() -> io::Result<Arc<dyn UserRepository>> {
    match RepositoryConfig::backend() {
        RepositoryBackend::Memory => {
            info!("🗂️ 메모리 저장소 사용 (재시작 시 데이터가 사라집니다)");
            Ok(Arc::new(InMemoryUserRepository::new()))
        }
        RepositoryBackend::MongoDb => {
            info!("📡 데이터베이스 연결 중...");

            let database = Database::new().await.map_err(|e| {
                error!("데이터베이스 연결 실패: {}", e);
                io::Error::other(e.to_string())
            })?;

            info!("✅ MongoDB 연결 성공 ({})", database.database_name());

            Ok(Arc::new(MongoUserRepository::new(Arc::new(database))))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 로컬 프론트엔드(3000)와 자체 서버(8080) Origin을 허용하며,
/// 클라이언트가 alert 헤더를 읽을 수 있도록 노출합니다.
fn configure_cors() -> Cors {
    let app_name = ApplicationConfig::name();

    Cors::default()
        // 허용할 Origin 설정
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .expose_headers(vec![
            header::LOCATION.to_string(),
            format!("X-{}-alert", app_name),
            format!("X-{}-error", app_name),
            format!("X-{}-params", app_name),
        ])
        .supports_credentials()
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
