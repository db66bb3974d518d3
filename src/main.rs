//! Appete 백엔드 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 모든 서비스를 초기화합니다.
//! MongoDB 연결과 2dsphere 인덱스를 준비한 뒤 위치 저장, 주변 레스토랑 검색 API를 제공합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use appete_backend::config::{RateLimitConfig, SearchConfig, ServerConfig};
use appete_backend::db::Database;
use appete_backend::repositories::restaurants::RestaurantRepository;
use appete_backend::repositories::users::UserRepository;
use appete_backend::routes::configure_all_routes;
use appete_backend::services::{
    auth::TokenService,
    restaurants::RestaurantService,
    search::ProximityService,
    users::LocationService,
};

/// 워커 간에 공유되는 서비스 핸들
#[derive(Clone)]
struct AppServices {
    location: web::Data<LocationService>,
    proximity: web::Data<ProximityService>,
    restaurants: web::Data<RestaurantService>,
    tokens: web::Data<TokenService>,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 Appete 백엔드 시작중...");

    let services = initialize_services().await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        io::Error::other(e)
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // HTTP 서버 시작
    start_http_server(services).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(services: AppServices) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = RateLimitConfig::from_env();
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

    HttpServer::new(move || {
        // CORS 설정
        let cors = configure_cors();

        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())

            // 서비스 주입
            .app_data(services.location.clone())
            .app_data(services.proximity.clone())
            .app_data(services.restaurants.clone())
            .app_data(services.tokens.clone())

            // 라우트 설정
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(ServerConfig::workers())
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    info!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => info!(".env.prod 파일 로드 됨"),
            Err(e) => error!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => info!(".env.dev 파일 로드 됨"),
            Err(e) => error!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            info!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=debug")
///
/// ```bash
/// RUST_LOG=appete_backend::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// MongoDB 연결, 인덱스 생성, 서비스 조립
///
/// 저장소는 트레이트 객체로 서비스에 주입되고, 서비스는 `web::Data`로 감싸져 워커 간에 공유됩니다.
///
/// # Errors
///
/// * MongoDB 연결 또는 ping 실패
/// * 2dsphere/고유 인덱스 생성 실패
async fn initialize_services() -> Result<AppServices, String> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new()
        .await
        .map_err(|e| format!("데이터베이스 연결 실패: {}", e))?;

    info!("✅ MongoDB 연결 성공 ({})", database.database_name());

    let search_config = SearchConfig::from_env();

    let users = Arc::new(UserRepository::new(&database));
    let restaurants = Arc::new(RestaurantRepository::new(&database, search_config.query_timeout));

    users.create_indexes()
        .await
        .map_err(|e| format!("users 인덱스 생성 실패: {}", e))?;
    restaurants.create_indexes()
        .await
        .map_err(|e| format!("restaurants 인덱스 생성 실패: {}", e))?;

    info!("✅ 2dsphere 인덱스 준비 완료");
    info!(
        "🔎 검색 반경: 기본 {}m, 확장 {}m, 최대 {}m, 최대 {}개",
        search_config.default_radius_meters,
        search_config.radius_increment_meters,
        search_config.max_radius_meters,
        search_config.page_size
    );

    Ok(AppServices {
        location: web::Data::new(LocationService::new(users.clone())),
        proximity: web::Data::new(ProximityService::new(users, restaurants.clone(), search_config)),
        restaurants: web::Data::new(RestaurantService::new(restaurants)),
        tokens: web::Data::new(TokenService::from_env()),
    })
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:5173` - Vite 개발 서버
/// * `http://localhost:3000` - React 개발 서버
/// * `127.0.0.1` 동등한 주소들
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:5173")
        .allowed_origin("http://127.0.0.1:5173")
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")

        .allowed_methods(vec!["GET", "POST", "OPTIONS"])

        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])

        // 자격 증명(access_token 쿠키) 지원
        .supports_credentials()

        .max_age(3600)
}
