use actix_cors::Cors;
use actix_web::{App, HttpServer, http::header, web};
use std::sync::Arc;
use student_management_api::application::auth_service::AuthService;
use student_management_api::application::authenticator::PasswordAuthenticator;
use student_management_api::application::student_service::StudentService;
use student_management_api::data::student_repository::InMemoryStudentRepository;
use student_management_api::data::user_repository::InMemoryUserRepository;
use student_management_api::infrastructure::config::AppConfig;
use student_management_api::infrastructure::logging::init_logging;
use student_management_api::infrastructure::security::JwtIssuer;
use student_management_api::presentation::handlers::AppState;
use student_management_api::presentation::middleware::{RequestIdMiddleware, TimingMiddleware};
use student_management_api::presentation::routes::{self, ROUTES};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;

    init_logging(&config.log_level);
    info!("Logging initialized successfully");

    let user_repository = Arc::new(InMemoryUserRepository::new());
    let student_repository = Arc::new(InMemoryStudentRepository::new());
    info!("Repositories created");

    let issuer = JwtIssuer::new(config.jwt_secret.clone(), config.jwt_expiration_secs);
    let auth_service = AuthService::new(
        user_repository.clone(),
        PasswordAuthenticator::new(user_repository),
        issuer.clone(),
    );
    let student_service = StudentService::new(student_repository);

    let state = web::Data::new(AppState {
        auth_service,
        student_service,
    });
    info!("Application state initialized");

    let cors_origin = config.cors_allowed_origin.clone();
    let server = HttpServer::new(move || {
        tracing::trace!("Creating new application instance");
        let cors = Cors::default()
            .allowed_origin(&cors_origin)
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE"])
            .allowed_headers(vec![header::AUTHORIZATION, header::CONTENT_TYPE])
            .max_age(3600);
        let issuer = issuer.clone();

        App::new()
            .app_data(state.clone())
            .wrap(cors)
            .wrap(TimingMiddleware)
            .wrap(RequestIdMiddleware)
            .configure(|cfg| routes::configure(cfg, issuer))
    });

    let bind_addr = config.bind_addr();
    info!(address = %bind_addr, "Binding server to address");
    let server = server.bind(bind_addr.as_str())?;

    info!(
        address = %bind_addr,
        cors_origin = %config.cors_allowed_origin,
        routes = %ROUTES,
        "Starting HTTP server"
    );
    server.run().await?;
    Ok(())
}
