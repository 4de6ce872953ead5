use crate::infrastructure::security::JwtIssuer;
use crate::presentation::auth::{json_config, login, login_json_config, register};
use crate::presentation::handlers::health_check;
use crate::presentation::middleware::JwtAuthMiddleware;
use crate::presentation::students::{
    create_student, delete_student, get_student, list_students, path_config, update_student,
};
use actix_web::web;

pub const ROUTES: &str = "GET /api/health, POST /api/auth/register, POST /api/auth/login, \
GET|POST /api/students, GET|PUT|DELETE /api/students/{id}";

/// Mounts every `/api` route. Student routes require a bearer token.
pub fn configure(cfg: &mut web::ServiceConfig, issuer: JwtIssuer) {
    cfg.service(
        web::scope("/api")
            .route("/health", web::get().to(health_check))
            .service(
                web::scope("/auth")
                    .app_data(json_config())
                    .route("/register", web::post().to(register))
                    .service(
                        web::resource("/login")
                            .app_data(login_json_config())
                            .route(web::post().to(login)),
                    ),
            )
            .service(
                web::scope("/students")
                    .wrap(JwtAuthMiddleware::new(issuer))
                    .app_data(json_config())
                    .app_data(path_config())
                    .route("", web::get().to(list_students))
                    .route("", web::post().to(create_student))
                    .route("/{id}", web::get().to(get_student))
                    .route("/{id}", web::put().to(update_student))
                    .route("/{id}", web::delete().to(delete_student)),
            ),
    );
}
