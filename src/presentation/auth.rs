use crate::domain::user::{LoginRequest, RegisterRequest};
use crate::presentation::handlers::{ApiError, AppState};
use actix_web::{HttpRequest, HttpResponse, error::JsonPayloadError, web};
use tracing::{error, info, instrument, warn};

#[instrument(skip(state, req), fields(username = %req.username))]
pub async fn register(
    state: web::Data<AppState>,
    req: web::Json<RegisterRequest>,
) -> Result<HttpResponse, ApiError> {
    info!(email = %req.email, "Registration request received");

    let response = state
        .auth_service
        .register(req.into_inner())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to register user");
            ApiError::from(e)
        })?;

    info!(user_id = response.user_id, "User registered successfully");
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(state, req), fields(username = %req.username))]
pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<LoginRequest>,
) -> Result<HttpResponse, ApiError> {
    info!("Login request received");

    let response = state
        .auth_service
        .login(req.into_inner())
        .await
        .map_err(ApiError::from)?;

    info!(user_id = response.user_id, "Login successful");
    Ok(HttpResponse::Ok().json(response))
}

/// Body errors on login answer exactly like bad credentials.
pub fn login_json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        warn!(error = %err, "Unreadable login payload");
        ApiError::InvalidCredentials.into()
    })
}

/// Body errors elsewhere become a 400 with a `{message}` body.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req: &HttpRequest| {
        ApiError::Validation(format!("Invalid request body: {}", err)).into()
    })
}
