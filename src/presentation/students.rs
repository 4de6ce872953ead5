use crate::domain::auth::AuthenticatedUser;
use crate::domain::student::StudentPayload;
use crate::presentation::handlers::{ApiError, AppState};
use actix_web::{HttpRequest, HttpResponse, error::PathError, web};
use serde::Deserialize;
use tracing::{error, info, instrument, warn};

#[derive(Debug, Deserialize)]
pub struct StudentQuery {
    pub search: Option<String>,
}

/// A non-numeric `{id}` gets a 400 with the usual `{message}` body.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err: PathError, req: &HttpRequest| {
        warn!(path = %req.path(), error = %err, "Unparseable student id");
        let raw = req.match_info().get("id").unwrap_or_default();
        ApiError::Validation(format!("Invalid student id: {}", raw)).into()
    })
}

#[instrument(skip(state, user), fields(username = %user.username))]
pub async fn list_students(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    query: web::Query<StudentQuery>,
) -> Result<HttpResponse, ApiError> {
    let students = state
        .student_service
        .list_students(query.search.as_deref())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to list students");
            ApiError::from(e)
        })?;
    info!(count = students.len(), "Students retrieved");
    Ok(HttpResponse::Ok().json(students))
}

#[instrument(skip(state, user, req), fields(username = %user.username, student_id))]
pub async fn create_student(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    req: web::Json<StudentPayload>,
) -> Result<HttpResponse, ApiError> {
    info!(name = %req.name, "Creating student");
    let student = state
        .student_service
        .create_student(req.into_inner())
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to create student");
            ApiError::from(e)
        })?;
    tracing::Span::current().record("student_id", student.id);
    info!(student_id = student.id, "Student created successfully");
    Ok(HttpResponse::Created().json(student))
}

#[instrument(skip(state, user), fields(username = %user.username, student_id = %*path))]
pub async fn get_student(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let student_id = path.into_inner();
    let student = state
        .student_service
        .get_student(student_id)
        .await
        .map_err(ApiError::from)?;
    Ok(HttpResponse::Ok().json(student))
}

#[instrument(skip(state, user, req), fields(username = %user.username, student_id = %*path))]
pub async fn update_student(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<u64>,
    req: web::Json<StudentPayload>,
) -> Result<HttpResponse, ApiError> {
    let student_id = path.into_inner();
    info!(student_id = student_id, "Updating student");
    let student = state
        .student_service
        .update_student(student_id, req.into_inner())
        .await
        .map_err(ApiError::from)?;
    info!(student_id = student.id, "Student updated successfully");
    Ok(HttpResponse::Ok().json(student))
}

#[instrument(skip(state, user), fields(username = %user.username, student_id = %*path))]
pub async fn delete_student(
    state: web::Data<AppState>,
    user: AuthenticatedUser,
    path: web::Path<u64>,
) -> Result<HttpResponse, ApiError> {
    let student_id = path.into_inner();
    state
        .student_service
        .delete_student(student_id)
        .await
        .map_err(ApiError::from)?;
    info!(student_id = student_id, "Student deleted");
    Ok(HttpResponse::NoContent().finish())
}
