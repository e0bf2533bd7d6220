use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use std::sync::Arc;

use crate::error::ServiceError;
use crate::models::{LoginForm, RegistrationForm};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/registration", post(register))
        .route("/login", post(login))
}

// POST /api/registration
async fn register(
    State(state): State<Arc<AppState>>,
    Json(form): Json<RegistrationForm>,
) -> Result<impl IntoResponse, ServiceError> {
    let user = state.users.register(form).await?;
    tracing::info!("registered user {} ({})", user.id, user.email);
    Ok((StatusCode::CREATED, Json(user)))
}

// POST /api/login
// Успешный ответ - найденный пользователь; держать его вошедшим
// (заголовок Basic Auth на каждом запросе) - дело клиента.
async fn login(
    State(state): State<Arc<AppState>>,
    Json(form): Json<LoginForm>,
) -> Result<impl IntoResponse, ServiceError> {
    let user = state.users.validate_login(&form).await?;
    Ok(Json(user))
}
