use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Ошибки сервисного слоя. Все они ожидаемые и восстановимые - наружу
/// уходят типизированными значениями, а не паниками.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("{0}")]
    NotFound(String),

    #[error("Некорректно заполнены поля формы")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Аккаунт уже существует!")]
    DuplicateAccount,

    #[error("Пароли должны совпадать!")]
    PasswordMismatch,

    #[error("Имя аккаунта или пароль введены неправильно!")]
    BadCredentials,

    #[error("Место уже занято")]
    SeatUnavailable,

    #[error("Нет активного бронирования, сначала выберите сеанс")]
    NoActiveBooking,

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

// Нарушение уникального индекса - ожидаемый исход гонки за место или email,
// сервисы переводят его в SeatUnavailable / DuplicateAccount.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.is_unique_violation())
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) | ServiceError::PasswordMismatch => {
                StatusCode::BAD_REQUEST
            }
            ServiceError::BadCredentials => StatusCode::UNAUTHORIZED,
            ServiceError::DuplicateAccount
            | ServiceError::SeatUnavailable
            | ServiceError::NoActiveBooking => StatusCode::CONFLICT,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            ServiceError::Validation(errors) => {
                json!({ "message": self.to_string(), "errors": errors })
            }
            ServiceError::Database(e) => {
                tracing::error!("database error: {:?}", e);
                json!({ "message": "Внутренняя ошибка сервера" })
            }
            _ => json!({ "message": self.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_maps_to_404() {
        let resp = ServiceError::NotFound("Сеанс с id = 9 не найден".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn seat_conflict_and_duplicate_account_map_to_409() {
        assert_eq!(
            ServiceError::SeatUnavailable.into_response().status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ServiceError::DuplicateAccount.into_response().status(),
            StatusCode::CONFLICT
        );
    }

    #[test]
    fn credential_errors_keep_their_stages_apart() {
        // регистрация и логин падают с разными статусами
        assert_eq!(
            ServiceError::PasswordMismatch.into_response().status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ServiceError::BadCredentials.into_response().status(),
            StatusCode::UNAUTHORIZED
        );
    }
}
