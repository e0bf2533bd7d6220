use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub phone: String,
    // Пароль хранится открытым текстом (унаследованный изъян), наружу не отдаем
    #[serde(skip_serializing)]
    pub password: String,
    pub registered_at: NaiveDateTime,
}

/// Форма регистрации: декларативные проверки полей плюс повтор пароля.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegistrationForm {
    #[validate(length(min = 1, message = "Имя не должно быть пустым"))]
    pub username: String,
    #[validate(email(message = "Некорректный почтовый адрес"))]
    pub email: String,
    #[validate(custom(
        function = validate_phone,
        message = "Телефон должен иметь формат: + и 11 цифр"
    ))]
    pub phone: String,
    #[validate(length(min = 1, message = "Пароль не должен быть пустым"))]
    pub password: String,
    pub repassword: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

// Формат телефона: '+' и ровно 11 цифр
fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let mut chars = phone.chars();
    if chars.next() == Some('+') {
        let digits: Vec<char> = chars.collect();
        if digits.len() == 11 && digits.iter().all(|c| c.is_ascii_digit()) {
            return Ok(());
        }
    }
    Err(ValidationError::new("phone"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form() -> RegistrationForm {
        RegistrationForm {
            username: "ivanov".to_string(),
            email: "ivanov@mail.ru".to_string(),
            phone: "+79998887766".to_string(),
            password: "password".to_string(),
            repassword: "password".to_string(),
        }
    }

    #[test]
    fn valid_form_passes() {
        assert!(form().validate().is_ok());
    }

    #[test]
    fn blank_username_is_rejected() {
        let mut f = form();
        f.username = String::new();
        let errors = f.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn malformed_email_is_rejected() {
        let mut f = form();
        f.email = "not-an-email".to_string();
        assert!(f.validate().is_err());
    }

    #[test]
    fn phone_requires_plus_and_eleven_digits() {
        for bad in ["79998887766", "+7999888776", "+799988877665", "+7999888776a", ""] {
            let mut f = form();
            f.phone = bad.to_string();
            assert!(f.validate().is_err(), "phone {:?} should be rejected", bad);
        }
    }
}
