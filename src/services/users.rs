use validator::Validate;

use crate::error::{is_unique_violation, ServiceError};
use crate::models::{LoginForm, RegistrationForm, User};
use crate::repository::UserRepository;

/// Сервис пользователей: регистрация, проверка входа и CRUD.
#[derive(Clone)]
pub struct UserService {
    users: UserRepository,
}

impl UserService {
    pub fn new(users: UserRepository) -> Self {
        UserService { users }
    }

    /// Регистрация: проверки полей, совпадение паролей, занятость email.
    /// До базы дело доходит только после всех проверок.
    pub async fn register(&self, form: RegistrationForm) -> Result<User, ServiceError> {
        precheck(&form)?;
        if self.users.find_by_email(&form.email).await?.is_some() {
            return Err(ServiceError::DuplicateAccount);
        }
        match self.users.save(&form).await {
            Ok(user) => Ok(user),
            // проигранная гонка за email или телефон
            Err(e) if is_unique_violation(&e) => Err(ServiceError::DuplicateAccount),
            Err(e) => Err(e.into()),
        }
    }

    /// Проверка входа: поиск по email, затем точное сравнение пароля.
    /// Отметить вызывающего аутентифицированным - забота слоя выше.
    pub async fn validate_login(&self, form: &LoginForm) -> Result<User, ServiceError> {
        let user = self.users.find_by_email(&form.email).await?.ok_or_else(|| {
            ServiceError::NotFound(format!("Пользователь с email = {} не найден", form.email))
        })?;
        if user.password != form.password {
            return Err(ServiceError::BadCredentials);
        }
        Ok(user)
    }

    pub async fn find_all(&self) -> Result<Vec<User>, ServiceError> {
        Ok(self.users.find_all().await?)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<User, ServiceError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("Пользователь с id = {id} не найден")))
    }

    pub async fn update(&self, user: &User) -> Result<(), ServiceError> {
        if !self.users.update(user).await? {
            return Err(ServiceError::NotFound(format!(
                "Пользователь с id = {} не найден",
                user.id
            )));
        }
        Ok(())
    }

    pub async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        if !self.users.delete_by_id(id).await? {
            return Err(ServiceError::NotFound(format!(
                "Пользователь с id = {id} не найден"
            )));
        }
        Ok(())
    }
}

// Чистая часть регистрации, идет строго до обращений к базе
fn precheck(form: &RegistrationForm) -> Result<(), ServiceError> {
    form.validate()?;
    if form.password != form.repassword {
        return Err(ServiceError::PasswordMismatch);
    }
    Ok(())
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
    fn precheck_accepts_a_valid_form() {
        assert!(precheck(&form()).is_ok());
    }

    #[test]
    fn mismatched_passwords_fail_before_any_persistence() {
        let mut f = form();
        f.repassword = "other".to_string();
        assert!(matches!(
            precheck(&f),
            Err(ServiceError::PasswordMismatch)
        ));
    }

    #[test]
    fn field_violations_win_over_password_mismatch() {
        let mut f = form();
        f.email = "broken".to_string();
        f.repassword = "other".to_string();
        assert!(matches!(precheck(&f), Err(ServiceError::Validation(_))));
    }
}
