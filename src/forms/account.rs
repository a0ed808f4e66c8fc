use super::required;
use crate::config::MIN_PASSWORD_LEN;
use crate::error::ValidationError;
use crate::models::admin::{ChangePasswordInput, Credentials, RegisterInput};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn to_credentials(&self) -> Result<Credentials, ValidationError> {
        let username = required(&self.username, "Username")?.to_string();
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(Credentials {
            username,
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegisterForm {
    pub name: String,
    pub username: String,
    pub password: String,
}

impl RegisterForm {
    pub fn to_input(&self) -> Result<RegisterInput, ValidationError> {
        let name = required(&self.name, "Name")?.to_string();
        let username = required(&self.username, "Username")?.to_string();
        if self.password.is_empty() {
            return Err(ValidationError::Required("Password"));
        }
        Ok(RegisterInput {
            username,
            password: self.password.clone(),
            name,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangePasswordForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

impl ChangePasswordForm {
    pub fn to_input(&self) -> Result<ChangePasswordInput, ValidationError> {
        if self.current_password.is_empty() {
            return Err(ValidationError::Required("Current password"));
        }
        if self.new_password.is_empty() {
            return Err(ValidationError::Required("New password"));
        }
        if self.new_password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.new_password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort(MIN_PASSWORD_LEN));
        }
        Ok(ChangePasswordInput {
            current_password: self.current_password.clone(),
            new_password: self.new_password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_credentials() {
        let form = LoginForm {
            username: "admin".into(),
            password: String::new(),
        };
        assert_eq!(form.to_credentials(), Err(ValidationError::Required("Password")));

        let form = LoginForm {
            username: " admin ".into(),
            password: "rahasia".into(),
        };
        assert_eq!(form.to_credentials().unwrap().username, "admin");
    }

    #[test]
    fn test_register_requires_all_fields() {
        let form = RegisterForm {
            name: String::new(),
            username: "kasir".into(),
            password: "kasir123".into(),
        };
        assert_eq!(form.to_input(), Err(ValidationError::Required("Name")));
    }

    #[test]
    fn test_change_password_rules() {
        let mut form = ChangePasswordForm {
            current_password: "lama123".into(),
            new_password: "baru456".into(),
            confirm_password: "baru457".into(),
        };
        assert_eq!(form.to_input(), Err(ValidationError::PasswordMismatch));

        form.new_password = "abc".into();
        form.confirm_password = "abc".into();
        assert_eq!(form.to_input(), Err(ValidationError::PasswordTooShort(6)));

        form.new_password = "abcdef".into();
        form.confirm_password = "abcdef".into();
        let input = form.to_input().unwrap();
        assert_eq!(input.new_password, "abcdef");
    }
}
