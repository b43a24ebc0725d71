//! Request shapes for the user endpoints.

use serde::Deserialize;

use crate::api::required;
use crate::database::models::User;
use crate::errors::ApiError;

#[derive(Debug, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl CreateUserRequest {
    pub fn into_user(self) -> Result<User, ApiError> {
        Ok(User::new(
            required(self.name, "name")?,
            required(self.email, "email")?,
            self.phone,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_is_optional() {
        let request = CreateUserRequest {
            name: Some("Asha".into()),
            email: Some("asha@example.in".into()),
            phone: None,
        };
        let user = request.into_user().unwrap();
        assert_eq!(user.phone, None);
        assert_eq!(user.coins, 0);
    }

    #[test]
    fn test_missing_email_names_the_field() {
        let request = CreateUserRequest {
            name: Some("Asha".into()),
            ..Default::default()
        };
        let err = request.into_user().unwrap_err();
        assert_eq!(err.to_string(), "Missing required field: email");
    }
}
