//! Signup form

use shared::client::SignupRequest;
use shared::models::MenuState;
use shared::validate;

use crate::ClientResult;

/// Account details collected on the publish screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignupForm {
    pub fn new(
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Validate and attach the menu snapshot
    pub fn into_request(self, menu: &MenuState) -> ClientResult<SignupRequest> {
        let (email, password) =
            validate::signup(&self.email, &self.password, &self.confirm_password)?;
        Ok(SignupRequest {
            email,
            password,
            menu_data: Some(menu.clone()),
        })
    }
}
