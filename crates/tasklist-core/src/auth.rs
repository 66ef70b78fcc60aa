//! Login and signup forms.

use tasklist_shared::{
  LoginRequest,
  SignupRequest
};
use tracing::info;

use crate::client::ApiClient;
use crate::session::Credential;
use crate::transport::Transport;

pub const LOGIN_REQUIRED: &str =
  "Email and password are required";
pub const SIGNUP_REQUIRED: &str =
  "All fields are required";
pub const EMAIL_MISMATCH: &str =
  "Email and confirmation email do not \
   match.";
pub const PASSWORD_MISMATCH: &str =
  "Password and confirmation password \
   do not match.";
pub const UNEXPECTED_ERROR: &str =
  "An unexpected error occurred";
pub const SIGNUP_SUCCESS: &str =
  "Account created! Redirecting to \
   login...";

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct LoginForm {
  pub email:    String,
  pub password: String
}

impl LoginForm {
  pub fn validate(
    &self
  ) -> Result<LoginRequest, String> {
    let email = self.email.trim();
    if email.is_empty()
      || self.password.is_empty()
    {
      return Err(
        LOGIN_REQUIRED.to_string()
      );
    }
    Ok(LoginRequest {
      email:    email.to_string(),
      password: self.password.clone()
    })
  }
}

#[derive(
  Debug,
  Clone,
  Default,
  PartialEq,
  Eq,
)]
pub struct SignupForm {
  pub first_name:       String,
  pub last_name:        String,
  pub email:            String,
  pub confirm_email:    String,
  pub password:         String,
  pub confirm_password: String
}

impl SignupForm {
  pub fn validate(
    &self
  ) -> Result<SignupRequest, String> {
    let required = [
      self.first_name.trim(),
      self.last_name.trim(),
      self.email.trim(),
      self.confirm_email.trim(),
      self.password.as_str(),
      self.confirm_password.as_str()
    ];
    if required
      .iter()
      .any(|value| value.is_empty())
    {
      return Err(
        SIGNUP_REQUIRED.to_string()
      );
    }
    if self.email.trim()
      != self.confirm_email.trim()
    {
      return Err(
        EMAIL_MISMATCH.to_string()
      );
    }
    if self.password
      != self.confirm_password
    {
      return Err(
        PASSWORD_MISMATCH.to_string()
      );
    }

    Ok(SignupRequest {
      first_name: self
        .first_name
        .trim()
        .to_string(),
      last_name:  self
        .last_name
        .trim()
        .to_string(),
      email:      self
        .email
        .trim()
        .to_string(),
      password:   self.password.clone()
    })
  }
}

/// Exchanges a login form for a credential. The caller hands the credential
/// to the session store, which is the only place that persists it.
pub async fn login<T: Transport>(
  client: &ApiClient<T>,
  form: &LoginForm
) -> Result<Credential, String> {
  let request = form.validate()?;
  let response = client
    .login(&request)
    .await
    .map_err(|err| {
      err.user_message(UNEXPECTED_ERROR)
    })?;

  let credential =
    Credential::new(response.access_token)
      .ok_or_else(|| {
        UNEXPECTED_ERROR.to_string()
      })?;
  info!("login succeeded");
  Ok(credential)
}

/// Creates an account. Returns the success banner text.
pub async fn signup<T: Transport>(
  client: &ApiClient<T>,
  form: &SignupForm
) -> Result<&'static str, String> {
  let request = form.validate()?;
  client
    .signup(&request)
    .await
    .map_err(|err| {
      err.user_message(UNEXPECTED_ERROR)
    })?;
  info!("account created");
  Ok(SIGNUP_SUCCESS)
}
