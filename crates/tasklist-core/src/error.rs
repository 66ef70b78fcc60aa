//! Failures raised while talking to the tasklist API.

use thiserror::Error;

#[derive(
  Error, Debug, Clone, PartialEq, Eq,
)]
pub enum ApiError {
  /// Rejected request whose body carried a `message`.
  #[error("server rejected request ({status}): {message}")]
  Server {
    status:  u16,
    message: String
  },

  /// Non-success status without a usable message.
  #[error("request failed with status {0}")]
  Status(u16),

  #[error("transport error: {0}")]
  Transport(String),

  #[error("decode error: {0}")]
  Decode(String)
}

impl ApiError {
  pub fn transport(
    msg: impl Into<String>
  ) -> Self {
    Self::Transport(msg.into())
  }

  pub fn decode(
    msg: impl Into<String>
  ) -> Self {
    Self::Decode(msg.into())
  }

  /// The text shown to the user: the server message verbatim when one was
  /// provided, otherwise `fallback`.
  pub fn user_message(
    &self,
    fallback: &str
  ) -> String {
    match self {
      | Self::Server {
        message,
        ..
      } => message.clone(),
      | _ => fallback.to_string()
    }
  }
}

pub type ApiResult<T> =
  std::result::Result<T, ApiError>;
