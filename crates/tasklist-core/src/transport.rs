use std::fmt;

use async_trait::async_trait;
use serde_json::Value as JsonValue;

use crate::error::ApiResult;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
)]
pub enum HttpMethod {
  Get,
  Post,
  Patch,
  Delete
}

impl HttpMethod {
  pub fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Patch => "PATCH",
      | Self::Delete => "DELETE"
    }
  }
}

impl fmt::Display for HttpMethod {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A fully resolved request, ready to hand to a [`Transport`].
#[derive(Clone, PartialEq)]
pub struct ApiRequest {
  pub method:        HttpMethod,
  /// Absolute URL without query string.
  pub url:           String,
  pub query:         Vec<(String, String)>,
  pub body:          Option<JsonValue>,
  /// Value of the `Authorization` header, if any.
  pub authorization: Option<String>
}

impl fmt::Debug for ApiRequest {
  fn fmt(
    &self,
    f: &mut fmt::Formatter<'_>
  ) -> fmt::Result {
    f.debug_struct("ApiRequest")
      .field("method", &self.method)
      .field("url", &self.url)
      .field("query", &self.query)
      .field("body", &self.body)
      .field(
        "authorization",
        &self
          .authorization
          .as_ref()
          .map(|_| "<redacted>")
      )
      .finish()
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
  pub status: u16,
  pub body:   String
}

impl ApiResponse {
  pub fn is_success(&self) -> bool {
    (200..300).contains(&self.status)
  }
}

/// Sends requests to the API. The browser build uses `fetch`; tests plug in
/// an in-memory backend.
///
/// Futures are not required to be `Send`: everything runs on the single UI
/// thread.
#[async_trait(?Send)]
pub trait Transport {
  async fn send(
    &self,
    request: ApiRequest
  ) -> ApiResult<ApiResponse>;
}
