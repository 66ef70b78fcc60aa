//! Typed client for the tasklist HTTP API.

use percent_encoding::{
  AsciiSet,
  NON_ALPHANUMERIC,
  utf8_percent_encode
};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tasklist_shared::{
  ApiErrorBody,
  ListCreate,
  ListDto,
  LoginRequest,
  LoginResponse,
  SignupRequest,
  TaskCreate,
  TaskDto,
  TaskPatch,
  UserProfile
};
use tracing::{
  debug,
  warn
};

use crate::error::{
  ApiError,
  ApiResult
};
use crate::session::AuthHeader;
use crate::transport::{
  ApiRequest,
  ApiResponse,
  HttpMethod,
  Transport
};

/// Characters left untouched in a path segment.
const SEGMENT: &AsciiSet =
  &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

fn segment(raw: &str) -> String {
  utf8_percent_encode(raw, SEGMENT)
    .to_string()
}

#[derive(Debug, Clone)]
pub struct ApiClient<T> {
  transport: T,
  base_url:  String,
  auth:      AuthHeader
}

impl<T: Transport> ApiClient<T> {
  pub fn new(
    transport: T,
    base_url: impl Into<String>,
    auth: AuthHeader
  ) -> Self {
    let base_url = base_url
      .into()
      .trim_end_matches('/')
      .to_string();
    Self {
      transport,
      base_url,
      auth
    }
  }

  #[tracing::instrument(skip_all)]
  pub async fn login(
    &self,
    request: &LoginRequest
  ) -> ApiResult<LoginResponse> {
    self
      .send_json(
        HttpMethod::Post,
        "/auth/login".to_string(),
        vec![],
        Some(request)
      )
      .await
  }

  #[tracing::instrument(skip_all)]
  pub async fn signup(
    &self,
    request: &SignupRequest
  ) -> ApiResult<()> {
    self
      .send_unit(
        HttpMethod::Post,
        "/users/signup".to_string(),
        vec![],
        Some(request)
      )
      .await
  }

  #[tracing::instrument(skip(self))]
  pub async fn profile(
    &self
  ) -> ApiResult<UserProfile> {
    self
      .send_json::<_, ()>(
        HttpMethod::Get,
        "/users/profile".to_string(),
        vec![],
        None
      )
      .await
  }

  #[tracing::instrument(skip(self))]
  pub async fn lists(
    &self
  ) -> ApiResult<Vec<ListDto>> {
    self
      .send_json::<_, ()>(
        HttpMethod::Get,
        "/lists".to_string(),
        vec![],
        None
      )
      .await
  }

  /// The created list is not needed by callers, which re-fetch instead,
  /// so the response body is not decoded.
  #[tracing::instrument(skip(self))]
  pub async fn create_list(
    &self,
    request: &ListCreate
  ) -> ApiResult<()> {
    self
      .send_unit(
        HttpMethod::Post,
        "/lists".to_string(),
        vec![],
        Some(request)
      )
      .await
  }

  #[tracing::instrument(skip(self))]
  pub async fn delete_list(
    &self,
    list_id: &str
  ) -> ApiResult<()> {
    self
      .send_unit::<()>(
        HttpMethod::Delete,
        format!(
          "/lists/{}",
          segment(list_id)
        ),
        vec![],
        None
      )
      .await
  }

  /// One partition of a list's tasks.
  #[tracing::instrument(skip(self))]
  pub async fn tasks(
    &self,
    list_id: &str,
    completed: bool
  ) -> ApiResult<Vec<TaskDto>> {
    self
      .send_json::<_, ()>(
        HttpMethod::Get,
        format!(
          "/lists/{}/tasks",
          segment(list_id)
        ),
        vec![(
          "completed".to_string(),
          completed.to_string()
        )],
        None
      )
      .await
  }

  #[tracing::instrument(skip(self))]
  pub async fn create_task(
    &self,
    list_id: &str,
    request: &TaskCreate
  ) -> ApiResult<()> {
    self
      .send_unit(
        HttpMethod::Post,
        format!(
          "/lists/{}/tasks",
          segment(list_id)
        ),
        vec![],
        Some(request)
      )
      .await
  }

  #[tracing::instrument(skip(self))]
  pub async fn task(
    &self,
    task_id: &str
  ) -> ApiResult<TaskDto> {
    self
      .send_json::<_, ()>(
        HttpMethod::Get,
        format!(
          "/tasks/{}",
          segment(task_id)
        ),
        vec![],
        None
      )
      .await
  }

  #[tracing::instrument(skip(self))]
  pub async fn update_task(
    &self,
    task_id: &str,
    patch: &TaskPatch
  ) -> ApiResult<()> {
    self
      .send_unit(
        HttpMethod::Patch,
        format!(
          "/tasks/{}",
          segment(task_id)
        ),
        vec![],
        Some(patch)
      )
      .await
  }

  #[tracing::instrument(skip(self))]
  pub async fn delete_task(
    &self,
    task_id: &str
  ) -> ApiResult<()> {
    self
      .send_unit::<()>(
        HttpMethod::Delete,
        format!(
          "/tasks/{}",
          segment(task_id)
        ),
        vec![],
        None
      )
      .await
  }

  async fn send_json<R, B>(
    &self,
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<&B>
  ) -> ApiResult<R>
  where
    R: DeserializeOwned,
    B: Serialize + ?Sized
  {
    let response = self
      .dispatch(method, path, query, body)
      .await?;
    serde_json::from_str(&response.body)
      .map_err(|err| {
        ApiError::decode(err.to_string())
      })
  }

  async fn send_unit<B>(
    &self,
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<&B>
  ) -> ApiResult<()>
  where
    B: Serialize + ?Sized
  {
    self
      .dispatch(method, path, query, body)
      .await
      .map(|_| ())
  }

  async fn dispatch<B>(
    &self,
    method: HttpMethod,
    path: String,
    query: Vec<(String, String)>,
    body: Option<&B>
  ) -> ApiResult<ApiResponse>
  where
    B: Serialize + ?Sized
  {
    let body = body
      .map(serde_json::to_value)
      .transpose()
      .map_err(|err| {
        ApiError::decode(format!(
          "failed to encode body: {err}"
        ))
      })?;

    let request = ApiRequest {
      method,
      url: format!(
        "{}{}",
        self.base_url, path
      ),
      query,
      body,
      authorization: self.auth.value()
    };

    debug!(
      method = %request.method,
      url = %request.url,
      authorized = request.authorization.is_some(),
      "sending api request"
    );

    let response = self
      .transport
      .send(request)
      .await
      .inspect_err(|err| {
        warn!(
          %method,
          path = %path,
          error = %err,
          "api request did not complete"
        );
      })?;

    if response.is_success() {
      debug!(
        %method,
        path = %path,
        status = response.status,
        "api request succeeded"
      );
      return Ok(response);
    }

    let err = error_from_response(
      &response
    );
    warn!(
      %method,
      path = %path,
      status = response.status,
      error = %err,
      "api request rejected"
    );
    Err(err)
  }
}

fn error_from_response(
  response: &ApiResponse
) -> ApiError {
  let message =
    serde_json::from_str::<ApiErrorBody>(
      &response.body
    )
    .ok()
    .and_then(|body| {
      body.message_text()
    });

  match message {
    | Some(message) => {
      ApiError::Server {
        status: response.status,
        message
      }
    }
    | None => {
      ApiError::Status(response.status)
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn segments_are_percent_encoded() {
    assert_eq!(segment("abc-1_2.3~"), "abc-1_2.3~");
    assert_eq!(segment("a/b c"), "a%2Fb%20c");
  }

  #[test]
  fn rejected_response_maps_message_or_status()
  {
    let with_message = ApiResponse {
      status: 401,
      body:   r#"{"message":"Invalid credentials"}"#
        .to_string()
    };
    assert_eq!(
      error_from_response(&with_message),
      ApiError::Server {
        status:  401,
        message: "Invalid credentials"
          .to_string()
      }
    );

    let html = ApiResponse {
      status: 502,
      body:   "<html>bad gateway</html>"
        .to_string()
    };
    assert_eq!(
      error_from_response(&html),
      ApiError::Status(502)
    );
  }
}
