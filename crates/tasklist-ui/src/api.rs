use async_trait::async_trait;
use gloo::net::http::{
  Request,
  RequestBuilder
};
use tasklist_core::transport::{
  ApiRequest,
  ApiResponse,
  HttpMethod,
  Transport
};
use tasklist_core::{
  ApiError,
  ApiResult
};

/// `fetch`-backed transport for the browser.
#[derive(
  Debug,
  Clone,
  Copy,
  Default,
  PartialEq,
  Eq,
)]
pub struct BrowserTransport;

fn builder_for(
  method: HttpMethod,
  url: &str
) -> RequestBuilder {
  match method {
    | HttpMethod::Get => Request::get(url),
    | HttpMethod::Post => {
      Request::post(url)
    }
    | HttpMethod::Patch => {
      Request::patch(url)
    }
    | HttpMethod::Delete => {
      Request::delete(url)
    }
  }
}

#[async_trait(?Send)]
impl Transport for BrowserTransport {
  async fn send(
    &self,
    request: ApiRequest
  ) -> ApiResult<ApiResponse> {
    let mut builder = builder_for(
      request.method,
      &request.url
    );
    if let Some(value) =
      request.authorization.as_deref()
    {
      builder = builder
        .header("Authorization", value);
    }
    if !request.query.is_empty() {
      builder = builder.query(
        request.query.iter().map(
          |(key, value)| {
            (key.as_str(), value.as_str())
          }
        )
      );
    }

    let prepared = match &request.body {
      | Some(body) => builder.json(body),
      | None => builder.build()
    }
    .map_err(|err| {
      ApiError::transport(format!(
        "failed to build request: {err}"
      ))
    })?;

    let response = prepared
      .send()
      .await
      .map_err(|err| {
        tracing::error!(
          method = %request.method,
          url = %request.url,
          error = %err,
          "request failed"
        );
        ApiError::transport(
          err.to_string()
        )
      })?;

    let status = response.status();
    let body =
      response.text().await.map_err(
        |err| {
          ApiError::transport(format!(
            "failed to read response \
             body: {err}"
          ))
        }
      )?;

    Ok(ApiResponse {
      status,
      body
    })
  }
}
