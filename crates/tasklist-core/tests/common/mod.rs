#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{
  Value,
  json
};
use tasklist_core::session::{
  AuthHeader,
  MemoryStorage,
  Session
};
use tasklist_core::transport::{
  ApiRequest,
  ApiResponse,
  HttpMethod,
  Transport
};
use tasklist_core::{
  ApiClient,
  ApiResult
};
use tasklist_shared::{
  ListDto,
  TaskDto
};

pub const BASE_URL: &str =
  "http://api.test";
pub const EMAIL: &str =
  "alice@example.com";
pub const PASSWORD: &str = "secret";
pub const TOKEN: &str = "token-alice";

#[derive(Default)]
struct BackendState {
  next_id:  u64,
  lists:    Vec<ListDto>,
  /// (list id, task)
  tasks:    Vec<(String, TaskDto)>,
  requests: Vec<ApiRequest>,
  delays:   HashMap<String, u64>,
  failures:
    HashMap<(HttpMethod, String), (u16, String)>
}

/// In-memory stand-in for the tasklist API.
#[derive(Clone, Default)]
pub struct FakeBackend {
  state: Rc<RefCell<BackendState>>
}

impl FakeBackend {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn client(
    &self,
    auth: AuthHeader
  ) -> ApiClient<FakeBackend> {
    ApiClient::new(
      self.clone(),
      format!("{BASE_URL}/"),
      auth
    )
  }

  pub fn requests(&self) -> Vec<ApiRequest> {
    self.state.borrow().requests.clone()
  }

  pub fn request_count(&self) -> usize {
    self.state.borrow().requests.len()
  }

  pub fn last_request(
    &self
  ) -> Option<ApiRequest> {
    self
      .state
      .borrow()
      .requests
      .last()
      .cloned()
  }

  /// Delays every response for `path` (no query string).
  pub fn delay(
    &self,
    path: &str,
    millis: u64
  ) {
    self
      .state
      .borrow_mut()
      .delays
      .insert(path.to_string(), millis);
  }

  /// Answers every `method` request for `path` with a canned response.
  pub fn stub(
    &self,
    method: HttpMethod,
    path: &str,
    status: u16,
    body: &str
  ) {
    self.state.borrow_mut().failures.insert(
      (method, path.to_string()),
      (status, body.to_string())
    );
  }

  pub fn fail(
    &self,
    method: HttpMethod,
    path: &str,
    status: u16,
    body: &str
  ) {
    self.stub(method, path, status, body);
  }

  pub fn clear_failures(&self) {
    self
      .state
      .borrow_mut()
      .failures
      .clear();
  }

  pub fn seed_list(
    &self,
    name: &str
  ) -> ListDto {
    let mut state = self.state.borrow_mut();
    state.next_id += 1;
    let list = ListDto {
      id:   state.next_id.to_string(),
      name: name.to_string()
    };
    state.lists.push(list.clone());
    list
  }

  pub fn seed_task(
    &self,
    list_id: &str,
    short_desc: &str,
    completed: bool
  ) -> TaskDto {
    let mut state = self.state.borrow_mut();
    state.next_id += 1;
    let task = TaskDto {
      id: state.next_id.to_string(),
      short_desc: short_desc.to_string(),
      long_desc: None,
      due_date: "2024-01-01".to_string(),
      created_at: Some(
        "2023-12-31T12:00:00.000Z"
          .to_string()
      ),
      completed
    };
    state
      .tasks
      .push((list_id.to_string(), task.clone()));
    task
  }

  pub fn list_names(&self) -> Vec<String> {
    self
      .state
      .borrow()
      .lists
      .iter()
      .map(|list| list.name.clone())
      .collect()
  }

  pub fn task_count(
    &self,
    list_id: &str
  ) -> usize {
    self
      .state
      .borrow()
      .tasks
      .iter()
      .filter(|(owner, _)| owner == list_id)
      .count()
  }
}

fn respond(
  status: u16,
  body: Value
) -> ApiResponse {
  ApiResponse {
    status,
    body: body.to_string()
  }
}

fn not_found(what: &str) -> ApiResponse {
  respond(
    404,
    json!({ "message": format!("{what} not found"), "statusCode": 404 })
  )
}

#[async_trait(?Send)]
impl Transport for FakeBackend {
  async fn send(
    &self,
    request: ApiRequest
  ) -> ApiResult<ApiResponse> {
    let path = request
      .url
      .strip_prefix(BASE_URL)
      .unwrap_or(&request.url)
      .to_string();

    let delay = {
      let mut state =
        self.state.borrow_mut();
      state.requests.push(request.clone());
      state.delays.get(&path).copied()
    };
    if let Some(millis) = delay {
      tokio::time::sleep(
        Duration::from_millis(millis)
      )
      .await;
    }

    let mut state = self.state.borrow_mut();
    if let Some((status, body)) = state
      .failures
      .get(&(request.method, path.clone()))
    {
      return Ok(ApiResponse {
        status: *status,
        body:   body.clone()
      });
    }

    let public = matches!(
      path.as_str(),
      "/auth/login" | "/users/signup"
    );
    let expected = format!("Bearer {TOKEN}");
    if !public
      && request.authorization.as_deref()
        != Some(expected.as_str())
    {
      return Ok(respond(
        401,
        json!({ "message": "Unauthorized", "statusCode": 401 })
      ));
    }

    let body = request
      .body
      .clone()
      .unwrap_or(Value::Null);
    let segments: Vec<&str> = path
      .split('/')
      .filter(|s| !s.is_empty())
      .collect();

    let response = match (
      request.method,
      segments.as_slice()
    ) {
      | (HttpMethod::Post, ["auth", "login"]) => {
        if body["email"] == EMAIL
          && body["password"] == PASSWORD
        {
          respond(
            201,
            json!({ "access_token": TOKEN })
          )
        } else {
          respond(
            401,
            json!({ "message": "Invalid credentials", "statusCode": 401 })
          )
        }
      }
      | (HttpMethod::Post, ["users", "signup"]) => {
        if body["email"] == EMAIL {
          respond(
            409,
            json!({ "message": "Email already registered" })
          )
        } else {
          state.next_id += 1;
          respond(
            201,
            json!({
                "id": state.next_id.to_string(),
                "email": body["email"],
                "firstName": body["firstName"],
                "lastName": body["lastName"]
            })
          )
        }
      }
      | (HttpMethod::Get, ["users", "profile"]) => {
        respond(
          200,
          json!({ "firstName": "Alice", "lastName": "Liddell", "email": EMAIL })
        )
      }
      | (HttpMethod::Get, ["lists"]) => {
        respond(200, json!(state.lists))
      }
      | (HttpMethod::Post, ["lists"]) => {
        state.next_id += 1;
        let list = ListDto {
          id:   state.next_id.to_string(),
          name: body["name"]
            .as_str()
            .unwrap_or_default()
            .to_string()
        };
        state.lists.push(list.clone());
        respond(201, json!(list))
      }
      | (HttpMethod::Delete, ["lists", id]) => {
        let id = (*id).to_string();
        if state
          .lists
          .iter()
          .any(|list| list.id == id)
        {
          state
            .lists
            .retain(|list| list.id != id);
          state
            .tasks
            .retain(|(list_id, _)| *list_id != id);
          respond(200, json!({}))
        } else {
          not_found("List")
        }
      }
      | (
        HttpMethod::Get,
        ["lists", id, "tasks"],
      ) => {
        let completed = request
          .query
          .iter()
          .find(|(key, _)| key == "completed")
          .map(|(_, value)| value == "true");
        let tasks: Vec<&TaskDto> = state
          .tasks
          .iter()
          .filter(|(list_id, task)| {
            list_id.as_str() == *id
              && completed.is_none_or(
                |flag| task.completed == flag
              )
          })
          .map(|(_, task)| task)
          .collect();
        respond(200, json!(tasks))
      }
      | (
        HttpMethod::Post,
        ["lists", id, "tasks"],
      ) => {
        let list_id = (*id).to_string();
        if !state
          .lists
          .iter()
          .any(|list| list.id == list_id)
        {
          not_found("List")
        } else {
          state.next_id += 1;
          let task = TaskDto {
            id: state.next_id.to_string(),
            short_desc: body["shortDesc"]
              .as_str()
              .unwrap_or_default()
              .to_string(),
            long_desc: body["longDesc"]
              .as_str()
              .map(str::to_string),
            due_date: body["dueDate"]
              .as_str()
              .unwrap_or_default()
              .to_string(),
            created_at: Some(
              "2023-12-31T12:00:00.000Z"
                .to_string()
            ),
            completed: false
          };
          state
            .tasks
            .push((list_id, task.clone()));
          respond(201, json!(task))
        }
      }
      | (HttpMethod::Get, ["tasks", id]) => {
        match state
          .tasks
          .iter()
          .find(|(_, task)| task.id == *id)
        {
          | Some((_, task)) => {
            respond(200, json!(task))
          }
          | None => not_found("Task")
        }
      }
      | (HttpMethod::Patch, ["tasks", id]) => {
        let id = (*id).to_string();
        match state
          .tasks
          .iter_mut()
          .find(|(_, task)| task.id == id)
        {
          | Some((_, task)) => {
            if let Some(completed) =
              body["completed"].as_bool()
            {
              task.completed = completed;
            }
            respond(200, json!(task))
          }
          | None => not_found("Task")
        }
      }
      | (HttpMethod::Delete, ["tasks", id]) => {
        let id = (*id).to_string();
        let before = state.tasks.len();
        state
          .tasks
          .retain(|(_, task)| task.id != id);
        if state.tasks.len() < before {
          respond(200, json!({}))
        } else {
          not_found("Task")
        }
      }
      | _ => not_found("Route")
    };

    Ok(response)
  }
}

/// A fresh session over `storage`, as after a page load.
pub fn boot(
  backend: &FakeBackend,
  storage: MemoryStorage
) -> (
  Session<MemoryStorage>,
  ApiClient<FakeBackend>
) {
  let header = AuthHeader::new();
  let session =
    Session::restore(storage, header.clone());
  let client = backend.client(header);
  (session, client)
}
