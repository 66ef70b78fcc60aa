use serde::{
  Deserialize,
  Deserializer,
  Serialize
};
use serde_json::Value as JsonValue;

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
pub struct ListDto {
  #[serde(deserialize_with = "deserialize_id")]
  pub id:   String,
  pub name: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskDto {
  #[serde(deserialize_with = "deserialize_id")]
  pub id:         String,
  pub short_desc: String,
  #[serde(default)]
  pub long_desc:  Option<String>,
  pub due_date:   String,
  #[serde(default)]
  pub created_at: Option<String>,
  #[serde(default)]
  pub completed:  bool
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
  #[serde(default)]
  pub first_name: String,
  #[serde(default)]
  pub last_name:  String,
  #[serde(default)]
  pub email:      String
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct LoginRequest {
  pub email:    String,
  pub password: String
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct LoginResponse {
  pub access_token: String
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
  pub first_name: String,
  pub last_name:  String,
  pub email:      String,
  pub password:   String
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct ListCreate {
  pub name: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
  pub short_desc: String,
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub long_desc:  Option<String>,
  pub due_date:   String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
  PartialEq,
  Eq,
)]
pub struct TaskPatch {
  #[serde(
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub completed: Option<bool>
}

impl TaskPatch {
  pub fn completed(
    completed: bool
  ) -> Self {
    Self {
      completed: Some(completed)
    }
  }
}

/// Error payload returned by the API.
///
/// `message` is a plain string for most failures but validation errors
/// carry one entry per rejected field.
#[derive(
  Debug, Clone, Deserialize, Default,
)]
pub struct ApiErrorBody {
  #[serde(default)]
  pub message: Option<ErrorMessage>
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessage {
  Text(String),
  Many(Vec<String>)
}

impl ApiErrorBody {
  pub fn message_text(
    &self
  ) -> Option<String> {
    let text = match self
      .message
      .as_ref()?
    {
      | ErrorMessage::Text(text) => {
        text.trim().to_string()
      }
      | ErrorMessage::Many(items) => {
        items
          .iter()
          .map(|item| item.trim())
          .filter(|item| {
            !item.is_empty()
          })
          .collect::<Vec<_>>()
          .join(", ")
      }
    };

    if text.is_empty() {
      None
    } else {
      Some(text)
    }
  }
}

/// Accepts ids serialized either as JSON strings or numbers.
fn deserialize_id<'de, D>(
  deserializer: D
) -> Result<String, D::Error>
where
  D: Deserializer<'de>
{
  use serde::de::Error;

  match JsonValue::deserialize(
    deserializer
  )? {
    | JsonValue::String(id) => Ok(id),
    | JsonValue::Number(id) => {
      Ok(id.to_string())
    }
    | _ => {
      Err(D::Error::custom(
        "expected string or number \
         for id"
      ))
    }
  }
}
